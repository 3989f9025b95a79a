
pub mod cmudict;
pub mod meters;
pub mod meter_index;
