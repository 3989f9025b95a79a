
// vim: shiftwidth=2

use itertools::Itertools;

/// How secondary stresses ('2') are resolved into metrical stresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeterStrategy {
  /// Every secondary stress may be read either way; one meter per combination.
  #[default]
  Combinatorial,
  /// Secondary stresses are read as unstressed, plus "11" for a bare "12".
  Simplified
}

/// At most four syllables, exactly one primary stress and no stress levels beyond 2.
pub fn is_admissible(stresses: &str) -> bool {
  stresses.len() <= 4
    && stresses.matches('1').count() == 1
    && stresses.chars().all(|c| matches!(c, '0' | '1' | '2'))
}

/// Secondary stresses next to the primary one are generally not metric stresses.
/// Neighbours are looked up in the input, so "212" becomes "010" in one pass.
pub fn demote_secondary_stresses(stresses: &str) -> String {
  let digits: Vec<char> = stresses.chars().collect();
  
  digits.iter().enumerate().map(|(i, &c)| {
    let after_primary = i > 0 && digits[i - 1] == '1';
    let before_primary = digits.get(i + 1) == Some(&'1');
    if c == '2' && (after_primary || before_primary) { '0' } else { c }
  }).collect()
}

fn readings(stress: char) -> Vec<char> {
  match stress {
    '2' => vec!['0', '1'],
    c => vec![c]
  }
}

fn combinatorial_meters(stresses: &str) -> Vec<String> {
  let stresses = if stresses == "12" { stresses.to_owned() } else { demote_secondary_stresses(stresses) };
  
  if stresses.contains("22") {
    return vec![];
  }
  
  stresses.chars()
    .map(|c| readings(c).into_iter())
    .multi_cartesian_product()
    .map(|meter| meter.into_iter().collect())
    .collect()
}

fn simplified_meters(stresses: &str) -> Vec<String> {
  let mut meters = vec![];
  if stresses == "12" {
    meters.push("11".to_owned());
  }
  meters.push(stresses.replace('2', "0"));
  meters
}

impl MeterStrategy {
  /// Candidate meters for a stress string, in a fixed order. Empty if the word is
  /// not metrically usable.
  pub fn meters(&self, stresses: &str) -> Vec<String> {
    if !is_admissible(stresses) {
      return vec![];
    }
    
    match self {
      MeterStrategy::Combinatorial => combinatorial_meters(stresses),
      MeterStrategy::Simplified => simplified_meters(stresses)
    }
  }
}



#[cfg(test)]
mod combinatorial_tests {
  use super::*;
  
  fn meters(stresses: &str) -> Vec<String> {
    MeterStrategy::Combinatorial.meters(stresses)
  }

  #[test]
  fn test_deterministic_stresses() {
    assert_eq!(meters("100"), vec!["100"]);
    assert_eq!(meters("1"), vec!["1"]);
    assert_eq!(meters("010"), vec!["010"]);
  }
  
  #[test]
  fn test_bare_12_is_not_demoted() {
    assert_eq!(meters("12"), vec!["10", "11"]);
    assert_eq!(meters("21"), vec!["01"]);
  }
  
  #[test]
  fn test_secondary_stresses_are_enumerated() {
    assert_eq!(meters("122"), vec!["100", "101"]);
    assert_eq!(meters("2010"), vec!["0010", "1010"]);
    assert_eq!(meters("2102"), vec!["0100", "0101"]);
  }
  
  #[test]
  fn test_adjacent_secondary_stresses_are_rejected() {
    assert_eq!(meters("2221"), Vec::<String>::new());
    assert_eq!(meters("1022"), Vec::<String>::new());
  }
  
  #[test]
  fn test_meter_shape() {
    for stresses in ["1", "12", "21", "122", "212", "2010", "0122", "2102", "0210"] {
      for meter in meters(stresses) {
        assert_eq!(meter.len(), stresses.len());
        assert!(meter.chars().all(|c| c == '0' || c == '1'), "{}", meter);
      }
    }
  }
}
