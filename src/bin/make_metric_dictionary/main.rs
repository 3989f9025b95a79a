
// vim: shiftwidth=2

use std::{io, path::PathBuf};
use clap::Parser;
use console::style;

use metric_dictionary::cmudict::read_stress_entries;
use metric_dictionary::meter_index::MeterIndex;
use metric_dictionary::meters::MeterStrategy;

/// Derives a metric dictionary from the CMU Pronouncing Dictionary
/// (cmudict-0.7b), writing one `<meter>.txt` per meter into the current directory.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  /// Path to the pronunciation dictionary
  #[arg()]
  cmudict: PathBuf,
}

fn main() -> io::Result<()> {
  let args = Args::parse();
  
  let entries = read_stress_entries(&args.cmudict)?;
  println!("Read {} entries from {}", entries.len(), args.cmudict.display());
  
  let index = MeterIndex::from_entries(&entries, MeterStrategy::default());
  println!("Found {} words across {} meters", index.word_count(), index.len());
  
  for path in index.write_to_dir(".")? {
    println!("  {}", style(path.display()).dim());
  }
  
  Ok(())
}
