
// vim: shiftwidth=2

use std::collections::{BTreeMap, BTreeSet};
use std::{fs, io::{self, Write}, path::{Path, PathBuf}};

use crate::cmudict::{StressEntry, read_stress_entries};
use crate::meters::MeterStrategy;

/// Words grouped by the meters they can fill. Both levels are kept sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeterIndex {
  pub meters: BTreeMap<String, BTreeSet<String>>
}

impl MeterIndex {
  pub fn new() -> MeterIndex {
    MeterIndex { meters: BTreeMap::new() }
  }
  
  pub fn insert(&mut self, meter: String, word: String) {
    self.meters.entry(meter).or_default().insert(word);
  }
  
  pub fn add_entry(&mut self, entry: &StressEntry, strategy: MeterStrategy) {
    for meter in strategy.meters(&entry.stresses) {
      self.insert(meter, entry.word.clone());
    }
  }
  
  pub fn from_entries<'a, I: IntoIterator<Item = &'a StressEntry>>(entries: I, strategy: MeterStrategy) -> MeterIndex {
    let mut index = MeterIndex::new();
    for entry in entries {
      index.add_entry(entry, strategy);
    }
    index
  }
  
  pub fn len(&self) -> usize {
    self.meters.len()
  }
  
  pub fn is_empty(&self) -> bool {
    self.meters.is_empty()
  }
  
  /// Number of distinct words, however many meters each one fills.
  pub fn word_count(&self) -> usize {
    self.meters.values().flatten().collect::<BTreeSet<_>>().len()
  }
  
  /// Writes `<meter>.txt` into `dir` for every meter, one word per line, replacing any
  /// existing file. Stops at the first failure; files written before it stay.
  pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> io::Result<Vec<PathBuf>> {
    let mut written = vec![];
    
    for (meter, words) in &self.meters {
      let path = dir.as_ref().join(format!("{}.txt", meter));
      let mut out_writer = io::BufWriter::new(fs::File::create(&path)?);
      for word in words {
        writeln!(out_writer, "{}", word)?;
      }
      out_writer.flush()?;
      written.push(path);
    }
    
    Ok(written)
  }
}

/// Reads a cmudict-style file and writes its metric dictionary into `out_dir`.
pub fn build_metric_dictionary<P: AsRef<Path>, Q: AsRef<Path>>(input: P, out_dir: Q, strategy: MeterStrategy) -> io::Result<MeterIndex> {
  let entries = read_stress_entries(input)?;
  let index = MeterIndex::from_entries(&entries, strategy);
  index.write_to_dir(out_dir)?;
  Ok(index)
}
