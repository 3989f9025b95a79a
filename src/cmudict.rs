
// vim: shiftwidth=2

use lazy_static::lazy_static;
use regex::Regex;
use std::{fs, io, path::Path};

/// One headword with the stress digits of one of its pronunciations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StressEntry {
  pub word: String,
  pub stresses: String
}

lazy_static! {
  static ref VARIANT_STRIPPING_RE: Regex = Regex::new(r"\(.*\)").unwrap();
}

/// cmudict-0.7b is not valid UTF-8, so every byte is taken as its Latin-1 code point.
pub fn decode_latin1(bytes: &[u8]) -> String {
  bytes.iter().map(|&b| b as char).collect()
}

pub fn parse_line(line: &str) -> Option<StressEntry> {
  let line = line.trim_start();
  let (word, pronunciation) = line.split_once(char::is_whitespace)?;
  let pronunciation = pronunciation.trim_start();
  
  if pronunciation.is_empty() || word.starts_with(';') {
    return None;
  }
  
  // ABBE(2) -> abbe
  let word = VARIANT_STRIPPING_RE.replace(word, "").to_lowercase();
  if word.is_empty() || !word.chars().all(char::is_alphabetic) {
    return None;
  }
  
  let stresses: String = pronunciation.chars().filter(|c| c.is_ascii_digit()).collect();
  
  Some(StressEntry { word, stresses })
}

pub fn parse_dictionary(text: &str) -> impl Iterator<Item = StressEntry> + '_ {
  text.lines().filter_map(parse_line)
}

pub fn read_stress_entries<P: AsRef<Path>>(path: P) -> io::Result<Vec<StressEntry>> {
  let text = decode_latin1(&fs::read(path)?);
  Ok(parse_dictionary(&text).collect())
}
