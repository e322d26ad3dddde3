//! Reader for the synset and hypernym text files.
//!
//! Synsets file, one synset per line:
//! ```text
//! 36,AND_circuit AND_gate,a circuit in a computer that fires only when all of its inputs fire
//! ```
//! Hypernyms file, a synset id followed by zero or more hypernym ids:
//! ```text
//! 34,47569,48084
//! ```
//! Glosses routinely contain commas and double quotes, so quoting is disabled
//! and everything after the second field is treated as the gloss. Trimming
//! applies to ids and labels only; the gloss keeps its inner spacing.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordNetError};
use crate::wordnet::record::{Hypernym, Synset};

/// Settings for reading synset and hypernym files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Field delimiter.
    pub delimiter: char,
    /// Whether to trim whitespace around ids, labels and the whole gloss.
    pub trim: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            delimiter: ',',
            trim: true,
        }
    }
}

impl LoaderConfig {
    /// Read a loader configuration from a JSON file. Missing keys keep their
    /// default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn reader<R: Read>(&self, input: R) -> Result<csv::Reader<R>> {
        if !self.delimiter.is_ascii() {
            return Err(WordNetError::invalid_argument(format!(
                "delimiter {:?} is not a single-byte character",
                self.delimiter
            )));
        }
        Ok(ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .delimiter(self.delimiter as u8)
            .from_reader(input))
    }

    fn trimmed<'a>(&self, field: &'a str) -> &'a str {
        if self.trim { field.trim() } else { field }
    }
}

/// Read synset records.
pub fn load_synsets<R: Read>(input: R, config: &LoaderConfig) -> Result<Vec<Synset>> {
    let mut reader = config.reader(input)?;
    let separator = config.delimiter.to_string();
    let mut synsets = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = line_of(&record);

        let id = parse_id(record.get(0), line)?;
        let label = match record.get(1) {
            Some(label) if !label.trim().is_empty() => config.trimmed(label).to_string(),
            _ => return Err(WordNetError::parse(line, "missing synset nouns")),
        };
        let gloss = record
            .iter()
            .skip(2)
            .collect::<Vec<_>>()
            .join(separator.as_str());
        let gloss = config.trimmed(&gloss).to_string();

        synsets.push(Synset { id, label, gloss });
    }

    debug!("Read {} synsets", synsets.len());
    Ok(synsets)
}

/// Read hypernym records.
pub fn load_hypernyms<R: Read>(input: R, config: &LoaderConfig) -> Result<Vec<Hypernym>> {
    let mut reader = config.reader(input)?;
    let mut hypernyms = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = line_of(&record);

        let id = parse_id(record.get(0), line)?;
        let ids = record
            .iter()
            .skip(1)
            .filter(|field| !field.trim().is_empty())
            .map(|field| parse_id(Some(field), line))
            .collect::<Result<Vec<_>>>()?;

        hypernyms.push(Hypernym::new(id, ids));
    }

    debug!("Read {} hypernym records", hypernyms.len());
    Ok(hypernyms)
}

/// Read synset records from a file.
pub fn load_synsets_from_path<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Vec<Synset>> {
    load_synsets(File::open(path)?, config)
}

/// Read hypernym records from a file.
pub fn load_hypernyms_from_path<P: AsRef<Path>>(
    path: P,
    config: &LoaderConfig,
) -> Result<Vec<Hypernym>> {
    load_hypernyms(File::open(path)?, config)
}

fn line_of(record: &StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or(0)
}

fn parse_id(field: Option<&str>, line: usize) -> Result<usize> {
    let field = field.map(str::trim).unwrap_or_default();
    field
        .parse::<usize>()
        .map_err(|e| WordNetError::parse(line, format!("invalid synset id '{field}': {e}")))
}
