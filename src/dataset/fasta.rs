//! FASTA parsing and uniform motif splitting.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One FASTA record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastaRecord {
    /// Header text after `>`.
    pub header: String,
    /// Concatenated sequence lines.
    pub sequence: String,
}

/// A parsed FASTA file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<FastaRecord>,
}

impl Dataset {
    /// Build from records directly.
    pub fn from_records(records: Vec<FastaRecord>) -> Self {
        Self { records }
    }

    /// All records in file order.
    pub fn records(&self) -> &[FastaRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cut every record into consecutive, non-overlapping windows of `length`.
    ///
    /// Windows start at offset 0 and a trailing partial window is dropped,
    /// so every returned motif is exactly `length` symbols long.
    pub fn split_uniform(&self, length: usize) -> Result<Vec<String>, DatasetError> {
        if length == 0 {
            return Err(DatasetError::InvalidMotifLength);
        }
        Ok(self
            .records
            .par_iter()
            .flat_map_iter(|record| split_sequence(&record.sequence, length))
            .collect())
    }
}

fn split_sequence(sequence: &str, length: usize) -> impl Iterator<Item = String> + '_ {
    let symbols: Vec<char> = sequence.chars().collect();
    let windows = symbols.len() / length;
    (0..windows).map(move |i| symbols[i * length..(i + 1) * length].iter().collect())
}

/// Parse a FASTA file from disk.
pub fn parse_fasta(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let file = File::open(path)?;
    parse_fasta_reader(BufReader::new(file))
}

/// Parse FASTA text held in memory.
pub fn parse_fasta_str(text: &str) -> Result<Dataset, DatasetError> {
    parse_fasta_reader(text.as_bytes())
}

/// Parse FASTA records from any buffered reader.
///
/// Blank lines are skipped and records without sequence data are dropped.
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<Dataset, DatasetError> {
    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take()
                && !record.sequence.is_empty()
            {
                records.push(record);
            }
            current = Some(FastaRecord {
                header: header.trim().to_string(),
                sequence: String::new(),
            });
        } else {
            match current.as_mut() {
                Some(record) => record.sequence.push_str(line),
                None => return Err(DatasetError::MissingHeader { line: index + 1 }),
            }
        }
    }

    if let Some(record) = current
        && !record.sequence.is_empty()
    {
        records.push(record);
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    log::debug!("Parsed {} FASTA records", records.len());
    Ok(Dataset { records })
}

/// Dataset loading errors.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Sequence data on line {line} before any '>' header")]
    MissingHeader { line: usize },
    #[error("No sequences found in FASTA input")]
    Empty,
    #[error("Motif length must be non-zero")]
    InvalidMotifLength,
    #[error("Dataset '{0}' not found")]
    UnknownDataset(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_fasta_multiline() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">chr1 E. coli").unwrap();
        writeln!(file, "ACGT").unwrap();
        writeln!(file, "ACGT").unwrap();
        writeln!(file).unwrap();
        writeln!(file, ">chr2").unwrap();
        writeln!(file, "TTTT").unwrap();

        let dataset = parse_fasta(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].header, "chr1 E. coli");
        assert_eq!(dataset.records()[0].sequence, "ACGTACGT");
        assert_eq!(dataset.records()[1].sequence, "TTTT");
    }

    #[test]
    fn test_parse_fasta_drops_empty_records() {
        let dataset = parse_fasta_str(">empty\n>full\nACGT\n").unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].header, "full");
    }

    #[test]
    fn test_parse_fasta_empty_input() {
        assert!(matches!(parse_fasta_str(""), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_parse_fasta_missing_header() {
        assert!(matches!(
            parse_fasta_str("ACGT\n>late\nACGT\n"),
            Err(DatasetError::MissingHeader { line: 1 })
        ));
    }

    #[test]
    fn test_parse_fasta_missing_file() {
        assert!(matches!(
            parse_fasta("/nonexistent/path/genome.fna"),
            Err(DatasetError::Io(_))
        ));
    }

    #[test]
    fn test_split_uniform_drops_partial_windows() {
        let dataset = parse_fasta_str(">a\nACGTACGTAC\n>b\nTG\n").unwrap();
        let motifs = dataset.split_uniform(4).unwrap();
        assert_eq!(motifs, vec!["ACGT".to_string(), "ACGT".to_string()]);
    }

    #[test]
    fn test_split_uniform_zero_length() {
        let dataset = parse_fasta_str(">a\nACGT\n").unwrap();
        assert!(matches!(
            dataset.split_uniform(0),
            Err(DatasetError::InvalidMotifLength)
        ));
    }
}
