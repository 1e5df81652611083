//! Dataset directory discovery.
//!
//! A dataset root holds one directory per organism, each with an `old.fna`
//! (population source) and a `new.fna` (target source).

use std::fs;
use std::path::{Path, PathBuf};

use super::fasta::{Dataset, DatasetError, parse_fasta};

/// File holding the sequences individuals are sampled from.
pub const POPULATION_FILE: &str = "old.fna";
/// File holding the sequences targets are chosen from.
pub const TARGET_FILE: &str = "new.fna";

/// Named datasets available under a root directory.
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    root: PathBuf,
    names: Vec<String>,
}

impl DatasetCatalog {
    /// List dataset directories under `root`, sorted by name.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let root = root.as_ref().to_path_buf();
        let mut names = Vec::new();
        for entry in fs::read_dir(&root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(Self { root, names })
    }

    /// Dataset names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Load one dataset by name.
    pub fn load(&self, name: &str) -> Result<DatasetPair, DatasetError> {
        if !self.names.iter().any(|n| n == name) {
            return Err(DatasetError::UnknownDataset(name.to_string()));
        }
        DatasetPair::load(&self.root, name)
    }
}

/// Population and target sequences of one dataset.
#[derive(Debug, Clone)]
pub struct DatasetPair {
    /// Dataset name.
    pub name: String,
    /// Sequences individuals are sampled from.
    pub population: Dataset,
    /// Sequences targets are chosen from.
    pub targets: Dataset,
}

impl DatasetPair {
    /// Parse `<root>/<name>/old.fna` and `<root>/<name>/new.fna`.
    pub fn load(root: impl AsRef<Path>, name: &str) -> Result<Self, DatasetError> {
        let dir = root.as_ref().join(name);
        let population = parse_fasta(dir.join(POPULATION_FILE))?;
        let targets = parse_fasta(dir.join(TARGET_FILE))?;
        log::info!(
            "Loaded dataset '{}': {} population records, {} target records",
            name,
            population.len(),
            targets.len()
        );
        Ok(Self {
            name: name.to_string(),
            population,
            targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_dataset(root: &Path, name: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(POPULATION_FILE), ">old\nACGTACGT\n").unwrap();
        fs::write(dir.join(TARGET_FILE), ">new\nTTGGCCAA\n").unwrap();
    }

    #[test]
    fn test_discover_sorted_directories() {
        let root = tempfile::tempdir().unwrap();
        write_dataset(root.path(), "yeast");
        write_dataset(root.path(), "ecoli");
        fs::write(root.path().join("README"), "not a dataset").unwrap();

        let catalog = DatasetCatalog::discover(root.path()).unwrap();
        assert_eq!(catalog.names(), &["ecoli".to_string(), "yeast".to_string()]);
    }

    #[test]
    fn test_load_pair() {
        let root = tempfile::tempdir().unwrap();
        write_dataset(root.path(), "ecoli");

        let catalog = DatasetCatalog::discover(root.path()).unwrap();
        let pair = catalog.load("ecoli").unwrap();
        assert_eq!(pair.population.records()[0].sequence, "ACGTACGT");
        assert_eq!(pair.targets.records()[0].sequence, "TTGGCCAA");
        assert!(matches!(
            catalog.load("missing"),
            Err(DatasetError::UnknownDataset(_))
        ));
    }
}
