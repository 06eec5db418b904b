use crate::{vector::Vector, Result};
use anyhow::Context;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// JSON-backed store for named return series. Order is part of the stored
/// data: the file holds the same `(name, series)` sequence it was given,
/// so a reload feeds the analyzer in the original asset order.
pub struct ReturnsStore {
    file_path: std::path::PathBuf,
}

impl ReturnsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn save_series(series: &[(String, Vector)], path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(series)
            .context("Failed to serialize return series to JSON")?;

        let mut file = File::create(path).context("Failed to create file for writing")?;

        file.write_all(json.as_bytes())
            .context("Failed to write return series to file")?;

        Ok(())
    }

    pub fn load_series(path: &Path) -> Result<Vec<(String, Vector)>> {
        let mut file = File::open(path).context("Failed to open file for reading")?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .context("Failed to read file contents")?;

        let series: Vec<(String, Vector)> = serde_json::from_str(&contents)
            .context("Failed to deserialize return series from JSON")?;

        Ok(series)
    }

    pub fn save(&self, series: &[(String, Vector)]) -> Result<()> {
        Self::save_series(series, &self.file_path)
    }

    pub fn load(&self) -> Result<Vec<(String, Vector)>> {
        Self::load_series(&self.file_path)
    }

    pub fn append(&self, name: &str, series: &Vector) -> Result<()> {
        let mut all = if self.file_path.exists() {
            self.load()?
        } else {
            Vec::new()
        };

        all.push((name.to_string(), series.clone()));
        self.save(&all)
    }

    pub fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path).context("Failed to remove existing file")?;
        }
        Ok(())
    }
}
