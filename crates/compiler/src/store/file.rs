//! File-based blob store.
//!
//! Datasets are stored as JSON files under the output directory:
//! ```text
//! {out_dir}/attributes.json
//! {out_dir}/enemies/firefly.json
//! {out_dir}/weapons/common/commonRustySword.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::{BlobStore, DatasetKey, Result};

/// Blob store writing one JSON file per dataset.
pub struct FileBlobStore {
    base_dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        if !base_dir.exists() {
            fs::create_dir_all(&base_dir)?;
        }

        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the file path for a dataset.
    pub fn dataset_path(&self, key: &DatasetKey) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }

    fn collect(&self, dir: &Path, names: &mut Vec<String>) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                self.collect(&path, names)?;
                continue;
            }
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            if let Ok(relative) = path.with_extension("").strip_prefix(&self.base_dir) {
                let name = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                names.push(name);
            }
        }
        Ok(())
    }
}

impl BlobStore for FileBlobStore {
    fn put(&self, key: &DatasetKey, bytes: &[u8]) -> Result<()> {
        let path = self.dataset_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, bytes)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn get(&self, key: &DatasetKey) -> Result<Option<Vec<u8>>> {
        let path = self.dataset_path(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read(&path)?))
    }

    fn exists(&self, key: &DatasetKey) -> bool {
        self.dataset_path(key).exists()
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        if self.base_dir.exists() {
            self.collect(&self.base_dir, &mut names)?;
        }
        names.sort();
        Ok(names)
    }
}
