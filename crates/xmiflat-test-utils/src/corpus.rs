//! Temporary on-disk corpora for batch tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory with an `input/` folder of documents and an
/// `output/` path that does not exist yet.
///
/// The directory is removed when the value is dropped.
pub struct Corpus {
    dir: TempDir,
}

impl Corpus {
    pub fn new() -> io::Result<Self> {
        let dir = TempDir::new()?;
        fs::create_dir(dir.path().join("input"))?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn input(&self) -> PathBuf {
        self.dir.path().join("input")
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    /// Write `contents` to `input/<name>`.
    pub fn add(&self, name: &str, contents: impl AsRef<[u8]>) -> io::Result<PathBuf> {
        let path = self.input().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Create a subdirectory under `input/`.
    pub fn add_dir(&self, name: &str) -> io::Result<PathBuf> {
        let path = self.input().join(name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Read `output/<name>` as a string.
    pub fn read_output(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.output().join(name))
    }

    /// Sorted file names under `output/`.
    pub fn output_names(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.output())? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}
