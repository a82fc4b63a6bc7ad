mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ProseGuardError, Result};

/// Trait for scanning directories and finding documents.
pub trait FileScanner {
    /// Scan a directory and return all matching document paths, sorted.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Resolve a target into the document list: a file is scanned as-is, a
    /// directory is walked recursively. A missing target is fatal before any
    /// scanning happens.
    ///
    /// # Errors
    /// Returns `TargetNotFound` if the target does not exist.
    pub fn resolve(&self, target: &Path) -> Result<Vec<PathBuf>> {
        if target.is_file() {
            Ok(vec![target.to_path_buf()])
        } else if target.is_dir() {
            self.scan(target)
        } else {
            Err(ProseGuardError::TargetNotFound(target.to_path_buf()))
        }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| self.filter.should_include(p))
            .collect();

        // Traversal order is platform-dependent; sort for deterministic reports.
        files.sort();
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
