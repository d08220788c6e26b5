//! Source tree helpers shared by the architecture tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root, resolved from this crate's manifest directory.
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("architecture-tests lives at crates/architecture-tests")
        .to_path_buf()
}

/// A Rust source file with its path relative to the workspace root.
pub struct SourceFile {
    pub relative: String,
    pub content: String,
}

impl SourceFile {
    /// True for integration tests and `*_tests.rs` / `tests/` modules.
    pub fn is_test_file(&self) -> bool {
        self.relative.contains("/tests/") || self.relative.ends_with("_tests.rs")
    }

    /// Content before the first `#[cfg(test)]`, i.e. the non-test part of the file.
    #[allow(dead_code)]
    pub fn non_test_content(&self) -> &str {
        match self.content.find("#[cfg(test)]") {
            Some(idx) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// All `.rs` files under `crates/`, excluding this crate.
pub fn rust_sources() -> Vec<SourceFile> {
    let root = workspace_root();
    walkdir::WalkDir::new(root.join("crates"))
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|e| {
            let relative = e
                .path()
                .strip_prefix(&root)
                .ok()?
                .to_string_lossy()
                .replace('\\', "/");
            if relative.starts_with("crates/architecture-tests/") {
                return None;
            }
            let content = fs::read_to_string(e.path()).ok()?;
            Some(SourceFile { relative, content })
        })
        .collect()
}
