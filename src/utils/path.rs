//! Path utilities: expand ~, make sure parent directories exist.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Create the directory holding `path`, if it has one.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("data/students.csv"), PathBuf::from("data/students.csv"));
        assert_eq!(expand_tilde("/tmp/a~b"), PathBuf::from("/tmp/a~b"));
    }

    #[test]
    fn tilde_prefix_goes_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/x.csv"), home.join("x.csv"));
        }
    }

    #[test]
    fn bare_file_name_needs_no_parent() {
        assert!(ensure_parent_dir(Path::new("students.csv")).is_ok());
    }
}
