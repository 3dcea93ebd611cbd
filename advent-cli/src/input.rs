//! Local store for puzzle input files

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Read-only file store for puzzle inputs
///
/// Directory structure: `{root}/{year}/day{day:02}.txt`
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Load the input for a specific year/day
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        if !path.exists() {
            return Err(InputError::Missing { year, day, path });
        }
        Ok(fs::read_to_string(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));

        let path = store.input_path(2021, 1);
        assert_eq!(path, PathBuf::from("inputs/2021/day01.txt"));

        let path = store.input_path(2021, 25);
        assert_eq!(path, PathBuf::from("inputs/2021/day25.txt"));
    }

    #[test]
    fn test_missing_input_is_reported() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2021, 10));
        assert!(matches!(
            store.load(2021, 10),
            Err(InputError::Missing {
                year: 2021,
                day: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_load_reads_file_contents() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let dir = temp.path().join("2021");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("day10.txt"), "(()\n").unwrap();

        assert!(store.contains(2021, 10));
        assert_eq!(store.load(2021, 10).unwrap(), "(()\n");
    }
}
