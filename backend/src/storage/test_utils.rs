/// Test utilities with automatic cleanup and shared fixtures
///
/// The temp directory lives as long as the `TestEnvironment`, so test data is
/// removed even if a test panics.
use anyhow::Result;
use chrono::NaiveDate;
use shared::{CategoryId, Expense, ExpenseId};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::file::FileStorage;

/// RAII test environment backed by a temporary data directory
pub struct TestEnvironment {
    /// Kept alive so the directory is only removed on drop
    _temp_dir: TempDir,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// A file store rooted in this environment's directory
    pub fn file_storage(&self) -> FileStorage {
        FileStorage::new(&self.base_path).expect("Failed to create file storage")
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("EXPENSE_TRACKER_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

/// Build an expense dated 2024-03-05 unless a test needs something else
pub fn expense(id: u64, amount: f64, category: &str) -> Expense {
    Expense {
        id: ExpenseId(id),
        amount,
        description: format!("Expense {}", id),
        category: CategoryId::new(category),
        date: NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid fixture date"),
    }
}
