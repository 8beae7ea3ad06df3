//! Directory and file totals

use std::ops::AddAssign;

use serde::Serialize;

/// Running totals for one or more traversals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub directories: u64,
    pub files: u64,
}

impl Counts {
    pub fn new(directories: u64, files: u64) -> Self {
        Self { directories, files }
    }

    /// Summary line printed after the tree.
    pub fn summary(&self) -> String {
        format!("{} directories, {} files", self.directories, self.files)
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.directories += other.directories;
        self.files += other.files;
    }
}
