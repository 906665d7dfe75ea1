use std::fmt;
use std::path::PathBuf;

use crate::domain::TargetDir;

pub const READY_MESSAGE: &str = "Ready to create documentation files";

/// Status printed once the directory has been ensured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub exists: bool,
}

impl Report {
    pub fn observe(dir: &TargetDir) -> Report {
        Report {
            path: dir.path().to_owned(),
            exists: dir.exists(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Created directory: {}", self.path.display())?;
        writeln!(f, "Directory exists: {}", self.exists)?;
        writeln!(f, "{}", READY_MESSAGE)
    }
}
