pub mod ensure_directory;
pub mod report;

pub use ensure_directory::*;
pub use report::*;
