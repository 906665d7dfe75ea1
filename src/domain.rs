pub mod report;
pub mod target_dir;

pub use report::Report;
pub use target_dir::TargetDir;
