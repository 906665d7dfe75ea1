use crate::base::Result;
use crate::domain::TargetDir;

pub fn ensure_directory(dir: &TargetDir) -> Result<()> {
    tracing::info!(path = %dir, "action: ensure directory");

    if dir.create()? {
        tracing::info!(path = %dir, "action: ensure_directory: created");
    }

    Ok(())
}
