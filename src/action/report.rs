use std::io::Write;

use crate::base::Result;
use crate::domain::{Report, TargetDir};

pub fn report<W>(dir: &TargetDir, mut out: W) -> Result<Report>
where
    W: Write,
{
    let report = Report::observe(dir);
    if !report.exists {
        tracing::warn!(path = %dir, "action: report: directory is missing after creation");
    }

    write!(out, "{}", report)?;
    out.flush()?;
    Ok(report)
}
