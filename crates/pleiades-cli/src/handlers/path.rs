//! Path command handler.

use std::io::Write;

use anyhow::Result;
use pleiades_core::IndexError;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the path command.
///
/// Prints the indexed path without reading the document.
pub fn execute(ctx: &CliContext, pid: &str, out: &mut impl Write) -> Result<()> {
    let path = ctx.index().path_of(pid).ok_or_else(|| {
        CliError::from(IndexError::NotIndexed {
            pid: pid.to_string(),
        })
    })?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}
