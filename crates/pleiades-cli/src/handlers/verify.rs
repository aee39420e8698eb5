//! Verify command handler.
//!
//! Checks that every index entry points at an existing `.json` file.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the verify command.
///
/// Prints `ok (<n> entries)` on success. The first bad entry is returned as
/// a `CliError::Data`.
pub fn execute(ctx: &CliContext, out: &mut impl Write) -> Result<()> {
    let index = ctx.index();
    debug!(origin = ?index.origin(), entries = index.len(), "verifying index");
    index.verify_index().map_err(CliError::from)?;
    writeln!(out, "ok ({} entries)", index.len())?;
    Ok(())
}
