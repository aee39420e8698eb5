//! Count command handler.

use std::io::Write;

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the count command.
pub fn execute(ctx: &CliContext, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", ctx.index().len())?;
    Ok(())
}
