//! List command handler.
//!
//! Prints every indexed PID, one per line, in numeric order.

use std::io::Write;

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the list command.
pub fn execute(ctx: &CliContext, out: &mut impl Write) -> Result<()> {
    let mut pids = ctx.index().get_pids();
    // Canonical PIDs sort numerically by length first
    pids.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    for pid in &pids {
        writeln!(out, "{pid}")?;
    }
    Ok(())
}
