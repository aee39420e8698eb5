//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ..., out: &mut impl Write) -> Result<()>`
//! - Thin wrappers that:
//!   1. Call `PidIndex` methods
//!   2. Format output for the terminal
//!
//! Index failures are converted to `CliError` so `main` can pick the exit code.

pub mod count;
pub mod get;
pub mod list;
pub mod path;
pub mod verify;
