//! Get command handler.
//!
//! Prints the document for one PID as pretty JSON.

use std::io::Write;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the get command.
pub fn execute(ctx: &CliContext, pid: &str, out: &mut impl Write) -> Result<()> {
    let document = ctx.index().get(pid).map_err(CliError::from)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{catalog_context, context, output};

    #[test]
    fn test_get_prints_document() {
        let (_dir, ctx) = context();
        let mut buf = Vec::new();
        execute(&ctx, "295374", &mut buf).unwrap();

        let printed: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        assert_eq!(printed["title"], "Zucchabar");
    }

    #[test]
    fn test_get_unknown_pid() {
        let (_dir, ctx) = context();
        let err = execute(&ctx, "8675309", &mut Vec::new()).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::NotIndexed(_)));
        assert_eq!(cli_err.exit_code(), 1);
    }

    #[test]
    fn test_get_non_canonical_pid_is_not_indexed() {
        let (_dir, ctx) = context();
        let err = execute(&ctx, "0295374", &mut Vec::new()).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::NotIndexed(_)));
        assert_eq!(cli_err.exit_code(), 1);
    }

    #[test]
    fn test_get_catalog_key_as_listed() {
        let (_dir, ctx) = catalog_context();
        let mut buf = Vec::new();
        execute(&ctx, "007", &mut buf).unwrap();

        let printed: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        assert_eq!(printed["id"], "007");
    }
}
