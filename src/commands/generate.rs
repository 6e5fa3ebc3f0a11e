//! `varimail generate` command.

use std::path::Path;

use crate::cli::OutputFormat;
use crate::context::ServiceContext;
use crate::export;
use crate::validate;
use crate::variations;

/// Execute the `generate` command.
///
/// Validates the address, clamps the count, generates the variations and
/// prints them in the requested format. With `--output`, also writes the
/// newline-joined export file.
///
/// # Errors
///
/// Returns an error string when the address fails validation, rendering
/// fails, or the export file cannot be written.
pub fn run(
    email: &str,
    count: i64,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), String> {
    let ctx = ServiceContext::live();
    run_with_context(&ctx, email, count, format, output)
}

/// Execute the `generate` command with the given service context.
///
/// # Errors
///
/// Same conditions as [`run`].
pub fn run_with_context(
    ctx: &ServiceContext,
    email: &str,
    count: i64,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), String> {
    validate::validate_address(email)?;
    let count = validate::clamp_count(count);

    let items = variations::generate(ctx, email, count);
    println!("{}", render(&items, format)?);

    if let Some(path) = output {
        export::export_to_file(ctx, &items, path)?;
        eprintln!("Exported {} addresses to {}", items.len(), path.display());
    }
    Ok(())
}

/// Renders the generated items as plain lines or a JSON array.
fn render(items: &[variations::GeneratedEmail], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(export::join_emails(items)),
        OutputFormat::Json => serde_json::to_string_pretty(items)
            .map_err(|e| format!("Failed to serialize items: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_address() {
        let ctx = ServiceContext::fake();
        let result = run_with_context(&ctx, "not-an-email", 5, OutputFormat::Text, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid Gmail address"));
    }

    #[test]
    fn writes_export_file_when_output_given() {
        let ctx = ServiceContext::fake();
        let path = Path::new("gmail_variations.txt");
        run_with_context(&ctx, "user@gmail.com", 3, OutputFormat::Text, Some(path)).unwrap();
        assert!(ctx.fs.exists(path));
    }

    #[test]
    fn text_render_is_one_address_per_line() {
        let ctx = ServiceContext::fake();
        let items = variations::generate(&ctx, "user@gmail.com", 3);
        let text = render(&items, OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|l| l.ends_with("@gmail.com")));
    }

    #[test]
    fn json_render_exposes_item_fields() {
        let ctx = ServiceContext::fake();
        let items = variations::generate(&ctx, "user@gmail.com", 2);
        let json = render(&items, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["id"], "id-1");
        assert_eq!(parsed[0]["email"], "user@gmail.com");
        assert_eq!(parsed[0]["copy_count"], 0);
    }
}
