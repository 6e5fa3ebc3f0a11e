//! `varimail session` command: interactive loop with copy tracking.

use std::io::{BufRead, Write};

use crate::context::ServiceContext;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::session::{CopyOutcome, Session};
use crate::validate;
use crate::variations;

const HELP: &str = "Commands:
  generate <email> [count]  generate variations (count clamped to 1..=100)
  list                      show the current list with copy usage
  copy <n>                  copy item n to the clipboard (max 2 per item)
  export [path]             write the list to a text file (default gmail_variations.txt)
  help                      show this help
  quit                      leave the session";

/// Execute the `session` command against stdin/stdout.
///
/// # Errors
///
/// Returns an error string when reading input or writing output fails;
/// user mistakes (bad address, exhausted copies) stay inside the loop.
pub fn run() -> Result<(), String> {
    let ctx = ServiceContext::live();
    let stdin = std::io::stdin();
    run_loop(&ctx, stdin.lock(), &mut std::io::stdout())
}

/// Drives the interactive loop over arbitrary input/output streams.
///
/// # Errors
///
/// Returns an error string when the input or output stream fails.
pub fn run_loop(
    ctx: &ServiceContext,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), String> {
    let mut session = Session::new();
    say(out, "varimail session — type `help` for commands")?;

    for line in input.lines() {
        let line = line.map_err(|e| format!("Failed to read input: {e}"))?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "generate" | "gen" => {
                let args: Vec<&str> = parts.collect();
                handle_generate(ctx, &mut session, &args, out)?;
            }
            "list" => handle_list(&session, out)?,
            "copy" => {
                let arg = parts.next().unwrap_or_default();
                handle_copy(ctx, &mut session, arg, out)?;
            }
            "export" => {
                let path = parts.next().unwrap_or(DEFAULT_EXPORT_FILE);
                handle_export(ctx, &session, path, out)?;
            }
            "help" => say(out, HELP)?,
            "quit" | "exit" => break,
            other => say(out, &format!("Unknown command: {other} (try `help`)"))?,
        }
    }
    Ok(())
}

fn handle_generate(
    ctx: &ServiceContext,
    session: &mut Session,
    args: &[&str],
    out: &mut impl Write,
) -> Result<(), String> {
    let Some(email) = args.first() else {
        return say(out, "Usage: generate <email> [count]");
    };
    if let Err(msg) = validate::validate_address(email) {
        return say(out, &msg);
    }
    // Missing count defaults to 10; unparsable input clamps to 1.
    let raw = args.get(1).map_or(10, |s| s.parse::<i64>().unwrap_or(0));
    let count = validate::clamp_count(raw);

    session.replace(variations::generate(ctx, email, count));
    say(out, &format!("Generated {} variations.", session.items().len()))?;
    handle_list(session, out)
}

fn handle_list(session: &Session, out: &mut impl Write) -> Result<(), String> {
    if session.is_empty() {
        return say(out, "No variations yet. Use `generate <email> [count]`.");
    }
    for (i, item) in session.items().iter().enumerate() {
        say(out, &format!("{:3}. {} (copied {}/2)", i + 1, item.email, item.copy_count))?;
    }
    Ok(())
}

fn handle_copy(
    ctx: &ServiceContext,
    session: &mut Session,
    arg: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let Ok(number) = arg.parse::<usize>() else {
        return say(out, "Usage: copy <n>");
    };
    let Some(index) = number.checked_sub(1) else {
        return say(out, "Usage: copy <n>");
    };

    match session.copy(index, ctx.clipboard.as_ref()) {
        Ok(CopyOutcome::Copied { remaining }) => {
            let email = &session.items()[index].email;
            say(out, &format!("Copied {email} ({remaining} left)"))
        }
        Ok(CopyOutcome::LimitReached) => {
            let email = &session.items()[index].email;
            say(out, &format!("Copy limit reached for {email}"))
        }
        Ok(CopyOutcome::ClipboardFailed(err)) => {
            say(out, &format!("Copy failed: {err}. Select and copy the address manually."))
        }
        Err(msg) => say(out, &msg),
    }
}

fn handle_export(
    ctx: &ServiceContext,
    session: &Session,
    path: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    match crate::export::export_to_file(ctx, session.items(), std::path::Path::new(path)) {
        Ok(()) => say(out, &format!("Exported {} addresses to {path}", session.items().len())),
        Err(msg) => say(out, &msg),
    }
}

fn say(out: &mut impl Write, message: &str) -> Result<(), String> {
    writeln!(out, "{message}").map_err(|e| format!("Failed to write output: {e}"))
}
