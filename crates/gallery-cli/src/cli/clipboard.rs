//! Clipboard output through whichever clipboard tool is installed.

use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// (program, args) tried in order.
const TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// Writes `text` to the clipboard. Returns the tool that accepted it.
pub fn copy(text: &str) -> Result<&'static str> {
    let mut last_err = None;
    for &(program, args) in TOOLS {
        match copy_with(program, args, text) {
            Ok(()) => return Ok(program),
            Err(e) => {
                tracing::debug!(program, "clipboard tool unavailable: {:#}", e);
                last_err = Some(e);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| anyhow::anyhow!("no clipboard tool configured")))
        .context("no working clipboard tool (tried wl-copy, xclip, xsel, pbcopy)")
}

fn copy_with(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("spawn {program}"))?;
    {
        let stdin = child.stdin.as_mut().context("stdin not captured")?;
        stdin.write_all(text.as_bytes())?;
    }
    drop(child.stdin.take());
    let status = child.wait()?;
    if !status.success() {
        anyhow::bail!("{program} exited with {status}");
    }
    Ok(())
}
