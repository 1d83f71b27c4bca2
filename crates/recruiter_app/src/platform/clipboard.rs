use std::io::{self, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Sets the system clipboard through the terminal with an OSC 52 sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52Clipboard;

impl ClipboardWriter for Osc52Clipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            bail!("stdout is not a terminal");
        }
        stdout
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| stdout.flush())
            .context("writing clipboard sequence")
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::osc52_sequence;

    #[test]
    fn sequence_wraps_base64_payload() {
        assert_eq!(osc52_sequence("**Jane**"), "\x1b]52;c;KipKYW5lKio=\x07");
    }
}
