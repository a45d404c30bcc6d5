use std::io::{IsTerminal, Read};

use anyhow::{Context, Result};

pub(crate) fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Reads all of stdin before any processing starts.
///
/// Invalid UTF-8 becomes U+FFFD so the offending line fails UUID validation by name.
pub(crate) fn read_all() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .context("Cannot read from stdin")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
