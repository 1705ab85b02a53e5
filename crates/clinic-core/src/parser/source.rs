//! Resolving a clinic file locator to a reader.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use tracing::debug;

use super::{ParseError, ParseResult};

/// True for `http://` and `https://` locators.
pub fn is_remote(locator: &str) -> bool {
    let lower = locator.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Local path for a locator, with `\` separators normalised to `/`.
pub fn normalize_path(locator: &str) -> PathBuf {
    PathBuf::from(locator.trim().replace('\\', "/"))
}

/// Open a local clinic file. Remote locators are refused.
pub fn open_source(locator: &str) -> ParseResult<BufReader<File>> {
    if is_remote(locator) {
        return Err(ParseError::RemoteSource(locator.trim().to_string()));
    }
    let path = normalize_path(locator);
    debug!(path = %path.display(), "Opening clinic file");
    Ok(BufReader::new(File::open(path)?))
}
