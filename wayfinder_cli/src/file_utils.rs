use std::path::Path;

use anyhow::Context;
use wayfinder_core::parsers::is_comment;

pub fn read_source(path: &Path) -> Result<String, anyhow::Error> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))
}

/// Lines echoed into the report: everything but comments, blank lines included.
pub fn non_comment_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !is_comment(line))
}
