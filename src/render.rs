//! Terminal rendering of search results.

use std::io::{self, Write};

use crate::models::Paper;

/// Width of the separator line bracketing each entry.
const SEPARATOR_WIDTH: usize = 80;

/// Render the result listing to `out`.
///
/// An empty result set prints a single no-results notice preceded by a
/// blank line. Otherwise each paper is preceded by a blank line and a
/// separator, with one trailing separator closing the whole block. No
/// filtering, sorting, or mutation of the input.
pub fn render<W: Write>(papers: &[Paper], out: &mut W) -> io::Result<()> {
    if papers.is_empty() {
        writeln!(out, "\nNo relevant results found.")?;
        return Ok(());
    }

    let separator = "=".repeat(SEPARATOR_WIDTH);
    for paper in papers {
        writeln!(out, "\n{}", separator)?;
        writeln!(out, "Title: {}", paper.title)?;
        writeln!(out, "Authors: {}", paper.authors.join(", "))?;
        writeln!(out, "Published: {}", paper.published.format("%Y-%m-%d"))?;
        writeln!(out, "Category: {}", paper.categories.join(", "))?;
        writeln!(out, "URL: {}", paper.entry_id)?;
    }
    writeln!(out, "{}", separator)?;
    Ok(())
}
