//! Reading markdown input and cutting it into blocks.

use std::io::Read;
use std::path::Path;

/// Read markdown from `path`, or from stdin when no path is given.
pub(crate) fn read_source(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().lock().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Cut the source into the strings processed as individual blocks.
///
/// Without `split_lines` the whole source is one block, minus its final line
/// break. With it, every non-blank line is a block.
pub(crate) fn blocks(source: &str, split_lines: bool) -> Vec<&str> {
    if split_lines {
        source
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        vec![source.trim_end_matches(['\r', '\n'])]
    }
}
