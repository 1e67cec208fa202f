// Author: Dustin Pilgrim
// License: MIT

//! Block comment removal.
//!
//! A block opens on a line whose trimmed text is exactly `=begin` and closes on
//! the first later line whose trimmed text is exactly `=cut`. Both delimiter
//! lines and everything between them are dropped. A `=begin` with no `=cut`
//! after it is not a comment: it and the rest of the input are kept as-is.

const BLOCK_OPEN: &str = "=begin";
const BLOCK_CLOSE: &str = "=cut";

/// A line that survived comment removal, with its line terminator stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the original text.
    pub number: usize,
    pub text: &'a str,
}

/// Remove every `=begin` .. `=cut` block, passing other text through unchanged.
pub fn strip_comments(text: &str) -> String {
    kept_segments(text).map(|(_, segment)| segment).collect()
}

/// The lines left after comment removal, numbered by their original position.
pub fn logical_lines(text: &str) -> Vec<SourceLine<'_>> {
    kept_segments(text)
        .map(|(number, segment)| SourceLine {
            number,
            text: strip_terminator(segment),
        })
        .collect()
}

/// Lines outside comment blocks, each with its terminator still attached.
fn kept_segments(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let segments: Vec<&str> = text.split_inclusive('\n').collect();
    let mut kept = Vec::with_capacity(segments.len());

    // Once a search for `=cut` fails there is none further down either.
    let mut closers_left = true;
    let mut i = 0;
    while i < segments.len() {
        if closers_left && is_delimiter(segments[i], BLOCK_OPEN) {
            let close = segments[i + 1..]
                .iter()
                .position(|s| is_delimiter(s, BLOCK_CLOSE));
            match close {
                Some(offset) => {
                    tracing::trace!(
                        from = i + 1,
                        to = i + 2 + offset,
                        "dropping comment block"
                    );
                    i += offset + 2;
                    continue;
                }
                None => closers_left = false,
            }
        }
        kept.push((i + 1, segments[i]));
        i += 1;
    }

    kept.into_iter()
}

fn is_delimiter(segment: &str, delimiter: &str) -> bool {
    segment.trim() == delimiter
}

fn strip_terminator(segment: &str) -> &str {
    let line = segment.strip_suffix('\n').unwrap_or(segment);
    line.strip_suffix('\r').unwrap_or(line)
}
