//! Front-matter-aware markdown normalization
//!
//! Canonicalizes block layout only: every top-level block is separated by a
//! single blank line and the document ends with one newline. Trailing
//! whitespace is dropped outside code blocks; a two-space hard line break is
//! rewritten as a backslash break. Inline content is left as written.

use crate::error::{ConvertError, Result};
use pulldown_cmark::{Event, Options, Parser as MdParser, Tag};
use std::ops::Range;

const FRONT_MATTER_FENCE: &str = "---";

/// A top-level block.
///
/// `verbatim` holds the code and HTML blocks at any depth whose lines are kept
/// byte-for-byte; `hard_breaks` holds the offsets of trailing-space line breaks.
#[derive(Debug)]
struct Block {
    range: Range<usize>,
    verbatim: Vec<Range<usize>>,
    hard_breaks: Vec<usize>,
}

impl Block {
    fn new(range: Range<usize>) -> Self {
        Block {
            range,
            verbatim: Vec::new(),
            hard_breaks: Vec::new(),
        }
    }
}

/// Normalize a markdown document, passing a leading front matter block through untouched
pub fn normalize(text: &str) -> Result<String> {
    let (front_matter, body) = split_front_matter(text)?;

    let blocks = render_blocks(body);
    let mut out = String::new();

    if let Some(fm) = front_matter {
        out.push_str(fm);
        if !fm.ends_with('\n') {
            out.push('\n');
        }
        if !blocks.is_empty() {
            out.push('\n');
        }
    }

    if !blocks.is_empty() {
        out.push_str(&blocks.join("\n\n"));
        out.push('\n');
    }

    Ok(out)
}

/// Undo bracket escaping so `![[...]]` embeds stay intact
pub fn unescape_brackets(text: &str) -> String {
    text.replace("\\[", "[").replace("\\]", "]")
}

/// Split off a `---` fenced block at the very start of the document
fn split_front_matter(text: &str) -> Result<(Option<&str>, &str)> {
    let mut lines = text.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.trim_end() == FRONT_MATTER_FENCE => {}
        _ => return Ok((None, text)),
    }

    let mut offset = text.split_inclusive('\n').next().map_or(0, str::len);
    for line in lines {
        offset += line.len();
        if line.trim_end() == FRONT_MATTER_FENCE {
            return Ok((Some(&text[..offset]), &text[offset..]));
        }
    }

    Err(ConvertError::Markdown(
        "front matter block is never closed".to_string(),
    ))
}

/// Locate top-level blocks, keeping any unparsed text between them
fn collect_blocks(body: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<Block> = None;

    for (event, range) in MdParser::new_ext(body, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(tag) => {
                if depth == 0 {
                    current = Some(Block::new(range.clone()));
                }
                if matches!(tag, Tag::CodeBlock(_) | Tag::HtmlBlock) {
                    if let Some(block) = current.as_mut() {
                        block.verbatim.push(range.clone());
                    }
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some(mut block) = current.take() {
                        block.range.end = block.range.end.max(range.end);
                        blocks.push(block);
                    }
                }
            }
            // A backslash break survives trimming as is
            Event::HardBreak if !body[range.clone()].starts_with('\\') => {
                if let Some(block) = current.as_mut() {
                    block.hard_breaks.push(range.start);
                }
            }
            _ if depth == 0 => blocks.push(Block::new(range)),
            _ => {}
        }
    }

    let mut with_gaps = Vec::with_capacity(blocks.len());
    let mut cursor = 0;
    for block in blocks {
        if block.range.start > cursor {
            with_gaps.push(Block::new(cursor..block.range.start));
        }
        cursor = cursor.max(block.range.end);
        with_gaps.push(block);
    }
    if cursor < body.len() {
        with_gaps.push(Block::new(cursor..body.len()));
    }

    with_gaps
}

fn render_blocks(body: &str) -> Vec<String> {
    collect_blocks(body)
        .iter()
        .map(|block| render_block(body, block))
        .filter(|rendered| !rendered.trim().is_empty())
        .collect()
}

fn render_block(body: &str, block: &Block) -> String {
    let mut lines = Vec::new();
    let mut offset = block.range.start;

    for line in body[block.range.clone()].split_inclusive('\n') {
        let line_range = offset..offset + line.len();
        offset = line_range.end;
        let content = line.trim_end_matches(['\n', '\r']);

        let in_code = block
            .verbatim
            .iter()
            .any(|r| r.start < line_range.end && line_range.start < r.end);
        if in_code {
            lines.push(content.to_string());
        } else if block.hard_breaks.iter().any(|b| line_range.contains(b)) {
            lines.push(format!("{}\\", content.trim_end()));
        } else {
            lines.push(content.trim_end().to_string());
        }
    }

    lines.join("\n").trim_matches('\n').to_string()
}
