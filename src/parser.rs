//! Streaming JSON5 parsing for coven files
//!
//! A coven file is a stream of witch objects, either one per line (JSONL) or
//! spread over several lines. JSON5 extras are allowed: comments, trailing
//! commas, and unquoted keys.

use std::io::{BufRead, BufReader, Read};
use thiserror::Error;

use crate::witch::Witch;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// A skipped object, reported against its first line.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
    pub line: usize,
}

/// Result of parsing a coven file.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub witches: Vec<Witch>,
    pub warnings: Vec<Warning>,
}

/// Parse a single JSON5 witch object.
pub fn parse_witch(text: &str, line_number: usize) -> Result<Witch, ParseError> {
    json5::from_str(text).map_err(|e| ParseError { message: e.to_string(), line: line_number })
}

/// Brace and bracket depth of the object being accumulated.
///
/// Braces inside strings and comments do not count. Block comments may span
/// lines, so the state carries over between calls to `scan_line`.
#[derive(Debug, Default)]
struct DepthTracker {
    braces: i32,
    brackets: i32,
    quote: Option<char>,
    escape_next: bool,
    in_block_comment: bool,
    opened: bool,
}

impl DepthTracker {
    fn scan_line(&mut self, line: &str) {
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            if self.in_block_comment {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }

            if let Some(quote) = self.quote {
                if self.escape_next {
                    self.escape_next = false;
                } else if ch == '\\' {
                    self.escape_next = true;
                } else if ch == quote {
                    self.quote = None;
                }
                continue;
            }

            match ch {
                '"' | '\'' => self.quote = Some(ch),
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                }
                '{' => {
                    self.braces += 1;
                    self.opened = true;
                }
                '}' => self.braces -= 1,
                '[' => self.brackets += 1,
                ']' => self.brackets -= 1,
                _ => {}
            }
        }

        // A trailing backslash continues the string onto the next line
        if !self.escape_next {
            self.quote = None;
        }
        self.escape_next = false;
    }

    fn is_complete(&self) -> bool {
        self.opened && !self.in_block_comment && self.braces <= 0 && self.brackets <= 0
    }
}

/// Parse a stream of witch objects.
///
/// Objects are split on balanced braces, so one bad object does not take the
/// rest of the file down with it: it becomes a [`Warning`] and parsing
/// continues with the next object. A line that cannot be read (for example
/// invalid UTF-8) also becomes a warning and drops the object it was part of.
pub fn parse_stream<R: Read>(reader: R) -> ParseResult {
    let mut result = ParseResult::default();

    let mut accumulator = String::new();
    let mut tracker = DepthTracker::default();
    let mut start_line = 1;
    let mut current_line = 0;

    for line in BufReader::new(reader).lines() {
        current_line += 1;

        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(line = current_line, "skipping unreadable line: {}", e);
                result.warnings.push(Warning { message: e.to_string(), line: current_line });
                accumulator.clear();
                tracker = DepthTracker::default();
                start_line = current_line + 1;
                continue;
            }
        };

        if accumulator.is_empty() && line.trim().is_empty() {
            start_line = current_line + 1;
            continue;
        }

        if !accumulator.is_empty() {
            accumulator.push('\n');
        }
        accumulator.push_str(&line);
        tracker.scan_line(&line);

        if tracker.is_complete() {
            push_object(&mut result, &accumulator, start_line);
            accumulator.clear();
            tracker = DepthTracker::default();
            start_line = current_line + 1;
        }
    }

    // Unterminated object at end of input
    if !accumulator.trim().is_empty() {
        push_object(&mut result, &accumulator, start_line);
    }

    tracing::debug!(
        witches = result.witches.len(),
        warnings = result.warnings.len(),
        "parsed coven stream"
    );
    result
}

fn push_object(result: &mut ParseResult, text: &str, line: usize) {
    match parse_witch(text, line) {
        Ok(witch) => result.witches.push(witch),
        Err(e) => {
            tracing::warn!(line, "skipping witch: {}", e.message);
            result.warnings.push(Warning { message: e.message, line });
        }
    }
}
