// IPPcode23 Assembler
// Parser and XML translator for the IPPcode23 language
//
// Designed & written in 2023 for the IPP language toolchain

//! Source line normalization and header validation

use crate::issues::{LineError, SyntaxError};

/// The mandatory marker line opening every IPPcode23 source
pub const HEADER: &str = ".IPPcode23";

/// A source line after normalization: the comment stripped, whitespace
/// runs collapsed to single spaces, surrounding whitespace trimmed.
///
/// `no` is the 1-based position of the line in the raw input, kept for
/// diagnostics. Normalized lines are never empty: lines that become empty
/// are elided from the stream.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Line {
    pub no: usize,
    pub text: String,
}

/// Strips comments (`#` up to the end of line) and redundant whitespace
/// from the raw source, dropping lines with no remaining content.
pub fn normalize(source: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let code = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let text = code.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            lines.push(Line { no: index + 1, text });
        }
    }
    lines
}

/// Checks that the normalized stream opens with the `.IPPcode23` marker
/// line and consumes it, leaving the stream positioned at the first
/// instruction. The comparison is case-sensitive and exact; any later
/// occurrence of the marker is left in the stream and fails opcode lookup
/// there.
pub fn expect_header(mut lines: Vec<Line>) -> Result<Vec<Line>, LineError> {
    match lines.first() {
        Some(line) if line.text == HEADER => {
            lines.remove(0);
            Ok(lines)
        }
        Some(line) => Err(LineError::with(SyntaxError::WrongHeader, line.no)),
        None => Err(LineError::with(SyntaxError::WrongHeader, 1)),
    }
}
