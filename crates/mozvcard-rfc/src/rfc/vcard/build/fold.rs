//! vCard line folding and unfolding.
//!
//! Widths are counted in characters. Folds prefer to land just after a
//! non-word character (anything but ASCII letters, digits and `_`) and only
//! break inside a word when the whole window is a single word.

use mozvcard_core::constants::{DEFAULT_FOLD_WIDTH, FOLD_MARKER, LINE_TERMINATOR, MIN_FOLD_WIDTH};

use crate::error::{RfcError, RfcResult};

/// Validated column budget for folded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldWidth(usize);

impl FoldWidth {
    /// 78 columns.
    pub const DEFAULT: Self = Self(DEFAULT_FOLD_WIDTH);

    /// Creates a fold width.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidConfiguration` if `width` is below 20.
    pub fn new(width: usize) -> RfcResult<Self> {
        if width < MIN_FOLD_WIDTH {
            return Err(RfcError::InvalidConfiguration(format!(
                "fold width must be at least {MIN_FOLD_WIDTH} (suggested {DEFAULT_FOLD_WIDTH}), got {width}"
            )));
        }
        Ok(Self(width))
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for FoldWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for FoldWidth {
    type Error = RfcError;

    fn try_from(width: usize) -> RfcResult<Self> {
        Self::new(width)
    }
}

/// Folds a logical line to at most `max_length` columns per physical line.
///
/// ## Errors
/// Returns `RfcError::InvalidConfiguration` if `max_length` is below 20.
pub fn fold(line: &str, max_length: usize) -> RfcResult<String> {
    Ok(fold_with(line, FoldWidth::new(max_length)?))
}

/// Folds a logical line with an already validated width.
///
/// Lines shorter than the width come back unchanged. Otherwise the physical
/// lines are joined with CRLF and every continuation starts with one space,
/// which counts against the width of that line.
#[must_use]
pub fn fold_with(line: &str, width: FoldWidth) -> String {
    let mut max = width.get();
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < max {
        return line.to_string();
    }

    let mut segments: Vec<String> = Vec::with_capacity(chars.len() / max + 2);
    let mut rest = chars.as_slice();

    while rest.len() > max {
        let (head, tail) = rest.split_at(find_cut(rest, max));
        push_segment(&mut segments, head);
        rest = tail;

        // Continuations give one column to the fold marker.
        if segments.len() == 1 {
            max -= 1;
        }
    }

    if !rest.is_empty() {
        push_segment(&mut segments, rest);
    }

    segments.join(LINE_TERMINATOR)
}

/// Picks the cut position within the first `max` characters of `rest`.
fn find_cut(rest: &[char], max: usize) -> usize {
    let mut cut = max;
    while cut > 1 && is_word_char(rest[cut - 1]) {
        cut -= 1;
    }

    if cut == 1 { max } else { cut }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn push_segment(segments: &mut Vec<String>, content: &[char]) {
    let mut segment = String::with_capacity(content.len() + 1);
    if !segments.is_empty() {
        segment.push(FOLD_MARKER);
    }
    segment.extend(content);
    segments.push(segment);
}

/// Unfolds text by removing every CRLF that is followed by a space or tab.
///
/// The whitespace character goes with the line break. Other line breaks
/// are left in place.
#[must_use]
pub fn unfold(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(LINE_TERMINATOR) {
        let after = &rest[pos + LINE_TERMINATOR.len()..];
        if after.starts_with([' ', '\t']) {
            result.push_str(&rest[..pos]);
            rest = &after[1..];
        } else {
            result.push_str(&rest[..pos + LINE_TERMINATOR.len()]);
            rest = after;
        }
    }

    result.push_str(rest);
    result
}
