//! Bracket-chunk validation and scoring
//!
//! A chunk line is a sequence of bracket tokens over the closed alphabet
//! `( ) [ ] { } < >`. [`classify`] scans a line once, left to right, with a
//! pending-openers stack and sorts it into exactly one of three outcomes:
//!
//! - [`Outcome::Valid`]: every opener was closed by its matching closer and
//!   the stack drained completely
//! - [`Outcome::Corrupt`]: a closer did not match the innermost pending
//!   opener; scanning halts at the first mismatch
//! - [`Outcome::Incomplete`]: the line ended with openers still pending and
//!   no mismatch observed
//!
//! Corrupt lines score through a fixed per-closer penalty table and batches
//! sum them. Incomplete lines score through a base-5 fold over the closers
//! that would complete the line, and batches take the median, which is only
//! defined for an odd number of incomplete lines.

use thiserror::Error;

/// One of the four bracket pair shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `(` / `)`
    Paren,
    /// `[` / `]`
    Square,
    /// `{` / `}`
    Brace,
    /// `<` / `>`
    Angle,
}

impl Delimiter {
    /// Penalty for a corrupt line whose first bad closer has this shape.
    pub fn corruption_points(self) -> u64 {
        match self {
            Delimiter::Paren => 3,
            Delimiter::Square => 57,
            Delimiter::Brace => 1197,
            Delimiter::Angle => 25137,
        }
    }

    /// Per-closer value used by the base-5 completion fold.
    pub fn completion_points(self) -> u64 {
        match self {
            Delimiter::Paren => 1,
            Delimiter::Square => 2,
            Delimiter::Brace => 3,
            Delimiter::Angle => 4,
        }
    }
}

/// A single bracket token: an opener or a closer of one [`Delimiter`] shape.
///
/// The opener/closer bijection is carried by construction: `Open(d)` is
/// matched by exactly `Close(d)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Open(Delimiter),
    Close(Delimiter),
}

impl Token {
    /// Map a character of the 8-symbol alphabet to its token.
    ///
    /// Returns `None` for anything outside the alphabet; rejecting such
    /// characters is the caller's parsing concern, never [`classify`]'s.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Token::Open(Delimiter::Paren)),
            ')' => Some(Token::Close(Delimiter::Paren)),
            '[' => Some(Token::Open(Delimiter::Square)),
            ']' => Some(Token::Close(Delimiter::Square)),
            '{' => Some(Token::Open(Delimiter::Brace)),
            '}' => Some(Token::Close(Delimiter::Brace)),
            '<' => Some(Token::Open(Delimiter::Angle)),
            '>' => Some(Token::Close(Delimiter::Angle)),
            _ => None,
        }
    }

    /// The character this token renders as.
    pub fn as_char(self) -> char {
        match self {
            Token::Open(Delimiter::Paren) => '(',
            Token::Close(Delimiter::Paren) => ')',
            Token::Open(Delimiter::Square) => '[',
            Token::Close(Delimiter::Square) => ']',
            Token::Open(Delimiter::Brace) => '{',
            Token::Close(Delimiter::Brace) => '}',
            Token::Open(Delimiter::Angle) => '<',
            Token::Close(Delimiter::Angle) => '>',
        }
    }

    /// The shape of this token, ignoring which side it is.
    pub fn delimiter(self) -> Delimiter {
        match self {
            Token::Open(d) | Token::Close(d) => d,
        }
    }
}

/// Classification of one chunk line. Exactly one variant holds per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fully matched, stack drained.
    Valid,
    /// First mismatching closer, with its position in the line.
    Corrupt {
        /// Index of the offending token
        index: usize,
        /// The closer that was found there
        found: Token,
    },
    /// No mismatch, but unmatched openers remain in push order
    /// (last element is the innermost).
    Incomplete {
        /// Pending openers, bottom of stack first
        pending: Vec<Delimiter>,
    },
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Outcome::Corrupt { .. })
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Outcome::Incomplete { .. })
    }

    /// Corruption penalty of this line; `None` unless the line is corrupt.
    pub fn corruption_points(&self) -> Option<u64> {
        match self {
            Outcome::Corrupt { found, .. } => Some(found.delimiter().corruption_points()),
            _ => None,
        }
    }

    /// Completion score of this line; `None` unless the line is incomplete.
    pub fn completion_score(&self) -> Option<u64> {
        match self {
            Outcome::Incomplete { pending } => Some(completion_score(pending)),
            _ => None,
        }
    }
}

/// Classify a chunk line in a single left-to-right scan.
///
/// Openers push onto a pending stack local to this call; each closer pops
/// and compares. The first closer that does not match the popped opener
/// makes the line corrupt and stops the scan; later tokens are never
/// inspected. A closer arriving on an empty stack cannot happen in
/// well-formed puzzle input but is defined anyway: it is corrupt at that
/// index.
///
/// The classification is total and deterministic; it depends on nothing but
/// `tokens`.
pub fn classify(tokens: &[Token]) -> Outcome {
    let mut pending: Vec<Delimiter> = Vec::new();

    for (index, &token) in tokens.iter().enumerate() {
        match token {
            Token::Open(delimiter) => pending.push(delimiter),
            Token::Close(delimiter) => match pending.pop() {
                Some(open) if open == delimiter => {}
                _ => return Outcome::Corrupt { index, found: token },
            },
        }
    }

    if pending.is_empty() {
        Outcome::Valid
    } else {
        Outcome::Incomplete { pending }
    }
}

/// The closers that would complete an incomplete line, innermost first.
///
/// Takes the pending openers in stack order (bottom first, as stored in
/// [`Outcome::Incomplete`]) and yields the matching closer for each, from
/// the top of the stack down. Appending these tokens to the line turns its
/// classification into [`Outcome::Valid`].
pub fn completion_closers(pending: &[Delimiter]) -> impl Iterator<Item = Token> + '_ {
    pending.iter().rev().map(|&d| Token::Close(d))
}

/// Base-5 positional score over the closers completing an incomplete line.
///
/// Folds `acc * 5 + points(closer)` over [`completion_closers`] order.
pub fn completion_score(pending: &[Delimiter]) -> u64 {
    completion_closers(pending).fold(0, |acc, token| {
        acc * 5 + token.delimiter().completion_points()
    })
}

/// Sum of corruption penalties over a batch of outcomes.
///
/// Non-corrupt outcomes contribute nothing; they are skipped, not
/// zero-padded.
pub fn corruption_score<'a, I>(outcomes: I) -> u64
where
    I: IntoIterator<Item = &'a Outcome>,
{
    outcomes
        .into_iter()
        .filter_map(Outcome::corruption_points)
        .sum()
}

/// Error scoring a batch of incomplete lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The median of completion scores is only defined for an odd count;
    /// the puzzle input guarantees this, arbitrary input does not.
    #[error("median completion score undefined for {0} incomplete lines (odd count required)")]
    MedianUndefined(usize),
}

/// Median of the completion scores of all incomplete lines in a batch.
///
/// Fails loudly with [`ScoreError::MedianUndefined`] when the count of
/// incomplete lines is even (including zero) rather than inventing an
/// even-count convention.
pub fn median_completion_score<'a, I>(outcomes: I) -> Result<u64, ScoreError>
where
    I: IntoIterator<Item = &'a Outcome>,
{
    let mut scores: Vec<u64> = outcomes
        .into_iter()
        .filter_map(Outcome::completion_score)
        .collect();

    if scores.len() % 2 == 0 {
        return Err(ScoreError::MedianUndefined(scores.len()));
    }

    scores.sort_unstable();
    Ok(scores[scores.len() / 2])
}
