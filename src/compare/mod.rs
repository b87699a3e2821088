//! Comparison orchestration
//!
//! Resolves the two submitted documents into their comparison form
//! (pretty-printed for structured modes), then computes the exact and
//! normalized match flags, content fingerprints, and the full line diff.
//! A parse failure on either side aborts the whole comparison; no partial
//! diff is ever produced alongside an error.

pub mod diff;
pub mod normalize;

use crate::digest;
use crate::error::{AppError, Side};
use crate::format::{self, Mode};

pub use diff::{DiffStatus, LineDiffRow};

/// Options controlling one comparison request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    pub mode: Mode,
    /// Collapse whitespace runs before the normalized-match check.
    pub ignore_whitespace: bool,
    /// Lower-case both sides before the normalized-match check.
    pub ignore_case: bool,
}

/// Result of one comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Byte-for-byte equality of the comparison strings.
    pub exact_match: bool,
    /// Equality after the requested normalizations.
    pub normalized_match: bool,
    /// Byte lengths of the comparison strings.
    pub a_len: usize,
    pub b_len: usize,
    /// SHA-256 hex fingerprints, display only.
    pub a_hash: String,
    pub b_hash: String,
    pub rows: Vec<LineDiffRow>,
}

/// Run a full comparison over two documents.
///
/// The ignore flags affect only the `normalized_match` flag; the diff rows
/// are always computed over the un-normalized (but possibly pretty-printed)
/// pair.
pub fn run(a: &str, b: &str, options: &CompareOptions) -> Result<Comparison, AppError> {
    let compare_a = pretty_side(a, options.mode, Side::A)?;
    let compare_b = pretty_side(b, options.mode, Side::B)?;

    let exact_match = compare_a == compare_b;

    let mut normalized_a = compare_a.clone();
    let mut normalized_b = compare_b.clone();
    if options.ignore_whitespace {
        normalized_a = normalize::normalize_whitespace(&normalized_a);
        normalized_b = normalize::normalize_whitespace(&normalized_b);
    }
    if options.ignore_case {
        normalized_a = normalize::normalize_case(&normalized_a);
        normalized_b = normalize::normalize_case(&normalized_b);
    }
    let normalized_match = normalized_a == normalized_b;

    Ok(Comparison {
        exact_match,
        normalized_match,
        a_len: compare_a.len(),
        b_len: compare_b.len(),
        a_hash: digest::sha256_hex(&compare_a),
        b_hash: digest::sha256_hex(&compare_b),
        rows: diff::line_diff(&compare_a, &compare_b),
    })
}

fn pretty_side(input: &str, mode: Mode, side: Side) -> Result<String, AppError> {
    format::pretty_print(input, mode).map_err(|source| AppError::Parse { side, mode, source })
}
