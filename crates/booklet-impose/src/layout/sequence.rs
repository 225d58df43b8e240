//! Saddle-stitch page ordering
//!
//! A booklet is a stack of sheets folded once in the middle. The outermost
//! sheet carries the first and last pages, the next one the second and
//! second-to-last, and so on towards the centre fold.
//!
//! ```text
//! 8 pages, 2 paper sheets, 4 output PDF pages:
//!
//!   output 0: [8 | 1]   outer sheet, outside
//!   output 1: [2 | 7]   outer sheet, inside
//!   output 2: [6 | 3]   inner sheet, outside
//!   output 3: [4 | 5]   inner sheet, inside
//! ```

use crate::constants::{PAGES_PER_SHEET, SLOTS_PER_SHEET};
use crate::types::{ImposeError, Result};

use super::SheetAssignment;

// =============================================================================
// Padding
// =============================================================================

/// Number of blank pages needed to reach a multiple of four.
///
/// Always in `0..=3`; zero when `total_pages` is already a multiple of four.
pub fn compute_padding(total_pages: usize) -> usize {
    (PAGES_PER_SHEET - total_pages % PAGES_PER_SHEET) % PAGES_PER_SHEET
}

// =============================================================================
// Page Ordering
// =============================================================================

/// Calculate the booklet page order for a padded document.
///
/// Returns 1-based page numbers, one per slot, in output order. Every number
/// in `1..=total_padded_pages` appears exactly once.
///
/// A page count that is not a multiple of four means padding was skipped,
/// which is reported as [`ImposeError::ContractViolation`].
pub fn compute_sequence(total_padded_pages: usize) -> Result<Vec<usize>> {
    if total_padded_pages % PAGES_PER_SHEET != 0 {
        return Err(ImposeError::ContractViolation(format!(
            "padded page count {} is not a multiple of {}",
            total_padded_pages, PAGES_PER_SHEET
        )));
    }

    let n = total_padded_pages;
    let mut sequence = Vec::with_capacity(n);
    for i in 0..n / PAGES_PER_SHEET {
        sequence.push(n - 2 * i);
        sequence.push(1 + 2 * i);
        sequence.push(2 + 2 * i);
        sequence.push(n - 1 - 2 * i);
    }
    Ok(sequence)
}

/// Split a page sequence into (left, right) pairs, one per output sheet.
pub fn sheet_assignments(sequence: &[usize]) -> Result<Vec<SheetAssignment>> {
    if sequence.len() % SLOTS_PER_SHEET != 0 {
        return Err(ImposeError::ContractViolation(format!(
            "sequence of length {} cannot be split into sheet pairs",
            sequence.len()
        )));
    }

    Ok(sequence
        .chunks_exact(SLOTS_PER_SHEET)
        .map(|pair| SheetAssignment::new(pair[0], pair[1]))
        .collect())
}
