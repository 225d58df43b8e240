//! Shared constants for booklet imposition
//!
//! This module centralizes magic numbers and constants used throughout
//! the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11"), used when a page has no MediaBox
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Booklet Layout
// =============================================================================

/// Logical pages carried by one folded sheet of paper (front + back, left + right)
pub const PAGES_PER_SHEET: usize = 4;

/// Source pages drawn on one output PDF page
pub const SLOTS_PER_SHEET: usize = 2;

/// Tolerance when comparing page dimensions (points)
pub const DIMENSION_TOLERANCE_PT: f32 = 0.01;

// =============================================================================
// Output Naming
// =============================================================================

/// Suffix appended to the input file stem for the output file
pub const BOOKLET_SUFFIX: &str = "_booklet";

/// The only accepted input/output extension
pub const PDF_EXTENSION: &str = "pdf";
