//! Document backend seam
//!
//! The imposition engine only needs a handful of operations from a PDF
//! library. They are split between the document being read (and padded)
//! and the document being written, so any backend can be plugged in.

use crate::layout::SlotPlacement;
use crate::types::Result;

/// The document whose pages are imposed
pub trait PageSource {
    /// Number of pages currently in the document
    fn page_count(&self) -> usize;

    /// Width and height in points of the page at a 0-based index
    fn page_dimensions(&self, page_index: usize) -> Result<(f32, f32)>;

    /// Append an empty page to the end of the document
    fn append_blank_page(&mut self, width: f32, height: f32) -> Result<()>;
}

/// The document receiving imposed sheets
pub trait SheetSink<S: PageSource> {
    type Sheet;

    /// Start a new empty output page
    fn create_blank_sheet(&mut self, width: f32, height: f32) -> Result<Self::Sheet>;

    /// Draw a source page onto `sheet`, scaled and translated per `placement`.
    /// The sheet keeps the size it was created with.
    fn merge_transformed(
        &mut self,
        sheet: &mut Self::Sheet,
        source: &S,
        placement: &SlotPlacement,
    ) -> Result<()>;

    /// Append a finished sheet to the output
    fn add_sheet(&mut self, sheet: Self::Sheet) -> Result<()>;

    /// Number of sheets appended so far
    fn sheet_count(&self) -> usize;
}
