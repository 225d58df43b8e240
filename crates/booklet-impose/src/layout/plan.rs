//! Complete booklet plan for a document

use crate::stats::statistics_for_page_count;
use crate::types::{ImposeError, ImpositionStatistics, Result};

use super::{
    SheetAssignment, SheetGeometry, SlotPlacement, compute_geometry, compute_padding,
    compute_sequence, sheet_assignments,
};

/// Padding, page order and geometry for one imposition run
#[derive(Debug, Clone, PartialEq)]
pub struct BookletPlan {
    pub source_pages: usize,
    pub blank_pages: usize,
    pub padded_pages: usize,
    /// 1-based page numbers in slot order
    pub sequence: Vec<usize>,
    pub sheets: Vec<SheetAssignment>,
    pub geometry: SheetGeometry,
}

/// Plan a booklet for `page_count` uniform pages of the given size.
pub fn plan_booklet(page_count: usize, page_width: f32, page_height: f32) -> Result<BookletPlan> {
    if page_count == 0 {
        return Err(ImposeError::NoPages);
    }

    let geometry = compute_geometry(page_width, page_height)?;
    let blank_pages = compute_padding(page_count);
    let padded_pages = page_count + blank_pages;
    let sequence = compute_sequence(padded_pages)?;
    let sheets = sheet_assignments(&sequence)?;

    Ok(BookletPlan {
        source_pages: page_count,
        blank_pages,
        padded_pages,
        sequence,
        sheets,
        geometry,
    })
}

impl BookletPlan {
    /// Placements for both slots of output sheet `sheet_index`
    pub fn placements(&self, sheet_index: usize) -> Option<[SlotPlacement; 2]> {
        let sheet = self.sheets.get(sheet_index)?;
        Some(
            sheet
                .slots()
                .map(|(slot, page_number)| self.geometry.placement(slot, page_number)),
        )
    }

    pub fn statistics(&self) -> ImpositionStatistics {
        statistics_for_page_count(self.source_pages)
    }
}
