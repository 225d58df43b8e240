use crate::constants::{PAGES_PER_SHEET, SLOTS_PER_SHEET};
use crate::layout::compute_padding;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for imposing a document without imposing it
pub fn calculate_statistics(document: &Document) -> Result<ImpositionStatistics> {
    let source_pages = document.get_pages().len();
    if source_pages == 0 {
        return Err(ImposeError::NoPages);
    }
    Ok(statistics_for_page_count(source_pages))
}

/// Statistics for a booklet of `source_pages` pages
pub(crate) fn statistics_for_page_count(source_pages: usize) -> ImpositionStatistics {
    let blank_pages_added = compute_padding(source_pages);
    let padded_pages = source_pages + blank_pages_added;

    ImpositionStatistics {
        source_pages,
        blank_pages_added,
        padded_pages,
        output_sheets: padded_pages / SLOTS_PER_SHEET,
        paper_sheets: padded_pages / PAGES_PER_SHEET,
    }
}
