//! Booklet imposition over any document backend

use super::backend::{PageSource, SheetSink};
use crate::constants::DIMENSION_TOLERANCE_PT;
use crate::layout::{BookletPlan, plan_booklet};
use crate::types::*;
use log::{debug, info, warn};

/// Impose every page of `source` into `sink` as a saddle-stitch booklet.
///
/// The source is padded with blank pages of the first page's size until
/// its length is a multiple of four, then each pair of the booklet
/// sequence is drawn onto one landscape sheet.
pub fn impose_booklet<S, W>(
    source: &mut S,
    sink: &mut W,
    policy: PageSizePolicy,
) -> Result<BookletPlan>
where
    S: PageSource,
    W: SheetSink<S>,
{
    let page_count = source.page_count();
    if page_count == 0 {
        return Err(ImposeError::NoPages);
    }

    let (page_width, page_height) = source.page_dimensions(0)?;
    check_page_sizes(source, page_width, page_height, policy)?;

    let plan = plan_booklet(page_count, page_width, page_height)?;
    debug!(
        "Booklet plan: {} pages + {} blank, sequence {:?}",
        plan.source_pages, plan.blank_pages, plan.sequence
    );

    for _ in 0..plan.blank_pages {
        source.append_blank_page(page_width, page_height)?;
    }
    if source.page_count() != plan.padded_pages {
        return Err(ImposeError::ContractViolation(format!(
            "source has {} pages after padding, expected {}",
            source.page_count(),
            plan.padded_pages
        )));
    }

    let geometry = &plan.geometry;
    for sheet_index in 0..plan.sheets.len() {
        let mut sheet = sink.create_blank_sheet(geometry.sheet_width, geometry.sheet_height)?;
        let placements = plan.placements(sheet_index).ok_or_else(|| {
            ImposeError::ContractViolation(format!("no placements for sheet {}", sheet_index))
        })?;
        for placement in &placements {
            sink.merge_transformed(&mut sheet, source, placement)?;
        }
        sink.add_sheet(sheet)?;
    }

    let (sheet_width_mm, sheet_height_mm) = geometry.sheet_size_mm();
    info!(
        "Imposed {} pages ({} blank added) onto {} sheets of {:.0}x{:.0} mm",
        plan.source_pages,
        plan.blank_pages,
        sink.sheet_count(),
        sheet_width_mm,
        sheet_height_mm
    );
    Ok(plan)
}

/// Compare every page against the first page's size.
fn check_page_sizes<S: PageSource>(
    source: &S,
    expected_width: f32,
    expected_height: f32,
    policy: PageSizePolicy,
) -> Result<()> {
    for page_index in 1..source.page_count() {
        let (width, height) = source.page_dimensions(page_index)?;
        let matches = (width - expected_width).abs() <= DIMENSION_TOLERANCE_PT
            && (height - expected_height).abs() <= DIMENSION_TOLERANCE_PT;
        if matches {
            continue;
        }

        match policy {
            PageSizePolicy::RequireUniform => {
                return Err(ImposeError::NonUniformPages {
                    page: page_index + 1,
                    width,
                    height,
                    expected_width,
                    expected_height,
                });
            }
            PageSizePolicy::FirstPage => warn!(
                "Page {} is {}x{} pt, imposing it with the first page's {}x{} pt geometry",
                page_index + 1,
                width,
                height,
                expected_width,
                expected_height
            ),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Slot, SlotPlacement};

    /// In-memory backend recording every call
    #[derive(Default)]
    struct FakeSource {
        pages: Vec<(f32, f32)>,
        blanks_appended: usize,
    }

    impl FakeSource {
        fn uniform(count: usize, width: f32, height: f32) -> Self {
            Self {
                pages: vec![(width, height); count],
                blanks_appended: 0,
            }
        }
    }

    impl PageSource for FakeSource {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_dimensions(&self, page_index: usize) -> Result<(f32, f32)> {
            self.pages
                .get(page_index)
                .copied()
                .ok_or_else(|| ImposeError::ContractViolation("out of range".into()))
        }

        fn append_blank_page(&mut self, width: f32, height: f32) -> Result<()> {
            self.pages.push((width, height));
            self.blanks_appended += 1;
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct FakeSheet {
        size: (f32, f32),
        placements: Vec<SlotPlacement>,
    }

    #[derive(Default)]
    struct FakeSink {
        sheets: Vec<FakeSheet>,
    }

    impl SheetSink<FakeSource> for FakeSink {
        type Sheet = FakeSheet;

        fn create_blank_sheet(&mut self, width: f32, height: f32) -> Result<FakeSheet> {
            Ok(FakeSheet {
                size: (width, height),
                placements: Vec::new(),
            })
        }

        fn merge_transformed(
            &mut self,
            sheet: &mut FakeSheet,
            source: &FakeSource,
            placement: &SlotPlacement,
        ) -> Result<()> {
            source.page_dimensions(placement.page_index())?;
            sheet.placements.push(*placement);
            Ok(())
        }

        fn add_sheet(&mut self, sheet: FakeSheet) -> Result<()> {
            self.sheets.push(sheet);
            Ok(())
        }

        fn sheet_count(&self) -> usize {
            self.sheets.len()
        }
    }

    fn page_numbers(sink: &FakeSink) -> Vec<(usize, usize)> {
        sink.sheets
            .iter()
            .map(|s| (s.placements[0].page_number, s.placements[1].page_number))
            .collect()
    }

    #[test]
    fn test_six_pages_padded_and_ordered() {
        let mut source = FakeSource::uniform(6, 595.0, 842.0);
        let mut sink = FakeSink::default();

        let plan = impose_booklet(&mut source, &mut sink, PageSizePolicy::FirstPage).unwrap();

        assert_eq!(plan.blank_pages, 2);
        assert_eq!(source.blanks_appended, 2);
        assert_eq!(source.page_count(), 8);
        assert_eq!(
            page_numbers(&sink),
            vec![(8, 1), (2, 7), (6, 3), (4, 5)]
        );
    }

    #[test]
    fn test_sheets_are_landscape_with_slot_offsets() {
        let mut source = FakeSource::uniform(4, 595.0, 842.0);
        let mut sink = FakeSink::default();

        let plan = impose_booklet(&mut source, &mut sink, PageSizePolicy::FirstPage).unwrap();

        assert_eq!(sink.sheets.len(), 2);
        for sheet in &sink.sheets {
            assert_eq!(sheet.size, (842.0, 595.0));
            assert_eq!(sheet.placements[0].slot, Slot::Left);
            assert_eq!(
                (sheet.placements[0].x_offset, sheet.placements[0].y_offset),
                plan.geometry.left_offset
            );
            assert_eq!(sheet.placements[1].slot, Slot::Right);
            assert_eq!(
                (sheet.placements[1].x_offset, sheet.placements[1].y_offset),
                plan.geometry.right_offset
            );
        }
    }

    #[test]
    fn test_blank_pages_use_first_page_size() {
        let mut source = FakeSource::uniform(5, 612.0, 792.0);
        let mut sink = FakeSink::default();

        impose_booklet(&mut source, &mut sink, PageSizePolicy::FirstPage).unwrap();

        assert!(source.pages[5..].iter().all(|&p| p == (612.0, 792.0)));
    }

    #[test]
    fn test_empty_source() {
        let mut source = FakeSource::default();
        let mut sink = FakeSink::default();

        let result = impose_booklet(&mut source, &mut sink, PageSizePolicy::FirstPage);
        assert!(matches!(result, Err(ImposeError::NoPages)));
        assert!(sink.sheets.is_empty());
    }

    #[test]
    fn test_mixed_sizes_lenient() {
        let mut source = FakeSource::uniform(4, 595.0, 842.0);
        source.pages[2] = (612.0, 792.0);
        let mut sink = FakeSink::default();

        let plan = impose_booklet(&mut source, &mut sink, PageSizePolicy::FirstPage).unwrap();
        assert_eq!(plan.geometry.page_width, 595.0);
        assert_eq!(sink.sheets.len(), 2);
    }

    #[test]
    fn test_mixed_sizes_strict() {
        let mut source = FakeSource::uniform(4, 595.0, 842.0);
        source.pages[2] = (612.0, 792.0);
        let mut sink = FakeSink::default();

        let result = impose_booklet(&mut source, &mut sink, PageSizePolicy::RequireUniform);
        match result {
            Err(ImposeError::NonUniformPages { page, width, .. }) => {
                assert_eq!(page, 3);
                assert_eq!(width, 612.0);
            }
            other => panic!("Expected NonUniformPages, got {:?}", other),
        }
        assert_eq!(source.blanks_appended, 0);
        assert!(sink.sheets.is_empty());
    }

    #[test]
    fn test_zero_sized_first_page() {
        let mut source = FakeSource::uniform(4, 0.0, 842.0);
        let mut sink = FakeSink::default();

        let result = impose_booklet(&mut source, &mut sink, PageSizePolicy::FirstPage);
        assert!(matches!(result, Err(ImposeError::Validation(_))));
    }
}
