//! Sheet geometry for two-up booklet sheets
//!
//! The output sheet is the landscape rotation of the source page. It is
//! split into two equal slots and each source page is scaled uniformly to
//! fit its slot, then centred in both axes.

use crate::constants::pt_to_mm;
use crate::types::{ImposeError, Result};

use super::{Rect, Slot, SlotPlacement};

/// Everything needed to place source pages on an output sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    /// Source page width in points
    pub page_width: f32,
    /// Source page height in points
    pub page_height: f32,
    /// Output sheet width (the longer source dimension)
    pub sheet_width: f32,
    /// Output sheet height (the shorter source dimension)
    pub sheet_height: f32,
    pub slot_width: f32,
    pub slot_height: f32,
    /// Uniform scale applied to every source page
    pub scale: f32,
    /// Lower-left corner of the scaled page in the left slot
    pub left_offset: (f32, f32),
    /// Lower-left corner of the scaled page in the right slot
    pub right_offset: (f32, f32),
}

/// Compute sheet size, scale and slot offsets for a source page size.
///
/// Dimensions must be positive and finite.
pub fn compute_geometry(page_width: f32, page_height: f32) -> Result<SheetGeometry> {
    validate_dimension("page width", page_width)?;
    validate_dimension("page height", page_height)?;

    let sheet_width = page_width.max(page_height);
    let sheet_height = page_width.min(page_height);
    let slot_width = sheet_width / 2.0;
    let slot_height = sheet_height;

    let scale = (slot_width / page_width).min(slot_height / page_height);
    let x_off_left = (slot_width - page_width * scale) / 2.0;
    let y_off = (slot_height - page_height * scale) / 2.0;
    let x_off_right = slot_width + x_off_left;

    Ok(SheetGeometry {
        page_width,
        page_height,
        sheet_width,
        sheet_height,
        slot_width,
        slot_height,
        scale,
        left_offset: (x_off_left, y_off),
        right_offset: (x_off_right, y_off),
    })
}

fn validate_dimension(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ImposeError::Validation(format!(
            "{} must be a positive number of points, got {}",
            name, value
        )));
    }
    Ok(())
}

impl SheetGeometry {
    /// Offset of the scaled page within the given slot
    pub fn offset(&self, slot: Slot) -> (f32, f32) {
        match slot {
            Slot::Left => self.left_offset,
            Slot::Right => self.right_offset,
        }
    }

    /// Placement of a 1-based source page into a slot
    pub fn placement(&self, slot: Slot, page_number: usize) -> SlotPlacement {
        let (x_offset, y_offset) = self.offset(slot);
        SlotPlacement {
            page_number,
            slot,
            scale: self.scale,
            x_offset,
            y_offset,
        }
    }

    /// The slot's area on the sheet
    pub fn slot_bounds(&self, slot: Slot) -> Rect {
        let x = match slot {
            Slot::Left => 0.0,
            Slot::Right => self.slot_width,
        };
        Rect::new(x, 0.0, self.slot_width, self.slot_height)
    }

    /// Area covered by the scaled source page in a slot
    pub fn content_bounds(&self, slot: Slot) -> Rect {
        let (x, y) = self.offset(slot);
        Rect::new(
            x,
            y,
            self.page_width * self.scale,
            self.page_height * self.scale,
        )
    }

    /// Sheet size in millimeters, for reporting
    pub fn sheet_size_mm(&self) -> (f32, f32) {
        (pt_to_mm(self.sheet_width), pt_to_mm(self.sheet_height))
    }
}
