//! Layout data types for imposition
//!
//! These types represent the intermediate layout calculations between
//! page ordering and PDF rendering.

/// Which half of an output sheet a source page lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Left half (x from 0 to slot width)
    Left,
    /// Right half (x from slot width to sheet width)
    Right,
}

/// The two 1-based source page numbers drawn on one output sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetAssignment {
    pub left: usize,
    pub right: usize,
}

impl SheetAssignment {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Page numbers in slot order, left first
    pub fn slots(self) -> [(Slot, usize); 2] {
        [(Slot::Left, self.left), (Slot::Right, self.right)]
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `other` lies inside this rectangle, allowing `tolerance` points of rounding
    pub fn contains(&self, other: &Rect, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.top() <= self.top() + tolerance
    }
}

/// Final placement of a source page on the output sheet
///
/// This is the result of all layout calculations and contains
/// everything needed to render the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPlacement {
    /// 1-based page number in the padded source document
    pub page_number: usize,
    /// Which half of the sheet
    pub slot: Slot,
    /// Uniform scale factor applied to the source page
    pub scale: f32,
    /// Translation from the sheet's lower-left corner in points
    pub x_offset: f32,
    pub y_offset: f32,
}

impl SlotPlacement {
    /// 0-based index of the source page
    pub fn page_index(&self) -> usize {
        self.page_number - 1
    }
}
