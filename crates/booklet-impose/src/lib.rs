pub mod constants;
pub mod impose;
pub mod layout;
mod options;
pub mod render;
mod stats;
mod types;

pub use impose::{
    ImposedBooklet, booklet_output_path, create_booklet, impose, impose_booklet, load_pdf,
    save_pdf, validate_input_path,
};
pub use layout::{
    BookletPlan, SheetAssignment, SheetGeometry, Slot, SlotPlacement, compute_geometry,
    compute_padding, compute_sequence, plan_booklet, sheet_assignments,
};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
