//! PDF rendering modules for imposition
//!
//! This module handles all PDF-specific operations:
//! - Reading page sizes and padding the source document
//! - Creating XObjects from source pages
//! - Building imposed output sheets
//! - Deep copying PDF objects

mod sheet;
mod source;
mod xobject;

pub use sheet::{LopdfSheet, LopdfSheetWriter};
pub use source::LopdfSource;
pub use xobject::{copy_object_deep, create_page_xobject, get_media_box, get_page_dimensions};
