//! PDF booklet imposition
//!
//! This module orchestrates the imposition process:
//! 1. Load the source document
//! 2. Pad it to a multiple of four pages
//! 3. Order pages for saddle stitching
//! 4. Render two scaled pages per landscape output sheet

mod backend;
mod booklet;
mod io;

pub use backend::{PageSource, SheetSink};
pub use booklet::impose_booklet;
pub use io::{booklet_output_path, has_pdf_extension, load_pdf, save_pdf, validate_input_path};

use crate::options::BookletOptions;
use crate::render::{LopdfSheetWriter, LopdfSource};
use crate::stats::calculate_statistics;
use crate::types::*;
use log::info;
use lopdf::Document;
use std::path::PathBuf;

/// An imposed document together with what was done to produce it
#[derive(Debug, Clone)]
pub struct ImposedBooklet {
    pub document: Document,
    pub statistics: ImpositionStatistics,
}

/// Main imposition function
pub async fn impose(document: Document, options: &BookletOptions) -> Result<ImposedBooklet> {
    let policy = options.page_size_policy;
    tokio::task::spawn_blocking(move || impose_sync(document, policy)).await?
}

fn impose_sync(document: Document, policy: PageSizePolicy) -> Result<ImposedBooklet> {
    let mut source = LopdfSource::new(document);
    let mut writer = LopdfSheetWriter::new();

    let plan = impose_booklet(&mut source, &mut writer, policy)?;

    Ok(ImposedBooklet {
        document: writer.finish(),
        statistics: plan.statistics(),
    })
}

/// Load, impose and save in one step.
///
/// Returns the path written and the imposition statistics. Nothing is
/// written if any step fails.
pub async fn create_booklet(options: &BookletOptions) -> Result<(PathBuf, ImpositionStatistics)> {
    options.validate()?;
    validate_input_path(&options.input_file)?;

    let document = load_pdf(&options.input_file).await?;
    let expected = calculate_statistics(&document)?;
    info!(
        "{}: {} pages, {} blank pages to add",
        options.input_file.display(),
        expected.source_pages,
        expected.blank_pages_added
    );

    let imposed = impose(document, options).await?;

    let output = options.output_path();
    save_pdf(imposed.document, &output).await?;
    Ok((output, imposed.statistics))
}
