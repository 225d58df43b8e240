use crate::impose::{booklet_output_path, has_pdf_extension};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet imposition configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Input
    pub input_file: PathBuf,

    // Output, defaults to `<stem>_booklet.pdf` next to the input
    pub output_file: Option<PathBuf>,

    // What to do when pages differ in size from the first page
    pub page_size_policy: PageSizePolicy,
}

impl BookletOptions {
    /// Options for imposing `input` with every other setting at its default
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input.into(),
            ..Default::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Where the booklet will be written
    pub fn output_path(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| booklet_output_path(&self.input_file))
    }

    /// Validate the options
    ///
    /// Only checks the configuration itself; whether the input exists is
    /// checked when the file is opened.
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(ImposeError::Config("No input file specified".to_string()));
        }

        if !has_pdf_extension(&self.input_file) {
            return Err(ImposeError::InvalidInput(format!(
                "{} is not a PDF file",
                self.input_file.display()
            )));
        }

        if let Some(output) = &self.output_file {
            if !has_pdf_extension(output) {
                return Err(ImposeError::Config(format!(
                    "Output file {} must have a .pdf extension",
                    output.display()
                )));
            }
            if output == &self.input_file {
                return Err(ImposeError::Config(
                    "Output file must differ from the input file".to_string(),
                ));
            }
        }

        Ok(())
    }
}
