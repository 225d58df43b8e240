use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Imposition contract violated: {0}")]
    ContractViolation(String),
    #[error(
        "Page {page} is {width}x{height} pt but the first page is {expected_width}x{expected_height} pt"
    )]
    NonUniformPages {
        page: usize,
        width: f32,
        height: f32,
        expected_width: f32,
        expected_height: f32,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// How to treat source pages whose size differs from the first page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSizePolicy {
    /// Use the first page's size for every page, warning on mismatches
    #[default]
    FirstPage,
    /// Fail when any page differs from the first page
    RequireUniform,
}

/// Statistics about the imposition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpositionStatistics {
    /// Number of pages in the source before padding
    pub source_pages: usize,
    /// Number of blank pages added for padding
    pub blank_pages_added: usize,
    /// Source pages after padding (always a multiple of 4)
    pub padded_pages: usize,
    /// Number of output PDF pages (two source pages each)
    pub output_sheets: usize,
    /// Number of physical sheets of paper when printed duplex
    pub paper_sheets: usize,
}
