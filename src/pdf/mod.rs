//! Renders a filled [`FormSnapshot`](crate::models::request::FormSnapshot)
//! to a paginated PDF sheet with a fixed output configuration.

mod layout;
mod options;
mod sheet;

pub use options::{Orientation, PageFormat, PdfOptions, Unit};
pub use sheet::render;

use std::fmt;

#[derive(Debug)]
pub enum PdfError {
    InvalidOptions(String),
    Backend(printpdf::Error),
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::InvalidOptions(msg) => write!(f, "Invalid export options: {msg}"),
            PdfError::Backend(e) => write!(f, "PDF backend error: {e}"),
        }
    }
}

impl From<printpdf::Error> for PdfError {
    fn from(e: printpdf::Error) -> Self {
        PdfError::Backend(e)
    }
}
