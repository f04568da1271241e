//! Format implementations
//!
//! This module contains all output formats. Each one serializes the finished IR document.

pub mod docx;
pub mod json;
pub mod treeviz;

pub use docx::DocxFormat;
pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
