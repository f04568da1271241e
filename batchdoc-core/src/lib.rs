//! Batch results to formatted documents
//!
//!     This crate turns the results of a batch of model requests (a prompt, a status, and either
//!     a Markdown response or an error payload per request) into one formatted document.
//!     Succeeded requests become prompt/response pairs; failed ones are listed in an annex.
//!
//!     This is a pure lib: it powers batchdoc-cli but makes no assumption about a shell. Nothing
//!     here prints, reads environment variables or touches files.
//!
//! Architecture
//!
//!     The heart of the crate is the Markdown converter (./render), a recursive walk over a
//!     markup tree that emits document primitives. It never sees a concrete document type: it
//!     drives the [`document::DocumentModel`] trait, which the in-memory IR (./ir) implements.
//!     Output formats then serialize the finished IR.
//!
//!     Control flow of an export:
//!
//!         assembler  →  render (block → inline)  →  style::apply  →  DocumentModel (IR)
//!         IR  →  Format (docx, treeviz, json)  →  bytes
//!
//!     The file structure :
//!     .
//!     ├── assembler.rs            # Batch layout: prompts, responses, failed requests annex
//!     ├── batch.rs                # Raw and classified batch records, input decoding
//!     ├── document.rs             # DocumentModel trait and handles
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── style.rs                # Style descriptors, registry, resolution and apply
//!     ├── markup                  # Markdown → HTML → markup tree
//!     ├── render                  # Markup tree → document primitives
//!     ├── ir                      # Intermediate Representation
//!     ├── formats
//!     │   ├── docx                # docx-rs writer, styles and numbering
//!     │   ├── treeviz             # Textual tree dump
//!     │   └── json                # serde dump of the IR
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common
//!     ├── markdown                # converter behaviour from Markdown sources
//!     ├── batch                   # end to end exports
//!     └── formats                 # docx packaging and treeviz snapshots
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Styling
//!
//!     Styles are looked up by name in a [`style::StyleRegistry`] and merged with local overrides
//!     field by field. Emphasis never leaks between runs: every run gets bold and italic written
//!     explicitly, and nested markup is resolved by merging styles on the way down the tree.

pub mod assembler;
pub mod batch;
pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod markup;
pub mod registry;
pub mod render;
pub mod style;

pub use assembler::{build_document, export, export_with, Assembler, ExportOptions};
pub use batch::{load_batch, parse_batch, BatchRecord, ErrorPayload, RawRecord};
pub use document::DocumentModel;
pub use error::{ExportError, Result};
pub use format::{Format, SerializedDocument};
pub use registry::FormatRegistry;
pub use render::{ConverterOptions, MarkdownConverter};
pub use style::{Rgb, StyleDescriptor, StyleOverrides, StyleRegistry};
