//! Document ingestion module.
//!
//! Turns a lecture document into a searchable store. Key pieces:
//!
//! - Text extraction for PDF, plain text and markdown
//! - Overlapping word-window chunking
//! - Ingestion pipeline orchestration
//!
//! # Safety
//!
//! The chunker slices on whitespace-separated words, never on byte
//! offsets, so documents containing emojis or other multi-byte
//! characters cannot cause a panic.

pub mod chunker;
pub mod extract;
pub mod pipeline;

pub use chunker::{is_separator, words, Chunker};
pub use extract::{extract_text, DocumentKind};
pub use pipeline::{source_label, IngestionPipeline};
