//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for invoice pages. The IR is a list
//! of absolute drawing ops per page that sits between the page renderer
//! and the PDF byte stream.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │  Renderer   │ ──► │     IR      │ ──► │ Optimizer │ ──► │ Codegen  │
//! │ (page/copy) │     │ (Document)  │     │           │     │  (PDF)   │
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: tests assert on what each page draws
//! 2. **Deterministic**: identical input gives identical ops
//! 3. **Testable**: no PDF parsing needed to check layout
//!
//! ## Example
//!
//! ```
//! use autobill::ir::{Align, Document, FontWeight, Op};
//!
//! let mut doc = Document::new();
//! doc.push(Op::SetFont { weight: FontWeight::Bold, size: 12.0 });
//! doc.push(Op::Text { x: 105.0, y: 20.0, content: "HELLO".into(), align: Align::Center });
//!
//! let bytes = doc.optimize().to_pdf("demo").unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//! ```

mod codegen;
mod ops;
mod optimize;

pub use ops::*;
