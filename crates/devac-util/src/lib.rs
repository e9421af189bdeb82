//! devac-util - Shared foundation types for the devac pipeline.
//!
//! Holds the two things every later stage needs and none of them should
//! redefine: source-position tracking ([`Span`]) and diagnostic collection
//! ([`Handler`]/[`Diagnostic`]). Nothing in this crate knows about tokens,
//! the AST, or types - those live in `devac-lex`, `devac-par`, and
//! `devac-sem` respectively.

mod diagnostic;
mod error;
mod span;

pub use diagnostic::{Diagnostic, Handler};
pub use error::{DevacError, DevacResult};
pub use span::Span;
