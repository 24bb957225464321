//! # search_query - Fluent Search Query Builder
//!
//! `search_query` assembles query strings for a search service that accepts
//! field comparisons, metadata lookups, negation, null checks and a single
//! kind of logical connective per query.
//!
//! ## Key Features
//!
//! - **Fluent**: clauses are chained directly on the builder
//! - **Typed**: metadata clauses only offer the operators metadata supports,
//!   range operators only accept numbers
//! - **Safe Escaping**: string values and metadata keys are quoted and escaped
//! - **Forgiving Rendering**: stray connectives are collapsed or dropped
//! - **Presets**: ready-made queries for customers, charges, invoices and more
//!
//! ## Quick Start
//!
//! ```rust
//! use search_query::query::query;
//!
//! # fn main() -> search_query::errors::QueryResult<()> {
//! let mut builder = query();
//! builder
//!     .field("amount").between(1000, 5000)?
//!     .and()?
//!     .not("currency").equals("jpy");
//!
//! assert_eq!(
//!     builder.build(),
//!     r#"amount>=1000 AND amount<=5000 AND -currency:"jpy""#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`common`] - Values, escaping and constants
//! - [`errors`] - Error types and result definitions
//! - [`preset`] - Ready-made queries per resource
//! - [`query`] - The query builder and its clause sub-builders

pub mod common;
pub mod errors;
pub mod preset;
pub mod query;

pub use query::{query, QueryBuilder};
