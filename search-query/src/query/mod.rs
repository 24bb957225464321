//! Fluent construction of search query strings.
//!
//! A query is an ordered list of clauses. Field clauses compare a field (or a
//! `metadata["key"]` entry) with a value; logical clauses join them with
//! `AND` or `OR`.
//!
//! # Creating Queries
//!
//! - `query().field("amount").greater_than(1000)` - comparison operators
//! - `query().not("currency").equals("jpy")` - negated clauses
//! - `query().metadata("order_id").equals("6735")` - metadata lookups
//! - `builder.and()?` / `builder.or()?` - connectives
//!
//! # Examples
//!
//! ```rust
//! use search_query::query::query;
//!
//! # fn main() -> search_query::errors::QueryResult<()> {
//! let mut builder = query();
//! builder
//!     .field("email").contains("rocketrides")?
//!     .or()?
//!     .metadata("donation-id").equals("asdf-jkl");
//!
//! assert_eq!(
//!     builder.build(),
//!     r#"email~"rocketrides" OR metadata["donation-id"]:"asdf-jkl""#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Supported Operators
//!
//! - **Equality**: `equals`, `is_null` (`:`)
//! - **Substring**: `contains` (`~`, at least three characters)
//! - **Comparison**: `greater_than`, `less_than`, `greater_than_or_equal`,
//!   `less_than_or_equal`, `between` (plain fields only)
//! - **Logical**: `and`, `or` (one kind per query)

mod builder;
mod clause;
mod fluent;

pub use builder::*;
pub use clause::*;
pub use fluent::*;
