//! Ready-made queries for common searches on the searchable resources.
//!
//! Presets only call the public [QueryBuilder] surface. Every preset returns
//! a [QueryResult] holding the builder so callers can keep adding clauses,
//! in which case the connective the preset used stays locked. Only presets
//! that validate caller input, such as [customers_by_name], can fail today.
//!
//! ```rust
//! use search_query::preset::charges_with_status_since;
//!
//! # fn main() -> search_query::errors::QueryResult<()> {
//! let query = charges_with_status_since("succeeded", 1_700_000_000)?;
//! assert_eq!(query.build(), r#"status:"succeeded" AND created>=1700000000"#);
//! # Ok(())
//! # }
//! ```

use crate::common::{
    Number, Value, FIELD_AMOUNT, FIELD_CREATED, FIELD_CURRENCY, FIELD_EMAIL, FIELD_NAME,
    FIELD_STATUS,
};
use crate::errors::{QueryError, QueryResult};
use crate::query::{query, QueryBuilder};

/// Customers with the given email address.
pub fn customer_by_email(email: &str) -> QueryResult<QueryBuilder> {
    let mut builder = query();
    builder.field(FIELD_EMAIL).equals(email);
    Ok(builder)
}

/// Customers whose name contains `fragment`.
///
/// # Errors
///
/// Fails when `fragment` is shorter than three characters.
pub fn customers_by_name(fragment: &str) -> QueryResult<QueryBuilder> {
    let mut builder = query();
    builder
        .field(FIELD_NAME)
        .contains(fragment)
        .map_err(|err| preset_error("customers_by_name", err))?;
    Ok(builder)
}

/// Charges in `status` created at or after `since`.
///
/// `since` is typically a `chrono::DateTime`, rendered as unix seconds.
pub fn charges_with_status_since<N: Into<Number>>(
    status: &str,
    since: N,
) -> QueryResult<QueryBuilder> {
    let mut builder = query();
    builder
        .field(FIELD_STATUS)
        .equals(status)
        .and()?
        .field(FIELD_CREATED)
        .greater_than_or_equal(since);
    Ok(builder)
}

/// Charges above `amount` (in the smallest currency unit) in `currency`.
pub fn charges_over_amount<N: Into<Number>>(
    amount: N,
    currency: &str,
) -> QueryResult<QueryBuilder> {
    let mut builder = query();
    builder
        .field(FIELD_AMOUNT)
        .greater_than(amount)
        .and()?
        .field(FIELD_CURRENCY)
        .equals(currency);
    Ok(builder)
}

/// Payment intents tagged with `metadata[key]` equal to `value`.
pub fn payment_intents_by_metadata<T: Into<Value>>(
    key: &str,
    value: T,
) -> QueryResult<QueryBuilder> {
    by_metadata(key, value)
}

/// Invoices in `status` created within `[from, to]`.
pub fn invoices_with_status_between<N: Into<Number>, M: Into<Number>>(
    status: &str,
    from: N,
    to: M,
) -> QueryResult<QueryBuilder> {
    let mut builder = query();
    builder
        .field(FIELD_STATUS)
        .equals(status)
        .and()?
        .field(FIELD_CREATED)
        .between(from, to)?;
    Ok(builder)
}

/// Subscriptions in `status`.
pub fn subscriptions_with_status(status: &str) -> QueryResult<QueryBuilder> {
    let mut builder = query();
    builder.field(FIELD_STATUS).equals(status);
    Ok(builder)
}

/// Any resource tagged with `metadata[key]` equal to `value`.
pub fn by_metadata<T: Into<Value>>(key: &str, value: T) -> QueryResult<QueryBuilder> {
    let mut builder = query();
    builder.metadata(key).equals(value);
    Ok(builder)
}

fn preset_error(preset: &str, cause: QueryError) -> QueryError {
    QueryError::new_with_cause(
        &format!("Preset {} rejected its input: {}", preset, cause.message()),
        cause.kind().clone(),
        cause,
    )
}
