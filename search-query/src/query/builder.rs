use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

use crate::common::{escape_and_quote, Number, Value, METADATA_FIELD, TOKEN_SEPARATOR};
use crate::errors::{ErrorKind, QueryError, QueryResult};

use super::{Clause, Connective, FieldClause, FieldClauseBuilder, MetadataClauseBuilder, Operator};

/// Accumulates clauses and renders them into a search query string.
///
/// Every fluent call mutates the builder in place and hands back a reference
/// so calls can be chained. Field clauses are started with [field](Self::field),
/// [not](Self::not), [metadata](Self::metadata) or
/// [not_metadata](Self::not_metadata); the returned sub-builder appends the
/// clause when one of its terminal operations is called.
///
/// A query can be joined with `AND` or with `OR`, never both. The first
/// connective requested locks the builder to that kind until [reset](Self::reset).
///
/// # Examples
///
/// ```rust
/// use search_query::query::QueryBuilder;
///
/// # fn main() -> search_query::errors::QueryResult<()> {
/// let mut builder = QueryBuilder::new();
/// builder
///     .field("status").equals("active")
///     .and()?
///     .not("currency").equals("jpy");
///
/// assert_eq!(builder.build(), r#"status:"active" AND -currency:"jpy""#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBuilder {
    clauses: Vec<Clause>,
    locked_connective: Option<Connective>,
}

impl QueryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        QueryBuilder {
            clauses: Vec::new(),
            locked_connective: None,
        }
    }

    /// Starts a clause on a plain field.
    pub fn field(&mut self, name: &str) -> FieldClauseBuilder<'_> {
        FieldClauseBuilder::new(self, name.to_string(), false)
    }

    /// Starts a negated clause on a plain field, rendered with a leading `-`.
    pub fn not(&mut self, name: &str) -> FieldClauseBuilder<'_> {
        FieldClauseBuilder::new(self, name.to_string(), true)
    }

    /// Starts a clause on `metadata["key"]`.
    pub fn metadata(&mut self, key: &str) -> MetadataClauseBuilder<'_> {
        MetadataClauseBuilder::new(self, metadata_field(key), false)
    }

    /// Starts a negated clause on `metadata["key"]`.
    pub fn not_metadata(&mut self, key: &str) -> MetadataClauseBuilder<'_> {
        MetadataClauseBuilder::new(self, metadata_field(key), true)
    }

    /// Appends an `AND` connective.
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::MixedConnective] if the builder already uses `OR`.
    pub fn and(&mut self) -> QueryResult<&mut Self> {
        self.push_connective(Connective::And)?;
        Ok(self)
    }

    /// Appends an `OR` connective.
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::MixedConnective] if the builder already uses `AND`.
    pub fn or(&mut self) -> QueryResult<&mut Self> {
        self.push_connective(Connective::Or)?;
        Ok(self)
    }

    /// Renders the query string.
    ///
    /// Connectives before the first field clause are dropped, runs of
    /// connectives collapse into the first one and a trailing connective is
    /// removed. Rendering never changes the builder.
    pub fn build(&self) -> String {
        let mut tokens: SmallVec<[String; 8]> = SmallVec::new();
        let mut last_was_logical = false;
        let mut has_field = false;

        for clause in &self.clauses {
            match clause {
                Clause::Field(field) => {
                    tokens.push(field.to_string());
                    last_was_logical = false;
                    has_field = true;
                }
                Clause::Logical(connective) => {
                    if !has_field || last_was_logical {
                        continue;
                    }
                    tokens.push(connective.token().to_string());
                    last_was_logical = true;
                }
            }
        }

        if last_was_logical {
            tokens.pop();
        }

        let query = tokens.iter().join(TOKEN_SEPARATOR);
        log::trace!("Rendered {} clauses into query {}", self.clauses.len(), query);
        query
    }

    /// Clears all clauses and the connective lock.
    pub fn reset(&mut self) -> &mut Self {
        log::debug!(
            "Resetting query builder with {} clauses and lock {:?}",
            self.clauses.len(),
            self.locked_connective
        );
        self.clauses.clear();
        self.locked_connective = None;
        self
    }

    /// Returns the clauses in the order they were added.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns the connective this builder is locked to, if any was used yet.
    pub fn locked_connective(&self) -> Option<Connective> {
        self.locked_connective
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub(crate) fn push_field(&mut self, field: FieldClause) {
        self.clauses.push(Clause::Field(field));
    }

    /// Appends `field >= min AND field <= max` as one unit, both bounds
    /// carrying the same negation.
    ///
    /// The lock is checked first so a rejected range leaves no clause behind.
    pub(crate) fn push_range(
        &mut self,
        field: String,
        min: Number,
        max: Number,
        negated: bool,
    ) -> QueryResult<()> {
        self.check_connective(Connective::And)?;
        self.push_field(FieldClause::new(
            field.clone(),
            Operator::GreaterEqual,
            Value::Number(min),
            negated,
        ));
        self.push_connective(Connective::And)?;
        self.push_field(FieldClause::new(
            field,
            Operator::LesserEqual,
            Value::Number(max),
            negated,
        ));
        Ok(())
    }

    fn push_connective(&mut self, connective: Connective) -> QueryResult<()> {
        self.check_connective(connective)?;
        if self.locked_connective.is_none() {
            log::debug!("Query builder locked to {}", connective);
            self.locked_connective = Some(connective);
        }
        self.clauses.push(Clause::Logical(connective));
        Ok(())
    }

    fn check_connective(&self, connective: Connective) -> QueryResult<()> {
        match self.locked_connective {
            Some(locked) if locked != connective => {
                log::error!(
                    "Cannot use {} in a query already joined with {}",
                    connective,
                    locked
                );
                Err(QueryError::new(
                    &format!(
                        "Cannot use {} in a query already joined with {}, reset the builder to switch",
                        connective, locked
                    ),
                    ErrorKind::MixedConnective,
                ))
            }
            _ => Ok(()),
        }
    }
}

impl Display for QueryBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

fn metadata_field(key: &str) -> String {
    format!("{}[{}]", METADATA_FIELD, escape_and_quote(key))
}
