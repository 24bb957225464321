use crate::common::{Number, Value};
use crate::errors::QueryResult;

use super::{validate_substring, FieldClause, Operator, QueryBuilder};

/// Creates an empty [QueryBuilder].
///
/// ```rust
/// use search_query::query::query;
///
/// assert_eq!(query().field("amount").greater_than(1000).build(), "amount>1000");
/// ```
pub fn query() -> QueryBuilder {
    QueryBuilder::new()
}

/// A fluent builder for one clause on a plain field.
///
/// Returned by [QueryBuilder::field] and [QueryBuilder::not]. Each terminal
/// method consumes the sub-builder, appends the clause to the owning
/// [QueryBuilder] and returns it for further chaining.
///
/// # Responsibilities
///
/// * **Equality**: `equals` and `is_null`
/// * **Substring Matching**: `contains`
/// * **Range Comparison**: `greater_than`, `less_than`, their inclusive forms and `between`
pub struct FieldClauseBuilder<'a> {
    builder: &'a mut QueryBuilder,
    field: String,
    negated: bool,
}

impl<'a> FieldClauseBuilder<'a> {
    pub(crate) fn new(builder: &'a mut QueryBuilder, field: String, negated: bool) -> Self {
        FieldClauseBuilder {
            builder,
            field,
            negated,
        }
    }

    /// Matches the field against a string, a number or null (`field:value`).
    pub fn equals<T: Into<Value>>(self, value: T) -> &'a mut QueryBuilder {
        self.push(Operator::Equals, value.into())
    }

    /// Matches a substring of the field (`field~"value"`).
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::SubstringTooShort] if `value` has fewer than three
    /// characters. Nothing is appended in that case.
    pub fn contains(self, value: &str) -> QueryResult<&'a mut QueryBuilder> {
        validate_substring(&self.field, value)?;
        Ok(self.push(Operator::Contains, Value::from(value)))
    }

    /// `field>value`
    pub fn greater_than<N: Into<Number>>(self, value: N) -> &'a mut QueryBuilder {
        self.push(Operator::Greater, Value::Number(value.into()))
    }

    /// `field<value`
    pub fn less_than<N: Into<Number>>(self, value: N) -> &'a mut QueryBuilder {
        self.push(Operator::Lesser, Value::Number(value.into()))
    }

    /// `field>=value`
    pub fn greater_than_or_equal<N: Into<Number>>(self, value: N) -> &'a mut QueryBuilder {
        self.push(Operator::GreaterEqual, Value::Number(value.into()))
    }

    /// `field<=value`
    pub fn less_than_or_equal<N: Into<Number>>(self, value: N) -> &'a mut QueryBuilder {
        self.push(Operator::LesserEqual, Value::Number(value.into()))
    }

    /// Matches a field with no value (`field:null`).
    pub fn is_null(self) -> &'a mut QueryBuilder {
        self.push(Operator::Equals, Value::Null)
    }

    /// Matches an inclusive range, rendered as `field>=min AND field<=max`.
    ///
    /// The joining `AND` counts as a connective of the query, so a range
    /// cannot be added to a query joined with `OR`. On a [QueryBuilder::not]
    /// field both bounds are negated: `-field>=min AND -field<=max`.
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::MixedConnective] if the query already uses `OR`.
    pub fn between<N: Into<Number>, M: Into<Number>>(
        self,
        min: N,
        max: M,
    ) -> QueryResult<&'a mut QueryBuilder> {
        self.builder
            .push_range(self.field, min.into(), max.into(), self.negated)?;
        Ok(self.builder)
    }

    fn push(self, operator: Operator, value: Value) -> &'a mut QueryBuilder {
        self.builder
            .push_field(FieldClause::new(self.field, operator, value, self.negated));
        self.builder
    }
}

/// A fluent builder for one clause on a `metadata["key"]` field.
///
/// Metadata values are free-form strings, so only equality, substring and
/// null checks are offered.
pub struct MetadataClauseBuilder<'a> {
    builder: &'a mut QueryBuilder,
    field: String,
    negated: bool,
}

impl<'a> MetadataClauseBuilder<'a> {
    pub(crate) fn new(builder: &'a mut QueryBuilder, field: String, negated: bool) -> Self {
        MetadataClauseBuilder {
            builder,
            field,
            negated,
        }
    }

    /// `metadata["key"]:value`
    pub fn equals<T: Into<Value>>(self, value: T) -> &'a mut QueryBuilder {
        self.push(Operator::Equals, value.into())
    }

    /// `metadata["key"]~"value"`
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::SubstringTooShort] if `value` has fewer than three
    /// characters.
    pub fn contains(self, value: &str) -> QueryResult<&'a mut QueryBuilder> {
        validate_substring(&self.field, value)?;
        Ok(self.push(Operator::Contains, Value::from(value)))
    }

    /// `metadata["key"]:null`
    pub fn is_null(self) -> &'a mut QueryBuilder {
        self.push(Operator::Equals, Value::Null)
    }

    fn push(self, operator: Operator, value: Value) -> &'a mut QueryBuilder {
        self.builder
            .push_field(FieldClause::new(self.field, operator, value, self.negated));
        self.builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::query::{Clause, Connective};

    #[test]
    fn test_query_factory_returns_empty_builder() {
        let builder = query();
        assert!(builder.is_empty());
        assert_eq!(builder.build(), "");
    }

    #[test]
    fn test_contains_on_field() {
        let mut builder = query();
        builder.field("name").contains("Jane").unwrap();
        assert_eq!(builder.build(), "name~\"Jane\"");
    }

    #[test]
    fn test_contains_exactly_three_characters() {
        let mut builder = query();
        builder.field("name").contains("Jan").unwrap();
        assert_eq!(builder.build(), "name~\"Jan\"");
    }

    #[test]
    fn test_contains_counts_characters_not_bytes() {
        let mut builder = query();
        let err = builder.field("name").contains("éé").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::SubstringTooShort);
        builder.field("name").contains("ééé").unwrap();
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_metadata_contains_too_short() {
        let mut builder = query();
        let err = builder.metadata("order").contains("12").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::SubstringTooShort);
        assert!(builder.is_empty());
    }

    #[test]
    fn test_negated_metadata_contains() {
        let mut builder = query();
        builder.not_metadata("order").contains("6735").unwrap();
        assert_eq!(builder.build(), "-metadata[\"order\"]~\"6735\"");
    }

    #[test]
    fn test_range_operators() {
        let mut builder = query();
        builder
            .field("a")
            .greater_than(1)
            .and()
            .unwrap()
            .field("b")
            .less_than(2.5)
            .and()
            .unwrap()
            .field("c")
            .greater_than_or_equal(3)
            .and()
            .unwrap()
            .field("d")
            .less_than_or_equal(-4);
        assert_eq!(builder.build(), "a>1 AND b<2.5 AND c>=3 AND d<=-4");
    }

    #[test]
    fn test_negated_field_is_null() {
        let mut builder = query();
        builder.not("email").is_null();
        assert_eq!(builder.build(), "-email:null");
    }

    #[test]
    fn test_between_clause_order() {
        let mut builder = query();
        builder.field("amount").between(10, 20.5).unwrap();
        let clauses = builder.clauses();
        assert!(matches!(&clauses[0], Clause::Field(f) if f.operator() == Operator::GreaterEqual));
        assert_eq!(clauses[1], Clause::Logical(Connective::And));
        assert!(matches!(&clauses[2], Clause::Field(f) if f.operator() == Operator::LesserEqual));
        assert_eq!(builder.build(), "amount>=10 AND amount<=20.5");
    }

    #[test]
    fn test_between_on_negated_field_negates_both_bounds() {
        let mut plain = query();
        plain.field("amount").between(1000, 5000).unwrap();

        let mut negated = query();
        negated.not("amount").between(1000, 5000).unwrap();

        assert_ne!(negated.build(), plain.build());
        assert_eq!(negated.build(), "-amount>=1000 AND -amount<=5000");
        for clause in negated.clauses() {
            if let Clause::Field(field) = clause {
                assert!(field.is_negated());
            }
        }
    }

    #[test]
    fn test_between_after_field_clause_in_and_query() {
        let mut builder = query();
        builder
            .field("currency")
            .equals("usd")
            .and()
            .unwrap()
            .field("amount")
            .between(100, 200)
            .unwrap();
        assert_eq!(
            builder.build(),
            "currency:\"usd\" AND amount>=100 AND amount<=200"
        );
    }
}
