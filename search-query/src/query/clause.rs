use std::fmt::{Display, Formatter};

use crate::common::{
    format_value, Value, AND_TOKEN, MIN_SUBSTRING_LENGTH, NEGATION_PREFIX, OP_CONTAINS,
    OP_EQUALS, OP_GREATER, OP_GREATER_EQUAL, OP_LESSER, OP_LESSER_EQUAL, OR_TOKEN,
};
use crate::errors::{ErrorKind, QueryError, QueryResult};

/// Comparison operator of a field clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `:` exact match, also used for null checks
    Equals,
    /// `~` substring match
    Contains,
    /// `>`
    Greater,
    /// `<`
    Lesser,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LesserEqual,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equals => OP_EQUALS,
            Operator::Contains => OP_CONTAINS,
            Operator::Greater => OP_GREATER,
            Operator::Lesser => OP_LESSER,
            Operator::GreaterEqual => OP_GREATER_EQUAL,
            Operator::LesserEqual => OP_LESSER_EQUAL,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Logical connective joining two field clauses.
///
/// A query uses at most one connective kind, see
/// [QueryBuilder::locked_connective](super::QueryBuilder::locked_connective).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub fn token(&self) -> &'static str {
        match self {
            Connective::And => AND_TOKEN,
            Connective::Or => OR_TOKEN,
        }
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A single comparison such as `-currency:"jpy"` or `amount>1000`.
///
/// `field` holds the final field expression, so a metadata clause stores
/// `metadata["key"]` with the key already escaped.
///
/// Deserialized clauses go through the same checks as the fluent builders:
/// `~` needs a string of at least three characters and range operators need
/// a number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFieldClause"))]
pub struct FieldClause {
    field: String,
    operator: Operator,
    value: Value,
    negated: bool,
}

impl FieldClause {
    pub(crate) fn new(field: String, operator: Operator, value: Value, negated: bool) -> Self {
        FieldClause {
            field,
            operator,
            value,
            negated,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    fn validate(&self) -> QueryResult<()> {
        match (self.operator, &self.value) {
            (Operator::Equals, _) => Ok(()),
            (Operator::Contains, Value::String(text)) => validate_substring(&self.field, text),
            (
                Operator::Greater
                | Operator::Lesser
                | Operator::GreaterEqual
                | Operator::LesserEqual,
                Value::Number(_),
            ) => Ok(()),
            (operator, value) => {
                log::error!("Operator {} does not accept value {}", operator, value);
                Err(QueryError::new(
                    &format!(
                        "Operator {} on {} does not accept value {}",
                        operator, self.field, value
                    ),
                    ErrorKind::InvalidClause,
                ))
            }
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFieldClause {
    field: String,
    operator: Operator,
    value: Value,
    negated: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFieldClause> for FieldClause {
    type Error = QueryError;

    fn try_from(raw: RawFieldClause) -> QueryResult<Self> {
        let clause = FieldClause::new(raw.field, raw.operator, raw.value, raw.negated);
        clause.validate()?;
        Ok(clause)
    }
}

pub(crate) fn validate_substring(field: &str, value: &str) -> QueryResult<()> {
    let length = value.chars().count();
    if length < MIN_SUBSTRING_LENGTH {
        log::error!(
            "Substring {:?} for {} has {} characters, at least {} required",
            value,
            field,
            length,
            MIN_SUBSTRING_LENGTH
        );
        return Err(QueryError::new(
            &format!(
                "Substring for {} must have at least {} characters",
                field, MIN_SUBSTRING_LENGTH
            ),
            ErrorKind::SubstringTooShort,
        ));
    }
    Ok(())
}

impl Display for FieldClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let prefix = if self.negated { NEGATION_PREFIX } else { "" };
        write!(
            f,
            "{}{}{}{}",
            prefix,
            self.field,
            self.operator,
            format_value(&self.value)
        )
    }
}

/// One entry of a query, kept in the order it was added.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Clause {
    Field(FieldClause),
    Logical(Connective),
}

impl Clause {
    #[inline]
    pub fn is_logical(&self) -> bool {
        matches!(self, Clause::Logical(_))
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Clause::Field(clause) => write!(f, "{}", clause),
            Clause::Logical(connective) => write!(f, "{}", connective),
        }
    }
}
