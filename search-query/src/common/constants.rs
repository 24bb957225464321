// grammar constants
pub const MIN_SUBSTRING_LENGTH: usize = 3;
pub const METADATA_FIELD: &str = "metadata";
pub const NULL_LITERAL: &str = "null";
pub const NEGATION_PREFIX: &str = "-";
pub const AND_TOKEN: &str = "AND";
pub const OR_TOKEN: &str = "OR";
pub const TOKEN_SEPARATOR: &str = " ";

// operator constants
pub const OP_EQUALS: &str = ":";
pub const OP_CONTAINS: &str = "~";
pub const OP_GREATER: &str = ">";
pub const OP_LESSER: &str = "<";
pub const OP_GREATER_EQUAL: &str = ">=";
pub const OP_LESSER_EQUAL: &str = "<=";

// well known searchable fields
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_CREATED: &str = "created";
pub const FIELD_CURRENCY: &str = "currency";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_NAME: &str = "name";
pub const FIELD_STATUS: &str = "status";
