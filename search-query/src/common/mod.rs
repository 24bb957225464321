//! Common types shared by the query builder: values, escaping and constants.

mod constants;
mod escape;
mod type_utils;
mod value;

pub use constants::*;
pub use escape::*;
pub use type_utils::*;
pub use value::*;
