use super::*;
use crate::core::guarded;

mod error;
mod rule;
mod check;

pub use error::TypeError;
pub use rule::function_universe;
pub use check::{type_of, Checker};
