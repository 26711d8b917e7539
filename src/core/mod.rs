use super::*;

mod label;
mod term;
mod ctx;
mod shift;
mod normalize;
mod equal;
mod render;
mod stack;

pub use label::{Label, V};
pub use term::{Double, Term, TermKind, Universe};
pub use ctx::Ctx;
pub use equal::judgmentally_equal;
pub(crate) use stack::guarded;
