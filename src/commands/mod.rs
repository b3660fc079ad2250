//! Command implementations

mod check;
mod compare;
mod min;
mod parse;
mod ranges;

pub use check::check;
pub use compare::compare;
pub use min::min;
pub use parse::parse;
pub use ranges::ranges;
