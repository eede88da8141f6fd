//! Semantic accessibility types.
//!
//! Roles, subroles and actions are closed enumerations of the platform's
//! string constants. The platform vocabulary is not exhaustively documented,
//! so each enum carries an `Unknown` fallback that absorbs strings this
//! crate does not name.

mod action;
mod role;
mod subrole;
mod value;

pub use action::Action;
pub use role::Role;
pub use subrole::Subrole;
pub use value::Value;
