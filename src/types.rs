//! Identifiers and other small types of the Nomalab API.

mod context;
mod enums;
mod ids;
mod strings;
mod token;

pub use context::*;
pub use enums::*;
pub use ids::*;
pub use strings::*;
pub use token::*;
