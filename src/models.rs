//! Representations of data from the Nomalab API.
//!
//! These are plain transfer objects: the client decodes them from JSON and
//! never validates or mutates them. Field names are camelCase on the wire.
//! Parts of a response which the API does not describe precisely, such as
//! verification reports, are kept as [serde_json::Value].

mod delivery;
mod file;
mod formats;
mod hierarchy;
mod job;
mod organization;
mod payloads;
mod show;
mod user;

pub use delivery::*;
pub use file::*;
pub use formats::*;
pub use hierarchy::*;
pub use job::*;
pub use organization::*;
pub use payloads::*;
pub use show::*;
pub use user::*;
