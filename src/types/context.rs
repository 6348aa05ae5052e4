//! Selection of the Nomalab environment a client talks to.

use crate::errors::InvalidContext;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Host of the production environment.
pub const PRODUCTION_ORIGIN: &str = "https://app.nomalab.com";

/// The context value which designates production.
pub const PRODUCTION_CONTEXT: &str = "www";

/// A Nomalab environment, e.g. `www` (production) or `staging`.
///
/// Parse it from the name used in Nomalab URLs:
///
/// ```
/// use nomalab::types::Context;
///
/// let context: Context = "staging".parse().unwrap();
/// assert_eq!(context.origin(), "https://app-staging.nomalab.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Context {
    /// `https://app.nomalab.com`
    Production,
    /// `https://app-<name>.nomalab.com`
    Named(String),
}

impl Context {
    /// The scheme and host for API requests in this context.
    pub fn origin(&self) -> String {
        match self {
            Context::Production => PRODUCTION_ORIGIN.to_string(),
            Context::Named(name) => format!("https://app-{}.nomalab.com", name),
        }
    }
}

/// Resolve the API origin. Without a context the origin is relative,
/// i.e. the empty string, and requests are resolved against the embedding page.
pub(crate) fn resolve_origin(context: Option<&Context>) -> String {
    context.map(Context::origin).unwrap_or_default()
}

impl FromStr for Context {
    type Err = InvalidContext;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Err(InvalidContext::Empty)
        } else if s == PRODUCTION_CONTEXT {
            Ok(Context::Production)
        } else if s.starts_with('-')
            || s.ends_with('-')
            || !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            Err(InvalidContext::Label(s.to_string()))
        } else {
            Ok(Context::Named(s.to_string()))
        }
    }
}

impl TryFrom<&str> for Context {
    type Error = InvalidContext;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Context::Production => f.write_str(PRODUCTION_CONTEXT),
            Context::Named(name) => f.write_str(name),
        }
    }
}
