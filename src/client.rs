pub(crate) mod builder;
pub(crate) mod nomalab;
pub(crate) mod request;
mod switch;
