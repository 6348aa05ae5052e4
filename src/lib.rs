//! Client library for the [Nomalab](https://www.nomalab.com) API.
//!
//! All requests go through [NomalabClient], which resolves the API origin from a
//! [types::Context], attaches the session token, and translates error responses
//! into [errors::NomalabError].
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use nomalab::NomalabClient;
//!
//! let client = NomalabClient::builder()
//!     .context("www".parse()?)
//!     .token("my-api-token")
//!     .build()?;
//! let me = client.me().await?;
//! println!("logged in as {}", me.email);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod errors;
pub mod models;
pub mod types;

pub use client::builder::{AuthMode, NomalabClientBuilder};
pub use client::nomalab::NomalabClient;
pub use client::request::RequestOptions;
