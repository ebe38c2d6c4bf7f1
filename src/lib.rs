//! Blocking client for the public Wynncraft v3 API.
//!
//! Each [`WynnClient`] method maps to one endpoint, checks its parameters
//! before touching the network and returns the response body as a
//! [`serde_json::Value`] without reshaping it.
//!
//! ```no_run
//! use wynn_api::WynnClient;
//!
//! let client = WynnClient::default();
//! let player = client.get_player(Some("Salted"), None, false)?;
//! println!("{}", player["online"]);
//! # Ok::<(), wynn_api::WynnError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;

pub use api::client::WynnClient;
pub use api::models::{ClassName, FilterValue, Identifier, ItemQuery, ServerSelector};
pub use api::transport::{ApiRequest, Method, Transport, UreqTransport};
pub use config::Config;
pub use error::WynnError;
