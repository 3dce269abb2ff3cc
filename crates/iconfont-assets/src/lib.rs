//! Client for the icon font asset host.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable index and endpoint types
//! - [`core`] - Pure transformations (glyph decoding)
//! - [`effects`] - I/O operations behind the [`HttpClient`] trait
//!
//! Two operations are exposed through [`Fetcher`]: an index lookup that
//! decodes the versioned JSON index, and an asset download whose body is
//! drained and dropped. Neither retries, caches, nor validates status codes.

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use data::{AssetEndpoints, IconDescriptor, IconIndexResponse, Icons};
pub use effects::{BoxStream, Fetcher, HttpClient, HttpResponse, MockError, MockHttpClient};

#[cfg(feature = "reqwest")]
pub use effects::{ClientSetting, ReqwestClient};

pub use error::{ConfigError, Result, TransportError, TransportPhase};
