//! I/O operations for the asset host.
//!
//! All network access goes through [`HttpClient`]; [`Fetcher`] holds the one
//! client instance shared by both operations.

mod fetcher;
mod http;
mod mock;

pub use fetcher::Fetcher;
pub use http::{BoxStream, HttpClient, HttpResponse};
pub use mock::{MockError, MockHttpClient};

#[cfg(feature = "reqwest")]
pub use http::{ClientSetting, ReqwestClient};
