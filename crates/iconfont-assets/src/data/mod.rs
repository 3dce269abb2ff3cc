//! Immutable data types for the asset host.
//!
//! Index documents are decoded once per lookup and never mutated afterwards.

mod endpoint;
mod index;

pub use endpoint::{AssetEndpoints, DEFAULT_ASSET_PATH, DEFAULT_BASE_URL, DEFAULT_INDEX_VERSION};
pub use index::{IconDescriptor, IconIndexResponse, Icons};
