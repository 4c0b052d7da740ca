//! Remote data module
//!
//! Read-only users and posts fetched from a public REST API.

mod fetcher;
mod model;
mod source;

pub use fetcher::{aggregate, FetchStatus, RemoteData};
pub use model::*;
pub use source::{HttpRemoteSource, RemoteSource, DEFAULT_BASE_URL};
