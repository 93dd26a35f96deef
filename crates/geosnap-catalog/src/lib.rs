pub mod candidate;
pub mod client;
pub mod error;
pub mod pool;
pub mod types;

pub use candidate::{DisplayRefs, PhotoCandidate};
pub use client::{CatalogClient, SearchQuery};
pub use error::CatalogError;
pub use pool::{build_candidate_pool, CandidatePool};
pub use types::{AssetPage, MetadataSearchResponse, RawAsset, RawExif};
