//! Privacy-aware presentation of contacts.
//!
//! Provides the enrichment pipeline that turns directory entries into
//! view-models:
//! - Derived relationship flags computed from the current tags
//! - Display name resolution through a pluggable [`NameResolver`]
//! - Profile picture redaction driven by [`PrivacySetting`]
//!
//! # Privacy Guarantees
//!
//! - Our own pictures are never redacted
//! - ENS verification bookkeeping never reaches a view-model
//! - Redacted images are absent from serialized output

pub mod enrich;
pub mod types;

pub use enrich::{
    enrich_many, enrich_many_with, enrich_one, enrich_one_with, should_redact_images,
    EnrichedContact, NameResolver, PreferredNameResolver,
};
pub use types::{CoreSettings, PrivacySetting};
