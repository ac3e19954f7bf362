//! Contact relationship model.
//!
//! This module holds the per-contact relationship state and everything
//! derived from it. The sync protocol owns the relationship flags and the
//! storage collaborator owns the directory; this module only reads them.
//!
//! # Architecture
//!
//! ```text
//! ContactDirectory (identity -> Contact snapshot)
//!     ├── Relationship (derived states from RelationshipTags)
//!     ├── IdentityDecorator (alias/identicon for default contacts)
//!     └── collections (sorting, filtering, projections)
//! ```
//!
//! # Types
//!
//! - [`Contact`]: A directory entry keyed by identity
//! - [`RelationshipTags`]: The flags written by the sync protocol
//! - [`SelfProfile`]: The local user's own profile
//! - [`GroupDescriptor`]: Members and admins of one group chat

pub mod collections;
mod directory;
mod error;
mod identity;
mod relationship;
pub mod types;

pub use collections::{
    active_contacts, blocked_identities, filter_dev_tools_only, filter_group_contacts,
    query_chat_contacts, sort_contacts, DevToolsGated,
};
pub use directory::{addresses_match, ContactDirectory};
pub use error::{ContactError, Result};
pub use identity::{HashedIdentityDecorator, IdentityDecorator};
pub use relationship::{Relationship, RequestState};
pub use types::{
    Chat, Contact, GroupDescriptor, ProfileImage, RelationshipTag, RelationshipTags, SelfProfile,
};
