//! Group membership resolution.
//!
//! Turns a [`GroupDescriptor`] from the group-chat collaborator into a
//! sorted, admin-annotated roster for member-list rendering.
//!
//! [`GroupDescriptor`]: crate::contact::GroupDescriptor

mod roster;

pub use roster::{resolve_roster, RosterMember};
