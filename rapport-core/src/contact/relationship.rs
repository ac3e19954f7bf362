//! Derived relationship states.
//!
//! Every state here is a pure function of a contact's [`RelationshipTags`].
//! Nothing is cached; callers always see the states implied by the tags
//! they currently hold.

use super::types::{Contact, RelationshipTag, RelationshipTags};

/// Where a contact request stands between us and a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// Neither side has acted.
    None,
    /// We added the contact and are waiting on them.
    Outgoing,
    /// The contact sent a request we have not accepted.
    Incoming,
    /// Both sides have acted.
    Mutual,
}

impl RequestState {
    /// Returns whether exactly one side has acted.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Outgoing | Self::Incoming)
    }
}

/// Derived relationship predicates over anything that carries tags.
///
/// Only [`Relationship::tags`] needs implementing; the predicates are
/// provided. They are total and never look at anything but the tags.
pub trait Relationship {
    /// Returns the relationship tags to derive from.
    fn tags(&self) -> RelationshipTags;

    /// Returns whether we added the contact.
    fn is_added(&self) -> bool {
        self.tags().contains(RelationshipTag::Added)
    }

    /// Returns whether we blocked the contact.
    fn is_blocked(&self) -> bool {
        self.tags().contains(RelationshipTag::Blocked)
    }

    /// Returns whether the contact sent us a request.
    fn has_request_received(&self) -> bool {
        self.tags().contains(RelationshipTag::RequestReceived)
    }

    /// Returns whether exactly one of `added` and `request-received` holds.
    fn is_pending(&self) -> bool {
        self.is_added() != self.has_request_received()
    }

    /// Returns whether an inbound request is waiting on us.
    ///
    /// This is the narrower notion understood by consumers that predate
    /// bidirectional requests. It ignores `blocked`.
    fn is_legacy_pending(&self) -> bool {
        self.has_request_received() && !self.is_added()
    }

    /// Returns whether the contact is added and not blocked.
    fn is_active(&self) -> bool {
        self.is_added() && !self.is_blocked()
    }

    /// Returns whether the contact is not added.
    fn is_removed(&self) -> bool {
        !self.is_added()
    }

    /// Classifies the contact request between us and the contact.
    fn request_state(&self) -> RequestState {
        match (self.is_added(), self.has_request_received()) {
            (false, false) => RequestState::None,
            (true, false) => RequestState::Outgoing,
            (false, true) => RequestState::Incoming,
            (true, true) => RequestState::Mutual,
        }
    }
}

impl Relationship for RelationshipTags {
    fn tags(&self) -> RelationshipTags {
        *self
    }
}

impl Relationship for Contact {
    fn tags(&self) -> RelationshipTags {
        self.tags
    }
}

impl<T: Relationship + ?Sized> Relationship for &T {
    fn tags(&self) -> RelationshipTags {
        (**self).tags()
    }
}
