//! Contact enrichment into view-models.
//!
//! Enrichment computes the derived relationship flags, resolves a display
//! name and then applies the profile picture policy. The result never
//! carries the sync protocol's ENS bookkeeping.
//!
//! # Redaction rule
//!
//! Images are dropped only when all of these hold:
//! - a privacy setting is supplied
//! - the contact is not ourselves
//! - the setting is `none`, or it is `contacts-only` and we did not add
//!   the contact

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::PrivacySetting;
use crate::contact::{
    Contact, ContactDirectory, ProfileImage, Relationship, RelationshipTags,
};

/// Resolves the name shown for a contact.
pub trait NameResolver: Send + Sync {
    /// Returns the display name for `contact`.
    fn display_name(&self, contact: &Contact) -> String;
}

/// Shows the chosen name when there is one, otherwise the alias.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferredNameResolver;

impl NameResolver for PreferredNameResolver {
    fn display_name(&self, contact: &Contact) -> String {
        contact.name_or_alias().to_string()
    }
}

/// A contact prepared for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedContact {
    /// Identity of the contact.
    pub identity: String,
    /// Generated pseudonym.
    pub alias: String,
    /// Chosen name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name resolved for display.
    pub display_name: String,
    /// Identicon descriptor.
    pub identicon: String,
    /// Profile pictures, absent when the privacy policy redacted them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProfileImage>>,
    /// On-chain address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Raw relationship tags the flags below were derived from.
    pub tags: RelationshipTags,
    /// We added the contact.
    pub added: bool,
    /// We blocked the contact.
    pub blocked: bool,
    /// Exactly one side of the contact request has acted.
    pub pending: bool,
    /// An inbound request is waiting on us.
    pub legacy_pending: bool,
    /// Added and not blocked.
    pub active: bool,
}

impl Relationship for EnrichedContact {
    fn tags(&self) -> RelationshipTags {
        self.tags
    }
}

/// Returns whether `contact`'s images must be withheld from the view.
#[must_use]
pub fn should_redact_images(
    contact: &Contact,
    privacy: Option<PrivacySetting>,
    self_identity: Option<&str>,
) -> bool {
    let Some(privacy) = privacy else {
        return false;
    };
    if self_identity == Some(contact.identity()) {
        return false;
    }
    match privacy {
        PrivacySetting::None => true,
        PrivacySetting::ContactsOnly => !contact.is_added(),
        PrivacySetting::Any => false,
    }
}

/// Enriches one contact using [`PreferredNameResolver`].
#[must_use]
pub fn enrich_one(
    contact: &Contact,
    privacy: Option<PrivacySetting>,
    self_identity: Option<&str>,
) -> EnrichedContact {
    enrich_one_with(&PreferredNameResolver, contact, privacy, self_identity)
}

/// Enriches one contact, resolving its display name with `resolver`.
#[must_use]
pub fn enrich_one_with(
    resolver: &dyn NameResolver,
    contact: &Contact,
    privacy: Option<PrivacySetting>,
    self_identity: Option<&str>,
) -> EnrichedContact {
    let added = contact.is_added();
    let blocked = contact.is_blocked();
    let pending = contact.is_pending();
    let legacy_pending = contact.is_legacy_pending();
    let active = contact.is_active();

    let display_name = resolver.display_name(contact);

    let images = if should_redact_images(contact, privacy, self_identity) {
        log::trace!("redacting images of {} under {privacy:?}", contact.identity());
        None
    } else {
        contact.images.clone()
    };

    EnrichedContact {
        identity: contact.identity().to_string(),
        alias: contact.alias.clone(),
        name: contact.name.clone(),
        display_name,
        identicon: contact.identicon.clone(),
        images,
        address: contact.address.clone(),
        tags: contact.tags,
        added,
        blocked,
        pending,
        legacy_pending,
        active,
    }
}

/// Enriches every directory entry using [`PreferredNameResolver`].
///
/// The result has exactly the directory's identities as keys.
#[must_use]
pub fn enrich_many(
    directory: &ContactDirectory,
    privacy: Option<PrivacySetting>,
    self_identity: Option<&str>,
) -> BTreeMap<String, EnrichedContact> {
    enrich_many_with(&PreferredNameResolver, directory, privacy, self_identity)
}

/// Enriches every directory entry, resolving names with `resolver`.
#[must_use]
pub fn enrich_many_with(
    resolver: &dyn NameResolver,
    directory: &ContactDirectory,
    privacy: Option<PrivacySetting>,
    self_identity: Option<&str>,
) -> BTreeMap<String, EnrichedContact> {
    directory
        .contacts()
        .map(|contact| {
            (
                contact.identity().to_string(),
                enrich_one_with(resolver, contact, privacy, self_identity),
            )
        })
        .collect()
}
