//! Core types for the contact relationship model.
//!
//! Relationship state is held as a small closed set of flags per contact.
//! The flags are written only by the sync protocol; everything else in this
//! crate reads them and derives states on demand.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{ContactError, Result};

/// A single relationship flag maintained by the sync protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipTag {
    /// We added the contact (sent or accepted a contact request).
    Added,
    /// We blocked the contact.
    Blocked,
    /// The contact sent us a contact request.
    RequestReceived,
}

impl RelationshipTag {
    /// Every known tag, in bit order.
    pub const ALL: [Self; 3] = [Self::Added, Self::Blocked, Self::RequestReceived];

    /// Converts to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Blocked => "blocked",
            Self::RequestReceived => "request-received",
        }
    }

    /// Parses from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "added" => Some(Self::Added),
            "blocked" => Some(Self::Blocked),
            "request-received" => Some(Self::RequestReceived),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Added => 0b001,
            Self::Blocked => 0b010,
            Self::RequestReceived => 0b100,
        }
    }
}

impl std::str::FromStr for RelationshipTag {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| ContactError::UnknownTag(s.to_string()))
    }
}

impl fmt::Display for RelationshipTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of relationship flags recorded for one contact.
///
/// Serialized as a list of tag strings. Deserialization drops strings that
/// are not known tags instead of failing, so snapshots written by newer or
/// older sync protocol versions still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RelationshipTags {
    bits: u8,
}

impl RelationshipTags {
    /// Returns an empty tag set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Builds a tag set from raw tag strings, ignoring unknown values.
    #[must_use]
    pub fn from_raw<'a>(raw: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tags = Self::empty();
        for value in raw {
            match RelationshipTag::parse(value) {
                Some(tag) => tags.insert(tag),
                None => log::debug!("ignoring unknown relationship tag: {value}"),
            }
        }
        tags
    }

    /// Returns a copy of this set with `tag` added.
    #[must_use]
    pub const fn with(mut self, tag: RelationshipTag) -> Self {
        self.bits |= tag.bit();
        self
    }

    /// Returns whether `tag` is present.
    #[must_use]
    pub const fn contains(&self, tag: RelationshipTag) -> bool {
        self.bits & tag.bit() != 0
    }

    /// Adds `tag` to the set.
    pub fn insert(&mut self, tag: RelationshipTag) {
        self.bits |= tag.bit();
    }

    /// Removes `tag` from the set.
    pub fn remove(&mut self, tag: RelationshipTag) {
        self.bits &= !tag.bit();
    }

    /// Returns whether no tag is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates over the present tags in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = RelationshipTag> + '_ {
        RelationshipTag::ALL
            .into_iter()
            .filter(move |tag| self.contains(*tag))
    }
}

impl FromIterator<RelationshipTag> for RelationshipTags {
    fn from_iter<I: IntoIterator<Item = RelationshipTag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl Serialize for RelationshipTags {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|tag| tag.as_str()))
    }
}

impl<'de> Deserialize<'de> for RelationshipTags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_raw(raw.iter().map(String::as_str)))
    }
}

/// One variant of a profile picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
    /// Variant name, e.g. `thumbnail` or `large`.
    pub kind: String,
    /// Where the image can be loaded from.
    pub uri: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A contact record as stored in the directory.
///
/// The identity is fixed at construction; all other fields are owned by the
/// sync protocol and storage collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    identity: String,
    /// System-generated pseudonym derived from the identity.
    pub alias: String,
    /// Name chosen for this contact; overrides `alias` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Visual identifier descriptor derived from the identity.
    pub identicon: String,
    /// Profile picture variants, if the contact published any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProfileImage>>,
    /// On-chain address associated with the contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Relationship flags written by the sync protocol.
    #[serde(default)]
    pub tags: RelationshipTags,
    /// ENS verification bookkeeping kept by the sync protocol.
    #[serde(default)]
    pub ens_verified: bool,
    /// Unix timestamp of the last ENS verification attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens_verified_at: Option<i64>,
}

impl Contact {
    /// Creates a contact with no name, images, address or tags.
    #[must_use]
    pub fn new(
        identity: impl Into<String>,
        alias: impl Into<String>,
        identicon: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            alias: alias.into(),
            name: None,
            identicon: identicon.into(),
            images: None,
            address: None,
            tags: RelationshipTags::empty(),
            ens_verified: false,
            ens_verified_at: None,
        }
    }

    /// Returns the identity this contact is keyed by.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Sets the chosen name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the profile picture variants.
    #[must_use]
    pub fn with_images(mut self, images: Vec<ProfileImage>) -> Self {
        self.images = Some(images);
        self
    }

    /// Sets the on-chain address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Adds a relationship tag.
    #[must_use]
    pub const fn with_tag(mut self, tag: RelationshipTag) -> Self {
        self.tags = self.tags.with(tag);
        self
    }

    /// Replaces the relationship tags.
    #[must_use]
    pub const fn with_tags(mut self, tags: RelationshipTags) -> Self {
        self.tags = tags;
        self
    }

    /// Returns `name` when present, otherwise `alias`.
    #[must_use]
    pub fn name_or_alias(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.alias)
    }
}

/// The local user's own profile, supplied by the account collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfProfile {
    /// Our own identity.
    pub identity: String,
    /// Generated display name; becomes the contact alias.
    pub display_name: String,
    /// Name we picked for ourselves; becomes the contact name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,
    /// Our identicon descriptor.
    pub identicon: String,
    /// Our profile picture variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProfileImage>>,
}

impl SelfProfile {
    /// Builds the contact that stands in for us inside a roster.
    #[must_use]
    pub fn to_contact(&self) -> Contact {
        Contact {
            name: self.preferred_name.clone(),
            images: self.images.clone(),
            ..Contact::new(&*self.identity, &*self.display_name, &*self.identicon)
        }
    }
}

/// Membership of one group chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    /// Identities of every member.
    pub members: BTreeSet<String>,
    /// Identities of the admins.
    pub admins: BTreeSet<String>,
}

impl GroupDescriptor {
    /// Creates a descriptor from member and admin identities.
    #[must_use]
    pub fn new(
        members: impl IntoIterator<Item = impl Into<String>>,
        admins: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            members: members.into_iter().map(Into::into).collect(),
            admins: admins.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether `identity` is an admin of this group.
    #[must_use]
    pub fn is_admin(&self, identity: &str) -> bool {
        self.admins.contains(identity)
    }
}

/// A chat as seen by the contact utilities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chat {
    /// Chat identifier.
    pub chat_id: String,
    /// Participant identities; entries can be missing for partially
    /// synced chats.
    pub participants: Vec<Option<String>>,
}

impl Chat {
    /// Returns the identities of every known participant.
    #[must_use]
    pub fn participant_identities(&self) -> BTreeSet<&str> {
        self.participants.iter().flatten().map(String::as_str).collect()
    }
}
