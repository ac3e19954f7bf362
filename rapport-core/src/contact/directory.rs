//! The contact directory snapshot.
//!
//! The directory is built by the storage collaborator from what the sync
//! protocol persisted. Everything in this crate reads it through `&self`;
//! lookups that miss synthesize a default contact without inserting it.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::error::{ContactError, Result};
use super::identity::{HashedIdentityDecorator, IdentityDecorator};
use super::types::{Contact, RelationshipTags};

/// Identity-keyed collection of contacts.
///
/// Entries are kept ordered by identity so every traversal of the same
/// snapshot yields the same sequence.
#[derive(Clone)]
pub struct ContactDirectory {
    entries: BTreeMap<String, Contact>,
    decorator: Arc<dyn IdentityDecorator>,
}

impl std::fmt::Debug for ContactDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactDirectory")
            .field("entries", &self.entries.len())
            .field("decorator", &"<dyn IdentityDecorator>")
            .finish()
    }
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactDirectory {
    /// Creates an empty directory using [`HashedIdentityDecorator`] for
    /// default contacts.
    #[must_use]
    pub fn new() -> Self {
        Self::with_decorator(Arc::new(HashedIdentityDecorator))
    }

    /// Creates an empty directory that decorates default contacts with
    /// `decorator`.
    #[must_use]
    pub fn with_decorator(decorator: Arc<dyn IdentityDecorator>) -> Self {
        Self {
            entries: BTreeMap::new(),
            decorator,
        }
    }

    /// Builds a directory from contacts. Later duplicates replace earlier
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::EmptyIdentity`] if any contact has an empty
    /// identity.
    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> Result<Self> {
        Self::from_contacts_with(Arc::new(HashedIdentityDecorator), contacts)
    }

    /// Builds a directory from contacts, decorating default contacts with
    /// `decorator`. Later duplicates replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::EmptyIdentity`] if any contact has an empty
    /// identity.
    pub fn from_contacts_with(
        decorator: Arc<dyn IdentityDecorator>,
        contacts: impl IntoIterator<Item = Contact>,
    ) -> Result<Self> {
        let mut directory = Self::with_decorator(decorator);
        for contact in contacts {
            directory.insert(contact)?;
        }
        Ok(directory)
    }

    /// Inserts or replaces a contact, returning the previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::EmptyIdentity`] if the contact's identity is
    /// empty.
    pub fn insert(&mut self, contact: Contact) -> Result<Option<Contact>> {
        if contact.identity().is_empty() {
            return Err(ContactError::EmptyIdentity);
        }
        Ok(self
            .entries
            .insert(contact.identity().to_string(), contact))
    }

    /// Removes a contact, returning it if it was present.
    pub fn remove(&mut self, identity: &str) -> Option<Contact> {
        self.entries.remove(identity)
    }

    /// Returns the number of stored contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the directory holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stored contact for `identity`, if any.
    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&Contact> {
        self.entries.get(identity)
    }

    /// Returns whether a contact is stored for `identity`.
    #[must_use]
    pub fn exists(&self, identity: &str) -> bool {
        self.entries.contains_key(identity)
    }

    /// Iterates over stored contacts in identity order.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.entries.values()
    }

    /// Iterates over stored identities in order.
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the decorator used for default contacts.
    #[must_use]
    pub fn decorator(&self) -> &dyn IdentityDecorator {
        self.decorator.as_ref()
    }

    /// Synthesizes the contact used for an identity we know nothing about.
    #[must_use]
    pub fn default_contact(&self, identity: &str) -> Contact {
        Contact::new(
            identity,
            self.decorator.alias(identity),
            self.decorator.identicon(identity),
        )
    }

    /// Returns the stored contact, or a synthesized default on a miss.
    ///
    /// Never inserts; the directory is unchanged either way.
    #[must_use]
    pub fn lookup_or_default(&self, identity: &str) -> Cow<'_, Contact> {
        self.get(identity).map_or_else(
            || {
                log::trace!("no contact for {identity}, synthesizing default");
                Cow::Owned(self.default_contact(identity))
            },
            Cow::Borrowed,
        )
    }

    /// Returns the relationship tags recorded for `identity`.
    ///
    /// Unknown identities have no tags, which is what their default
    /// contact would carry.
    #[must_use]
    pub fn relationship(&self, identity: &str) -> RelationshipTags {
        self.get(identity)
            .map_or_else(RelationshipTags::empty, |contact| contact.tags)
    }

    /// Returns the first contact whose on-chain address matches `address`.
    ///
    /// Matching ignores the `0x` prefix and checksum casing.
    #[must_use]
    pub fn find_by_address(&self, address: &str) -> Option<&Contact> {
        self.contacts().find(|contact| {
            contact
                .address
                .as_deref()
                .is_some_and(|candidate| addresses_match(candidate, address))
        })
    }
}

fn strip_hex_prefix(address: &str) -> &str {
    let trimmed = address.trim();
    trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
}

/// Compares two on-chain addresses.
///
/// Hex addresses compare by decoded bytes, so checksum casing does not
/// matter. Anything that is not valid hex falls back to a case-insensitive
/// comparison of the prefix-stripped text. Empty addresses never match.
#[must_use]
pub fn addresses_match(a: &str, b: &str) -> bool {
    let (a, b) = (strip_hex_prefix(a), strip_hex_prefix(b));
    if a.is_empty() || b.is_empty() {
        return false;
    }
    match (hex::decode(a), hex::decode(b)) {
        (Ok(left), Ok(right)) => left == right,
        _ => a.eq_ignore_ascii_case(b),
    }
}
