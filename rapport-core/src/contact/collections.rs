//! Sorting, filtering and projections over contact collections.

use std::collections::BTreeSet;

use super::directory::ContactDirectory;
use super::relationship::Relationship;
use super::types::{Chat, Contact};

/// Items that may be restricted to developer builds.
pub trait DevToolsGated {
    /// Returns whether the item is only shown with dev mode enabled.
    fn is_developer_only(&self) -> bool {
        false
    }
}

fn directory_sort_key(contact: &Contact) -> String {
    contact
        .name
        .as_deref()
        .or(contact.address.as_deref())
        .unwrap_or_else(|| contact.identity())
        .to_lowercase()
}

/// Sorts contacts by name, then on-chain address, then identity,
/// case-insensitively.
///
/// The alias is never part of this key. The sort is stable.
#[must_use]
pub fn sort_contacts<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<&'a Contact> {
    let mut sorted: Vec<&Contact> = contacts.into_iter().collect();
    sorted.sort_by_cached_key(|contact| directory_sort_key(contact));
    sorted
}

/// Drops developer-only items unless `dev_mode` is enabled.
#[must_use]
pub fn filter_dev_tools_only<T: DevToolsGated>(
    items: impl IntoIterator<Item = T>,
    dev_mode: bool,
) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| dev_mode || !item.is_developer_only())
        .collect()
}

/// Keeps only contacts whose identity is one of `member_identities`.
#[must_use]
pub fn filter_group_contacts<'a>(
    member_identities: &BTreeSet<String>,
    contacts: impl IntoIterator<Item = &'a Contact>,
) -> Vec<&'a Contact> {
    contacts
        .into_iter()
        .filter(|contact| member_identities.contains(contact.identity()))
        .collect()
}

/// Runs `query` over every directory contact with a predicate telling
/// whether a contact participates in `chat`.
///
/// Whether the caller filters, maps or counts is up to `query`.
pub fn query_chat_contacts<'a, R>(
    chat: &Chat,
    directory: &'a ContactDirectory,
    query: impl FnOnce(&dyn Fn(&Contact) -> bool, Vec<&'a Contact>) -> R,
) -> R {
    let participants = chat.participant_identities();
    let is_participant = |contact: &Contact| participants.contains(contact.identity());
    query(&is_participant, directory.contacts().collect())
}

/// Returns the identities of every blocked contact.
#[must_use]
pub fn blocked_identities<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> BTreeSet<String> {
    contacts
        .into_iter()
        .filter(|contact| contact.is_blocked())
        .map(|contact| contact.identity().to_string())
        .collect()
}

/// Returns the active contacts in [`sort_contacts`] order.
#[must_use]
pub fn active_contacts<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<&'a Contact> {
    sort_contacts(contacts.into_iter().filter(|contact| contact.is_active()))
}
