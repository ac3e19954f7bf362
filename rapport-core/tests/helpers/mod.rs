//! Shared fixtures and proptest strategies for integration tests.
//!
//! Each integration test binary only uses part of this module.
#![allow(dead_code)]

use proptest::prelude::*;
use rapport_core::contact::{
    Contact, ContactDirectory, GroupDescriptor, ProfileImage, RelationshipTag, RelationshipTags,
};

/// Builds a contact with a deterministic alias and identicon.
pub fn contact(identity: &str) -> Contact {
    Contact::new(identity, format!("Alias {identity}"), format!("icon-{identity}"))
}

/// Returns a two-variant profile picture set.
pub fn sample_images() -> Vec<ProfileImage> {
    vec![
        ProfileImage {
            kind: "thumbnail".to_string(),
            uri: "https://img.example/thumb.png".to_string(),
            width: 80,
            height: 80,
        },
        ProfileImage {
            kind: "large".to_string(),
            uri: "https://img.example/large.png".to_string(),
            width: 240,
            height: 240,
        },
    ]
}

/// Strategy for any combination of relationship tags.
pub fn tags_strategy() -> impl Strategy<Value = RelationshipTags> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(added, blocked, received)| {
        let mut tags = RelationshipTags::empty();
        if added {
            tags.insert(RelationshipTag::Added);
        }
        if blocked {
            tags.insert(RelationshipTag::Blocked);
        }
        if received {
            tags.insert(RelationshipTag::RequestReceived);
        }
        tags
    })
}

/// Strategy for identity strings.
pub fn identity_strategy() -> impl Strategy<Value = String> {
    "0x04[a-f0-9]{6,12}"
}

/// Strategy for optional display names, mixing case to exercise
/// case-insensitive ordering.
pub fn name_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z][a-zA-Z ]{0,12}")
}

/// Strategy for contacts with arbitrary names, images, addresses and tags.
pub fn contact_strategy() -> impl Strategy<Value = Contact> {
    (
        identity_strategy(),
        "[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}",
        name_strategy(),
        prop::option::of("0x[a-fA-F0-9]{40}"),
        any::<bool>(),
        tags_strategy(),
    )
        .prop_map(|(identity, alias, name, address, with_images, tags)| {
            let mut contact = Contact::new(identity, alias, "icon").with_tags(tags);
            contact.name = name;
            contact.address = address;
            if with_images {
                contact.images = Some(sample_images());
            }
            contact
        })
}

/// Strategy for directory snapshots of up to `max` contacts.
pub fn directory_strategy(max: usize) -> impl Strategy<Value = ContactDirectory> {
    prop::collection::vec(contact_strategy(), 0..=max).prop_map(|contacts| {
        ContactDirectory::from_contacts(contacts).expect("generated identities are non-empty")
    })
}

/// Strategy for a group whose admins are a subset of its members, plus a
/// few stray admin identities that are not members.
pub fn group_strategy() -> impl Strategy<Value = GroupDescriptor> {
    prop::collection::btree_set(identity_strategy(), 0..12).prop_flat_map(|members| {
        let list: Vec<String> = members.iter().cloned().collect();
        let len = list.len();
        (
            Just(members),
            prop::collection::vec(any::<bool>(), len),
            prop::collection::btree_set(identity_strategy(), 0..3),
        )
            .prop_map(move |(members, picks, strays)| {
                let admins = list
                    .iter()
                    .zip(picks)
                    .filter(|(_, pick)| *pick)
                    .map(|(identity, _)| identity.clone())
                    .chain(strays)
                    .collect();
                GroupDescriptor { members, admins }
            })
    })
}
