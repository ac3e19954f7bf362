//! Group roster resolution.
//!
//! A roster combines a group's member identities with whatever the local
//! directory knows about them. Members without a directory entry get a
//! default contact; our own identity is presented from the self profile.

use serde::Serialize;

use crate::contact::{
    Contact, ContactDirectory, GroupDescriptor, Relationship, RelationshipTags, SelfProfile,
};

/// A group member with resolved contact info.
///
/// The admin flag belongs to this projection only. It is never written to
/// the directory, since an identity can be admin in one group and not in
/// another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterMember {
    /// The resolved contact.
    #[serde(flatten)]
    pub contact: Contact,
    /// Whether this member is a group admin.
    pub is_admin: bool,
}

impl Relationship for RosterMember {
    fn tags(&self) -> RelationshipTags {
        self.contact.tags
    }
}

/// Resolves a group's members into a roster sorted by name or alias.
///
/// The self profile, when given, stands in for the directory entry of its
/// identity for this call only. The sort key is the case-insensitive name,
/// falling back to the alias; ties keep member iteration order.
#[must_use]
pub fn resolve_roster(
    group: &GroupDescriptor,
    directory: &ContactDirectory,
    self_profile: Option<&SelfProfile>,
) -> Vec<RosterMember> {
    let mut members: Vec<RosterMember> = group
        .members
        .iter()
        .map(|identity| {
            let contact = match self_profile {
                Some(profile) if profile.identity == *identity => profile.to_contact(),
                _ => directory.lookup_or_default(identity).into_owned(),
            };
            RosterMember {
                contact,
                is_admin: false,
            }
        })
        .collect();

    members.sort_by_cached_key(|member| member.contact.name_or_alias().to_lowercase());

    for member in &mut members {
        member.is_admin = group.is_admin(member.contact.identity());
    }

    log::debug!(
        "resolved roster of {} member(s), {} admin(s)",
        members.len(),
        members.iter().filter(|m| m.is_admin).count()
    );

    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{IdentityDecorator, RelationshipTag};
    use std::sync::Arc;

    struct FixedDecorator;

    impl IdentityDecorator for FixedDecorator {
        fn alias(&self, identity: &str) -> String {
            format!("alias {identity}")
        }

        fn identicon(&self, identity: &str) -> String {
            format!("icon {identity}")
        }
    }

    fn directory_with(contacts: impl IntoIterator<Item = Contact>) -> ContactDirectory {
        ContactDirectory::from_contacts_with(Arc::new(FixedDecorator), contacts).unwrap()
    }

    fn identities(roster: &[RosterMember]) -> Vec<&str> {
        roster.iter().map(|m| m.contact.identity()).collect()
    }

    #[test]
    fn unknown_members_are_synthesized() {
        let group = GroupDescriptor::new(["y", "x"], ["y"]);
        let directory = directory_with([]);

        let roster = resolve_roster(&group, &directory, None);

        assert_eq!(identities(&roster), vec!["x", "y"]);
        assert_eq!(roster[0].contact.alias, "alias x");
        assert!(!roster[0].is_admin);
        assert!(roster[1].is_admin);
        assert!(directory.is_empty());
    }

    #[test]
    fn sorts_by_name_then_alias_case_insensitively() {
        let group = GroupDescriptor::new(["a", "b", "c"], Vec::<String>::new());
        let directory = directory_with([
            Contact::new("a", "zulu", "icon").with_name("Mike"),
            Contact::new("b", "Alpha", "icon"),
            Contact::new("c", "yankee", "icon").with_name("bravo"),
        ]);

        let roster = resolve_roster(&group, &directory, None);
        assert_eq!(identities(&roster), vec!["b", "c", "a"]);
    }

    #[test]
    fn equal_keys_keep_member_order() {
        let group = GroupDescriptor::new(["c", "a", "b"], Vec::<String>::new());
        let directory = directory_with([
            Contact::new("c", "zulu", "icon").with_name("Same"),
            Contact::new("a", "yankee", "icon").with_name("SAME"),
            Contact::new("b", "xray", "icon").with_name("same"),
        ]);

        let roster = resolve_roster(&group, &directory, None);
        assert_eq!(identities(&roster), vec!["a", "b", "c"]);
    }

    #[test]
    fn name_and_alias_ties_keep_member_order() {
        let group = GroupDescriptor::new(["m2", "m1", "m3"], Vec::<String>::new());
        let directory = directory_with([
            Contact::new("m1", "Echo", "icon"),
            Contact::new("m2", "other", "icon").with_name("echo"),
            Contact::new("m3", "ECHO", "icon"),
        ]);

        let roster = resolve_roster(&group, &directory, None);
        assert_eq!(identities(&roster), vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn self_profile_overrides_directory_entry() {
        let group = GroupDescriptor::new(["me", "friend"], ["me"]);
        let directory = directory_with([
            Contact::new("me", "Stale Alias", "stale-icon"),
            Contact::new("friend", "Friend Alias", "icon").with_tag(RelationshipTag::Added),
        ]);
        let profile = SelfProfile {
            identity: "me".to_string(),
            display_name: "Aaa Generated".to_string(),
            preferred_name: None,
            identicon: "my-icon".to_string(),
            images: None,
        };

        let roster = resolve_roster(&group, &directory, Some(&profile));

        assert_eq!(identities(&roster), vec!["me", "friend"]);
        assert_eq!(roster[0].contact.alias, "Aaa Generated");
        assert_eq!(roster[0].contact.identicon, "my-icon");
        assert!(roster[0].is_admin);
        assert!(roster[1].is_active());

        // The directory itself is untouched.
        assert_eq!(
            directory.get("me").map(|c| c.alias.as_str()),
            Some("Stale Alias")
        );
    }

    #[test]
    fn self_profile_outside_group_is_ignored() {
        let group = GroupDescriptor::new(["x"], Vec::<String>::new());
        let profile = SelfProfile {
            identity: "me".to_string(),
            display_name: "Me".to_string(),
            preferred_name: None,
            identicon: "icon".to_string(),
            images: None,
        };

        let roster = resolve_roster(&group, &directory_with([]), Some(&profile));
        assert_eq!(identities(&roster), vec!["x"]);
    }

    #[test]
    fn admins_outside_members_are_not_added() {
        let group = GroupDescriptor::new(["x"], ["x", "ghost"]);
        let roster = resolve_roster(&group, &directory_with([]), None);
        assert_eq!(roster.len(), 1);
        assert!(roster[0].is_admin);
    }

    #[test]
    fn admin_flag_is_not_persisted() {
        let group = GroupDescriptor::new(["x"], ["x"]);
        let directory = directory_with([Contact::new("x", "alias", "icon")]);
        let roster = resolve_roster(&group, &directory, None);

        assert!(roster[0].is_admin);
        let json = serde_json::to_string(directory.get("x").unwrap()).unwrap();
        assert!(!json.contains("admin"));
    }

    #[test]
    fn empty_group_yields_empty_roster() {
        let roster = resolve_roster(&GroupDescriptor::default(), &directory_with([]), None);
        assert!(roster.is_empty());
    }
}
