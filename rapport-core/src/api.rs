//! API facade exposed to the client application.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::contact::{
    self, Contact, ContactDirectory, DevToolsGated, GroupDescriptor, SelfProfile,
};
use crate::group::{resolve_roster, RosterMember};
use crate::privacy::{self, CoreSettings, EnrichedContact, NameResolver, PreferredNameResolver};

/// Core interface for Rapport functionality.
///
/// Binds the user's settings, their own identity and the naming
/// collaborator to the contact operations, so callers only hand over the
/// directory snapshot they want presented.
#[derive(Clone)]
pub struct RapportCore {
    settings: CoreSettings,
    self_identity: Option<String>,
    resolver: Arc<dyn NameResolver>,
}

impl std::fmt::Debug for RapportCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RapportCore")
            .field("settings", &self.settings)
            .field("self_identity", &self.self_identity)
            .field("resolver", &"<dyn NameResolver>")
            .finish()
    }
}

impl Default for RapportCore {
    fn default() -> Self {
        Self::new(CoreSettings::default())
    }
}

impl RapportCore {
    /// Creates a new `RapportCore` with the given settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use rapport_core::privacy::CoreSettings;
    /// use rapport_core::RapportCore;
    ///
    /// let core = RapportCore::new(CoreSettings::default());
    /// assert!(!core.settings().dev_mode);
    /// ```
    #[must_use]
    pub fn new(settings: CoreSettings) -> Self {
        Self {
            settings,
            self_identity: None,
            resolver: Arc::new(PreferredNameResolver),
        }
    }

    /// Sets our own identity, which is exempt from image redaction.
    #[must_use]
    pub fn with_self_identity(mut self, identity: impl Into<String>) -> Self {
        self.self_identity = Some(identity.into());
        self
    }

    /// Replaces the display-name resolver.
    #[must_use]
    pub fn with_name_resolver(mut self, resolver: Arc<dyn NameResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Returns the current settings.
    #[must_use]
    pub const fn settings(&self) -> &CoreSettings {
        &self.settings
    }

    /// Updates the settings.
    pub fn set_settings(&mut self, settings: CoreSettings) {
        self.settings = settings;
    }

    /// Returns our own identity, if set.
    #[must_use]
    pub fn self_identity(&self) -> Option<&str> {
        self.self_identity.as_deref()
    }

    /// Enriches one contact under the configured privacy setting.
    #[must_use]
    pub fn enrich_contact(&self, contact: &Contact) -> EnrichedContact {
        privacy::enrich_one_with(
            self.resolver.as_ref(),
            contact,
            self.settings.privacy,
            self.self_identity(),
        )
    }

    /// Enriches every directory entry under the configured privacy setting.
    #[must_use]
    pub fn enrich_directory(
        &self,
        directory: &ContactDirectory,
    ) -> BTreeMap<String, EnrichedContact> {
        privacy::enrich_many_with(
            self.resolver.as_ref(),
            directory,
            self.settings.privacy,
            self.self_identity(),
        )
    }

    /// Resolves a group roster.
    #[must_use]
    pub fn roster(
        group: &GroupDescriptor,
        directory: &ContactDirectory,
        self_profile: Option<&SelfProfile>,
    ) -> Vec<RosterMember> {
        resolve_roster(group, directory, self_profile)
    }

    /// Returns the identities the messaging layer should drop messages
    /// from.
    #[must_use]
    pub fn blocked_identities(directory: &ContactDirectory) -> BTreeSet<String> {
        contact::blocked_identities(directory.contacts())
    }

    /// Returns the active contacts, sorted for display.
    #[must_use]
    pub fn active_contacts<'a>(directory: &'a ContactDirectory) -> Vec<&'a Contact> {
        contact::active_contacts(directory.contacts())
    }

    /// Returns the directory contacts sorted for display.
    #[must_use]
    pub fn sorted_contacts<'a>(directory: &'a ContactDirectory) -> Vec<&'a Contact> {
        contact::sort_contacts(directory.contacts())
    }

    /// Drops developer-only items unless dev mode is enabled.
    #[must_use]
    pub fn visible_items<T: DevToolsGated>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        contact::filter_dev_tools_only(items, self.settings.dev_mode)
    }
}
