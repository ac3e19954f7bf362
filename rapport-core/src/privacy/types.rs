//! Privacy settings types.

use serde::{Deserialize, Serialize};

use crate::contact::{ContactError, Result};

/// Who may see profile pictures of contacts other than ourselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PrivacySetting {
    /// Nobody's pictures are shown.
    None,
    /// Only pictures of contacts we added are shown.
    #[default]
    ContactsOnly,
    /// Every picture is shown.
    Any,
}

impl PrivacySetting {
    /// Converts to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ContactsOnly => "contacts-only",
            Self::Any => "any",
        }
    }

    /// Parses from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "contacts-only" => Some(Self::ContactsOnly),
            "any" => Some(Self::Any),
            _ => None,
        }
    }
}

impl std::str::FromStr for PrivacySetting {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| ContactError::UnknownPrivacySetting(s.to_string()))
    }
}

/// Settings that shape how contacts are presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreSettings {
    /// Profile picture visibility; `None` disables redaction entirely.
    ///
    /// A document without this key gets the privacy-first default; only an
    /// explicit `null` turns redaction off.
    #[serde(default = "default_privacy")]
    pub privacy: Option<PrivacySetting>,

    /// Whether developer-only entries are shown.
    #[serde(default)]
    pub dev_mode: bool,
}

#[allow(clippy::unnecessary_wraps)]
const fn default_privacy() -> Option<PrivacySetting> {
    Some(PrivacySetting::ContactsOnly)
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            privacy: default_privacy(), // Privacy-first default
            dev_mode: false,
        }
    }
}

impl CoreSettings {
    /// Loads settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or holds an unknown privacy
    /// setting.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts these settings to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (extremely rare).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_setting_default_is_contacts_only() {
        assert_eq!(PrivacySetting::default(), PrivacySetting::ContactsOnly);
    }

    #[test]
    fn privacy_setting_as_str() {
        assert_eq!(PrivacySetting::None.as_str(), "none");
        assert_eq!(PrivacySetting::ContactsOnly.as_str(), "contacts-only");
        assert_eq!(PrivacySetting::Any.as_str(), "any");
    }

    #[test]
    fn privacy_setting_parse() {
        assert_eq!(PrivacySetting::parse("none"), Some(PrivacySetting::None));
        assert_eq!(
            PrivacySetting::parse("contacts-only"),
            Some(PrivacySetting::ContactsOnly)
        );
        assert_eq!(PrivacySetting::parse("any"), Some(PrivacySetting::Any));
        assert_eq!(PrivacySetting::parse("friends"), None);
    }

    #[test]
    fn privacy_setting_from_str_rejects_unknown() {
        let err = "friends".parse::<PrivacySetting>().unwrap_err();
        assert!(matches!(err, ContactError::UnknownPrivacySetting(s) if s == "friends"));
    }

    #[test]
    fn privacy_setting_serde_matches_as_str() {
        for setting in [
            PrivacySetting::None,
            PrivacySetting::ContactsOnly,
            PrivacySetting::Any,
        ] {
            let json = serde_json::to_string(&setting).unwrap();
            assert_eq!(json, format!("\"{}\"", setting.as_str()));
        }
    }

    #[test]
    fn core_settings_default_values() {
        let settings = CoreSettings::default();
        assert_eq!(settings.privacy, Some(PrivacySetting::ContactsOnly));
        assert!(!settings.dev_mode);
    }

    #[test]
    fn core_settings_from_json() {
        let settings = CoreSettings::from_json(r#"{"privacy":"none","dev_mode":true}"#).unwrap();
        assert_eq!(settings.privacy, Some(PrivacySetting::None));
        assert!(settings.dev_mode);
    }

    #[test]
    fn core_settings_missing_fields_use_defaults() {
        let settings = CoreSettings::from_json("{}").unwrap();
        assert_eq!(settings, CoreSettings::default());

        let settings = CoreSettings::from_json(r#"{"dev_mode":true}"#).unwrap();
        assert_eq!(settings.privacy, Some(PrivacySetting::ContactsOnly));
        assert!(settings.dev_mode);
    }

    #[test]
    fn core_settings_explicit_null_disables_redaction() {
        let settings = CoreSettings::from_json(r#"{"privacy":null}"#).unwrap();
        assert_eq!(settings.privacy, None);

        let json = CoreSettings {
            privacy: None,
            dev_mode: false,
        }
        .to_json()
        .unwrap();
        assert_eq!(CoreSettings::from_json(&json).unwrap().privacy, None);
    }

    #[test]
    fn core_settings_rejects_unknown_privacy() {
        let result = CoreSettings::from_json(r#"{"privacy":"friends"}"#);
        assert!(matches!(result, Err(ContactError::InvalidSettings(_))));
    }

    #[test]
    fn core_settings_json_roundtrip() {
        let settings = CoreSettings {
            privacy: Some(PrivacySetting::Any),
            dev_mode: true,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(CoreSettings::from_json(&json).unwrap(), settings);
    }
}
