//! Card owner profile model.

use serde::{Deserialize, Serialize};

/// Portrait asset bundled with the app, relative to the served root.
pub const DEFAULT_AVATAR: &str = "assets/photo.svg";

/// The person the card belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Title line shown under the name
    pub title: String,
    /// Social handle, stored without the leading "@"
    pub handle: String,
    /// Path to the portrait asset
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

impl Profile {
    /// Create a profile using the bundled portrait asset.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            handle: handle.into(),
            avatar: default_avatar(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_bundled_avatar() {
        let profile = Profile::new("Jane Doe", "Engineer", "janedoe");
        assert_eq!(profile.avatar, DEFAULT_AVATAR);
    }

    #[test]
    fn test_avatar_defaults_when_missing() {
        let json = r#"{"name":"Jane Doe","title":"Engineer","handle":"janedoe"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.avatar, DEFAULT_AVATAR);
    }

    #[test]
    fn test_serde_round_trip() {
        let profile = Profile::new("Jane Doe", "Engineer", "janedoe");
        let json = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
