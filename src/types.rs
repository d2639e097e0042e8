use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

/// The current user's profile as returned by `GET /me`.
///
/// Fields the app does not render are kept in `extra`, so a profile that
/// is persisted and restored serializes back to the same document. `uri`,
/// `href`, `images` and `external_urls` accept `null` as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_urls: ExternalUrls,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    pub fn avatar_url(&self) -> Option<&str> {
        self.images.first().map(|img| img.url.as_str())
    }

    /// Name shown in the heading. Falls back to the user id.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

/// Access token together with the moment it was obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub obtained_at: DateTime<Utc>,
}

/// A signed-in user: what gets persisted across restarts.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub obtained_at: DateTime<Utc>,
    pub profile: Profile,
}

impl Session {
    pub fn new(access_token: String, profile: Profile) -> Self {
        Self {
            access_token,
            obtained_at: Utc::now(),
            profile,
        }
    }
}

/// Result of processing an OAuth callback.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Authenticated {
        access_token: String,
        profile: Profile,
    },
    Failed {
        error: String,
    },
}

#[derive(Tabled)]
pub struct ProfileTableRow {
    pub field: String,
    pub value: String,
}
