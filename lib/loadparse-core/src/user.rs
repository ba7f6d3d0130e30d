//! The `User` domain record.

use serde::Serialize;

/// JSON key holding the user identifier.
pub const ID_KEY: &str = "id";
/// JSON key holding the user's full name.
pub const FULL_NAME_KEY: &str = "user_fullname";
/// JSON key holding the user's avatar location.
pub const AVATAR_KEY: &str = "user_avatar";

/// A fully decoded user.
///
/// Every field is required; there is no partially populated `User`.
/// Serializes back to the wire keys (`id`, `user_fullname`, `user_avatar`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct User {
    id: i64,
    #[serde(rename = "user_fullname")]
    full_name: String,
    #[serde(rename = "user_avatar")]
    avatar: String,
}

impl User {
    /// Creates a user from its three required fields.
    #[must_use]
    pub fn new(id: i64, full_name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            avatar: avatar.into(),
        }
    }

    /// User identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Avatar location, as received.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Avatar location parsed as a URL.
    ///
    /// The avatar is not validated while decoding, only here when it is
    /// about to be used.
    pub fn avatar_url(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.avatar)
    }
}
