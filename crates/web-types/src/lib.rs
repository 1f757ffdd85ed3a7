//! API types for the WLM bot dashboard.
//!
//! This crate defines the JSON shapes the dashboard consumes from the bot's
//! local HTTP API. The dashboard is a pure reader: nothing here is ever
//! serialized back to the server.

use serde::{Deserialize, Serialize};

/// Avatar shown for members without a custom avatar.
pub const DEFAULT_AVATAR_URL: &str = "https://cdn.discordapp.com/embed/avatars/0.png";

/// Response body of `GET /api/status`.
///
/// The bot reports configuration problems through `missing_config`; an
/// empty list means the bot started with a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotStatus {
    /// Whether the bot's Discord session is established.
    #[serde(default)]
    pub logged_in: bool,
    /// Names of required configuration keys the bot is missing.
    #[serde(default)]
    pub missing_config: Vec<String>,
}

impl BotStatus {
    /// True when the bot reported at least one missing configuration key.
    pub fn has_missing_config(&self) -> bool {
        !self.missing_config.is_empty()
    }
}

/// One member of the Welcome Wagon cohort, as returned by
/// `GET /api/welcome-wagon/new-members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Discord snowflake; the row identity key.
    pub id: u64,
    /// Account name (distinct from the per-guild display name).
    #[serde(default)]
    pub name: Option<String>,
    /// Legacy discriminator, "0" on migrated accounts.
    #[serde(default)]
    pub discriminator: Option<String>,
    /// Name shown in the guild.
    pub display_name: String,
    /// Custom avatar URL, absent for members using a default avatar.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// ISO-8601 join timestamp, absent when Discord did not report one.
    #[serde(default)]
    pub joined_at: Option<String>,
}

impl Member {
    /// Avatar URL to render, falling back to [`DEFAULT_AVATAR_URL`].
    pub fn avatar_or_default(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or(DEFAULT_AVATAR_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_missing_config_to_empty() {
        let status: BotStatus = serde_json::from_str(r#"{"logged_in": true}"#).unwrap();
        assert!(status.logged_in);
        assert!(status.missing_config.is_empty());
        assert!(!status.has_missing_config());
    }

    #[test]
    fn status_preserves_missing_config_order() {
        let status: BotStatus =
            serde_json::from_str(r#"{"missing_config": ["DISCORD_TOKEN", "GUILD_ID"]}"#).unwrap();
        assert_eq!(status.missing_config, ["DISCORD_TOKEN", "GUILD_ID"]);
        assert!(status.has_missing_config());
    }

    #[test]
    fn member_decodes_with_optional_fields_absent() {
        let member: Member =
            serde_json::from_str(r#"{"id": 1, "display_name": "Ada"}"#).unwrap();
        assert_eq!(member.id, 1);
        assert_eq!(member.display_name, "Ada");
        assert_eq!(member.avatar_url, None);
        assert_eq!(member.joined_at, None);
        assert_eq!(member.avatar_or_default(), DEFAULT_AVATAR_URL);
    }

    #[test]
    fn member_decodes_full_api_payload() {
        let member: Member = serde_json::from_str(
            r#"{
                "id": 90123456789012345,
                "name": "ada",
                "discriminator": "0",
                "display_name": "Ada",
                "avatar_url": "https://cdn.discordapp.com/avatars/90123456789012345/a.png",
                "joined_at": "2024-01-05T00:00:00+00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(member.id, 90_123_456_789_012_345);
        assert_eq!(
            member.avatar_or_default(),
            "https://cdn.discordapp.com/avatars/90123456789012345/a.png"
        );
    }
}
