//! Speaker vocabulary shared by the script and session contexts.

/// Reserved speaker ID for the built-in bot persona.
pub const DEFAULT_BOT_ID: &str = "bot";

/// Reserved speaker ID for the learner.
pub const USER_ID: &str = "user";

/// Maximum number of response choices a single step may offer.
pub const MAX_RESPONSES: usize = 7;

/// Token in authored message text that is replaced with the learner's
/// first name before the script is parsed.
pub const NAME_PLACEHOLDER: &str = "[NAME]";

/// Namespaces an author-defined bot ID so it cannot collide with
/// [`DEFAULT_BOT_ID`] or [`USER_ID`].
#[must_use]
pub fn custom_bot_id(key: &str) -> String {
    format!("custom/{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_bot_id_is_namespaced() {
        assert_eq!(custom_bot_id("alice"), "custom/alice");
    }

    #[test]
    fn test_custom_bot_id_cannot_shadow_reserved_ids() {
        assert_ne!(custom_bot_id("bot"), DEFAULT_BOT_ID);
        assert_ne!(custom_bot_id("user"), USER_ID);
    }
}
