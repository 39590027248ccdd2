//! Presentation timing configuration served to front-end clients.
//!
//! The core never interprets these values; they travel through the init
//! payload so the rendering layer does not hard-code them.

use serde::{Deserialize, Serialize};

/// Timing constants for chat presentation, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Delay before a bot message finishes animating in.
    pub bot_message_animation_delay: u32,
    /// Delay before a user message finishes animating in.
    pub user_message_animation_delay: u32,
    /// Duration of the response-button entering transition.
    pub buttons_entering_transition_duration: u32,
    /// Duration of the response-button leaving transition.
    pub buttons_leaving_transition_duration: u32,
    /// Delay before scrolling to the newest message.
    pub scroll_delay: u32,
    /// Simulated typing delay per character of bot text.
    pub typing_delay_per_character: u32,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            bot_message_animation_delay: 2500,
            user_message_animation_delay: 1000,
            buttons_entering_transition_duration: 1000,
            buttons_leaving_transition_duration: 800,
            scroll_delay: 800,
            typing_delay_per_character: 25,
        }
    }
}
