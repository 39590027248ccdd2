//! Canonical step records produced by normalization.

use serde::{Deserialize, Serialize};

use chatscript_core::rng::DeterministicRng;

/// One candidate utterance within a message group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLine {
    /// The utterance text.
    pub message: String,
    /// Speaker ID: the default bot ID or a namespaced custom bot ID.
    pub bot_id: String,
}

/// One displayed turn.
///
/// A group with more than one line is an alternative-phrasing pool:
/// exactly one line is chosen uniformly at random each time the step is
/// displayed, which keeps repeated wrong-answer loops from sounding
/// canned. Groups themselves always display in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageGroup(pub Vec<MessageLine>);

impl MessageGroup {
    /// Resolves the group for one visit, re-sampling on every call.
    pub fn choose<'a>(&'a self, rng: &mut dyn DeterministicRng) -> Option<&'a MessageLine> {
        match self.0.len() {
            0 => None,
            1 => self.0.first(),
            len => self.0.get(rng.pick_index(len)),
        }
    }
}

/// A labeled learner choice linking to the next step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Button label shown to the learner.
    pub message: String,
    /// ID of the next step. Absent when the chat ends with this response.
    pub step: Option<String>,
}

/// One node of the dialogue graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Step ID, unique within a graph.
    pub id: String,
    /// Ordered message groups displayed when the step is visited.
    pub messages: Vec<MessageGroup>,
    /// Optional image attached to the step.
    pub image_url: Option<String>,
    /// Alternative text for the image.
    pub image_alt: Option<String>,
    /// Optional auxiliary banner kind.
    pub notice_type: Option<String>,
    /// Optional auxiliary banner text.
    pub notice_text: Option<String>,
    /// Learner choices, at most `MAX_RESPONSES`. Empty means the step is
    /// terminal.
    pub responses: Vec<Response>,
}
