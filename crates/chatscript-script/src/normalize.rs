//! Step normalization — expands authored shorthand into canonical records.
//!
//! Assumes input already passed author-time validation; steps the
//! validator would reject are dropped on a best-effort basis.

use serde_yaml::Value;

use chatscript_core::speaker::{DEFAULT_BOT_ID, custom_bot_id};

use crate::step::{MessageGroup, MessageLine, Response, Step};

/// Shorthand message forms an author may write, resolved recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageItem {
    /// A bare string, spoken by the default bot.
    Text(String),
    /// A `{speaker: text}` mapping. Multiple keys mean multiple speakers
    /// contributing candidates to the same turn.
    Speakers(Vec<(String, String)>),
    /// A nested sequence whose elements collapse into one shared group of
    /// alternatives.
    Alternatives(Vec<MessageItem>),
}

impl MessageItem {
    /// Parses one authored message item. Returns `None` for shapes the
    /// validator rejects.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                scalar_to_string(value).map(Self::Text)
            }
            Value::Mapping(mapping) => Some(Self::Speakers(
                mapping
                    .iter()
                    .filter_map(|(key, text)| {
                        Some((scalar_to_string(key)?, scalar_to_string(text)?))
                    })
                    .collect(),
            )),
            Value::Sequence(items) => Some(Self::Alternatives(
                items.iter().filter_map(Self::from_value).collect(),
            )),
            _ => None,
        }
    }

    /// Flattens the item into its `(text, speaker)` candidate lines.
    fn lines(&self) -> Vec<MessageLine> {
        match self {
            Self::Text(text) => vec![MessageLine {
                message: text.clone(),
                bot_id: DEFAULT_BOT_ID.to_owned(),
            }],
            Self::Speakers(speakers) => speakers
                .iter()
                .map(|(key, text)| MessageLine {
                    message: text.clone(),
                    bot_id: custom_bot_id(key),
                })
                .collect(),
            Self::Alternatives(items) => items.iter().flat_map(MessageItem::lines).collect(),
        }
    }
}

/// Converts a validated raw step into its canonical record.
///
/// Returns `None` when the raw value is not a single-key mapping with a
/// `messages` field, the shapes validation reports to the author.
#[must_use]
pub fn normalize_step(raw: &Value) -> Option<Step> {
    let mapping = raw.as_mapping()?;
    if mapping.len() != 1 {
        return None;
    }
    let (key, body) = mapping.iter().next()?;
    Some(Step {
        id: scalar_to_string(key)?,
        messages: normalize_messages(body.get("messages")?),
        image_url: string_field(body, "image-url"),
        image_alt: string_field(body, "image-alt"),
        notice_type: string_field(body, "notice-type"),
        notice_text: string_field(body, "notice-text"),
        responses: normalize_responses(body.get("responses")),
    })
}

/// Normalizes the `messages` field into ordered groups.
///
/// A top-level sequence yields one group per element; a bare scalar or
/// mapping is treated as a one-element sequence. Nested sequences
/// collapse into a single shared group of alternatives.
fn normalize_messages(value: &Value) -> Vec<MessageGroup> {
    match value {
        Value::Sequence(items) => items.iter().map(item_group).collect(),
        other => vec![item_group(other)],
    }
}

fn item_group(value: &Value) -> MessageGroup {
    MessageGroup(
        MessageItem::from_value(value)
            .map(|item| item.lines())
            .unwrap_or_default(),
    )
}

/// Normalizes the `responses` field.
///
/// Each `{label: next}` entry stringifies both sides so graph lookups
/// always compare strings, even when the author wrote a numeric or
/// boolean next-step ID. An authored `null` next step stays absent.
fn normalize_responses(value: Option<&Value>) -> Vec<Response> {
    let Some(Value::Sequence(entries)) = value else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let mapping = entry.as_mapping()?;
            if mapping.len() != 1 {
                return None;
            }
            let (label, next) = mapping.iter().next()?;
            Some(Response {
                message: scalar_to_string(label)?,
                step: scalar_to_string(next),
            })
        })
        .collect()
}

fn string_field(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(|value| value.as_str().map(str::to_owned))
}

/// Stringifies a scalar YAML value. Returns `None` for `null` and for
/// any non-scalar shape.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
