//! Author-time validation of raw script steps.
//!
//! Collects every finding instead of stopping at the first, so an author
//! sees all problems in one save round-trip. Validation never runs
//! against runtime session state.

use serde_yaml::Value;

use chatscript_core::speaker::MAX_RESPONSES;

use crate::parse;

/// A single author-facing validation finding. The message reproduces the
/// offending step so the author can locate it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationError {
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    fn new(message: String) -> Self {
        Self { message }
    }
}

/// Validates a script document, collecting all author-facing errors.
///
/// A document that does not parse as a YAML sequence yields exactly one
/// blocking error; otherwise every step is checked independently.
#[must_use]
pub fn validate_script(text: &str) -> Vec<ValidationError> {
    match parse::parse_script(text) {
        Ok(steps) => steps.iter().flat_map(validate_step).collect(),
        Err(err) => vec![ValidationError::new(err.to_string())],
    }
}

/// Validates one raw step, returning its findings.
fn validate_step(step: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(body) = single_key_body(step) else {
        errors.push(ValidationError::new(format!(
            "Step {} must be a YAML mapping with a string key and a nested mapping \
             of 'messages' and optional 'responses' as its value.",
            as_yaml(step)
        )));
        return errors;
    };

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|&field| body.get(field).is_none())
        .collect();
    if !missing.is_empty() {
        // Skip the remaining checks: they would only cascade into
        // spurious findings for the same step.
        errors.push(ValidationError::new(format!(
            "Step {} is missing the following attributes: {}",
            as_yaml(step),
            missing.join(", ")
        )));
        return errors;
    }

    validate_messages(step, body.get("messages"), &mut errors);
    validate_responses(step, body.get("responses"), &mut errors);
    validate_image_url(step, body.get("image-url"), &mut errors);
    validate_image_alt(step, body.get("image-alt"), &mut errors);
    errors
}

const REQUIRED_FIELDS: [&str; 1] = ["messages"];

/// Returns the step body when the step is a single-key mapping.
fn single_key_body(step: &Value) -> Option<&Value> {
    let mapping = step.as_mapping()?;
    if mapping.len() != 1 {
        return None;
    }
    mapping.iter().next().map(|(_, body)| body)
}

/// `messages` must be a string or a sequence.
fn validate_messages(step: &Value, messages: Option<&Value>, errors: &mut Vec<ValidationError>) {
    let valid = matches!(messages, Some(Value::String(_) | Value::Sequence(_)));
    if !valid {
        errors.push(ValidationError::new(format!(
            "The attribute 'messages' has to be a string or a list of messages in {}.",
            as_yaml(step)
        )));
    }
}

/// `responses`, when present, must be a sequence of single-key mappings
/// of at most `MAX_RESPONSES` entries.
fn validate_responses(step: &Value, responses: Option<&Value>, errors: &mut Vec<ValidationError>) {
    let Some(responses) = responses else {
        return;
    };
    let valid = responses.as_sequence().is_some_and(|entries| {
        entries.len() <= MAX_RESPONSES
            && entries
                .iter()
                .all(|entry| entry.as_mapping().is_some_and(|m| m.len() == 1))
    });
    if !valid {
        errors.push(ValidationError::new(format!(
            "The 'responses' attribute of {} has to be a list of response mappings \
             of maximum length {MAX_RESPONSES}.",
            as_yaml(step)
        )));
    }
}

/// `image-url`, when present, must be a syntactically valid URL string.
fn validate_image_url(step: &Value, image_url: Option<&Value>, errors: &mut Vec<ValidationError>) {
    let Some(image_url) = image_url else {
        return;
    };
    let valid = image_url.as_str().is_some_and(is_url_like);
    if !valid {
        errors.push(ValidationError::new(format!(
            "The 'image-url' attribute of {} has to be a valid URL string.",
            as_yaml(step)
        )));
    }
}

/// `image-alt`, when present, must be a string.
fn validate_image_alt(step: &Value, image_alt: Option<&Value>, errors: &mut Vec<ValidationError>) {
    let Some(image_alt) = image_alt else {
        return;
    };
    if image_alt.as_str().is_none() {
        errors.push(ValidationError::new(format!(
            "The 'image-alt' attribute of {} has to be a string.",
            as_yaml(step)
        )));
    }
}

/// Accepts absolute `scheme://authority` URLs and rooted paths such as
/// `/static/bot.png`, the only portable form for course assets.
fn is_url_like(url: &str) -> bool {
    if url.contains(char::is_whitespace) {
        return false;
    }
    if let Some((scheme, rest)) = url.split_once("://") {
        return !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            && !rest.is_empty();
    }
    url.starts_with('/')
}

/// Reproduces a step as YAML for error messages.
fn as_yaml(step: &Value) -> String {
    serde_yaml::to_string(step)
        .map_or_else(|_| "<unprintable step>".to_owned(), |s| s.trim().to_owned())
}
