//! Script document parsing — pure syntax to data, no content rules.

use serde_yaml::Value;

use chatscript_core::error::DomainError;

/// Decodes authored script text into the raw step sequence.
///
/// # Errors
///
/// Returns `DomainError::Parse` when the text is not well-formed YAML, or
/// parses to something other than a sequence.
pub fn parse_script(text: &str) -> Result<Vec<Value>, DomainError> {
    let document: Value = serde_yaml::from_str(text.trim()).map_err(|err| {
        DomainError::Parse(format!(
            "the script has to be a YAML sequence of step mappings: {err}"
        ))
    })?;
    match document {
        Value::Sequence(steps) => Ok(steps),
        _ => Err(DomainError::Parse(
            "the script has to be a YAML sequence of step mappings".to_owned(),
        )),
    }
}
