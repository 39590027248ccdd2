//! The dialogue graph — immutable step mapping built once per script
//! version and shared read-only across all sessions.

use std::collections::HashMap;

use chatscript_core::error::DomainError;
use chatscript_core::speaker::NAME_PLACEHOLDER;

use crate::normalize;
use crate::parse;
use crate::step::Step;

/// Mapping of step ID to canonical step, plus the entry point.
#[derive(Debug, Clone, Default)]
pub struct DialogueGraph {
    steps: HashMap<String, Step>,
    entry_step_id: Option<String>,
}

impl DialogueGraph {
    /// Builds the ID-to-step mapping. The first step in declaration order
    /// becomes the graph's entry point; a duplicate ID keeps the latest
    /// declaration.
    #[must_use]
    pub fn build(steps: Vec<Step>) -> Self {
        let entry_step_id = steps.first().map(|step| step.id.clone());
        let steps = steps
            .into_iter()
            .map(|step| (step.id.clone(), step))
            .collect();
        Self {
            steps,
            entry_step_id,
        }
    }

    /// ID of the script's first declared step, absent for an empty graph.
    #[must_use]
    pub fn entry_step_id(&self) -> Option<&str> {
        self.entry_step_id.as_deref()
    }

    /// The entry step itself.
    #[must_use]
    pub fn entry_step(&self) -> Option<&Step> {
        self.entry_step_id().and_then(|id| self.steps.get(id))
    }

    /// Looks up a step by ID.
    #[must_use]
    pub fn get(&self, step_id: &str) -> Option<&Step> {
        self.steps.get(step_id)
    }

    /// True when the position ends the chat: no step ID at all, a step ID
    /// absent from the graph, or a present step offering no responses.
    #[must_use]
    pub fn is_terminal(&self, step_id: Option<&str>) -> bool {
        match step_id {
            None => true,
            Some(id) => self
                .steps
                .get(id)
                .is_none_or(|step| step.responses.is_empty()),
        }
    }

    /// Iterates over all steps in unspecified order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.values()
    }

    /// Number of steps in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the graph has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Builds the dialogue graph one learner sees from authored script text.
///
/// When `first_name` is present, every occurrence of the name placeholder
/// is substituted before parsing, so personalization reaches message and
/// response text uniformly.
///
/// # Errors
///
/// Returns `DomainError::Parse` when the document is not well-formed YAML
/// or not a top-level sequence.
pub fn build_graph(text: &str, first_name: Option<&str>) -> Result<DialogueGraph, DomainError> {
    let personalized;
    let text = match first_name {
        Some(name) => {
            personalized = text.replace(NAME_PLACEHOLDER, name);
            personalized.as_str()
        }
        None => text,
    };
    let raw_steps = parse::parse_script(text)?;
    let mut steps = Vec::with_capacity(raw_steps.len());
    for raw in &raw_steps {
        match normalize::normalize_step(raw) {
            Some(step) => steps.push(step),
            None => tracing::warn!("dropping malformed step from saved script"),
        }
    }
    Ok(DialogueGraph::build(steps))
}
