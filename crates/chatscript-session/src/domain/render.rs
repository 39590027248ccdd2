//! Resolves a step's message groups into displayable transcript entries.

use chatscript_core::rng::DeterministicRng;
use chatscript_core::session::TranscriptEntry;
use chatscript_script::step::Step;

/// Samples one line per message group, in declaration order.
///
/// Every call re-samples, so a step revisited in a wrong-answer loop may
/// phrase itself differently each time. Empty groups contribute nothing.
pub fn render_step(step: &Step, rng: &mut dyn DeterministicRng) -> Vec<TranscriptEntry> {
    step.messages
        .iter()
        .filter_map(|group| group.choose(rng))
        .map(|line| TranscriptEntry {
            from: line.bot_id.clone(),
            message: line.message.clone(),
            step: step.id.clone(),
        })
        .collect()
}
