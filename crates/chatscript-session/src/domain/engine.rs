//! The session state machine.
//!
//! A session is conceptually `NotStarted`, `AtStep(id)`, or `Complete`.
//! The engine performs no I/O; persistence and event publication are the
//! application layer's responsibility.

use chatscript_core::session::{SessionState, TranscriptEntry};
use chatscript_script::graph::DialogueGraph;

/// Outcome of applying a learner response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The session moved to a step that offers further responses.
    Advanced,
    /// The session reached a terminal position. Reported exactly once
    /// per terminal transition.
    Completed {
        /// The terminal step ID, absent when the chosen response carried
        /// no next step.
        final_step: Option<String>,
    },
}

/// Pure state-machine operations over one learner's session.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionEngine;

impl SessionEngine {
    /// Positions a fresh session at the graph's entry step. No message
    /// is appended; the first render derives its messages from the entry
    /// step. A session that already has a position is left untouched.
    pub fn start(self, graph: &DialogueGraph, session: &mut SessionState) {
        if session.current_step.is_none() {
            session.current_step = graph.entry_step_id().map(str::to_owned);
        }
    }

    /// Applies a learner's chosen response.
    ///
    /// The submitted transcript replaces the stored one only when it is
    /// strictly longer; duplicate or replayed submissions that resend an
    /// already-recorded history leave `messages` untouched. The current
    /// step is updated unconditionally. An unknown next-step ID is
    /// treated as terminal, never as an error: the script may have
    /// changed since the session started.
    pub fn apply_response(
        self,
        graph: &DialogueGraph,
        session: &mut SessionState,
        next_step: Option<String>,
        transcript: Vec<TranscriptEntry>,
    ) -> Transition {
        if transcript.len() > session.messages.len() {
            session.messages = transcript;
        }
        session.current_step = next_step;

        if graph.is_terminal(session.current_step.as_deref()) {
            Transition::Completed {
                final_step: session.current_step.clone(),
            }
        } else {
            Transition::Advanced
        }
    }

    /// Resets the session to its pre-start state. Never signals
    /// completion.
    pub fn restart(self, session: &mut SessionState) {
        session.messages.clear();
        session.current_step = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatscript_script::graph::build_graph;

    const SCRIPT: &str = concat!(
        "- 1:\n",
        "    messages: Hi\n",
        "    responses:\n",
        "    - Keep going: 2\n",
        "    - Stop: null\n",
        "- 2:\n",
        "    messages: Done.\n",
    );

    fn entry(step: &str, text: &str) -> TranscriptEntry {
        TranscriptEntry {
            from: "user".to_owned(),
            message: text.to_owned(),
            step: step.to_owned(),
        }
    }

    #[test]
    fn test_start_positions_fresh_session_at_entry_step() {
        // Arrange
        let graph = build_graph(SCRIPT, None).unwrap();
        let mut session = SessionState::default();

        // Act
        SessionEngine.start(&graph, &mut session);

        // Assert — positioned, but no transcript entry yet.
        assert_eq!(session.current_step.as_deref(), Some("1"));
        assert!(session.messages.is_empty());
    }

    #[test]
    fn test_start_leaves_positioned_session_untouched() {
        let graph = build_graph(SCRIPT, None).unwrap();
        let mut session = SessionState {
            messages: vec![],
            current_step: Some("2".to_owned()),
        };

        SessionEngine.start(&graph, &mut session);

        assert_eq!(session.current_step.as_deref(), Some("2"));
    }

    #[test]
    fn test_apply_response_advances_to_non_terminal_step() {
        // Step 2 of SCRIPT is terminal, so use a self-loop instead.
        let graph =
            build_graph("- 1:\n    messages: Hi\n    responses:\n    - Again: 1\n", None).unwrap();
        let mut session = SessionState::default();

        let transition = SessionEngine.apply_response(
            &graph,
            &mut session,
            Some("1".to_owned()),
            vec![entry("1", "Again")],
        );

        assert_eq!(transition, Transition::Advanced);
        assert_eq!(session.current_step.as_deref(), Some("1"));
        assert_eq!(session.messages.len(), 1);
    }

    #[test]
    fn test_transition_to_step_without_responses_completes() {
        let graph = build_graph(SCRIPT, None).unwrap();
        let mut session = SessionState::default();

        let transition = SessionEngine.apply_response(
            &graph,
            &mut session,
            Some("2".to_owned()),
            vec![entry("1", "Keep going")],
        );

        assert_eq!(
            transition,
            Transition::Completed {
                final_step: Some("2".to_owned())
            }
        );
    }

    #[test]
    fn test_transition_to_absent_next_step_completes() {
        let graph = build_graph(SCRIPT, None).unwrap();
        let mut session = SessionState::default();

        let transition =
            SessionEngine.apply_response(&graph, &mut session, None, vec![entry("1", "Stop")]);

        assert_eq!(transition, Transition::Completed { final_step: None });
        assert_eq!(session.current_step, None);
    }

    #[test]
    fn test_transition_to_unknown_step_id_completes_without_error() {
        let graph = build_graph(SCRIPT, None).unwrap();
        let mut session = SessionState::default();

        let transition = SessionEngine.apply_response(
            &graph,
            &mut session,
            Some("COMPLETE".to_owned()),
            vec![entry("1", "Keep going")],
        );

        assert_eq!(
            transition,
            Transition::Completed {
                final_step: Some("COMPLETE".to_owned())
            }
        );
    }

    #[test]
    fn test_replayed_transcript_is_a_no_op_on_messages() {
        // Arrange — session already holds a two-entry transcript.
        let graph = build_graph(SCRIPT, None).unwrap();
        let recorded = vec![entry("1", "Hi"), entry("1", "Keep going")];
        let mut session = SessionState {
            messages: recorded.clone(),
            current_step: Some("2".to_owned()),
        };

        // Act — a duplicate submission resends the same transcript with a
        // different step.
        let transition = SessionEngine.apply_response(
            &graph,
            &mut session,
            Some("1".to_owned()),
            recorded.clone(),
        );

        // Assert — messages untouched, current step still updated.
        assert_eq!(session.messages, recorded);
        assert_eq!(session.current_step.as_deref(), Some("1"));
        assert_eq!(transition, Transition::Advanced);
    }

    #[test]
    fn test_shorter_transcript_never_shrinks_messages() {
        let graph = build_graph(SCRIPT, None).unwrap();
        let recorded = vec![entry("1", "Hi"), entry("1", "Keep going")];
        let mut session = SessionState {
            messages: recorded.clone(),
            current_step: Some("2".to_owned()),
        };

        SessionEngine.apply_response(
            &graph,
            &mut session,
            Some("2".to_owned()),
            vec![entry("1", "Hi")],
        );

        assert_eq!(session.messages, recorded);
    }

    #[test]
    fn test_longer_transcript_replaces_the_stored_one() {
        let graph = build_graph(SCRIPT, None).unwrap();
        let mut session = SessionState {
            messages: vec![entry("1", "Hi")],
            current_step: Some("1".to_owned()),
        };
        let grown = vec![entry("1", "Hi"), entry("1", "Stop")];

        SessionEngine.apply_response(&graph, &mut session, None, grown.clone());

        assert_eq!(session.messages, grown);
    }

    #[test]
    fn test_restart_clears_transcript_and_position() {
        let mut session = SessionState {
            messages: vec![entry("1", "Hi")],
            current_step: Some("2".to_owned()),
        };

        SessionEngine.restart(&mut session);

        assert!(session.is_fresh());
    }
}
