//! Shared application state.

use std::sync::{Arc, Mutex};

use chatscript_core::clock::Clock;
use chatscript_core::event::EventSink;
use chatscript_core::presentation::PresentationConfig;
use chatscript_core::rng::DeterministicRng;
use chatscript_core::store::SessionStore;
use chatscript_core::user::UserDirectory;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The authored script text, as loaded at startup.
    pub script: Arc<str>,
    /// Session persistence.
    pub store: Arc<dyn SessionStore>,
    /// Learner display-name lookup.
    pub users: Arc<dyn UserDirectory>,
    /// Completion and progress publication.
    pub events: Arc<dyn EventSink>,
    /// Time source for event timestamps.
    pub clock: Arc<dyn Clock>,
    /// Random source for alternative-phrasing selection.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Presentation timing served to clients.
    pub presentation: Arc<PresentationConfig>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        script: Arc<str>,
        store: Arc<dyn SessionStore>,
        users: Arc<dyn UserDirectory>,
        events: Arc<dyn EventSink>,
        clock: Arc<dyn Clock>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        presentation: Arc<PresentationConfig>,
    ) -> Self {
        Self {
            script,
            store,
            users,
            events,
            clock,
            rng,
            presentation,
        }
    }
}
