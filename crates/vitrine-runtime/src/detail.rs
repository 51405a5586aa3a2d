use vitrine_types::{DetailState, ProductDetail};

/// State machine for the per-selection detail fetch.
///
/// Every selection (and deselection) bumps a generation counter; a resolution
/// is only applied if the generation it was issued under is still current.
/// A slow fetch for a superseded selection is discarded whole, success and
/// failure alike, so it can never clobber a newer selection.
#[derive(Debug, Default)]
pub struct DetailController {
    state: DetailState,
    generation: u64,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new selection and return the generation the fetch for it
    /// must present at resolution time.
    pub fn begin(&mut self, id: u64) -> u64 {
        self.generation += 1;
        self.state = DetailState::Loading { id };
        self.generation
    }

    /// Apply a successful resolution. Returns `false` if it was stale and
    /// nothing changed.
    pub fn resolve_success(&mut self, issued: u64, detail: ProductDetail) -> bool {
        if issued != self.generation {
            return false;
        }
        self.state = DetailState::Ready { detail };
        true
    }

    /// Apply a failed resolution. Returns `false` if it was stale and
    /// nothing changed.
    pub fn resolve_failure(&mut self, issued: u64, id: u64, reason: String) -> bool {
        if issued != self.generation {
            return false;
        }
        self.state = DetailState::Failed { id, reason };
        true
    }

    /// Close the detail view. Clears any error and invalidates whatever is
    /// still in flight for the prior selection.
    pub fn deselect(&mut self) {
        self.generation += 1;
        self.state = DetailState::Idle;
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }
}
