// src/store/mod.rs
//
// The state container for the box. Owns the only copy of the state record;
// everything else reads it through `state()` and writes through `dispatch`.

pub mod action;
pub mod error;
pub mod reducer;
pub mod state;

pub use action::StoreAction;
pub use error::StoreError;
pub use reducer::reduce;
pub use state::{BoxProps, BoxState, FieldKey, SpringProps};

use rand::{rngs::StdRng, SeedableRng};

pub struct Store {
    state: BoxState,
    rng: StdRng,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: BoxState::default(),
            rng,
        }
    }

    pub fn state(&self) -> &BoxState {
        &self.state
    }

    pub fn dispatch(&mut self, action: StoreAction) {
        tracing::debug!(kind = action.kind(), ?action, "dispatch");
        self.state = reduce(&self.state, &action, &mut self.rng);
    }

    /// Dispatch by tag. On error the state is left as it was.
    pub fn dispatch_tagged(
        &mut self,
        kind: &str,
        key: Option<&str>,
        value: Option<f32>,
    ) -> Result<(), StoreError> {
        let action = StoreAction::parse(kind, key, value)?;
        self.dispatch(action);
        Ok(())
    }
}
