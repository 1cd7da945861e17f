//! One settings-view session: owns the layout state, feeds it actions and
//! saves it through a [`ConfigurationStore`].

use super::reducer::{LayoutAction, LayoutReducer, LayoutState};
use crate::error::{AppError, LayoutError};
use crate::layout::layout_file::ConfigurationStore;
use crate::layout::types::ConfigurationUpdate;

/// Outcome of running a batch of actions.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub applied: usize,
    pub rejected: Vec<(usize, LayoutError)>,
}

pub struct Session<S> {
    store: S,
    reducer: LayoutReducer,
    state: LayoutState,
}

impl<S: ConfigurationStore> Session<S> {
    /// Fetch the configuration and load it into a fresh state.
    pub fn open(mut store: S, reducer: LayoutReducer) -> Result<Self, AppError> {
        let document = store.fetch()?;
        let state = reducer.reduce(
            &LayoutState::default(),
            LayoutAction::SetData {
                data: Box::new(document),
            },
        )?;

        Ok(Self {
            store,
            reducer,
            state,
        })
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply one action. A rejected action leaves the state as it was.
    pub fn dispatch(&mut self, action: LayoutAction) -> Result<(), LayoutError> {
        let kind = action.kind();
        match self.reducer.reduce(&self.state, action) {
            Ok(next) => {
                self.state = next;
                Ok(())
            }
            Err(e) => {
                if e.is_notice() {
                    tracing::info!(action = kind, "{}", e);
                } else {
                    tracing::warn!(action = kind, error = %e, "action rejected");
                }
                Err(e)
            }
        }
    }

    /// Apply actions in order, skipping the ones that are rejected.
    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = LayoutAction>) -> ApplyReport {
        let mut report = ApplyReport::default();
        for (index, action) in actions.into_iter().enumerate() {
            match self.dispatch(action) {
                Ok(()) => report.applied += 1,
                Err(e) => report.rejected.push((index, e)),
            }
        }
        report
    }

    /// Send the working copy to the store. On success the saved copy becomes
    /// the new baseline; on failure nothing changes and the edits stay.
    pub fn save(&mut self) -> Result<ConfigurationUpdate, AppError> {
        let body = self.state.update_body();
        match self.store.update(&body) {
            Ok(saved) => {
                tracing::info!(
                    uid = saved.schema.uid.as_deref().unwrap_or("-"),
                    rows = body.layouts.edit.len(),
                    "configuration saved"
                );
                self.dispatch(LayoutAction::SubmitSucceeded)?;
                Ok(body)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save configuration");
                Err(e)
            }
        }
    }
}
