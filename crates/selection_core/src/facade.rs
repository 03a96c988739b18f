//! Convenience wrappers over dispatch: the load protocol and the toggles.

use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use shared::{domain::Employee, error::StoreError};
use tracing::warn;

use crate::{
    reducer::Action, store::DispatchHandle, EmployeeFetcher, SelectionCache,
};

/// Closes over a dispatch handle, the roster fetcher, and the cached
/// selection snapshot taken once at construction.
pub struct SelectionFacade {
    dispatch: DispatchHandle,
    fetcher: Arc<dyn EmployeeFetcher>,
    cached: Option<Vec<Employee>>,
}

impl SelectionFacade {
    /// Reads the cache here, once. Later loads reuse the snapshot rather than
    /// re-reading, and an unreadable cache counts as no snapshot.
    pub async fn new(
        dispatch: DispatchHandle,
        fetcher: Arc<dyn EmployeeFetcher>,
        cache: &dyn SelectionCache,
    ) -> Self {
        let cached = match cache.read().await {
            Ok(found) => found,
            Err(err) => {
                warn!("cached selection unavailable: {err:#}");
                None
            }
        };
        Self {
            dispatch,
            fetcher,
            cached,
        }
    }

    /// Fetches the roster and folds the outcome into the container: a
    /// sequence of employees lands in the state (followed by the cached
    /// selection, when one was found), anything else degrades into the error
    /// state. Transport failures from the fetcher propagate untouched and
    /// leave the state as it was. No retries, and concurrent calls are not
    /// deduplicated; the last one to resolve wins.
    pub async fn load_employees(&self) -> Result<()> {
        let payload = self.fetcher.fetch_employees().await?;
        match employee_sequence(&payload) {
            Some(data) => {
                self.dispatch.dispatch(Action::ShowEmployees { data })?;
                if let Some(cached_data) = self.cached.clone() {
                    self.dispatch
                        .dispatch(Action::GetDataFromCache { cached_data })?;
                }
            }
            None => self.dispatch.dispatch(Action::CatchError)?,
        }
        Ok(())
    }

    pub fn toggle_active(&self, value: Employee) -> Result<(), StoreError> {
        self.dispatch.dispatch(Action::ToggleActive { value })
    }

    pub fn toggle_not_active(&self, value: Employee) -> Result<(), StoreError> {
        self.dispatch.dispatch(Action::ToggleNotActive { value })
    }
}

fn employee_sequence(payload: &Value) -> Option<Vec<Employee>> {
    let items = payload.as_array()?;
    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}
