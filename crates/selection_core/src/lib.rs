use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use shared::domain::Employee;

pub mod facade;
pub mod reducer;
pub mod store;

pub use facade::SelectionFacade;
pub use reducer::{reduce, Action, AppState};
pub use store::{DispatchHandle, SelectionScope, StateHandle};

/// Produces the employee roster from wherever it lives. Transport failures
/// are `Err`; a payload of the wrong shape is a successful fetch whose shape
/// is judged by the caller.
#[async_trait]
pub trait EmployeeFetcher: Send + Sync {
    async fn fetch_employees(&self) -> Result<Value>;
}

pub struct MissingEmployeeFetcher;

#[async_trait]
impl EmployeeFetcher for MissingEmployeeFetcher {
    async fn fetch_employees(&self) -> Result<Value> {
        Err(anyhow!("employee fetcher is unavailable"))
    }
}

/// Persisted selection snapshot. `read` is called once per facade lifetime;
/// `write` belongs to code observing the active selection, never to the load
/// protocol.
#[async_trait]
pub trait SelectionCache: Send + Sync {
    async fn read(&self) -> Result<Option<Vec<Employee>>>;
    async fn write(&self, selection: &[Employee]) -> Result<()>;
}

pub struct MissingSelectionCache;

#[async_trait]
impl SelectionCache for MissingSelectionCache {
    async fn read(&self) -> Result<Option<Vec<Employee>>> {
        Err(anyhow!("selection cache is unavailable"))
    }

    async fn write(&self, _selection: &[Employee]) -> Result<()> {
        Err(anyhow!("selection cache is unavailable"))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
