//! Pure state transitions for the selection container.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{domain::Employee, error::StoreError};

/// In-memory state of one mounted container. Created with an empty roster in
/// the loading phase; mutated only through [`reduce`]; dropped with its scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub employees_list: Vec<Employee>,
    pub active_list: Vec<Employee>,
    pub loading: bool,
    pub error: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            employees_list: Vec::new(),
            active_list: Vec::new(),
            loading: true,
            error: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    ShowEmployees { data: Vec<Employee> },
    GetDataFromCache { cached_data: Vec<Employee> },
    CatchError,
    ToggleActive { value: Employee },
    ToggleNotActive { value: Employee },
}

const KNOWN_TAGS: &[&str] = &[
    "show_employees",
    "get_data_from_cache",
    "catch_error",
    "toggle_active",
    "toggle_not_active",
];

impl Action {
    /// Decodes a `{"type": ..., "payload": ...}` value. An unrecognized tag
    /// signals a coding defect in the producer and is never swallowed.
    pub fn from_tagged_json(value: &Value) -> Result<Self, StoreError> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if !KNOWN_TAGS.contains(&tag.as_str()) {
            return Err(StoreError::UnknownAction { tag });
        }
        serde_json::from_value(value.clone())
            .map_err(|source| StoreError::ActionDecode { tag, source })
    }
}

/// Maps (state, action) to the next state. Never mutates the input.
///
/// `ToggleActive` refuses a duplicate only when the candidate equals an
/// existing entry field-for-field, while `ToggleNotActive` removes by id
/// alone. Two value-distinct employees sharing an id can therefore both be
/// active, and one removal drops both; callers relying on either side of
/// that behavior get it unchanged.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::ShowEmployees { data } => AppState {
            employees_list: data,
            loading: false,
            ..state.clone()
        },
        Action::GetDataFromCache { cached_data } => AppState {
            active_list: cached_data,
            ..state.clone()
        },
        Action::CatchError => AppState {
            loading: false,
            error: true,
            ..state.clone()
        },
        Action::ToggleActive { value } => {
            let mut next = state.clone();
            if !next.active_list.contains(&value) {
                next.active_list.insert(0, value);
            }
            next
        }
        Action::ToggleNotActive { value } => {
            let mut next = state.clone();
            next.active_list.retain(|el| el.id != value.id);
            next
        }
    }
}
