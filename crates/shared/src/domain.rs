use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(EmployeeId);

/// A selectable roster record. `id` is the only field this workspace
/// interprets; everything else belongs to whatever produced the record and is
/// carried opaquely. Equality covers the id and all opaque fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(flatten)]
    pub detail: serde_json::Map<String, serde_json::Value>,
}

impl Employee {
    pub fn new(id: i64) -> Self {
        Self {
            id: EmployeeId(id),
            detail: serde_json::Map::new(),
        }
    }
}
