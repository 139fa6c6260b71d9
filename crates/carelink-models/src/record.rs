//! Record type shared by every collection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A uniquely-identified entity instance.
///
/// The `id` is assigned by the server exactly once at creation and is
/// immutable afterwards. All other fields are freeform and
/// collection-specific; they serialize flat alongside the id, so the wire
/// shape is `{"id": "...", "name": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Create a record with a fresh id from client-supplied fields.
    ///
    /// A client-supplied `id` field is discarded; the id is never
    /// client-controlled.
    pub fn new(mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self {
            id: Uuid::new_v4().to_string(),
            fields,
        }
    }

    /// Shallow-merge a patch over this record's fields.
    ///
    /// Fields absent from the patch are preserved; a patch `id` field is
    /// ignored.
    pub fn merge(&mut self, patch: Map<String, Value>) {
        for (key, value) in patch {
            if key == "id" {
                continue;
            }
            self.fields.insert(key, value);
        }
    }

    /// Look up a field value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Look up a field and return it as a string slice, if it is one.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}
