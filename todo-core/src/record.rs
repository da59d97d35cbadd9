use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user-entered todo entry.
///
/// The id is assigned at creation and stays stable for the record's lifetime;
/// it is only ever used as a lookup and display key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    /// Optional calendar date attached to the entry (a due date, typically).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Record {
    /// Creates a fresh, uncompleted record with a new unique id.
    pub fn new(text: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            date,
        }
    }
}
