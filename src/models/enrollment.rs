use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// A student's active enrollment in one course schedule. Owned by the
/// server; the client holds a read-only snapshot per fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub schedule: Schedule,
}
