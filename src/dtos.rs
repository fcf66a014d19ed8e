//! Request payload types for the task endpoints.

use serde::{Deserialize, Serialize};

/// Input DTO for creating a task. The server assigns the id.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewTaskDto {
    pub name: String,
}

/// Input DTO for renaming an existing task. The id comes from the path and is
/// never taken from the body.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTaskDto {
    pub name: String,
}
