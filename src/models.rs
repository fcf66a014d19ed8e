use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task record. The sole entity held by the store.
///
/// `id` is assigned by the server at creation time and never changes; `name` is
/// client-supplied and is the only mutable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub id: Uuid,
}
