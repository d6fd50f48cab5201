use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier
    pub id: i32,
    /// Category name
    pub name: String,
}
