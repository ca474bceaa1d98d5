//! Category repository functions for the domain layer (generic over ConnectionTrait).

use std::collections::BTreeMap;

use sea_orm::ConnectionTrait;

use crate::adapters::categories_sea as categories_adapter;
use crate::errors::domain::DomainError;

/// Category domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub r#type: String,
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Category>, DomainError> {
    let categories = categories_adapter::list_all(conn).await?;
    Ok(categories.into_iter().map(Category::from).collect())
}

/// The id → name map every listing endpoint embeds.
///
/// A `BTreeMap` keeps the serialized object in id order.
pub fn name_map(categories: &[Category]) -> BTreeMap<i32, String> {
    categories
        .iter()
        .map(|cat| (cat.id, cat.r#type.clone()))
        .collect()
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::categories::Model> for Category {
    fn from(model: crate::entities::categories::Model) -> Self {
        Self {
            id: model.id,
            r#type: model.r#type,
        }
    }
}
