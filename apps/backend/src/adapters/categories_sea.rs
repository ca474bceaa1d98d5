//! SeaORM adapter for the category repository.

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::entities::categories;

// Adapter functions return DbErr; the repos layer maps to DomainError via From<DbErr>.

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find()
        .order_by_asc(categories::Column::Id)
        .all(conn)
        .await
}
