//! SeaORM adapter for the question repository.

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::questions;

pub mod dto;

pub use dto::QuestionCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError via From<DbErr>.

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find_by_id(id).one(conn).await
}

pub async fn create_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<questions::Model, sea_orm::DbErr> {
    let question_active = questions::ActiveModel {
        id: NotSet,
        question: Set(dto.question),
        answer: Set(dto.answer),
        difficulty: Set(dto.difficulty),
        category: Set(dto.category),
    };

    question_active.insert(conn).await
}

/// Delete a question by id. Returns the number of rows removed (0 or 1).
pub async fn delete_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let res = questions::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    questions::Entity::find().count(conn).await
}

/// Case-insensitive substring match on the question text.
///
/// `LOWER(question) LIKE %term%` keeps the comparison portable across
/// Postgres and SQLite; `ILIKE` would be Postgres-only.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    let pattern = format!("%{}%", term.to_lowercase());
    questions::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col((
                questions::Entity,
                questions::Column::Question,
            ))))
            .like(pattern),
        )
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

pub async fn list_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: &str,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .filter(questions::Column::Category.eq(category))
        .order_by_asc(questions::Column::Id)
        .all(conn)
        .await
}

/// Quiz candidate pool: every question not in `excluded`, optionally scoped
/// to one category. The exclusion filter is only added for a non-empty list
/// so no backend ever sees an empty `NOT IN ()`.
pub async fn list_pool<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: Option<&str>,
    excluded: &[i32],
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    let mut query = questions::Entity::find();
    if let Some(category) = category {
        query = query.filter(questions::Column::Category.eq(category));
    }
    if !excluded.is_empty() {
        query = query.filter(questions::Column::Id.is_not_in(excluded.iter().copied()));
    }
    query.order_by_asc(questions::Column::Id).all(conn).await
}
