//! Question repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::questions_sea as questions_adapter;
use crate::adapters::questions_sea::QuestionCreate;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Question domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: String,
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Question>, DomainError> {
    let questions = questions_adapter::list_all(conn).await?;
    Ok(questions.into_iter().map(Question::from).collect())
}

pub async fn create_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: QuestionCreate,
) -> Result<Question, DomainError> {
    let question = questions_adapter::create_question(conn, dto).await?;
    Ok(Question::from(question))
}

/// Delete a question by id, failing with a domain not-found when no row
/// carries the id.
pub async fn delete_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    let rows = questions_adapter::delete_question(conn, id).await?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Question,
            format!("Question {id} not found"),
        ));
    }
    Ok(())
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    let total = questions_adapter::count(conn).await?;
    Ok(total)
}

pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<Question>, DomainError> {
    let questions = questions_adapter::search(conn, term).await?;
    Ok(questions.into_iter().map(Question::from).collect())
}

pub async fn list_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: &str,
) -> Result<Vec<Question>, DomainError> {
    let questions = questions_adapter::list_by_category(conn, category).await?;
    Ok(questions.into_iter().map(Question::from).collect())
}

/// Quiz candidate pool: unasked questions, optionally scoped to a category.
pub async fn list_pool<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: Option<&str>,
    excluded: &[i32],
) -> Result<Vec<Question>, DomainError> {
    let questions = questions_adapter::list_pool(conn, category, excluded).await?;
    Ok(questions.into_iter().map(Question::from).collect())
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::questions::Model> for Question {
    fn from(model: crate::entities::questions::Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
            difficulty: model.difficulty,
            category: model.category,
        }
    }
}
