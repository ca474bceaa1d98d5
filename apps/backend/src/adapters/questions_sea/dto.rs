//! DTOs for the questions_sea adapter.

/// DTO for inserting a new question.
#[derive(Debug, Clone)]
pub struct QuestionCreate {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: String,
}

impl QuestionCreate {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: i32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            difficulty,
            category: category.into(),
        }
    }
}
