use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::ScoreRecord,
    models::dto::request::AttemptRequest,
    repositories::{AnswerRepository, QuestionRepository, ScoreRepository},
};

/// Every subject tally is reported out of a fixed 10 marks, regardless of
/// the marks assigned to individual questions. Existing clients depend on
/// this shape; deriving it from question marks is a breaking change.
const SUBJECT_TOTAL_MARKS: i32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct AttemptOutcome {
    pub is_correct: bool,
    pub result: Option<ScoreRecord>,
}

/// The scoring flow. All state lives in the score collection, keyed by
/// (student, subject); a correct attempt is a single atomic increment there,
/// a wrong attempt touches nothing. Repeated attempts on the same question
/// are not tracked and each correct one scores again.
pub struct AttemptService {
    answers: Arc<dyn AnswerRepository>,
    questions: Arc<dyn QuestionRepository>,
    scores: Arc<dyn ScoreRepository>,
}

impl AttemptService {
    pub fn new(
        answers: Arc<dyn AnswerRepository>,
        questions: Arc<dyn QuestionRepository>,
        scores: Arc<dyn ScoreRepository>,
    ) -> Self {
        Self {
            answers,
            questions,
            scores,
        }
    }

    pub async fn attempt(
        &self,
        request: AttemptRequest,
        student_id: &str,
    ) -> AppResult<AttemptOutcome> {
        request.validate()?;
        let answer_id = request.answer_id.unwrap_or_default();

        let answer = self
            .answers
            .find_by_id(&answer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Answers not found".to_string()))?;

        // A dangling question reference means the catalog data is broken, not
        // that the client asked for something missing.
        let question = self
            .questions
            .find_by_id(&answer.question_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "answer '{}' references missing question '{}'",
                    answer.id, answer.question_id
                ))
            })?;

        if !answer.is_preferred {
            return Ok(AttemptOutcome {
                is_correct: false,
                result: None,
            });
        }

        let record = self
            .scores
            .record_correct_attempt(student_id, &question.subject_id, SUBJECT_TOTAL_MARKS)
            .await?;

        Ok(AttemptOutcome {
            is_correct: true,
            result: Some(record),
        })
    }

    /// Plain read: a student with no record for the subject gets None, not an
    /// error.
    pub async fn fetch_result(
        &self,
        student_id: &str,
        subject_id: &str,
    ) -> AppResult<Option<ScoreRecord>> {
        self.scores
            .find_by_student_and_subject(student_id, subject_id)
            .await
    }
}
