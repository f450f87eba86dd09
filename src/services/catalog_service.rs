use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Answer, CourseYear, Question, Subject},
    models::dto::request::{
        AddAnswersRequest, AddQuestionRequest, AddSubjectRequest, AddYearRequest,
        UpdateAnswerRequest,
    },
    repositories::{AnswerRepository, QuestionRepository, SubjectRepository, YearRepository},
};

/// Create/lookup operations over the teacher-authored catalog: years own
/// subjects, subjects own questions, questions own answers. Catalog entities
/// are scoped to the teacher who created them.
pub struct CatalogService {
    years: Arc<dyn YearRepository>,
    subjects: Arc<dyn SubjectRepository>,
    questions: Arc<dyn QuestionRepository>,
    answers: Arc<dyn AnswerRepository>,
}

impl CatalogService {
    pub fn new(
        years: Arc<dyn YearRepository>,
        subjects: Arc<dyn SubjectRepository>,
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            years,
            subjects,
            questions,
            answers,
        }
    }

    /// Duplicate year values are allowed; there is no uniqueness check.
    pub async fn add_year(&self, request: AddYearRequest, owner_id: &str) -> AppResult<CourseYear> {
        request.validate()?;
        let year = request.year.unwrap_or_default();

        self.years.insert(CourseYear::new(year, owner_id)).await
    }

    pub async fn list_years(&self, owner_id: &str) -> AppResult<Vec<CourseYear>> {
        self.years.find_by_owner(owner_id).await
    }

    pub async fn add_subject(
        &self,
        request: AddSubjectRequest,
        owner_id: &str,
    ) -> AppResult<Subject> {
        request.validate()?;
        let name = request.name.unwrap_or_default();
        let year_id = request.year_id.unwrap_or_default();

        self.subjects
            .insert(Subject::new(&name, &year_id, owner_id))
            .await
    }

    /// An empty listing is reported as NotFound, not as an empty success;
    /// existing clients depend on this, even though the score read treats
    /// absence as null (see `fetch_result`).
    pub async fn list_subjects(&self, year_id: &str, owner_id: &str) -> AppResult<Vec<Subject>> {
        let exists = self.subjects.exists_for_year(year_id, owner_id).await?;
        if !exists {
            return Err(AppError::NotFound(
                "Subjects in this year not found".to_string(),
            ));
        }

        self.subjects.find_by_year(year_id, owner_id).await
    }

    pub async fn get_subject(&self, id: &str) -> AppResult<Subject> {
        self.subjects
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Subject not found".to_string()))
    }

    pub async fn add_question(
        &self,
        request: AddQuestionRequest,
        owner_id: &str,
    ) -> AppResult<Question> {
        request.validate()?;
        let title = request.title.unwrap_or_default();
        let question_no = request.question_no.unwrap_or_default();
        let marks = request.marks.unwrap_or_default();
        let subject_id = request.subject_id.unwrap_or_default();

        self.questions
            .insert(Question::new(&title, question_no, marks, &subject_id, owner_id))
            .await
    }

    pub async fn get_question(
        &self,
        subject_id: &str,
        question_no: i32,
        owner_id: &str,
    ) -> AppResult<Question> {
        self.questions
            .find_one(subject_id, question_no, owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Questions in this subject not found".to_string()))
    }

    /// Validates the whole batch up front, so a schema failure inserts
    /// nothing. The bulk insert itself is not atomic across documents;
    /// a store-level failure mid-batch surfaces as a persistence error.
    pub async fn add_answers(&self, request: AddAnswersRequest) -> AppResult<usize> {
        request.validate()?;

        let answers: Vec<Answer> = request
            .answers
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                Answer::new(
                    item.title.as_deref().unwrap_or_default(),
                    item.is_preferred.unwrap_or(false),
                    item.question_id.as_deref().unwrap_or_default(),
                )
            })
            .collect();

        self.answers.insert_many(answers).await
    }

    pub async fn list_answers(&self, question_id: &str) -> AppResult<Vec<Answer>> {
        let exists = self.answers.exists_for_question(question_id).await?;
        if !exists {
            return Err(AppError::NotFound(
                "Answers for this question not found".to_string(),
            ));
        }

        self.answers.find_by_question(question_id).await
    }

    /// Marks exactly one answer of the question as the correct one, demoting
    /// all siblings. The demote and the promote are two store operations; a
    /// reader in between can briefly observe a question with no preferred
    /// answer. The store offers no multi-document transaction to close that
    /// window.
    pub async fn set_preferred_answer(
        &self,
        question_id: &str,
        request: UpdateAnswerRequest,
    ) -> AppResult<()> {
        request.validate()?;
        let answer_id = request.answer_id.unwrap_or_default();

        let answer = self
            .answers
            .find_by_id(&answer_id)
            .await?
            .ok_or_else(|| AppError::validation("answerId", "answer not in question"))?;

        if answer.question_id != question_id {
            return Err(AppError::validation("answerId", "answer not in question"));
        }

        self.answers.demote_all(question_id).await?;
        let matched = self.answers.promote(question_id, &answer_id).await?;
        if matched == 0 {
            // The answer vanished between the ownership check and the update.
            return Err(AppError::NotFound("Answers not found".to_string()));
        }

        Ok(())
    }
}
