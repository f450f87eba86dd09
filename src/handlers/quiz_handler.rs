use actix_web::{get, patch, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::utils::{require_student, require_teacher},
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{
        AddAnswersRequest, AddQuestionRequest, AddSubjectRequest, AddYearRequest, AttemptRequest,
        QuestionQuery, UpdateAnswerRequest,
    },
    models::dto::response::{
        AnswersResponse, AttemptResponse, MessageResponse, QuestionCreatedData,
        QuestionCreatedResponse, QuestionResponse, ResultsResponse, SubjectResponse,
        SubjectsResponse, YearResponse, YearsResponse,
    },
};

#[post("/add_course_year")]
async fn add_course_year(
    state: web::Data<AppState>,
    request: web::Json<AddYearRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;
    let year = state
        .catalog_service
        .add_year(request.into_inner(), &auth.0.sub)
        .await?;

    Ok(HttpResponse::Created().json(YearResponse {
        message: "Year Saved".to_string(),
        year: year.year,
    }))
}

#[get("/fetch_course_years")]
async fn fetch_course_years(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;
    let years = state.catalog_service.list_years(&auth.0.sub).await?;

    Ok(HttpResponse::Ok().json(YearsResponse {
        message: "Years".to_string(),
        years,
    }))
}

#[post("/add_subject")]
async fn add_subject(
    state: web::Data<AppState>,
    request: web::Json<AddSubjectRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;
    let subject = state
        .catalog_service
        .add_subject(request.into_inner(), &auth.0.sub)
        .await?;

    Ok(HttpResponse::Created().json(SubjectResponse {
        message: "Subject Saved".to_string(),
        subject,
    }))
}

#[get("/fetch_subjects/{year}")]
async fn fetch_subjects(
    state: web::Data<AppState>,
    year: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;
    let subjects = state
        .catalog_service
        .list_subjects(&year.into_inner(), &auth.0.sub)
        .await?;

    Ok(HttpResponse::Ok().json(SubjectsResponse {
        message: "Subjects".to_string(),
        subjects,
    }))
}

// Any authenticated identity may resolve a single subject; students need it
// to label their results.
#[get("/fetch_subject/{subject}")]
async fn fetch_subject(
    state: web::Data<AppState>,
    subject: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let subject = state
        .catalog_service
        .get_subject(&subject.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(SubjectResponse {
        message: "Subject".to_string(),
        subject,
    }))
}

#[post("/add_question")]
async fn add_question(
    state: web::Data<AppState>,
    request: web::Json<AddQuestionRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;
    let question = state
        .catalog_service
        .add_question(request.into_inner(), &auth.0.sub)
        .await?;

    Ok(HttpResponse::Created().json(QuestionCreatedResponse {
        message: "Question Saved".to_string(),
        data: QuestionCreatedData {
            id: question.id,
            question: question.title,
        },
    }))
}

#[get("/fetch_questions")]
async fn fetch_questions(
    state: web::Data<AppState>,
    query: web::Query<QuestionQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;
    let query = query.into_inner();
    query.validate()?;

    let question = state
        .catalog_service
        .get_question(
            query.subject.as_deref().unwrap_or_default(),
            query.question_no.unwrap_or_default(),
            &auth.0.sub,
        )
        .await?;

    Ok(HttpResponse::Ok().json(QuestionResponse {
        message: "Questions".to_string(),
        questions: question,
    }))
}

#[post("/add_answer")]
async fn add_answer(
    state: web::Data<AppState>,
    request: web::Json<AddAnswersRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;
    let inserted = state
        .catalog_service
        .add_answers(request.into_inner())
        .await?;

    log::debug!("inserted {} answers", inserted);

    Ok(HttpResponse::Created().json(MessageResponse::new("Answer Saved")))
}

#[get("/fetch_answers/{question}")]
async fn fetch_answers(
    state: web::Data<AppState>,
    question: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;
    let answers = state
        .catalog_service
        .list_answers(&question.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(AnswersResponse {
        message: "Answers".to_string(),
        answers,
    }))
}

#[patch("/update_answer/{question}")]
async fn update_answer(
    state: web::Data<AppState>,
    question: web::Path<String>,
    request: web::Json<UpdateAnswerRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_teacher(&auth.0)?;
    state
        .catalog_service
        .set_preferred_answer(&question.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Answer Updated")))
}

#[post("/attempt_question")]
async fn attempt_question(
    state: web::Data<AppState>,
    request: web::Json<AttemptRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_student(&auth.0)?;
    let outcome = state
        .attempt_service
        .attempt(request.into_inner(), &auth.0.sub)
        .await?;

    Ok(HttpResponse::Ok().json(AttemptResponse {
        message: "Question Attempted".to_string(),
        is_correct: outcome.is_correct,
        result: outcome.result,
    }))
}

#[get("/fetch_results/{subject}")]
async fn fetch_results(
    state: web::Data<AppState>,
    subject: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_student(&auth.0)?;
    let results = state
        .attempt_service
        .fetch_result(&auth.0.sub, &subject.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ResultsResponse {
        message: "Quiz Results".to_string(),
        results,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(add_course_year)
        .service(fetch_course_years)
        .service(add_subject)
        .service(fetch_subjects)
        .service(fetch_subject)
        .service(add_question)
        .service(fetch_questions)
        .service(add_answer)
        .service(fetch_answers)
        .service(update_answer)
        .service(attempt_question)
        .service(fetch_results);
}
