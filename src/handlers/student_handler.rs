use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::utils::require_student,
    auth::AuthenticatedUser,
    errors::AppError,
    models::domain::UserRole,
    models::dto::request::{LoginRequest, RegisterStudentRequest},
    models::dto::response::ProfileResponse,
};

#[post("/register")]
async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterStudentRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .account_service
        .register_student(request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(session))
}

#[post("/login")]
async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .account_service
        .login(request.into_inner(), UserRole::Student)
        .await?;

    Ok(HttpResponse::Ok().json(session))
}

#[get("")]
async fn profile(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_student(&auth.0)?;
    let profile = state.account_service.profile(&auth.0.sub).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse {
        message: "Profile".to_string(),
        profile,
    }))
}
