use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::UserRole,
    models::dto::request::{LoginRequest, RegisterTeacherRequest},
};

#[post("/register")]
async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterTeacherRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .account_service
        .register_teacher(request.into_inner())
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
        .login(request.into_inner(), UserRole::Teacher)
        .await?;

    Ok(HttpResponse::Ok().json(session))
}
