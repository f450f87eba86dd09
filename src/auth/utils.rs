use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::UserRole,
};

pub fn require_teacher(claims: &Claims) -> AppResult<()> {
    if claims.role != UserRole::Teacher {
        return Err(AppError::Unauthorized(
            "Only teachers can perform this action".to_string(),
        ));
    }
    Ok(())
}

pub fn require_student(claims: &Claims) -> AppResult<()> {
    if claims.role != UserRole::Student {
        return Err(AppError::Unauthorized(
            "Only students can perform this action".to_string(),
        ));
    }
    Ok(())
}
