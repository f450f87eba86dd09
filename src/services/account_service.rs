use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::{password, JwtService},
    errors::{AppError, AppResult},
    models::domain::{User, UserRole},
    models::dto::{
        request::{LoginRequest, RegisterStudentRequest, RegisterTeacherRequest},
        response::{AuthResponse, UserDto},
    },
    repositories::UserRepository,
};

/// Registration and login for students and teachers. Both roles live in one
/// collection; login is gated on the expected role so a teacher credential
/// cannot be used on the student endpoint or vice versa.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    jwt: JwtService,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>, jwt: JwtService) -> Self {
        Self { users, jwt }
    }

    pub async fn register_student(
        &self,
        request: RegisterStudentRequest,
    ) -> AppResult<AuthResponse> {
        request.validate()?;
        let email = request.email.unwrap_or_default();
        let enrollment_no = request.enrollment_no.unwrap_or_default();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::AlreadyExists("The email already exists.".to_string()));
        }
        if self.users.enrollment_exists(&enrollment_no).await? {
            return Err(AppError::AlreadyExists(
                "The enrollment no already exists.".to_string(),
            ));
        }

        let password_hash = password::hash_password(&request.password.unwrap_or_default())?;
        let student = User::new_student(
            &request.name.unwrap_or_default(),
            &email,
            &password_hash,
            &enrollment_no,
            &request.branch.unwrap_or_default(),
            request.year.unwrap_or_default(),
        );

        let saved = self.users.insert(student).await?;
        self.session_for(saved)
    }

    pub async fn register_teacher(
        &self,
        request: RegisterTeacherRequest,
    ) -> AppResult<AuthResponse> {
        request.validate()?;
        let email = request.email.unwrap_or_default();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::AlreadyExists("The email already exists.".to_string()));
        }

        let password_hash = password::hash_password(&request.password.unwrap_or_default())?;
        let teacher = User::new_teacher(
            &request.name.unwrap_or_default(),
            &email,
            &password_hash,
        );

        let saved = self.users.insert(teacher).await?;
        self.session_for(saved)
    }

    pub async fn login(&self, request: LoginRequest, expected_role: UserRole) -> AppResult<AuthResponse> {
        request.validate()?;
        let email = request.email.unwrap_or_default();

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .filter(|user| user.role == expected_role)
            .ok_or_else(|| {
                AppError::validation("email", "The email doesn't exist")
            })?;

        let matches =
            password::verify_password(&request.password.unwrap_or_default(), &user.password)?;
        if !matches {
            return Err(AppError::validation(
                "password",
                "Email or Password is invalid.",
            ));
        }

        self.session_for(user)
    }

    pub async fn profile(&self, user_id: &str) -> AppResult<UserDto> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        Ok(UserDto::from(user))
    }

    fn session_for(&self, user: User) -> AppResult<AuthResponse> {
        let token = self.jwt.create_token(&user)?;

        Ok(AuthResponse {
            access_token: token,
            expires_in: format!("{}h", self.jwt.expiration_hours()),
            user: UserDto::from(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::repositories::user_repository::MockUserRepository;

    fn jwt() -> JwtService {
        let config = Config::test_config();
        JwtService::new(&config.jwt_secret, 1)
    }

    fn student_request() -> RegisterStudentRequest {
        RegisterStudentRequest {
            name: Some("Ravi Kumar".to_string()),
            email: Some("ravi@example.com".to_string()),
            password: Some("s3cret-pass".to_string()),
            enrollment_no: Some("2024CS10042".to_string()),
            branch: Some("CSE".to_string()),
            year: Some(2024),
        }
    }

    #[tokio::test]
    async fn test_register_student_issues_token() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().once().returning(|_| Ok(None));
        users
            .expect_enrollment_exists()
            .once()
            .returning(|_| Ok(false));
        users.expect_insert().once().returning(|user| Ok(user));

        let service = AccountService::new(Arc::new(users), jwt());
        let session = service
            .register_student(student_request())
            .await
            .expect("registration should succeed");

        assert!(!session.access_token.is_empty());
        assert_eq!(session.user.email, "ravi@example.com");
        assert_eq!(session.user.enrollment_no.as_deref(), Some("2024CS10042"));
    }

    #[tokio::test]
    async fn test_register_student_duplicate_email_conflicts() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().once().returning(|email| {
            Ok(Some(User::new_student(
                "Existing",
                email,
                "hash",
                "2023CS10001",
                "CSE",
                2023,
            )))
        });
        users.expect_insert().never();

        let service = AccountService::new(Arc::new(users), jwt());
        let result = service.register_student(student_request()).await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_role() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().once().returning(|email| {
            Ok(Some(User::new_teacher("Asha", email, "hash")))
        });

        let service = AccountService::new(Arc::new(users), jwt());
        let result = service
            .login(
                LoginRequest {
                    email: Some("asha@example.com".to_string()),
                    password: Some("s3cret-pass".to_string()),
                },
                UserRole::Student,
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let hash = password::hash_password("right-pass").unwrap();
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().once().returning(move |email| {
            Ok(Some(User::new_student(
                "Ravi",
                email,
                &hash,
                "2024CS10042",
                "CSE",
                2024,
            )))
        });

        let service = AccountService::new(Arc::new(users), jwt());
        let result = service
            .login(
                LoginRequest {
                    email: Some("ravi@example.com".to_string()),
                    password: Some("wrong-pass".to_string()),
                },
                UserRole::Student,
            )
            .await;

        match result {
            Err(AppError::Validation { message, .. }) => {
                assert_eq!(message, "Email or Password is invalid.")
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let hash = password::hash_password("s3cret-pass").unwrap();
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().once().returning(move |email| {
            Ok(Some(User::new_student(
                "Ravi",
                email,
                &hash,
                "2024CS10042",
                "CSE",
                2024,
            )))
        });

        let service = AccountService::new(Arc::new(users), jwt());
        let session = service
            .login(
                LoginRequest {
                    email: Some("ravi@example.com".to_string()),
                    password: Some("s3cret-pass".to_string()),
                },
                UserRole::Student,
            )
            .await
            .expect("login should succeed");

        let claims = jwt().validate_token(&session.access_token).unwrap();
        assert_eq!(claims.email, "ravi@example.com");
    }
}
