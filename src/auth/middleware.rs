use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::LocalBoxFuture;

use crate::{auth::Claims, errors::AppError};

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let jwt_service = req
                .app_data::<actix_web::web::Data<crate::auth::JwtService>>()
                .ok_or_else(|| {
                    Error::from(AppError::Internal("JWT service not configured".to_string()))
                })?;

            // Absent header, wrong scheme, and a failing token are three
            // distinct 401s.
            let auth_header = req
                .headers()
                .get(AUTHORIZATION)
                .ok_or_else(|| Error::from(AppError::MissingToken))?;

            let header_value = auth_header
                .to_str()
                .map_err(|_| Error::from(AppError::MalformedToken))?;

            let token = match header_value.split_once(' ') {
                Some(("Bearer", token)) => token,
                _ => return Err(Error::from(AppError::MalformedToken)),
            };

            let claims = jwt_service.validate_token(token).map_err(Error::from)?;

            req.extensions_mut().insert(claims);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

// Extractor for authenticated user in handlers
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = req
            .extensions()
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()));

        ready(claims.map(AuthenticatedUser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse};

    use crate::{auth::JwtService, config::Config, models::domain::User};

    #[get("/protected")]
    async fn protected(auth: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(auth.0.sub)
    }

    fn jwt_service() -> JwtService {
        let config = Config::test_config();
        JwtService::new(&config.jwt_secret, 1)
    }

    #[actix_web::test]
    async fn test_missing_header_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(jwt_service()))
                .service(web::scope("").wrap(AuthMiddleware).service(protected)),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_wrong_scheme_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(jwt_service()))
                .service(web::scope("").wrap(AuthMiddleware).service(protected)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((AUTHORIZATION, "Token xyz"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_invalid_token_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(jwt_service()))
                .service(web::scope("").wrap(AuthMiddleware).service(protected)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((AUTHORIZATION, "Bearer bad.token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_passes_claims_through() {
        let jwt = jwt_service();
        let user = User::new_teacher("Asha", "asha@example.com", "hash");
        let token = jwt.create_token(&user).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(jwt))
                .service(web::scope("").wrap(AuthMiddleware).service(protected)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, user.id_hex().as_bytes());
    }
}
