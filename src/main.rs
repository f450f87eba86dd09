use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use exampaper_server::{
    app_state::AppState,
    auth::AuthMiddleware,
    config::Config,
    errors::AppError,
    handlers::{health_handler, quiz_handler, student_handler, teacher_handler},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config.clone())
        .await
        .expect("failed to initialise application state");

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            AppError::validation("body", err.to_string()).into()
        });

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(state.jwt_service.clone()))
            .app_data(json_config)
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(health_handler::health_check)
            .service(
                web::scope("/student")
                    .service(student_handler::register)
                    .service(student_handler::login)
                    .service(
                        web::scope("/profile")
                            .wrap(AuthMiddleware)
                            .service(student_handler::profile),
                    ),
            )
            .service(
                web::scope("/teacher")
                    .service(teacher_handler::register)
                    .service(teacher_handler::login),
            )
            .service(
                web::scope("/quiz")
                    .wrap(AuthMiddleware)
                    .configure(quiz_handler::configure),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
