use crate::configuration::Settings;
use crate::errors::ApiError;
use crate::middleware::authentication::TokenValidator;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, http::StatusCode, web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: PgPool,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let token_validator = web::Data::new(TokenValidator::new(&settings.auth, http_client));
    let pg_pool = web::Data::new(pg_pool);

    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!("Unmatched path parameter: {}", err);
        ApiError::Http(StatusCode::NOT_FOUND, "Not Found".to_string()).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/drinks")
                    .service(routes::drink::get::list)
                    .service(routes::drink::add::item)
                    .service(routes::drink::update::item)
                    .service(routes::drink::delete::item),
            )
            .service(web::scope("/drinks-detail").service(routes::drink::get::detail_list))
            .default_service(web::to(routes::not_found))
            .app_data(path_config.clone())
            .app_data(token_validator.clone())
            .app_data(pg_pool.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
