use coffeeshop::configuration::get_configuration;
use coffeeshop::startup::run;
use coffeeshop::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::PgPoolOptions;
use std::io::{Error, ErrorKind};
use std::net::TcpListener;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("coffeeshop".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber).map_err(|err| Error::new(ErrorKind::Other, err))?;

    let settings = get_configuration().map_err(|err| {
        Error::new(ErrorKind::Other, format!("Failed to read configuration: {err}"))
    })?;

    tracing::info!(
        db_host = %settings.database.host,
        db_port = settings.database.port,
        db_name = %settings.database.database_name,
        "Connecting to PostgreSQL"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(settings.database.connect_options())
        .await
        .map_err(|err| Error::new(ErrorKind::Other, format!("Failed to connect to database: {err}")))?;

    sqlx::migrate!("./migrations")
        .run(&pg_pool)
        .await
        .map_err(|err| Error::new(ErrorKind::Other, format!("Failed to migrate database: {err}")))?;

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)?;

    run(listener, pg_pool, settings).await?.await
}
