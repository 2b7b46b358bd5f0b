#![allow(dead_code)]

use coffeeshop::configuration::{get_configuration, DatabaseSettings, Settings};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const KEY_ID: &str = "coffee-key-1";
pub const AUDIENCE: &str = "coffeeshop";

const SIGNING_KEY: &[u8] = include_bytes!("../fixtures/signing_key.pem");
const ROGUE_SIGNING_KEY: &[u8] = include_bytes!("../fixtures/rogue_signing_key.pem");
const JWKS: &str = include_str!("../fixtures/jwks.json");

pub const ALL_PERMISSIONS: [&str; 4] = [
    "get:drinks-detail",
    "post:drinks",
    "patch:drinks",
    "delete:drinks",
];

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub identity_provider: IdentityProvider,
}

/// Fake identity provider publishing the test signing key.
pub struct IdentityProvider {
    pub server: MockServer,
}

impl IdentityProvider {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/.well-known/jwks.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(jwks()))
            .mount(&server)
            .await;

        Self { server }
    }

    pub fn domain(&self) -> String {
        self.server.uri()
    }

    pub fn issuer(&self) -> String {
        format!("{}/", self.server.uri())
    }

    pub fn token(&self) -> TokenBuilder {
        TokenBuilder::new(self.issuer())
    }
}

pub fn jwks() -> Value {
    serde_json::from_str(JWKS).expect("jwks fixture is valid json")
}

/// Mints test tokens; defaults to a valid token without a permissions claim.
pub struct TokenBuilder {
    claims: Value,
    kid: Option<String>,
    rogue_key: bool,
}

impl TokenBuilder {
    pub fn new(issuer: String) -> Self {
        let exp = (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp();
        Self {
            claims: json!({
                "iss": issuer,
                "sub": "auth0|barista",
                "aud": AUDIENCE,
                "iat": chrono::Utc::now().timestamp(),
                "exp": exp,
            }),
            kid: Some(KEY_ID.to_string()),
            rogue_key: false,
        }
    }

    pub fn permissions(mut self, permissions: &[&str]) -> Self {
        self.claims["permissions"] = json!(permissions);
        self
    }

    pub fn claim(mut self, name: &str, value: Value) -> Self {
        self.claims[name] = value;
        self
    }

    pub fn expired(self) -> Self {
        let exp = (chrono::Utc::now() - chrono::Duration::hours(1)).timestamp();
        self.claim("exp", json!(exp))
    }

    pub fn kid(mut self, kid: Option<&str>) -> Self {
        self.kid = kid.map(str::to_string);
        self
    }

    pub fn signed_by_rogue_key(mut self) -> Self {
        self.rogue_key = true;
        self
    }

    pub fn sign(self) -> String {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.kid;
        let pem = if self.rogue_key {
            ROGUE_SIGNING_KEY
        } else {
            SIGNING_KEY
        };
        let key = EncodingKey::from_rsa_pem(pem).expect("test key is a valid RSA pem");
        encode(&header, &self.claims, &key).expect("Failed to sign token")
    }

    pub fn bearer(self) -> String {
        format!("Bearer {}", self.sign())
    }
}

fn test_configuration(identity_provider: &IdentityProvider) -> Settings {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.auth.domain = identity_provider.domain();
    configuration.auth.audience = AUDIENCE.to_string();
    configuration
}

async fn start_server(configuration: Settings, db_pool: PgPool) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = coffeeshop::startup::run(listener, db_pool, configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    address
}

/// Server backed by a fresh database. `None` when PostgreSQL is not reachable.
pub async fn spawn_app() -> Option<TestApp> {
    let identity_provider = IdentityProvider::start().await;
    let mut configuration = test_configuration(&identity_provider);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let db_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping test: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let address = start_server(configuration, db_pool.clone()).await;
    Some(TestApp {
        address,
        db_pool,
        identity_provider,
    })
}

/// Server whose pool never connects: enough for every request that is rejected
/// before it reaches storage.
pub async fn spawn_app_without_database() -> TestApp {
    let identity_provider = IdentityProvider::start().await;
    let configuration = test_configuration(&identity_provider);

    let db_pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy_with(configuration.database.connect_options());

    let address = start_server(configuration, db_pool.clone()).await;
    TestApp {
        address,
        db_pool,
        identity_provider,
    }
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}
