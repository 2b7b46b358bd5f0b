use jsonwebtoken::Algorithm;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

/// Identity provider the bearer tokens are issued by.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthSettings {
    /// Bare host (`tenant.auth0.com`) or a full base url (`http://127.0.0.1:8080`).
    pub domain: String,
    pub audience: String,
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,
    #[serde(default = "default_jwks_cache_ttl")]
    pub jwks_cache_ttl_secs: u64,
}

fn default_algorithms() -> Vec<Algorithm> {
    vec![Algorithm::RS256]
}

fn default_jwks_cache_ttl() -> u64 {
    600
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database_name)
            .ssl_mode(PgSslMode::Prefer)
    }
}

impl AuthSettings {
    fn base_url(&self) -> String {
        let domain = self.domain.trim_end_matches('/');
        if domain.contains("://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        }
    }

    /// Expected `iss` claim. Auth0 issuers carry a trailing slash.
    pub fn issuer(&self) -> String {
        format!("{}/", self.base_url())
    }

    pub fn jwks_url(&self) -> String {
        format!("{}/.well-known/jwks.json", self.base_url())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        // .json, .toml, .yaml, .yml
        .add_source(config::File::with_name("configuration"))
        // COFFEESHOP__DATABASE__HOST=db overrides database.host
        .add_source(
            config::Environment::with_prefix("COFFEESHOP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
