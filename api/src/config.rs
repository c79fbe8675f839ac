use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Create the `users` and `posts` tables at start-up if they are missing
    pub create_schema: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match lookup("PORT") {
            Some(p) => p.parse().with_context(|| format!("Invalid PORT: {}", p))?,
            None => 8080,
        };

        let create_schema = lookup("CREATE_SCHEMA")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Ok(Self {
            database_url,
            port,
            create_schema,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
