use std::env::var;

use dotenvy::dotenv;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }
}

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub environment: Environment,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            port: var("PORT")
                .map_err(|_| "An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: var("SCHEME").unwrap_or_else(|_| "http".to_string()),
            host: var("HOST").unwrap_or_else(|_| "localhost".to_string()),
            environment: match var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                Ok("test") => Environment::Test,
                _ => Environment::Development,
            },
        })
    }
}
