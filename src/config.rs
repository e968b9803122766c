use std::env::{VarError, var};

use dotenvy::dotenv;
use tracing::info;

const DEFAULT_PORT: u16 = 3333;

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
}

impl Config {
    /// Reads `PORT`, `SCHEME` and `HOST`, falling back to defaults for unset ones.
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            port: match var("PORT") {
                Ok(port) => port
                    .parse::<u16>()
                    .map_err(|_| "An error occured while parsing PORT env param")?,
                Err(VarError::NotPresent) => {
                    info!("PORT not set, using default: {DEFAULT_PORT}");
                    DEFAULT_PORT
                }
                Err(VarError::NotUnicode(_)) => return Err("PORT env param is not valid unicode"),
            },
            scheme: var_or("SCHEME", "http"),
            host: var_or("HOST", "localhost"),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

fn var_or(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
