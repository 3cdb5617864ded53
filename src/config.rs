//! Process configuration.
//!
//! Every setting can come from a flag or the environment (a `.env` file is
//! loaded first by the binary).
//!
//! Environment:
//!   HOST - Bind address (default: 0.0.0.0)
//!   PORT - Listening port (default: 3000)
//!   JWT_SECRET - Session token signing secret (required)

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "contracts-api")]
#[command(about = "Authenticated user and contract lookup API")]
pub struct Config {
    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Listening port
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Secret used to sign and verify session tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true, value_parser = non_empty_secret)]
    pub jwt_secret: String,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_secret(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        Err("secret must not be empty".to_string())
    } else {
        Ok(raw.to_string())
    }
}
