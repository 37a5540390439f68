use serde_json::json;

use crate::auth::{generate_jwt, Claims};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub fn handle(
    config: &AppConfig,
    subject: String,
    role: Option<String>,
    hours: Option<u64>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let hours = hours.unwrap_or(config.security.jwt_expiry_hours);
    let claims = Claims::new(subject, role, hours);
    let token = generate_jwt(&claims, &config.security.jwt_secret)?;

    match output_format {
        OutputFormat::Json => output_success(
            output_format,
            "Token generated",
            Some(json!({ "token": token, "expires_at": claims.exp })),
        ),
        OutputFormat::Text => {
            println!("{}", token);
            Ok(())
        }
    }
}
