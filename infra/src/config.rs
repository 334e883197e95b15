//! Configuration loading for the server binary
//!
//! Precedence, lowest first: the environment preset, an optional TOML file
//! named by `TRADEPOST_CONFIG`, then individual environment variables.

use tp_shared::AppConfig;

use crate::InfrastructureError;

/// Variable naming an optional TOML overlay file
pub const CONFIG_FILE_VAR: &str = "TRADEPOST_CONFIG";

/// Load the application configuration
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let preset = AppConfig::from_env();
    let config = match std::env::var(CONFIG_FILE_VAR) {
        Ok(path) => {
            tracing::info!(path = %path, "Loading configuration file");
            overlay_file(&preset, &path)?.merge_env()
        }
        Err(_) => preset,
    };

    check_token_secret(&config)?;
    Ok(config)
}

/// Reject the built-in development token secret in production
pub fn check_token_secret(config: &AppConfig) -> Result<(), InfrastructureError> {
    if config.environment.is_production() && config.auth.is_using_default_secret() {
        return Err(InfrastructureError::Config(
            "AUTH_TOKEN_SECRET must be set in production".to_string(),
        ));
    }
    Ok(())
}

/// Layer the TOML file at `path` over `base`
pub fn overlay_file(base: &AppConfig, path: &str) -> Result<AppConfig, InfrastructureError> {
    let settings = ::config::Config::builder()
        .add_source(::config::Config::try_from(base)?)
        .add_source(::config::File::new(path, ::config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize::<AppConfig>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tp_shared::AuthConfig;

    #[test]
    fn test_file_overrides_preset() {
        let path = std::env::temp_dir().join(format!("tradepost-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nport = 9191\n\n[database]\nmax_connections = 3").unwrap();

        let config = overlay_file(&AppConfig::development(), path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.port, 9191);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.max_connections, 3);
        assert_eq!(config.database.url, AppConfig::development().database.url);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = overlay_file(&AppConfig::development(), "/nonexistent/tradepost.toml");
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_production_requires_token_secret() {
        let mut config = AppConfig::production();
        assert!(matches!(
            check_token_secret(&config),
            Err(InfrastructureError::Config(_))
        ));

        config.auth = AuthConfig::new("a-real-deployment-secret");
        assert!(check_token_secret(&config).is_ok());

        assert!(check_token_secret(&AppConfig::development()).is_ok());
    }
}
