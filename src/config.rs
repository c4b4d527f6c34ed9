use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub admin_email: String,
    pub admin_password: String,
    pub cookie_secure: bool,
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = env::var("APP_HOST").unwrap_or(defaults.host);
        let port = match env::var("APP_PORT") {
            Ok(p) => p
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("APP_PORT is not a valid port: {e}"))?,
            Err(_) => defaults.port,
        };
        let admin_email = env::var("ADMIN_EMAIL").unwrap_or(defaults.admin_email);
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password);
        let cookie_secure = env::var("COOKIE_SECURE")
            .ok()
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.cookie_secure);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);
        Ok(Self {
            host,
            port,
            admin_email,
            admin_password,
            cookie_secure,
            static_dir,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            admin_email: "admin@example.com".to_string(),
            admin_password: "admin123".to_string(),
            cookie_secure: false,
            static_dir: "static".to_string(),
        }
    }
}
