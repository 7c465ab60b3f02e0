//! Build-time Configuration
//!
//! Values are baked in when the wasm bundle is built, e.g.
//! `TODO_API_URL=https://api.example.com/ trunk build`.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:80/";

/// Name of the cookie holding the session token
pub const TOKEN_COOKIE: &str = "token";

pub fn api_base_url() -> &'static str {
    option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub fn log_level() -> LevelFilter {
    parse_log_level(option_env!("TODO_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("chatty")), LevelFilter::Info);
    }
}
