//! Session Cookie
//!
//! The auth token lives in a plain `token` cookie so it survives reloads.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::JsCast;

use crate::config::TOKEN_COOKIE;

/// Characters that may not appear raw in a cookie value
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b',')
    .add(b';')
    .add(b'\\');

/// Find `name` in a `document.cookie` string. Empty values count as absent.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(|pair| pair.trim_start())
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

pub fn token_cookie(token: &str) -> String {
    format!(
        "{}={}; path=/",
        TOKEN_COOKIE,
        utf8_percent_encode(token, COOKIE_VALUE)
    )
}

pub fn expired_token_cookie() -> String {
    format!("{}=; Max-Age=-99999999; path=/", TOKEN_COOKIE)
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

fn write_cookie(cookie: &str) {
    let Some(document) = html_document() else {
        log::warn!("no document, cookie not written");
        return;
    };
    if let Err(err) = document.set_cookie(cookie) {
        log::error!("failed to write cookie: {:?}", err);
    }
}

/// Token from a previous session, if any
pub fn read_token() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    parse_cookie(&cookies, TOKEN_COOKIE)
}

pub fn store_token(token: &str) {
    write_cookie(&token_cookie(token));
}

pub fn clear_token() {
    write_cookie(&expired_token_cookie());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie_finds_token() {
        let cookies = "theme=dark; token=abc.def.ghi; lang=tr";
        assert_eq!(parse_cookie(cookies, "token"), Some("abc.def.ghi".to_string()));
        assert_eq!(parse_cookie(cookies, "lang"), Some("tr".to_string()));
    }

    #[test]
    fn test_parse_cookie_missing_or_empty() {
        assert_eq!(parse_cookie("", "token"), None);
        assert_eq!(parse_cookie("theme=dark", "token"), None);
        assert_eq!(parse_cookie("token=; theme=dark", "token"), None);
    }

    #[test]
    fn test_parse_cookie_requires_exact_name() {
        assert_eq!(parse_cookie("tokenizer=x", "token"), None);
        assert_eq!(parse_cookie("tokenizer=x;token=y", "token"), Some("y".to_string()));
    }

    #[test]
    fn test_written_token_reads_back() {
        let token = "a b;c%d";
        let cookie = token_cookie(token);
        assert_eq!(cookie, "token=a%20b%3Bc%25d; path=/");

        // The browser hands back only the name=value part
        let stored = cookie.split("; path").next().unwrap();
        assert_eq!(parse_cookie(stored, "token"), Some(token.to_string()));
    }

    #[test]
    fn test_expired_cookie_clears_token() {
        assert!(expired_token_cookie().starts_with("token=;"));
        assert!(expired_token_cookie().contains("Max-Age=-"));
    }
}
