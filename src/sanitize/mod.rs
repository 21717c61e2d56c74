//! Input sanitization gate.
//!
//! Every inbound string parameter passes through here before any handler
//! logic runs: the characters `<`, `>`, `'`, `"` are removed and the value
//! is truncated to a per-field cap. This is anti-injection hardening, not
//! semantic escaping. The pass never raises; it silently normalizes.

use axum::extract::Request;
use axum::http::uri::{PathAndQuery, Uri};
use axum::middleware::Next;
use axum::response::Response;

pub const DEFAULT_MAX_LEN: usize = 500;
pub const USERNAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 100;
pub const PASSWORD_MAX_LEN: usize = 128;
pub const SEARCH_MAX_LEN: usize = 100;

/// Remove disallowed characters, then truncate to `max_len` characters.
pub fn scrub(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '<' | '>' | '\'' | '"'))
        .take(max_len)
        .collect()
}

/// Length cap for a parameter name. Identity-like fields get shorter caps.
pub fn cap_for(param: &str) -> usize {
    match param {
        "username" | "login" => USERNAME_MAX_LEN,
        "email" => EMAIL_MAX_LEN,
        "password" => PASSWORD_MAX_LEN,
        "keyword" | "search" => SEARCH_MAX_LEN,
        _ => DEFAULT_MAX_LEN,
    }
}

/// Axum middleware: rewrite the request query string with every value
/// scrubbed. Applied globally, with no knowledge of which parameters matter
/// to which endpoint. Body fields on write endpoints go through [`scrub`]
/// in their handlers with the same caps.
pub async fn sanitize_request(mut req: Request, next: Next) -> Response {
    if let Some(query) = req.uri().query() {
        let sanitized = sanitize_query_string(query);
        if sanitized != query {
            rewrite_query(&mut req, &sanitized);
        }
    }
    next.run(req).await
}

fn sanitize_query_string(raw: &str) -> String {
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| {
            let cap = cap_for(&k);
            let cleaned = scrub(&v, cap);
            (k.into_owned(), cleaned)
        })
        .collect();

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in &pairs {
        serializer.append_pair(k, v);
    }
    serializer.finish()
}

// Swap the URI query in place. If the rewritten query will not parse back
// into a URI (it always should, form encoding is conservative), the
// original request is left untouched rather than failing the request.
fn rewrite_query(req: &mut Request, sanitized: &str) {
    let path_and_query = if sanitized.is_empty() {
        req.uri().path().to_string()
    } else {
        format!("{}?{}", req.uri().path(), sanitized)
    };

    if let Ok(pq) = path_and_query.parse::<PathAndQuery>() {
        let mut parts = req.uri().clone().into_parts();
        parts.path_and_query = Some(pq);
        if let Ok(uri) = Uri::from_parts(parts) {
            *req.uri_mut() = uri;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_angle_brackets_and_quotes() {
        assert_eq!(scrub("<script>alert('x')</script>", DEFAULT_MAX_LEN), "scriptalert(x)/script");
        assert_eq!(scrub("O'Brien \"quoted\"", DEFAULT_MAX_LEN), "OBrien quoted");
    }

    #[test]
    fn truncates_to_cap() {
        let long = "a".repeat(10_000);
        assert_eq!(scrub(&long, DEFAULT_MAX_LEN).len(), DEFAULT_MAX_LEN);
        assert_eq!(scrub(&long, SEARCH_MAX_LEN).len(), SEARCH_MAX_LEN);
    }

    #[test]
    fn strips_before_truncating() {
        // Disallowed characters do not count against the cap
        let raw = format!("{}ab", "<".repeat(500));
        assert_eq!(scrub(&raw, 2), "ab");
    }

    #[test]
    fn caps_by_field_name() {
        assert_eq!(cap_for("username"), 50);
        assert_eq!(cap_for("email"), 100);
        assert_eq!(cap_for("password"), 128);
        assert_eq!(cap_for("keyword"), 100);
        assert_eq!(cap_for("state"), 500);
    }

    #[test]
    fn sanitizes_query_string_values_only() {
        let out = sanitize_query_string("state=%3CCA%3E&party=D");
        assert_eq!(out, "state=CA&party=D");
    }

    #[test]
    fn empty_values_survive() {
        let out = sanitize_query_string("state=&limit=10");
        assert_eq!(out, "state=&limit=10");
    }
}
