//! Request routing over the generated handler table.
//!
//! A path template segment is either literal text or a `{param}` placeholder,
//! optionally followed by literal text (`{datasetsId}:undelete`). When several
//! templates match, the one with the most literal text wins.

// External imports (alphabetized)
use http::{Method, Request, Response, StatusCode};

use crate::handlers::error_response;
use crate::{Handler, HANDLERS};

/// Find the handler registered for `method` and `path`
pub fn route(method: &Method, path: &str) -> Option<&'static Handler> {
    best_match(HANDLERS.iter().filter(|h| h.http_method == method.as_str()), path)
}

/// Route a request and serve it, answering 404 or 405 when nothing matches
pub fn dispatch(req: &Request<Vec<u8>>) -> Response<Vec<u8>> {
    let path = req.uri().path();
    if let Some(entry) = route(req.method(), path) {
        log::debug!("{} {} -> {}", req.method(), path, entry.path);
        return entry.handler.serve_http(req);
    }

    if best_match(HANDLERS.iter(), path).is_some() {
        error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            &format!("{} is not supported on {}", req.method(), path),
        )
    } else {
        error_response(StatusCode::NOT_FOUND, &format!("{} not found", path))
    }
}

fn best_match<'a>(
    candidates: impl Iterator<Item = &'a Handler>,
    path: &str,
) -> Option<&'a Handler> {
    candidates
        .filter_map(|h| match_template(h.path, path).map(|score| (score, h)))
        .max_by_key(|(score, _)| *score)
        .map(|(_, h)| h)
}

/// Number of literal bytes matched, or `None` if `path` does not fit `template`
fn match_template(template: &str, path: &str) -> Option<usize> {
    let mut expected = template.trim_start_matches('/').split('/');
    let mut actual = path.trim_start_matches('/').split('/');
    let mut score = 0;

    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return Some(score),
            (Some(pattern), Some(segment)) => score += match_segment(pattern, segment)?,
            _ => return None,
        }
    }
}

fn match_segment(pattern: &str, segment: &str) -> Option<usize> {
    let (Some(open), Some(close)) = (pattern.find('{'), pattern.find('}')) else {
        return (pattern == segment).then_some(pattern.len());
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let value = segment.strip_prefix(prefix)?.strip_suffix(suffix)?;
    (!value.is_empty()).then_some(prefix.len() + suffix.len())
}
