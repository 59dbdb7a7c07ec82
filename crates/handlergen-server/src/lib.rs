//! BigQuery API handlers.
//!
//! `handler_gen.rs` is written by `handlergen` and holds one handler type per
//! API method plus the `HANDLERS` table. Regenerate it with `handlergen` after
//! the discovery document changes; the crate stops compiling until every new
//! handler type implements [`HttpHandler`].
//!
//! # Examples
//!
//! ```
//! use handlergen_server::router;
//! use http::{Method, Request, StatusCode};
//!
//! let req = Request::builder()
//!     .method(Method::GET)
//!     .uri("/projects/my-project/datasets")
//!     .body(Vec::new())
//!     .unwrap();
//! let resp = router::dispatch(&req);
//! assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
//! ```

// External imports (alphabetized)
use http::{Request, Response};

mod handler_gen;
mod handlers;
pub mod router;

pub use handler_gen::{Handler, HANDLERS};

/// Capability every generated handler type must provide
pub trait HttpHandler {
    /// Serve a single request
    fn serve_http(&self, req: &Request<Vec<u8>>) -> Response<Vec<u8>>;
}
