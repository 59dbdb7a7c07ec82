//! `HttpHandler` impls for the generated handler types.
//!
//! None of the API methods has a backend yet, so every handler answers with a
//! Google-style `UNIMPLEMENTED` error body.

// External imports (alphabetized)
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Request, Response, StatusCode};
use serde_json::json;

use crate::handler_gen::*;
use crate::HttpHandler;

/// JSON error response in the shape Google APIs use
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response<Vec<u8>> {
    let body = json!({
        "error": {
            "code": status.as_u16(),
            "message": message,
            "status": status_name(status),
        }
    });

    let mut resp = Response::new(body.to_string().into_bytes());
    *resp.status_mut() = status;
    resp.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    resp
}

fn status_name(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "NOT_FOUND",
        StatusCode::METHOD_NOT_ALLOWED => "METHOD_NOT_ALLOWED",
        StatusCode::NOT_IMPLEMENTED => "UNIMPLEMENTED",
        _ => "UNKNOWN",
    }
}

fn not_implemented(handler: &str, req: &Request<Vec<u8>>) -> Response<Vec<u8>> {
    log::debug!("{} {} has no backend ({})", req.method(), req.uri().path(), handler);
    error_response(
        StatusCode::NOT_IMPLEMENTED,
        &format!("{} {} is not implemented", req.method(), req.uri().path()),
    )
}

macro_rules! unimplemented_handlers {
    ($($handler:ident),* $(,)?) => {
        $(
            impl HttpHandler for $handler {
                fn serve_http(&self, req: &Request<Vec<u8>>) -> Response<Vec<u8>> {
                    not_implemented(stringify!($handler), req)
                }
            }
        )*
    };
}

unimplemented_handlers!(
    datasetsDeleteHandler,
    datasetsGetHandler,
    datasetsInsertHandler,
    datasetsListHandler,
    datasetsPatchHandler,
    datasetsUndeleteHandler,
    datasetsUpdateHandler,
    jobsCancelHandler,
    jobsDeleteHandler,
    jobsGetHandler,
    jobsGetQueryResultsHandler,
    jobsInsertHandler,
    jobsListHandler,
    jobsQueryHandler,
    modelsDeleteHandler,
    modelsGetHandler,
    modelsListHandler,
    modelsPatchHandler,
    projectsGetServiceAccountHandler,
    projectsListHandler,
    routinesDeleteHandler,
    routinesGetHandler,
    routinesInsertHandler,
    routinesListHandler,
    routinesUpdateHandler,
    rowAccessPoliciesGetIamPolicyHandler,
    rowAccessPoliciesListHandler,
    rowAccessPoliciesTestIamPermissionsHandler,
    tabledataInsertAllHandler,
    tabledataListHandler,
    tablesDeleteHandler,
    tablesGetHandler,
    tablesGetIamPolicyHandler,
    tablesInsertHandler,
    tablesListHandler,
    tablesPatchHandler,
    tablesSetIamPolicyHandler,
    tablesTestIamPermissionsHandler,
    tablesUpdateHandler,
);
