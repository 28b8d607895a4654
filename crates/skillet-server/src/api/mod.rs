pub mod recipes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use skillet_core::response::{ResponseStatus, RestResponse};

/// Wire-level status for an envelope tag. Envelopes always carry a body and
/// 204 forbids one, so NoContent rides on 200.
pub fn status_code(status: ResponseStatus) -> StatusCode {
    match status {
        ResponseStatus::Ok | ResponseStatus::NoContent => StatusCode::OK,
        ResponseStatus::Created => StatusCode::CREATED,
        ResponseStatus::NotFound => StatusCode::NOT_FOUND,
        ResponseStatus::BadRequest => StatusCode::BAD_REQUEST,
        ResponseStatus::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
    }
}

/// Encode a service envelope as an HTTP response; the envelope's status tag
/// picks the status code.
pub fn respond<T: Serialize>(envelope: RestResponse<T>) -> Response {
    (status_code(envelope.status), Json(envelope)).into_response()
}

/// The complete OpenAPI spec for the service.
pub fn openapi() -> utoipa::openapi::OpenApi {
    use utoipa::OpenApi;
    recipes::ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_tag_has_a_wire_code() {
        assert_eq!(status_code(ResponseStatus::Ok), StatusCode::OK);
        assert_eq!(status_code(ResponseStatus::NoContent), StatusCode::OK);
        assert_eq!(status_code(ResponseStatus::Created), StatusCode::CREATED);
        assert_eq!(status_code(ResponseStatus::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_code(ResponseStatus::BadRequest),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_code(ResponseStatus::NotAcceptable),
            StatusCode::NOT_ACCEPTABLE
        );
    }
}
