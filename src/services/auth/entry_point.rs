use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Terminal response for requests that reached a protected resource without
/// an established principal. Fixed status and body, no retries.
pub fn unauthenticated_response() -> Response {
    (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responds_401_with_fixed_body() {
        let res = unauthenticated_response();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
