use axum::http::header;
use axum::http::HeaderValue;
use axum::response::Response;

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type, \
     x-supabase-client-platform, x-supabase-client-platform-version, \
     x-supabase-client-runtime, x-supabase-client-runtime-version";

/// Stamps the CORS headers onto every outgoing response, including errors,
/// unknown routes and rejected methods.
pub async fn add_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;

    #[tokio::test]
    async fn test_add_cors_headers() {
        let res = add_cors_headers((StatusCode::NOT_FOUND, "nope").into_response()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.headers()["access-control-allow-origin"], "*");
        assert_eq!(
            res.headers()["access-control-allow-headers"],
            "authorization, x-client-info, apikey, content-type, x-supabase-client-platform, \
             x-supabase-client-platform-version, x-supabase-client-runtime, \
             x-supabase-client-runtime-version"
        );
    }

    #[tokio::test]
    async fn test_add_cors_headers_overwrites() {
        let res = (
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "https://example.com")],
            "ok",
        )
            .into_response();
        let res = add_cors_headers(res).await;
        let origins: Vec<_> = res
            .headers()
            .get_all(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .iter()
            .collect();
        assert_eq!(origins, vec!["*"]);
    }
}
