// src/docs/tests.rs

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::docs::{
        build_openapi, create_responses, delete_responses, docs_routes, list_responses,
        retrieve_responses, update_responses,
    };

    #[test]
    fn test_build_openapi_sets_info() {
        let doc = build_openapi("Permissions API", "1.2.0", "Shared permission service");
        assert_eq!(doc.info.title, "Permissions API");
        assert_eq!(doc.info.version, "1.2.0");
        assert_eq!(
            doc.info.description.as_deref(),
            Some("Shared permission service")
        );
    }

    #[test]
    fn test_shared_schemas_are_registered() {
        let doc = build_openapi("t", "0.1.0", "d");
        let schemas = doc
            .components
            .as_ref()
            .expect("components registered")
            .schemas
            .clone();
        for name in ["MessageEnvelope", "ValidationError", "ErrorListResponse", "PageInfo"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }

    #[test]
    fn test_canned_responses_cover_expected_status_codes() {
        for code in ["400", "401", "403", "500"] {
            assert!(create_responses().responses.contains_key(code));
        }
        for code in ["200", "204"] {
            assert!(list_responses().responses.contains_key(code));
        }
        for code in ["200", "404"] {
            assert!(retrieve_responses().responses.contains_key(code));
            assert!(update_responses().responses.contains_key(code));
            assert!(delete_responses().responses.contains_key(code));
        }
    }

    #[tokio::test]
    async fn test_docs_routes_serve_document_and_ui() {
        let app = docs_routes(build_openapi("Docs Test", "0.1.0", "d"));

        let json_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(json_response.status(), StatusCode::OK);
        let bytes = to_bytes(json_response.into_body(), usize::MAX).await.unwrap();
        let document: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(document["info"]["title"], "Docs Test");

        let ui_response = app
            .oneshot(Request::builder().uri("/api/docs").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(ui_response.status(), StatusCode::OK);
        let html = String::from_utf8(
            to_bytes(ui_response.into_body(), usize::MAX)
                .await
                .unwrap()
                .to_vec(),
        )
        .unwrap();
        assert!(html.contains("swagger-ui"));
    }
}
