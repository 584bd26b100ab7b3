//! End-to-end tests over real HTTP
//!
//! An axum stub stands in for the EPC backend on an ephemeral localhost
//! port; `HttpEpcBackend` and the controller talk to it unmodified.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::Arc;

    use axum::{
        extract::Query,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
        Json, Router,
    };
    use serde_json::json;

    use crate::adapters::HttpEpcBackend;
    use crate::app::{BannerKind, Phase, Section, ViewController, ADDRESS_PLACEHOLDER};
    use crate::domain::entities::Postcode;
    use crate::domain::ports::EpcBackend;
    use crate::error::BackendError;
    use crate::view::RecommendationsView;

    type Params = Query<HashMap<String, String>>;

    async fn health() -> Response {
        Json(json!({"status": "healthy", "database": "connected"})).into_response()
    }

    async fn unhealthy() -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "unhealthy", "error": "database file missing"})),
        )
            .into_response()
    }

    async fn search(Query(params): Params) -> Response {
        let postcode = params
            .get("postcode")
            .map(|p| p.trim().to_uppercase().replace(' ', ""))
            .unwrap_or_default();

        if postcode.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Postcode is required"})),
            )
                .into_response();
        }

        let addresses: Vec<&str> = match postcode.as_str() {
            "SW1A1AA" => vec!["10 Example St", "12 Example St"],
            "BOOM" => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Catalog Error: table missing"})),
                )
                    .into_response()
            }
            "HTML" => return (StatusCode::BAD_GATEWAY, "<h1>Bad Gateway</h1>").into_response(),
            _ => vec![],
        };

        Json(json!({
            "postcode": postcode,
            "count": addresses.len(),
            "addresses": addresses,
        }))
        .into_response()
    }

    async fn rating(Query(params): Params) -> Response {
        let postcode = params.get("postcode").cloned().unwrap_or_default();
        let address = params.get("address").cloned().unwrap_or_default();

        match (postcode.as_str(), address.as_str()) {
            ("SW1A 1AA", "10 Example St") => Json(json!({
                "postcode": "SW1A1AA",
                "address": address,
                "rating": "C",
                "potential_rating": "B",
                "current_efficiency": 70,
                "potential_efficiency": 85,
                "lodgement_date": "Tue, 04 May 2021 00:00:00 GMT",
                "recommendations": []
            }))
            .into_response(),
            ("SW1A 1AA", "12 Example St") => Json(json!({
                "rating": "E",
                "potential_rating": "C",
                "lodgement_date": "2018-02-14",
                "recommendations": [
                    {"description": "Cavity wall insulation", "cost": "£500 - £1,500"},
                    {"description": "Replace boiler", "cost": null}
                ]
            }))
            .into_response(),
            _ => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "No rating found for this address"})),
            )
                .into_response(),
        }
    }

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    async fn healthy_backend() -> String {
        spawn_backend(
            Router::new()
                .route("/api/health", get(health))
                .route("/api/search", get(search))
                .route("/api/rating", get(rating)),
        )
        .await
    }

    #[tokio::test]
    async fn http_backend_decodes_search() {
        let backend = HttpEpcBackend::new(&healthy_backend().await);

        let response = backend
            .search(&Postcode::parse("sw1a 1aa").unwrap())
            .await
            .unwrap();

        assert_eq!(response.addresses, vec!["10 Example St", "12 Example St"]);
        assert_eq!(response.postcode.as_deref(), Some("SW1A1AA"));
        assert_eq!(response.count, Some(2));
    }

    #[tokio::test]
    async fn http_backend_surfaces_error_body() {
        let backend = HttpEpcBackend::new(&healthy_backend().await);

        let err = backend
            .rating(&Postcode::parse("SW1A 1AA").unwrap(), "99 Nowhere Rd")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BackendError::Api {
                status: 404,
                message: Some("No rating found for this address".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn http_backend_handles_non_json_errors() {
        let backend = HttpEpcBackend::new(&healthy_backend().await);

        let err = backend
            .search(&Postcode::parse("html").unwrap())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BackendError::Api {
                status: 502,
                message: None,
            }
        );
    }

    #[tokio::test]
    async fn http_backend_reports_connection_failure() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpEpcBackend::new(&format!("http://{}/api", addr));
        let err = backend.health().await.unwrap_err();

        assert!(err.is_connection(), "unexpected error: {:?}", err);
    }

    #[tokio::test]
    async fn full_lookup_flow() {
        let base_url = healthy_backend().await;
        let mut controller =
            ViewController::new(Arc::new(HttpEpcBackend::new(&base_url)), base_url.clone());

        controller.check_health().await;
        assert!(controller.state().error().is_none());

        controller.search("SW1A 1AA").await;
        assert_eq!(
            controller.state().selector().entries(),
            vec![ADDRESS_PLACEHOLDER, "10 Example St", "12 Example St"]
        );
        assert!(controller.state().selector().is_enabled());

        controller.select_address("10 Example St").await;
        let view = controller.state().result().unwrap();
        assert_eq!((view.current.letter, view.current.label), ("C", "Fairly Good"));
        assert_eq!((view.potential.letter, view.potential.label), ("B", "Good"));
        assert_eq!(view.lodgement_date, "4 May 2021");
        assert_eq!(view.current_efficiency, Some(70));
        assert!(matches!(
            view.recommendations,
            RecommendationsView::Placeholder(_)
        ));

        controller.select_address("12 Example St").await;
        let view = controller.state().result().unwrap();
        assert_eq!(view.current.label, "Below Average");
        assert_eq!(view.lodgement_date, "14 February 2018");
        let RecommendationsView::List(items) = &view.recommendations else {
            panic!("expected recommendations");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].number, 1);
        assert_eq!(items[1].cost, "Cost not available");
        assert_eq!(controller.phase(), Phase::ResultsShown);
    }

    #[tokio::test]
    async fn empty_and_failing_searches() {
        let base_url = healthy_backend().await;
        let mut controller =
            ViewController::new(Arc::new(HttpEpcBackend::new(&base_url)), base_url.clone());

        controller.search("ZZ9 9ZZ").await;
        assert_eq!(
            controller.state().error().map(|b| b.kind),
            Some(BannerKind::NoResults)
        );
        assert!(!controller.state().is_visible(Section::Address));

        controller.search("boom").await;
        let banner = controller.state().error().unwrap();
        assert_eq!(banner.kind, BannerKind::Server);
        assert_eq!(banner.message, "Catalog Error: table missing");
        assert!(!controller.state().is_loading());
    }

    #[tokio::test]
    async fn unhealthy_backend_is_reported() {
        let base_url = spawn_backend(Router::new().route("/api/health", get(unhealthy))).await;
        let mut controller =
            ViewController::new(Arc::new(HttpEpcBackend::new(&base_url)), base_url.clone());

        controller.check_health().await;

        let banner = controller.state().error().unwrap();
        assert_eq!(banner.kind, BannerKind::Connectivity);
        assert!(banner.message.contains("HTTP 500"));
    }
}
