//! Directory API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Every route is a read-only GET; a permissive GET-only CORS layer lets
//! a browser front end on another origin call the API.

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::state::AppState;

/// Build the directory API router.
pub fn directory_router(state: Arc<AppState>) -> Router {
    let ctx = ApiContext::new(state);
    build_router(ctx)
}

fn build_router(ctx: ApiContext) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]);

    Router::new()
        .route("/advocates", get(endpoints::advocates::list))
        .route("/cities", get(endpoints::cities::list))
        .route("/health-concerns", get(endpoints::health_concerns::list))
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::repository::{
        find_or_create_specialty, insert_advocate, link_specialty,
    };
    use crate::models::{Degree, NewAdvocate};

    /// Router backed by a temp-file database seeded with two advocates.
    fn test_router() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(dir.path().join("directory.db")).unwrap();

        let conn = state.open_db().unwrap();
        let advocates = [
            ("Sarah", "Johnson", "New York, NY", Degree::MSW, 8u32,
             vec!["Anxiety", "Depression"]),
            ("Michael", "Chen", "San Francisco, CA", Degree::MD, 12u32,
             vec!["Diabetes"]),
        ];
        for (first, last, city, degree, years, specialties) in advocates {
            let id = insert_advocate(
                &conn,
                &NewAdvocate {
                    first_name: first.into(),
                    last_name: last.into(),
                    city: city.into(),
                    degree,
                    years_of_experience: years,
                    phone_number: 5551234567,
                    email: format!("{first}.{last}@example.com").to_lowercase(),
                    background: String::new(),
                },
            )
            .unwrap();
            for name in specialties {
                let specialty = find_or_create_specialty(&conn, name).unwrap();
                link_specialty(&conn, id, specialty.id).unwrap();
            }
        }

        (directory_router(Arc::new(state)), dir)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn advocates_unfiltered_returns_all() {
        let (router, _dir) = test_router();
        let (status, json) = get_json(router, "/advocates").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["advocates"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn advocates_city_and_concern_filters_combine() {
        let (router, _dir) = test_router();
        let (status, json) =
            get_json(router, "/advocates?city=New%20York&healthConcerns=Anxiety").await;
        assert_eq!(status, StatusCode::OK);
        let advocates = json["advocates"].as_array().unwrap();
        assert_eq!(advocates.len(), 1);
        assert_eq!(advocates[0]["firstName"], "Sarah");
        assert_eq!(advocates[0]["yearsOfExperience"], 8);
        let specialties = advocates[0]["specialties"].as_array().unwrap();
        assert_eq!(specialties.len(), 2);
    }

    #[tokio::test]
    async fn advocates_unmatched_concern_is_empty() {
        let (router, _dir) = test_router();
        let (status, json) = get_json(router, "/advocates?healthConcerns=Schizophrenia").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["advocates"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn advocates_name_query_tokens_are_anded() {
        let (router, _dir) = test_router();
        let (_, json) = get_json(router, "/advocates?q=sa%20john").await;
        let advocates = json["advocates"].as_array().unwrap();
        assert_eq!(advocates.len(), 1);
        assert_eq!(advocates[0]["lastName"], "Johnson");
    }

    #[tokio::test]
    async fn advocates_blank_params_mean_no_filter() {
        let (router, _dir) = test_router();
        let (status, json) = get_json(router, "/advocates?q=&healthConcerns=&city=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["advocates"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn cities_returns_distinct_values() {
        let (router, _dir) = test_router();
        let (status, json) = get_json(router, "/cities").await;
        assert_eq!(status, StatusCode::OK);
        let cities = json["cities"].as_array().unwrap();
        assert_eq!(cities.len(), 2);
    }

    #[tokio::test]
    async fn health_concerns_returns_catalog() {
        let (router, _dir) = test_router();
        let (status, json) = get_json(router, "/health-concerns").await;
        assert_eq!(status, StatusCode::OK);
        let concerns = json["concerns"].as_array().unwrap();
        assert_eq!(concerns.len(), 3);
        assert!(concerns.iter().all(|c| c["id"].is_i64() && c["name"].is_string()));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (router, _dir) = test_router();
        let (status, json) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (router, _dir) = test_router();
        let (status, _) = get_json(router, "/advocates/write").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
