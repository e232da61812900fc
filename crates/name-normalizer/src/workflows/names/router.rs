use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use super::{NamePipeline, NormalizedNames, PersonRecord};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub csv: String,
    #[serde(default)]
    pub dedupe: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NormalizeQuery {
    #[serde(default)]
    pub dedupe: Option<bool>,
}

/// Router builder exposing the name pipeline over HTTP.
pub fn names_router(pipeline: NamePipeline) -> Router {
    Router::new()
        .route("/api/v1/names/normalize", post(normalize_handler))
        .route("/api/v1/names/normalize/csv", post(normalize_csv_handler))
        .with_state(pipeline)
}

pub(crate) async fn normalize_handler(
    State(pipeline): State<NamePipeline>,
    Json(request): Json<NormalizeRequest>,
) -> Json<NormalizedNames> {
    let pipeline = apply_dedupe_override(pipeline, request.dedupe);
    Json(pipeline.normalize(&request.csv))
}

pub(crate) async fn normalize_csv_handler(
    State(pipeline): State<NamePipeline>,
    Query(query): Query<NormalizeQuery>,
    body: Bytes,
) -> Result<Json<Vec<PersonRecord>>, AppError> {
    let pipeline = apply_dedupe_override(pipeline, query.dedupe);
    let names = pipeline.from_bytes(&body)?;
    Ok(Json(names.records))
}

fn apply_dedupe_override(pipeline: NamePipeline, dedupe: Option<bool>) -> NamePipeline {
    match dedupe {
        Some(flag) => pipeline.with_deduplicate(flag),
        None => pipeline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const DUPLICATED: &str = "Name\nMister John Doe\nMr Tom Staff and Mr John Doe\n";

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn json_route_returns_records_and_diagnostics() {
        let router = names_router(NamePipeline::default());
        let payload = json!({ "csv": "Name\nMr John Smith\nSmith\n" });

        let response = router
            .oneshot(
                Request::post("/api/v1/names/normalize")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&payload).expect("serialize payload"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(
            body["records"][0],
            json!({
                "title": "Mr",
                "first_name": "John",
                "initial": null,
                "last_name": "Smith",
            })
        );
        assert_eq!(body["diagnostics"][0]["line"], json!(3));
        assert_eq!(
            body["diagnostics"][0]["issue"]["kind"],
            json!("missing_surname")
        );
    }

    #[tokio::test]
    async fn json_route_honours_dedupe_flag() {
        let router = names_router(NamePipeline::default());
        let payload = json!({ "csv": DUPLICATED, "dedupe": true });

        let response = router
            .oneshot(
                Request::post("/api/v1/names/normalize")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&payload).expect("serialize payload"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        let body = read_json(response).await;
        assert_eq!(body["records"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn csv_route_accepts_raw_body() {
        let router = names_router(NamePipeline::default());

        let response = router
            .oneshot(
                Request::post("/api/v1/names/normalize/csv")
                    .header(header::CONTENT_TYPE, "text/csv")
                    .body(Body::from("Name\nMr and Mrs Jones,\n"))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(
            body,
            json!([
                { "title": "Mr", "first_name": null, "initial": null, "last_name": "Jones" },
                { "title": "Mrs", "first_name": null, "initial": null, "last_name": "Jones" },
            ])
        );
    }

    #[tokio::test]
    async fn csv_route_reads_dedupe_query() {
        let router = names_router(NamePipeline::default());

        let response = router
            .oneshot(
                Request::post("/api/v1/names/normalize/csv?dedupe=true")
                    .body(Body::from(DUPLICATED))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        let body = read_json(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn csv_route_rejects_invalid_utf8() {
        let router = names_router(NamePipeline::default());

        let response = router
            .oneshot(
                Request::post("/api/v1/names/normalize/csv")
                    .body(Body::from(vec![b'N', 0xff, b'\n']))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.contains("UTF-8")));
    }
}
