//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::domain::{OrderError, Segment};
use crate::ordering;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/itinerary", post(create_itinerary).get(list_itineraries))
        .route("/itinerary/:id", get(get_itinerary))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create an itinerary: order the submitted tickets and persist the result.
async fn create_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so the offending body can be logged on failure
    let req: CreateItineraryRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "rejected create payload");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let segments: Vec<Segment> = req
        .tickets
        .into_iter()
        .map(CreateTicketRequest::into_segment)
        .collect();

    let ordered = ordering::order(&segments)?;
    let itinerary = state.store.create(req.name, ordered).await;

    Ok((
        StatusCode::CREATED,
        Json(ItineraryResponse::from_itinerary(&itinerary)),
    )
        .into_response())
}

/// List all itineraries, each with its rendered narrative.
async fn list_itineraries(State(state): State<AppState>) -> Json<Vec<ItineraryResponse>> {
    let itineraries = state.store.list().await;
    Json(
        itineraries
            .iter()
            .map(ItineraryResponse::with_narrative)
            .collect(),
    )
}

/// Fetch a single itinerary by id, with its rendered narrative.
async fn get_itinerary(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let itinerary = state.store.get(id).await.ok_or_else(|| AppError::NotFound {
        message: format!("Itinerary with id [{id}] not found"),
    })?;

    Ok(Json(ItineraryResponse::with_narrative(&itinerary)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn state() -> AppState {
        AppState::new(crate::store::ItineraryStore::new())
    }

    #[test]
    fn order_errors_map_to_bad_request() {
        let err = AppError::from(OrderError::NoStartPoint);
        assert!(matches!(
            err,
            AppError::BadRequest { ref message } if message == "could not determine start of itinerary"
        ));
    }

    #[tokio::test]
    async fn create_orders_and_persists() {
        let state = state();
        let body = Bytes::from(
            r#"{"tickets": [{"from": "B", "to": "C"}, {"from": "A", "to": "B"}]}"#,
        );

        let response = create_itinerary(State(state.clone()), body).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["id"], 1);
        assert_eq!(json["tickets"][0]["from"], "A");
        assert_eq!(json["tickets"][0]["position"], 1);
        assert_eq!(json["tickets"][1]["from"], "B");
        assert!(json.get("humanReadable").is_none());

        assert_eq!(state.store.len().await, 1);
    }

    #[tokio::test]
    async fn create_rejects_unorderable_tickets() {
        let state = state();
        let body = Bytes::from(
            r#"{"tickets": [{"from": "A", "to": "B"}, {"from": "A", "to": "C"}]}"#,
        );

        let err = create_itinerary(State(state.clone()), body).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::BadRequest { ref message }
                if message == "duplicate 'from' detected: A (expects unique from)"
        ));
        assert!(state.store.is_empty().await);
    }

    #[tokio::test]
    async fn create_rejects_malformed_json() {
        let err = create_itinerary(State(state()), Bytes::from("not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn get_attaches_narrative() {
        let state = state();
        let body = Bytes::from(r#"{"tickets": [{"from": "A", "to": "B"}]}"#);
        create_itinerary(State(state.clone()), body).await.unwrap();

        let Json(response) = get_itinerary(State(state), Path(1)).await.unwrap();
        assert_eq!(
            response.human_readable.as_deref(),
            Some("0. Start.\n1. From A, board the transport to B.\n2. Last destination reached.")
        );
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let err = get_itinerary(State(state()), Path(1234)).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound { ref message } if message == "Itinerary with id [1234] not found"
        ));
    }

    #[tokio::test]
    async fn list_returns_all_with_narratives() {
        let state = state();
        for body in [
            r#"{"tickets": [{"from": "A", "to": "B"}]}"#,
            r#"{"tickets": [{"from": "X", "to": "Y"}]}"#,
        ] {
            create_itinerary(State(state.clone()), Bytes::from(body))
                .await
                .unwrap();
        }

        let Json(all) = list_itineraries(State(state)).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
        assert!(all.iter().all(|i| i.human_readable.is_some()));
    }
}
