//! HTTP handlers for the contacts resource.
//!
//! The one error-to-status translation in the system happens here, via
//! [`ApiError`]: NotFound → 404, Duplicate/Validation → 400, anything
//! else → 500 with the cause logged for operators and withheld from the
//! client.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use contacts_core::{Contact, ContactInput, Error, Page, PageRequest};

use crate::app::ContactService;

/// Success envelope: `{ "message": ..., "data": ... }`.
#[derive(Debug, Serialize)]
pub struct Message<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Message<T> {
    fn with_data(message: &str, data: T) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
            data: Some(data),
        })
    }

    fn bare(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
            data: None,
        })
    }
}

/// Domain error carried across the axum boundary.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
            "internal error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Message::<()>::bare(&message)).into_response()
    }
}

pub async fn create(
    State(service): State<ContactService>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Message<Contact>>, ApiError> {
    input.validate()?;
    let contact = service.create(input).await?;
    Ok(Message::with_data("contact created successfully", contact))
}

pub async fn get_by_id(
    State(service): State<ContactService>,
    Path(id): Path<i64>,
) -> Result<Json<Message<Contact>>, ApiError> {
    let contact = service.get_by_id(id).await?;
    Ok(Message::with_data("contact successfully loaded", contact))
}

pub async fn update(
    State(service): State<ContactService>,
    Path(id): Path<i64>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Message<Contact>>, ApiError> {
    input.validate()?;
    let contact = service.update(id, input).await?;
    Ok(Message::with_data("contact updated successfully", contact))
}

pub async fn delete(
    State(service): State<ContactService>,
    Path(id): Path<i64>,
) -> Result<Json<Message<()>>, ApiError> {
    service.delete(id).await?;
    Ok(Message::bare("contact successfully deleted"))
}

pub async fn get(
    State(service): State<ContactService>,
    Query(request): Query<PageRequest>,
) -> Result<Json<Message<Page<Contact>>>, ApiError> {
    let page = service.get(request).await?;
    Ok(Message::with_data("contacts successfully loaded", page))
}

pub async fn health() -> Json<Message<()>> {
    Message::bare("ok")
}
