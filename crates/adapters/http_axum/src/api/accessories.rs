//! JSON REST handlers for accessories.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use tvbridge_app::ports::{AccessoryCache, CommandTransport};
use tvbridge_app::services::platform::TelevisionHandle;
use tvbridge_app::services::television::Television;
use tvbridge_domain::error::NotFoundError;
use tvbridge_domain::id::AccessoryUuid;

use crate::error::ApiError;
use crate::state::AppState;

/// One accessory, as exposed over the API.
#[derive(Debug, Serialize)]
pub struct AccessoryView {
    /// Stable accessory identity.
    pub uuid: AccessoryUuid,
    /// Display name fixed at registration.
    pub display_name: String,
    /// Manufacturer reported by the descriptor.
    pub manufacturer: String,
    /// Model reported by the descriptor.
    pub model: String,
    /// Last confirmed power state.
    pub active: bool,
    /// Last confirmed input source identifier (1-based).
    pub active_identifier: u32,
    /// Selectable inputs, in identifier order.
    pub sources: Vec<SourceView>,
}

/// One selectable input, as exposed over the API.
#[derive(Debug, Serialize)]
pub struct SourceView {
    /// 1-based identifier used by the set endpoint.
    pub identifier: u32,
    /// Display name of the input.
    pub name: String,
}

impl AccessoryView {
    fn from_television<T: CommandTransport>(tv: &Television<T>) -> Self {
        let record = tv.record();
        let sources = record
            .device
            .sources
            .iter()
            .enumerate()
            .map(|(index, source)| SourceView {
                identifier: u32::try_from(index + 1).unwrap_or(u32::MAX),
                name: source.name.clone(),
            })
            .collect();
        Self {
            uuid: record.uuid,
            display_name: record.display_name.clone(),
            manufacturer: record.device.manufacturer.clone(),
            model: record.device.model.clone(),
            active: tv.active(),
            active_identifier: tv.active_identifier(),
            sources,
        }
    }
}

/// Request body for the power endpoint.
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    /// Desired power state.
    pub active: bool,
}

/// Request body for the input source endpoint.
#[derive(Debug, Deserialize)]
pub struct SetActiveIdentifierRequest {
    /// Desired 1-based input source identifier.
    pub identifier: u32,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<AccessoryView>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the single-accessory endpoints.
pub enum AccessoryResponse {
    Ok(Json<AccessoryView>),
}

impl IntoResponse for AccessoryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_uuid(raw: &str) -> Result<AccessoryUuid, ApiError> {
    AccessoryUuid::from_str(raw).map_err(|_| {
        ApiError::from(NotFoundError {
            entity: "accessory",
            id: raw.to_string(),
        })
    })
}

async fn lookup<T, C>(
    state: &AppState<T, C>,
    raw_uuid: &str,
) -> Result<TelevisionHandle<T>, ApiError>
where
    T: CommandTransport + Clone + Send + Sync + 'static,
    C: AccessoryCache + Send + Sync + 'static,
{
    let uuid = parse_uuid(raw_uuid)?;
    let platform = state.platform.read().await;
    platform.accessory(uuid).ok_or_else(|| {
        ApiError::from(NotFoundError {
            entity: "accessory",
            id: uuid.to_string(),
        })
    })
}

/// `GET /api/accessories`
pub async fn list<T, C>(State(state): State<AppState<T, C>>) -> Result<ListResponse, ApiError>
where
    T: CommandTransport + Clone + Send + Sync + 'static,
    C: AccessoryCache + Send + Sync + 'static,
{
    let handles = state.platform.read().await.accessories();
    let mut views = Vec::with_capacity(handles.len());
    for handle in handles {
        views.push(AccessoryView::from_television(&*handle.lock().await));
    }
    views.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    Ok(ListResponse::Ok(Json(views)))
}

/// `GET /api/accessories/{uuid}`
pub async fn get<T, C>(
    State(state): State<AppState<T, C>>,
    Path(uuid): Path<String>,
) -> Result<AccessoryResponse, ApiError>
where
    T: CommandTransport + Clone + Send + Sync + 'static,
    C: AccessoryCache + Send + Sync + 'static,
{
    let handle = lookup(&state, &uuid).await?;
    let tv = handle.lock().await;
    Ok(AccessoryResponse::Ok(Json(AccessoryView::from_television(&tv))))
}

/// `PUT /api/accessories/{uuid}/active`
pub async fn set_active<T, C>(
    State(state): State<AppState<T, C>>,
    Path(uuid): Path<String>,
    Json(req): Json<SetActiveRequest>,
) -> Result<AccessoryResponse, ApiError>
where
    T: CommandTransport + Clone + Send + Sync + 'static,
    C: AccessoryCache + Send + Sync + 'static,
{
    let handle = lookup(&state, &uuid).await?;
    let mut tv = handle.lock().await;
    tv.set_active(req.active).await?;
    Ok(AccessoryResponse::Ok(Json(AccessoryView::from_television(&tv))))
}

/// `PUT /api/accessories/{uuid}/active-identifier`
pub async fn set_active_identifier<T, C>(
    State(state): State<AppState<T, C>>,
    Path(uuid): Path<String>,
    Json(req): Json<SetActiveIdentifierRequest>,
) -> Result<AccessoryResponse, ApiError>
where
    T: CommandTransport + Clone + Send + Sync + 'static,
    C: AccessoryCache + Send + Sync + 'static,
{
    let handle = lookup(&state, &uuid).await?;
    let mut tv = handle.lock().await;
    tv.set_active_identifier(req.identifier).await?;
    Ok(AccessoryResponse::Ok(Json(AccessoryView::from_television(&tv))))
}
