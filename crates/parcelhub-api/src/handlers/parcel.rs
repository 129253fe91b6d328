//! Parcel handlers.
//!
//! Write handlers take their body as `Result<ValidatedJson<_>, _>` so the
//! access policy is applied before a body error can surface: an anonymous
//! write is a 401 whatever it sends.

use axum::Json;
use axum::extract::{Path, Query, State};

use parcelhub_auth::policy::ParcelOperation;
use parcelhub_service::parcel::{ParcelDetailView, ParcelSummary, UpdatedParcelView};

use crate::dto::request::{CreateParcelRequest, ListParcelsQuery, UpdateParcelRequest};
use crate::dto::response::{CreateParcelResponse, StatusResponse};
use crate::error::ApiError;
use crate::extractors::{Caller, ValidatedJson, parse_parcel_id};
use crate::state::AppState;

/// GET /api/parcels/list
pub async fn list_parcels(
    State(state): State<AppState>,
    caller: Caller,
    Query(query): Query<ListParcelsQuery>,
) -> Result<Json<Vec<ParcelSummary>>, ApiError> {
    let parcels = state
        .query_service
        .list(caller.context(), query.category.as_deref())
        .await?;
    Ok(Json(parcels))
}

/// POST /api/parcels/create
pub async fn create_parcel(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<ValidatedJson<CreateParcelRequest>, ApiError>,
) -> Result<Json<CreateParcelResponse>, ApiError> {
    state
        .policy
        .check(ParcelOperation::Create, caller.context().is_some())?;
    let ValidatedJson(req) = body?;

    let created = state
        .parcel_service
        .create(caller.context(), req.into())
        .await?;

    Ok(Json(CreateParcelResponse {
        status: "success".to_string(),
        message: "Parcel saved successfully.".to_string(),
        parcel: created,
    }))
}

/// GET /api/parcels/{id}
pub async fn get_parcel(
    State(state): State<AppState>,
    caller: Caller,
    Path(key): Path<String>,
) -> Result<Json<ParcelDetailView>, ApiError> {
    let id = parse_parcel_id(&key)?;
    let detail = state.parcel_service.get_detail(caller.context(), id).await?;
    Ok(Json(detail))
}

/// PUT /api/parcels/{parcel_no}
pub async fn update_parcel(
    State(state): State<AppState>,
    caller: Caller,
    Path(parcel_no): Path<String>,
    body: Result<ValidatedJson<UpdateParcelRequest>, ApiError>,
) -> Result<Json<UpdatedParcelView>, ApiError> {
    state
        .policy
        .check(ParcelOperation::Update, caller.context().is_some())?;
    let ValidatedJson(req) = body?;

    let updated = state
        .parcel_service
        .update(caller.context(), &parcel_no, req.into())
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/parcels/{parcel_no}
pub async fn delete_parcel(
    State(state): State<AppState>,
    caller: Caller,
    Path(parcel_no): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    state
        .parcel_service
        .delete(caller.context(), &parcel_no)
        .await?;
    Ok(Json(StatusResponse::success("Parcel deleted successfully.")))
}
