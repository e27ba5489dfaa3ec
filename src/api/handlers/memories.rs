/*
 * Responsibility
 * - /memories CRUD handlers
 * - the auth middleware guarantees an AuthCtx; ownership checks go through
 *   services::access_policy, persistence through state.memories
 */
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::{
        dto::memories::{MemoryPayload, MemoryResponse, MemorySummaryResponse},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    repos::memory_repo::{MemoryChanges, NewMemory},
    services::access_policy::{AccessMode, can_access},
    state::AppState,
};

// A path segment that is not a UUID cannot name a record, so it falls under
// not-found rather than bad-request.
fn parse_memory_id(id: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, AppError> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::not_found("memory"))
}

fn parse_body(payload: Result<Json<MemoryPayload>, JsonRejection>) -> Result<MemoryPayload, AppError> {
    payload
        .map(|Json(p)| p)
        .map_err(|rejection| AppError::bad_request("INVALID_BODY", rejection.body_text()))
}

/// GET /memories — the caller's own records, oldest first, as summaries.
pub async fn list_memories(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
) -> Result<Json<Vec<MemorySummaryResponse>>, AppError> {
    let rows = state.memories.list_by_owner(auth.user_id).await?;

    let res = rows.into_iter().map(MemorySummaryResponse::from).collect();

    Ok(Json(res))
}

/// GET /memories/{id} — full record; private records only for the owner.
pub async fn get_memory(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MemoryResponse>, AppError> {
    let id = parse_memory_id(id)?;

    let record = state
        .memories
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("memory"))?;

    if !can_access(&record, auth.user_id, AccessMode::Read) {
        return Err(AppError::AccessDenied);
    }

    Ok(Json(record.into()))
}

/// POST /memories — owner always comes from the token, never the body.
pub async fn create_memory(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    payload: Result<Json<MemoryPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MemoryResponse>), AppError> {
    let req = parse_body(payload)?;

    let record = state
        .memories
        .create(NewMemory {
            user_id: auth.user_id,
            content: req.content,
            cover_url: req.cover_url,
            type_media: req.type_media,
            is_public: req.is_public,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// PUT /memories/{id} — full replacement of the mutable fields.
/// Ownership is checked before the write and cannot be transferred by it.
pub async fn update_memory(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<MemoryPayload>, JsonRejection>,
) -> Result<Json<MemoryResponse>, AppError> {
    let id = parse_memory_id(id)?;
    let req = parse_body(payload)?;

    let record = state
        .memories
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("memory"))?;

    if !can_access(&record, auth.user_id, AccessMode::Modify) {
        return Err(AppError::AccessDenied);
    }

    let updated = state
        .memories
        .update(
            id,
            MemoryChanges {
                content: req.content,
                cover_url: req.cover_url,
                type_media: req.type_media,
                is_public: req.is_public,
            },
        )
        .await?
        // the record can vanish between the read and the write
        .ok_or_else(|| AppError::not_found("memory"))?;

    Ok(Json(updated.into()))
}

/// DELETE /memories/{id} — permanent removal, owner only.
pub async fn delete_memory(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_memory_id(id)?;

    let record = state
        .memories
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("memory"))?;

    if !can_access(&record, auth.user_id, AccessMode::Modify) {
        return Err(AppError::AccessDenied);
    }

    let deleted = state.memories.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("memory"))
    }
}
