//! Loan catalog handlers, shared by every category

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::catalog::{CatalogService, LoanCategory, LoanInput, SeedOutcome};
use crate::error::{ApiError, ApiResult};
use crate::models::{CountPayload, DeletedPayload, Envelope, LoanList, LoanPayload, NoPayload};

/// Resolve a `{category}-loans` path segment
pub(crate) fn category_from(slug: &str) -> ApiResult<LoanCategory> {
    LoanCategory::from_slug(slug)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown loan catalog: {}", slug)))
}

pub(crate) fn parse_id(raw: &str) -> ApiResult<i32> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid id: {}", raw)))
}

pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

pub async fn list_loans(
    State(service): State<Arc<CatalogService>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Envelope<LoanList>>> {
    let category = category_from(&slug)?;
    let loans = service.list(category).await?;

    Ok(Json(Envelope::success(
        format!("Found {} {} records", loans.len(), category),
        LoanList {
            count: loans.len(),
            loans,
        },
    )))
}

pub async fn get_loan(
    State(service): State<Arc<CatalogService>>,
    Path((slug, id)): Path<(String, String)>,
) -> ApiResult<Json<Envelope<LoanPayload>>> {
    let category = category_from(&slug)?;
    let loan = service.get(category, parse_id(&id)?).await?;

    Ok(Json(Envelope::success("Loan found", LoanPayload { loan })))
}

pub async fn create_loan(
    State(service): State<Arc<CatalogService>>,
    Path(slug): Path<String>,
    payload: Result<Json<LoanInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<LoanPayload>>)> {
    let category = category_from(&slug)?;
    let input = json_body(payload)?;
    let loan = service.create(category, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(
            format!("Loan {} created", loan.id),
            LoanPayload { loan },
        )),
    ))
}

pub async fn update_loan(
    State(service): State<Arc<CatalogService>>,
    Path((slug, id)): Path<(String, String)>,
    payload: Result<Json<LoanInput>, JsonRejection>,
) -> ApiResult<Json<Envelope<LoanPayload>>> {
    let category = category_from(&slug)?;
    let id = parse_id(&id)?;
    let input = json_body(payload)?;
    let loan = service.update(category, id, &input).await?;

    Ok(Json(Envelope::success(
        format!("Loan {} updated", id),
        LoanPayload { loan },
    )))
}

pub async fn delete_loan(
    State(service): State<Arc<CatalogService>>,
    Path((slug, id)): Path<(String, String)>,
) -> ApiResult<Json<Envelope<DeletedPayload>>> {
    let category = category_from(&slug)?;
    let id = parse_id(&id)?;
    service.delete(category, id).await?;

    Ok(Json(Envelope::success(
        format!("Loan {} deleted", id),
        DeletedPayload { id },
    )))
}

/// Create the catalog table if missing
pub async fn init_catalog(
    State(service): State<Arc<CatalogService>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Envelope<NoPayload>>> {
    let category = category_from(&slug)?;
    service.ensure_schema(category).await?;

    Ok(Json(Envelope::success(
        format!("Table {} is ready", category.table()),
        NoPayload::default(),
    )))
}

/// Insert demo offers into an empty catalog; answers `info` when data exists
pub async fn seed_catalog(
    State(service): State<Arc<CatalogService>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Envelope<CountPayload>>> {
    let category = category_from(&slug)?;

    let body = match service.seed(category).await? {
        SeedOutcome::Inserted(n) => Envelope::success(
            format!("Inserted {} demo {} records", n, category),
            CountPayload { count: n as i64 },
        ),
        SeedOutcome::AlreadyPopulated(existing) => Envelope::info(
            format!("Catalog already has {} records, nothing inserted", existing),
            CountPayload { count: existing },
        ),
    };

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_slug() {
        assert_eq!(
            category_from("mortgage-loans").unwrap(),
            LoanCategory::Mortgage
        );
        let err = category_from("car-loans").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("99999999999").is_err());
    }
}
