use crate::model::{AnalysisReport, ProductAttributes};
use crate::server::{error::AppError, AppState};
use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub product: ProductAttributes,
    #[serde(default = "default_include_advisory")]
    pub include_advisory: bool,
}

fn default_include_advisory() -> bool {
    true
}

/// # GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the MarketLens listing analysis API",
        "version": VERSION,
        "status": "active",
    }))
}

/// # GET /api/v1/health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": VERSION,
    }))
}

/// # POST /api/v1/analyze
/// Validates the listing attributes and runs the analysis pipeline.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    validate(&request.product)?;
    let report = state
        .service
        .analyze(&request.product, request.include_advisory)
        .await;
    Ok(Json(report))
}

/// Rejects malformed input before it reaches the analysis core.
fn validate(product: &ProductAttributes) -> Result<(), AppError> {
    if product.asin.trim().is_empty() {
        return Err(AppError::InvalidInput("asin must not be empty".into()));
    }
    if product.title.trim().is_empty() {
        return Err(AppError::InvalidInput("title must not be empty".into()));
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(AppError::InvalidInput(
            "price must be a non-negative number".into(),
        ));
    }
    if let Some(rating) = product.rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(AppError::InvalidInput(
                "rating must lie between 0 and 5".into(),
            ));
        }
    }
    if let Some(weight) = product.weight {
        if weight < 0.0 {
            return Err(AppError::InvalidInput("weight must not be negative".into()));
        }
    }
    Ok(())
}
