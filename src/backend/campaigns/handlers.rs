/**
 * Campaign Handlers
 *
 * All routes here sit behind the login gate.
 *
 * # Routes
 *
 * - `GET /create-campaign` - Campaign creation page
 * - `POST /save-campaign` - Store title and description under an id
 * - `POST /get-campaigns` - Bulk fetch by id
 *
 * `/save-campaign` answers in plain text (`success` / `error`) because the
 * front-end script compares the body literally.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    Form,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::campaigns::db::{get_campaigns_by_ids, insert_campaign, Campaign, SaveOutcome};
use crate::backend::error::BackendResult;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::pages;

/// Form posted by the campaign creation script
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SaveCampaignForm {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Id assigned by the contract when the campaign was created on-chain
    pub id: Option<String>,
}

/// Campaign id as sent by the front end: a JSON string or integer
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum CampaignId {
    Text(String),
    Number(i64),
}

impl CampaignId {
    /// Key the id is stored under
    pub fn into_key(self) -> String {
        match self {
            Self::Text(id) => id,
            Self::Number(id) => id.to_string(),
        }
    }
}

/// Body of `POST /get-campaigns`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GetCampaignsRequest {
    pub campaign_ids: Vec<CampaignId>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `GET /create-campaign`
pub async fn create_campaign_page(AuthUser(user): AuthUser) -> Html<String> {
    pages::create_campaign_page(&user)
}

/// Save campaign handler
///
/// # Returns
///
/// * `200 success` - Campaign stored
/// * `400 error` - A field is missing or blank
/// * `409 error` - The id is already taken
/// * `500 error` - Store failure
pub async fn save_campaign(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Form(form): Form<SaveCampaignForm>,
) -> (StatusCode, &'static str) {
    let (Some(id), Some(title), Some(description)) =
        (trimmed(form.id), trimmed(form.title), trimmed(form.description))
    else {
        tracing::warn!("Incomplete campaign form from {}", user.email);
        return (StatusCode::BAD_REQUEST, "error");
    };

    let campaign = Campaign { id, title, description };

    match insert_campaign(&pool, &campaign).await {
        Ok(SaveOutcome::Saved) => {
            tracing::info!("Campaign {} saved by {}", campaign.id, user.email);
            (StatusCode::OK, "success")
        }
        Ok(SaveOutcome::DuplicateId) => {
            tracing::warn!("Campaign id {} already exists", campaign.id);
            (StatusCode::CONFLICT, "error")
        }
        Err(e) => {
            tracing::error!("Failed to save campaign {}: {:?}", campaign.id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "error")
        }
    }
}

/// Bulk fetch handler
///
/// # Example Request
///
/// ```json
/// { "campaign_ids": [3, "1"] }
/// ```
///
/// # Example Response
///
/// ```json
/// [
///   { "id": "3", "title": "...", "description": "..." },
///   { "id": "1", "title": "...", "description": "..." }
/// ]
/// ```
pub async fn get_campaigns(
    State(pool): State<SqlitePool>,
    Json(request): Json<GetCampaignsRequest>,
) -> BackendResult<Json<Vec<Campaign>>> {
    let ids: Vec<String> = request
        .campaign_ids
        .into_iter()
        .map(CampaignId::into_key)
        .collect();

    let campaigns = get_campaigns_by_ids(&pool, &ids).await?;
    Ok(Json(campaigns))
}
