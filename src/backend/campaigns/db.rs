/**
 * Campaign Database Operations
 *
 * Off-chain campaign metadata keyed by the caller-assigned id.
 */

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

/// Campaign metadata row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Outcome of [`insert_campaign`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// A campaign with this id already exists; nothing was written
    DuplicateId,
}

/// Store a new campaign
pub async fn insert_campaign(pool: &SqlitePool, campaign: &Campaign) -> Result<SaveOutcome, sqlx::Error> {
    let result = sqlx::query("INSERT INTO campaigns (id, title, description) VALUES (?, ?, ?)")
        .bind(&campaign.id)
        .bind(&campaign.title)
        .bind(&campaign.description)
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(SaveOutcome::Saved),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Ok(SaveOutcome::DuplicateId),
        Err(e) => Err(e),
    }
}

/// Fetch campaigns by id
///
/// Rows come back in the order the ids were requested. Unknown ids are
/// skipped and a repeated id yields its row once, at its first position.
/// An empty id list returns without querying.
pub async fn get_campaigns_by_ids(pool: &SqlitePool, ids: &[String]) -> Result<Vec<Campaign>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Sqlite>::new("SELECT id, title, description FROM campaigns WHERE id IN (");
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(id.clone());
    }
    separated.push_unseparated(")");

    let rows: Vec<Campaign> = query.build_query_as::<Campaign>().fetch_all(pool).await?;

    let mut by_id: HashMap<String, Campaign> = rows.into_iter().map(|c| (c.id.clone(), c)).collect();
    Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
}
