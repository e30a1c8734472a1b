/**
 * Wallet Registration Handler
 *
 * `POST /is-registered` tells the front end whether a wallet address belongs
 * to a registered user. The response is always `{ "success": bool }`; a
 * store failure is logged and answered with `false` and status 500.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{IsRegisteredRequest, IsRegisteredResponse};
use crate::backend::auth::users::is_wallet_registered;

/// Wallet registration check
///
/// # Example Request
///
/// ```http
/// POST /is-registered HTTP/1.1
/// Content-Type: application/json
///
/// { "ethereum_address": "0xABC" }
/// ```
pub async fn is_registered(
    State(pool): State<SqlitePool>,
    Json(request): Json<IsRegisteredRequest>,
) -> (StatusCode, Json<IsRegisteredResponse>) {
    let address = request.ethereum_address.trim();
    if address.is_empty() {
        return (StatusCode::OK, Json(IsRegisteredResponse { success: false }));
    }

    match is_wallet_registered(&pool, address).await {
        Ok(success) => (StatusCode::OK, Json(IsRegisteredResponse { success })),
        Err(e) => {
            tracing::error!("Wallet registration lookup failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(IsRegisteredResponse { success: false }),
            )
        }
    }
}
