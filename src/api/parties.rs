//! Party API endpoints.

use axum::extract::{Path, State};

use super::{success, ApiResult};
use crate::models::{MembershipState, Party};
use crate::AppState;

/// GET /api/parties/:owner - Get the party led by a user, creating it if needed.
pub async fn get_party(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> ApiResult<Party> {
    let party = state.repo.get_or_create_party(&owner_id).await?;
    success(party)
}

/// POST /api/parties/:owner/members/:user/toggle - Toggle a user's membership.
///
/// Removes the user if currently a member, adds them otherwise; the reported
/// flag reflects the committed state.
pub async fn toggle_party_member(
    State(state): State<AppState>,
    Path((owner_id, user_id)): Path<(String, String)>,
) -> ApiResult<MembershipState> {
    let membership = state.repo.toggle_party_member(&owner_id, &user_id).await?;
    success(membership)
}
