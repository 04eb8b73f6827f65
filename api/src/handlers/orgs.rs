use axum::Json;

use crate::domain::entities::{OrgAffiliation, ORG_AFFILIATIONS};

/// GET /api/orgs
pub async fn list_orgs() -> Json<&'static [OrgAffiliation]> {
    Json(ORG_AFFILIATIONS)
}
