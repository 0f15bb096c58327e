use serde::{Deserialize, Serialize};

/// A tutoring category. Admins manage these; the gateway only lists them —
/// create/update/delete go through the `/api/*` passthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}
