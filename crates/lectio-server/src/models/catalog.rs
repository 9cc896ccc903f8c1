//! Catalog API Models

use serde::Serialize;
use utoipa::ToSchema;

use lectio::{PlanInfo, VersionInfo};

/// An available Bible version
#[derive(Debug, Serialize, ToSchema)]
pub struct VersionResponse {
    pub code: String,
    pub name: String,
}

impl From<VersionInfo> for VersionResponse {
    fn from(info: VersionInfo) -> Self {
        Self {
            code: info.code.to_string(),
            name: info.name.to_string(),
        }
    }
}

/// An available reading plan
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanResponse {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl From<PlanInfo> for PlanResponse {
    fn from(info: PlanInfo) -> Self {
        Self {
            code: info.code.to_string(),
            name: info.name.to_string(),
            description: info.description.to_string(),
        }
    }
}
