// Scan request entity
// One form submission; lives only for the duration of the request

use serde::{Deserialize, Serialize};

use crate::StatusIntent;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanRequest {
    pub barcode: String,
    #[serde(rename = "user")]
    pub name: String,
    pub team: String,
    #[serde(rename = "status")]
    pub intent: StatusIntent,
}
