// Row payload entity
// The three cells written back for one scan: availability, holder, team

use serde::Serialize;

use crate::StatusIntent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowPayload {
    pub availability: String,
    pub name: String,
    pub team: String,
}

impl RowPayload {
    pub fn new(intent: StatusIntent, name: &str, team: &str) -> Self {
        Self {
            availability: intent.availability().to_string(),
            name: name.to_string(),
            team: team.to_string(),
        }
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        vec![vec![self.availability, self.name, self.team]]
    }
}
