use serde::{Deserialize, Serialize};
use verdict_http::Identify;

/// Demo entity driving the mapper end-to-end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
}

impl Identify for User {
    fn identifier(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}
