use serde::{Deserialize, Serialize};

/// A subscribed source. The address is the natural key the store derives the id from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub id: String,
    pub provider: String,
    pub category: String,
    pub address: String,
}

impl Feed {
    pub fn new(provider: String, category: String, address: String) -> Self {
        Self {
            id: String::new(),
            provider,
            category,
            address,
        }
    }
}
