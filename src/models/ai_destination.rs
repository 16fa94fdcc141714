use serde::{Deserialize, Serialize};

/// A destination suggestion recovered from model output.
///
/// Every field is best effort: anything the parser could not find is left
/// empty, `name` included.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AiDestination {
    pub name: String,
    pub country: String,
    pub image: String,
    pub description: String,
    pub budget: String,
    pub best_time_to_visit: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AiRecommendations {
    pub destinations: Vec<AiDestination>,
}
