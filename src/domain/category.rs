use serde::Serialize;

/// Donation/need category (food, clothing, education, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}
