use serde::Deserialize;

use crate::domain::Category;

/// Row of the `categories` table.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            icon: dto.icon,
        }
    }
}
