use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const CATEGORY_NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryFieldError {
    #[error("Category name is required")]
    EmptyName,

    #[error("Category name must not exceed 50 characters")]
    NameTooLong,
}

pub fn normalize_category_name(name: &str) -> Result<String, CategoryFieldError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryFieldError::EmptyName);
    }
    if name.chars().count() > CATEGORY_NAME_MAX_LEN {
        return Err(CategoryFieldError::NameTooLong);
    }
    Ok(name.to_string())
}

/// Blank descriptions are stored as absent.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_bounded() {
        assert_eq!(normalize_category_name("  Books "), Ok("Books".to_string()));
        assert_eq!(normalize_category_name(""), Err(CategoryFieldError::EmptyName));
        assert_eq!(
            normalize_category_name(&"x".repeat(51)),
            Err(CategoryFieldError::NameTooLong)
        );
    }

    #[test]
    fn blank_description_becomes_none() {
        assert_eq!(normalize_description(Some("   ".to_string())), None);
        assert_eq!(
            normalize_description(Some(" Paper things ".to_string())),
            Some("Paper things".to_string())
        );
    }
}
