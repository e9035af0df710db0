//! Item (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog item. `available` is false exactly while some patron holds a loan on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub available: bool,
}

impl Item {
    /// Text the similarity index sees for this item
    pub fn document(&self) -> String {
        format!("{} {}", self.title, self.genre)
    }

    pub fn short(&self) -> ItemShort {
        ItemShort {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
        }
    }
}

/// Short item representation for search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemShort {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
}

/// Create item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
}

impl CreateItem {
    pub fn new(title: impl Into<String>, author: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_joins_title_and_genre() {
        let item = Item {
            id: 3,
            title: "Deep Learning Insights".to_string(),
            author: "Geoff Hinton".to_string(),
            genre: "Deep Learning".to_string(),
            available: true,
        };
        assert_eq!(item.document(), "Deep Learning Insights Deep Learning");
        assert_eq!(item.short().author, "Geoff Hinton");
    }

    #[test]
    fn test_create_item_validation() {
        assert!(CreateItem::new("T", "A", "G").validate().is_ok());

        let errors = CreateItem::new("T", "", "").validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("genre"));
    }
}
