//! Catalog management and search service

use validator::Validate;

use crate::{
    config::SearchConfig,
    error::AppResult,
    models::{CreateItem, Item, ItemShort},
    repository::Repository,
    search::{ScoredItem, SimilarityIndex},
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    index: SimilarityIndex,
    config: SearchConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: SearchConfig) -> Self {
        Self {
            repository,
            index: SimilarityIndex::new(),
            config,
        }
    }

    /// Best available matches for a free-text query
    pub fn search(&self, query: &str) -> AppResult<Vec<ItemShort>> {
        Ok(self
            .search_scored(query)?
            .into_iter()
            .map(|hit| hit.item)
            .collect())
    }

    /// Same as [`search`](Self::search), keeping the similarity scores
    pub fn search_scored(&self, query: &str) -> AppResult<Vec<ScoredItem>> {
        let (version, items) = self.repository.items_snapshot()?;
        self.index.rank(&items, version, query, &self.config)
    }

    /// Add a new item to the catalog. Every field must be non-empty.
    pub fn add_item(&self, item: CreateItem) -> AppResult<Item> {
        item.validate()?;
        let created = self.repository.items_create(&item)?;
        tracing::info!(item_id = created.id, title = %created.title, "Catalog: item added");
        Ok(created)
    }

    /// Every item with its availability, in catalog order
    pub fn list_stock(&self) -> AppResult<Vec<Item>> {
        self.repository.items_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn service() -> CatalogService {
        let repository = Repository::seeded(|p| Ok(p.to_string())).unwrap();
        CatalogService::new(repository, SearchConfig::default())
    }

    #[test]
    fn test_add_item_assigns_next_id() {
        let service = service();
        let item = service.add_item(CreateItem::new("T", "A", "G")).unwrap();
        assert_eq!(item.id, 6);
        assert!(item.available);

        let stock = service.list_stock().unwrap();
        assert_eq!(stock.len(), 6);
        assert_eq!(stock.iter().filter(|i| i.id == 6).count(), 1);
    }

    #[test]
    fn test_add_item_rejects_empty_fields() {
        let service = service();
        let err = service.add_item(CreateItem::new("", "A", "G")).unwrap_err();
        assert!(matches!(err, AppError::InvalidItem(ref msg) if msg.contains("title")));
        assert_eq!(service.list_stock().unwrap().len(), 5);
    }

    #[test]
    fn test_search_sees_new_items() {
        let service = service();
        assert_ne!(service.search("gardening").unwrap()[0].id, 6);

        service
            .add_item(CreateItem::new("Urban Gardening", "Sam Green", "Gardening"))
            .unwrap();
        let hits = service.search("gardening").unwrap();
        assert_eq!(hits[0].id, 6);
        assert!(hits.len() <= 3);
    }

    #[test]
    fn test_deep_learning_outranks_unrelated() {
        let hits = service().search_scored("deep learning").unwrap();
        let position = |id: i32| hits.iter().position(|h| h.item.id == id);
        assert!(matches!(hits[0].item.id, 3 | 5));
        assert!(position(2).map_or(true, |p| p > 0));
    }
}
