//! Items repository

use crate::{
    error::{AppError, AppResult},
    models::{CreateItem, Item},
};

use super::Repository;

impl Repository {
    /// All items in catalog order
    pub fn items_list(&self) -> AppResult<Vec<Item>> {
        Ok(self.read()?.items.clone())
    }

    /// Catalog version and items read under one guard
    pub fn items_snapshot(&self) -> AppResult<(u64, Vec<Item>)> {
        let store = self.read()?;
        Ok((store.version, store.items.clone()))
    }

    pub fn items_get_by_id(&self, id: i32) -> AppResult<Item> {
        self.read()?
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(AppError::ItemNotFound(id))
    }

    /// Append a new available item. Id is max existing + 1, or 1 for an empty catalog.
    pub fn items_create(&self, item: &CreateItem) -> AppResult<Item> {
        let mut store = self.write()?;
        let id = store.items.iter().map(|i| i.id).max().unwrap_or(0) + 1;

        let created = Item {
            id,
            title: item.title.clone(),
            author: item.author.clone(),
            genre: item.genre.clone(),
            available: true,
        };
        store.items.push(created.clone());
        store.version += 1;

        Ok(created)
    }
}
