//! Similarity index: ranks catalog items against a free-text query.

pub mod tfidf;
pub(crate) mod tokenize;

use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::{
    config::SearchConfig,
    error::{AppError, AppResult},
    models::{Item, ItemShort},
};

pub use tfidf::TfidfModel;

/// Search hit with its cosine score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    pub item: ItemShort,
    pub score: f64,
}

#[derive(Debug)]
struct CachedModel {
    version: u64,
    model: Arc<TfidfModel>,
}

/// Fitted model cache keyed by catalog version. Clones share the cache.
#[derive(Debug, Clone, Default)]
pub struct SimilarityIndex {
    cache: Arc<Mutex<Option<CachedModel>>>,
}

impl SimilarityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank available items in `items` (the catalog snapshot at `version`)
    /// by similarity to `query`. Ties keep catalog order.
    pub fn rank(
        &self,
        items: &[Item],
        version: u64,
        query: &str,
        options: &SearchConfig,
    ) -> AppResult<Vec<ScoredItem>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let model = self.model_for(items, version)?;
        let scores = model.scores(query);

        let mut hits: Vec<ScoredItem> = items
            .iter()
            .zip(scores)
            .filter(|(item, _)| item.available)
            .filter(|(_, score)| !options.exclude_unrelated || *score > 0.0)
            .map(|(item, score)| ScoredItem {
                item: item.short(),
                score,
            })
            .collect();

        // sort_by is stable
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(options.max_results);

        tracing::debug!(query, hits = hits.len(), "Ranked catalog");
        Ok(hits)
    }

    fn model_for(&self, items: &[Item], version: u64) -> AppResult<Arc<TfidfModel>> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|_| AppError::Internal("search cache lock poisoned".to_string()))?;

        if let Some(cached) = cache.as_ref() {
            if cached.version == version && cached.model.document_count() == items.len() {
                return Ok(Arc::clone(&cached.model));
            }
        }

        let documents: Vec<String> = items.iter().map(Item::document).collect();
        let model = Arc::new(TfidfModel::fit(&documents));
        tracing::debug!(
            version,
            documents = model.document_count(),
            terms = model.vocabulary_len(),
            "Rebuilt similarity model"
        );

        *cache = Some(CachedModel {
            version,
            model: Arc::clone(&model),
        });
        Ok(model)
    }

    /// Version of the cached model, if any
    pub fn cached_version(&self) -> Option<u64> {
        self.cache
            .lock()
            .ok()
            .and_then(|cache| cache.as_ref().map(|c| c.version))
    }
}
