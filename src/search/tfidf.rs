//! TF-IDF vector model with cosine scoring.
//!
//! Weights are raw term counts times a smoothed inverse document frequency,
//! `ln((1 + n) / (1 + df)) + 1`, and every vector is L2-normalized, so the
//! cosine of two vectors is their dot product.

use indexmap::IndexMap;
use std::collections::BTreeMap;

use super::tokenize::tokenize;

/// Sparse vector: (term index, weight), sorted by term index
pub(crate) type SparseVector = Vec<(usize, f64)>;

#[derive(Debug, Clone)]
pub struct TfidfModel {
    /// Term → idf; a term's position is its vector index
    vocabulary: IndexMap<String, f64>,
    documents: Vec<SparseVector>,
}

impl TfidfModel {
    /// Learn the vocabulary and weights from `documents` and vectorize them.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut doc_freq: IndexMap<String, usize> = IndexMap::new();
        for terms in &tokenized {
            let mut seen: Vec<&str> = terms.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let vocabulary = doc_freq
            .into_iter()
            .map(|(term, df)| {
                let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (term, idf)
            })
            .collect();

        let mut model = Self {
            vocabulary,
            documents: Vec::new(),
        };
        let documents: Vec<SparseVector> = tokenized.iter().map(|terms| model.vectorize(terms)).collect();
        model.documents = documents;
        model
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Project free text into the model's space. Unknown terms are ignored.
    pub(crate) fn transform(&self, text: &str) -> SparseVector {
        self.vectorize(&tokenize(text))
    }

    /// Cosine similarity of `query` against every fitted document, in document order.
    pub fn scores(&self, query: &str) -> Vec<f64> {
        let query = self.transform(query);
        self.documents.iter().map(|doc| cosine(&query, doc)).collect()
    }

    fn vectorize(&self, terms: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in terms {
            if let Some(index) = self.vocabulary.get_index_of(term.as_str()) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.vocabulary[index]))
            .collect();

        let norm = magnitude(&vector);
        if norm > 0.0 {
            for (_, weight) in &mut vector {
                *weight /= norm;
            }
        }
        vector
    }
}

fn magnitude(v: &[(usize, f64)]) -> f64 {
    v.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
}

/// Cosine similarity; 0 when either side has zero magnitude.
pub(crate) fn cosine(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (norm_a, norm_b) = (magnitude(a), magnitude(b));
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let (mut i, mut j, mut dot) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot / (norm_a * norm_b)
}
