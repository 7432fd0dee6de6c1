//! TF-IDF term index with cosine-similarity ranking.
//!
//! Each chunk becomes a sparse vector over a shared vocabulary. A
//! term's weight in a chunk is its raw count multiplied by a smoothed
//! inverse chunk frequency, `ln((1 + n) / (1 + df)) + 1`, and every
//! row is L2-normalized. Queries are weighted against the already-fit
//! vocabulary (unknown terms contribute nothing), so cosine similarity
//! reduces to a sparse dot product.
//!
//! The index is immutable: rebuilding from different chunks produces
//! a new value rather than updating the old one.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::core::error::{Result, StudyError};
use crate::core::search::analyzer::analyze;

/// Tolerance for score range checks
const SCORE_EPSILON: f32 = 1e-4;

/// Sparse, L2-normalized weight vector sorted by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f32)>,
}

impl SparseVector {
    fn from_weights(mut entries: Vec<(usize, f32)>) -> Self {
        entries.sort_by_key(|(col, _)| *col);
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            entries.iter_mut().for_each(|(_, w)| *w /= norm);
        }
        Self { entries }
    }

    /// Dot product by merging the two sorted column lists
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_col, a_w) = self.entries[i];
            let (b_col, b_w) = other.entries[j];
            match a_col.cmp(&b_col) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }
}

/// TF-IDF index over an ordered chunk list
#[derive(Debug, Clone)]
pub struct TermIndex {
    /// term -> column
    vocabulary: BTreeMap<String, usize>,
    /// column -> inverse chunk frequency
    idf: Vec<f32>,
    /// one row per chunk, in chunk order
    rows: Vec<SparseVector>,
}

impl TermIndex {
    /// Build an index from chunk texts.
    ///
    /// # Errors
    ///
    /// Returns [`StudyError::EmptyCorpus`] when `chunks` is empty.
    pub fn build<S: AsRef<str>>(chunks: &[S]) -> Result<Self> {
        if chunks.is_empty() {
            return Err(StudyError::EmptyCorpus);
        }

        let counts: Vec<HashMap<String, u32>> = chunks
            .iter()
            .map(|c| term_counts(analyze(c.as_ref())))
            .collect();

        let terms: BTreeSet<&String> = counts.iter().flat_map(|c| c.keys()).collect();
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();

        let mut df = vec![0u32; vocabulary.len()];
        for chunk_counts in &counts {
            for term in chunk_counts.keys() {
                if let Some(&col) = vocabulary.get(term) {
                    df[col] += 1;
                }
            }
        }

        let n = chunks.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let rows = counts
            .iter()
            .map(|chunk_counts| {
                let weights = chunk_counts
                    .iter()
                    .filter_map(|(term, &tf)| {
                        vocabulary.get(term).map(|&col| (col, tf as f32 * idf[col]))
                    })
                    .collect();
                SparseVector::from_weights(weights)
            })
            .collect();

        if vocabulary.is_empty() {
            tracing::warn!(
                "Index built over {} chunks with an empty vocabulary; all queries will score 0",
                chunks.len()
            );
        } else {
            tracing::debug!(
                "Built term index: {} chunks, {} terms",
                chunks.len(),
                vocabulary.len()
            );
        }

        Ok(Self {
            vocabulary,
            idf,
            rows,
        })
    }

    /// Number of indexed chunks (rows)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct terms
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse chunk frequency of a term, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|&col| self.idf[col])
    }

    /// Weight of `term` in the given chunk's normalized vector
    pub fn weight(&self, chunk_index: usize, term: &str) -> Option<f32> {
        let col = *self.vocabulary.get(term)?;
        let row = self.rows.get(chunk_index)?;
        row.entries
            .binary_search_by_key(&col, |(c, _)| *c)
            .ok()
            .map(|pos| row.entries[pos].1)
    }

    /// Weight a query against the fit vocabulary
    pub fn query_vector(&self, query: &str) -> SparseVector {
        let weights = term_counts(analyze(query))
            .into_iter()
            .filter_map(|(term, tf)| {
                self.vocabulary
                    .get(&term)
                    .map(|&col| (col, tf as f32 * self.idf[col]))
            })
            .collect();
        SparseVector::from_weights(weights)
    }

    /// Cosine similarity of the query against every chunk, in chunk order
    pub fn scores(&self, query: &str) -> Vec<f32> {
        let q = self.query_vector(query);
        self.rows.iter().map(|row| q.dot(row)).collect()
    }

    /// Rank chunks against `query` and return the top `k` as
    /// `(chunk_index, score)`, highest score first.
    ///
    /// Equal scores keep original chunk order, so a query with no
    /// vocabulary overlap returns the first `k` chunks.
    pub fn search(&self, query: &str, k: usize) -> Vec<(usize, f32)> {
        let mut ranked: Vec<(usize, f32)> = self.scores(query).into_iter().enumerate().collect();

        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(k);

        debug_assert!(ranked
            .iter()
            .all(|(_, s)| (-SCORE_EPSILON..=1.0 + SCORE_EPSILON).contains(s)));

        ranked
    }
}

fn term_counts(terms: Vec<String>) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}
