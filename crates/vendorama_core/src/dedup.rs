use std::collections::HashSet;

use crate::product::{Product, ProductKey};

/// Composite keys already merged into the current session.
///
/// Server pages overlap around boundaries; this set guarantees a key enters
/// the accumulated list at most once per session. Cleared on every session
/// replacement and on refresh, never between consecutive pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeenKeys {
    keys: HashSet<ProductKey>,
}

impl SeenKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first occurrence of each unseen key, in page order, and
    /// records the kept keys. Duplicates inside a single page collapse too.
    pub fn filter_new(&mut self, products: Vec<Product>) -> Vec<Product> {
        products
            .into_iter()
            .filter(|product| self.keys.insert(product.key))
            .collect()
    }

    pub fn contains(&self, key: ProductKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
