use std::collections::HashMap;

use crate::product::StoreProduct;

/// Products returned by the store layer, keyed by store product identifier.
///
/// One identifier may map to several descriptors (e.g. one per base plan of a
/// subscription).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products_by_id: HashMap<String, Vec<StoreProduct>>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product under `identifier`, keeping earlier entries first.
    pub fn insert(&mut self, identifier: impl Into<String>, product: StoreProduct) {
        self.products_by_id
            .entry(identifier.into())
            .or_default()
            .push(product);
    }

    pub fn with_product(mut self, identifier: impl Into<String>, product: StoreProduct) -> Self {
        self.insert(identifier, product);
        self
    }

    /// All products listed for `identifier`; empty if none.
    pub fn lookup_products(&self, identifier: &str) -> &[StoreProduct] {
        self.products_by_id
            .get(identifier)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct product identifiers.
    pub fn len(&self) -> usize {
        self.products_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products_by_id.is_empty()
    }
}

impl From<HashMap<String, Vec<StoreProduct>>> for ProductCatalog {
    fn from(products_by_id: HashMap<String, Vec<StoreProduct>>) -> Self {
        Self { products_by_id }
    }
}

impl FromIterator<StoreProduct> for ProductCatalog {
    /// Index products by the part of their id before any `:` separator, so
    /// `"pro:monthly"` and `"pro:annual"` both land under `"pro"`.
    fn from_iter<I: IntoIterator<Item = StoreProduct>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for product in iter {
            let key = product
                .id
                .split_once(':')
                .map(|(id, _)| id.to_string())
                .unwrap_or_else(|| product.id.clone());
            catalog.insert(key, product);
        }
        catalog
    }
}
