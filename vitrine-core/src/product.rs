//! Product records and the display catalog

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single showcased product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Pre-formatted display price, e.g. "$149.99"
    pub price: String,
    /// Path to the product's 3D scene bundle, relative to the asset root
    pub model_path: PathBuf,
}

/// The fixed, ordered list of showcased products
///
/// Insertion order is display order and drives carousel index semantics.
/// A catalog is never empty; all index access clamps to `[0, len - 1]`.
/// Serialized as a plain product list; deserialization runs the same
/// non-empty check as [`Catalog::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = Error;

    fn try_from(products: Vec<Product>) -> Result<Self> {
        Self::new(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}

impl Catalog {
    /// Create a catalog. Fails on an empty product list.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        if products.is_empty() {
            return Err(Error::InvalidData("catalog must not be empty".to_string()));
        }
        Ok(Self { products })
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false; kept for idiomatic completeness alongside `len`
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Clamp an index into the valid range
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.products.len() - 1)
    }

    /// Product at `index`, clamped to the valid range
    pub fn get(&self, index: usize) -> &Product {
        &self.products[self.clamp_index(index)]
    }

    /// Iterate over products in display order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}
