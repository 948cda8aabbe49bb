use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

use crate::core::catalog::run_query;
use crate::data::{default_categories, default_products};
use crate::models::{CatalogQuery, Category, Product, ALL_CATEGORIES};

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid record {record}: {source}")]
    Validation {
        record: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Duplicate product id: {0}")]
    DuplicateId(u32),

    #[error("Duplicate product slug: {0}")]
    DuplicateSlug(String),

    #[error("Product {product} uses unknown category {category}")]
    UnknownCategory { product: u32, category: String },
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
    #[serde(default = "default_categories")]
    categories: Vec<Category>,
}

/// Read-only product catalog
///
/// Built once at startup from the built-in dataset or a catalog file, and
/// only read afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Validate and wrap a product list
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        for category in &categories {
            category.validate().map_err(|source| CatalogError::Validation {
                record: format!("category {}", category.id),
                source,
            })?;
        }

        let known: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for product in &products {
            product.validate().map_err(|source| CatalogError::Validation {
                record: format!("product {}", product.id),
                source,
            })?;

            if !ids.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if !slugs.insert(product.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(product.slug.clone()));
            }
            if !known.contains(product.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    product: product.id,
                    category: product.category.clone(),
                });
            }
        }

        Ok(Self { products, categories })
    }

    /// The built-in kitchen catalog
    pub fn builtin() -> Self {
        Self {
            products: default_products(),
            categories: default_categories(),
        }
    }

    /// Load a catalog from a `.json` or `.toml` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;

        let file: CatalogFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&raw)?,
            Some("toml") => toml::from_str(&raw)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        let catalog = Self::new(file.products, file.categories)?;
        tracing::info!(
            "Loaded catalog from {} ({} products, {} categories)",
            path.display(),
            catalog.products.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise use the built-in catalog
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(path) if !path.is_empty() => Self::from_file(path),
            _ => {
                tracing::info!("No catalog path configured, using built-in catalog");
                Ok(Self::builtin())
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names for a filter bar, led by the "All" sentinel
    pub fn category_names(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.categories.iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// Category name for a slug, or "All" when the slug is unknown
    pub fn category_by_slug(&self, slug: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .map(|c| c.name.as_str())
            .unwrap_or(ALL_CATEGORIES)
    }

    pub fn product_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .collect()
    }

    /// Case-insensitive search over product name and category
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| crate::core::filters::matches_search(p, &needle))
            .collect()
    }

    pub fn query(&self, query: &CatalogQuery) -> Vec<Product> {
        run_query(&self.products, query)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
