use crate::errors::CatalogueError;
use crate::forms::{ProductFilterInput, ProductSortInput, SortingOrder, SortingValue};
use crate::models::{Product, ProductCategory};
use serde_valid::Validate;
use std::cmp::Ordering;

/// A `products` request translated into store terms: the AND of all
/// predicates plus one sort key.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub categories: Vec<ProductCategory>,
    pub min_stars: f64,
    pub min_price: f64,
    pub max_price: Option<f64>,
    pub sort: ProductSortInput,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            categories: ProductCategory::ALL.to_vec(),
            min_stars: 0.0,
            min_price: 0.0,
            max_price: None,
            sort: ProductSortInput::default(),
        }
    }
}

impl ProductQuery {
    pub fn from_inputs(
        filter: Option<ProductFilterInput>,
        sort: Option<ProductSortInput>,
    ) -> Result<Self, CatalogueError> {
        let mut query = Self::default();

        if let Some(filter) = filter {
            filter.validate()?;

            if let Some(categories) = filter.categories {
                query.categories = categories;
            }
            query.min_stars = filter.min_stars.unwrap_or(0.0);
            query.min_price = filter.min_price.unwrap_or(0.0);
            query.max_price = filter.max_price;
        }

        if let Some(max_price) = query.max_price {
            if query.min_price > max_price {
                return Err(CatalogueError::Validation(format!(
                    "minPrice {} is greater than maxPrice {}",
                    query.min_price, max_price
                )));
            }
        }

        if let Some(sort) = sort {
            query.sort = sort;
        }

        Ok(query)
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.categories.contains(&product.category)
            && product.stars >= self.min_stars
            && product.price >= self.min_price
            && self.max_price.map_or(true, |max| product.price <= max)
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.sort.value {
            SortingValue::CreatedAt => a.created_at.cmp(&b.created_at),
            SortingValue::Price => a.price.total_cmp(&b.price),
        };

        match self.sort.order {
            SortingOrder::Asc => ordering,
            SortingOrder::Desc => ordering.reverse(),
        }
    }
}
