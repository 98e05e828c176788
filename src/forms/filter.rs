use crate::models::ProductCategory;
use async_graphql::{Enum, InputObject};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate, InputObject)]
pub struct ProductFilterInput {
    pub categories: Option<Vec<ProductCategory>>, // all categories when omitted
    #[validate(minimum = 0.0)]
    pub min_stars: Option<f64>,
    #[validate(minimum = 0.0)]
    pub min_price: Option<f64>,
    #[validate(minimum = 0.0)]
    pub max_price: Option<f64>, // unbounded when omitted
}

#[derive(Enum, Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[graphql(rename_items = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum SortingValue {
    #[default]
    CreatedAt,
    Price,
}

#[derive(Enum, Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[graphql(rename_items = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum SortingOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, InputObject)]
pub struct ProductSortInput {
    pub value: SortingValue,
    pub order: SortingOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_bounds_are_rejected() {
        let filter = ProductFilterInput {
            min_price: Some(-1.0),
            ..Default::default()
        };
        assert!(filter.validate().is_err());

        let filter = ProductFilterInput {
            min_stars: Some(-0.5),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn default_sort_is_oldest_first() {
        let sort = ProductSortInput::default();
        assert_eq!(SortingValue::CreatedAt, sort.value);
        assert_eq!(SortingOrder::Asc, sort.order);
    }
}
