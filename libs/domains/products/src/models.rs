use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: i32,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Units in stock
    pub stock: i32,
    /// Identity of the owning category
    pub category_id: i32,
}

/// DTO for creating or replacing a product
///
/// The same shape serves both POST and PUT: updates are a full replace of
/// the mutable fields, not a partial patch.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// Unit price, must be strictly greater than zero
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock: i32,
    /// Positive-identity sanity check only; existence is verified separately
    #[validate(range(min = 1))]
    pub category_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ProductInput {
        ProductInput {
            name: "Laptop".to_string(),
            description: "High-end laptop".to_string(),
            price: 1500.0,
            stock: 10,
            category_id: 1,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let input = ProductInput {
            name: String::new(),
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_empty_description_rejected() {
        let input = ProductInput {
            description: String::new(),
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_zero_price_rejected() {
        let input = ProductInput {
            price: 0.0,
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_negative_stock_rejected() {
        let input = ProductInput {
            stock: -1,
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("stock"));
    }

    #[test]
    fn test_non_positive_category_rejected() {
        let input = ProductInput {
            category_id: 0,
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category_id"));
    }

    #[test]
    fn test_violations_accumulate_per_field() {
        let input = ProductInput {
            name: String::new(),
            description: String::new(),
            price: -5.0,
            stock: -1,
            category_id: 0,
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 5);
    }
}
