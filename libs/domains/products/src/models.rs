use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};

/// Audience a product is sold to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Gender {
    Men,
    Women,
    Kids,
    Unisex,
}

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Free-text category
    pub category: String,
    /// Product description
    pub description: String,
    /// Target audience
    pub gender: Gender,
    /// Available sizes, in submission order
    pub sizes: Vec<String>,
    /// Available colors, in submission order
    pub colors: Vec<String>,
    /// Unit price
    pub price: f64,
    /// Current stock quantity
    pub stock: i32,
    /// Units sold so far
    #[serde(default)]
    pub sold_count: i32,
    /// Aggregate review score
    #[serde(default)]
    pub rating: f64,
    /// Durable public image URLs, in upload order; non-empty at creation
    pub images: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Raw text fields of a product create form, before parsing
#[derive(Debug, Clone)]
pub struct ProductSubmission {
    pub name: String,
    pub brand: String,
    pub description: String,
    pub colors: String,
    pub sizes: String,
    pub gender: String,
    pub price: String,
    pub category: String,
    pub stock: String,
}

/// Raw text fields of a product update form.
///
/// Updates are a full overwrite: the create fields are all required again,
/// plus the counters that creates initialize to zero.
#[derive(Debug, Clone)]
pub struct ProductRevision {
    pub name: String,
    pub brand: String,
    pub description: String,
    pub colors: String,
    pub sizes: String,
    pub gender: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub sold_count: String,
    pub rating: String,
}

/// Parsed input for creating a product
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub gender: Gender,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub price: f64,
    pub stock: i32,
    pub images: Vec<String>,
}

/// Parsed input for overwriting a product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOverwrite {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub gender: Gender,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub price: f64,
    pub stock: i32,
    pub sold_count: i32,
    pub rating: f64,
    pub images: Vec<String>,
}

/// Split a comma-delimited field into tokens.
///
/// Tokens are trimmed, empty tokens are dropped, and duplicates are
/// rejected. Order is preserved.
pub fn tokenize_list(field: &'static str, raw: &str) -> ProductResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if !seen.insert(token.to_string()) {
            return Err(ProductError::Validation(format!(
                "Duplicate {} entry: '{}'",
                field, token
            )));
        }
        tokens.push(token.to_string());
    }

    Ok(tokens)
}

fn parse_gender(raw: &str) -> ProductResult<Gender> {
    raw.trim()
        .parse()
        .map_err(|_| ProductError::Validation(format!("Invalid gender '{}'", raw.trim())))
}

fn parse_decimal(field: &'static str, raw: &str) -> ProductResult<f64> {
    let value: f64 = raw.trim().parse().map_err(|e| ProductError::Parse {
        field,
        details: format!("{}", e),
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(ProductError::Parse {
            field,
            details: format!("must be a non-negative number, got '{}'", raw.trim()),
        });
    }

    Ok(value)
}

fn parse_quantity(field: &'static str, raw: &str) -> ProductResult<i32> {
    let value: i32 = raw.trim().parse().map_err(|e| ProductError::Parse {
        field,
        details: format!("{}", e),
    })?;

    if value < 0 {
        return Err(ProductError::Parse {
            field,
            details: format!("must be non-negative, got '{}'", raw.trim()),
        });
    }

    Ok(value)
}

impl ProductSubmission {
    /// Parse the raw form fields, attaching the uploaded image URLs.
    pub fn into_new_product(self, images: Vec<String>) -> ProductResult<NewProduct> {
        Ok(NewProduct {
            gender: parse_gender(&self.gender)?,
            sizes: tokenize_list("sizes", &self.sizes)?,
            colors: tokenize_list("colors", &self.colors)?,
            price: parse_decimal("price", &self.price)?,
            stock: parse_quantity("stock", &self.stock)?,
            name: self.name,
            brand: self.brand,
            category: self.category,
            description: self.description,
            images,
        })
    }
}

impl ProductRevision {
    /// Parse the raw form fields into a full-field overwrite.
    pub fn into_overwrite(self, images: Vec<String>) -> ProductResult<ProductOverwrite> {
        Ok(ProductOverwrite {
            gender: parse_gender(&self.gender)?,
            sizes: tokenize_list("sizes", &self.sizes)?,
            colors: tokenize_list("colors", &self.colors)?,
            price: parse_decimal("price", &self.price)?,
            stock: parse_quantity("stock", &self.stock)?,
            sold_count: parse_quantity("sold_count", &self.sold_count)?,
            rating: parse_decimal("rating", &self.rating)?,
            name: self.name,
            brand: self.brand,
            category: self.category,
            description: self.description,
            images,
        })
    }
}

impl Product {
    /// Create a new product from parsed input.
    ///
    /// The id is assigned here; sold count and rating start at zero.
    pub fn new(input: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            brand: input.brand,
            category: input.category,
            description: input.description,
            gender: input.gender,
            sizes: input.sizes,
            colors: input.colors,
            price: input.price,
            stock: input.stock,
            sold_count: 0,
            rating: 0.0,
            images: input.images,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a full-field overwrite, keeping id and created_at.
    pub fn apply_overwrite(&mut self, input: ProductOverwrite) {
        self.name = input.name;
        self.brand = input.brand;
        self.category = input.category;
        self.description = input.description;
        self.gender = input.gender;
        self.sizes = input.sizes;
        self.colors = input.colors;
        self.price = input.price;
        self.stock = input.stock;
        self.sold_count = input.sold_count;
        self.rating = input.rating;
        self.images = input.images;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ProductSubmission {
        ProductSubmission {
            name: "Shirt".to_string(),
            brand: "Acme".to_string(),
            description: "A shirt".to_string(),
            colors: "red,blue".to_string(),
            sizes: "S,M".to_string(),
            gender: "men".to_string(),
            price: "19.99".to_string(),
            category: "tops".to_string(),
            stock: "5".to_string(),
        }
    }

    #[test]
    fn test_tokenize_preserves_order() {
        let tokens = tokenize_list("colors", "red,blue,green").unwrap();
        assert_eq!(tokens, vec!["red", "blue", "green"]);
    }

    #[test]
    fn test_tokenize_trims_and_drops_empty() {
        let tokens = tokenize_list("colors", " red ,, blue ,").unwrap();
        assert_eq!(tokens, vec!["red", "blue"]);
    }

    #[test]
    fn test_tokenize_rejects_duplicates() {
        let err = tokenize_list("colors", "red,red").unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[test]
    fn test_into_new_product_parses_numbers() {
        let product = submission().into_new_product(vec!["u1".into(), "u2".into()]).unwrap();
        assert_eq!(product.price, 19.99);
        assert_eq!(product.stock, 5);
        assert_eq!(product.gender, Gender::Men);
        assert_eq!(product.images.len(), 2);
    }

    #[test]
    fn test_into_new_product_rejects_bad_price() {
        let mut sub = submission();
        sub.price = "cheap".to_string();
        let err = sub.into_new_product(vec!["u1".into()]).unwrap_err();
        assert!(matches!(err, ProductError::Parse { field: "price", .. }));
    }

    #[test]
    fn test_into_new_product_rejects_negative_stock() {
        let mut sub = submission();
        sub.stock = "-2".to_string();
        let err = sub.into_new_product(vec!["u1".into()]).unwrap_err();
        assert!(matches!(err, ProductError::Parse { field: "stock", .. }));
    }

    #[test]
    fn test_into_new_product_rejects_unknown_gender() {
        let mut sub = submission();
        sub.gender = "martian".to_string();
        let err = sub.into_new_product(vec!["u1".into()]).unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[test]
    fn test_new_product_defaults() {
        let product = Product::new(
            submission()
                .into_new_product(vec!["https://cdn.example.com/a.png".into()])
                .unwrap(),
        );
        assert_eq!(product.sold_count, 0);
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_apply_overwrite_keeps_identity() {
        let mut product = Product::new(submission().into_new_product(vec!["u1".into()]).unwrap());
        let id = product.id;
        let created_at = product.created_at;

        let revision = ProductRevision {
            name: "Better Shirt".to_string(),
            brand: "Acme".to_string(),
            description: "A better shirt".to_string(),
            colors: "green".to_string(),
            sizes: "L".to_string(),
            gender: "unisex".to_string(),
            price: "25".to_string(),
            category: "tops".to_string(),
            stock: "3".to_string(),
            sold_count: "7".to_string(),
            rating: "4.5".to_string(),
        };
        product.apply_overwrite(revision.into_overwrite(vec!["u2".into()]).unwrap());

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.name, "Better Shirt");
        assert_eq!(product.sold_count, 7);
        assert_eq!(product.rating, 4.5);
        assert_eq!(product.images, vec!["u2"]);
    }

    #[test]
    fn test_gender_parse_case_insensitive() {
        assert_eq!("Men".parse::<Gender>().unwrap(), Gender::Men);
        assert_eq!("UNISEX".parse::<Gender>().unwrap(), Gender::Unisex);
    }
}
