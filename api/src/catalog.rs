//! Wire models for the dog and product catalogs.

use serde::Deserialize;
use serde::Serialize;

use crate::money::Price;

/// A dog listed for adoption/sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    pub id: String,
    pub name: String,
    pub breed_id: String,
    #[serde(default)]
    pub breed_name: Option<String>,
    pub gender: String,
    pub color: String,
    #[serde(default)]
    pub age_months: Option<u32>,
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A breed, used to populate the breed filter and to enrich dog cards
/// with a representative image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A store product (food, toys, accessories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A product category, used to populate the category filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dog_deserializes_with_string_price_and_missing_optionals() {
        let dog: Dog = serde_json::from_str(
            r#"{
                "id": "d-1",
                "name": "Milu",
                "breedId": "b-7",
                "gender": "male",
                "color": "Red",
                "price": "9000000"
            }"#,
        )
        .unwrap();
        assert_eq!(dog.price.base_units(), 9_000_000);
        assert_eq!(dog.breed_name, None);
    }
}
