//! The typed REST client for the storefront backend.
//!
//! Every listing call builds its request parameters from the current
//! [`FilterState`] through a per-endpoint mapping table and normalizes the
//! response into a [`PageResult`] before anything else sees it. Errors from
//! transport, status and body shape collapse into one [`StoreError`] that
//! screens render as a plain string.

use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::article::Article;
use crate::catalog::Breed;
use crate::catalog::Category;
use crate::catalog::Dog;
use crate::catalog::Product;
use crate::contact::ContactRequest;
use crate::contact::NewsletterRequest;
use crate::filters::FilterState;
use crate::page::ListingBody;
use crate::page::PageResult;

/// Items per page on the dogs grid.
pub const DOGS_PAGE_LIMIT: u32 = 9;
/// Items per page on the products grid.
pub const PRODUCTS_PAGE_LIMIT: u32 = 12;
/// Items per page on the articles list.
pub const ARTICLES_PAGE_LIMIT: u32 = 6;

/// `(our filter key, backend parameter name)` for the dogs listing.
const DOG_PARAMS: &[(&str, &str)] = &[
    ("breedId", "breedId"),
    ("gender", "gender"),
    ("color", "color"),
    ("minPrice", "minPrice"),
    ("maxPrice", "maxPrice"),
];

/// `(our filter key, backend parameter name)` for the products listing.
const PRODUCT_PARAMS: &[(&str, &str)] = &[
    ("category", "category"),
    ("size", "size"),
    ("minPrice", "minPrice"),
    ("maxPrice", "maxPrice"),
];

/// `(our filter key, backend parameter name)` for the articles listing.
const ARTICLE_PARAMS: &[(&str, &str)] = &[("q", "search")];

/// An error from any storefront API call.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status} for {path}")]
    Status { status: StatusCode, path: String },
    #[error("unexpected response shape from {path}: {source}")]
    Shape {
        path: String,
        source: serde_json::Error,
    },
}

/// A thin, cloneable handle to the backend.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        tracing::info!("storefront api at {base_url}");
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    // --- listings -----------------------------------------------------

    pub async fn dogs(&self, filters: &FilterState) -> Result<PageResult<Dog>, StoreError> {
        let params = list_params(filters, DOGS_PAGE_LIMIT, DOG_PARAMS);
        let body: ListingBody<Dog> = self.get_json("dogs", &params).await?;
        Ok(body.into())
    }

    pub async fn products(&self, filters: &FilterState) -> Result<PageResult<Product>, StoreError> {
        let params = list_params(filters, PRODUCTS_PAGE_LIMIT, PRODUCT_PARAMS);
        let body: ListingBody<Product> = self.get_json("products", &params).await?;
        Ok(body.into())
    }

    pub async fn articles(&self, filters: &FilterState) -> Result<PageResult<Article>, StoreError> {
        let params = list_params(filters, ARTICLES_PAGE_LIMIT, ARTICLE_PARAMS);
        let body: ListingBody<Article> = self.get_json("articles", &params).await?;
        Ok(body.into())
    }

    // --- single resources ---------------------------------------------

    pub async fn dog(&self, id: &str) -> Result<Dog, StoreError> {
        self.get_json(&format!("dogs/{id}"), &[]).await
    }

    pub async fn product(&self, id: &str) -> Result<Product, StoreError> {
        self.get_json(&format!("products/{id}"), &[]).await
    }

    pub async fn article(&self, id: &str) -> Result<Article, StoreError> {
        self.get_json(&format!("articles/{id}"), &[]).await
    }

    // --- reference data -----------------------------------------------

    pub async fn breeds(&self) -> Result<Vec<Breed>, StoreError> {
        self.get_json("breeds", &[]).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.get_json("categories", &[]).await
    }

    // --- forms --------------------------------------------------------

    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<(), StoreError> {
        self.post_json("contacts", request).await
    }

    pub async fn subscribe(&self, email: &str) -> Result<(), StoreError> {
        let request = NewsletterRequest {
            email: email.to_string(),
        };
        self.post_json("newsletter", &request).await
    }

    // --- plumbing -----------------------------------------------------

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, StoreError> {
        let response = self
            .http
            .get(self.url_for(path))
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {path} returned {status}");
            return Err(StoreError::Status {
                status,
                path: path.to_string(),
            });
        }

        // Decode via text so a malformed body is distinguishable from a
        // transport failure.
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| StoreError::Shape {
            path: path.to_string(),
            source,
        })
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), StoreError> {
        let response = self.http.post(self.url_for(path)).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("POST {path} returned {status}");
            return Err(StoreError::Status {
                status,
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for StoreClient {
    fn default() -> Self {
        Self::new(crate::config::api_base_url())
    }
}

/// Builds the request parameters for a listing call: page, limit, then every
/// active filter key mapped to its backend name (multi-valued keys repeat).
fn list_params(
    filters: &FilterState,
    limit: u32,
    mapping: &[(&str, &str)],
) -> Vec<(String, String)> {
    let mut params = vec![
        ("page".to_string(), filters.page().to_string()),
        ("limit".to_string(), limit.to_string()),
    ];
    for (ours, theirs) in mapping {
        for value in filters.get_all(ours) {
            params.push((theirs.to_string(), value.to_string()));
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_carry_page_limit_and_mapped_filters() {
        let filters =
            FilterState::parse("color=Red&color=Blue&gender=male&page=3&unrelated=zzz");
        let params = list_params(&filters, DOGS_PAGE_LIMIT, DOG_PARAMS);
        assert_eq!(params[0], ("page".to_string(), "3".to_string()));
        assert_eq!(params[1], ("limit".to_string(), "9".to_string()));
        assert!(params.contains(&("gender".to_string(), "male".to_string())));
        assert!(params.contains(&("color".to_string(), "Red".to_string())));
        assert!(params.contains(&("color".to_string(), "Blue".to_string())));
        // keys outside the endpoint's mapping never leak into the request
        assert!(!params.iter().any(|(k, _)| k == "unrelated"));
    }

    #[test]
    fn article_search_maps_to_the_backend_name() {
        let filters = FilterState::parse("q=nutrition");
        let params = list_params(&filters, ARTICLES_PAGE_LIMIT, ARTICLE_PARAMS);
        assert!(params.contains(&("search".to_string(), "nutrition".to_string())));
        assert!(!params.iter().any(|(k, _)| k == "q"));
    }

    #[test]
    fn missing_page_defaults_to_one_in_the_request() {
        let filters = FilterState::parse("category=food");
        let params = list_params(&filters, PRODUCTS_PAGE_LIMIT, PRODUCT_PARAMS);
        assert_eq!(params[0], ("page".to_string(), "1".to_string()));
    }
}
