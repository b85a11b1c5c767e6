//! Shared domain types and the REST client for the storefront backend.

pub mod article;
pub mod catalog;
pub mod client;
pub mod config;
pub mod contact;
pub mod currency;
pub mod filters;
pub mod money;
pub mod page;

pub use client::StoreClient;
pub use client::StoreError;
pub use filters::FilterState;
