// This file makes the screen modules available to the rest of the application.

pub mod article;
pub mod articles;
pub mod contact;
pub mod dog;
pub mod dogs;
pub mod home;
pub mod not_found;
pub mod product;
pub mod products;
