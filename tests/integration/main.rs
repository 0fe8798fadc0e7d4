//! HTTP-level tests for the catalog API.

mod helpers;
mod postgres_test;
mod product_test;
mod seed_test;
