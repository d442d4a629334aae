//! REST API endpoint tests

mod health_tests;
mod product_tests;
