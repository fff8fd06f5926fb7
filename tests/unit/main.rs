//! Unit test suite entry point.

mod error_tests;
mod parse_tests;
mod store_tests;
