//! Cross-module tests and shared test doubles

pub mod support;
