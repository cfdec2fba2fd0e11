//! Unit tests for analytics engine components

pub mod risk_tests;
