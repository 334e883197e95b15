//! Tests for the reputation service

#[cfg(test)]
mod service_tests;
