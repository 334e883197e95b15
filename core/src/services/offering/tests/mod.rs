//! Tests for the offering exchange service

#[cfg(test)]
mod service_tests;
