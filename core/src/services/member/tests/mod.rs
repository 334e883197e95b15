//! Tests for the member directory service
