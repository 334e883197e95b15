//! Tests for the job lifecycle service
