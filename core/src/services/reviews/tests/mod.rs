//! Tests for the review service
