//! Tests for the place service

#[cfg(test)]
mod service_tests;
