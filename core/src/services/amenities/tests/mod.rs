//! Tests for the amenity service
