//! End-to-end tests at the request/response level.
//!
//! Each test file covers a specific scenario, driving the full pipeline
//! from raw request parameters to the serialized Turtle body.

#![cfg(test)]

mod helpers;

mod test_backend_failure;
mod test_empty_store;
mod test_fragment_basic;
mod test_hash_escaping;
mod test_idempotence;
mod test_literal_objects;
mod test_malformed_literal;
mod test_pagination;
mod test_pagination_boundary;
mod test_pattern_filtering;
mod test_search_template;
mod test_turtle_backend;
