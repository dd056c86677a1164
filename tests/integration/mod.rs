//! Integration Tests Module
//!
//! Exercises the public API of the prompt modes library: response formatting
//! and the mode registry with its permission checks.

// Response formatter tests
mod responses_test;

// Mode registry and permission tests
mod modes_test;
