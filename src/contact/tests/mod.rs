//! Unit tests for the contact module.
