//! Crate-internal tests that exercise several modules together.
