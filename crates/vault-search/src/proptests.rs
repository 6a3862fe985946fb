//! Property-based tests for filtering and the controller.
