//! Utility functions for reporting on a finished collection.

/// Run summary generation and reporting
pub mod summary;
