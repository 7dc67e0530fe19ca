//! Traversal, classification and collection.
//!
//! ```text
//! RuleSet ─► classifier ─► scanner ─► ScanEvent ─► collector ─► CopyResult
//!                                                     │
//!                                          collision + copy
//! ```
//!
//! The scanner is a lazy iterator. It never copies anything itself and
//! never enters a directory that matched a folder rule, so the collector sees
//! every match exactly once.

/// Pure entry classification
pub mod classifier;

/// Lazy multi-root directory walk
pub mod scanner;

/// File and folder collection into the findings directory
pub mod collector;

/// Collision-free destination naming
pub mod collision;

/// Metadata-preserving copy primitives
pub mod copy;

/// Permission error tracking and reporting
pub mod permission_tracker;
