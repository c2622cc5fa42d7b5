//! # Log Statistics Reporter
//!
//! One-shot aggregate counts over pre-existing log documents in the
//! backing document store. The report is a fixed set of queries (total,
//! per HTTP method, status checks) with a fixed textual rendering.

pub mod report;

pub use report::{HttpMethod, LogReport, LogStats};
