//! Graph construction and representation
//!
//! The mutable [`builder::GraphBuilder`] collects vertices and edges; it is
//! frozen into a [`csr::CsrGraph`] before scoring.

pub mod builder;
pub mod csr;
