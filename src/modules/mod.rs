//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the relational datastore shared by the intake and lookup features.

pub mod datastore;
