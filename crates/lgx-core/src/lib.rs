//! # lgx-core
//!
//! Core types and error types for Logix.
//!
//! This crate provides the foundational types shared across all Logix crates:
//! - Entity structs for every back-office resource (orders, hubs, employees,
//!   customers, loaders, routes, organization, manifests, delivery run sheets)
//! - Status enums with state machine transitions
//! - Reference wrappers for ids the server may return populated
//! - Client-side form drafts and regex validation
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod forms;
pub mod identity;
pub mod refs;
pub mod responses;
pub mod validation;
