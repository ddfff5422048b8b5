//! Core types shared across coursewatch facilities
//!
//! This crate provides the small vocabulary used by both the error and
//! logging facilities:
//!
//! - **Correlation**: `RunId`, one per watch cycle
//! - **Sensitive data**: `Sensitive<T>` marker for credentials
//! - **Schema constants**: canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RunId;
pub use sensitive::Sensitive;
