//! Core data models for extension specifications

pub mod specification;
pub mod message;

pub use specification::*;
pub use message::*;
