// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod catalog;
pub mod search;

pub use catalog::*;
pub use search::*;
