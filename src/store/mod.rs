//! Backing store layer: the flat reference-compressed array and its resolver.
//!
//! The execution log is a JSON array where any all-digit string stands for
//! "the element at this index". This module owns:
//! - Node (tagged view of a raw value: reference, mapping, sequence, literal)
//! - Resolver (shallow + deep dereferencing with cache and cycle guard)
//! - Sentinel (in-band placeholders for cycles and depth overflow)

pub mod node;
pub mod resolver;
pub mod sentinel;

pub use node::{Node, is_truthy};
pub use resolver::Resolver;
pub use sentinel::Sentinel;
