//! # imeopt-document
//!
//! A small arena tree standing in for a live document: element and text
//! nodes addressed by [`NodeId`], plus the queries the engines and the
//! optimizer need (tag lookup, label resolution, candidate fields).

pub mod document;
pub mod field;
pub mod node;

pub use document::Document;
pub use field::FieldRef;
pub use node::{Node, NodeId, NodeKind};
