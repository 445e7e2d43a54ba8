//! Knowledge accumulation and candidate filtering
//!
//! A `KnowledgeBase` records what feedback revealed about a target; `filter`
//! narrows a vocabulary pool down to the words still consistent with it.

mod base;
mod filter;

pub use base::{FactStatus, KnowledgeBase, PositionalFact};
pub use filter::filter;
