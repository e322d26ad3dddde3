//! The WordNet lexical index.
//!
//! Maps nouns to the synsets (graph vertices) that contain them and answers
//! semantic distance queries by delegating to the [`Sap`](crate::sap::Sap)
//! engine built over the hypernym graph.

pub mod index;
pub mod record;
pub mod validate;

pub use index::{WordNet, WordNetStats};
pub use record::{Hypernym, Synset};
