//! # WordNet
//!
//! Semantic relatedness over the WordNet noun hierarchy.
//!
//! ## Features
//!
//! - Shortest ancestral path (SAP) queries between vertices or vertex sets
//! - Memoization of single-vertex queries keyed by unordered pair
//! - Lexical index from nouns to synsets with rooted-DAG validation
//! - Outcast detection over noun lists
//! - Reader for the synset/hypernym text format
//!
//! ```
//! use wordnet::outcast::Outcast;
//! use wordnet::wordnet::{Hypernym, Synset, WordNet};
//!
//! let synsets = vec![
//!     Synset::new(0, "entity"),
//!     Synset::new(1, "horse"),
//!     Synset::new(2, "zebra"),
//!     Synset::new(3, "table"),
//!     Synset::new(4, "equine"),
//! ];
//! let hypernyms = vec![
//!     Hypernym::new(1, vec![4]),
//!     Hypernym::new(2, vec![4]),
//!     Hypernym::new(3, vec![0]),
//!     Hypernym::new(4, vec![0]),
//! ];
//! let wordnet = WordNet::from_records(synsets, hypernyms).unwrap();
//!
//! assert_eq!(wordnet.distance("horse", "zebra").unwrap(), 2);
//! assert_eq!(wordnet.sap("horse", "zebra").unwrap(), "equine");
//!
//! let outcast = Outcast::new(&wordnet).outcast(&["horse", "zebra", "table"]).unwrap();
//! assert_eq!(outcast.as_deref(), Some("table"));
//! ```

pub mod cli;
pub mod error;
pub mod graph;
pub mod loader;
pub mod outcast;
pub mod sap;
pub mod wordnet;

pub mod prelude {
    pub use crate::error::{Result, WordNetError};
    pub use crate::outcast::Outcast;
    pub use crate::sap::{Ancestry, Sap, SapConfig};
    pub use crate::wordnet::{Hypernym, Synset, WordNet};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
