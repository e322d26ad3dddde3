//! Input records delivered by the loader.

use serde::{Deserialize, Serialize};

/// One synset: a vertex id and its space-separated synonym list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    pub id: usize,
    pub label: String,
    #[serde(default)]
    pub gloss: String,
}

impl Synset {
    /// A synset with no gloss.
    pub fn new<S: Into<String>>(id: usize, label: S) -> Self {
        Synset {
            id,
            label: label.into(),
            gloss: String::new(),
        }
    }

    /// Attach a gloss. The index ignores it; it is kept for display.
    pub fn with_gloss<S: Into<String>>(mut self, gloss: S) -> Self {
        self.gloss = gloss.into();
        self
    }

    /// The nouns making up this synset.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.label.split_whitespace()
    }
}

/// The hypernyms of one synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypernym {
    pub id: usize,
    pub hypernyms: Vec<usize>,
}

impl Hypernym {
    /// Synset `id` and the ids of its hypernyms; empty for the root.
    pub fn new(id: usize, hypernyms: Vec<usize>) -> Self {
        Hypernym { id, hypernyms }
    }
}
