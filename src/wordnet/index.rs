//! Noun to synset index over a validated hypernym graph.

use std::path::Path;

use ahash::AHashMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordNetError};
use crate::graph::digraph::Digraph;
use crate::loader::{self, LoaderConfig};
use crate::sap::{CacheStats, Sap, SapConfig};
use crate::wordnet::record::{Hypernym, Synset};
use crate::wordnet::validate;

/// Summary of a loaded index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordNetStats {
    pub synsets: usize,
    pub nouns: usize,
    pub hypernym_edges: usize,
    pub root: usize,
    pub root_label: String,
    pub cache: CacheStats,
}

/// The WordNet lexical index.
///
/// Built once from synset and hypernym records, read-only afterwards. The
/// hypernym graph is checked to be a rooted DAG before the index is returned,
/// so a constructed `WordNet` always has a common ancestor for any two nouns.
#[derive(Debug)]
pub struct WordNet {
    labels: Vec<String>,
    noun_ids: AHashMap<String, Vec<usize>>,
    root: usize,
    sap: Sap,
}

impl WordNet {
    /// Build the index with the default SAP configuration.
    pub fn from_records<S, H>(synsets: S, hypernyms: H) -> Result<Self>
    where
        S: IntoIterator<Item = Synset>,
        H: IntoIterator<Item = Hypernym>,
    {
        Self::with_config(synsets, hypernyms, SapConfig::default())
    }

    /// Build the index with a custom SAP configuration.
    pub fn with_config<S, H>(synsets: S, hypernyms: H, config: SapConfig) -> Result<Self>
    where
        S: IntoIterator<Item = Synset>,
        H: IntoIterator<Item = Hypernym>,
    {
        let synsets: Vec<Synset> = synsets.into_iter().collect();
        let vertex_count = synsets.len();

        let mut labels: Vec<Option<String>> = vec![None; vertex_count];
        let mut noun_ids: AHashMap<String, Vec<usize>> = AHashMap::new();

        for synset in synsets {
            let id = synset.id;
            let slot = labels.get_mut(id).ok_or_else(|| {
                WordNetError::invalid_argument(format!(
                    "synset id {id} is not between 0 and {}",
                    vertex_count.saturating_sub(1)
                ))
            })?;
            if slot.is_some() {
                return Err(WordNetError::invalid_argument(format!(
                    "duplicate synset id {id}"
                )));
            }

            for noun in synset.nouns() {
                let ids = noun_ids.entry(noun.to_string()).or_default();
                if ids.last() != Some(&id) {
                    ids.push(id);
                }
            }
            *slot = Some(synset.label);
        }

        // Every slot is filled: ids are unique and in range, and there are
        // exactly `vertex_count` of them.
        let labels: Vec<String> = labels.into_iter().flatten().collect();

        let mut graph = Digraph::new(vertex_count);
        for record in hypernyms {
            for &hypernym in &record.hypernyms {
                graph.add_edge(record.id, hypernym)?;
            }
        }

        let root = validate::rooted_dag(&graph)?;
        info!(
            "Loaded {} synsets, {} nouns, {} hypernym edges (root {})",
            vertex_count,
            noun_ids.len(),
            graph.edge_count(),
            root
        );

        Ok(WordNet {
            labels,
            noun_ids,
            root,
            sap: Sap::with_config(graph, config),
        })
    }

    /// Load the index from a synsets file and a hypernyms file.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(synsets: P, hypernyms: Q) -> Result<Self> {
        Self::open_with_config(synsets, hypernyms, &LoaderConfig::default(), SapConfig::default())
    }

    /// Load the index from files using explicit loader and SAP settings.
    pub fn open_with_config<P: AsRef<Path>, Q: AsRef<Path>>(
        synsets: P,
        hypernyms: Q,
        loader_config: &LoaderConfig,
        sap_config: SapConfig,
    ) -> Result<Self> {
        debug!(
            "Opening WordNet from {} and {}",
            synsets.as_ref().display(),
            hypernyms.as_ref().display()
        );
        let synsets = loader::load_synsets_from_path(synsets, loader_config)?;
        let hypernyms = loader::load_hypernyms_from_path(hypernyms, loader_config)?;
        Self::with_config(synsets, hypernyms, sap_config)
    }

    /// All distinct nouns, in no particular order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.noun_ids.keys().map(String::as_str)
    }

    /// Whether `word` is a WordNet noun.
    pub fn is_noun(&self, word: &str) -> bool {
        self.noun_ids.contains_key(word)
    }

    /// Synset ids containing `noun`.
    pub fn synsets_of(&self, noun: &str) -> Option<&[usize]> {
        self.noun_ids.get(noun).map(Vec::as_slice)
    }

    /// The synonym list of synset `id`.
    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Number of synsets (graph vertices).
    pub fn synset_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct nouns.
    pub fn noun_count(&self) -> usize {
        self.noun_ids.len()
    }

    /// The single synset with no hypernym.
    pub fn root(&self) -> usize {
        self.root
    }

    /// The SAP engine over the hypernym graph.
    pub fn sap_engine(&self) -> &Sap {
        &self.sap
    }

    /// Semantic distance: length of the shortest ancestral path between any
    /// synset of `noun_a` and any synset of `noun_b`.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> Result<i64> {
        let (a, b) = self.noun_pair(noun_a, noun_b)?;
        self.sap.length_sets(a, b)
    }

    /// Label of the common ancestor on a shortest ancestral path between the
    /// two nouns.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> Result<&str> {
        let (a, b) = self.noun_pair(noun_a, noun_b)?;
        let ancestry = self.sap.ancestry_sets(a, b)?;
        ancestry
            .ancestor_id()
            .and_then(|id| self.label(id))
            .ok_or_else(|| {
                WordNetError::other(format!(
                    "no common ancestor for '{noun_a}' and '{noun_b}'"
                ))
            })
    }

    /// Index and cache statistics.
    pub fn stats(&self) -> WordNetStats {
        WordNetStats {
            synsets: self.synset_count(),
            nouns: self.noun_count(),
            hypernym_edges: self.sap.graph().edge_count(),
            root: self.root,
            root_label: self.labels[self.root].clone(),
            cache: self.sap.cache_stats(),
        }
    }

    fn noun_pair(&self, noun_a: &str, noun_b: &str) -> Result<(&[usize], &[usize])> {
        let a = self.synsets_of(noun_a).ok_or_else(|| not_a_noun(noun_a))?;
        let b = self.synsets_of(noun_b).ok_or_else(|| not_a_noun(noun_b))?;
        Ok((a, b))
    }
}

fn not_a_noun(word: &str) -> WordNetError {
    WordNetError::invalid_argument(format!("'{word}' is not a WordNet noun"))
}
