//! Outcast detection: the noun least related to the others in a list.

use crate::error::Result;
use crate::wordnet::WordNet;

/// Finds the outcast of a noun list by summed WordNet distance.
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Outcast { wordnet }
    }

    /// Sum of distances from each noun to every noun in the list, itself included.
    pub fn scores<S: AsRef<str>>(&self, nouns: &[S]) -> Result<Vec<(String, i64)>> {
        nouns
            .iter()
            .map(|candidate| -> Result<(String, i64)> {
                let candidate = candidate.as_ref();
                let mut total = 0;
                for other in nouns {
                    total += self.wordnet.distance(candidate, other.as_ref())?;
                }
                Ok((candidate.to_string(), total))
            })
            .collect()
    }

    /// The noun with the largest summed distance.
    ///
    /// Ties go to the earliest noun in input order. Returns `None` for an
    /// empty list; unknown nouns are an invalid-argument error.
    ///
    /// The first noun is always a candidate, so a list whose sums are all
    /// zero (a single noun, or synonyms of one synset) returns its first
    /// noun rather than nothing.
    pub fn outcast<S: AsRef<str>>(&self, nouns: &[S]) -> Result<Option<String>> {
        let scores = self.scores(nouns)?;
        Ok(pick_outcast(&scores).map(str::to_string))
    }
}

/// The outcast among precomputed `(noun, summed distance)` scores, under the
/// same tie rule as [`Outcast::outcast`].
pub fn pick_outcast(scores: &[(String, i64)]) -> Option<&str> {
    let mut best: Option<&(String, i64)> = None;
    for score in scores {
        if best.is_none_or(|(_, max)| score.1 > *max) {
            best = Some(score);
        }
    }
    best.map(|(noun, _)| noun.as_str())
}
