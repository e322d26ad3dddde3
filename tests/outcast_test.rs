//! Outcast detection over the sample data and, when available, the full corpus.

use std::fs;
use std::path::{Path, PathBuf};

use wordnet::prelude::*;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn noun_list(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_sample_outcasts() -> Result<()> {
    let wordnet = WordNet::open(data("synsets.txt"), data("hypernyms.txt"))?;
    let outcast = Outcast::new(&wordnet);

    let nouns = noun_list(&data("outcast5.txt"));
    assert_eq!(outcast.outcast(&nouns)?.as_deref(), Some("table"));

    let nouns = noun_list(&data("outcast4.txt"));
    assert_eq!(outcast.outcast(&nouns)?.as_deref(), Some("mango"));
    Ok(())
}

#[test]
fn test_sample_scores() -> Result<()> {
    let wordnet = WordNet::open(data("synsets.txt"), data("hypernyms.txt"))?;
    let scores = Outcast::new(&wordnet).scores(&noun_list(&data("outcast5.txt")))?;

    let totals: Vec<i64> = scores.iter().map(|(_, total)| *total).collect();
    assert_eq!(totals, vec![29, 29, 33, 29, 56]);
    Ok(())
}

#[test]
fn test_duplicates_count_twice() -> Result<()> {
    let wordnet = WordNet::open(data("synsets.txt"), data("hypernyms.txt"))?;
    let outcast = Outcast::new(&wordnet);

    // cat: 6 + 6 + 0 = 12, horse: 0 + 0 + 6 = 6
    let nouns = ["horse", "horse", "cat"];
    assert_eq!(outcast.outcast(&nouns)?.as_deref(), Some("cat"));
    Ok(())
}

/// Regression values for the full course data set. Point `WORDNET_DATA_DIR`
/// at a directory holding `synsets.txt`, `hypernyms.txt` and `outcast5.txt`.
#[test]
#[ignore = "requires the full WordNet corpus"]
fn test_full_corpus() -> Result<()> {
    let dir = PathBuf::from(
        std::env::var("WORDNET_DATA_DIR").expect("WORDNET_DATA_DIR must be set"),
    );
    let wordnet = WordNet::open(dir.join("synsets.txt"), dir.join("hypernyms.txt"))?;

    assert_eq!(wordnet.synset_count(), 82192);
    assert_eq!(wordnet.distance("white_marlin", "mango")?, 23);
    assert_eq!(wordnet.distance("Black_Plague", "black_marlin")?, 33);
    assert_eq!(wordnet.distance("American_water_spaniel", "histology")?, 27);
    assert_eq!(wordnet.distance("Brown_Swiss", "barrel_roll")?, 29);

    let nouns = noun_list(&dir.join("outcast5.txt"));
    assert_eq!(
        Outcast::new(&wordnet).outcast(&nouns)?.as_deref(),
        Some("table")
    );
    Ok(())
}
