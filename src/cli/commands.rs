//! Command implementations for the WordNet CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::loader::LoaderConfig;
use crate::outcast::{Outcast, pick_outcast};
use crate::sap::SapConfig;
use crate::wordnet::WordNet;

/// Execute a CLI command.
pub fn execute_command(args: WordNetArgs) -> Result<()> {
    let wordnet = open_wordnet(&args)?;

    match &args.command {
        Command::Distance(pair) => distance(&wordnet, pair, &args),
        Command::Sap(pair) => common_ancestor(&wordnet, pair, &args),
        Command::IsNoun(is_noun_args) => is_noun(&wordnet, is_noun_args, &args),
        Command::Nouns(nouns_args) => list_nouns(&wordnet, nouns_args, &args),
        Command::Outcast(outcast_args) => find_outcasts(&wordnet, outcast_args, &args),
        Command::Stats => output_result("Index statistics", &wordnet.stats(), &args),
    }
}

/// Load the index named by the global arguments.
fn open_wordnet(args: &WordNetArgs) -> Result<WordNet> {
    let loader_config = match &args.config {
        Some(path) => {
            info!("Loading loader configuration from: {}", path.display());
            LoaderConfig::from_json_file(path)?
        }
        None => LoaderConfig::default(),
    };
    let sap_config = SapConfig {
        cache_enabled: !args.no_cache,
    };

    let start_time = Instant::now();
    let wordnet =
        WordNet::open_with_config(&args.synsets, &args.hypernyms, &loader_config, sap_config)?;
    info!(
        "Index ready in {} ms ({} synsets)",
        start_time.elapsed().as_millis(),
        wordnet.synset_count()
    );
    Ok(wordnet)
}

fn distance(wordnet: &WordNet, pair: &NounPairArgs, args: &WordNetArgs) -> Result<()> {
    let distance = wordnet.distance(&pair.noun_a, &pair.noun_b)?;
    output_result(
        "Distance",
        &DistanceResult {
            noun_a: pair.noun_a.clone(),
            noun_b: pair.noun_b.clone(),
            distance,
        },
        args,
    )
}

fn common_ancestor(wordnet: &WordNet, pair: &NounPairArgs, args: &WordNetArgs) -> Result<()> {
    let distance = wordnet.distance(&pair.noun_a, &pair.noun_b)?;
    let ancestor = wordnet.sap(&pair.noun_a, &pair.noun_b)?;
    output_result(
        "Shortest common ancestor",
        &SapResult {
            noun_a: pair.noun_a.clone(),
            noun_b: pair.noun_b.clone(),
            distance,
            ancestor: ancestor.to_string(),
        },
        args,
    )
}

fn is_noun(wordnet: &WordNet, is_noun_args: &IsNounArgs, args: &WordNetArgs) -> Result<()> {
    output_result(
        "Noun lookup",
        &IsNounResult {
            word: is_noun_args.word.clone(),
            is_noun: wordnet.is_noun(&is_noun_args.word),
        },
        args,
    )
}

fn list_nouns(wordnet: &WordNet, nouns_args: &NounsArgs, args: &WordNetArgs) -> Result<()> {
    let mut nouns: Vec<String> = wordnet
        .nouns()
        .filter(|noun| {
            nouns_args
                .prefix
                .as_deref()
                .is_none_or(|prefix| noun.starts_with(prefix))
        })
        .map(str::to_string)
        .collect();
    nouns.sort_unstable();

    let total = nouns.len();
    if let Some(limit) = nouns_args.limit {
        nouns.truncate(limit);
    }

    output_result("Nouns", &NounListResult { total, nouns }, args)
}

fn find_outcasts(wordnet: &WordNet, outcast_args: &OutcastArgs, args: &WordNetArgs) -> Result<()> {
    let start_time = Instant::now();
    let outcast = Outcast::new(wordnet);
    let mut results = Vec::with_capacity(outcast_args.files.len());

    for file in &outcast_args.files {
        let nouns = read_noun_list(file)?;
        if nouns.is_empty() {
            warn!("No nouns in {}", file.display());
        }

        let scores = outcast.scores(&nouns)?;
        let odd_one = pick_outcast(&scores).map(str::to_string);
        let scores = outcast_args.scores.then(|| {
            scores
                .into_iter()
                .map(|(noun, total_distance)| NounScore {
                    noun,
                    total_distance,
                })
                .collect()
        });

        results.push(OutcastResult {
            file: file.display().to_string(),
            outcast: odd_one,
            scores,
        });
    }

    output_result(
        "Outcasts",
        &OutcastReport {
            results,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        args,
    )
}

/// Read a whitespace-separated noun list.
fn read_noun_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_noun_list() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "horse zebra cat\n  bird\ttable").unwrap();

        let nouns = read_noun_list(file.path()).unwrap();
        assert_eq!(nouns, vec!["horse", "zebra", "cat", "bird", "table"]);
    }

    #[test]
    fn test_read_missing_noun_list() {
        let err = read_noun_list(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, crate::error::WordNetError::Io(_)));
    }
}
