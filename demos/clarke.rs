//! The worked alpha-nDCG example from Clarke et al. (2008): ten documents,
//! six subtopics, two rankings of the same pool.
//!
//! Run with `RUST_LOG=alphandcg=trace` to see each greedy pick.

use alphandcg::{AlphaNdcg, AlphaNdcgConfig, Rankings, TopicIndex, DEFAULT_DEPTH};
use tracing_subscriber::EnvFilter;

fn main() -> alphandcg::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let topics = ["85.1", "85.2", "85.3", "85.4", "85.5", "85.6"];
    let docs: [(&str, &[&str]); 10] = [
        ("a", &["85.2", "85.4"]),
        ("b", &["85.2"]),
        ("c", &["85.2"]),
        ("d", &[]),
        ("e", &["85.1", "85.6"]),
        ("f", &["85.1"]),
        ("g", &["85.3"]),
        ("h", &["85.1"]),
        ("i", &[]),
        ("j", &[]),
    ];
    let index = TopicIndex::new(
        [("QA", topics.to_vec()), ("QB", topics.to_vec())],
        docs.iter().map(|(d, t)| (*d, t.to_vec())),
    );

    let ranking = |ids: &str| ids.chars().map(String::from).collect::<Vec<_>>();
    let rankings = Rankings::from([
        ("QA".to_string(), ranking("abcdefghij")),
        ("QB".to_string(), ranking("aegbfchijd")),
    ]);

    let mut eval = AlphaNdcg::new(index, AlphaNdcgConfig::default())?;
    eval.compute_alpha_ndcg(&rankings, DEFAULT_DEPTH)?;

    println!("=== alpha-DCG (alpha=0.5) ===");
    for (query, curve) in eval.dcg_values() {
        println!("  {query}: {}", fmt_curve(curve));
    }
    println!("\n=== alpha-nDCG ===");
    for (query, curve) in eval.ndcg_values() {
        println!("  {query}: {}", fmt_curve(curve));
    }

    // One ideal ranking, built from QA's pool, normalizing both runs.
    println!("\n=== alpha-nDCG against QA's ideal ranking ===");
    let ideal = eval.ideal_ranking("QA", &rankings["QA"], DEFAULT_DEPTH)?;
    println!("  ideal: {}", ideal.join(" "));
    for (query, run) in &rankings {
        let curve = eval.alpha_ndcg_against("QA", run, &ideal, DEFAULT_DEPTH)?;
        println!("  {query}: {}", fmt_curve(&curve));
    }

    println!("\n=== Subtopic coverage ===");
    for k in [1, 5, 10] {
        let covered = eval.subtopic_coverage("QA", &rankings["QA"], k)?;
        println!("  QA@{k}: {covered}");
    }
    Ok(())
}

fn fmt_curve(curve: &[f64]) -> String {
    curve
        .iter()
        .map(|v| format!("{v:.4}"))
        .collect::<Vec<_>>()
        .join(" ")
}
