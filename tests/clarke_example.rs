//! The ten-document, six-subtopic example of Clarke et al. (2008).

use alphandcg::{AlphaNdcg, AlphaNdcgConfig, CoverageScope, Rankings, TopicIndex};

const EPS: f64 = 1e-12;

fn index() -> TopicIndex {
    let topics = ["85.1", "85.2", "85.3", "85.4", "85.5", "85.6"];
    TopicIndex::default()
        .with_query("QA", topics)
        .with_query("QB", topics)
        .with_document("a", ["85.2", "85.4"])
        .with_document("b", ["85.2"])
        .with_document("c", ["85.2"])
        .with_document("d", Vec::<&str>::new())
        .with_document("e", ["85.1", "85.6"])
        .with_document("f", ["85.1"])
        .with_document("g", ["85.3"])
        .with_document("h", ["85.1"])
        .with_document("i", Vec::<&str>::new())
        .with_document("j", Vec::<&str>::new())
}

fn run(ids: &str) -> Vec<String> {
    ids.chars().map(String::from).collect()
}

fn evaluator() -> AlphaNdcg {
    AlphaNdcg::new(index(), AlphaNdcgConfig::new(0.5)).unwrap()
}

#[test]
fn qa_gain_curve_shape() {
    let eval = evaluator();
    let g = eval.alpha_dcg("QA", &run("abcdefghij"), 20).unwrap();
    assert_eq!(g.len(), 10);

    assert_eq!(g[0], 2.0);
    assert!((g[1] - (2.0 + 0.5 / 3f64.log2())).abs() < EPS);
    assert!((g[2] - (g[1] + 0.25 / 2.0)).abs() < EPS);
    // d, i and j cover nothing.
    assert_eq!(g[3], g[2]);
    assert_eq!(g[8], g[7]);
    assert_eq!(g[9], g[8]);
    // e brings two fresh topics.
    assert!((g[4] - (g[3] + 2.0 / 6f64.log2())).abs() < EPS);
    assert!(g[0] > 0.0 && g[1] > g[0] && g[2] > g[1] && g[4] > g[3]);
    // g brings the only occurrence of 85.3.
    assert!((g[6] - g[5] - 1.0 / 3.0).abs() < EPS);
}

#[test]
fn ideal_ranking_for_qa() {
    let eval = evaluator();
    let ideal = eval.ideal_ranking("QA", &run("abcdefghij"), 20).unwrap();
    assert_eq!(ideal, run("aegbfchdij"));
}

#[test]
fn greedy_ideal_dominates_both_runs() {
    let eval = evaluator();
    let ideal = eval.ideal_ranking("QA", &run("abcdefghij"), 10).unwrap();
    let ideal_curve = eval.alpha_dcg("QA", &ideal, 10).unwrap();
    for ids in ["abcdefghij", "aegbfchijd"] {
        let curve = eval.alpha_dcg("QA", &run(ids), 10).unwrap();
        for (observed, best) in curve.iter().zip(&ideal_curve) {
            assert!(observed <= best);
        }
    }
}

#[test]
fn batch_ndcg() {
    let mut eval = evaluator();
    let rankings = Rankings::from([
        ("QA".to_string(), run("abcdefghij")),
        ("QB".to_string(), run("aegbfchijd")),
    ]);
    eval.compute_alpha_ndcg(&rankings, 20).unwrap();

    let qa = &eval.ndcg_values()["QA"];
    let qb = &eval.ndcg_values()["QB"];
    assert_eq!(qa.len(), 10);
    assert_eq!(qb.len(), 10);
    assert_eq!(qa[0], 1.0);
    assert!(qa[1] < 1.0);
    assert!(qa.iter().all(|v| (0.0..=1.0).contains(v)));
    // QB is the greedy order up to the trailing zero-gain documents.
    assert!(qb.iter().all(|v| (v - 1.0).abs() < EPS));
}

#[test]
fn single_ideal_normalizes_both_runs() {
    let eval = evaluator();
    let ideal = eval.ideal_ranking("QA", &run("abcdefghij"), 20).unwrap();
    let qa = eval
        .alpha_ndcg_against("QA", &run("abcdefghij"), &ideal, 20)
        .unwrap();
    let qb = eval
        .alpha_ndcg_against("QA", &run("aegbfchijd"), &ideal, 20)
        .unwrap();
    assert_eq!(qa.len(), 10);
    assert!(qb.iter().all(|v| (v - 1.0).abs() < EPS));
    assert!(qa.iter().zip(&qb).all(|(a, b)| a <= b));
}

#[test]
fn coverage_at_five() {
    let mut eval = evaluator();
    let qa = run("abcdefghij");
    assert_eq!(eval.subtopic_coverage("QA", &qa, 5).unwrap(), 4);
    assert_eq!(
        eval.covered_subtopics("QA", &qa, 5).unwrap().into_iter().collect::<Vec<_>>(),
        vec!["85.1", "85.2", "85.4", "85.6"]
    );
    assert_eq!(eval.subtopic_coverage("QA", &qa, 10).unwrap(), 5);

    eval.set_coverage_scope(CoverageScope::QueryTopics);
    assert_eq!(eval.subtopic_coverage("QA", &qa, 5).unwrap(), 4);
}
