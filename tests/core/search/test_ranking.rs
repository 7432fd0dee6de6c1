// Ranking properties of TF-IDF cosine search

use crate::common::{build_store, OS_LECTURE};
use studymate::core::search::TermIndex;
use studymate::core::StudyError;

#[test]
fn test_relevant_chunk_ranks_first() {
    let index =
        TermIndex::build(&["cats are mammals", "dogs are mammals", "rocks are minerals"]).unwrap();

    let ranked = index.search("cats", 3);
    assert_eq!(ranked[0].0, 0);
    assert!(ranked[0].1 > 0.0);
    assert_eq!(ranked[1].1, 0.0);
    assert_eq!(ranked[2].1, 0.0);
}

#[test]
fn test_two_term_query_ranks_unrelated_chunk_last() {
    let store = build_store("cats are mammals dogs are mammals rocks are minerals", 3, 0);
    let results = store.search("cats mammals", 3);

    assert_eq!(results[0].text, "cats are mammals");
    assert_eq!(results[1].text, "dogs are mammals");
    assert_eq!(results[2].text, "rocks are minerals");
    assert_eq!(results[2].score, 0.0);
}

#[test]
fn test_topic_queries_hit_matching_paragraph() {
    // 40-word windows, no overlap: roughly one paragraph per chunk
    let store = build_store(OS_LECTURE, 40, 0);

    let cases = [
        ("kernel loads missing page from disk", "kernel"),
        ("round robin time slice", "Round robin"),
        ("circular wait preemption", "circular wait"),
    ];

    for (query, needle) in cases {
        let top = &store.search(query, 1)[0];
        assert!(
            top.text.contains(needle),
            "query {query:?} returned chunk {}: {}",
            top.chunk_index,
            top.text
        );
    }
}

#[test]
fn test_results_are_bounded_and_sorted() {
    let store = build_store(OS_LECTURE, 12, 3);
    let total = store.chunks().len();

    for k in [0, 1, 3, total, total + 10] {
        let results = store.search("scheduling threads priority", k);
        assert_eq!(results.len(), k.min(total));

        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].chunk_index < pair[1].chunk_index);
            }
        }
        for r in &results {
            assert!((0.0..=1.0 + 1e-5).contains(&r.score));
        }
    }
}

#[test]
fn test_unknown_terms_return_document_order() {
    let store = build_store(OS_LECTURE, 12, 3);
    let results = store.search("xylophone quasar", 4);

    let order: Vec<usize> = results.iter().map(|r| r.chunk_index).collect();
    assert_eq!(order, vec![0, 1, 2, 3]);
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn test_search_is_deterministic() {
    let a = build_store(OS_LECTURE, 15, 5);
    let b = build_store(OS_LECTURE, 15, 5);

    for query in ["virtual memory", "process threads", "the and of", ""] {
        assert_eq!(a.search(query, 10), b.search(query, 10));
        assert_eq!(a.search(query, 10), a.search(query, 10));
    }
}

#[test]
fn test_query_terms_outside_vocabulary_are_ignored() {
    let store = build_store(OS_LECTURE, 40, 0);

    let plain = store.search("deadlock", 3);
    let noisy = store.search("deadlock zzzunknown qqqmissing", 3);

    let plain_order: Vec<usize> = plain.iter().map(|r| r.chunk_index).collect();
    let noisy_order: Vec<usize> = noisy.iter().map(|r| r.chunk_index).collect();
    assert_eq!(plain_order, noisy_order);
    for (p, n) in plain.iter().zip(&noisy) {
        assert!((p.score - n.score).abs() < 1e-6);
    }
}

#[test]
fn test_empty_corpus_is_rejected() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        TermIndex::build(&empty),
        Err(StudyError::EmptyCorpus)
    ));
}
