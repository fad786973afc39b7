//! Integration tests for corpus-backed scoring and the classifier facade.

use std::sync::Arc;
use std::thread;

use typomatch::prelude::*;

fn sku_corpus() -> Vec<&'static str> {
    vec![
        "SKU-10442-RED",
        "SKU-10442-BLUE",
        "SKU-20117-RED",
        "SKU-31008-GREEN",
        "SKU-31009-GREEN",
    ]
}

#[test]
fn test_uniform_corpus_collapses_to_zero() -> Result<()> {
    let index = CorpusIndex::new(["abc", "abc", "abc"], 1)?;

    assert_eq!(index.idf("a"), Some(0.0));
    assert_eq!(index.similarity("a", "a"), 0.0);
    assert_eq!(index.vocabulary_size(), 3);

    Ok(())
}

#[test]
fn test_empty_corpus_is_rejected() {
    let corpus: [&str; 0] = [];
    let err = CorpusIndex::new(corpus, 2).unwrap_err();
    assert!(matches!(err, TypoError::InvalidArgument(_)));
}

#[test]
fn test_shared_prefix_grams_carry_no_weight() -> Result<()> {
    let index = CorpusIndex::new(sku_corpus(), 2)?;

    // Every document starts with "SKU-", so those grams weigh nothing.
    assert_eq!(index.idf("SK"), Some(0.0));
    assert_eq!(index.idf("U-"), Some(0.0));

    let close = index.similarity("SKU-10442-RED", "SKU-10424-RED");
    let far = index.similarity("SKU-10442-RED", "SKU-31008-GREEN");
    assert!(close > far);

    Ok(())
}

#[test]
fn test_index_is_shareable_across_threads() -> Result<()> {
    let index = Arc::new(CorpusIndex::new(sku_corpus(), 2)?);
    let expected = index.similarity("SKU-31008-GREEN", "SKU-31009-GREEN");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || index.similarity("SKU-31008-GREEN", "SKU-31009-GREEN"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }

    Ok(())
}

#[test]
fn test_classifier_over_corpus() -> Result<()> {
    let index = CorpusIndex::new(sku_corpus(), 2)?;
    let config = ClassifierConfig {
        algorithm: Algorithm::TfIdf,
        threshold: 0.3,
        ..Default::default()
    };
    let classifier = TypoClassifier::with_corpus(config, &index)?;

    let best = classifier
        .best_match("SKU-10442-RDE", index.documents())?
        .expect("a close SKU");
    assert_eq!(best.candidate, "SKU-10442-RED");

    let closest = index.closest("SKU-20117-RED", 1);
    assert_eq!(closest[0].index, 2);

    Ok(())
}

#[test]
fn test_every_algorithm_through_classifier() -> Result<()> {
    let index = CorpusIndex::new(["username", "hostname", "password"], 2)?;

    for algorithm in Algorithm::ALL {
        let config = ClassifierConfig {
            algorithm,
            threshold: 0.0,
            ..Default::default()
        };
        let classifier = TypoClassifier::with_corpus(config, &index)?;

        let score = classifier.score("usernmae", "username")?;
        assert!((0.0..=1.0).contains(&score), "{algorithm}: {score}");
        assert!(classifier.is_typo("usernmae", "username")?);
    }

    Ok(())
}

#[test]
fn test_default_is_typo_uses_jaro_winkler() -> Result<()> {
    assert!(is_typo("usernmae", "username", 0.9)?);
    assert!(!is_typo("admin", "username", 0.9)?);
    Ok(())
}
