//! Builder invariants over random corpora.

use folio::build::{build_index, SiteDocument};
use folio::{match_query, SearchIndex};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

fn corpus_strategy() -> impl Strategy<Value = Vec<SiteDocument>> {
    let doc = (
        prop::collection::vec(word_strategy(), 1..3),
        prop::collection::vec(word_strategy(), 0..10),
        0i32..3,
    );
    prop::collection::vec(doc, 1..6).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, (title, body, priority))| SiteDocument {
                title: title.join(" "),
                path: format!("/doc/{}", i),
                priority,
                text: body.join(" "),
                tags: vec![],
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_built_index_is_well_formed(docs in corpus_strategy(), max_results in 1usize..6) {
        let data = build_index(&docs, max_results);
        prop_assert!(data.score_confs.iter().all(|bucket| bucket.len() <= max_results));
        prop_assert!(!data.words.contains_key(""));
        prop_assert!(SearchIndex::from_data(data).is_ok());
    }

    #[test]
    fn prop_title_word_finds_its_document(docs in corpus_strategy()) {
        // max_results covers the whole corpus, so no document is cut
        let index = SearchIndex::from_data(build_index(&docs, docs.len())).unwrap();
        for (i, doc) in docs.iter().enumerate() {
            for word in doc.title.split(' ') {
                let results = match_query(&index, word, docs.len());
                prop_assert!(
                    results.iter().any(|site| site.path == format!("/doc/{}", i)),
                    "'{}' did not find /doc/{}", word, i
                );
            }
        }
    }

    #[test]
    fn prop_every_prefix_of_a_word_is_indexed(docs in corpus_strategy()) {
        let data = build_index(&docs, 10);
        for doc in &docs {
            for word in doc.title.split(' ') {
                for end in 1..=word.len() {
                    prop_assert!(data.words.contains_key(&word[..end]));
                }
            }
        }
    }
}
