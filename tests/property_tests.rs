//! Property-based tests using proptest

use proptest::prelude::*;
use sketchnote_textrank::*;

/// A word drawn from a small vocabulary so that repeats are common
fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "pen", "ink", "page", "arrow", "icon", "frame", "idea", "note", "sketch", "color",
    ])
    .prop_map(str::to_string)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_every_vertex_is_scored(
        words in prop::collection::vec(word(), 1..40),
        window_size in 1usize..6
    ) {
        let builder = GraphBuilder::keyword_graph(&words, window_size, false, &NgramDistance::new(), 0.65);
        let graph = CsrGraph::from_builder(&builder);
        let scores = TextRankScorer::new().iterate(&graph);

        let mut distinct = words.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(scores.len(), distinct.len());
        for word in &distinct {
            let score = scores[word.as_str()];
            prop_assert!(score.is_finite());
            prop_assert!(score >= 0.15 - 1e-12, "{} scored {}", word, score);
        }
    }

    #[test]
    fn test_clique_scores_are_equal(size in 2usize..12) {
        let mut builder = GraphBuilder::new();
        for i in 0..size {
            builder.get_or_create_node(&format!("node_{}", i));
        }
        for i in 0..size as u32 {
            for j in (i + 1)..size as u32 {
                builder.set_edge(i, j, 1.0);
            }
        }
        let graph = CsrGraph::from_builder(&builder);
        let result = TextRankScorer::new().run(&graph);

        prop_assert!(result.converged);
        for score in &result.scores {
            prop_assert!((score - result.scores[0]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_edges_stay_inside_window(
        len in 2usize..30,
        window_size in 1usize..6
    ) {
        // Distinct candidates, so vertex i is position i
        let words: Vec<String> = (0..len).map(|i| format!("w{}", i)).collect();
        let builder = GraphBuilder::keyword_graph(&words, window_size, false, &NgramDistance::new(), 0.65);

        for i in 0..len as u32 {
            for j in 0..len as u32 {
                let gap = (i as i64 - j as i64).unsigned_abs() as usize;
                let expected = i != j && gap <= window_size;
                prop_assert_eq!(builder.has_edge(i, j), expected, "edge {}-{}", i, j);
            }
        }
    }

    #[test]
    fn test_edges_are_symmetric(
        words in prop::collection::vec(word(), 1..40),
        window_size in 1usize..6,
        biased in any::<bool>()
    ) {
        let builder = GraphBuilder::keyword_graph(&words, window_size, biased, &NgramDistance::new(), 0.65);
        let n = builder.node_count() as u32;

        for a in 0..n {
            prop_assert_eq!(builder.edge_weight(a, a), None);
            for b in 0..n {
                prop_assert_eq!(builder.edge_weight(a, b), builder.edge_weight(b, a));
            }
        }
    }

    #[test]
    fn test_keyword_count_is_bounded(
        words in prop::collection::vec(word(), 0..40),
        top_n in 0usize..15
    ) {
        let text = words.join(" ");
        let keywords = extract_keywords(&text, top_n, false, false);

        let mut distinct = words.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert!(keywords.len() <= top_n);
        prop_assert!(keywords.len() <= distinct.len());
    }

    #[test]
    fn test_extraction_is_deterministic(
        words in prop::collection::vec(word(), 1..40),
        biased in any::<bool>(),
        post in any::<bool>()
    ) {
        let text = words.join(" ");
        let extractor = KeywordExtractor::with_config(
            KeywordConfig::default().with_biased(biased).with_post_processing(post),
        );

        let first = extractor.extract_with_info(&text);
        let second = extractor.extract_with_info(&text);
        prop_assert_eq!(first.keywords, second.keywords);
        prop_assert_eq!(first.iterations, second.iterations);
    }

    #[test]
    fn test_summary_sentences_come_from_note(
        sentences in prop::collection::vec(prop::collection::vec(word(), 1..8), 0..12),
        top_n in prop::option::of(1usize..4)
    ) {
        let text = sentences
            .iter()
            .map(|s| format!("{}.", s.join(" ")))
            .collect::<Vec<_>>()
            .join(" ");
        let summarizer = Summarizer::with_config(SummaryConfig::default().with_top_n(top_n));
        let result = summarizer.summarize_with_info(&text);

        for sentence in &result.sentences {
            prop_assert!(text.contains(&sentence.text));
        }
        for pair in result.sentences.windows(2) {
            prop_assert!(pair[0].position < pair[1].position);
        }
        prop_assert_eq!(summarizer.summarize(&text), result.text());
    }

    #[test]
    fn test_arbitrary_text_never_panics(text in "\\PC{0,80}") {
        let keywords = extract_keywords(&text, 5, true, true);
        prop_assert!(keywords.len() <= 5);

        let summary = Summarizer::new().summarize_with_info(&text);
        for sentence in &summary.sentences {
            prop_assert!(text.contains(&sentence.text));
        }
    }

    #[test]
    fn test_doubled_multibyte_suffixes_never_panic(
        stem in "[a-zéïñüøß]{0,4}",
        doubled in "[éïñüø]",
        suffix in prop::sample::select(vec!["ing", "ed", "s", "es", "ies"])
    ) {
        let word = format!("{}{}{}{}", stem, doubled, doubled, suffix);
        let lemma = Tokenizer::new().lemmatize(&word);
        prop_assert!(lemma.is_some());

        let text = format!("{} notes. The {} sketch stays.", word, word);
        let _ = extract_keywords(&text, 3, false, true);
        prop_assert!(text.contains(&summarize(&text, Some(1), false)));
    }

    #[test]
    fn test_config_validation_properties(
        damping in 0.0f64..=1.0,
        window_size in 1usize..10,
        top_n in 1usize..100,
        chunk_size in 1usize..10
    ) {
        let keyword_config = KeywordConfig::default()
            .with_damping(damping)
            .with_window_size(window_size)
            .with_top_n(top_n);
        prop_assert!(keyword_config.validate().is_ok());

        let summary_config = SummaryConfig::default()
            .with_damping(damping)
            .with_chunk_size(chunk_size)
            .with_top_n(Some(top_n));
        prop_assert!(summary_config.validate().is_ok());
    }
}
