//! Scenario and edge-case tests for segmentation and packing.

use booksplit::{
    chunk_text, pack, segment, word_count, ChunkRecord, ChunkStore, Chunker, MemoryChunkStore,
    WordBudget, WordBudgetChunker, DEFAULT_MAX_WORDS,
};

fn words(n: usize) -> String {
    (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn segments_on_terminal_punctuation() {
    assert_eq!(
        segment("Hello world. This is great! Is it?"),
        vec!["Hello world.", "This is great!", "Is it?"]
    );
}

#[test]
fn greedy_trace_with_budget_three() {
    // 2 + 3 > 3 and 3 + 2 > 3: every sentence closes the chunk before it
    let chunks = pack(&["Hello world.", "This is great!", "Is it?"], 3);
    assert_eq!(chunks, vec!["Hello world.", "This is great!", "Is it?"]);
}

#[test]
fn oversized_sentence_is_kept_whole() {
    let sentence = format!("{}.", words(1000));
    let chunks = pack(&[sentence.as_str()], 500);
    assert_eq!(chunks, vec![sentence.clone()]);

    let chunks = chunk_text(&format!("Intro. {sentence} Outro."), 500);
    assert_eq!(chunks, vec!["Intro.".to_string(), sentence, "Outro.".to_string()]);
}

#[test]
fn empty_input_produces_empty_output() {
    assert!(segment("").is_empty());
    let none: Vec<&str> = Vec::new();
    assert!(pack(&none, 10).is_empty());
    assert!(chunk_text("", DEFAULT_MAX_WORDS).is_empty());
    assert!(WordBudgetChunker::default().chunk("").is_empty());
}

#[test]
fn text_without_punctuation_is_one_sentence() {
    assert_eq!(segment("no punctuation here"), vec!["no punctuation here"]);
}

// =============================================================================
// Budget boundaries
// =============================================================================

#[test]
fn sentence_exactly_at_budget() {
    let exact = format!("{}.", words(5));

    // Alone it fits
    assert_eq!(pack(&[exact.as_str()], 5), vec![exact.clone()]);

    // After a non-empty running chunk it starts a new one
    let chunks = pack(&["Start.", exact.as_str()], 5);
    assert_eq!(chunks, vec!["Start.".to_string(), exact]);
}

#[test]
fn chunk_may_reach_budget_exactly() {
    let chunks = pack(&["a b.", "c d e."], 5);
    assert_eq!(chunks, vec!["a b. c d e."]);
    assert_eq!(word_count(&chunks[0]), 5);
}

#[test]
fn default_budget_is_five_hundred() {
    assert_eq!(DEFAULT_MAX_WORDS, 500);
    assert_eq!(WordBudget::default().max_words(), 500);

    // 60 sentences of 10 words: 50 per chunk
    let text: String = (0..60).map(|_| format!("{}. ", words(10))).collect();
    let chunks = chunk_text(&text, DEFAULT_MAX_WORDS);
    assert_eq!(chunks.len(), 2);
    assert_eq!(word_count(&chunks[0]), 500);
    assert_eq!(word_count(&chunks[1]), 100);
}

// =============================================================================
// Irregular input
// =============================================================================

#[test]
fn irregular_punctuation_and_whitespace() {
    let text = "  Wait...   what?!\n\nNo way.  . ! Fine\tthen.\r\n";
    assert_eq!(
        segment(text),
        vec!["Wait...", "what?!", "No way.", ".", "!", "Fine\tthen."]
    );
}

#[test]
fn chunks_normalize_whitespace_between_sentences() {
    let chunks = chunk_text("One.\n\n\nTwo!   Three?", 10);
    assert_eq!(chunks, vec!["One. Two! Three?"]);
}

#[test]
fn slabs_locate_chunks_in_source() {
    let text = "Chapter one begins. It was late.\n\nChapter two. The end came quickly.";
    let slabs = WordBudgetChunker::new(WordBudget::new(6).unwrap()).chunk(text);

    let texts: Vec<&str> = slabs.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Chapter one begins. It was late.", "Chapter two. The end came quickly."]
    );
    assert_eq!(&text[slabs[0].span()], "Chapter one begins. It was late.");
    assert_eq!(&text[slabs[1].span()], "Chapter two. The end came quickly.");
    assert!(slabs.iter().all(|s| s.word_count() <= 6));
}

// =============================================================================
// Consistency
// =============================================================================

#[test]
fn chunking_is_deterministic() {
    let text = "The quick brown fox jumps over the lazy dog. Pack my box. Sphinx of quartz!";
    assert_eq!(chunk_text(text, 4), chunk_text(text, 4));

    let chunker = WordBudgetChunker::with_max_words(4);
    assert_eq!(chunker.chunk(text), chunker.chunk(text));
}

#[test]
fn chunking_is_safe_across_threads() {
    let text = "One two three. Four five. Six seven eight nine. Ten.".repeat(50);
    let expected = chunk_text(&text, 7);
    let text = text.as_str();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || chunk_text(text, 7)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// =============================================================================
// Persistence boundary
// =============================================================================

#[test]
fn stored_chunks_keep_output_order() {
    let text: String = (0..20).map(|i| format!("Sentence number {i} here. ")).collect();
    let chunks = chunk_text(&text, 9);

    let mut store = MemoryChunkStore::new();
    assert_eq!(store.store_chunks(11, &chunks).unwrap(), chunks.len());

    let records = store.chunks_for(11).unwrap();
    assert_eq!(records, ChunkRecord::from_chunks(11, chunks.iter().cloned()));
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.chunk_index, i);
        assert_eq!(record.chunk_text, chunks[i]);
    }
}
