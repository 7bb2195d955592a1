//! Performance test module.
//!
//! This module contains generators shared across performance tests.

#![allow(dead_code)]

/// Words used to build deterministic pseudo-prose.
const WORDS: [&str; 16] = [
    "river", "lantern", "quiet", "harbor", "ember", "willow", "stone", "meadow", "copper", "drift",
    "signal", "orchard", "thistle", "canyon", "velvet", "marble",
];

/// Deterministic sentence number `seed`, unique per seed.
pub fn sentence(seed: usize) -> String {
    let mut words = Vec::with_capacity(10);
    let mut state = seed.wrapping_mul(2654435761).wrapping_add(1);
    for _ in 0..8 {
        words.push(WORDS[state % WORDS.len()]);
        state = state.wrapping_mul(1103515245).wrapping_add(12345) >> 3;
    }
    format!("Paragraph {} tells of the {}.", seed, words.join(" "))
}

/// Rendered text with `count` distinct prose blocks, every tenth one
/// followed by a block that is a substring of it.
pub fn generate_blocks(count: usize) -> (String, usize) {
    let mut blocks = Vec::with_capacity(count + count / 10);
    let mut contained = 0;
    for i in 0..count {
        let text = sentence(i);
        if i % 10 == 0 {
            let end = text.len() - 1;
            blocks.push(text.clone());
            blocks.push(text[..end].to_string());
            contained += 1;
        } else {
            blocks.push(text);
        }
    }
    (blocks.join("\n\n"), contained)
}

/// Chapter markup with a heading and `paragraphs` distinct paragraphs.
pub fn chapter(index: usize, paragraphs: usize) -> String {
    let mut markup = format!("<h1>Chapter {}</h1>", index);
    for p in 0..paragraphs {
        markup.push_str(&format!("<p>{}</p>", sentence(index * 1000 + p)));
    }
    markup.push_str("<p>Running header repeated on every page</p>");
    markup
}
