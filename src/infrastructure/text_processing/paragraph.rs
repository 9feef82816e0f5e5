use regex::Regex;
use std::sync::LazyLock;

use crate::domain::ReportSection;

pub const DEFAULT_SENTENCES_PER_PARAGRAPH: usize = 2;

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Regroup `text` into paragraphs of `sentences_per_paragraph` sentences.
///
/// A sentence ends at boundary punctuation followed by whitespace, so the
/// split is punctuation-based: running this over already-paragraphed text
/// regroups the same sentences and yields the same output. Sentences within
/// a paragraph are joined with a single space, paragraphs with a blank line.
pub fn break_into_paragraphs(text: &str, sentences_per_paragraph: usize) -> String {
    if sentences_per_paragraph == 0 {
        return text.to_string();
    }

    let sentences = split_sentences(text);

    sentences
        .chunks(sentences_per_paragraph)
        .map(|group| group.join(" "))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Paragraph-break the `content` of every section, preserving tags.
pub fn break_sections_into_paragraphs(
    sections: Vec<ReportSection>,
    sentences_per_paragraph: usize,
) -> Vec<ReportSection> {
    sections
        .into_iter()
        .map(|section| ReportSection {
            content: break_into_paragraphs(&section.content, sentences_per_paragraph),
            tag: section.tag,
        })
        .collect()
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The boundary match is one punctuation byte plus trailing
        // whitespace; the sentence keeps the punctuation.
        let end = boundary.start() + 1;
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = boundary.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}
