mod paragraph;

pub use paragraph::{
    break_into_paragraphs, break_sections_into_paragraphs, DEFAULT_SENTENCES_PER_PARAGRAPH,
};
