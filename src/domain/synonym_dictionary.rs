/// Domain terminology mapping passed verbatim into summarization requests.
///
/// The resource file holds the entry lines of a JSON object without the
/// surrounding braces, so loading wraps it by brace-concatenation.
#[derive(Debug, Clone, PartialEq)]
pub struct SynonymDictionary(String);

impl SynonymDictionary {
    pub fn from_entries(raw_entries: &str) -> Self {
        Self(format!("{{\n{}\n}}", raw_entries.trim_end()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
