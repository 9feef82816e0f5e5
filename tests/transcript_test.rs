use briefing::domain::{SynonymDictionary, Transcript};

#[test]
fn given_segments_pushed_in_index_order_when_joining_then_order_is_preserved() {
    let mut transcript = Transcript::new();
    transcript.push_segment("first chunk".to_string());
    transcript.push_segment("second chunk".to_string());
    transcript.push_segment("third chunk".to_string());

    assert_eq!(transcript.segment_count(), 3);
    assert_eq!(transcript.text(), "first chunk\n\nsecond chunk\n\nthird chunk");
}

#[test]
fn given_no_segments_when_checking_then_transcript_is_empty() {
    assert!(Transcript::new().is_empty());
}

#[test]
fn given_whitespace_only_segments_when_checking_then_transcript_is_empty() {
    let transcript: Transcript = vec!["  ".to_string(), "\n".to_string()]
        .into_iter()
        .collect();
    assert!(transcript.is_empty());
}

#[test]
fn given_raw_entries_when_building_dictionary_then_braces_are_wrapped() {
    let dict = SynonymDictionary::from_entries("\"revenue\": [\"sales\"]\n");
    assert_eq!(dict.as_str(), "{\n\"revenue\": [\"sales\"]\n}");
}
