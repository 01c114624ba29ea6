use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use tango_core::ContentNode;

/// Trailing sense index on a headword, e.g. the `[1]` in `走る[1]`.
static SENSE_INDEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d\]$").unwrap());

/// Removes a trailing sense index so all senses share one key.
pub fn strip_sense_index(headword: &str) -> &str {
    match SENSE_INDEX.find(headword) {
        Some(found) => &headword[..found.start()],
        None => headword,
    }
}

/// One record of a term-bank file.
///
/// Records are fixed-shape arrays: index 0 holds the headword, index 1
/// the reading, index 5 the definition payload. The slots in between
/// (tags, deinflection rules, score) and anything after the payload
/// are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TermRecord {
    pub headword: String,
    pub reading: Option<String>,
    pub glossary: ContentNode,
}

impl TermRecord {
    /// Picks the content tree out of the glossary payload.
    ///
    /// Structured-content glossaries wrap the tree in a list whose
    /// head is an object carrying a `content` field; plain glossaries
    /// are used as-is.
    pub fn definition_tree(&self) -> Option<&ContentNode> {
        match &self.glossary {
            ContentNode::List(items) => match items.first() {
                Some(ContentNode::Element { content }) => content.as_deref(),
                _ => Some(&self.glossary),
            },
            other => Some(other),
        }
    }
}

impl<'de> Deserialize<'de> for TermRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = TermRecord;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a term-bank record array")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let headword: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let reading = seq.next_element::<Option<String>>()?.flatten();
                for _ in 0..3 {
                    seq.next_element::<IgnoredAny>()?;
                }
                let glossary: ContentNode = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(5, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(TermRecord {
                    headword,
                    reading,
                    glossary,
                })
            }
        }

        deserializer.deserialize_seq(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_digit_sense_index() {
        assert_eq!(strip_sense_index("走る[1]"), "走る");
        assert_eq!(strip_sense_index("走る"), "走る");
    }

    #[test]
    fn sense_index_must_be_trailing_and_single_digit() {
        assert_eq!(strip_sense_index("[1]走る"), "[1]走る");
        assert_eq!(strip_sense_index("走る[12]"), "走る[12]");
    }

    #[test]
    fn parses_full_record() {
        let raw = r#"["大きい","おおきい","adj-i","",5,["でかいこと。"],1330,""]"#;
        let record: TermRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.headword, "大きい");
        assert_eq!(record.reading.as_deref(), Some("おおきい"));
        let tree = record.definition_tree().unwrap();
        assert_eq!(tree.flatten_text(), "でかいこと。");
    }

    #[test]
    fn null_reading_is_absent() {
        let raw = r#"["大きい",null,"","",0,["でかい"]]"#;
        let record: TermRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.reading, None);
    }

    #[test]
    fn structured_content_unwraps_to_inner_tree() {
        let raw = r#"["結果","けっか","n","",0,
            [{"type":"structured-content","content":["おわりの状態。"]}],5,""]"#;
        let record: TermRecord = serde_json::from_str(raw).unwrap();
        let tree = record.definition_tree().unwrap();
        assert_eq!(tree.flatten_text(), "おわりの状態。");
    }

    #[test]
    fn plain_list_glossary_is_used_whole() {
        let raw = r#"["木","き","n","",0,["たちき。","もくざい。"],2,""]"#;
        let record: TermRecord = serde_json::from_str(raw).unwrap();
        let tree = record.definition_tree().unwrap();
        assert_eq!(tree.flatten_text(), "たちき。もくざい。");
    }

    #[test]
    fn bare_string_glossary_is_used_whole() {
        let raw = r#"["木","き","n","",0,"たちき。",2,""]"#;
        let record: TermRecord = serde_json::from_str(raw).unwrap();
        let tree = record.definition_tree().unwrap();
        assert_eq!(tree.flatten_text(), "たちき。");
    }

    #[test]
    fn wrapper_without_content_yields_no_tree() {
        let raw = r#"["結果","けっか","n","",0,[{"type":"image","path":"a.png"}],5,""]"#;
        let record: TermRecord = serde_json::from_str(raw).unwrap();
        assert!(record.definition_tree().is_none());
    }

    #[test]
    fn short_record_is_rejected() {
        assert!(serde_json::from_str::<TermRecord>(r#"["木","き"]"#).is_err());
    }
}
