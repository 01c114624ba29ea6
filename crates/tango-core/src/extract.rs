use std::sync::LazyLock;

use regex::Regex;

use crate::content::ContentNode;

/// Circled sense numerals used by dictionaries to separate senses.
static SENSE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([①-⑩❶-❿➊-➓])").unwrap());

/// Parenthesized asides: readings, field labels, cross references.
static BRACKETED_ASIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"（.+?）|［.+?］|〈.+?〉|《.+?》|【.+?】").unwrap());

/// Trailing sections that carry usage notes rather than definitions.
/// Everything from the first marker onward is dropped.
const SECTION_MARKERS: [&str; 3] = ["[補説]", "📚使い方", "［用法］"];

/// Extracts a display-ready definition from an entry's content tree.
///
/// The flattened text is reformatted for card rendering: each sense
/// numeral gets a line break in front of it, bracketed asides are
/// removed, and trailing usage-note sections are cut off.
pub fn definition_text(content: &ContentNode) -> String {
    let text = content.flatten_text();
    let text = SENSE_MARKER.replace_all(&text, "<br/>&nbsp;${1}");
    let text = BRACKETED_ASIDE.replace_all(&text, "");
    let mut text = text.as_ref();
    for marker in SECTION_MARKERS {
        if let Some(index) = text.find(marker) {
            text = &text[..index];
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> ContentNode {
        ContentNode::Text(value.to_string())
    }

    #[test]
    fn breaks_before_each_sense_numeral() {
        let tree = text("①大きいこと②広いこと");
        assert_eq!(
            definition_text(&tree),
            "<br/>&nbsp;①大きいこと<br/>&nbsp;②広いこと"
        );
    }

    #[test]
    fn strips_bracketed_asides() {
        let tree = text("大きい（おおきい）こと【名】です");
        assert_eq!(definition_text(&tree), "大きいことです");
    }

    #[test]
    fn cuts_trailing_usage_sections() {
        let tree = text("定義です[補説]古い言い方📚使い方まれ");
        assert_eq!(definition_text(&tree), "定義です");
    }

    #[test]
    fn earliest_section_marker_wins() {
        let tree = text("定義📚使い方のこり[補説]あと");
        assert_eq!(definition_text(&tree), "定義");
    }

    #[test]
    fn first_marker_truncates_before_later_ones() {
        let tree = text("foo[補説]bar📚使い方baz");
        assert_eq!(definition_text(&tree), "foo");
    }

    #[test]
    fn fullwidth_usage_label_is_removed_as_aside() {
        // ［用法］ is itself a fullwidth-bracket span, so aside removal
        // eats the marker before truncation can see it.
        let tree = text("定義です［用法］AとBの違い");
        assert_eq!(definition_text(&tree), "定義ですAとBの違い");
    }

    #[test]
    fn cleans_text_gathered_across_nodes() {
        let tree = ContentNode::List(vec![
            text("①結果"),
            ContentNode::Element {
                content: Some(Box::new(text("（けっか）となる"))),
            },
        ]);
        assert_eq!(definition_text(&tree), "<br/>&nbsp;①結果となる");
    }

    #[test]
    fn empty_tree_yields_empty_definition() {
        assert_eq!(definition_text(&ContentNode::List(Vec::new())), "");
    }
}
