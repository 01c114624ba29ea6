use serde::Deserialize;

/// One node of a dictionary entry's nested definition content.
///
/// Term banks mix plain strings, arrays and markup objects freely; only
/// the shapes below carry display text. Markup objects expose the text
/// under their `content` key, every other attribute (tag, style, lang)
/// is dropped. Anything unrecognized lands in [`ContentNode::Other`]
/// and is skipped rather than rejected, since dictionary sources are
/// heterogeneous and flattening is best-effort.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    Text(String),
    List(Vec<ContentNode>),
    Element { content: Option<Box<ContentNode>> },
    Other(serde_json::Value),
}

impl ContentNode {
    /// Flattens the tree into its display text, depth-first and
    /// order-preserving.
    ///
    /// Walks with an explicit work stack so deeply nested content
    /// cannot exhaust the call stack; list children are pushed in
    /// reverse so they pop in source order.
    pub fn flatten_text(&self) -> String {
        let mut stack = vec![self];
        let mut out = String::new();
        while let Some(node) = stack.pop() {
            match node {
                ContentNode::Text(text) => out.push_str(text),
                ContentNode::List(items) => stack.extend(items.iter().rev()),
                ContentNode::Element { content } => {
                    if let Some(content) = content.as_deref() {
                        stack.push(content);
                    }
                }
                ContentNode::Other(_) => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> ContentNode {
        ContentNode::Text(value.to_string())
    }

    #[test]
    fn flattens_nested_lists_in_order() {
        let tree = ContentNode::List(vec![
            text("おお"),
            ContentNode::List(vec![text("き"), ContentNode::List(vec![text("い")])]),
            text("。"),
        ]);
        assert_eq!(tree.flatten_text(), "おおきい。");
    }

    #[test]
    fn follows_element_content() {
        let tree = ContentNode::List(vec![
            ContentNode::Element {
                content: Some(Box::new(text("大きい"))),
            },
            ContentNode::Element { content: None },
            text("さま"),
        ]);
        assert_eq!(tree.flatten_text(), "大きいさま");
    }

    #[test]
    fn skips_unrecognized_shapes() {
        let tree = ContentNode::List(vec![
            ContentNode::Other(serde_json::json!(12)),
            text("結果"),
            ContentNode::Other(serde_json::Value::Null),
        ]);
        assert_eq!(tree.flatten_text(), "結果");
    }

    #[test]
    fn empty_tree_yields_empty_text() {
        assert_eq!(ContentNode::List(Vec::new()).flatten_text(), "");
    }

    #[test]
    fn deserializes_mixed_content() {
        let raw = r#"["結果", {"tag": "ruby", "content": ["として"]}, 3, ["現れる"]]"#;
        let tree: ContentNode = serde_json::from_str(raw).unwrap();
        assert_eq!(tree.flatten_text(), "結果として現れる");
    }

    #[test]
    fn element_without_content_deserializes_to_none() {
        let raw = r#"{"tag": "img", "path": "x.png"}"#;
        let tree: ContentNode = serde_json::from_str(raw).unwrap();
        assert_eq!(tree, ContentNode::Element { content: None });
        assert_eq!(tree.flatten_text(), "");
    }
}
