//! Style injection
//!
//! Builds the CSS block that wires the generated font into a document
//! and splices it into the tree: appended to the existing head, or into
//! a synthesized head placed first when the document lacks one. One
//! injection per call; the document is consumed so a second pass cannot
//! double-inject.

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::StrTendril;
use html5ever::{local_name, namespace_url, ns, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};

use fontweld_core::error::MarkupError;

use crate::document::Document;

/// Renders the `@font-face` declaration plus the grouped selector rule.
///
/// Selector order follows the caller; it is cosmetic only.
pub fn build_style_block(font_name: &str, tags: &[String]) -> String {
    format!(
        "\n@font-face {{\n    font-family: '{font_name}';\n    src: url('{font_name}.ttf') format('truetype');\n    font-weight: normal;\n    font-style: normal;\n}}\n\n{selectors} {{\n    font-family: '{font_name}', sans-serif;\n}}\n",
        selectors = tags.join(", ")
    )
}

/// Injects the style block and serializes the modified tree.
///
/// Preconditions checked here: at least one tag selected, and every
/// selected tag occurs in the document's vocabulary (selection consumes
/// the same parse model extraction produced). The document is taken by
/// value; its raw text stays with the caller via [`Document::raw`].
pub fn augment(document: Document, font_name: &str, tags: &[String]) -> Result<String, MarkupError> {
    if tags.is_empty() {
        return Err(MarkupError::NoTagsSelected);
    }

    let vocabulary = document.tag_names();
    let tags: Vec<String> = tags.iter().map(|t| t.to_ascii_lowercase()).collect();
    for tag in &tags {
        if !vocabulary.contains(tag) {
            return Err(MarkupError::UnknownTag(tag.clone()));
        }
    }

    let css = build_style_block(font_name, &tags);
    let style = new_element(local_name!("style"));
    append_child(&style, new_text(&css));

    let root = &document.dom().document;
    match find_element(root, "head") {
        Some(head) => append_child(&head, style),
        None => {
            let head = new_element(local_name!("head"));
            append_child(&head, style);
            // Head goes first inside <html>, or first in the document
            // when the tree has no html element at all.
            match find_element(root, "html") {
                Some(html) => prepend_child(&html, head),
                None if root.children.borrow().is_empty() => {
                    return Err(MarkupError::NoDocumentElement);
                }
                None => prepend_child(root, head),
            }
        }
    }

    let mut out = Vec::new();
    let serializable: SerializableHandle = root.clone().into();
    serialize(&mut out, &serializable, SerializeOpts::default())
        .map_err(|e| MarkupError::Parse(format!("serialization failed: {e}")))?;
    let text =
        String::from_utf8(out).map_err(|e| MarkupError::Parse(format!("non-UTF-8 output: {e}")))?;
    Ok(document.restore_php(&text))
}

fn new_element(name: LocalName) -> Handle {
    Node::new(NodeData::Element {
        name: QualName::new(None, ns!(html), name),
        attrs: RefCell::new(Vec::new()),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    })
}

fn new_text(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(text)),
    })
}

fn append_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

fn prepend_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().insert(0, child);
}

fn find_element(handle: &Handle, name: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name: qual, .. } = &child.data {
            if qual.local.as_ref() == name {
                return Some(child.clone());
            }
        }
        if let Some(found) = find_element(child, name) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::extract_tags;

    fn parse(text: &str) -> Document {
        Document::parse(text).unwrap()
    }

    #[test]
    fn style_block_names_font_and_selectors() {
        let block = build_style_block("X", &["div".to_string(), "p".to_string()]);
        assert!(block.contains("@font-face"));
        assert!(block.contains("font-family: 'X';"));
        assert!(block.contains("src: url('X.ttf') format('truetype');"));
        assert!(block.contains("div, p {"));
        assert!(block.contains("font-family: 'X', sans-serif;"));
    }

    #[test]
    fn font_face_precedes_the_selector_rule() {
        let block = build_style_block("X", &["p".to_string()]);
        let face = block.find("@font-face").unwrap();
        let rule = block.find("sans-serif").unwrap();
        assert!(face < rule);
    }

    #[test]
    fn injects_into_existing_head() {
        let doc = parse("<html><head><title>t</title></head><body><p>x</p></body></html>");
        let out = augment(doc, "X", &["p".to_string()]).unwrap();

        assert_eq!(out.matches("<style>").count(), 1);
        // Appended after the existing head content.
        let title = out.find("</title>").unwrap();
        let style = out.find("<style>").unwrap();
        assert!(style > title);
        assert!(out.contains("url('X.ttf')"));
    }

    #[test]
    fn scenario_div_and_p_selection() {
        let doc = parse("<html><body><div><p></p></div></body></html>");
        let out = augment(doc, "X", &["div".to_string(), "p".to_string()]).unwrap();
        assert!(out.contains("div, p {"));
        assert!(out.contains("font-family: 'X', sans-serif;"));
        assert!(out.contains("@font-face"));
    }

    #[test]
    fn zero_tags_is_an_input_validation_error() {
        let doc = parse("<html><body></body></html>");
        assert!(matches!(
            augment(doc, "X", &[]),
            Err(MarkupError::NoTagsSelected)
        ));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let doc = parse("<html><body><p></p></body></html>");
        assert!(matches!(
            augment(doc, "X", &["table".to_string()]),
            Err(MarkupError::UnknownTag(_))
        ));
    }

    #[test]
    fn selected_tags_match_case_insensitively() {
        let doc = parse("<html><body><p></p></body></html>");
        let out = augment(doc, "X", &["P".to_string()]).unwrap();
        assert!(out.contains("p {"));
    }

    #[test]
    fn reextraction_after_augment_is_a_superset_with_style() {
        let text = "<html><body><div><p></p></div></body></html>";
        let before = extract_tags(text).unwrap();
        let doc = parse(text);
        let out = augment(doc, "X", &["div".to_string()]).unwrap();
        let after = extract_tags(&out).unwrap();

        assert!(after.is_superset(&before));
        assert!(after.contains("style"));
        assert!(after.contains("head"));
    }

    #[test]
    fn php_blocks_survive_augmentation_verbatim() {
        let text = "<html><head><?php echo $title; ?></head><body><p><?php echo $x; ?></p></body></html>";
        let doc = parse(text);
        let out = augment(doc, "X", &["p".to_string()]).unwrap();

        assert!(out.contains("<?php echo $title; ?>"));
        assert!(out.contains("<?php echo $x; ?>"));
        assert!(!out.contains("<!--?php"));
        assert!(out.contains("@font-face"));
    }

    #[test]
    fn php_in_attribute_values_survives_augmentation() {
        let text = "<html><body><p><a href=\"<?php echo $url; ?>\">x</a></p></body></html>";
        let doc = parse(text);
        let out = augment(doc, "X", &["p".to_string()]).unwrap();

        assert!(out.contains("<?php echo $url; ?>"));
        assert!(!out.contains("<!--?php"));
    }

    #[test]
    fn selector_order_follows_the_caller() {
        let doc = parse("<html><body><div><p></p></div></body></html>");
        let out = augment(doc, "X", &["p".to_string(), "div".to_string()]).unwrap();
        assert!(out.contains("p, div {"));
    }
}
