//! Permissive document parsing and tag extraction
//!
//! Parsing is tolerant the way browsers are: unclosed tags, missing
//! doctypes, and stray text all produce a usable tree. The original raw
//! text rides along with the tree and is never modified; persistence
//! works from a fresh serialization, the raw text only ever feeds the
//! backup.
//!
//! PHP documents are valid input: `<?php ... ?>` spans are lifted out
//! before parsing and restored verbatim after serialization, so the
//! parser never sees them and can never mangle them.

use std::collections::BTreeSet;

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use fontweld_core::error::MarkupError;

/// A parsed markup document plus its untouched original text
pub struct Document {
    raw: String,
    /// Original text with PHP spans replaced by inert placeholders;
    /// this is what the parser consumed.
    sanitized: String,
    php_blocks: Vec<String>,
    dom: RcDom,
}

impl Document {
    /// Parses `text` permissively.
    ///
    /// Failure is a catchable [`MarkupError::Parse`], never a panic; the
    /// caller treats the tag vocabulary as unavailable on failure, not
    /// as empty.
    pub fn parse(text: &str) -> Result<Self, MarkupError> {
        let (sanitized, php_blocks) = shield_php(text);

        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut input = sanitized.as_bytes();
        let dom = parse_document(RcDom::default(), opts)
            .from_utf8()
            .read_from(&mut input)
            .map_err(|e| MarkupError::Parse(e.to_string()))?;

        Ok(Self {
            raw: text.to_string(),
            sanitized,
            php_blocks,
            dom,
        })
    }

    /// The document text exactly as it was handed to [`Document::parse`].
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn dom(&self) -> &RcDom {
        &self.dom
    }

    /// Puts the shielded PHP spans back into serialized output.
    ///
    /// The serializer emits the placeholder comment verbatim in markup
    /// and attribute positions, and entity-escaped where text content
    /// gets escaped (inside `<title>` for instance); both renderings
    /// are matched.
    pub(crate) fn restore_php(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (index, block) in self.php_blocks.iter().enumerate() {
            let token = placeholder(index);
            let escaped = token.replace('<', "&lt;").replace('>', "&gt;");
            out = out.replace(&token, block).replace(&escaped, block);
        }
        out
    }

    /// Distinct element names written in the document, lowercase, sorted
    /// ascending.
    ///
    /// The parse tree also holds structure the parser recovers on its
    /// own (`html`, `head`, `body` exist in every tree); only names that
    /// actually occur as tags in the source text are reported, so the
    /// vocabulary matches what an author could select.
    pub fn tag_names(&self) -> BTreeSet<String> {
        let mut tags = BTreeSet::new();
        collect_tag_names(&self.dom.document, &mut tags);

        let source = self.sanitized.to_ascii_lowercase();
        tags.retain(|name| occurs_as_tag(&source, name));
        tags
    }
}

fn collect_tag_names(handle: &Handle, tags: &mut BTreeSet<String>) {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            let local = name.local.as_ref();
            if !local.is_empty() {
                tags.insert(local.to_ascii_lowercase());
            }
        }
        collect_tag_names(child, tags);
    }
}

/// True when `<name` appears in `source` as a tag token, i.e. followed
/// by whitespace, `>`, `/`, or end of input.
fn occurs_as_tag(source: &str, name: &str) -> bool {
    let needle = format!("<{name}");
    let mut from = 0;
    while let Some(found) = source[from..].find(&needle) {
        let after = from + found + needle.len();
        match source[after..].chars().next() {
            None | Some('>') | Some('/') => return true,
            Some(c) if c.is_whitespace() => return true,
            _ => from += found + 1,
        }
    }
    false
}

fn placeholder(index: usize) -> String {
    format!("<!--__fontweld_php_{index}__-->")
}

/// Replaces every `<? ... ?>` span with an inert placeholder comment.
///
/// A comment parses as a position-stable node everywhere the HTML tree
/// builder would otherwise relocate loose text, including before the
/// document element. An unterminated span runs to end of input,
/// matching how PHP itself treats a final unclosed block.
fn shield_php(text: &str) -> (String, Vec<String>) {
    let mut sanitized = String::with_capacity(text.len());
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("<?") {
        sanitized.push_str(&rest[..start]);
        let span = &rest[start..];
        let end = span.find("?>").map(|i| i + 2).unwrap_or(span.len());
        sanitized.push_str(&placeholder(blocks.len()));
        blocks.push(span[..end].to_string());
        rest = &span[end..];
    }
    sanitized.push_str(rest);

    (sanitized, blocks)
}

/// Parses `text` and returns its sorted tag vocabulary in one step.
pub fn extract_tags(text: &str) -> Result<BTreeSet<String>, MarkupError> {
    Ok(Document::parse(text)?.tag_names())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_sorted_distinct_tags() {
        let tags = extract_tags("<html><body><div><p></p></div></body></html>").unwrap();
        let expected: Vec<_> = tags.iter().cloned().collect();
        assert_eq!(expected, ["body", "div", "html", "p"]);
    }

    #[test]
    fn parser_synthesized_elements_are_not_reported() {
        // The tree behind this fragment still has html/head/body.
        let tags = extract_tags("<div>x</div>").unwrap();
        let expected: Vec<_> = tags.iter().cloned().collect();
        assert_eq!(expected, ["div"]);
    }

    #[test]
    fn head_written_in_the_source_is_reported() {
        let tags = extract_tags("<html><head></head><body><p></p></body></html>").unwrap();
        assert!(tags.contains("head"));
    }

    #[test]
    fn tag_prefixes_do_not_leak_shorter_names() {
        let tags = extract_tags("<html><body><pre>x</pre></body></html>").unwrap();
        assert!(tags.contains("pre"));
        assert!(!tags.contains("p"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "<div><span>x</span><span>y</span></div>";
        assert_eq!(extract_tags(text).unwrap(), extract_tags(text).unwrap());
    }

    #[test]
    fn tolerates_malformed_markup() {
        let tags = extract_tags("<div><p>unclosed<li>stray").unwrap();
        assert!(tags.contains("div"));
        assert!(tags.contains("p"));
        assert!(tags.contains("li"));
    }

    #[test]
    fn duplicate_elements_appear_once() {
        let tags = extract_tags("<p>a</p><p>b</p><p>c</p>").unwrap();
        assert_eq!(tags.iter().filter(|t| t.as_str() == "p").count(), 1);
    }

    #[test]
    fn raw_text_is_preserved_verbatim() {
        let text = "<html><body><p>hola</p></body>";
        let doc = Document::parse(text).unwrap();
        assert_eq!(doc.raw(), text);
    }

    #[test]
    fn foreign_element_names_are_lowercased() {
        let tags =
            extract_tags("<html><body><svg><linearGradient></linearGradient></svg></body></html>")
                .unwrap();
        assert!(tags.contains("lineargradient"));
    }

    #[test]
    fn php_blocks_contribute_no_tags() {
        let text = "<html><body><p></p><?php echo \"<table>\"; ?></body></html>";
        let tags = extract_tags(text).unwrap();
        assert!(tags.contains("p"));
        assert!(!tags.contains("table"));
    }

    #[test]
    fn php_spans_are_shielded_and_restorable() {
        let text = "<p><?php echo $x; ?></p><?= $y ?>";
        let doc = Document::parse(text).unwrap();
        assert!(!doc.sanitized.contains("<?"));
        assert_eq!(doc.php_blocks.len(), 2);
        assert_eq!(doc.restore_php(&doc.sanitized), text);
    }

    #[test]
    fn unterminated_php_span_runs_to_end_of_input() {
        let (sanitized, blocks) = shield_php("<p>x</p><?php $open = true;");
        assert!(!sanitized.contains("<?"));
        assert_eq!(blocks, ["<?php $open = true;"]);
    }
}
