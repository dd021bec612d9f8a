//! Document-order walk over text nodes a reader would see.

use ego_tree::iter::Descendants;
use ego_tree::NodeRef;
use scraper::{Html, Node};

use super::visibility::is_hidden;

/// Lazy iterator over raw visible text-node contents, in depth-first document order.
///
/// Yields untrimmed text. Skips whitespace-only nodes and nodes whose direct parent
/// element is hidden. Expects the document to have been sanitized first.
pub struct VisibleTextNodes<'a> {
    inner: Descendants<'a, Node>,
}

impl<'a> Iterator for VisibleTextNodes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        for node in self.inner.by_ref() {
            let Node::Text(text) = node.value() else {
                continue;
            };
            let content: &'a str = text;
            if content.trim().is_empty() {
                continue;
            }
            let parent_hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .is_some_and(is_hidden);
            if parent_hidden {
                log::trace!("Skipping text under hidden parent: {:?}", content.trim());
                continue;
            }
            return Some(content);
        }
        None
    }
}

/// Starts a visible-text walk at the document's `<body>`, or at the root when there is none.
pub fn visible_text_nodes(document: &Html) -> VisibleTextNodes<'_> {
    VisibleTextNodes {
        inner: body_or_root(document).descendants(),
    }
}

fn body_or_root(document: &Html) -> NodeRef<'_, Node> {
    let root = document.tree.root();
    root.descendants()
        .find(|node| {
            node.value()
                .as_element()
                .is_some_and(|element| element.name() == "body")
        })
        .unwrap_or(root)
}
