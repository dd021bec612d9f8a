//! Removal of markup that never renders as text.

use ego_tree::NodeId;
use scraper::{Html, Node};

/// Elements whose content is never shown to a reader.
pub const NON_RENDERED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Detaches every non-rendered element and every comment node from the document.
///
/// Whole subtrees are removed, at any depth. Matches are collected before the tree is
/// mutated, so nested matches (a `<style>` inside a `<template>`) are detached as well.
/// Running this on an already sanitized document is a no-op.
///
/// # Returns
///
/// The number of nodes detached.
pub fn strip_non_rendered(document: &mut Html) -> usize {
    let doomed: Vec<NodeId> = document
        .tree
        .root()
        .descendants()
        .filter(|node| match node.value() {
            Node::Element(element) => NON_RENDERED_ELEMENTS.contains(&element.name()),
            Node::Comment(_) => true,
            _ => false,
        })
        .map(|node| node.id())
        .collect();

    for id in &doomed {
        if let Some(mut node) = document.tree.get_mut(*id) {
            node.detach();
        }
    }

    log::trace!("Detached {} non-rendered nodes", doomed.len());
    doomed.len()
}
