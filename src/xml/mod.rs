//! Namespace-aware XML document tree.
//!
//! Every [`XmlEngine`] produces the same owned [`XmlDocument`], so the schema
//! parser is written once against this tree regardless of which engine
//! succeeded. Nodes live in a flat arena and are addressed by [`NodeId`],
//! which gives the parser a stable identity for its processed-node set.
//!
//! ```text
//! XmlDocument
//! ├── nodes: Vec<XmlNode>     (document order, root first)
//! └── root: NodeId
//!
//! XmlNode
//! ├── namespace: Option<String>   (resolved URI, never the prefix)
//! ├── local_name: String
//! ├── attributes: Vec<XmlAttribute>
//! └── content: Vec<XmlContent>    (child elements and text, interleaved)
//! ```

mod decode;
mod engine;
mod error;
mod minimal;
mod reader;

pub use decode::to_utf8;
pub use engine::XmlEngine;
pub use error::{EncodingError, XmlError, XmlErrorKind};

pub(crate) use error::ReadError;

use crate::base::constants::MAX_NESTING_DEPTH;

/// Index of a node inside its [`XmlDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An attribute as written on an element, with its namespace resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlAttribute {
    /// Namespace URI for prefixed attributes; `None` for plain ones.
    pub namespace: Option<String>,
    pub local_name: String,
    pub value: String,
}

/// One item of element content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlContent {
    Element(NodeId),
    Text(String),
}

/// An element node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlNode {
    pub namespace: Option<String>,
    pub local_name: String,
    pub attributes: Vec<XmlAttribute>,
    pub content: Vec<XmlContent>,
}

impl XmlNode {
    pub(crate) fn new(namespace: Option<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace,
            local_name: local_name.into(),
            attributes: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Check both the namespace URI and the local name.
    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local_name == local_name
    }

    /// Value of an unqualified attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.namespace.is_none() && attr.local_name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Value of an unqualified attribute, treating an empty value as absent.
    pub fn non_empty_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name).filter(|value| !value.is_empty())
    }
}

/// A parsed XML document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlDocument {
    nodes: Vec<XmlNode>,
    root: NodeId,
}

impl XmlDocument {
    pub(crate) fn new(nodes: Vec<XmlNode>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    /// The document element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &XmlNode {
        &self.nodes[id.index()]
    }

    /// Number of element nodes in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct child elements of `id`, in document order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id).content.iter().filter_map(|item| match item {
            XmlContent::Element(child) => Some(*child),
            XmlContent::Text(_) => None,
        })
    }

    /// Direct children of `id` matching a namespace and local name.
    pub fn children_named<'a>(
        &'a self,
        id: NodeId,
        namespace: &'a str,
        local_name: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(id)
            .filter(move |child| self.node(*child).is(namespace, local_name))
    }

    /// First direct child of `id` matching a namespace and local name.
    pub fn first_child_named(&self, id: NodeId, namespace: &str, local_name: &str) -> Option<NodeId> {
        self.children_named(id, namespace, local_name).next()
    }

    /// Concatenated text of `id` and all its descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        for item in &self.node(id).content {
            match item {
                XmlContent::Text(chunk) => out.push_str(chunk),
                XmlContent::Element(child) => self.collect_text(*child, out),
            }
        }
    }
}

/// Incremental arena builder shared by the engines.
#[derive(Default)]
pub(crate) struct TreeBuilder {
    nodes: Vec<XmlNode>,
    stack: Vec<NodeId>,
    root: Option<NodeId>,
}

impl TreeBuilder {
    /// Open an element under the current parent. Fails on a second root and
    /// past [`MAX_NESTING_DEPTH`].
    pub(crate) fn open(&mut self, node: XmlNode) -> Result<NodeId, ReadError> {
        if self.stack.len() >= MAX_NESTING_DEPTH {
            return Err(ReadError::nesting_limit(MAX_NESTING_DEPTH));
        }
        let id = NodeId::new(self.nodes.len());
        match self.stack.last() {
            Some(parent) => self.nodes[parent.index()]
                .content
                .push(XmlContent::Element(id)),
            None if self.root.is_some() => {
                return Err(format!(
                    "multiple root elements: <{}> after the document element",
                    node.local_name
                )
                .into());
            }
            None => self.root = Some(id),
        }
        self.nodes.push(node);
        self.stack.push(id);
        Ok(id)
    }

    pub(crate) fn close(&mut self) -> Result<(), String> {
        self.stack
            .pop()
            .map(|_| ())
            .ok_or_else(|| "end tag without matching start tag".to_string())
    }

    /// Append text to the open element; whitespace outside the root is ignored.
    pub(crate) fn text(&mut self, text: String) -> Result<(), String> {
        match self.stack.last() {
            Some(parent) => {
                self.nodes[parent.index()].content.push(XmlContent::Text(text));
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err("text content outside the document element".to_string()),
        }
    }

    pub(crate) fn finish(self) -> Result<XmlDocument, String> {
        if let Some(open) = self.stack.last() {
            return Err(format!(
                "unexpected end of document: <{}> is not closed",
                self.nodes[open.index()].local_name
            ));
        }
        let root = self.root.ok_or_else(|| "document has no root element".to_string())?;
        Ok(XmlDocument::new(self.nodes, root))
    }
}
