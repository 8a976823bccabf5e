//! A small element tree used as the rendering target, serialized to HTML.

use maud::Render;
use std::fmt;

// Elements which never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, replacing any existing value
    pub fn set_attribute<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(attribute) => attribute.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn with_attribute<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn class_name(&self) -> Option<&str> {
        self.attribute("class")
    }

    pub fn set_class_name<S: Into<String>>(&mut self, class: S) {
        self.set_attribute("class", class);
    }

    pub fn with_class<S: Into<String>>(self, class: S) -> Self {
        self.with_attribute("class", class)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name()
            .map_or(false, |classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Replaces all children with a single text node
    pub fn set_text_content<S: Into<String>>(&mut self, text: S) {
        self.children.clear();
        self.children.push(Node::Text(text.into()));
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.set_text_content(text);
        self
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Appends a child and returns a reference to it
    pub fn append_child(&mut self, child: Element) -> &mut Element {
        self.children.push(Node::Element(child));
        match self.children.last_mut() {
            Some(Node::Element(element)) => element,
            _ => unreachable!("an element was just pushed"),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct element children, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements in document order, not including `self`
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, out: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            out.push(child);
            child.collect_descendants(out);
        }
    }

    pub fn elements_by_tag_name(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.tag == tag)
            .collect()
    }

    pub fn elements_by_class_name(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Finds `self` or a descendant by id
    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }

        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => element.element_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

// Attribute values and text go through maud's `str` renderer, which escapes them
impl Render for Element {
    fn render_to(&self, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(&self.tag);
        for (name, value) in &self.attributes {
            buffer.push(' ');
            buffer.push_str(name);
            buffer.push_str("=\"");
            value.as_str().render_to(buffer);
            buffer.push('"');
        }
        buffer.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(element) => element.render_to(buffer),
                Node::Text(text) => text.as_str().render_to(buffer),
            }
        }

        buffer.push_str("</");
        buffer.push_str(&self.tag);
        buffer.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().into_string())
    }
}
