//! Lenient markup tree for the guide chapters.
//!
//! The chapters predate well-formed HTML: paragraphs go unclosed, `<br>`
//! never closes, and end tags appear without openers. The builder here
//! reads quick-xml events and applies just enough tag soup repair (implied
//! paragraph closes, void elements, orphan end tags ignored) to yield a
//! stable tree of `Node::Text` and `Node::Element` values.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Elements that never hold content in the source chapters.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "hr", "img", "input", "link", "meta",
];

/// Opening one of these while a `<p>` is still open implies closing the
/// paragraph first.
const BLOCK_TAGS: &[&str] = &[
    "blockquote", "div", "h1", "h2", "h3", "h4", "h5", "h6", "ol", "p", "table", "ul",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Structural role of an element in the normalized tree, computed from the
/// synthetic markers the normalizer leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    /// Paragraph opening a new peak or pass record.
    EntityOpen,
    /// Heading separating chapter sections.
    SectionBreak,
    /// End-of-chapter marker (`clear="all"`).
    SectionEnd,
    Plain,
}

pub fn classify(el: &Element) -> NodeClass {
    if el.attr("clear") == Some("all") {
        NodeClass::SectionEnd
    } else if el.tag == "p" && el.attr("class") == Some("peak") {
        NodeClass::EntityOpen
    } else if matches!(el.tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6") {
        NodeClass::SectionBreak
    } else {
        NodeClass::Plain
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    /// First `<i>` descendant, depth-first.
    pub fn first_italic(&self) -> Option<&Element> {
        for child in &self.children {
            if let Node::Element(e) = child {
                if e.tag == "i" {
                    return Some(e);
                }
                if let Some(found) = e.first_italic() {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Remove and return the first `<i>` descendant, depth-first. The run
    /// is detached so its text is not double-counted by later scans.
    pub fn take_first_italic(&mut self) -> Option<Element> {
        let mut idx = 0;
        while idx < self.children.len() {
            let is_italic = matches!(&self.children[idx], Node::Element(e) if e.tag == "i");
            if is_italic {
                if let Node::Element(e) = self.children.remove(idx) {
                    return Some(e);
                }
            } else if let Node::Element(child) = &mut self.children[idx] {
                if let Some(found) = child.take_first_italic() {
                    return Some(found);
                }
            }
            idx += 1;
        }
        None
    }
}

/// All elements of the tree in document (preorder) order.
pub fn preorder(root: &Element) -> Vec<&Element> {
    fn visit<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
        out.push(el);
        for child in &el.children {
            if let Node::Element(e) = child {
                visit(e, out);
            }
        }
    }
    let mut out = Vec::new();
    visit(root, &mut out);
    out
}

/// Parse chapter markup into a tree rooted at a synthetic `#document`
/// element. Never fails: unparseable trailing input is dropped and every
/// open element is closed at EOF.
pub fn parse(html: &str) -> Element {
    let mut reader = Reader::from_str(html);
    reader.config_mut().check_end_names = false;

    let mut stack: Vec<Element> = vec![Element::new("#document")];

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let tag = tag_name(&e);
                if BLOCK_TAGS.contains(&tag.as_str()) {
                    close_open_paragraph(&mut stack);
                }
                let element = Element {
                    tag: tag.clone(),
                    attrs: read_attrs(&e),
                    children: Vec::new(),
                };
                if VOID_TAGS.contains(&tag.as_str()) {
                    attach(&mut stack, Node::Element(element));
                } else {
                    stack.push(element);
                }
            }
            Ok(Event::Empty(e)) => {
                let element = Element {
                    tag: tag_name(&e),
                    attrs: read_attrs(&e),
                    children: Vec::new(),
                };
                attach(&mut stack, Node::Element(element));
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(&t).into_owned());
                if !text.is_empty() {
                    attach(&mut stack, Node::Text(text));
                }
            }
            Ok(Event::End(e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_lowercase();
                // Orphan end tags are ignored; otherwise unwind to the
                // matching opener, closing anything left open in between.
                if stack.iter().skip(1).any(|el| el.tag == tag) {
                    while stack.len() > 1 {
                        let done = stack.last().is_some_and(|el| el.tag == tag);
                        if let Some(el) = stack.pop() {
                            attach(&mut stack, Node::Element(el));
                        }
                        if done {
                            break;
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            Ok(_) => {}
        }
    }

    while stack.len() > 1 {
        if let Some(el) = stack.pop() {
            attach(&mut stack, Node::Element(el));
        }
    }
    stack.pop().unwrap_or_else(|| Element::new("#document"))
}

fn close_open_paragraph(stack: &mut Vec<Element>) {
    if stack.last().is_some_and(|el| el.tag == "p") {
        if let Some(el) = stack.pop() {
            attach(stack, Node::Element(el));
        }
    }
}

fn attach(stack: &mut [Element], node: Node) {
    if let Some(top) = stack.last_mut() {
        top.children.push(node);
    }
}

fn tag_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_lowercase()
}

fn read_attrs(e: &BytesStart) -> Vec<(String, String)> {
    e.attributes()
        .with_checks(false)
        .filter_map(Result::ok)
        .map(|a| {
            let key = String::from_utf8_lossy(a.key.as_ref()).to_lowercase();
            let value = a
                .unescape_value()
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| String::from_utf8_lossy(&a.value).into_owned());
            (key, value)
        })
        .collect()
}

// ── Tests ──
