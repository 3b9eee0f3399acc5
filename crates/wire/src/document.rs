// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Generic XML-to-map conversion.
//!
//! Notifications arrive with wildly varying namespace prefixes and
//! single-vs-repeated elements, so the reader flattens everything into an
//! ordered mapping keyed by local element name: attributes are stored under
//! `@Name`, element text under `#text`, and repeated siblings collapse into a
//! list. Malformed input parses to an empty value — this boundary never
//! fails, by contract.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A parsed XML value.
///
/// Repeated sibling elements become a `List` only when more than one sibling
/// exists; callers must coerce single-or-many via [`XmlValue::as_list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlValue {
    /// Element text content (or an attribute value).
    Text(String),
    /// An element with attributes and/or children, in document order.
    Node(Vec<(String, XmlValue)>),
    /// Repeated sibling elements.
    List(Vec<XmlValue>),
}

impl XmlValue {
    /// An empty node, the result of parsing malformed input.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Node(Vec::new())
    }

    /// Returns whether this value carries no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Node(entries) => entries.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    /// Looks up the first entry with the given key on a node.
    ///
    /// Returns `None` for text and list values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Node(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Returns the text content of this value.
    ///
    /// A scalar yields itself, a node yields its `#text` entry, and a list
    /// defers to its first element — the single-or-many coercion in the
    /// reading direction.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Node(_) => self.get("#text").and_then(Self::text),
            Self::List(items) => items.first().and_then(Self::text),
        }
    }

    /// Returns the value of the attribute with the given local name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::List(items) => items.first().and_then(|v| v.attr(name)),
            _ => self.get(&format!("@{name}")).and_then(Self::text),
        }
    }

    /// Coerces this value into a list of one or more values.
    ///
    /// Repeated elements collapse to a single mapping unless multiple
    /// siblings exist; callers that expect "one or more" use this.
    #[must_use]
    pub fn as_list(&self) -> Vec<&Self> {
        match self {
            Self::List(items) => items.iter().collect(),
            _ => vec![self],
        }
    }

    /// Depth-first search for the first element with the given local name.
    ///
    /// Attribute and text entries are not matched, only element children.
    #[must_use]
    pub fn find_first(&self, local_name: &str) -> Option<&Self> {
        match self {
            Self::Text(_) => None,
            Self::Node(entries) => {
                for (key, value) in entries {
                    if key == local_name {
                        return Some(value);
                    }
                    if key.starts_with('@') || key.starts_with('#') {
                        continue;
                    }
                    if let Some(found) = value.find_first(local_name) {
                        return Some(found);
                    }
                }
                None
            }
            Self::List(items) => items.iter().find_map(|v| v.find_first(local_name)),
        }
    }

    /// Depth-first search for the first occurrence of the given attribute.
    #[must_use]
    pub fn find_first_attr(&self, name: &str) -> Option<&str> {
        let key: String = format!("@{name}");
        self.find_first_attr_inner(&key)
    }

    fn find_first_attr_inner(&self, key: &str) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Node(entries) => {
                for (k, value) in entries {
                    if k == key {
                        return value.text();
                    }
                    if k.starts_with('@') || k.starts_with('#') {
                        continue;
                    }
                    if let Some(found) = value.find_first_attr_inner(key) {
                        return Some(found);
                    }
                }
                None
            }
            Self::List(items) => items.iter().find_map(|v| v.find_first_attr_inner(key)),
        }
    }
}

/// An element under construction while its subtree is being read.
struct PendingElement {
    name: String,
    entries: Vec<(String, XmlValue)>,
    text: String,
}

impl PendingElement {
    fn finish(self) -> XmlValue {
        let trimmed: &str = self.text.trim();
        if self.entries.is_empty() {
            return XmlValue::Text(trimmed.to_string());
        }
        let mut entries: Vec<(String, XmlValue)> = self.entries;
        if !trimmed.is_empty() {
            entries.push((String::from("#text"), XmlValue::Text(trimmed.to_string())));
        }
        XmlValue::Node(entries)
    }
}

/// Appends a child, collapsing repeated keys into a list.
fn append_child(entries: &mut Vec<(String, XmlValue)>, name: String, value: XmlValue) {
    if let Some((_, existing)) = entries.iter_mut().find(|(k, _)| *k == name) {
        match existing {
            XmlValue::List(items) => items.push(value),
            _ => {
                let first: XmlValue = std::mem::replace(existing, XmlValue::empty());
                *existing = XmlValue::List(vec![first, value]);
            }
        }
        return;
    }
    entries.push((name, value));
}

/// Extracts the local element name, dropping any namespace prefix.
fn local_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

/// Collects the non-namespace attributes of an element as `@`-prefixed entries.
fn attribute_entries(element: &BytesStart<'_>) -> Vec<(String, XmlValue)> {
    let mut entries: Vec<(String, XmlValue)> = Vec::new();
    for attr in element.attributes().flatten() {
        if attr.key.as_ref().starts_with(b"xmlns") {
            continue;
        }
        let Ok(value) = attr.unescape_value() else {
            continue;
        };
        let name: String = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        entries.push((format!("@{name}"), XmlValue::Text(value.into_owned())));
    }
    entries
}

/// Parses an XML document into a generic ordered mapping.
///
/// The returned value is a node whose single entry maps the root element's
/// local name to its contents, so lookups read naturally:
/// `doc.get("Envelope")` and so on.
///
/// Malformed input — syntax errors, mismatched tags, stray text — yields an
/// **empty** value rather than an error; this boundary never fails.
#[must_use]
pub fn parse_document(xml: &str) -> XmlValue {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;
    let mut stack: Vec<PendingElement> = Vec::new();
    let mut roots: Vec<(String, XmlValue)> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(PendingElement {
                    name: local_name(&e),
                    entries: attribute_entries(&e),
                    text: String::new(),
                });
            }
            Ok(Event::Empty(e)) => {
                let element: PendingElement = PendingElement {
                    name: local_name(&e),
                    entries: attribute_entries(&e),
                    text: String::new(),
                };
                let name: String = element.name.clone();
                let value: XmlValue = element.finish();
                match stack.last_mut() {
                    Some(parent) => append_child(&mut parent.entries, name, value),
                    None => append_child(&mut roots, name, value),
                }
            }
            Ok(Event::Text(t)) => {
                if let (Some(top), Ok(text)) = (stack.last_mut(), t.unescape()) {
                    top.text.push_str(&text);
                }
            }
            Ok(Event::CData(t)) => {
                if let Some(top) = stack.last_mut() {
                    top.text
                        .push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                let Some(element) = stack.pop() else {
                    return XmlValue::empty();
                };
                let name: String = element.name.clone();
                let value: XmlValue = element.finish();
                match stack.last_mut() {
                    Some(parent) => append_child(&mut parent.entries, name, value),
                    None => append_child(&mut roots, name, value),
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => return XmlValue::empty(),
        }
    }

    // Unclosed elements mean the document was truncated.
    if !stack.is_empty() || roots.is_empty() {
        return XmlValue::empty();
    }

    XmlValue::Node(roots)
}
