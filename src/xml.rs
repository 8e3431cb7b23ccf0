//! Generic XML element tree
//!
//! The directory flattener needs children grouped by tag name with "zero,
//! one, or many" semantics: a tag that appears once and a tag that appears
//! fifty times both come back as a sequence, and an absent tag comes back
//! as an empty one. Building that shape here, straight from the event
//! stream, keeps the singular-vs-plural quirk of the source schema out of
//! the flattening logic entirely.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

/// An XML element: attributes keyed by name, children grouped by tag name.
///
/// Text content is discarded; the BIC directory schema is attribute-only.
#[derive(Debug, Clone, Default)]
pub struct Element {
    attributes: HashMap<String, String>,
    children: HashMap<String, Vec<Element>>,
}

impl Element {
    /// Attribute value by name, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// All children with the given tag, in document order.
    ///
    /// An absent tag yields an empty slice, never an error.
    pub fn children(&self, tag: &str) -> &[Element] {
        self.children.get(tag).map_or(&[], Vec::as_slice)
    }

    /// The first child with the given tag, if any.
    pub fn first_child(&self, tag: &str) -> Option<&Element> {
        self.children(tag).first()
    }
}

/// Parse text into an element tree.
///
/// The returned node is a synthetic document node; the document's root
/// element is its single child. Malformed markup is a parse error, and so
/// is a document containing no element at all.
pub fn parse_document(text: &str) -> Result<Element> {
    let mut reader = Reader::from_str(text);

    // Stack bottom is the synthetic document node.
    let mut stack: Vec<(String, Element)> = vec![(String::new(), Element::default())];

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let element = element_from_start(&start)?;
                stack.push((tag_name(&start), element));
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start)?;
                attach(&mut stack, tag_name(&start), element)?;
            }
            Ok(Event::End(_)) => {
                let (tag, element) = match stack.pop() {
                    Some(top) if !stack.is_empty() => top,
                    _ => return Err(Error::Parse("unexpected closing tag".to_string())),
                };
                attach(&mut stack, tag, element)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // text, comments, declarations, processing instructions
            Err(e) => return Err(Error::Parse(e.to_string())),
        }
    }

    if stack.len() != 1 {
        return Err(Error::Parse("unclosed element at end of document".to_string()));
    }
    let (_, document) = stack.remove(0);

    if document.children.is_empty() {
        return Err(Error::Parse("document has no root element".to_string()));
    }
    Ok(document)
}

fn tag_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn element_from_start(start: &BytesStart) -> Result<Element> {
    let mut attributes = HashMap::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::Parse(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Parse(e.to_string()))?
            .into_owned();
        attributes.insert(key, value);
    }
    Ok(Element {
        attributes,
        children: HashMap::new(),
    })
}

fn attach(stack: &mut [(String, Element)], tag: String, element: Element) -> Result<()> {
    let (_, parent) = stack
        .last_mut()
        .ok_or_else(|| Error::Parse("unexpected closing tag".to_string()))?;
    parent.children.entry(tag).or_default().push(element);
    Ok(())
}
