//! Writer helpers for DOAP RDF/XML output.
//!
//! The writer only serializes values that are already resolved; interpolation
//! happens before anything reaches it.

use std::io::Write;

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const DOAP_NS: &str = "http://usefulinc.com/ns/doap#";
pub const FOAF_NS: &str = "http://xmlns.com/foaf/0.1/";

pub const RDF_RESOURCE: &str = "rdf:resource";
pub const RDF_NODE_ID: &str = "rdf:nodeID";

const BANNER_WIDTH: usize = 21;
const RULE_WIDTH: usize = 72;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("element name should be defined")]
    MissingName,
    #[error("comment should be defined")]
    MissingComment,
    #[error("no element is open")]
    NothingOpen,
    #[error("failed to write markup: {0}")]
    Write(String),
}

pub struct DoapWriter<W: Write> {
    inner: Writer<W>,
    open: Vec<String>,
}

impl<W: Write> DoapWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            inner: Writer::new(out),
            open: Vec::new(),
        }
    }

    pub fn pretty(out: W) -> Self {
        Self {
            inner: Writer::new_with_indent(out, b' ', 2),
            open: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }

    pub fn write_declaration(&mut self) -> Result<(), MarkupError> {
        self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    /// "DO NOT EDIT" banner with the generator version and time.
    pub fn write_header(&mut self, generated_at: DateTime<Utc>) -> Result<(), MarkupError> {
        let equals = "=".repeat(BANNER_WIDTH);
        let rule = "=".repeat(RULE_WIDTH);
        self.write_comment(&rule)?;
        self.write_comment(&format!("{equals} - DO NOT EDIT THIS FILE! - {equals}"))?;
        self.write_comment(&rule)?;
        self.write_comment("Any modifications will be overwritten.")?;
        self.write_comment(&format!(
            "Generated by doap {} on {}",
            env!("CARGO_PKG_VERSION"),
            generated_at.format("%Y-%m-%d %H:%M UTC")
        ))?;
        self.write_comment(&rule)
    }

    pub fn write_comment(&mut self, comment: &str) -> Result<(), MarkupError> {
        if comment.is_empty() {
            return Err(MarkupError::MissingComment);
        }
        let text = format!(" {} ", escape_comment(comment));
        self.event(Event::Comment(BytesText::from_escaped(text)))
    }

    pub fn write_start_element(
        &mut self,
        prefix: Option<&str>,
        name: &str,
    ) -> Result<(), MarkupError> {
        self.write_start_element_with(prefix, name, &[])
    }

    pub fn write_start_element_with(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        attributes: &[(&str, &str)],
    ) -> Result<(), MarkupError> {
        let qname = qualified(prefix, name)?;
        let mut start = BytesStart::new(qname.as_str());
        for attr in attributes {
            start.push_attribute(*attr);
        }
        self.event(Event::Start(start))?;
        self.open.push(qname);
        Ok(())
    }

    pub fn write_end_element(&mut self) -> Result<(), MarkupError> {
        let qname = self.open.pop().ok_or(MarkupError::NothingOpen)?;
        self.event(Event::End(BytesEnd::new(qname)))
    }

    /// `<name>value</name>`. A `None` value writes nothing.
    pub fn write_element(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), MarkupError> {
        self.write_element_lang(prefix, name, value, None)
    }

    /// Like [`write_element`](Self::write_element) with an `xml:lang` attribute when
    /// `lang` is non-empty.
    pub fn write_element_lang(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        value: Option<&str>,
        lang: Option<&str>,
    ) -> Result<(), MarkupError> {
        let qname = qualified(prefix, name)?;
        let Some(value) = value else {
            return Ok(());
        };

        let mut start = BytesStart::new(qname.as_str());
        if let Some(lang) = lang.filter(|l| !l.is_empty()) {
            start.push_attribute(("xml:lang", lang));
        }
        self.event(Event::Start(start))?;
        self.event(Event::Text(BytesText::new(value)))?;
        self.event(Event::End(BytesEnd::new(qname)))
    }

    /// `<name rdf:resource="value"/>`. A `None` value writes nothing.
    pub fn write_rdf_resource_element(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), MarkupError> {
        self.write_empty_with(prefix, name, RDF_RESOURCE, value)
    }

    /// `<name rdf:nodeID="value"/>`. A `None` value writes nothing.
    pub fn write_rdf_node_id_element(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), MarkupError> {
        self.write_empty_with(prefix, name, RDF_NODE_ID, value)
    }

    fn write_empty_with(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        attribute: &str,
        value: Option<&str>,
    ) -> Result<(), MarkupError> {
        let qname = qualified(prefix, name)?;
        let Some(value) = value else {
            return Ok(());
        };
        let mut empty = BytesStart::new(qname.as_str());
        empty.push_attribute((attribute, value));
        self.event(Event::Empty(empty))
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), MarkupError> {
        self.inner
            .write_event(event)
            .map_err(|e| MarkupError::Write(e.to_string()))
    }
}

/// Break every `--` run and keep the body from ending in `-`; neither may appear
/// inside an XML comment.
fn escape_comment(comment: &str) -> String {
    let mut out = String::with_capacity(comment.len());
    let mut prev_dash = false;
    for c in comment.chars() {
        if c == '-' && prev_dash {
            out.push(' ');
        }
        out.push(c);
        prev_dash = c == '-';
    }
    if prev_dash {
        out.push(' ');
    }
    out
}

fn qualified(prefix: Option<&str>, name: &str) -> Result<String, MarkupError> {
    if name.is_empty() {
        return Err(MarkupError::MissingName);
    }
    Ok(match prefix.filter(|p| !p.is_empty()) {
        Some(p) => format!("{p}:{name}"),
        None => name.to_string(),
    })
}
