//! Deterministic, indented XML rendering for sitemap documents.
//!
//! Every element fragment carries its own indentation and trailing newline, so a
//! rendered document is exactly `header + fragments + footer`. The accumulator
//! relies on this to know the size of a file before writing it.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::errors::{Result, SitemapError};

/// Namespace placed on every sitemap root element.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const INDENT: &str = "  ";

fn emit<'a>(writer: &mut Writer<Vec<u8>>, event: impl Into<Event<'a>>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| SitemapError::Xml(e.to_string()))
}

fn whitespace(writer: &mut Writer<Vec<u8>>, text: &str) -> Result<()> {
    emit(writer, Event::Text(BytesText::from_escaped(text)))
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner()).map_err(|e| SitemapError::Xml(e.to_string()))
}

/// Renders `<tag>` with one text child per `(name, text)` pair, in the given order.
///
/// The element is indented `depth` levels, children one level deeper, and every
/// line ends with a newline. Text content is escaped.
pub fn element(tag: &str, children: &[(&str, &str)], depth: usize) -> Result<String> {
    let outer = INDENT.repeat(depth);
    let inner = INDENT.repeat(depth + 1);
    let mut writer = Writer::new(Vec::new());

    whitespace(&mut writer, &outer)?;
    emit(&mut writer, Event::Start(BytesStart::new(tag)))?;
    whitespace(&mut writer, "\n")?;
    for (name, text) in children {
        whitespace(&mut writer, &inner)?;
        emit(&mut writer, Event::Start(BytesStart::new(*name)))?;
        emit(&mut writer, Event::Text(BytesText::new(text)))?;
        emit(&mut writer, Event::End(BytesEnd::new(*name)))?;
        whitespace(&mut writer, "\n")?;
    }
    whitespace(&mut writer, &outer)?;
    emit(&mut writer, Event::End(BytesEnd::new(tag)))?;
    whitespace(&mut writer, "\n")?;

    finish(writer)
}

/// XML declaration plus the opening root tag, optionally carrying an `xmlns` attribute.
pub fn document_header(root: &str, namespace: Option<&str>) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;
    whitespace(&mut writer, "\n")?;

    let mut start = BytesStart::new(root);
    if let Some(ns) = namespace {
        start.push_attribute(("xmlns", ns));
    }
    emit(&mut writer, Event::Start(start))?;
    whitespace(&mut writer, "\n")?;

    finish(writer)
}

/// Closing root tag.
pub fn document_footer(root: &str) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    emit(&mut writer, Event::End(BytesEnd::new(root)))?;
    whitespace(&mut writer, "\n")?;
    finish(writer)
}

/// Bytes a document adds beyond the concatenated fragments of its body.
pub fn document_overhead(root: &str, namespace: Option<&str>) -> Result<usize> {
    Ok(document_header(root, namespace)?.len() + document_footer(root)?.len())
}

/// Wraps already-rendered fragments into a complete document.
pub fn render_document(root: &str, namespace: Option<&str>, body: &str) -> Result<String> {
    let header = document_header(root, namespace)?;
    let footer = document_footer(root)?;

    let mut document = String::with_capacity(header.len() + body.len() + footer.len());
    document.push_str(&header);
    document.push_str(body);
    document.push_str(&footer);
    Ok(document)
}
