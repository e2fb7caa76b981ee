//! Reads sitemap files produced in tests back into plain values.

#![allow(dead_code)]

use std::path::Path;

use core_smap::decompress_to_string;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A parsed sitemap document.
#[derive(Debug, Clone, Default)]
pub struct ParsedSitemap {
    pub root: String,
    pub namespace: Option<String>,
    pub entries: Vec<ParsedEntry>,
}

impl ParsedSitemap {
    pub fn locations(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.loc.clone()).collect()
    }
}

/// A single `<url>` or `<sitemap>` element.
#[derive(Debug, Clone, Default)]
pub struct ParsedEntry {
    pub tag: String,
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<String>,
}

/// Parses a rendered sitemap; panics on malformed XML.
pub fn parse_sitemap(xml: &str) -> ParsedSitemap {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut sitemap = ParsedSitemap::default();
    let mut stack: Vec<String> = Vec::new();
    let mut current: Option<ParsedEntry> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                match stack.len() {
                    0 => {
                        sitemap.root = name.clone();
                        sitemap.namespace = e
                            .try_get_attribute("xmlns")
                            .unwrap()
                            .map(|attr| attr.unescape_value().unwrap().to_string());
                    }
                    1 => {
                        current = Some(ParsedEntry {
                            tag: name.clone(),
                            ..Default::default()
                        })
                    }
                    _ => {}
                }
                stack.push(name);
            }
            Ok(Event::Text(text)) => {
                let value = text.unescape().unwrap().to_string();
                if let (Some(entry), Some(field)) = (current.as_mut(), stack.last()) {
                    match field.as_str() {
                        "loc" => entry.loc = value,
                        "lastmod" => entry.lastmod = Some(value),
                        "changefreq" => entry.changefreq = Some(value),
                        "priority" => entry.priority = Some(value),
                        other => panic!("Unexpected text in <{}>", other),
                    }
                }
            }
            Ok(Event::End(_)) => {
                stack.pop();
                if stack.len() == 1 {
                    sitemap.entries.extend(current.take());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("XML parsing error: {}", e),
            _ => {}
        }
    }

    assert!(stack.is_empty(), "Unclosed elements: {:?}", stack);
    sitemap
}

/// Reads a file written by a `UrlSet`, decompressing `.gz` files.
pub fn read_raw(path: &Path) -> String {
    let bytes = std::fs::read(path).unwrap();
    match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => decompress_to_string(&bytes).unwrap(),
        _ => String::from_utf8(bytes).unwrap(),
    }
}

pub fn read_sitemap(path: &Path) -> ParsedSitemap {
    parse_sitemap(&read_raw(path))
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
