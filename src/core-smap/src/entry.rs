//! Sitemap entries: one `<url>` or `<sitemap>` element.

use std::fmt::{self, Write};
use std::str::FromStr;

use chrono::{DateTime, TimeZone};

use crate::errors::{Result, SitemapError};
use crate::xml;

/// W3C datetime format used for `<lastmod>` unless the caller asks otherwise,
/// e.g. `2024-01-01T00:00:00+00:00`.
pub const W3C_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// How frequently the page is likely to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const ALL: [ChangeFrequency; 7] = [
        ChangeFrequency::Always,
        ChangeFrequency::Hourly,
        ChangeFrequency::Daily,
        ChangeFrequency::Weekly,
        ChangeFrequency::Monthly,
        ChangeFrequency::Yearly,
        ChangeFrequency::Never,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = SitemapError;

    /// Exact, case-sensitive match against the protocol's values.
    fn from_str(s: &str) -> Result<Self> {
        ChangeFrequency::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| SitemapError::InvalidValue(format!("Invalid change frequency `{}`", s)))
    }
}

/// Which element an entry serializes as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryKind {
    /// `<url>`: a content page, child of `<urlset>`.
    #[default]
    Url,
    /// `<sitemap>`: a reference to another sitemap file, child of `<sitemapindex>`.
    Sitemap,
}

impl EntryKind {
    pub fn tag(&self) -> &'static str {
        match self {
            EntryKind::Url => "url",
            EntryKind::Sitemap => "sitemap",
        }
    }
}

/// A serialized entry and its size in bytes (UTF-8 encoded, not characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub xml: String,
    pub bytes: usize,
}

/// One sitemap entry.
///
/// Setters consume the entry and return the updated value, so entries are built by chaining:
///
/// ```
/// use core_smap::{ChangeFrequency, Entry};
///
/// let entry = Entry::new("https://example.com/")
///     .unwrap()
///     .change_frequency(ChangeFrequency::Daily)
///     .priority(0.8);
/// assert!(entry.serialize().unwrap().xml.contains("<changefreq>daily</changefreq>"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    location: String,
    last_modified: Option<String>,
    change_frequency: Option<ChangeFrequency>,
    priority: f64,
    kind: EntryKind,
}

impl Entry {
    /// A content (`<url>`) entry. Fails if `location` is empty.
    pub fn new(location: impl Into<String>) -> Result<Self> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(SitemapError::InvalidInput("Entry location must not be empty".to_string()));
        }
        Ok(Self {
            location,
            last_modified: None,
            change_frequency: None,
            priority: 0.0,
            kind: EntryKind::Url,
        })
    }

    /// An index (`<sitemap>`) entry referencing another sitemap file.
    pub fn sitemap(location: impl Into<String>) -> Result<Self> {
        Ok(Self::new(location)?.mark_as_index_entry())
    }

    pub fn change_frequency(mut self, frequency: ChangeFrequency) -> Self {
        self.change_frequency = Some(frequency);
        self
    }

    /// Parses `frequency` first: an unknown value fails with `InvalidValue` and no entry is produced.
    pub fn change_frequency_str(self, frequency: &str) -> Result<Self> {
        let frequency = frequency.parse::<ChangeFrequency>()?;
        Ok(self.change_frequency(frequency))
    }

    /// Stores `date` formatted with the chrono `format` string.
    ///
    /// The format is not checked against the protocol. Only a format chrono cannot render is rejected.
    pub fn last_modified<Tz>(mut self, date: &DateTime<Tz>, format: &str) -> Result<Self>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut formatted = String::new();
        write!(formatted, "{}", date.format(format))
            .map_err(|_| SitemapError::InvalidValue(format!("Cannot format lastmod with `{}`", format)))?;
        self.last_modified = Some(formatted);
        Ok(self)
    }

    pub fn last_modified_w3c<Tz>(self, date: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let formatted = date.format(W3C_DATETIME_FORMAT).to_string();
        Self {
            last_modified: Some(formatted),
            ..self
        }
    }

    /// Any value is accepted. Exactly `0.0` means unset and is left out of the output.
    pub fn priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    pub fn mark_as_index_entry(mut self) -> Self {
        self.kind = EntryKind::Sitemap;
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn lastmod(&self) -> Option<&str> {
        self.last_modified.as_deref()
    }

    pub fn frequency(&self) -> Option<ChangeFrequency> {
        self.change_frequency
    }

    pub fn priority_value(&self) -> f64 {
        self.priority
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Renders the element with children in `loc, lastmod, changefreq, priority` order,
    /// indented to sit directly under a root element.
    pub fn serialize(&self) -> Result<Fragment> {
        let priority = (self.priority != 0.0).then(|| format_priority(self.priority));

        let mut children: Vec<(&str, &str)> = vec![("loc", self.location.as_str())];
        if let Some(lastmod) = self.last_modified.as_deref().filter(|s| !s.is_empty()) {
            children.push(("lastmod", lastmod));
        }
        if let Some(freq) = self.change_frequency {
            children.push(("changefreq", freq.as_str()));
        }
        if let Some(priority) = priority.as_deref() {
            children.push(("priority", priority));
        }

        let xml = xml::element(self.kind.tag(), &children, 1)?;
        let bytes = xml.len();
        Ok(Fragment { xml, bytes })
    }
}

/// Renders a priority with at most 14 significant digits, so `0.1 + 0.2` prints as `0.3`.
fn format_priority(priority: f64) -> String {
    let rounded = format!("{:.13e}", priority).parse::<f64>().unwrap_or(priority);
    rounded.to_string()
}

/// Anything `UrlSet::add` accepts: an entry, or a bare URL as shorthand for a minimal `<url>` entry.
pub trait IntoEntry {
    fn into_entry(self) -> Result<Entry>;
}

impl IntoEntry for Entry {
    fn into_entry(self) -> Result<Entry> {
        Ok(self)
    }
}

impl IntoEntry for &Entry {
    fn into_entry(self) -> Result<Entry> {
        Ok(self.clone())
    }
}

impl IntoEntry for &str {
    fn into_entry(self) -> Result<Entry> {
        Entry::new(self)
    }
}

impl IntoEntry for String {
    fn into_entry(self) -> Result<Entry> {
        Entry::new(self)
    }
}

impl IntoEntry for &url::Url {
    fn into_entry(self) -> Result<Entry> {
        Entry::new(self.as_str())
    }
}

impl IntoEntry for url::Url {
    fn into_entry(self) -> Result<Entry> {
        Entry::new(String::from(self))
    }
}
