use crate::domain::site::SiteProfile;
use derive_more::derive::Display;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OpenGraphField {
    #[display("og:title")]
    Title,
    #[display("og:description")]
    Description,
    #[display("og:type")]
    Type,
    #[display("og:url")]
    Url,
    #[display("og:image")]
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TwitterField {
    #[display("twitter:card")]
    Card,
    #[display("twitter:title")]
    Title,
    #[display("twitter:description")]
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadKind {
    Title,
    Description,
    Keywords,
    Robots,
    OpenGraph(OpenGraphField),
    Twitter(TwitterField),
    Canonical,
    ThemeColor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadEntry {
    pub kind: HeadKind,
    pub value: String,
}

impl HeadEntry {
    fn new(kind: HeadKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

// what the template needs to print one entry: which element, which attribute names it, and the value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadTag {
    pub element: &'static str,
    pub attribute: Option<&'static str>,
    pub key: Option<String>,
    pub value: String,
}

impl From<&HeadEntry> for HeadTag {
    fn from(entry: &HeadEntry) -> Self {
        let (element, attribute, key) = match entry.kind {
            HeadKind::Title => ("title", None, None),
            HeadKind::Description => ("meta", Some("name"), Some("description".to_string())),
            HeadKind::Keywords => ("meta", Some("name"), Some("keywords".to_string())),
            HeadKind::Robots => ("meta", Some("name"), Some("robots".to_string())),
            HeadKind::OpenGraph(field) => ("meta", Some("property"), Some(field.to_string())),
            HeadKind::Twitter(field) => ("meta", Some("name"), Some(field.to_string())),
            HeadKind::Canonical => ("link", Some("rel"), Some("canonical".to_string())),
            HeadKind::ThemeColor => ("meta", Some("name"), Some("theme-color".to_string())),
        };

        HeadTag {
            element,
            attribute,
            key,
            value: entry.value.to_owned(),
        }
    }
}

/// Ordered head entries for the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    entries: Vec<HeadEntry>,
}

impl PageMetadata {
    pub fn entries(&self) -> &[HeadEntry] {
        &self.entries
    }

    pub fn count(&self, kind: HeadKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub fn get(&self, kind: HeadKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.value.as_str())
    }

    pub fn tags(&self) -> Vec<HeadTag> {
        self.entries.iter().map(HeadTag::from).collect()
    }
}

pub fn build_metadata(site: &SiteProfile) -> PageMetadata {
    let entries = vec![
        HeadEntry::new(HeadKind::Title, site.title),
        HeadEntry::new(HeadKind::Description, site.description),
        HeadEntry::new(HeadKind::Keywords, site.keywords.join(", ")),
        HeadEntry::new(HeadKind::Robots, site.robots),
        HeadEntry::new(HeadKind::OpenGraph(OpenGraphField::Title), site.title),
        HeadEntry::new(
            HeadKind::OpenGraph(OpenGraphField::Description),
            site.description,
        ),
        HeadEntry::new(HeadKind::OpenGraph(OpenGraphField::Type), "website"),
        HeadEntry::new(HeadKind::OpenGraph(OpenGraphField::Url), site.url),
        HeadEntry::new(
            HeadKind::OpenGraph(OpenGraphField::Image),
            site.asset_url(site.og_image),
        ),
        HeadEntry::new(HeadKind::Twitter(TwitterField::Card), "summary_large_image"),
        HeadEntry::new(HeadKind::Twitter(TwitterField::Title), site.title),
        HeadEntry::new(HeadKind::Twitter(TwitterField::Description), site.description),
        HeadEntry::new(HeadKind::Canonical, site.url),
        HeadEntry::new(HeadKind::ThemeColor, site.theme_color),
    ];

    PageMetadata { entries }
}
