use serde::Serialize;

// inline run inside a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(&'static str),
    Strong(&'static str),
}

pub type Paragraph = &'static [Span];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CardBody {
    Text(&'static str),
    List(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub body: CardBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub heading: &'static str,
    pub lead: Paragraph,
    pub actions: &'static [Action],
    pub featured: Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guides {
    pub id: &'static str,
    pub heading: &'static str,
    pub intro: &'static [Paragraph],
    pub cards: &'static [Card],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub heading: &'static str,
    pub paragraphs: &'static [Paragraph],
}

/// A long prose section: intro, titled topics, closing words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: &'static str,
    pub heading: &'static str,
    pub intro: &'static [Paragraph],
    pub topics: &'static [Topic],
    pub closing: &'static [Paragraph],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqSection {
    pub id: &'static str,
    pub heading: &'static str,
    pub entries: &'static [FaqEntry],
}

/// The static copy of the home page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HomeContent {
    pub top_bar: &'static str,
    pub hero: Hero,
    pub guides: Guides,
    pub articles: &'static [Article],
    pub faq: FaqSection,
    pub footer_tagline: &'static str,
}

impl HomeContent {
    /// Ids of every addressable section, top to bottom.
    pub fn section_ids(&self) -> Vec<&'static str> {
        let mut ids = vec![self.guides.id];
        ids.extend(self.articles.iter().map(|a| a.id));
        ids.push(self.faq.id);
        ids
    }
}
