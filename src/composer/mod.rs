pub mod escape;

use crate::domain::{
    build_metadata, build_structured_data, HomeContent, SiteProfile, TimestampView,
};
use anyhow::{Context as _, Result};
use chrono::{DateTime, FixedOffset};
use derive_more::derive::Display;
use tera::{Context, Tera};
use tracing::debug;

const HOME_TEMPLATE: &str = "home.html";

/// A fully rendered HTML page.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", _0)]
pub struct Document(String);

impl Document {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Turns the site constants, the static copy and one instant into the home page.
///
/// Templates are compiled once in [`PageComposer::new`]; [`PageComposer::render`] holds no state
/// between calls, so one composer is shared by every request.
pub struct PageComposer {
    tera: Tera,
    site: SiteProfile,
    content: &'static HomeContent,
}

impl PageComposer {
    pub fn new(site: SiteProfile, content: &'static HomeContent) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(HOME_TEMPLATE, include_str!("../../templates/home.html"))
            .context("Failed to compile home template")?;
        // every value is escaped; the JSON-LD block is pre-escaped and marked safe in the template
        tera.set_escape_fn(escape::html);

        Ok(Self {
            tera,
            site,
            content,
        })
    }

    /// Renders the page for `now`, which is expected in the display offset already.
    ///
    /// The output depends on `now` only through the "updated" label and the copyright year.
    pub fn render(&self, now: DateTime<FixedOffset>) -> Result<Document> {
        let metadata = build_metadata(&self.site);
        let structured_data = build_structured_data(&self.site);
        let json_ld = escape::json_for_script(&structured_data)
            .context("Failed to serialize structured data")?;
        let timestamp = TimestampView::new(now);

        let mut context = Context::new();
        context.insert("head", &metadata.tags());
        context.insert("json_ld", &json_ld);
        context.insert("site_name", self.site.name);
        context.insert("content", self.content);
        context.insert("updated_label", &timestamp.updated_label());
        context.insert("updated_iso", &timestamp.iso());
        context.insert("year", &timestamp.copyright_year());

        let html = self
            .tera
            .render(HOME_TEMPLATE, &context)
            .context("Failed to render home template")?;

        debug!("Composer: rendered home page ({} bytes)", html.len());
        Ok(Document(html))
    }
}
