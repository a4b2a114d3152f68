use crate::domain::site::SiteProfile;
use serde::Serialize;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// schema.org `@graph` for the home page: WebSite, Organization and FAQPage, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@graph")]
    pub graph: Vec<GraphNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum GraphNode {
    WebSite(WebSite),
    Organization(Organization),
    #[serde(rename = "FAQPage")]
    FaqPage(FaqPage),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebSite {
    pub name: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "potentialAction")]
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub logo: String,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqPage {
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    // a single object, never a list
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub text: String,
}

impl StructuredData {
    pub fn questions(&self) -> &[Question] {
        self.graph
            .iter()
            .find_map(|node| match node {
                GraphNode::FaqPage(page) => Some(page.main_entity.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }
}

pub fn build_structured_data(site: &SiteProfile) -> StructuredData {
    let website = WebSite {
        name: site.name.to_string(),
        url: site.url.to_string(),
        description: site.website_description.to_string(),
        potential_action: SearchAction {
            schema_type: "SearchAction",
            target: site.search_target(),
            query_input: "required name=search_term_string",
        },
    };

    let organization = Organization {
        name: site.name.to_string(),
        url: site.url.to_string(),
        logo: site.asset_url(site.logo),
        same_as: site.same_as.iter().map(|s| s.to_string()).collect(),
    };

    let faq_page = FaqPage {
        main_entity: site
            .faq
            .iter()
            .map(|entry| Question {
                schema_type: "Question",
                name: entry.question.to_string(),
                accepted_answer: Answer {
                    schema_type: "Answer",
                    text: entry.answer.to_string(),
                },
            })
            .collect(),
    };

    StructuredData {
        context: SCHEMA_CONTEXT,
        graph: vec![
            GraphNode::WebSite(website),
            GraphNode::Organization(organization),
            GraphNode::FaqPage(faq_page),
        ],
    }
}
