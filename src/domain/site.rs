use crate::domain::content::FaqEntry;

/// Everything the head tags and the JSON-LD graph are built from.
///
/// The live site uses [`ILOVEPLANTCARE`]; nothing about it is configurable at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    pub name: &'static str,
    // base url, always with a trailing slash
    pub url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub robots: &'static str,
    pub theme_color: &'static str,
    // relative to `url`
    pub og_image: &'static str,
    pub logo: &'static str,
    // the WebSite node carries its own, shorter description
    pub website_description: &'static str,
    pub same_as: &'static [&'static str],
    pub search_query_param: &'static str,
    pub faq: &'static [FaqEntry],
}

impl SiteProfile {
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    /// e.g. `https://iloveplantcare.com/?q={search_term_string}`
    pub fn search_target(&self) -> String {
        format!("{}?{}={{search_term_string}}", self.url, self.search_query_param)
    }
}

pub const ILOVEPLANTCARE: SiteProfile = SiteProfile {
    name: "iLovePlantCare",
    url: "https://iloveplantcare.com/",
    title: "iLovePlantCare | Indoor Plant Care, Tips & Guides for All Seasons",
    description: "Learn how to care for your indoor plants with iLovePlantCare. Explore watering schedules, light levels, humidity tips, and beginner-friendly care guides for hundreds of houseplants.",
    keywords: &[
        "plant care tips",
        "indoor plant guide",
        "watering schedule",
        "light requirements for plants",
        "humidity for houseplants",
        "plant problems and solutions",
        "fertilizer schedule",
        "plant care database",
        "how to care for indoor plants",
        "plant care beginners",
    ],
    robots: "index,follow,max-image-preview:large",
    theme_color: "#4CAF50",
    og_image: "og-image.jpg",
    logo: "logo.png",
    website_description: "iLovePlantCare helps you understand, grow, and maintain healthy indoor plants with care guides, watering reminders, and environment tips.",
    same_as: &[
        "https://www.youtube.com/@iLovePlantCare",
        "https://www.pinterest.com/iloveplantcare/",
        "https://www.instagram.com/iloveplantcare/",
    ],
    search_query_param: "q",
    faq: SEARCH_FAQ,
};

// answers published to search engines, not the ones shown on the page
const SEARCH_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What is iLovePlantCare?",
        answer: "iLovePlantCare is a free resource that teaches plant owners how to care for houseplants through easy guides, videos, and seasonal checklists.",
    },
    FaqEntry {
        question: "Does iLovePlantCare only focus on indoor plants?",
        answer: "Primarily yes. Our focus is on indoor and container gardening, though many care tips also apply to outdoor plants and balcony gardens.",
    },
    FaqEntry {
        question: "Will iLovePlantCare have videos?",
        answer: "Yes. The iLovePlantCare YouTube channel shares weekly visual guides on repotting, pruning, and plant propagation.",
    },
    FaqEntry {
        question: "Can I identify plants using iLovePlantCare?",
        answer: "Our searchable plant database includes visual identifiers for hundreds of species, with care needs and common problems listed.",
    },
    FaqEntry {
        question: "How do watering reminders work?",
        answer: "We provide general watering intervals by plant type and local humidity conditions, helping users customize their own care rhythm.",
    },
    FaqEntry {
        question: "Are all plant care guides free?",
        answer: "Yes. All written guides and videos are free to access. Optional downloadable planners may be offered later.",
    },
    FaqEntry {
        question: "Does iLovePlantCare recommend products?",
        answer: "We focus on education, not sales. Occasionally, tools or soil mixes may be mentioned when directly relevant to plant health.",
    },
];
