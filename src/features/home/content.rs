use super::articles::{ADVANCED_PLANT_CARE, COMPREHENSIVE_PLANT_CARE, PLANTCARE_KNOWLEDGE};
use crate::domain::content::{
    Action, Article, Card, CardBody, FaqEntry, FaqSection, Guides, Hero, HomeContent, Span,
};

pub static HOME: HomeContent = HomeContent {
    top_bar: "🌱 Plant happiness starts here • Updated",
    hero: Hero {
        heading: "Care for Every Leaf, Grow with Confidence",
        lead: &[
            Span::Strong("iLovePlantCare"),
            Span::Text(" helps you nurture healthier houseplants through science-backed tips, simple routines, and visual guides for every season."),
        ],
        actions: &[
            Action {
                label: "Explore Guides",
                href: "#guides",
            },
            Action {
                label: "Learn Watering Basics",
                href: "#watering",
            },
            Action {
                label: "Find Light Levels",
                href: "#light",
            },
        ],
        featured: Card {
            title: "Featured Topics",
            body: CardBody::List(&[
                "💧 Proper watering techniques",
                "🌤️ Light and humidity needs",
                "🪴 Soil and fertilizer types",
                "🍃 Pest prevention & treatment",
            ]),
        },
    },
    guides: Guides {
        id: "guides",
        heading: "Beginner-Friendly Plant Care Guides",
        intro: &[&[Span::Text("Whether you’re caring for a pothos, fiddle-leaf fig, or peace lily, our plant library covers step-by-step care routines, watering intervals, and light placement for every environment.")]],
        cards: &[
            Card {
                title: "🌿 Watering Schedules",
                body: CardBody::Text("Learn how to recognize signs of overwatering or dryness, and how to adjust watering frequency by soil type and humidity."),
            },
            Card {
                title: "☀️ Light & Placement",
                body: CardBody::Text("Understand the difference between low-light, medium-light, and bright indirect spots, with visual diagrams for indoor setups."),
            },
            Card {
                title: "🌱 Soil & Nutrition",
                body: CardBody::Text("Discover soil mixes for succulents, tropicals, and ferns, plus how to safely fertilize during active growth seasons."),
            },
        ],
    },
    articles: ARTICLES,
    faq: FaqSection {
        id: "faq",
        heading: "Frequently Asked Questions",
        entries: PAGE_FAQ,
    },
    footer_tagline: "Growing knowledge, one leaf at a time.",
};

const ARTICLES: &[Article] = &[
    PLANTCARE_KNOWLEDGE,
    COMPREHENSIVE_PLANT_CARE,
    ADVANCED_PLANT_CARE,
];

// the visible FAQ is shorter than the one published in the JSON-LD
const PAGE_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What is iLovePlantCare?",
        answer: "iLovePlantCare is a guide for plant lovers, offering practical care routines, environment tips, and visual references to help you grow healthy houseplants.",
    },
    FaqEntry {
        question: "Are the guides beginner-friendly?",
        answer: "Absolutely. Each guide explains terms clearly and includes images or diagrams for visual learners.",
    },
    FaqEntry {
        question: "How often should I water my plants?",
        answer: "It depends on the species and your home environment. We provide general watering intervals with visual dryness indicators to customize your schedule.",
    },
    FaqEntry {
        question: "Can I find my plant in your database?",
        answer: "Yes, our searchable database includes hundreds of plants with care summaries, preferred light levels, and soil types.",
    },
];
