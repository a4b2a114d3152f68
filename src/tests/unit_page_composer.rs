use crate::composer::PageComposer;
use crate::domain::{build_structured_data, FaqEntry, SiteProfile, ILOVEPLANTCARE};
use crate::features::home::HOME;
use crate::tests::{at_offset, json_ld_block, utc};

fn composer() -> PageComposer {
    PageComposer::new(ILOVEPLANTCARE, &HOME).expect("home template should compile")
}

#[test]
fn test_updated_label_is_calendar_date_of_now() {
    let page = composer()
        .render(at_offset(utc(2025, 3, 7, 15, 30), 0))
        .unwrap();

    assert!(page
        .as_str()
        .contains(r#"<time datetime="2025-03-07T15:30:00Z">3/7/2025</time>"#));
    assert!(page.as_str().contains("Plant happiness starts here • Updated"));
}

// the same instant lands on different calendar days depending on the display offset
#[test]
fn test_updated_label_follows_display_offset() {
    let composer = composer();
    let instant = utc(2025, 12, 31, 23, 30);

    let in_utc = composer.render(at_offset(instant, 0)).unwrap();
    let in_berlin = composer.render(at_offset(instant, 120)).unwrap();

    assert!(in_utc.as_str().contains(">12/31/2025</time>"));
    assert!(in_utc.as_str().contains("© 2025 iLovePlantCare, Growing knowledge"));

    assert!(in_berlin.as_str().contains(">1/1/2026</time>"));
    assert!(in_berlin.as_str().contains("© 2026 iLovePlantCare, Growing knowledge"));
}

#[test]
fn test_different_days_render_differently() {
    let composer = composer();
    let monday = composer.render(at_offset(utc(2024, 2, 26, 8, 0), 0)).unwrap();
    let tuesday = composer.render(at_offset(utc(2024, 2, 27, 8, 0), 0)).unwrap();

    assert_ne!(monday, tuesday);
    assert!(monday.as_str().contains(">2/26/2024</time>"));
    assert!(tuesday.as_str().contains(">2/27/2024</time>"));
}

#[test]
fn test_copyright_year_matches_now() {
    let page = composer()
        .render(at_offset(utc(2031, 7, 4, 9, 0), 0))
        .unwrap();

    assert!(page.as_str().contains("© 2031 iLovePlantCare"));
}

#[test]
fn test_same_instant_renders_identical_bytes() {
    let composer = composer();
    let now = at_offset(utc(2025, 5, 20, 10, 15), -300);

    let first = composer.render(now).unwrap();
    let second = composer.render(now).unwrap();
    assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());

    // a fresh composer gives the same page too
    let third = PageComposer::new(ILOVEPLANTCARE, &HOME)
        .unwrap()
        .render(now)
        .unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_sections_are_addressable_in_order() {
    let html = composer()
        .render(at_offset(utc(2025, 1, 1, 0, 0), 0))
        .unwrap()
        .into_string();

    let ids = HOME.section_ids();
    assert_eq!(
        ids,
        vec![
            "guides",
            "plantcare-knowledge",
            "comprehensive-plant-care",
            "advanced-plant-care",
            "faq"
        ]
    );

    let positions: Vec<usize> = ids
        .iter()
        .map(|id| {
            html.find(&format!(r#"<section id="{}""#, id))
                .unwrap_or_else(|| panic!("missing section {}", id))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_head_and_copy_are_rendered() {
    let html = composer()
        .render(at_offset(utc(2025, 1, 1, 0, 0), 0))
        .unwrap()
        .into_string();

    assert!(html.contains(
        "<title>iLovePlantCare | Indoor Plant Care, Tips &amp; Guides for All Seasons</title>"
    ));
    assert!(html.contains(r#"<link rel="canonical" href="https://iloveplantcare.com/">"#));
    assert!(html.contains(
        r#"<meta property="og:image" content="https://iloveplantcare.com/og-image.jpg">"#
    ));
    assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
    assert_eq!(html.matches("<title>").count(), 1);

    // inline emphasis and escaped ampersands in the copy
    assert!(html.contains("<strong>light intensity</strong> and <strong>duration</strong>."));
    assert!(html.contains("<strong>iLovePlantCare</strong> helps you nurture"));
    assert!(html.contains("<li>🍃 Pest prevention &amp; treatment</li>"));

    // the visible FAQ is the short one
    assert_eq!(html.matches("<dt ").count(), 4);
}

#[test]
fn test_embedded_json_ld_matches_structured_data() {
    let html = composer()
        .render(at_offset(utc(2025, 1, 1, 0, 0), 0))
        .unwrap()
        .into_string();

    let embedded: serde_json::Value =
        serde_json::from_str(json_ld_block(&html)).expect("embedded JSON-LD should parse");
    let expected = serde_json::to_value(build_structured_data(&ILOVEPLANTCARE)).unwrap();

    assert_eq!(embedded, expected);
}

const HOSTILE: SiteProfile = SiteProfile {
    title: r#"Evil </script><script>alert("x")</script>"#,
    description: r#"He said "hi" & left '</script>'"#,
    website_description: "</script><!-- trailing",
    faq: &[FaqEntry {
        question: "</SCRIPT>?",
        answer: "\"quoted\" </script> answer",
    }],
    ..ILOVEPLANTCARE
};

// crafted copy must not close the JSON-LD script early or break out of an attribute
#[test]
fn test_hostile_site_copy_cannot_break_out() {
    let html = PageComposer::new(HOSTILE, &HOME)
        .unwrap()
        .render(at_offset(utc(2025, 1, 1, 0, 0), 0))
        .unwrap()
        .into_string();

    // the only closing script tag is the real one
    assert_eq!(html.to_lowercase().matches("</script").count(), 1);
    assert_eq!(html.matches("<script").count(), 1);

    let embedded: serde_json::Value =
        serde_json::from_str(json_ld_block(&html)).expect("JSON-LD should still parse");
    assert_eq!(
        embedded["@graph"][0]["description"],
        "</script><!-- trailing"
    );
    assert_eq!(embedded["@graph"][2]["mainEntity"][0]["name"], "</SCRIPT>?");
    assert_eq!(
        embedded["@graph"][2]["mainEntity"][0]["acceptedAnswer"]["text"],
        "\"quoted\" </script> answer"
    );

    assert!(html.contains(
        "<title>Evil &lt;/script&gt;&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;</title>"
    ));
    assert!(html.contains(
        r#"<meta name="description" content="He said &quot;hi&quot; &amp; left &#x27;&lt;/script&gt;&#x27;">"#
    ));
}
