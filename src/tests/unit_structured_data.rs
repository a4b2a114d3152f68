use crate::composer::escape::json_for_script;
use crate::domain::{build_structured_data, ILOVEPLANTCARE};

#[test]
fn test_graph_has_three_nodes_in_order() {
    let data = build_structured_data(&ILOVEPLANTCARE);
    let json = serde_json::to_value(&data).unwrap();

    assert_eq!(json["@context"], "https://schema.org");
    let graph = json["@graph"].as_array().unwrap();
    assert_eq!(graph.len(), 3);
    assert_eq!(graph[0]["@type"], "WebSite");
    assert_eq!(graph[1]["@type"], "Organization");
    assert_eq!(graph[2]["@type"], "FAQPage");
}

// seven questions, and each carries a single Answer object rather than a list
#[test]
fn test_faq_has_seven_answered_questions() {
    let data = build_structured_data(&ILOVEPLANTCARE);
    assert_eq!(data.questions().len(), 7);

    let text = json_for_script(&data).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).expect("should be valid JSON");
    let questions = json["@graph"][2]["mainEntity"].as_array().unwrap();

    assert_eq!(questions.len(), 7);
    for question in questions {
        assert_eq!(question["@type"], "Question");
        let answer = &question["acceptedAnswer"];
        assert!(answer.is_object());
        assert_eq!(answer["@type"], "Answer");
        assert!(!answer["text"].as_str().unwrap().is_empty());
    }

    assert_eq!(questions[0]["name"], "What is iLovePlantCare?");
    assert_eq!(questions[6]["name"], "Does iLovePlantCare recommend products?");
}

#[test]
fn test_search_action_and_profiles() {
    let data = build_structured_data(&ILOVEPLANTCARE);
    let json = serde_json::to_value(&data).unwrap();

    let action = &json["@graph"][0]["potentialAction"];
    assert_eq!(action["@type"], "SearchAction");
    assert_eq!(
        action["target"],
        "https://iloveplantcare.com/?q={search_term_string}"
    );
    assert_eq!(action["query-input"], "required name=search_term_string");

    let organization = &json["@graph"][1];
    assert_eq!(organization["logo"], "https://iloveplantcare.com/logo.png");
    assert_eq!(organization["sameAs"].as_array().unwrap().len(), 3);
    assert_eq!(
        organization["sameAs"][0],
        "https://www.youtube.com/@iLovePlantCare"
    );
}
