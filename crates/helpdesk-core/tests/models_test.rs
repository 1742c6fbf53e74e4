use helpdesk_core::models::*;
use proptest::prelude::*;

fn group_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Network Operations",
        "Security",
        "Desktop Support",
        "Email & Collaboration",
        "Application Support",
    ])
    .prop_map(str::to_string)
}

fn group_score() -> impl Strategy<Value = GroupScore> {
    (group_name(), 0u8..=255, ".{0,20}").prop_map(|(n, c, r)| GroupScore::new(n, c, r))
}

proptest! {
    #[test]
    fn alternatives_never_repeat_primary_and_stay_bounded(
        primary in group_score(),
        alternatives in prop::collection::vec(group_score(), 0..8),
    ) {
        let result = ClassificationResult::new(primary, alternatives);
        prop_assert!(result.alternative_groups.len() <= 2);
        prop_assert!(result
            .alternative_groups
            .iter()
            .all(|g| g.name != result.primary_group.name));
        for g in result.group_names() {
            prop_assert!(!g.is_empty());
        }
    }

    #[test]
    fn confidence_always_within_percentage_range(value in any::<f64>()) {
        let c = Confidence::from_f64(value);
        prop_assert!(c.value() <= 100);
    }
}

#[test]
fn similarity_outcome_failed_has_no_results() {
    let outcome = SimilarityOutcome::failed("store unreachable");
    assert!(!outcome.success);
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.matched_count, 0);
    assert_eq!(outcome.error.as_deref(), Some("store unreachable"));
    assert!(outcome.top().is_none());
}

#[test]
fn similarity_outcome_find_reports_position() {
    let outcome = SimilarityOutcome::succeeded(
        vec![
            SimilarityMatch::new("Email & Collaboration", 75, 5),
            SimilarityMatch::new("Desktop Support", 40, 2),
        ],
        7,
    );
    let (idx, m) = outcome.find("Desktop Support").unwrap();
    assert_eq!(idx, 1);
    assert_eq!(m.count, 2);
    assert!(outcome.find("Security").is_none());
}

#[test]
fn similarity_outcome_serializes_camel_case_and_omits_empty_error() {
    let outcome = SimilarityOutcome::succeeded(vec![SimilarityMatch::new("Security", 90, 9)], 10);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["matchedCount"], 10);
    assert!(json.get("error").is_none());
}

#[test]
fn ticket_classification_serializes_final_key() {
    let classification = TicketClassification {
        pattern: ClassificationResult::primary_only(GroupScore::new("Security", 70, "phish")),
        similarity: SimilarityOutcome::failed("cold start"),
        recommendation: FinalRecommendation {
            group: "Security".into(),
            confidence: Confidence::new(70),
            source: RecommendationSource::PatternBased,
            reasoning: "phish".into(),
        },
    };
    let json = serde_json::to_value(&classification).unwrap();
    assert_eq!(json["final"]["source"], "pattern-based");
    assert_eq!(json["final"]["confidence"], 70);
}

#[test]
fn historical_ticket_embedding_text_joins_fields() {
    let ticket = HistoricalTicket::new("T-1", " Printer offline ", "floor 3 ", None);
    assert_eq!(ticket.embedding_text(), "Printer offline floor 3");
}
