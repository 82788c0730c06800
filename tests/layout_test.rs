use release_tree::classifier::classify;
use release_tree::config::{Config, LayoutConfig};
use release_tree::domain::{
    BranchDirection, Highlight, ReleaseId, ReviewRecord, SentimentCounts, SentimentLabel,
};
use release_tree::layout::{build_layout, LayoutBuilder};
use release_tree::SentimentClassifier;

fn review(content: &str, score: f64, release: &str) -> ReviewRecord {
    ReviewRecord::new(content, score, release)
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classification_reference_cases() {
    assert_eq!(classify("Great app", Some(1.0)), SentimentLabel::Positive);
    assert_eq!(classify("terrible bug", Some(5.0)), SentimentLabel::Positive);
    assert_eq!(classify("ok I guess", Some(3.0)), SentimentLabel::Neutral);
    assert_eq!(classify("", Some(2.0)), SentimentLabel::Negative);
}

#[test]
fn test_classification_is_total() {
    let texts = ["", "great", "bug", "GREAT BUG", "😀 émoji", "\n\t", "ok"];
    let scores = [
        None,
        Some(f64::NAN),
        Some(f64::INFINITY),
        Some(-1.0e300),
        Some(0.0),
        Some(2.0),
        Some(3.0),
        Some(4.0),
        Some(1.0e300),
    ];

    for text in texts {
        for score in scores {
            let label = classify(text, score);
            assert!(SentimentLabel::ALL.contains(&label));
        }
    }
}

#[test]
fn test_score_thresholds_are_inclusive() {
    assert_eq!(classify("", Some(4.0)), SentimentLabel::Positive);
    assert_eq!(classify("", Some(3.0)), SentimentLabel::Neutral);
    assert_eq!(classify("", Some(2.0)), SentimentLabel::Negative);
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_reference_layout_two_releases() {
    let records = vec![
        review("great", 5.0, "42.0"),
        review("love", 5.0, "42.0"),
        review("amazing", 5.0, "43.0"),
    ];
    let config = LayoutConfig::default();
    let layout = build_layout(&records);

    assert_eq!(layout.len(), 2);
    assert_eq!(layout[0].vertical_position, config.base);
    assert_eq!(layout[0].direction.sign(), -1);
    assert_eq!(layout[0].highlight, Highlight::Positive);
    assert_eq!(layout[0].positive(), 2);
    assert_eq!(layout[1].vertical_position, config.base + config.step);
    assert_eq!(layout[1].direction.sign(), 1);
}

#[test]
fn test_empty_input_gives_empty_layout() {
    assert!(build_layout(&[]).is_empty());
}

#[test]
fn test_counts_cover_every_record() {
    let records: Vec<ReviewRecord> = (0..50)
        .map(|i| {
            let text = match i % 4 {
                0 => "good",
                1 => "bad",
                2 => "",
                _ => "whatever",
            };
            review(text, (i % 6) as f64, &format!("{}.0", i % 7))
        })
        .collect();

    let layout = build_layout(&records);
    let total: usize = layout.iter().map(|a| a.total()).sum();
    assert_eq!(total, records.len());
    assert_eq!(layout.len(), 7);

    for aggregate in &layout {
        let expected = records
            .iter()
            .filter(|r| r.release == aggregate.release)
            .count();
        assert_eq!(aggregate.total(), expected);
    }
}

#[test]
fn test_directions_alternate_and_positions_increase() {
    let records: Vec<ReviewRecord> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|r| review("", 3.0, r))
        .collect();
    let layout = build_layout(&records);

    assert_eq!(layout[0].direction, BranchDirection::Left);
    for pair in layout.windows(2) {
        assert_eq!(pair[1].direction, pair[0].direction.flipped());
        assert_eq!(pair[1].vertical_position - pair[0].vertical_position, 2.0);
    }
}

#[test]
fn test_highlights_from_counts() {
    let mut records = Vec::new();
    // 42.0: 4 positive, 1 neutral, 1 negative
    for _ in 0..4 {
        records.push(review("good", 5.0, "42.0"));
    }
    records.push(review("", 3.0, "42.0"));
    records.push(review("", 1.0, "42.0"));
    // 42.5: 3 positive, 2 neutral, 4 negative
    for _ in 0..3 {
        records.push(review("nice", 4.0, "42.5"));
    }
    for _ in 0..2 {
        records.push(review("", 3.0, "42.5"));
    }
    for _ in 0..4 {
        records.push(review("poor", 1.0, "42.5"));
    }
    // 43.6: 0 positive, 2 neutral, 5 negative
    for _ in 0..2 {
        records.push(review("", 3.0, "43.6"));
    }
    for _ in 0..5 {
        records.push(review("worst", 2.0, "43.6"));
    }

    let layout = build_layout(&records);
    assert_eq!(layout[0].counts, SentimentCounts::new(4, 1, 1));
    assert_eq!(layout[0].highlight, Highlight::Positive);
    assert_eq!(layout[1].counts, SentimentCounts::new(3, 2, 4));
    assert_eq!(layout[1].highlight, Highlight::None);
    assert_eq!(layout[2].counts, SentimentCounts::new(0, 2, 5));
    assert_eq!(layout[2].highlight, Highlight::Negative);
}

#[test]
fn test_layout_is_repeatable() {
    let records = vec![
        review("good", 4.0, "42.0"),
        review("bug", 1.0, "42.5"),
        review("", 3.0, "42.5"),
        ReviewRecord {
            content: None,
            score: None,
            release: ReleaseId::Unknown,
        },
    ];
    let builder = LayoutBuilder::from_config(&Config::default());

    let first = builder.build_layout(&records);
    let second = builder.build_layout(&records);
    assert_eq!(first, second);
}

#[test]
fn test_custom_constants() {
    let config = LayoutConfig {
        base: 1.0,
        step: 3.0,
        horizontal_reach: 4.5,
        branch_rise: 0.5,
        ..LayoutConfig::default()
    };
    let builder = LayoutBuilder::new(SentimentClassifier::default(), config);
    let layout = builder.build_layout(&[review("", 3.0, "x"), review("", 3.0, "y")]);

    assert_eq!(layout[1].vertical_position, 4.0);
    assert_eq!(layout[1].branch.end.x, 4.5);
    assert_eq!(layout[1].branch.end.y, 4.5);
    assert_eq!(layout[0].branch.end.x, -4.5);
}
