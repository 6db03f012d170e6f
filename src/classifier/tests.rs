use super::*;

fn entry(pos: i64, prev: Option<i64>) -> StandingsEntry {
    let e = StandingsEntry::new(format!("p-{}", pos), format!("Player {}", pos), pos);
    match prev {
        Some(p) => e.with_previous(p),
        None => e,
    }
}

#[test]
fn test_three_entry_podium_scenario() {
    let entries = vec![entry(1, Some(2)), entry(2, Some(1)), entry(3, Some(3))];
    let out = classify(&entries, 3).unwrap();
    let summary: Vec<(Movement, u64, Classification)> = out
        .iter()
        .map(|a| (a.movement, a.movement_magnitude, a.classification))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Movement::Up, 1, Classification::Podium(1)),
            (Movement::Down, 1, Classification::Podium(2)),
            (Movement::Steady, 0, Classification::Podium(3)),
        ]
    );
}

#[test]
fn test_missing_previous_is_unranked() {
    let out = classify(&[entry(7, None)], 16).unwrap();
    assert_eq!(out[0].movement, Movement::Unranked);
    assert_eq!(out[0].movement_magnitude, 0);
    assert_eq!(out[0].classification, Classification::Qualifier);
}

#[test]
fn test_magnitudes() {
    let out = classify(&[entry(4, Some(12)), entry(12, Some(4))], 0).unwrap();
    assert_eq!((out[0].movement, out[0].movement_magnitude), (Movement::Up, 8));
    assert_eq!((out[1].movement, out[1].movement_magnitude), (Movement::Down, 8));
}

#[test]
fn test_steady_for_equal_positions() {
    for pos in 1..=40 {
        let out = classify(&[entry(pos, Some(pos))], 16).unwrap();
        assert_eq!(out[0].movement, Movement::Steady);
        assert_eq!(out[0].movement_magnitude, 0);
    }
}

#[test]
fn test_output_preserves_length_and_order() {
    // Deliberately not sorted by position.
    let entries = vec![entry(9, Some(1)), entry(2, None), entry(30, Some(30)), entry(5, Some(6))];
    let out = classify(&entries, 8).unwrap();
    assert_eq!(out.len(), entries.len());
    let ids: Vec<&str> = out.iter().map(|a| a.entry.id.as_str()).collect();
    assert_eq!(ids, vec!["p-9", "p-2", "p-30", "p-5"]);
}

#[test]
fn test_podium_regardless_of_qualifier_count() {
    for qualifier_count in 3..=40 {
        for pos in 1..=3 {
            assert_eq!(
                classification_of(pos, qualifier_count),
                Classification::Podium(pos as u8)
            );
        }
    }
}

#[test]
fn test_qualifier_boundaries() {
    assert_eq!(classification_of(4, 16), Classification::Qualifier);
    assert_eq!(classification_of(16, 16), Classification::Qualifier);
    assert_eq!(classification_of(17, 16), Classification::None);
    // Zero qualifiers: only podium is possible.
    assert_eq!(classification_of(2, 0), Classification::Podium(2));
    assert_eq!(classification_of(4, 0), Classification::None);
    // A threshold under three still leaves the podium intact.
    assert_eq!(classification_of(3, 1), Classification::Podium(3));
}

#[test]
fn test_empty_input_is_empty_output() {
    assert!(classify(&[], 16).unwrap().is_empty());
}

#[test]
fn test_invalid_entry_aborts_whole_batch() {
    let entries = vec![entry(1, Some(1)), entry(0, None), entry(3, None)];
    let err = classify(&entries, 3).unwrap_err();
    match err {
        LeaderboardError::InvalidEntry { name, .. } => assert_eq!(name, "Player 0"),
        other => panic!("unexpected error: {other}"),
    }

    let entries = vec![entry(2, Some(-4))];
    assert!(matches!(
        classify(&entries, 3),
        Err(LeaderboardError::InvalidEntry { .. })
    ));
}

#[test]
fn test_ties_are_classified_as_given() {
    let out = classify(&[entry(2, Some(3)), entry(2, Some(2))], 3).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].classification, Classification::Podium(2));
    assert_eq!(out[1].movement, Movement::Steady);
}

#[test]
fn test_row_class_names() {
    assert_eq!(Classification::Podium(1).row_class(), "podium-1");
    assert_eq!(Classification::Qualifier.row_class(), "qualifier");
    assert_eq!(Classification::None.row_class(), "");
}

#[test]
fn test_entry_reads_upstream_json() {
    let json = r#"{"id":"p-1","name":"Ben Riesenbach","position":1,"previousPosition":2,
                   "points":44,"currentTag":6,"roundsPlayed":3,"averageScorePerRound":14.7}"#;
    let e: StandingsEntry = serde_json::from_str(json).unwrap();
    assert_eq!(e.current_position, 1);
    assert_eq!(e.previous_position, Some(2));
    assert_eq!(e.current_tag, Some(6));

    let annotated = classify(&[e], 16).unwrap();
    let out = serde_json::to_value(&annotated[0]).unwrap();
    assert_eq!(out["movement"], "up");
    assert_eq!(out["movementMagnitude"], 1);
    assert_eq!(out["name"], "Ben Riesenbach");
}
