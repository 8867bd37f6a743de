//! Tests for the detail region transition table

use super::super::body::BodyState;
use super::super::engine::{Outcome, RegionMachine, structure_region};
use super::super::path::GroupLevel;
use super::super::warnings::{Region, StructureWarning};
use super::path_strings;
use crate::config::AttachmentPolicy;
use crate::edifact::Segment;
use crate::edifact::tests::{dtm, lin, loc, nad, pia, qty, sts, tagged};
use crate::error::MsconsError;

fn structure(segments: &[Segment]) -> (Vec<String>, Vec<StructureWarning>) {
    let result = structure_region::<BodyState>(segments, 0, AttachmentPolicy::Lenient).unwrap();
    (path_strings(&result.entries), result.warnings)
}

#[test]
fn test_single_measurement_paths() {
    let segments = vec![
        nad("DP"),
        loc("DE01"),
        lin("1"),
        qty("1.0"),
        dtm("163", "202501080000+00"),
        dtm("164", "202501080015+00"),
        sts("Z32"),
    ];

    let (paths, warnings) = structure(&segments);

    assert_eq!(
        paths,
        vec![
            "SG5.1",
            "SG5.1.SG6.1",
            "SG5.1.SG6.1.SG9.1",
            "SG5.1.SG6.1.SG9.1.SG10.1",
            "SG5.1.SG6.1.SG9.1.SG10.1.DTM.1",
            "SG5.1.SG6.1.SG9.1.SG10.1.DTM.2",
            "SG5.1.SG6.1.SG9.1.SG10.1.STS.1",
        ]
    );
    assert!(warnings.is_empty());
}

#[test]
fn test_period_before_measurement_attaches_to_metering_point() {
    let (paths, warnings) = structure(&[nad("DP"), loc("DE01"), dtm("163", "202501080000+00")]);

    assert_eq!(paths, vec!["SG5.1", "SG5.1.SG6.1", "SG5.1.SG6.1.DTM.1"]);
    assert!(warnings.is_empty());
}

#[test]
fn test_metering_point_and_measurement_periods_count_separately() {
    let segments = vec![
        nad("DP"),
        loc("DE01"),
        dtm("163", "a"),
        dtm("164", "b"),
        lin("1"),
        qty("1.0"),
        dtm("163", "c"),
    ];

    let (paths, _) = structure(&segments);

    assert!(paths.contains(&"SG5.1.SG6.1.DTM.2".to_string()));
    assert!(paths.contains(&"SG5.1.SG6.1.SG9.1.SG10.1.DTM.1".to_string()));
}

#[test]
fn test_new_metering_point_resets_product_numbering() {
    let segments = vec![
        nad("DP"),
        loc("DE01"),
        lin("1"),
        lin("2"),
        loc("DE02"),
        lin("1"),
        qty("1.0"),
    ];

    let (paths, warnings) = structure(&segments);

    assert_eq!(
        paths,
        vec![
            "SG5.1",
            "SG5.1.SG6.1",
            "SG5.1.SG6.1.SG9.1",
            "SG5.1.SG6.1.SG9.2",
            "SG5.1.SG6.2",
            "SG5.1.SG6.2.SG9.1",
            "SG5.1.SG6.2.SG9.1.SG10.1",
        ]
    );
    assert!(warnings.is_empty());
}

#[test]
fn test_new_product_resets_measurement_numbering() {
    let segments = vec![
        nad("DP"),
        loc("DE01"),
        lin("1"),
        qty("1.0"),
        qty("2.0"),
        lin("2"),
        pia("1-1:1.29.0"),
        qty("3.0"),
    ];

    let (paths, _) = structure(&segments);

    assert!(paths.contains(&"SG5.1.SG6.1.SG9.1.SG10.2".to_string()));
    assert!(paths.contains(&"SG5.1.SG6.1.SG9.2.PIA.1".to_string()));
    assert!(paths.contains(&"SG5.1.SG6.1.SG9.2.SG10.1".to_string()));
}

#[test]
fn test_reference_and_characteristic_groups() {
    let segments = vec![
        nad("DP"),
        loc("DE01"),
        Segment::Reference(Default::default()),
        Segment::Characteristic(Default::default()),
        Segment::Reference(Default::default()),
    ];

    let (paths, warnings) = structure(&segments);

    assert_eq!(
        paths,
        vec![
            "SG5.1",
            "SG5.1.SG6.1",
            "SG5.1.SG6.1.SG7.1",
            "SG5.1.SG6.1.SG7.2",
            "SG5.1.SG6.1.SG8.1",
        ]
    );
    assert!(warnings.is_empty());
}

#[test]
fn test_orphan_status_is_dropped() {
    let segments = vec![nad("DP"), loc("DE01"), sts("Z32")];
    let result = structure_region::<BodyState>(&segments, 10, AttachmentPolicy::Lenient).unwrap();

    assert_eq!(path_strings(&result.entries), vec!["SG5.1", "SG5.1.SG6.1"]);
    assert_eq!(
        result.warnings,
        vec![StructureWarning::Orphan {
            region: Region::Body,
            position: 12,
            tag: "STS".to_string(),
            parent: GroupLevel::Sg10,
        }]
    );
}

#[test]
fn test_orphan_status_is_fatal_in_strict_mode() {
    let segments = vec![nad("DP"), loc("DE01"), sts("Z32")];
    let result = structure_region::<BodyState>(&segments, 10, AttachmentPolicy::Strict);

    match result {
        Err(MsconsError::OrphanSegment {
            region,
            tag,
            position,
        }) => {
            assert_eq!(region, "body");
            assert_eq!(tag, "STS");
            assert_eq!(position, 12);
        }
        other => panic!("expected orphan error, got {:?}", other),
    }
}

#[test]
fn test_group_openers_without_parent_are_orphans() {
    let (paths, warnings) = structure(&[loc("DE01"), lin("1"), qty("1.0"), pia("x")]);

    assert!(paths.is_empty());
    assert_eq!(warnings.len(), 4);
    assert!(warnings.iter().all(StructureWarning::is_orphan));
}

#[test]
fn test_unknown_tag_is_reported() {
    let (paths, warnings) = structure(&[nad("DP"), tagged("FTX")]);

    assert_eq!(paths, vec!["SG5.1"]);
    assert!(matches!(
        &warnings[..],
        [StructureWarning::Unrecognized { tag, position: 1, .. }] if tag == "FTX"
    ));
}

#[test]
fn test_unrecognized_tags_survive_strict_mode() {
    let result =
        structure_region::<BodyState>(&[nad("DP"), tagged("FTX")], 0, AttachmentPolicy::Strict)
            .unwrap();
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_step_is_pure() {
    let state = BodyState::default();
    let first = state.clone().step(0, &nad("DP"));
    let second = state.step(0, &nad("DP"));

    assert_eq!(first, second);
    assert!(matches!(first.outcome, Outcome::Placed(_)));
}

#[test]
fn test_fresh_machine_per_run() {
    let segments = vec![nad("DP"), loc("DE01"), lin("1"), qty("1.0"), sts("Z32")];

    let first = structure(&segments);
    let second = structure(&segments);

    assert_eq!(first, second);
}
