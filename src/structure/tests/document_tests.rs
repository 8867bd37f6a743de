//! End-to-end structuring of complete interchanges

use super::super::{StructureWarning, structure_interchange, structure_segments};
use super::path_strings;
use crate::config::ParseOptions;
use crate::edifact::Segment;
use crate::edifact::tests::{
    SAMPLE_SEGMENT_COUNT, dtm, lin, loc, nad, qty, sample_interchange, sts, unh, uns, unt,
};
use crate::error::MsconsError;

#[test]
fn test_sample_header_and_footer() {
    let (_, document) = structure_interchange(&sample_interchange(), &ParseOptions::default()).unwrap();

    assert_eq!(
        path_strings(&document.header),
        vec![
            "UNB.1",
            "UNH.1",
            "BGM.1",
            "DTM.1",
            "SG1.1",
            "SG2.1",
            "SG2.1.SG4.1",
            "SG2.1.SG4.1.COM.1",
            "SG2.2",
            "UNS.1",
        ]
    );
    assert_eq!(path_strings(&document.footer), vec!["UNT.1", "UNZ.1"]);
}

#[test]
fn test_sample_body() {
    let (_, document) = structure_interchange(&sample_interchange(), &ParseOptions::default()).unwrap();

    assert_eq!(
        path_strings(&document.body),
        vec![
            "SG5.1",
            "SG5.1.SG6.1",
            "SG5.1.SG6.1.DTM.1",
            "SG5.1.SG6.1.DTM.2",
            "SG5.1.SG6.1.SG9.1",
            "SG5.1.SG6.1.SG9.1.PIA.1",
            "SG5.1.SG6.1.SG9.1.SG10.1",
            "SG5.1.SG6.1.SG9.1.SG10.1.DTM.1",
            "SG5.1.SG6.1.SG9.1.SG10.1.DTM.2",
            "SG5.1.SG6.1.SG9.1.SG10.2",
            "SG5.1.SG6.1.SG9.1.SG10.2.DTM.1",
            "SG5.1.SG6.1.SG9.1.SG10.2.DTM.2",
            "SG5.1.SG6.1.SG9.1.SG10.2.STS.1",
        ]
    );
}

#[test]
fn test_sample_is_placed_completely() {
    let (interchange, document) =
        structure_interchange(&sample_interchange(), &ParseOptions::strict()).unwrap();

    assert_eq!(interchange.segments.len(), SAMPLE_SEGMENT_COUNT);
    assert_eq!(document.len(), SAMPLE_SEGMENT_COUNT);
    assert!(document.warnings.is_empty());
    assert!(!document.has_data_loss());
}

#[test]
fn test_lookup_by_dotted_path() {
    let (_, document) = structure_interchange(&sample_interchange(), &ParseOptions::default()).unwrap();

    let Some(Segment::ProductIdentification(pia)) = document.get("SG5.1.SG6.1.SG9.1.PIA.1") else {
        panic!("PIA not found");
    };
    assert_eq!(pia.product_number.as_deref(), Some("1-1:1.29.0"));

    let Some(Segment::Quantity(qty)) = document.get("SG5.1.SG6.1.SG9.1.SG10.2") else {
        panic!("QTY not found");
    };
    assert_eq!(qty.value.as_deref(), Some("13.0"));

    assert!(document.get("SG5.1.SG6.1.SG9.1.SG10.3").is_none());
    assert!(document.get("not a path").is_none());
}

#[test]
fn test_structuring_is_idempotent() {
    let options = ParseOptions::default();
    let (_, first) = structure_interchange(&sample_interchange(), &options).unwrap();
    let (_, second) = structure_interchange(&sample_interchange(), &options).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_document_json_uses_dotted_keys() {
    let (_, document) = structure_interchange(&sample_interchange(), &ParseOptions::default()).unwrap();
    let json = serde_json::to_value(&document).unwrap();

    assert_eq!(json["body"]["SG5.1.SG6.1.SG9.1.SG10.2.STS.1"]["segment_tag"], "STS");
    assert_eq!(json["header"]["BGM.1"]["document_code"], "7");

    let restored: super::super::StructuredDocument = serde_json::from_value(json).unwrap();
    assert_eq!(restored, document);
}

#[test]
fn test_segment_count_mismatch_is_reported() {
    let segments = vec![unh(), uns(), nad("DP"), loc("DE01"), unt("9")];
    let document = structure_segments(&segments, &ParseOptions::default()).unwrap();

    assert_eq!(
        document.warnings,
        vec![StructureWarning::SegmentCountMismatch {
            declared: "9".to_string(),
            actual: 5,
        }]
    );
    assert!(!document.has_data_loss());
}

#[test]
fn test_orphans_are_dropped_with_positions() {
    let segments = vec![
        unh(),
        uns(),
        nad("DP"),
        loc("DE01"),
        sts("Z32"),
        lin("1"),
        qty("1.0"),
        dtm("163", "a"),
        unt("9"),
    ];
    let document = structure_segments(&segments, &ParseOptions::default()).unwrap();

    assert_eq!(document.body.len(), 5);
    assert!(matches!(
        &document.warnings[..],
        [StructureWarning::Orphan { position: 4, .. }]
    ));
    assert!(document.has_data_loss());
}

#[test]
fn test_strict_mode_aborts_on_orphan() {
    let segments = vec![unh(), uns(), nad("DP"), loc("DE01"), sts("Z32"), unt("6")];
    let result = structure_segments(&segments, &ParseOptions::strict());

    assert!(matches!(
        result,
        Err(MsconsError::OrphanSegment { position: 4, .. })
    ));
}

#[test]
fn test_missing_section_control_in_interchange() {
    let text = sample_interchange().replace("UNS+D'\n", "");
    let result = structure_interchange(&text, &ParseOptions::default());

    assert!(matches!(result, Err(MsconsError::MissingAnchor { tag: "UNS" })));
}
