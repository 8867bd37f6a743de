//! End-to-end tests over a complete MSCONS interchange
//!
//! Exercises the public API only: parse, structure, extract, and the batch
//! processor writing JSON to disk.

use mscons_processor::config::MsconsConfig;
use mscons_processor::{
    DocumentProcessor, ParseOptions, Segment, StructureWarning, classify_message, market_roles,
    parse_interchange, quantity_records, structure_interchange,
};
use std::fs;
use tempfile::TempDir;

/// Two metering points, the second with two products; decimal comma
const INTERCHANGE: &str = "UNA:+,? '\
UNB+UNOC:3+9900000000001:500+9900000000002:500+250201:0600+REF42++EM'\
UNH+MSG42+MSCONS:D:04B:UN:2.4c'\
BGM+Z48+DOC42+9'\
DTM+137:202502010600?+01:303'\
NAD+MS+9900000000001::293'\
NAD+MR+9900000000002::293'\
UNS+D'\
NAD+DP'\
LOC+172+DE000A'\
DTM+163:202501312300?+00:303'\
DTM+164:202502012300?+00:303'\
RFF+MG:METER1'\
LIN+1'\
PIA+5+1-1?:1.29.0:SRW'\
QTY+220:1,25:KWH'\
DTM+163:202501312300?+00:303'\
DTM+164:202501312315?+00:303'\
LOC+172+DE000B'\
CCI+Z30++Z06'\
LIN+1'\
PIA+5+1-1?:1.29.0:SRW'\
QTY+220:2,5:KWH'\
STS+Z32++Z88'\
LIN+2'\
PIA+5+1-1?:2.29.0:SRW'\
QTY+220:0,75:KWH'\
DTM+163:202501312300?+00:303'\
DTM+164:202501312315?+00:303'\
FTX+ACB+++note'\
UNT+29+MSG42'\
UNZ+1+REF42'";

#[test]
fn test_parse_uses_declared_decimal_mark() {
    let interchange = parse_interchange(INTERCHANGE, &ParseOptions::default()).unwrap();

    assert_eq!(interchange.separators.decimal_mark, ',');
    assert_eq!(interchange.segments.len(), 31);
    assert_eq!(interchange.unrecognized_count(), 1);
}

#[test]
fn test_structure_second_metering_point() {
    let (_, document) = structure_interchange(INTERCHANGE, &ParseOptions::default()).unwrap();

    for path in [
        "SG5.1.SG6.1.SG7.1",
        "SG5.1.SG6.1.DTM.2",
        "SG5.1.SG6.2",
        "SG5.1.SG6.2.SG8.1",
        "SG5.1.SG6.2.SG9.1.SG10.1.STS.1",
        "SG5.1.SG6.2.SG9.2.PIA.1",
        "SG5.1.SG6.2.SG9.2.SG10.1.DTM.2",
    ] {
        assert!(document.get(path).is_some(), "missing {}", path);
    }

    let Some(Segment::Location(loc)) = document.get("SG5.1.SG6.2") else {
        panic!("expected LOC at SG5.1.SG6.2");
    };
    assert_eq!(loc.code.as_deref(), Some("DE000B"));
}

#[test]
fn test_unknown_segment_is_reported_not_fatal() {
    let (_, document) = structure_interchange(INTERCHANGE, &ParseOptions::strict()).unwrap();

    assert_eq!(document.len(), 30);
    assert!(matches!(
        &document.warnings[..],
        [StructureWarning::Unrecognized { tag, position: 28, .. }] if tag == "FTX"
    ));
}

#[test]
fn test_extract_views() {
    let (interchange, document) =
        structure_interchange(INTERCHANGE, &ParseOptions::default()).unwrap();

    let roles = market_roles(&document.header);
    assert_eq!(roles["MS"], "9900000000001");
    assert_eq!(roles["MR"], "9900000000002");

    let classification = classify_message(&document.header);
    assert_eq!(classification.document_code.as_deref(), Some("Z48"));
    assert_eq!(classification.application_reference.as_deref(), Some("EM"));

    let records = quantity_records(&document.body);
    assert_eq!(records.len(), 3);

    let decimal_mark = interchange.separators.decimal_mark;
    let values: Vec<f64> = records
        .iter()
        .filter_map(|r| r.numeric_value(decimal_mark))
        .collect();
    assert_eq!(values, vec![1.25, 2.5, 0.75]);

    assert_eq!(records[1].metering_point.as_deref(), Some("DE000B"));
    assert_eq!(records[1].start, None);
    assert_eq!(records[1].status_reason.as_deref(), Some("Z88"));
    assert_eq!(records[2].obis_code.as_deref(), Some("1-1:2.29.0"));
    assert_eq!(
        records[2].start_time.map(|t| t.to_rfc3339()).as_deref(),
        Some("2025-01-31T23:00:00+00:00")
    );
}

#[tokio::test]
async fn test_batch_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("em.txt"), INTERCHANGE).unwrap();

    let output = temp_dir.path().join("out");
    let mut processor = DocumentProcessor::new(input, Some(output.clone()))
        .unwrap()
        .with_config(MsconsConfig::default().with_records());
    let stats = processor.process().await.unwrap();

    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_partial, 1);
    assert_eq!(stats.records_extracted, 3);

    let document: mscons_processor::StructuredDocument =
        serde_json::from_str(&fs::read_to_string(output.join("em.txt.json")).unwrap()).unwrap();
    let (_, expected) = structure_interchange(INTERCHANGE, &ParseOptions::default()).unwrap();
    assert_eq!(document, expected);

    assert!(output.join("em.txt.records.json").exists());
}
