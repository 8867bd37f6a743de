//! Tests for header / detail / summary partitioning

use super::super::splitter::split_regions;
use crate::edifact::tests::{bgm, lin, nad, unb, unh, uns, unt, unz};
use crate::error::MsconsError;

#[test]
fn test_regions_are_contiguous() {
    let segments = vec![unb(), unh(), bgm(), uns(), nad("DP"), lin("1"), unt("6"), unz()];
    let regions = split_regions(&segments).unwrap();

    assert_eq!(regions.header.len(), 4);
    assert_eq!(regions.detail.len(), 2);
    assert_eq!(regions.summary.len(), 2);
    assert_eq!(regions.detail_offset, 4);
    assert_eq!(regions.summary_offset, 6);
    assert_eq!(regions.header.last().map(|s| s.tag()), Some("UNS"));
    assert_eq!(regions.summary[0].tag(), "UNT");
    assert_eq!(
        regions.header.len() + regions.detail.len() + regions.summary.len(),
        segments.len()
    );
}

#[test]
fn test_empty_detail_region() {
    let segments = vec![unh(), uns(), unt("3")];
    let regions = split_regions(&segments).unwrap();

    assert!(regions.detail.is_empty());
    assert_eq!(regions.summary.len(), 1);
}

#[test]
fn test_first_anchor_wins() {
    let segments = vec![uns(), nad("DP"), uns(), unt("4"), unt("4")];
    let regions = split_regions(&segments).unwrap();

    assert_eq!(regions.header.len(), 1);
    assert_eq!(regions.detail.len(), 2);
    assert_eq!(regions.summary.len(), 2);
}

#[test]
fn test_missing_section_control() {
    let segments = [unb(), unh(), nad("DP"), unt("3")];
    let result = split_regions(&segments);
    assert!(matches!(result, Err(MsconsError::MissingAnchor { tag: "UNS" })));
}

#[test]
fn test_missing_message_trailer() {
    let segments = [unb(), unh(), uns(), nad("DP"), unz()];
    let result = split_regions(&segments);
    assert!(matches!(result, Err(MsconsError::MissingAnchor { tag: "UNT" })));
}

#[test]
fn test_trailer_before_section_control() {
    let segments = [unh(), unt("2"), uns()];
    let result = split_regions(&segments);
    assert!(matches!(
        result,
        Err(MsconsError::AnchorsOutOfOrder {
            section_control: 2,
            trailer: 1
        })
    ));
}
