//! Test fixtures for the EDIFACT parser
//!
//! The sample interchange is a trimmed metered-values message (one metering
//! point, two quarter-hour readings) and is shared with the structuring,
//! extraction and processor tests.

use super::Segment;
use super::segments::*;


/// A complete MSCONS interchange with one segment per line
pub fn sample_interchange() -> String {
    r#"UNA:+.? '
UNB+UNOC:3+9905048000007:500+9985046000001:500+250109:0130+CS0000000GAZ65++TL'
UNH+GAZ65MSG+MSCONS:D:04B:UN:2.4c'
BGM+7+GAZ65BGM+9'
DTM+137:202501090130?+00:303'
RFF+Z13:13025'
NAD+MS+9905048000007::293'
CTA+IC+:Hans Muster'
COM+0221123456:TE'
NAD+MR+9985046000001::293'
UNS+D'
NAD+DP'
LOC+172+DE0001234567890000000000000012345'
DTM+163:202501080000?+00:303'
DTM+164:202501090000?+00:303'
LIN+1'
PIA+5+1-1?:1.29.0:SRW'
QTY+220:12.5:KWH'
DTM+163:202501080000?+00:303'
DTM+164:202501080015?+00:303'
QTY+67:13.0:KWH'
DTM+163:202501080015?+00:303'
DTM+164:202501080030?+00:303'
STS+Z32++Z88'
UNT+23+GAZ65MSG'
UNZ+1+CS0000000GAZ65'
"#
    .to_string()
}

/// Same interchange without line breaks between segments
pub fn sample_interchange_single_line() -> String {
    sample_interchange().replace('\n', "")
}

/// Number of segments in [`sample_interchange`], UNA excluded
pub const SAMPLE_SEGMENT_COUNT: usize = 25;

// Segment builders for hand-assembled sequences

pub fn nad(qualifier: &str) -> Segment {
    Segment::Party(Party {
        qualifier: Some(qualifier.to_string()),
        ..Default::default()
    })
}

pub fn loc(code: &str) -> Segment {
    Segment::Location(Location {
        qualifier: Some("172".to_string()),
        code: Some(code.to_string()),
        related_code: None,
    })
}

pub fn lin(item: &str) -> Segment {
    Segment::LineItem(LineItem {
        item_number: Some(item.to_string()),
    })
}

pub fn qty(value: &str) -> Segment {
    Segment::Quantity(Quantity {
        qualifier: Some("220".to_string()),
        value: Some(value.to_string()),
        unit: Some("KWH".to_string()),
    })
}

pub fn dtm(function_code: &str, value: &str) -> Segment {
    Segment::DateTime(DateTimePeriod {
        function_code: Some(function_code.to_string()),
        value: Some(value.to_string()),
        format_code: Some("303".to_string()),
    })
}

pub fn sts(category: &str) -> Segment {
    Segment::Status(Status {
        category_code: Some(category.to_string()),
        reason_code: None,
    })
}

pub fn pia(product_number: &str) -> Segment {
    Segment::ProductIdentification(ProductIdentification {
        qualifier: Some("5".to_string()),
        product_number: Some(product_number.to_string()),
        product_type: Some("SRW".to_string()),
    })
}

pub fn tagged(tag: &str) -> Segment {
    Segment::Unrecognized {
        tag: tag.to_string(),
    }
}

pub fn unb() -> Segment {
    Segment::InterchangeHeader(InterchangeHeader::default())
}

pub fn unh() -> Segment {
    Segment::MessageHeader(MessageHeader::default())
}

pub fn bgm() -> Segment {
    Segment::BeginningOfMessage(BeginningOfMessage::default())
}

pub fn uns() -> Segment {
    Segment::SectionControl(SectionControl {
        section_id: Some("D".to_string()),
    })
}

pub fn unt(count: &str) -> Segment {
    Segment::MessageTrailer(MessageTrailer {
        segment_count: Some(count.to_string()),
        message_reference: None,
    })
}

pub fn unz() -> Segment {
    Segment::InterchangeTrailer(InterchangeTrailer::default())
}
