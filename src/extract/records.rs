//! Flat views over a structured document.

use super::datetime::parse_edifact_datetime;
use crate::constants::{DTM_PERIOD_END, DTM_PERIOD_START};
use crate::edifact::Segment;
use crate::edifact::segments::DateTimePeriod;
use crate::structure::{GroupLevel, SegmentMap, SegmentPath};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Party qualifier (MS, MR, ...) to party id, from the header's SG2 groups
pub fn market_roles(header: &SegmentMap) -> BTreeMap<String, String> {
    header
        .iter()
        .filter(|(path, _)| path.depth() == 1 && path.last_level() == Some(GroupLevel::Sg2))
        .filter_map(|(_, segment)| match segment {
            Segment::Party(party) => Some((party.qualifier.clone()?, party.party_id.clone()?)),
            _ => None,
        })
        .collect()
}

/// What kind of message an interchange carries and who exchanged it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageClassification {
    pub document_code: Option<String>,
    pub document_name: Option<String>,
    /// UNB application reference (TL, EM, VL, ...)
    pub application_reference: Option<String>,
    pub message_type: Option<String>,
    pub message_reference: Option<String>,
    /// Party id of the MS role
    pub sender: Option<String>,
    /// Party id of the MR role
    pub receiver: Option<String>,
}

pub fn classify_message(header: &SegmentMap) -> MessageClassification {
    let mut classification = MessageClassification::default();

    if let Some(Segment::InterchangeHeader(unb)) = header.get(&SegmentPath::root(GroupLevel::Unb, 1)) {
        classification.application_reference = unb.application_reference.clone();
    }
    if let Some(Segment::MessageHeader(unh)) = header.get(&SegmentPath::root(GroupLevel::Unh, 1)) {
        classification.message_type = unh.message_type.clone();
        classification.message_reference = unh.message_reference.clone();
    }
    if let Some(Segment::BeginningOfMessage(bgm)) = header.get(&SegmentPath::root(GroupLevel::Bgm, 1)) {
        classification.document_code = bgm.document_code.clone();
        classification.document_name = bgm.document_name.clone();
    }

    let mut roles = market_roles(header);
    classification.sender = roles.remove("MS");
    classification.receiver = roles.remove("MR");

    classification
}

/// One measured quantity (SG10) with its context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantityRecord {
    /// Dotted path of the QTY segment
    pub path: String,
    /// LOC code of the enclosing SG6
    pub metering_point: Option<String>,
    /// PIA.1 product number of the enclosing SG9
    pub obis_code: Option<String>,
    pub qualifier: Option<String>,
    /// Raw value, decimal mark as in the interchange
    pub value: Option<String>,
    pub unit: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    /// Category and reason of the last STS in the group
    pub status_category: Option<String>,
    pub status_reason: Option<String>,
}

impl QuantityRecord {
    /// Value as a number, given the interchange's decimal mark
    pub fn numeric_value(&self, decimal_mark: char) -> Option<f64> {
        let value = self.value.as_deref()?;
        if decimal_mark == '.' {
            return value.parse().ok();
        }
        value.replace(decimal_mark, ".").parse().ok()
    }
}

/// One record per SG10 in structural order
pub fn quantity_records(body: &SegmentMap) -> Vec<QuantityRecord> {
    body.iter()
        .filter(|(path, _)| path.last_level() == Some(GroupLevel::Sg10))
        .filter_map(|(path, segment)| match segment {
            Segment::Quantity(qty) => {
                let mut record = QuantityRecord {
                    path: path.to_string(),
                    qualifier: qty.qualifier.clone(),
                    value: qty.value.clone(),
                    unit: qty.unit.clone(),
                    ..Default::default()
                };
                fill_context(&mut record, body, path);
                Some(record)
            }
            _ => None,
        })
        .collect()
}

fn fill_context(record: &mut QuantityRecord, body: &SegmentMap, path: &SegmentPath) {
    if let Some(Segment::Location(loc)) = path.ancestor(GroupLevel::Sg6).and_then(|p| body.get(&p)) {
        record.metering_point = loc.code.clone();
    }

    let product = path
        .ancestor(GroupLevel::Sg9)
        .map(|p| p.child(GroupLevel::Pia, 1))
        .and_then(|p| body.get(&p));
    if let Some(Segment::ProductIdentification(pia)) = product {
        record.obis_code = pia.product_number.clone();
    }

    let periods: Vec<&DateTimePeriod> = children(body, path, GroupLevel::Dtm)
        .filter_map(|segment| match segment {
            Segment::DateTime(dtm) => Some(dtm),
            _ => None,
        })
        .collect();
    // Positional fallback never reuses the DTM chosen for the other bound
    let explicit_end = find_period(&periods, DTM_PERIOD_END);
    let start = find_period(&periods, DTM_PERIOD_START)
        .or_else(|| other_than(periods.first().copied(), explicit_end));
    let end = explicit_end.or_else(|| other_than(periods.get(1).copied(), start));

    record.start = start.and_then(|dtm| dtm.value.clone());
    record.end = end.and_then(|dtm| dtm.value.clone());
    record.start_time = start.and_then(to_datetime);
    record.end_time = end.and_then(to_datetime);

    if let Some(Segment::Status(status)) = children(body, path, GroupLevel::Sts).last() {
        record.status_category = status.category_code.clone();
        record.status_reason = status.reason_code.clone();
    }
}

/// Consecutive `level.1`, `level.2`, ... children of `path`
fn children<'a>(
    body: &'a SegmentMap,
    path: &'a SegmentPath,
    level: GroupLevel,
) -> impl Iterator<Item = &'a Segment> + 'a {
    (1..).map_while(move |index| body.get(&path.child(level, index)))
}

fn find_period<'a>(periods: &[&'a DateTimePeriod], function_code: &str) -> Option<&'a DateTimePeriod> {
    periods
        .iter()
        .find(|dtm| dtm.function_code.as_deref() == Some(function_code))
        .copied()
}

fn other_than<'a>(
    candidate: Option<&'a DateTimePeriod>,
    taken: Option<&DateTimePeriod>,
) -> Option<&'a DateTimePeriod> {
    candidate.filter(|dtm| !taken.is_some_and(|taken| std::ptr::eq(*dtm, taken)))
}

fn to_datetime(dtm: &DateTimePeriod) -> Option<DateTime<FixedOffset>> {
    parse_edifact_datetime(dtm.value.as_deref()?, dtm.format_code.as_deref()?)
}
