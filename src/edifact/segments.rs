//! Typed segment records and the tag-to-parser table.
//!
//! Each supported tag has a record type with a fixed positional layout:
//! every field is read from one (element, component) position and is
//! `None` when the source omits it. Values stay untyped strings here.

use super::separators::Separators;
use super::tokenizer::SegmentFields;
use crate::constants::{document_name, tags};
use crate::error::{MsconsError, Result};
use serde::{Deserialize, Serialize};

/// UNB interchange header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterchangeHeader {
    pub syntax_identifier: Option<String>,
    pub syntax_version: Option<String>,
    pub sender_id: Option<String>,
    pub sender_qualifier: Option<String>,
    pub receiver_id: Option<String>,
    pub receiver_qualifier: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub control_reference: Option<String>,
    /// Application reference, e.g. `TL`, `EM` or `VL` in MSCONS
    pub application_reference: Option<String>,
}

/// UNH message header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHeader {
    pub message_reference: Option<String>,
    pub message_type: Option<String>,
    pub version: Option<String>,
    pub release: Option<String>,
    pub agency: Option<String>,
    pub association_code: Option<String>,
    pub common_access_reference: Option<String>,
    pub sequence_number: Option<String>,
    pub sequence_status: Option<String>,
}

/// BGM beginning of message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginningOfMessage {
    pub document_code: Option<String>,
    /// Label of a known document code, `None` for unknown codes
    pub document_name: Option<String>,
    pub document_number: Option<String>,
    pub message_function: Option<String>,
}

/// DTM date/time/period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimePeriod {
    pub function_code: Option<String>,
    pub value: Option<String>,
    pub format_code: Option<String>,
}

/// NAD name and address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub qualifier: Option<String>,
    pub party_id: Option<String>,
    pub code_list: Option<String>,
    pub responsible_agency: Option<String>,
}

/// RFF reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub qualifier: Option<String>,
    pub identifier: Option<String>,
}

/// PIA additional product id, carries the OBIS code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIdentification {
    pub qualifier: Option<String>,
    pub product_number: Option<String>,
    pub product_type: Option<String>,
}

/// QTY quantity; the value keeps the interchange's decimal mark
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    pub qualifier: Option<String>,
    pub value: Option<String>,
    pub unit: Option<String>,
}

/// LOC place/location identification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub qualifier: Option<String>,
    pub code: Option<String>,
    pub related_code: Option<String>,
}

/// LIN line item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_number: Option<String>,
}

/// STS status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub category_code: Option<String>,
    pub reason_code: Option<String>,
}

/// CCI characteristic/class id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristic {
    pub class_type: Option<String>,
    pub characteristic_code: Option<String>,
}

/// UNS section control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionControl {
    pub section_id: Option<String>,
}

/// UNT message trailer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTrailer {
    pub segment_count: Option<String>,
    pub message_reference: Option<String>,
}

/// UNZ interchange trailer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterchangeTrailer {
    pub message_count: Option<String>,
    pub control_reference: Option<String>,
}

/// CTA contact information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub function_code: Option<String>,
    pub contact_id: Option<String>,
    pub department_name: Option<String>,
}

/// COM communication contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Communication {
    pub number: Option<String>,
    pub qualifier: Option<String>,
}

/// One parsed segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "segment_tag")]
pub enum Segment {
    #[serde(rename = "UNB")]
    InterchangeHeader(InterchangeHeader),
    #[serde(rename = "UNH")]
    MessageHeader(MessageHeader),
    #[serde(rename = "BGM")]
    BeginningOfMessage(BeginningOfMessage),
    #[serde(rename = "DTM")]
    DateTime(DateTimePeriod),
    #[serde(rename = "NAD")]
    Party(Party),
    #[serde(rename = "RFF")]
    Reference(Reference),
    #[serde(rename = "PIA")]
    ProductIdentification(ProductIdentification),
    #[serde(rename = "QTY")]
    Quantity(Quantity),
    #[serde(rename = "LOC")]
    Location(Location),
    #[serde(rename = "LIN")]
    LineItem(LineItem),
    #[serde(rename = "STS")]
    Status(Status),
    #[serde(rename = "CCI")]
    Characteristic(Characteristic),
    #[serde(rename = "UNS")]
    SectionControl(SectionControl),
    #[serde(rename = "UNT")]
    MessageTrailer(MessageTrailer),
    #[serde(rename = "UNZ")]
    InterchangeTrailer(InterchangeTrailer),
    #[serde(rename = "CTA")]
    Contact(Contact),
    #[serde(rename = "COM")]
    Communication(Communication),
    /// Tag without a field layout
    #[serde(rename = "unrecognized")]
    Unrecognized { tag: String },
}

impl Segment {
    /// Three letter segment tag
    pub fn tag(&self) -> &str {
        match self {
            Segment::InterchangeHeader(_) => tags::INTERCHANGE_HEADER,
            Segment::MessageHeader(_) => tags::MESSAGE_HEADER,
            Segment::BeginningOfMessage(_) => tags::BEGINNING_OF_MESSAGE,
            Segment::DateTime(_) => tags::DATE_TIME,
            Segment::Party(_) => tags::PARTY,
            Segment::Reference(_) => tags::REFERENCE,
            Segment::ProductIdentification(_) => tags::PRODUCT_IDENTIFICATION,
            Segment::Quantity(_) => tags::QUANTITY,
            Segment::Location(_) => tags::LOCATION,
            Segment::LineItem(_) => tags::LINE_ITEM,
            Segment::Status(_) => tags::STATUS,
            Segment::Characteristic(_) => tags::CHARACTERISTIC,
            Segment::SectionControl(_) => tags::SECTION_CONTROL,
            Segment::MessageTrailer(_) => tags::MESSAGE_TRAILER,
            Segment::InterchangeTrailer(_) => tags::INTERCHANGE_TRAILER,
            Segment::Contact(_) => tags::CONTACT,
            Segment::Communication(_) => tags::COMMUNICATION,
            Segment::Unrecognized { tag } => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Segment::Unrecognized { .. })
    }
}

/// Positional layout of one segment type
trait SegmentLayout: Sized {
    const TAG: &'static str;

    fn from_fields(fields: &SegmentFields) -> Self;

    fn into_segment(self) -> Segment;
}

impl SegmentLayout for InterchangeHeader {
    const TAG: &'static str = tags::INTERCHANGE_HEADER;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            syntax_identifier: f.component(0, 0),
            syntax_version: f.component(0, 1),
            sender_id: f.component(1, 0),
            sender_qualifier: f.component(1, 1),
            receiver_id: f.component(2, 0),
            receiver_qualifier: f.component(2, 1),
            date: f.component(3, 0),
            time: f.component(3, 1),
            control_reference: f.value(4),
            application_reference: f.value(6),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::InterchangeHeader(self)
    }
}

impl SegmentLayout for MessageHeader {
    const TAG: &'static str = tags::MESSAGE_HEADER;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            message_reference: f.value(0),
            message_type: f.component(1, 0),
            version: f.component(1, 1),
            release: f.component(1, 2),
            agency: f.component(1, 3),
            association_code: f.component(1, 4),
            common_access_reference: f.value(2),
            sequence_number: f.component(3, 0),
            sequence_status: f.component(3, 1),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::MessageHeader(self)
    }
}

impl SegmentLayout for BeginningOfMessage {
    const TAG: &'static str = tags::BEGINNING_OF_MESSAGE;

    fn from_fields(f: &SegmentFields) -> Self {
        let document_code = f.component(0, 0);
        let document_name = document_code
            .as_deref()
            .and_then(document_name)
            .map(str::to_string);

        Self {
            document_code,
            document_name,
            document_number: f.component(1, 0),
            message_function: f.value(2),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::BeginningOfMessage(self)
    }
}

impl SegmentLayout for DateTimePeriod {
    const TAG: &'static str = tags::DATE_TIME;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            function_code: f.component(0, 0),
            value: f.component(0, 1),
            format_code: f.component(0, 2),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::DateTime(self)
    }
}

impl SegmentLayout for Party {
    const TAG: &'static str = tags::PARTY;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            qualifier: f.value(0),
            party_id: f.component(1, 0),
            code_list: f.component(1, 1),
            responsible_agency: f.component(1, 2),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::Party(self)
    }
}

impl SegmentLayout for Reference {
    const TAG: &'static str = tags::REFERENCE;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            qualifier: f.component(0, 0),
            identifier: f.component(0, 1),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::Reference(self)
    }
}

impl SegmentLayout for ProductIdentification {
    const TAG: &'static str = tags::PRODUCT_IDENTIFICATION;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            qualifier: f.value(0),
            product_number: f.component(1, 0),
            product_type: f.component(1, 1),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::ProductIdentification(self)
    }
}

impl SegmentLayout for Quantity {
    const TAG: &'static str = tags::QUANTITY;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            qualifier: f.component(0, 0),
            value: f.component(0, 1),
            unit: f.component(0, 2),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::Quantity(self)
    }
}

impl SegmentLayout for Location {
    const TAG: &'static str = tags::LOCATION;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            qualifier: f.value(0),
            code: f.component(1, 0),
            related_code: f.component(2, 0),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::Location(self)
    }
}

impl SegmentLayout for LineItem {
    const TAG: &'static str = tags::LINE_ITEM;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            item_number: f.value(0),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::LineItem(self)
    }
}

impl SegmentLayout for Status {
    const TAG: &'static str = tags::STATUS;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            category_code: f.component(0, 0),
            reason_code: f.component(2, 0),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::Status(self)
    }
}

impl SegmentLayout for Characteristic {
    const TAG: &'static str = tags::CHARACTERISTIC;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            class_type: f.value(0),
            characteristic_code: f.component(2, 0),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::Characteristic(self)
    }
}

impl SegmentLayout for SectionControl {
    const TAG: &'static str = tags::SECTION_CONTROL;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            section_id: f.value(0),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::SectionControl(self)
    }
}

impl SegmentLayout for MessageTrailer {
    const TAG: &'static str = tags::MESSAGE_TRAILER;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            segment_count: f.value(0),
            message_reference: f.value(1),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::MessageTrailer(self)
    }
}

impl SegmentLayout for InterchangeTrailer {
    const TAG: &'static str = tags::INTERCHANGE_TRAILER;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            message_count: f.value(0),
            control_reference: f.value(1),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::InterchangeTrailer(self)
    }
}

impl SegmentLayout for Contact {
    const TAG: &'static str = tags::CONTACT;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            function_code: f.value(0),
            contact_id: f.component(1, 0),
            department_name: f.component(1, 1),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::Contact(self)
    }
}

impl SegmentLayout for Communication {
    const TAG: &'static str = tags::COMMUNICATION;

    fn from_fields(f: &SegmentFields) -> Self {
        Self {
            number: f.component(0, 0),
            qualifier: f.component(0, 1),
        }
    }

    fn into_segment(self) -> Segment {
        Segment::Communication(self)
    }
}

type SegmentParser = fn(&SegmentFields) -> Result<Segment>;

/// Tag to parser table; adding a segment type only touches this list
const SEGMENT_PARSERS: &[(&str, SegmentParser)] = &[
    (tags::INTERCHANGE_HEADER, parse_layout::<InterchangeHeader>),
    (tags::MESSAGE_HEADER, parse_layout::<MessageHeader>),
    (tags::BEGINNING_OF_MESSAGE, parse_layout::<BeginningOfMessage>),
    (tags::DATE_TIME, parse_layout::<DateTimePeriod>),
    (tags::PARTY, parse_layout::<Party>),
    (tags::REFERENCE, parse_layout::<Reference>),
    (tags::PRODUCT_IDENTIFICATION, parse_layout::<ProductIdentification>),
    (tags::QUANTITY, parse_layout::<Quantity>),
    (tags::LOCATION, parse_layout::<Location>),
    (tags::LINE_ITEM, parse_layout::<LineItem>),
    (tags::STATUS, parse_layout::<Status>),
    (tags::CHARACTERISTIC, parse_layout::<Characteristic>),
    (tags::SECTION_CONTROL, parse_layout::<SectionControl>),
    (tags::MESSAGE_TRAILER, parse_layout::<MessageTrailer>),
    (tags::INTERCHANGE_TRAILER, parse_layout::<InterchangeTrailer>),
    (tags::CONTACT, parse_layout::<Contact>),
    (tags::COMMUNICATION, parse_layout::<Communication>),
];

fn parse_layout<T: SegmentLayout>(fields: &SegmentFields) -> Result<Segment> {
    if fields.tag() != T::TAG {
        return Err(MsconsError::SegmentTagMismatch {
            expected: T::TAG,
            found: fields.tag().to_string(),
        });
    }
    Ok(T::from_fields(fields).into_segment())
}

/// Tags with a field layout
pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    SEGMENT_PARSERS.iter().map(|(tag, _)| *tag)
}

/// Parse one raw segment, dispatching on its first three characters
pub fn parse_segment(raw: &str, separators: &Separators) -> Result<Segment> {
    let tag: String = raw.chars().take(3).collect();

    match SEGMENT_PARSERS.iter().find(|(known, _)| *known == tag) {
        Some((_, parser)) => parser(&SegmentFields::split(raw, separators)),
        None => Ok(Segment::Unrecognized { tag }),
    }
}
