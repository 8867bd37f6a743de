//! Application constants for the MSCONS processor
//!
//! Segment tags, fixed offsets of the service string advice, and the
//! document code labels used by the beginning-of-message segment.

// =============================================================================
// Service String Advice
// =============================================================================

/// Tag of the service string advice segment
pub const SERVICE_STRING_ADVICE_TAG: &str = "UNA";

/// Length of the service string advice: tag plus six service characters
pub const SERVICE_STRING_ADVICE_LEN: usize = 9;

/// Service characters assumed when an interchange carries no UNA segment
pub const DEFAULT_SERVICE_CHARACTERS: &str = ":+.? '";

/// Out-of-band character used to protect escaped separators while splitting.
/// Taken from the Unicode private use area.
pub const ESCAPE_PLACEHOLDER: char = '\u{F8FF}';

/// Out-of-band character protecting a doubled (self-escaped) release character
pub const RELEASE_PLACEHOLDER: char = '\u{F8FE}';

// =============================================================================
// Segment Tags
// =============================================================================

pub mod tags {
    pub const INTERCHANGE_HEADER: &str = "UNB";
    pub const MESSAGE_HEADER: &str = "UNH";
    pub const BEGINNING_OF_MESSAGE: &str = "BGM";
    pub const DATE_TIME: &str = "DTM";
    pub const REFERENCE: &str = "RFF";
    pub const PARTY: &str = "NAD";
    pub const CONTACT: &str = "CTA";
    pub const COMMUNICATION: &str = "COM";
    pub const SECTION_CONTROL: &str = "UNS";
    pub const LOCATION: &str = "LOC";
    pub const CHARACTERISTIC: &str = "CCI";
    pub const LINE_ITEM: &str = "LIN";
    pub const PRODUCT_IDENTIFICATION: &str = "PIA";
    pub const QUANTITY: &str = "QTY";
    pub const STATUS: &str = "STS";
    pub const MESSAGE_TRAILER: &str = "UNT";
    pub const INTERCHANGE_TRAILER: &str = "UNZ";
}

// =============================================================================
// Date/Time Qualifiers
// =============================================================================

/// DTM function code marking the start of a measurement period
pub const DTM_PERIOD_START: &str = "163";

/// DTM function code marking the end of a measurement period
pub const DTM_PERIOD_END: &str = "164";

// =============================================================================
// Document Codes
// =============================================================================

/// Known BGM document codes (data element 1001) and their labels.
/// Not exhaustive; unknown codes pass through without a label.
pub const DOCUMENT_CODES: &[(&str, &str)] = &[
    ("7", "Prozessdatenbericht"),
    ("270", "Lieferschein"),
    ("BK", "Zeitreihen im Rahmen der Bilanzkreisabrechnung"),
    ("Z06", "normiertes Profil"),
    ("Z15", "EEG-Überführungszeitreihe"),
    ("Z16", "Profilschar"),
    ("Z20", "Vergangenheitswerte für TEP mit Referenzmessung"),
    ("Z21", "Gasbeschaffenheitsdaten"),
    ("Z23", "Bilanzierte Menge (MMMA)"),
    ("Z24", "Allokationsliste (MMMA)"),
    ("Z27", "Bewegungsdaten im Kalenderjahr vor Lieferbeginn"),
    ("Z28", "Energiemenge und Leistungsmaximum"),
    ("Z39", "Tägliche Summenzeitreihe"),
    ("Z41", "Lieferschein Grund- / Arbeitspreis"),
    ("Z42", "Lieferschein Arbeits- / Leistungspreis"),
    ("Z43", "Redispatch Ausfallarbeitsüberführungszeitreihe"),
    ("Z44", "Redispatch Übermittlung von meteorologischen Daten"),
    ("Z45", "Redispatch Einzelzeitreihe Ausfallarbeit"),
    ("Z46", "Redispatch Ausfallarbeitssummenzeitreihe"),
    ("Z48", "Lastgang Marktlokation, Tranche"),
    ("Z50", "Redispatch EEG-Überführungszeitreihe aufgrund Ausfallarbeit"),
    ("Z69", "Redispatch tägliche Ausfallarbeitsüberführungszeitreihe"),
    ("Z83", "Werte nach Typ 2"),
];

/// Look up the label of a BGM document code
pub fn document_name(code: &str) -> Option<&'static str> {
    DOCUMENT_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default glob pattern for interchange files inside an input directory
pub const DEFAULT_FILE_PATTERN: &str = "*.txt";

/// Name of the output directory created next to the input when none is given
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "structured";

/// Suffix of the quantity record file written next to a structured document
pub const RECORDS_FILE_SUFFIX: &str = "records";
