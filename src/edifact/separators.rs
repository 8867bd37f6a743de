//! Service string advice (UNA) resolution.
//!
//! The six characters following `UNA` define every delimiter used by the
//! rest of the interchange. Nothing downstream hard-codes a delimiter;
//! the resolved [`Separators`] value is passed to every split and parse.

use crate::constants::{
    DEFAULT_SERVICE_CHARACTERS, SERVICE_STRING_ADVICE_LEN, SERVICE_STRING_ADVICE_TAG,
};
use crate::error::{MsconsError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Delimiter set of one interchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Separators {
    /// Separates components inside a composite element (offset 3)
    pub component: char,
    /// Separates data elements inside a segment (offset 4)
    pub element: char,
    /// Decimal mark used by numeric values (offset 5)
    pub decimal_mark: char,
    /// Release (escape) character (offset 6)
    pub release: char,
    /// Repetition separator (offset 7)
    pub repetition: char,
    /// Segment terminator (offset 8)
    pub segment_terminator: char,
}

impl Default for Separators {
    fn default() -> Self {
        let chars: Vec<char> = DEFAULT_SERVICE_CHARACTERS.chars().collect();
        Self::from_service_characters(&chars)
    }
}

impl Separators {
    /// Resolve the separator set from the leading nine characters of an interchange
    pub fn resolve(interchange: &str) -> Result<Self> {
        let head: Vec<char> = interchange.chars().take(SERVICE_STRING_ADVICE_LEN).collect();

        let tag: String = head.iter().take(3).collect();
        if tag != SERVICE_STRING_ADVICE_TAG || head.len() < SERVICE_STRING_ADVICE_LEN {
            return Err(MsconsError::MissingServiceStringAdvice {
                found: head.iter().collect(),
            });
        }

        let service = &head[3..SERVICE_STRING_ADVICE_LEN];
        let mut distinct = service.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() != service.len() {
            return Err(MsconsError::DuplicateServiceCharacters {
                characters: service.iter().collect(),
            });
        }

        let separators = Self::from_service_characters(service);
        debug!("Resolved separators: {:?}", separators);
        Ok(separators)
    }

    /// Map the six service characters in UNA order onto named separators
    fn from_service_characters(service: &[char]) -> Self {
        Self {
            component: service[0],
            element: service[1],
            decimal_mark: service[2],
            release: service[3],
            repetition: service[4],
            segment_terminator: service[5],
        }
    }

    /// Render the separator set back into its nine character UNA form
    pub fn to_service_string(&self) -> String {
        let mut service = String::with_capacity(SERVICE_STRING_ADVICE_LEN);
        service.push_str(SERVICE_STRING_ADVICE_TAG);
        service.push(self.component);
        service.push(self.element);
        service.push(self.decimal_mark);
        service.push(self.release);
        service.push(self.repetition);
        service.push(self.segment_terminator);
        service
    }
}
