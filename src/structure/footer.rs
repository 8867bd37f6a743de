//! Summary region: one slot each for the message and interchange trailer.

use super::engine::{RegionMachine, Transition};
use super::path::{GroupLevel, SegmentPath};
use super::warnings::{Region, StructureWarning};
use crate::constants::tags;
use crate::edifact::Segment;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterState {
    pub message_trailer_seen: bool,
    pub interchange_trailer_seen: bool,
}

impl RegionMachine for FooterState {
    const REGION: Region = Region::Footer;

    fn step(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let (level, already_seen) = match segment.tag() {
            tags::MESSAGE_TRAILER => (GroupLevel::Unt, self.message_trailer_seen),
            tags::INTERCHANGE_TRAILER => (GroupLevel::Unz, self.interchange_trailer_seen),
            _ => return self.unrecognized(position, segment),
        };

        if already_seen {
            let warning = StructureWarning::Duplicate {
                region: Region::Footer,
                position,
                tag: segment.tag().to_string(),
            };
            return Transition::dropped(self, warning);
        }

        match level {
            GroupLevel::Unt => self.message_trailer_seen = true,
            _ => self.interchange_trailer_seen = true,
        }
        Transition::placed(self, SegmentPath::root(level, 1))
    }
}
