//! Header region transition table.

use super::engine::{RegionMachine, Transition};
use super::path::{GroupLevel, SegmentPath};
use super::warnings::{Region, StructureWarning};
use crate::constants::tags;
use crate::edifact::Segment;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCounters {
    pub unb: usize,
    pub unh: usize,
    pub dtm: usize,
    pub sg1: usize,
    pub sg2: usize,
    pub sg2_dtm: usize,
    pub sg4: usize,
    pub com: usize,
    pub uns: usize,
}

/// State of the header region machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub counters: HeaderCounters,
    /// UNB occurrence that already received its BGM
    pub bgm_attached_to: Option<usize>,
    pub current_sg2: Option<SegmentPath>,
    pub current_sg4: Option<SegmentPath>,
}

impl RegionMachine for HeaderState {
    const REGION: Region = Region::Header;

    fn step(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        match segment.tag() {
            tags::INTERCHANGE_HEADER => {
                self.counters.unb += 1;
                let path = SegmentPath::root(GroupLevel::Unb, self.counters.unb);
                Transition::placed(self, path)
            }
            tags::MESSAGE_HEADER => {
                self.counters.unh += 1;
                let path = SegmentPath::root(GroupLevel::Unh, self.counters.unh);
                Transition::placed(self, path)
            }
            tags::BEGINNING_OF_MESSAGE => self.attach_beginning(position, segment),
            tags::DATE_TIME => self.attach_date(),
            tags::REFERENCE => {
                self.counters.sg1 += 1;
                let path = SegmentPath::root(GroupLevel::Sg1, self.counters.sg1);
                Transition::placed(self, path)
            }
            tags::PARTY => self.open_party(),
            tags::CONTACT => self.open_contact(position, segment),
            tags::COMMUNICATION => self.attach_communication(position, segment),
            tags::SECTION_CONTROL => {
                self.counters.uns += 1;
                let path = SegmentPath::root(GroupLevel::Uns, self.counters.uns);
                Transition::placed(self, path)
            }
            _ => self.unrecognized(position, segment),
        }
    }
}

impl HeaderState {
    /// BGM is keyed by the occurrence of the interchange header it follows
    fn attach_beginning(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let unb = self.counters.unb;
        if unb == 0 {
            return self.orphan(position, segment, GroupLevel::Unb);
        }

        if self.bgm_attached_to == Some(unb) {
            let warning = StructureWarning::Duplicate {
                region: Region::Header,
                position,
                tag: segment.tag().to_string(),
            };
            return Transition::dropped(self, warning);
        }

        self.bgm_attached_to = Some(unb);
        Transition::placed(self, SegmentPath::root(GroupLevel::Bgm, unb))
    }

    /// DTM goes under the current party if one is open, else top-level
    fn attach_date(mut self) -> Transition<Self> {
        let path = match self.current_sg2.clone() {
            Some(party) => {
                self.counters.sg2_dtm += 1;
                party.child(GroupLevel::Dtm, self.counters.sg2_dtm)
            }
            None => {
                self.counters.dtm += 1;
                SegmentPath::root(GroupLevel::Dtm, self.counters.dtm)
            }
        };
        Transition::placed(self, path)
    }

    /// NAD opens SG2 and closes the contact scope
    fn open_party(mut self) -> Transition<Self> {
        self.counters.sg2 += 1;
        self.counters.sg2_dtm = 0;
        self.counters.sg4 = 0;

        let path = SegmentPath::root(GroupLevel::Sg2, self.counters.sg2);
        self.current_sg2 = Some(path.clone());
        self.current_sg4 = None;

        Transition::placed(self, path)
    }

    /// CTA opens SG4 under the current SG2
    fn open_contact(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let Some(parent) = self.current_sg2.clone() else {
            return self.orphan(position, segment, GroupLevel::Sg2);
        };

        self.counters.sg4 += 1;
        self.counters.com = 0;

        let path = parent.child(GroupLevel::Sg4, self.counters.sg4);
        self.current_sg4 = Some(path.clone());

        Transition::placed(self, path)
    }

    /// COM belongs to the current contact
    fn attach_communication(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let Some(parent) = self.current_sg4.clone() else {
            return self.orphan(position, segment, GroupLevel::Sg4);
        };

        self.counters.com += 1;
        let path = parent.child(GroupLevel::Com, self.counters.com);
        Transition::placed(self, path)
    }
}
