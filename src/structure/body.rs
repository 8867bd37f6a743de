//! Detail region transition table.
//!
//! The detail section nests delivery party (SG5) → metering point (SG6)
//! → product (SG9) → measurement (SG10), with references (SG7),
//! characteristics (SG8), product ids (PIA), periods (DTM) and status
//! (STS) hanging off those scopes. None of this is marked in the data;
//! group membership follows from which tag arrives next.

use super::engine::{RegionMachine, Transition};
use super::path::{GroupLevel, SegmentPath};
use super::warnings::Region;
use crate::constants::tags;
use crate::edifact::Segment;

/// Occurrence counters, one per level.
///
/// DTM has one counter per possible parent so that periods of a metering
/// point and periods of a measurement are numbered independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyCounters {
    pub sg5: usize,
    pub sg6: usize,
    pub sg7: usize,
    pub sg8: usize,
    pub sg9: usize,
    pub sg10: usize,
    pub sts: usize,
    pub pia: usize,
    pub sg6_dtm: usize,
    pub sg10_dtm: usize,
}

/// State of the detail region machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyState {
    pub counters: BodyCounters,
    pub current_sg5: Option<SegmentPath>,
    pub current_sg6: Option<SegmentPath>,
    pub current_sg9: Option<SegmentPath>,
    pub current_sg10: Option<SegmentPath>,
}

impl RegionMachine for BodyState {
    const REGION: Region = Region::Body;

    fn step(self, position: usize, segment: &Segment) -> Transition<Self> {
        match segment.tag() {
            tags::PARTY => self.open_delivery_party(),
            tags::LOCATION => self.open_metering_point(position, segment),
            tags::REFERENCE => self.open_reference(position, segment),
            tags::CHARACTERISTIC => self.open_characteristic(position, segment),
            tags::LINE_ITEM => self.open_product(position, segment),
            tags::QUANTITY => self.open_measurement(position, segment),
            tags::STATUS => self.attach_status(position, segment),
            tags::DATE_TIME => self.attach_period(position, segment),
            tags::PRODUCT_IDENTIFICATION => self.attach_product_id(position, segment),
            _ => self.unrecognized(position, segment),
        }
    }
}

impl BodyState {
    /// NAD opens SG5 and closes every scope below it
    fn open_delivery_party(mut self) -> Transition<Self> {
        self.counters.sg5 += 1;
        self.counters.sg6 = 0;

        let path = SegmentPath::root(GroupLevel::Sg5, self.counters.sg5);
        self.current_sg5 = Some(path.clone());
        self.current_sg6 = None;
        self.current_sg9 = None;
        self.current_sg10 = None;

        Transition::placed(self, path)
    }

    /// LOC opens SG6 under the current SG5
    fn open_metering_point(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let Some(parent) = self.current_sg5.clone() else {
            return self.orphan(position, segment, GroupLevel::Sg5);
        };

        self.counters.sg6 += 1;
        self.counters.sg7 = 0;
        self.counters.sg8 = 0;
        self.counters.sg9 = 0;
        self.counters.sg6_dtm = 0;

        let path = parent.child(GroupLevel::Sg6, self.counters.sg6);
        self.current_sg6 = Some(path.clone());
        self.current_sg9 = None;
        self.current_sg10 = None;

        Transition::placed(self, path)
    }

    /// RFF opens SG7 under the current SG6
    fn open_reference(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let Some(parent) = self.current_sg6.clone() else {
            return self.orphan(position, segment, GroupLevel::Sg6);
        };

        self.counters.sg7 += 1;
        let path = parent.child(GroupLevel::Sg7, self.counters.sg7);
        Transition::placed(self, path)
    }

    /// CCI opens SG8 under the current SG6
    fn open_characteristic(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let Some(parent) = self.current_sg6.clone() else {
            return self.orphan(position, segment, GroupLevel::Sg6);
        };

        self.counters.sg8 += 1;
        let path = parent.child(GroupLevel::Sg8, self.counters.sg8);
        Transition::placed(self, path)
    }

    /// LIN opens SG9 under the current SG6.
    ///
    /// The current SG10 stays open: a DTM between LIN and the next QTY
    /// still attaches to the previous measurement.
    fn open_product(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let Some(parent) = self.current_sg6.clone() else {
            return self.orphan(position, segment, GroupLevel::Sg6);
        };

        self.counters.sg9 += 1;
        self.counters.sg10 = 0;
        self.counters.pia = 0;

        let path = parent.child(GroupLevel::Sg9, self.counters.sg9);
        self.current_sg9 = Some(path.clone());

        Transition::placed(self, path)
    }

    /// QTY opens SG10 under the current SG9
    fn open_measurement(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let Some(parent) = self.current_sg9.clone() else {
            return self.orphan(position, segment, GroupLevel::Sg9);
        };

        self.counters.sg10 += 1;
        self.counters.sts = 0;
        self.counters.sg10_dtm = 0;

        let path = parent.child(GroupLevel::Sg10, self.counters.sg10);
        self.current_sg10 = Some(path.clone());

        Transition::placed(self, path)
    }

    /// STS belongs to the current measurement only
    fn attach_status(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let Some(parent) = self.current_sg10.clone() else {
            return self.orphan(position, segment, GroupLevel::Sg10);
        };

        self.counters.sts += 1;
        let path = parent.child(GroupLevel::Sts, self.counters.sts);
        Transition::placed(self, path)
    }

    /// DTM belongs to the current measurement, else to the metering point
    fn attach_period(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        if let Some(parent) = self.current_sg10.clone() {
            self.counters.sg10_dtm += 1;
            let path = parent.child(GroupLevel::Dtm, self.counters.sg10_dtm);
            return Transition::placed(self, path);
        }

        if let Some(parent) = self.current_sg6.clone() {
            self.counters.sg6_dtm += 1;
            let path = parent.child(GroupLevel::Dtm, self.counters.sg6_dtm);
            return Transition::placed(self, path);
        }

        self.orphan(position, segment, GroupLevel::Sg6)
    }

    /// PIA belongs to the current product
    fn attach_product_id(mut self, position: usize, segment: &Segment) -> Transition<Self> {
        let Some(parent) = self.current_sg9.clone() else {
            return self.orphan(position, segment, GroupLevel::Sg9);
        };

        self.counters.pia += 1;
        let path = parent.child(GroupLevel::Pia, self.counters.pia);
        Transition::placed(self, path)
    }
}
