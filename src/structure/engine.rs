//! Region state machines and the fold that drives them.
//!
//! A region machine is a plain value. Each segment moves it to a new
//! state and either places the segment at a path or drops it with a
//! warning. Structuring a region is a single forward fold; nothing is
//! revisited.

use super::path::{GroupLevel, SegmentPath};
use super::warnings::{Region, StructureWarning};
use crate::config::AttachmentPolicy;
use crate::edifact::Segment;
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::warn;

/// Path-keyed segments of one region, ordered structurally
pub type SegmentMap = BTreeMap<SegmentPath, Segment>;

/// Result of feeding one segment to a region machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Placed(SegmentPath),
    Dropped(StructureWarning),
}

/// New state plus what happened to the segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    pub state: S,
    pub outcome: Outcome,
}

impl<S> Transition<S> {
    pub fn placed(state: S, path: SegmentPath) -> Self {
        Self {
            state,
            outcome: Outcome::Placed(path),
        }
    }

    pub fn dropped(state: S, warning: StructureWarning) -> Self {
        Self {
            state,
            outcome: Outcome::Dropped(warning),
        }
    }
}

/// Transition table of one message region
pub trait RegionMachine: Default + Sized {
    const REGION: Region;

    fn step(self, position: usize, segment: &Segment) -> Transition<Self>;

    /// Drop a segment whose parent scope is not open
    fn orphan(self, position: usize, segment: &Segment, parent: GroupLevel) -> Transition<Self> {
        let warning = StructureWarning::Orphan {
            region: Self::REGION,
            position,
            tag: segment.tag().to_string(),
            parent,
        };
        Transition::dropped(self, warning)
    }

    /// Drop a segment this region has no rule for
    fn unrecognized(self, position: usize, segment: &Segment) -> Transition<Self> {
        let warning = StructureWarning::Unrecognized {
            region: Self::REGION,
            position,
            tag: segment.tag().to_string(),
        };
        Transition::dropped(self, warning)
    }
}

/// Structured output of one region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionResult {
    pub entries: SegmentMap,
    pub warnings: Vec<StructureWarning>,
}

/// Fold a region's segments through a fresh machine.
///
/// `offset` is the position of the first segment in the full sequence.
/// In strict mode the first orphan aborts the fold.
pub fn structure_region<M: RegionMachine>(
    segments: &[Segment],
    offset: usize,
    policy: AttachmentPolicy,
) -> Result<RegionResult> {
    let (_, result) = segments.iter().enumerate().try_fold(
        (M::default(), RegionResult::default()),
        |(state, mut result), (i, segment)| {
            let Transition { state, outcome } = state.step(offset + i, segment);

            match outcome {
                Outcome::Placed(path) => {
                    let previous = result.entries.insert(path, segment.clone());
                    debug_assert!(previous.is_none(), "path assigned twice");
                }
                Outcome::Dropped(warning) => {
                    if policy == AttachmentPolicy::Strict {
                        if let Some(error) = warning.to_error() {
                            return Err(error);
                        }
                    }
                    warn!("{}", warning);
                    result.warnings.push(warning);
                }
            }

            Ok((state, result))
        },
    )?;

    Ok(result)
}
