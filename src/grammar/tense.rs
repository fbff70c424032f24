//! Tense classification and the marker token that encodes it.

use super::tags::PosTag;
use serde::Serialize;

/// Counts of tense-bearing tags in one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TenseCounts {
    /// Modals (MD)
    pub future: usize,
    /// VBP, VBZ and VBG
    pub present: usize,
    /// VBD and VBN
    pub past: usize,
    /// VBG; also counted in `present`
    pub present_continuous: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tense {
    Future,
    Present,
    Past,
    PresentContinuous,
}

/// Leading token announcing the tense of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TenseMarker {
    Before,
    Will,
    Now,
}

impl TenseMarker {
    pub fn token(&self) -> &'static str {
        match self {
            TenseMarker::Before => "Before",
            TenseMarker::Will => "Will",
            TenseMarker::Now => "Now",
        }
    }
}

impl TenseCounts {
    pub fn from_tags(tags: &[PosTag]) -> Self {
        let mut counts = TenseCounts::default();
        for tag in tags {
            match tag {
                PosTag::Modal => counts.future += 1,
                PosTag::VerbPresent | PosTag::VerbThirdSingular => counts.present += 1,
                PosTag::Gerund => {
                    counts.present += 1;
                    counts.present_continuous += 1;
                }
                PosTag::PastTense | PosTag::PastParticiple => counts.past += 1,
                _ => {}
            }
        }
        counts
    }

    /// Category with the highest count; on a tie the earliest of
    /// future, present, past, present-continuous wins.
    pub fn dominant(&self) -> (Tense, usize) {
        let ordered = [
            (Tense::Future, self.future),
            (Tense::Present, self.present),
            (Tense::Past, self.past),
            (Tense::PresentContinuous, self.present_continuous),
        ];

        let mut best = ordered[0];
        for candidate in &ordered[1..] {
            if candidate.1 > best.1 {
                best = *candidate;
            }
        }
        best
    }

    /// Marker to prepend, if any.
    ///
    /// Present tense only gets a marker when it is continuous, and a dominant
    /// present-continuous count (which can only tie `present`, never beat it)
    /// gets none.
    pub fn marker(&self) -> Option<TenseMarker> {
        match self.dominant() {
            (Tense::Past, n) if n >= 1 => Some(TenseMarker::Before),
            (Tense::Future, n) if n >= 1 => Some(TenseMarker::Will),
            (Tense::Present, _) if self.present_continuous >= 1 => Some(TenseMarker::Now),
            _ => None,
        }
    }
}
