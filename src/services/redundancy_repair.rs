use crate::models::segment::{Segment, SegmentDetails, SegmentSource};
use crate::services::duration_inference::DurationInference;
use crate::services::gap_classifier::GapClassifier;

/// Idempotent cleanup of previously-synthesized transfers that have become
/// redundant. Imported and user-entered transfers are never removed.
#[derive(Debug, Clone, Default)]
pub struct RedundancyRepair {
    duration: DurationInference,
    classifier: GapClassifier,
}

impl RedundancyRepair {
    pub fn new() -> Self {
        Self {
            duration: DurationInference::new(),
            classifier: GapClassifier::new(),
        }
    }

    pub fn with_engines(duration: DurationInference, classifier: GapClassifier) -> Self {
        Self {
            duration,
            classifier,
        }
    }

    /// Remove redundant agent-synthesized transfers from a sorted sequence.
    ///
    /// The single pass is iterated until it removes nothing, so the result
    /// is a fixed point: re-running on the output is a no-op, which makes
    /// repeated application to historical data safe.
    pub fn repair(&self, segments: Vec<Segment>) -> Vec<Segment> {
        let mut current = segments;

        loop {
            let before_len = current.len();
            current = self.repair_pass(current);
            if current.len() == before_len {
                return current;
            }
        }
    }

    fn repair_pass(&self, segments: Vec<Segment>) -> Vec<Segment> {
        let keep: Vec<bool> = (0..segments.len())
            .map(|i| !self.is_redundant(&segments, i))
            .collect();

        segments
            .into_iter()
            .zip(keep)
            .filter_map(|(segment, keep)| {
                if !keep {
                    log::info!("Removing redundant synthesized transfer '{}'", segment.name);
                }
                keep.then_some(segment)
            })
            .collect()
    }

    fn is_redundant(&self, segments: &[Segment], index: usize) -> bool {
        let segment = &segments[index];

        let is_agent_transfer = matches!(segment.details, SegmentDetails::Transfer { .. })
            && segment.source == SegmentSource::Agent;
        if !is_agent_transfer {
            return false;
        }

        let prev = index.checked_sub(1).and_then(|i| segments.get(i));
        let next = segments.get(index + 1);

        // Adjacent to another transfer-like segment: the transportation is
        // already represented.
        if prev.is_some_and(|p| p.is_transportation())
            || next.is_some_and(|n| n.is_transportation())
        {
            return true;
        }

        // A transfer spanning sleep hours is never plausible.
        if self
            .classifier
            .is_overnight_gap(segment.start_datetime, segment.end_datetime)
        {
            return true;
        }
        if let Some(prev) = prev {
            let prev_end = self.duration.effective_end_time(prev);
            if self.classifier.is_overnight_gap(prev_end, segment.start_datetime) {
                return true;
            }
        }
        if let Some(next) = next {
            if self
                .classifier
                .is_overnight_gap(segment.end_datetime, next.start_datetime)
            {
                return true;
            }
        }

        false
    }
}
