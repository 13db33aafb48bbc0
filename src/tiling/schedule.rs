//! Frame index to subdivision depth mapping
//!
//! Early frames use a coarse tiling and later frames progressively finer
//! ones. The mapping is a step function over a fixed table and depends on
//! nothing but the frame index.

use crate::io::configuration::{
    DEFAULT_FINAL_DEPTH, DEFAULT_SCHEDULE_STEPS, MAX_SUBDIVISION_DEPTH,
};
use crate::io::error::{Result, invalid_parameter};

/// One row of the step table: frames below `until` use `depth`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleStep {
    /// Exclusive upper bound on the frame index
    pub until: usize,
    /// Subdivision depth for frames below `until`
    pub depth: usize,
}

/// Monotone step table mapping frame indices to subdivision depths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationSchedule {
    steps: Vec<ScheduleStep>,
    final_depth: usize,
}

impl Default for IterationSchedule {
    fn default() -> Self {
        Self {
            steps: DEFAULT_SCHEDULE_STEPS
                .iter()
                .map(|&(until, depth)| ScheduleStep { until, depth })
                .collect(),
            final_depth: DEFAULT_FINAL_DEPTH,
        }
    }
}

impl IterationSchedule {
    /// Create a schedule from explicit steps
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Step bounds are not strictly increasing
    /// - Depths decrease anywhere along the table, including `final_depth`
    /// - Any depth exceeds the subdivision limit
    pub fn new(steps: Vec<ScheduleStep>, final_depth: usize) -> Result<Self> {
        let depths = steps
            .iter()
            .map(|step| step.depth)
            .chain(std::iter::once(final_depth));

        let mut previous_depth = 0;
        for depth in depths {
            if depth < previous_depth {
                return Err(invalid_parameter(
                    "schedule",
                    &depth,
                    &"depths must be non-decreasing",
                ));
            }
            if depth > MAX_SUBDIVISION_DEPTH {
                return Err(invalid_parameter(
                    "schedule",
                    &depth,
                    &format!("depth must not exceed {MAX_SUBDIVISION_DEPTH}"),
                ));
            }
            previous_depth = depth;
        }

        if steps.windows(2).any(|pair| match pair {
            [first, second] => first.until >= second.until,
            _ => false,
        }) {
            return Err(invalid_parameter(
                "schedule",
                &format!("{steps:?}"),
                &"frame bounds must be strictly increasing",
            ));
        }

        Ok(Self { steps, final_depth })
    }

    /// A schedule that uses the same depth for every frame
    ///
    /// # Errors
    ///
    /// Returns an error if the depth exceeds the subdivision limit
    pub fn constant(depth: usize) -> Result<Self> {
        Self::new(Vec::new(), depth)
    }

    /// Subdivision depth for a frame
    pub fn depth_for(&self, frame_index: usize) -> usize {
        self.steps
            .iter()
            .find(|step| frame_index < step.until)
            .map_or(self.final_depth, |step| step.depth)
    }

    /// Step table rows in ascending order
    pub fn steps(&self) -> &[ScheduleStep] {
        &self.steps
    }

    /// Depth past the last step
    pub const fn final_depth(&self) -> usize {
        self.final_depth
    }
}
