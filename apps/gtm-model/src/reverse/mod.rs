//! Reverse solvers: "what input do I need to hit this target?"
//!
//! Each solver inverts one forward formula and is independent of the
//! others. Degenerate inputs such as zero reps or a zero conversion rate
//! yield zeros instead of errors.
//!
//! Fixed multipliers and curves live in [`ReversePolicy`].

mod activity;
mod capacity;
mod compensation;
mod policy;
mod report;

pub use activity::{
    ActivityPlan, PipelinePlan, PipelineStage, activity_from_target, pipeline_coverage,
};
pub use capacity::{
    HeadcountPlan, QuotaPlan, TerritoryPlan, TerritoryTier, headcount_from_quota,
    quota_from_revenue, territory_plan,
};
pub use compensation::{
    AcceleratorTier, CompensationStructure, RampMonth, RampPlan, SpiffAllocation, SpiffPlan,
    compensation_structure, ramp_plan, spiff_structure,
};
pub use policy::{ReversePolicy, WeightedBucket};
pub use report::{ReverseInputs, ReverseReport, run_reverse};
