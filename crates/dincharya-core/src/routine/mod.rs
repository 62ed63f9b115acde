//! Daily routine (Dincharya) scheduling.
//!
//! - [`merge_routine`]: overlays character adjustments on the base routine
//! - [`resolve_current`]: finds the bucket active at a clock time
//! - [`DincharyaPlanner`]: state holder tying both to a matched character and
//!   a ticking clock

mod activity;
mod merge;
mod planner;
mod resolve;
mod time;

pub use activity::{RoutineActivity, RoutineOverride};
pub use merge::{merge_routine, merge_routine_with, routine_for};
pub use planner::DincharyaPlanner;
pub use resolve::resolve_current;
pub use time::{
    collate_labels, compare_labels, format_clock, parse_clock, parse_label, truncate_to_minute,
    TimeMode, LITERAL_END_OF_DAY,
};
