pub mod actions;
pub mod calculator;
pub mod leave_set;
pub mod roster;
pub mod schedule;
