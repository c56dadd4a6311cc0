//! Habit Backend Module
//!
//! Passive data shapes for habit tracking. There is no behavior here
//! yet: no streak computation, no completion logic, no handlers. The
//! records exist so the storage schema and serialized forms are fixed
//! before the tracking features land.

pub mod entity;

pub use entity::{DayOfWeek, Habit, HabitType, HistoryEntry};
