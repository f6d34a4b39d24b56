//! Timetable construction engine.
//!
//! Generation runs in three stages: [`conflict`] provides the overlap
//! primitives, [`candidates`] enumerates the feasible (classroom, slot)
//! pairs per section, and [`solve`] runs a budgeted backtracking search
//! over those candidates. Everything here is pure and deterministic; the
//! service layer owns persistence and batch bookkeeping.

pub mod candidates;
pub mod conflict;
pub mod solve;

pub use candidates::*;
pub use conflict::*;
pub use solve::*;

#[cfg(test)]
mod tests;
