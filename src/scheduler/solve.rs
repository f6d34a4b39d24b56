//! Backtracking timetable search.
//!
//! The search treats each section as a variable whose domain is its
//! candidate list and walks variables most-constrained-first (fewest
//! candidates, then largest capacity, then lowest id). Frames are kept on
//! an explicit stack so deep timetables cannot overflow the call stack,
//! and every candidate attempt consumes one step from a fixed budget.
//!
//! The search is exact while the budget lasts: it only returns an
//! incomplete timetable after proving none exists or running out of steps,
//! and in both cases it keeps the deepest consistent prefix it reached.

use super::candidates::{candidates_for_section, Candidate, SlotCatalog};
use super::conflict::{conflicts_with_classroom, conflicts_with_instructor, Placement};
use crate::api::{Classroom, CourseSection, InstructorId, SectionId};

/// Default candidate-attempt budget for one generation run.
pub const DEFAULT_MAX_STEPS: u64 = 100_000;

/// Search limits and the weekly grid for one generation run.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Candidate attempts allowed before the search stops with a partial
    /// timetable.
    pub max_steps: u64,
    /// Weekly grid candidates are drawn from.
    pub catalog: SlotCatalog,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            catalog: SlotCatalog::standard(),
        }
    }
}

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Conflict-free placements, one per placed section.
    pub placements: Vec<Placement>,
    /// Sections left without a placement, sorted by id.
    pub unplaced: Vec<SectionId>,
    /// Candidate attempts consumed.
    pub steps_used: u64,
    /// True when the search stopped on the step budget rather than by
    /// finishing or exhausting the space.
    pub budget_exhausted: bool,
}

impl SolveOutcome {
    pub fn fully_placed(&self) -> bool {
        self.unplaced.is_empty()
    }
}

struct Variable {
    section_id: SectionId,
    instructor_id: InstructorId,
    capacity: u32,
    candidates: Vec<Candidate>,
}

struct Frame {
    cursor: usize,
}

/// Build a draft timetable for `sections` over `classrooms`.
///
/// Sections with no candidate at all are set aside before the search so a
/// single impossible section cannot burn the budget for everyone else.
/// Sections without a server-assigned id cannot be referenced by schedule
/// rows and are skipped.
///
/// # Arguments
///
/// * `sections` - Sections to place, typically one term's worth
/// * `classrooms` - Every room placements may use
/// * `config` - Step budget and slot grid
///
/// # Returns
///
/// A [`SolveOutcome`] holding the placements, the unplaced section ids and
/// how much of the budget the search consumed. The same input always yields
/// the same outcome.
pub fn solve(
    sections: &[CourseSection],
    classrooms: &[Classroom],
    config: &SolverConfig,
) -> SolveOutcome {
    let mut vars: Vec<Variable> = Vec::with_capacity(sections.len());
    let mut unplaced: Vec<SectionId> = Vec::new();

    for section in sections {
        let section_id = match section.id {
            Some(id) => id,
            None => continue,
        };
        let candidates = candidates_for_section(section, classrooms, &config.catalog);
        if candidates.is_empty() {
            unplaced.push(section_id);
        } else {
            vars.push(Variable {
                section_id,
                instructor_id: section.instructor_id,
                capacity: section.capacity,
                candidates,
            });
        }
    }

    // Most constrained first; capacity then id break ties so the order,
    // and with it the whole search, is total.
    vars.sort_by(|a, b| {
        a.candidates
            .len()
            .cmp(&b.candidates.len())
            .then_with(|| b.capacity.cmp(&a.capacity))
            .then_with(|| a.section_id.value().cmp(&b.section_id.value()))
    });

    // stack[i] chooses for vars[i]; committed holds the choices of every
    // frame below the top, so committed.len() == stack.len() - 1.
    let mut committed: Vec<Placement> = Vec::with_capacity(vars.len());
    let mut best: Vec<Placement> = Vec::new();
    let mut stack: Vec<Frame> = Vec::with_capacity(vars.len());
    let mut steps_used: u64 = 0;
    let mut budget_exhausted = false;

    if !vars.is_empty() {
        stack.push(Frame { cursor: 0 });
    }

    while let Some(frame) = stack.last_mut() {
        let depth = committed.len();
        let var = &vars[depth];

        if frame.cursor >= var.candidates.len() {
            // Domain exhausted at this depth: unwind one decision.
            stack.pop();
            if let Some(previous) = stack.last_mut() {
                committed.pop();
                previous.cursor += 1;
            }
            continue;
        }

        if steps_used >= config.max_steps {
            budget_exhausted = true;
            break;
        }
        steps_used += 1;

        let Candidate { classroom_id, slot } = var.candidates[frame.cursor];
        let placement = Placement {
            section_id: var.section_id,
            instructor_id: var.instructor_id,
            classroom_id,
            slot,
        };

        if conflicts_with_classroom(&placement, &committed)
            || conflicts_with_instructor(&placement, &committed)
        {
            frame.cursor += 1;
            continue;
        }

        committed.push(placement);
        if committed.len() > best.len() {
            best = committed.clone();
        }
        if committed.len() == vars.len() {
            break;
        }
        stack.push(Frame { cursor: 0 });
    }

    let placements = if committed.len() == vars.len() {
        committed
    } else {
        best
    };

    for var in &vars[placements.len()..] {
        unplaced.push(var.section_id);
    }
    unplaced.sort_by_key(|id| id.value());

    SolveOutcome {
        placements,
        unplaced,
        steps_used,
        budget_exhausted,
    }
}
