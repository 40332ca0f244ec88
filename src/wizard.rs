//! Wizard step state machine.
//!
//! The linear flow gating when the directory query is issued:
//! `Intro → Concerns → City → Results`. Forward transitions are guarded;
//! going back preserves selections. Once on `Results`, further narrowing
//! happens over the already-fetched advocate set without touching the
//! server again.

use thiserror::Error;

use crate::models::{Advocate, AdvocateFilter, Degree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Intro,
    Concerns,
    City,
    Results,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WizardError {
    #[error("At least one health concern must be selected")]
    NoConcernsSelected,

    #[error("A city must be entered before viewing results")]
    EmptyCity,

    #[error("Results is the final step")]
    AtFinalStep,
}

/// Client-side refinement over the fetched result set. Defaults mean
/// "no narrowing"; reset whenever the wizard enters `Results`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultFilters {
    /// Case-insensitive substring match against the advocate's full name.
    pub search: String,
    /// Minimum years of experience, inclusive.
    pub min_experience: Option<u32>,
    /// Exact degree match.
    pub degree: Option<Degree>,
}

impl ResultFilters {
    pub fn matches(&self, advocate: &Advocate) -> bool {
        let matches_search = self.search.is_empty()
            || advocate
                .full_name()
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_experience = self
            .min_experience
            .map_or(true, |min| advocate.years_of_experience >= min);
        let matches_degree = self.degree.map_or(true, |d| advocate.degree == d);
        matches_search && matches_experience && matches_degree
    }
}

pub struct Wizard {
    step: WizardStep,
    concerns: Vec<String>,
    city: String,
    filters: ResultFilters,
    /// Advocate shown in the detail overlay, if any.
    open_advocate: Option<i64>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Intro,
            concerns: Vec::new(),
            city: String::new(),
            filters: ResultFilters::default(),
            open_advocate: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn concerns(&self) -> &[String] {
        &self.concerns
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn filters(&self) -> &ResultFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut ResultFilters {
        &mut self.filters
    }

    /// Select or deselect a concern (selection toggles).
    pub fn toggle_concern(&mut self, name: &str) {
        if let Some(pos) = self.concerns.iter().position(|c| c == name) {
            self.concerns.remove(pos);
        } else {
            self.concerns.push(name.to_string());
        }
    }

    pub fn set_city(&mut self, city: &str) {
        self.city = city.to_string();
    }

    /// Advance to the next step. A rejected advance leaves the state
    /// unchanged. Entering `Results` resets the refinement filters.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let next = match self.step {
            WizardStep::Intro => WizardStep::Concerns,
            WizardStep::Concerns => {
                if self.concerns.is_empty() {
                    return Err(WizardError::NoConcernsSelected);
                }
                WizardStep::City
            }
            WizardStep::City => {
                if self.city.trim().is_empty() {
                    return Err(WizardError::EmptyCity);
                }
                self.filters = ResultFilters::default();
                WizardStep::Results
            }
            WizardStep::Results => return Err(WizardError::AtFinalStep),
        };
        self.step = next;
        Ok(next)
    }

    /// Step back to the predecessor, keeping selections intact.
    /// A no-op on `Intro`.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Intro | WizardStep::Concerns => WizardStep::Intro,
            WizardStep::City => WizardStep::Concerns,
            WizardStep::Results => WizardStep::City,
        };
        self.step
    }

    /// The server-side filter for the results fetch: selected city and
    /// concern list only — text/experience/degree narrowing stays local.
    pub fn query_filter(&self) -> AdvocateFilter {
        AdvocateFilter {
            name_query: None,
            city: Some(self.city.clone()),
            specialties: self.concerns.clone(),
        }
    }

    /// Apply the client-side filters to an already-fetched set.
    pub fn refine<'a>(&self, advocates: &'a [Advocate]) -> Vec<&'a Advocate> {
        advocates.iter().filter(|a| self.filters.matches(a)).collect()
    }

    // ── Detail overlay ──────────────────────────────────────

    pub fn open_detail(&mut self, advocate_id: i64) {
        self.open_advocate = Some(advocate_id);
    }

    /// Closing the overlay returns to the same list state.
    pub fn close_detail(&mut self) {
        self.open_advocate = None;
    }

    pub fn open_detail_id(&self) -> Option<i64> {
        self.open_advocate
    }
}
