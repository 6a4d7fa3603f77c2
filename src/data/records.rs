//! # Records
//!
//! The four static record types shipped with the app. All of them are
//! plain data: deserialized once per screen visit and never mutated.
//!
//! Field names on the wire are camelCase (`avgSalary`, `courseNumber`, ...).
//! Unknown fields are ignored, so resource files may carry extra metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An academic major. `careers` is free text, not a list of keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Major {
    pub name: String,
    pub careers: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub name: String,
    pub description: String,
    pub avg_salary: String,
    pub growth: String,
}

/// Name used when a screen is entered without a career title.
pub const CAREER_PLACEHOLDER: &str = "Career";

/// Text shown for salary/growth when a career could not be resolved.
pub const MISSING_FIGURE: &str = "N/A";

impl Career {
    /// Synthesizes a stand-in record for a career title that has no entry
    /// in the career list. The title is kept so the header still reads right.
    pub fn placeholder(title: &str) -> Self {
        Self {
            name: title.to_string(),
            description: format!("Detailed information for {title} is not available yet."),
            avg_salary: MISSING_FIGURE.to_string(),
            growth: MISSING_FIGURE.to_string(),
        }
    }

    /// First career whose name matches `title` exactly.
    pub fn find<'a>(careers: &'a [Career], title: &str) -> Option<&'a Career> {
        careers.iter().find(|c| c.name == title)
    }

    /// Resolve `title` against `careers`, falling back to a placeholder.
    ///
    /// `None` resolves [`CAREER_PLACEHOLDER`], which normally has no entry
    /// and therefore yields a placeholder record as well.
    pub fn resolve(careers: &[Career], title: Option<&str>) -> Career {
        let target = title.unwrap_or(CAREER_PLACEHOLDER);
        Self::find(careers, target)
            .cloned()
            .unwrap_or_else(|| Self::placeholder(target))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[serde(alias = "easy")]
    Easy,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "hard")]
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Elective {
    pub course_number: String,
    pub course_name: String,
    pub difficulty: Difficulty,
    pub credits: u32,
    pub prerequisites: Vec<String>,
    pub tags: Vec<String>,
}

/// A professor rating for one course.
///
/// `rating` is on a 0-5 scale, `difficulty` on a 1-5 scale. Neither range is
/// enforced at load time; display code clamps.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorInsight {
    pub professor_name: String,
    pub course_number: String,
    pub rating: f64,
    pub difficulty: f64,
}

/// Coarse bucket for a professor's numeric difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Light,
    Moderate,
    Heavy,
}

impl ProfessorInsight {
    pub fn workload(&self) -> Workload {
        if self.difficulty <= 2.5 {
            Workload::Light
        } else if self.difficulty <= 3.5 {
            Workload::Moderate
        } else {
            Workload::Heavy
        }
    }

    /// Difficulty as a fraction of the 5-point scale, clamped to `[0, 1]`.
    pub fn difficulty_ratio(&self) -> f64 {
        (self.difficulty / 5.0).clamp(0.0, 1.0)
    }

    /// All insights for `course_number`, in list order.
    pub fn for_course<'a>(
        insights: &'a [ProfessorInsight],
        course_number: &'a str,
    ) -> impl Iterator<Item = &'a ProfessorInsight> + 'a {
        insights
            .iter()
            .filter(move |p| p.course_number == course_number)
    }

    /// Mean rating across the insights for `course_number`, if any exist.
    pub fn average_rating(insights: &[ProfessorInsight], course_number: &str) -> Option<f64> {
        let (sum, count) = Self::for_course(insights, course_number)
            .fold((0.0, 0usize), |(sum, count), p| (sum + p.rating, count + 1));
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}
