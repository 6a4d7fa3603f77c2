//! # Data
//!
//! Typed records and the loader that produces them from bundled JSON.
//!
//! - [`records`]: `Major`, `Career`, `Elective`, `ProfessorInsight`
//! - [`loader`]: `ResourceSource` implementations and `load()`

pub mod loader;
pub mod records;

pub use loader::{
    BundledResources, DataError, DirResources, Memoized, MemoryResources, ResourceId,
    ResourceSource, load, load_careers, load_electives, load_majors, load_professors,
};
pub use records::{
    CAREER_PLACEHOLDER, Career, Difficulty, Elective, MISSING_FIGURE, Major, ProfessorInsight,
    Workload,
};
