//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::data::{Career, MemoryResources, ResourceId};

pub const MAJORS_JSON: &str = r#"[
    {"name": "Nursing", "careers": "Nurse, Nurse Practitioner"},
    {"name": "Computer Science", "careers": "Software Engineer, Data Scientist"}
]"#;

pub const CAREERS_JSON: &str = r#"[
    {"name": "Nurse", "description": "Provides patient care.", "avgSalary": "$86,000", "growth": "+6% (2022-2032)"},
    {"name": "Software Engineer", "description": "Builds software.", "avgSalary": "$120,000", "growth": "+25% (2022-2032)"},
    {"name": "Data Scientist", "description": "Analyzes data.", "avgSalary": "$108,000", "growth": "+35% (2022-2032)"}
]"#;

pub const ELECTIVES_JSON: &str = r#"[
    {"courseNumber": "COMP.4200", "courseName": "Artificial Intelligence", "difficulty": "Medium", "credits": 3, "prerequisites": ["COMP.2010"], "tags": ["AI"]},
    {"courseNumber": "COMP.4130", "courseName": "Intro to Security", "difficulty": "Hard", "credits": 3, "prerequisites": [], "tags": ["Security"]}
]"#;

pub const PROFESSORS_JSON: &str = r#"[
    {"professorName": "Dr. Chen", "courseNumber": "COMP.4200", "rating": 4.0, "difficulty": 3.2},
    {"professorName": "Prof. Okafor", "courseNumber": "COMP.4200", "rating": 5.0, "difficulty": 3.8},
    {"professorName": "Dr. Visiting", "courseNumber": "COMP.9999", "rating": 3.0, "difficulty": 2.0}
]"#;

/// All four resources with small, known contents.
pub fn fixture_resources() -> MemoryResources {
    MemoryResources::new()
        .with(ResourceId::Majors, MAJORS_JSON)
        .with(ResourceId::Careers, CAREERS_JSON)
        .with(ResourceId::Electives, ELECTIVES_JSON)
        .with(ResourceId::Professors, PROFESSORS_JSON)
}

/// The "Nurse" record exactly as it appears in [`CAREERS_JSON`].
pub fn nurse() -> Career {
    Career {
        name: "Nurse".to_string(),
        description: "Provides patient care.".to_string(),
        avg_salary: "$86,000".to_string(),
        growth: "+6% (2022-2032)".to_string(),
    }
}
