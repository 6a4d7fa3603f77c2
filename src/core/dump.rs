//! Plain-text rendering of a mounted screen, for `--dump`.

use std::fmt::Write;

use crate::core::screen::{ElectivesView, Screen, ScreenData};

pub fn dump_screen(screen: &Screen) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", screen.route);
    if let Some(e) = screen.error() {
        let _ = writeln!(out, "error: {e}");
        return out;
    }
    match screen.data() {
        Some(ScreenData::Landing) => {
            let _ = writeln!(out, "HawkAdvisor");
            let _ = writeln!(out, "-> majors");
        }
        Some(ScreenData::Majors { majors }) => {
            for major in majors {
                let _ = writeln!(out, "{}: {}", major.name, major.careers);
            }
        }
        Some(ScreenData::Careers { heading, careers }) => {
            let _ = writeln!(out, "{heading}");
            for career in careers {
                let _ = writeln!(out, "- {}: {}", career.name, career.description);
            }
        }
        Some(ScreenData::Electives(view)) => dump_electives(&mut out, view),
        None => {}
    }
    out
}

fn dump_electives(out: &mut String, view: &ElectivesView) {
    let career = &view.career;
    let _ = writeln!(out, "{}", career.name);
    let _ = writeln!(out, "{}", career.description);
    let _ = writeln!(out, "salary: {}  growth: {}", career.avg_salary, career.growth);

    let _ = writeln!(out, "\n{} courses", view.electives.len());
    for row in &view.electives {
        let e = &row.elective;
        let rating = row
            .average_rating
            .map(|r| format!("  rating {r:.1}"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{} {} [{}] {} cr{}",
            e.course_number, e.course_name, e.difficulty, e.credits, rating
        );
        if !e.prerequisites.is_empty() {
            let _ = writeln!(out, "  prerequisites: {}", e.prerequisites.join(", "));
        }
    }

    let _ = writeln!(out, "\nprofessors");
    for row in &view.insights {
        let p = &row.insight;
        let _ = writeln!(
            out,
            "{} | {} | {:.1} | {:.1}",
            p.professor_name, p.course_number, p.rating, p.difficulty
        );
    }

    if !view.other_careers.is_empty() {
        let names: Vec<&str> = view.other_careers.iter().map(|c| c.name.as_str()).collect();
        let _ = writeln!(out, "\nother careers: {}", names.join(", "));
    }
}
