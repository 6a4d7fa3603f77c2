//! # Screens
//!
//! What each route shows, independent of how it is drawn.
//!
//! Mounting a screen is synchronous: the route's resources are loaded on the
//! spot and the result is either rendered data or the load error.
//!
//! ```text
//! Unmounted ──mount()──▶ Loading ──ok──▶ Rendered
//!                                └─err─▶ Failed
//! ```
//!
//! Every screen exposes a flat list of selectable entries. Selecting one
//! yields the [`Route`] to navigate to; the screen itself never touches the
//! router.

use log::{info, warn};

use super::route::Route;
use crate::data::{
    Career, DataError, Elective, Major, ProfessorInsight, ResourceSource, load_careers,
    load_electives, load_majors, load_professors,
};

/// Heading used on the careers screen when no major was given.
pub const MAJOR_PLACEHOLDER: &str = "Your Major";

/// An elective together with the ratings joined to it by course number.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectiveRow {
    pub elective: Elective,
    pub average_rating: Option<f64>,
    pub professor_count: usize,
}

/// A professor insight with the course name of the elective it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightRow {
    pub insight: ProfessorInsight,
    pub course_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElectivesView {
    pub career: Career,
    pub electives: Vec<ElectiveRow>,
    pub insights: Vec<InsightRow>,
    pub other_careers: Vec<Career>,
}

impl ElectivesView {
    /// Join electives, insights and careers for `career_title`.
    ///
    /// The career list is not filtered by anything; the title only picks the
    /// header record and which career to leave out of "other careers".
    pub fn build(
        career_title: Option<&str>,
        careers: Vec<Career>,
        electives: Vec<Elective>,
        insights: Vec<ProfessorInsight>,
    ) -> Self {
        let career = Career::resolve(&careers, career_title);
        if Career::find(&careers, &career.name).is_none() {
            warn!("No career named {:?}, showing placeholder", career.name);
        }

        let insight_rows = insights
            .iter()
            .map(|insight| InsightRow {
                insight: insight.clone(),
                course_name: electives
                    .iter()
                    .find(|e| e.course_number == insight.course_number)
                    .map(|e| e.course_name.clone()),
            })
            .collect();

        let elective_rows = electives
            .into_iter()
            .map(|elective| ElectiveRow {
                average_rating: ProfessorInsight::average_rating(
                    &insights,
                    &elective.course_number,
                ),
                professor_count: ProfessorInsight::for_course(&insights, &elective.course_number)
                    .count(),
                elective,
            })
            .collect();

        let other_careers = careers
            .into_iter()
            .filter(|c| c.name != career.name)
            .collect();

        Self {
            career,
            electives: elective_rows,
            insights: insight_rows,
            other_careers,
        }
    }
}

/// Loaded content for one route.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenData {
    Landing,
    Majors {
        majors: Vec<Major>,
    },
    Careers {
        heading: String,
        careers: Vec<Career>,
    },
    Electives(ElectivesView),
}

impl ScreenData {
    /// Load everything `route` needs from `source`.
    pub fn load(route: &Route, source: &dyn ResourceSource) -> Result<ScreenData, DataError> {
        match route {
            Route::Landing => Ok(ScreenData::Landing),
            Route::Majors => Ok(ScreenData::Majors {
                majors: load_majors(source)?,
            }),
            Route::Careers { major_name } => Ok(ScreenData::Careers {
                heading: major_name
                    .clone()
                    .unwrap_or_else(|| MAJOR_PLACEHOLDER.to_string()),
                careers: load_careers(source)?,
            }),
            Route::Electives { career_title } => {
                let electives = load_electives(source)?;
                let insights = load_professors(source)?;
                let careers = load_careers(source)?;
                Ok(ScreenData::Electives(ElectivesView::build(
                    career_title.as_deref(),
                    careers,
                    electives,
                    insights,
                )))
            }
        }
    }

    /// Number of selectable entries.
    pub fn choices(&self) -> usize {
        match self {
            ScreenData::Landing => 1,
            ScreenData::Majors { majors } => majors.len(),
            ScreenData::Careers { careers, .. } => careers.len(),
            ScreenData::Electives(view) => view.other_careers.len(),
        }
    }

    /// Where selecting entry `index` leads.
    pub fn target(&self, index: usize) -> Option<Route> {
        match self {
            ScreenData::Landing => (index == 0).then_some(Route::Majors),
            ScreenData::Majors { majors } => majors.get(index).map(|m| Route::careers(&m.name)),
            ScreenData::Careers { careers, .. } => {
                careers.get(index).map(|c| Route::electives(&c.name))
            }
            ScreenData::Electives(view) => view
                .other_careers
                .get(index)
                .map(|c| Route::electives(&c.name)),
        }
    }
}

#[derive(Debug)]
pub enum ScreenState {
    Rendered(ScreenData),
    Failed(DataError),
}

/// A mounted screen: its route, what was loaded, and the selection cursor.
#[derive(Debug)]
pub struct Screen {
    pub route: Route,
    pub state: ScreenState,
    pub selected: usize,
}

impl Screen {
    pub fn mount(route: Route, source: &dyn ResourceSource) -> Self {
        let state = match ScreenData::load(&route, source) {
            Ok(data) => {
                info!("Mounted {} ({} choices)", route, data.choices());
                ScreenState::Rendered(data)
            }
            Err(e) => {
                warn!("Failed to mount {}: {}", route, e);
                ScreenState::Failed(e)
            }
        };
        Self {
            route,
            state,
            selected: 0,
        }
    }

    pub fn data(&self) -> Option<&ScreenData> {
        match &self.state {
            ScreenState::Rendered(data) => Some(data),
            ScreenState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&DataError> {
        match &self.state {
            ScreenState::Rendered(_) => None,
            ScreenState::Failed(e) => Some(e),
        }
    }

    pub fn choices(&self) -> usize {
        self.data().map_or(0, ScreenData::choices)
    }

    pub fn select_next(&mut self) {
        let n = self.choices();
        if n > 0 {
            self.selected = (self.selected + 1).min(n - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Route for the entry under the cursor, if there is one.
    pub fn selected_target(&self) -> Option<Route> {
        self.data().and_then(|d| d.target(self.selected))
    }
}
