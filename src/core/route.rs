//! # Routes
//!
//! The fixed set of navigation targets and their path form.
//!
//! ```text
//! landing
//! majors
//! career/{majorName}        majorName percent-encoded
//! electives/{careerTitle}   careerTitle percent-encoded
//! ```
//!
//! Parameters are encoded on the way out and decoded on the way in, so a
//! name like `Computer Science / Engineering` survives the trip through a
//! path. A parameter that is missing, empty, or not valid UTF-8 once decoded
//! parses to `None`; the screen then shows a placeholder instead of failing.

use log::warn;
use std::fmt;

const LANDING: &str = "landing";
const MAJORS: &str = "majors";
const CAREERS: &str = "career";
const ELECTIVES: &str = "electives";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Majors,
    /// Careers for a major. The name is display text only.
    Careers { major_name: Option<String> },
    /// Electives for a career, looked up by exact name.
    Electives { career_title: Option<String> },
}

/// An empty name carries no information and has no path form, so it is
/// stored as `None`.
fn non_empty(name: String) -> Option<String> {
    (!name.is_empty()).then_some(name)
}

impl Route {
    pub fn careers(major_name: impl Into<String>) -> Self {
        Route::Careers {
            major_name: non_empty(major_name.into()),
        }
    }

    pub fn electives(career_title: impl Into<String>) -> Self {
        Route::Electives {
            career_title: non_empty(career_title.into()),
        }
    }

    /// The route's name, without any parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Landing => LANDING,
            Route::Majors => MAJORS,
            Route::Careers { .. } => CAREERS,
            Route::Electives { .. } => ELECTIVES,
        }
    }

    pub fn parameter(&self) -> Option<&str> {
        match self {
            Route::Landing | Route::Majors => None,
            Route::Careers { major_name } => major_name.as_deref(),
            Route::Electives { career_title } => career_title.as_deref(),
        }
    }

    fn takes_parameter(name: &str) -> bool {
        name == CAREERS || name == ELECTIVES
    }

    /// Render this route as a path, percent-encoding the parameter.
    pub fn to_path(&self) -> String {
        if !Self::takes_parameter(self.name()) {
            return self.name().to_string();
        }
        let param = self.parameter().unwrap_or_default();
        format!("{}/{}", self.name(), urlencoding::encode(param))
    }

    /// Parse a path produced by [`Route::to_path`]. A leading `/` is allowed.
    pub fn from_path(path: &str) -> Result<Route, RouteError> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let (name, rest) = match path.split_once('/') {
            Some((name, rest)) => (name, Some(rest)),
            None => (path, None),
        };

        if rest.is_some_and(|r| r.contains('/')) {
            return Err(RouteError::ExtraSegments(path.to_string()));
        }

        match name {
            LANDING | MAJORS if rest.is_some_and(|r| !r.is_empty()) => {
                Err(RouteError::ExtraSegments(path.to_string()))
            }
            LANDING => Ok(Route::Landing),
            MAJORS => Ok(Route::Majors),
            CAREERS => Ok(Route::Careers {
                major_name: decode_parameter(rest),
            }),
            ELECTIVES => Ok(Route::Electives {
                career_title: decode_parameter(rest),
            }),
            _ => Err(RouteError::UnknownRoute(path.to_string())),
        }
    }
}

fn decode_parameter(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|r| !r.is_empty())?;
    match urlencoding::decode(raw) {
        Ok(decoded) if !decoded.is_empty() => Some(decoded.into_owned()),
        Ok(_) => None,
        Err(e) => {
            warn!("Dropping undecodable route parameter {:?}: {}", raw, e);
            None
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownRoute(String),
    ExtraSegments(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownRoute(p) => write!(f, "unknown route: {p}"),
            RouteError::ExtraSegments(p) => write!(f, "too many path segments: {p}"),
        }
    }
}

impl std::error::Error for RouteError {}
