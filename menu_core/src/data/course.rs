use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::form::ValidationError;

/// The fixed set of courses a dish can belong to. The declaration order is the
/// order in which courses are reported.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Course {
    Starter,
    Main,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = ValidationError;

    /// Parses a course name, ignoring surrounding whitespace and case. An empty
    /// input is the unset placeholder of the add form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingCourse);
        }
        Course::ALL
            .into_iter()
            .find(|course| course.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownCourse { input: s.to_string() })
    }
}

/// Selects which part of the catalog the filter screen shows.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    /// The selector buttons in display order.
    pub const CHOICES: [CourseFilter; 4] = [
        CourseFilter::All,
        CourseFilter::Only(Course::Starter),
        CourseFilter::Only(Course::Main),
        CourseFilter::Only(Course::Dessert),
    ];

    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(selected) => *selected == course,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourseFilter::All => "All",
            CourseFilter::Only(course) => course.as_str(),
        }
    }
}

impl From<Course> for CourseFilter {
    fn from(course: Course) -> Self {
        CourseFilter::Only(course)
    }
}

impl FromStr for CourseFilter {
    type Err = ValidationError;

    /// Parses a selector. "All" and an unset (empty) selector both select the
    /// whole catalog.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(CourseFilter::All);
        }
        trimmed.parse().map(CourseFilter::Only)
    }
}
