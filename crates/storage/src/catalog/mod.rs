//! Read-only course catalog.
//!
//! Page views only see the [`CourseCatalog`] trait, so a backend-served
//! catalog can replace the compiled-in one without touching them.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use gateway_core::model::{Course, CourseError, CourseId};
use thiserror::Error;

mod builtin;

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("course id {0} is defined more than once")]
    DuplicateCourse(CourseId),
}

/// Lookup contract for course content.
pub trait CourseCatalog: Send + Sync {
    /// Fetch a course by id; `None` when the id is not in the catalog.
    fn get_course(&self, id: &CourseId) -> Option<Arc<Course>>;

    /// Every course, in a stable order.
    fn all_courses(&self) -> Vec<Arc<Course>>;
}

/// Immutable catalog held in memory, ordered by definition.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    courses: Vec<Arc<Course>>,
    index: HashMap<CourseId, usize>,
}

static BUILTIN: LazyLock<Arc<StaticCatalog>> = LazyLock::new(|| {
    let catalog = StaticCatalog::from_courses(builtin::courses())
        .expect("built-in catalog has unique course ids");
    Arc::new(catalog)
});

impl StaticCatalog {
    /// Build a catalog from courses in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateCourse` if two courses share an id.
    pub fn from_courses(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(courses.len());
        let mut stored = Vec::with_capacity(courses.len());

        for course in courses {
            if index.contains_key(course.id()) {
                return Err(CatalogError::DuplicateCourse(course.id().clone()));
            }
            index.insert(course.id().clone(), stored.len());
            stored.push(Arc::new(course));
        }

        Ok(Self {
            courses: stored,
            index,
        })
    }

    /// The catalog compiled into the binary, built once per process.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in course list repeats an id.
    #[must_use]
    pub fn builtin() -> Arc<StaticCatalog> {
        Arc::clone(&BUILTIN)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Every invariant violation across the catalog, tagged by course.
    #[must_use]
    pub fn validation_report(&self) -> Vec<(CourseId, CourseError)> {
        self.courses
            .iter()
            .flat_map(|course| {
                course
                    .validate()
                    .into_iter()
                    .map(|err| (course.id().clone(), err))
            })
            .collect()
    }
}

impl CourseCatalog for StaticCatalog {
    fn get_course(&self, id: &CourseId) -> Option<Arc<Course>> {
        self.index
            .get(id)
            .and_then(|position| self.courses.get(*position))
            .cloned()
    }

    fn all_courses(&self) -> Vec<Arc<Course>> {
        self.courses.clone()
    }
}
