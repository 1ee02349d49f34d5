use gateway_core::model::{CompletionStatus, Course, UserCourse};
use storage::CourseCatalog;

/// "completed / total" for one item category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemCountVm {
    pub completed: usize,
    pub total: usize,
}

impl ItemCountVm {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.completed, self.total)
    }
}

/// Completed lessons and quizzes of `record` that still exist in `course`.
///
/// Ids that no longer match a catalog item are ignored.
#[must_use]
pub fn count_items(course: &Course, record: &UserCourse) -> (ItemCountVm, ItemCountVm) {
    let lessons = ItemCountVm {
        completed: course
            .lessons()
            .iter()
            .filter(|lesson| record.has_completed_lesson(&lesson.id))
            .count(),
        total: course.lessons().len(),
    };
    let quizzes = ItemCountVm {
        completed: course
            .quizzes()
            .iter()
            .filter(|quiz| record.has_completed_quiz(&quiz.id))
            .count(),
        total: course.quizzes().len(),
    };
    (lessons, quizzes)
}

/// Dashboard counts: the sizes of the record's completed sets over the
/// course's item totals.
#[must_use]
pub fn count_recorded(course: &Course, record: &UserCourse) -> (ItemCountVm, ItemCountVm) {
    (
        ItemCountVm {
            completed: record.lessons_completed.len(),
            total: course.lessons().len(),
        },
        ItemCountVm {
            completed: record.quizzes_completed.len(),
            total: course.quizzes().len(),
        },
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardCardVm {
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub status: CompletionStatus,
    pub progress: u8,
    pub lessons: ItemCountVm,
    pub quizzes: ItemCountVm,
}

impl DashboardCardVm {
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == CompletionStatus::Completed
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DashboardVm {
    pub cards: Vec<DashboardCardVm>,
    /// False when the user has no progress records at all.
    pub has_assignments: bool,
}

/// Join progress records with the catalog.
///
/// Records whose course is missing from the catalog are dropped silently.
#[must_use]
pub fn map_dashboard(catalog: &dyn CourseCatalog, records: &[UserCourse]) -> DashboardVm {
    let cards = records
        .iter()
        .filter_map(|record| {
            let course = catalog.get_course(&record.course_id)?;
            let (lessons, quizzes) = count_recorded(&course, record);
            Some(DashboardCardVm {
                course_id: course.id().to_string(),
                title: course.title().to_owned(),
                description: course.description().to_owned(),
                status: record.status(),
                progress: record.progress_percentage(),
                lessons,
                quizzes,
            })
        })
        .collect();

    DashboardVm {
        cards,
        has_assignments: !records.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_core::model::{CourseId, UserId};
    use gateway_core::time::fixed_now;
    use storage::StaticCatalog;

    fn record(course: &str) -> UserCourse {
        UserCourse::new(UserId::new("u1"), CourseId::new(course))
    }

    #[test]
    fn badge_follows_completed_at_not_percentage() {
        let catalog = StaticCatalog::builtin();
        let records = [record("orientation_common").with_progress(100)];
        let vm = map_dashboard(&*catalog, &records);
        assert_eq!(vm.cards[0].status_label(), "In Progress");

        let records = [record("orientation_common")
            .with_progress(40)
            .with_completed_at(Some(fixed_now()))];
        let vm = map_dashboard(&*catalog, &records);
        assert_eq!(vm.cards[0].status_label(), "Completed");
    }

    #[test]
    fn orphaned_records_are_skipped() {
        let catalog = StaticCatalog::builtin();
        let records = [record("deleted_course"), record("orientation_common")];
        let vm = map_dashboard(&*catalog, &records);
        assert!(vm.has_assignments);
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].course_id, "orientation_common");
    }

    #[test]
    fn no_records_means_no_assignments() {
        let vm = map_dashboard(&*StaticCatalog::builtin(), &[]);
        assert!(!vm.has_assignments);
        assert!(vm.cards.is_empty());
    }

    #[test]
    fn card_counts_use_recorded_set_sizes() {
        let catalog = StaticCatalog::builtin();
        let records = [record("orientation_common")
            .with_lessons(["l1", "l2", "retired", "l1"])
            .with_quizzes(["q1"])];
        let vm = map_dashboard(&*catalog, &records);
        let card = &vm.cards[0];
        assert_eq!(card.lessons.label(), "3 / 3");
        assert_eq!(card.quizzes.label(), "1 / 1");
    }

    #[test]
    fn course_counts_ignore_unknown_ids() {
        let catalog = StaticCatalog::builtin();
        let course = catalog
            .get_course(&CourseId::new("orientation_common"))
            .unwrap();
        let record = record("orientation_common").with_lessons(["l1", "l2", "retired"]);
        let (lessons, quizzes) = count_items(&course, &record);
        assert_eq!(lessons.label(), "2 / 3");
        assert_eq!(quizzes.label(), "0 / 1");
    }
}
