use gateway_core::model::{Course, Lesson, Question, Quiz};

/// Courses shipped with the app, in dashboard order.
pub(super) fn courses() -> Vec<Course> {
    vec![orientation_common()]
}

fn orientation_common() -> Course {
    Course::new(
        "orientation_common",
        "SHARE Staff Orientation",
        "Welcome to SHARE Mobile Clinic! Learn about our mission, values, and commitment to \
         providing healthcare to underserved communities in Haiti.",
        vec![
            Lesson::new(
                "l1",
                "Welcome to SHARE",
                include_str!("../../catalog/orientation_common/l1.md"),
            ),
            Lesson::new(
                "l2",
                "Our Mission & Values",
                include_str!("../../catalog/orientation_common/l2.md"),
            ),
            Lesson::new(
                "l3",
                "Working in Haiti",
                include_str!("../../catalog/orientation_common/l3.md"),
            ),
        ],
        vec![Quiz::new(
            "q1",
            "Orientation Quiz",
            vec![
                Question::new(
                    "What is SHARE Mobile Clinic's primary mission?",
                    [
                        "To build permanent hospitals in Haiti",
                        "To provide accessible healthcare to underserved communities through mobile services",
                        "To train doctors in urban areas",
                        "To conduct medical research",
                    ],
                    1,
                ),
                Question::new(
                    "Which of the following is NOT one of SHARE's core values?",
                    [
                        "Compassion",
                        "Profit maximization",
                        "Community Partnership",
                        "Excellence",
                    ],
                    1,
                ),
                Question::new(
                    "How does the mobile clinic approach work?",
                    [
                        "Patients must travel to a central location",
                        "Services are only available online",
                        "The clinic travels to communities on scheduled visits",
                        "Treatment is only provided in emergencies",
                    ],
                    2,
                ),
                Question::new(
                    "What languages are primarily spoken in Haiti?",
                    [
                        "English and Spanish",
                        "French and Portuguese",
                        "Haitian Creole and French",
                        "English and French",
                    ],
                    2,
                ),
                Question::new(
                    "According to the training, what is essential for sustainable healthcare in communities?",
                    [
                        "Community ownership and partnership",
                        "Advanced technology only",
                        "International staff exclusively",
                        "Urban facilities",
                    ],
                    0,
                ),
            ],
        )],
    )
}
