use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Error type for parsing an ID from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

// Catalog and user identifiers are opaque strings chosen by the content
// authors or the auth backend. Each gets its own type so a lesson id can
// never be passed where a quiz id is expected.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "`")]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the underlying string value
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ParseIdError {
                        kind: stringify!($name),
                    });
                }
                Ok(Self::new(trimmed))
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_id! {
    /// Unique identifier for a Course
    CourseId
}

string_id! {
    /// Identifier for a Lesson, unique within its course
    LessonId
}

string_id! {
    /// Identifier for a Quiz, unique within its course
    QuizId
}

string_id! {
    /// Identifier of an authenticated user, issued by the auth backend
    UserId
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_display() {
        let id = CourseId::new("orientation_common");
        assert_eq!(id.to_string(), "orientation_common");
    }

    #[test]
    fn test_lesson_id_from_str_trims() {
        let id: LessonId = "  l2 ".parse().unwrap();
        assert_eq!(id, LessonId::new("l2"));
    }

    #[test]
    fn test_quiz_id_from_str_empty() {
        let result = "   ".parse::<QuizId>();
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "failed to parse QuizId from string"
        );
    }

    #[test]
    fn test_user_id_debug() {
        let id = UserId::new("u-1");
        assert_eq!(format!("{id:?}"), "UserId(\"u-1\")");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&CourseId::new("c1")).unwrap();
        assert_eq!(json, "\"c1\"");
        let back: LessonId = serde_json::from_str("\"l1\"").unwrap();
        assert_eq!(back.as_str(), "l1");
    }
}
