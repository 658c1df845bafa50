//! Course model

use serde::{Deserialize, Serialize};

/// Immutable reference data describing a taught course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub course_code: String,
    pub course_title: String,
    pub credit_hours: f32,
}
