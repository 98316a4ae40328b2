use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Header row of the roster file.
pub const ROSTER_HEADER: [&str; 4] = ["ID", "Name", "Grade", "Section"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: String,      // ⇔ roster.ID (card identifier, unique)
    pub name: String,    // ⇔ roster.Name
    pub grade: String,   // ⇔ roster.Grade
    pub section: String, // ⇔ roster.Section

    pub present: bool,                  // runtime only, reset on load
    pub time_in: Option<NaiveDateTime>, // runtime only, set while present
}

impl StudentRecord {
    /// Build a fresh, absent student. Every field must be non-blank.
    pub fn new(id: &str, name: &str, grade: &str, section: &str) -> AppResult<Self> {
        let id = required("ID", id)?;
        let name = required("Name", name)?;
        let grade = required("Grade", grade)?;
        let section = required("Section", section)?;

        Ok(Self {
            id,
            name,
            grade,
            section,
            present: false,
            time_in: None,
        })
    }

    pub fn roster_row(&self) -> [&str; 4] {
        [&self.id, &self.name, &self.grade, &self.section]
    }
}

fn required(field: &'static str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_student_is_absent_and_trimmed() {
        let s = StudentRecord::new(" 04A1B2 ", "Ada", "10", "B").unwrap();
        assert_eq!(s.id, "04A1B2");
        assert!(!s.present);
        assert!(s.time_in.is_none());
    }

    #[test]
    fn blank_field_is_rejected() {
        let err = StudentRecord::new("04A1B2", "Ada", " ", "B").unwrap_err();
        assert!(matches!(err, AppError::MissingField("Grade")));
    }
}
