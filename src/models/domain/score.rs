use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rolling marks tally for one (student, subject) pair. There is at most one
/// record per pair; correct attempts increment `marks_obtained` in place.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: String,
    pub student_id: String,
    pub subject_id: String,
    pub total_marks: i32,
    pub marks_obtained: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_record_round_trip() {
        let record = ScoreRecord {
            id: "score-1".to_string(),
            student_id: "student-1".to_string(),
            subject_id: "subject-1".to_string(),
            total_marks: 10,
            marks_obtained: 3,
            created_at: Some(Utc::now()),
        };

        let json = serde_json::to_string(&record).expect("record should serialize");
        assert!(json.contains("marksObtained"));
        assert!(json.contains("totalMarks"));

        let parsed: ScoreRecord = serde_json::from_str(&json).expect("record should deserialize");
        assert_eq!(parsed.marks_obtained, 3);
        assert_eq!(parsed.total_marks, 10);
    }
}
