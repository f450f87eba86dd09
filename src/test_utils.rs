use crate::models::domain::{Answer, Question, Subject, User};


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::UserRole;

    #[test]
    fn test_fixtures_roles() {
        assert_eq!(test_teacher().role, UserRole::Teacher);
        assert_eq!(test_student().role, UserRole::Student);
    }

    #[test]
    fn test_fixtures_question_answers_linked() {
        let (question, answers) = test_question_with_answers("subject-1", "teacher-1");
        assert_eq!(answers.len(), 2);
        assert!(answers.iter().all(|a| a.question_id == question.id));
        assert_eq!(answers.iter().filter(|a| a.is_preferred).count(), 1);
    }
}
