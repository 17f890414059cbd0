use serde::Serialize;

use super::entities::{Student, StudentWithTeacher};

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
}

// Admin view: every student in the school with its teacher
#[derive(Debug, Serialize)]
pub struct SchoolStudentListResponse {
    pub students: Vec<StudentWithTeacher>,
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: Student,
}

#[derive(Debug, Serialize)]
pub struct CreateStudentResponse {
    pub message: String,
    #[serde(rename = "studentId")]
    pub student_id: i64,
}
