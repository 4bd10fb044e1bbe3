use crate::core::enrollment::{
    format_labels, Course, CourseManagement, Enrollment, EnrollmentManager, Student,
    StudentManagement, Year,
};
use crate::domain::ports::Console;

pub fn run(out: &mut dyn Console) -> (Student, Course) {
    let mut student = Student::new("CH Hansi", "2320030331", Year::new("2nd year"));
    let mut course = Course::regular(
        "23CS2103R",
        "Advanced Object Oriented Programming",
        "CSE",
        "Even Sem",
    );

    let manager: &dyn Enrollment = &EnrollmentManager;
    manager.enroll(&mut student, &mut course);

    out.line("STUDENT DETAILS : ");
    out.line(&format!("Student Name: {}", student.name()));
    out.line(&format!("Student ID: {}", student.id()));
    out.line(&format!("Student Year: {}", student.year()));
    out.line(&format!(
        "Enrolled Courses for {}: {}",
        student.name(),
        format_labels(student.enrolled_courses())
    ));
    out.line("COURSE DETAILS : ");
    out.line(&format!("Course Name: {}", course.course_name()));
    out.line(&format!("Course ID: {}", course.course_id()));
    out.line(&format!("Course Department: {}", course.department()));
    out.line(&format!("Course Semester: {}", course.semester()));
    out.line(&format!(
        "Enrolled Students in {}: {}",
        course.course_name(),
        format_labels(course.enrolled_students())
    ));

    (student, course)
}
