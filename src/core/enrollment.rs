//! Students and courses only see each other through narrow traits, and the
//! enrollment coordinator depends on those traits rather than the concrete
//! types. Enrollments are recorded as display labels, not references: there
//! is no reverse lookup and no uniqueness check.

pub trait StudentManagement {
    fn name(&self) -> &str;
    fn id(&self) -> &str;
    fn year(&self) -> &str;
    fn enroll_in_course(&mut self, course: &dyn CourseManagement);
}

pub trait CourseManagement {
    fn course_id(&self) -> &str;
    fn course_name(&self) -> &str;
    fn department(&self) -> &str;
    fn semester(&self) -> &str;
    fn add_student(&mut self, student: &dyn StudentManagement);
}

pub trait Enrollment {
    fn enroll(&self, student: &mut dyn StudentManagement, course: &mut dyn CourseManagement);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EnrollmentManager;

impl Enrollment for EnrollmentManager {
    fn enroll(&self, student: &mut dyn StudentManagement, course: &mut dyn CourseManagement) {
        tracing::debug!(
            "Enrolling {} in {}",
            student.id(),
            course.course_id()
        );
        student.enroll_in_course(course);
        course.add_student(student);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year(String);

impl Year {
    pub fn new(year: &str) -> Self {
        Self(year.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    id: String,
    year: Year,
    enrolled_courses: Vec<String>,
}

impl Student {
    pub fn new(name: &str, id: &str, year: Year) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            year,
            enrolled_courses: Vec::new(),
        }
    }

    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }
}

impl StudentManagement for Student {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn year(&self) -> &str {
        self.year.as_str()
    }

    fn enroll_in_course(&mut self, course: &dyn CourseManagement) {
        self.enrolled_courses
            .push(format!("{}-{}", course.course_id(), course.course_name()));
    }
}

#[derive(Debug, Clone)]
pub struct Course {
    course_id: String,
    course_name: String,
    department: String,
    semester: String,
    enrolled_students: Vec<String>,
}

impl Course {
    pub fn regular(course_id: &str, course_name: &str, department: &str, semester: &str) -> Self {
        Self {
            course_id: course_id.to_string(),
            course_name: course_name.to_string(),
            department: department.to_string(),
            semester: semester.to_string(),
            enrolled_students: Vec::new(),
        }
    }

    pub fn enrolled_students(&self) -> &[String] {
        &self.enrolled_students
    }
}

impl CourseManagement for Course {
    fn course_id(&self) -> &str {
        &self.course_id
    }

    fn course_name(&self) -> &str {
        &self.course_name
    }

    fn department(&self) -> &str {
        &self.department
    }

    fn semester(&self) -> &str {
        &self.semester
    }

    fn add_student(&mut self, student: &dyn StudentManagement) {
        self.enrolled_students
            .push(format!("{} ({})", student.name(), student.id()));
    }
}

/// Renders a label list as `[a, b]`.
pub fn format_labels(labels: &[String]) -> String {
    format!("[{}]", labels.join(", "))
}
