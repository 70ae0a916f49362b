//! Form validation
//!
//! Runs before a registration is dispatched. Errors are returned to the
//! caller and never reach the store.

use regex::Regex;
use school_api::{Guardian, ParentRegistration, StudentRegistration, TeacherRegistration};
use std::sync::OnceLock;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} is not a valid email address")]
    InvalidEmail(&'static str),

    #[error("Password must be at least {} characters long", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,

    #[error("Password must contain a lowercase letter")]
    PasswordMissingLowercase,

    #[error("Password must contain an uppercase letter")]
    PasswordMissingUppercase,

    #[error("Password must contain a digit")]
    PasswordMissingDigit,

    #[error("Password must contain a special character")]
    PasswordMissingSpecial,
}

/// Something a user filled in that can be checked before submitting
pub trait Validate {
    /// Every problem found, not only the first
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn password_rules() -> &'static [(Regex, ValidationError); 4] {
    static PASSWORD_RULES: OnceLock<[(Regex, ValidationError); 4]> = OnceLock::new();
    PASSWORD_RULES.get_or_init(|| {
        [
            (
                Regex::new(r"[a-z]").unwrap(),
                ValidationError::PasswordMissingLowercase,
            ),
            (
                Regex::new(r"[A-Z]").unwrap(),
                ValidationError::PasswordMissingUppercase,
            ),
            (
                Regex::new(r"\d").unwrap(),
                ValidationError::PasswordMissingDigit,
            ),
            (
                Regex::new(r"[^a-zA-Z0-9\s]").unwrap(),
                ValidationError::PasswordMissingSpecial,
            ),
        ]
    })
}

/// Check password strength, reporting every rule that fails
pub fn check_password(password: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(ValidationError::PasswordTooShort);
    }
    for (pattern, error) in password_rules() {
        if !pattern.is_match(password) {
            errors.push(error.clone());
        }
    }
    errors
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// Collects errors while a form is checked
#[derive(Default)]
struct Checker {
    errors: Vec<ValidationError>,
}

impl Checker {
    fn required(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(ValidationError::Required(field));
        }
        self
    }

    fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(ValidationError::Required(field));
        } else if !is_valid_email(value) {
            self.errors.push(ValidationError::InvalidEmail(field));
        }
        self
    }

    /// An optional email is only checked when filled in
    fn optional_email(&mut self, field: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            if !is_valid_email(value) {
                self.errors.push(ValidationError::InvalidEmail(field));
            }
        }
        self
    }

    fn password(&mut self, value: &str) -> &mut Self {
        if value.is_empty() {
            self.errors.push(ValidationError::Required("Password"));
        } else {
            self.errors.extend(check_password(value));
        }
        self
    }

    fn finish(&mut self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

// === Student ===

/// Student registration form as entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub password: String,
    pub class_name: Option<String>,
    pub section: Option<String>,
}

impl Validate for StudentForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Checker::default()
            .required("Name", &self.name)
            .required("Roll number", &self.roll_number)
            .email("Email", &self.email)
            .password(&self.password)
            .finish()
    }
}

impl StudentForm {
    /// Validate and build the request body
    pub fn into_registration(
        self,
        school_id: &str,
    ) -> Result<StudentRegistration, Vec<ValidationError>> {
        self.validate()?;
        Ok(StudentRegistration {
            school_id: school_id.to_string(),
            name: self.name.trim().to_string(),
            roll_number: self.roll_number.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            class_name: non_blank(self.class_name),
            section: non_blank(self.section),
        })
    }
}

// === Teacher ===

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub subjects: Vec<String>,
    pub phone: Option<String>,
}

impl Validate for TeacherForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Checker::default()
            .required("Name", &self.name)
            .email("Email", &self.email)
            .password(&self.password)
            .finish()
    }
}

impl TeacherForm {
    pub fn into_registration(
        self,
        school_id: &str,
    ) -> Result<TeacherRegistration, Vec<ValidationError>> {
        self.validate()?;
        Ok(TeacherRegistration {
            school_id: school_id.to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            subjects: self
                .subjects
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            phone: non_blank(self.phone),
        })
    }
}

// === Parent ===

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentForm {
    /// Login of the parent account
    pub email: String,
    pub password: String,
    pub father: Guardian,
    pub mother: Guardian,
    pub guardian: Option<Guardian>,
    pub student_ids: Vec<String>,
}

impl Validate for ParentForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut checker = Checker::default();
        checker
            .email("Email", &self.email)
            .password(&self.password)
            .required("Father's name", &self.father.name)
            .optional_email("Father's email", self.father.email.as_deref())
            .required("Mother's name", &self.mother.name)
            .optional_email("Mother's email", self.mother.email.as_deref());
        if let Some(guardian) = &self.guardian {
            checker
                .required("Guardian's name", &guardian.name)
                .optional_email("Guardian's email", guardian.email.as_deref());
        }
        checker.finish()
    }
}

impl ParentForm {
    pub fn into_registration(
        self,
        school_id: &str,
    ) -> Result<ParentRegistration, Vec<ValidationError>> {
        self.validate()?;
        Ok(ParentRegistration {
            school_id: school_id.to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            father: self.father,
            mother: self.mother,
            guardian: self.guardian,
            student_ids: self.student_ids,
        })
    }
}
