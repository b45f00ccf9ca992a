//! Form state for the sign in / sign up dialog. Nothing here is sent anywhere.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserType {
    #[default]
    Student,
    Instructor,
}

impl Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Student => write!(f, "Student"),
            UserType::Instructor => write!(f, "Instructor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub user_type: UserType,
    pub accept_terms: bool,
}

impl AuthFormData {
    /// The sign up button stays disabled until the terms are accepted.
    pub fn can_sign_up(&self) -> bool {
        self.accept_terms
    }

    pub fn sign_up_label(&self) -> String {
        format!("Create Account as {}", self.user_type)
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_needs_terms() {
        let mut form = AuthFormData::default();
        assert!(!form.can_sign_up());
        form.accept_terms = true;
        assert!(form.can_sign_up());
    }

    #[test]
    fn label_follows_user_type() {
        let mut form = AuthFormData::default();
        assert_eq!(form.sign_up_label(), "Create Account as Student");
        form.user_type = UserType::Instructor;
        assert_eq!(form.sign_up_label(), "Create Account as Instructor");
    }

    #[test]
    fn password_confirmation() {
        let form = AuthFormData { password: "abc".into(), confirm_password: "abd".into(), ..Default::default() };
        assert!(!form.passwords_match());
    }
}
