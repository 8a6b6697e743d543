//! Demo login form.
//!
//! There is no authentication backend. The form accepts any non-empty pair for
//! validation purposes and signs in only with the configured demo credentials.

/// Username and password pair accepted by the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

/// Field of the login form holding keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Result of submitting the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A field is blank; the form is flagged and nothing else happens.
    Incomplete,
    /// Both fields are filled but do not match the demo credentials.
    Rejected,
    /// Credentials match.
    Accepted,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    username: String,
    password: String,
    focus: LoginField,
    was_validated: bool,
}

impl LoginForm {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub const fn focus(&self) -> LoginField {
        self.focus
    }

    /// Set after the first submit attempt; turns on blank-field highlighting.
    #[must_use]
    pub const fn was_validated(&self) -> bool {
        self.was_validated
    }

    /// Returns `true` if `field` should be drawn as invalid.
    #[must_use]
    pub fn is_invalid(&self, field: LoginField) -> bool {
        self.was_validated && self.value(field).is_empty()
    }

    fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Validates the form and checks the trimmed values against `credentials`.
    pub fn submit(&mut self, credentials: &Credentials) -> LoginOutcome {
        self.was_validated = true;

        if self.username.is_empty() || self.password.is_empty() {
            tracing::debug!("login form incomplete");
            return LoginOutcome::Incomplete;
        }

        if self.username.trim() == credentials.username && self.password.trim() == credentials.password {
            tracing::info!(username = %credentials.username, "demo login accepted");
            LoginOutcome::Accepted
        } else {
            tracing::debug!("demo login rejected");
            LoginOutcome::Rejected
        }
    }
}
