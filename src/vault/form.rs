use crate::vault::models::Credentials;
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormField {
    Platform,
    Username,
    Password,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Platform => "Platform",
            FormField::Username => "Username",
            FormField::Password => "Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Platform => "Enter platform name",
            FormField::Username => "Enter username",
            FormField::Password => "Enter password",
        }
    }
}

/// Result of pressing submit on the form.
#[derive(Debug)]
pub enum FormOutcome {
    /// Draft was complete. The form has been reset and closed.
    Submitted(Credentials),
    /// A field was empty. Draft and open state are unchanged.
    Ignored,
}

/// Draft state for the "add credentials" modal.
#[derive(Debug)]
pub struct EntryForm {
    open: bool,
    pub focus: FormField,
    pub platform: String,
    pub username: String,
    pub password: String,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            open: false,
            focus: FormField::Platform,
            platform: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.reset();
        self.open = true;
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Platform => &self.platform,
            FormField::Username => &self.username,
            FormField::Password => &self.password,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Platform => &mut self.platform,
            FormField::Username => &mut self.username,
            FormField::Password => &mut self.password,
        }
    }

    /// Replace a whole field (last write wins).
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        self.value_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Platform => FormField::Username,
            FormField::Username => FormField::Password,
            FormField::Password => FormField::Platform,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            FormField::Platform => FormField::Password,
            FormField::Username => FormField::Platform,
            FormField::Password => FormField::Username,
        };
    }

    pub fn submit(&mut self) -> FormOutcome {
        let candidate = Credentials::new(
            self.platform.clone(),
            self.username.clone(),
            &self.password,
        );
        if !candidate.is_complete() {
            debug!(focus = ?self.focus, "submit ignored: empty field");
            return FormOutcome::Ignored;
        }
        self.reset();
        self.open = false;
        FormOutcome::Submitted(candidate)
    }

    pub fn cancel(&mut self) {
        self.reset();
        self.open = false;
    }

    fn reset(&mut self) {
        self.focus = FormField::Platform;
        self.platform.clear();
        self.username.clear();
        self.password.clear();
    }
}
