use std::time::Duration;

/// How long the simulated submission takes.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Value of the `name`/`id` attribute on the input.
    pub const fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

/// Local state of the contact form. Never leaves the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Marks the form as submitting. Returns `false` if a submission is
    /// already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Ends the fake submission: every field is emptied.
    pub fn finish_submit(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(FormField::Name, "Ada");
        form.set(FormField::Email, "ada@example.com");
        form.set(FormField::Subject, "Project Discussion");
        form.set(FormField::Message, "Let's talk about dashboards.");
        form
    }

    #[test]
    fn test_set_and_get() {
        let form = filled();
        assert_eq!(form.get(FormField::Name), "Ada");
        assert_eq!(form.get(FormField::Email), "ada@example.com");
        assert_eq!(form.get(FormField::Subject), "Project Discussion");
        assert_eq!(form.get(FormField::Message), "Let's talk about dashboards.");
    }

    #[test]
    fn test_submit_round_trip() {
        let mut form = filled();
        assert!(!form.is_submitting());

        assert!(form.begin_submit());
        assert!(form.is_submitting());
        // fields are kept while the request is "in flight"
        assert_eq!(form.get(FormField::Name), "Ada");

        form.finish_submit();
        assert!(!form.is_submitting());
        for field in FormField::ALL {
            assert!(form.get(field).is_empty(), "{} should be cleared", field.key());
        }
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_field_keys_are_unique() {
        let keys = FormField::ALL.map(FormField::key);
        assert_eq!(keys, ["name", "email", "subject", "message"]);
    }

    #[test]
    fn test_delay_is_two_seconds() {
        assert_eq!(SUBMIT_DELAY, Duration::from_secs(2));
    }
}
