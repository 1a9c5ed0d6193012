//! Contact form fields and validation.
//!
//! The form is local-only: a valid submission flips the form to its
//! confirmation view and nothing leaves the page.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Your message should be at least {} characters.", MIN_MESSAGE_CHARS)]
    MessageTooShort,
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trimmed values that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// First `max_chars` characters of the message, with an ellipsis when cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.message.chars();
        let head = chars.by_ref().take(max_chars).collect::<String>();
        if chars.next().is_some() { format!("{head}…") } else { head }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Editing,
    Invalid(ContactFormError),
    Sent(ContactSubmission),
}

impl ContactForm {
    /// Validate fields in display order and return the trimmed submission.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<ContactSubmission, ContactFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        let message = self.message.trim();
        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ContactFormError::MessageTooShort);
        }
        Ok(ContactSubmission { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }

    /// Validate and produce the status the form should show next.
    pub fn submit(&self) -> ContactStatus {
        match self.validate() {
            Ok(submission) => {
                log::info!("contact form accepted for {}", submission.email);
                ContactStatus::Sent(submission)
            }
            Err(err) => ContactStatus::Invalid(err),
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}
