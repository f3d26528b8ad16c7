use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

pub const SUBJECT_TAG: &str = "[Portfolio Contact]";
pub const NO_REPLY_ADDRESS: &str = "no-reply@portfolio.com";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Name,
    Message,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A form that passed validation. Only `ContactForm::validate` builds one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ValidContact {
    name: String,
    email: Option<String>,
    subject: Option<String>,
    message: String,
}

/// Template fields handed to the delivery relay. Recipient fields are added
/// by the relay from its own configuration.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

/// `value` as typed, or `None` when it is only whitespace.
fn non_blank(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
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

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<ValidContact, ValidationError> {
        let name = non_blank(&self.name);
        let message = non_blank(&self.message);

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push(RequiredField::Name);
        }
        if message.is_none() {
            missing.push(RequiredField::Message);
        }

        match (name, message) {
            (Some(name), Some(message)) => Ok(ValidContact {
                name,
                email: non_blank(&self.email),
                subject: non_blank(&self.subject),
                message,
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

impl ValidContact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl Notification {
    pub fn compose(contact: &ValidContact) -> Self {
        let subject = match &contact.subject {
            Some(subject) => format!("{SUBJECT_TAG} {subject}"),
            None => format!("{SUBJECT_TAG} Message from {}", contact.name),
        };

        let mut message = String::from("This message was sent from your portfolio contact form:\n\n");
        message.push_str(&format!("Name: {}\n", contact.name));
        if let Some(email) = &contact.email {
            message.push_str(&format!("Email: {email}\n"));
        }
        message.push_str(&format!("\nMessage:\n{}", contact.message));
        message.push_str("\n\n---\n");
        match &contact.email {
            Some(email) => message.push_str(&format!(
                "You can reply directly to {} at {}",
                contact.name, email
            )),
            None => message.push_str("The sender did not provide an email address for replies."),
        }

        Self {
            from_name: contact.name.clone(),
            from_email: contact
                .email
                .clone()
                .unwrap_or_else(|| NO_REPLY_ADDRESS.to_string()),
            subject,
            message,
        }
    }

    /// Server-side re-check of a notification received over the wire.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.from_name.trim().is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.message.trim().is_empty() {
            missing.push(RequiredField::Message);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}
