//! Contact form submission: validation, a single relay call, and the
//! outcome shown to the visitor.

use crate::common::{ContactError, DeliveryError};
use crate::data::profile::CONTACT_EMAIL;
use crate::models::{ContactForm, FormField, Notification};
use crate::services::relay::Notifier;

pub const VALIDATION_MESSAGE: &str = "Please fill out all required fields.";
pub const DELIVERY_FAILED_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again later.";
pub const SENDING_MESSAGE: &str = "Sending your message...";
pub const SENT_MESSAGE: &str = "Thank you for your message! It has been sent as a notification to my Gmail inbox. I'll review it and get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Validating,
    Sending,
    Sent,
    Failed(ContactError),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ModalKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub kind: ModalKind,
    pub title: &'static str,
    pub message: &'static str,
    /// Address offered when the relay itself failed.
    pub fallback_email: Option<&'static str>,
}

impl ContactStatus {
    /// Dialog for the current state, if one should be open.
    pub fn modal(&self) -> Option<ModalContent> {
        match self {
            Self::Sent => Some(ModalContent {
                kind: ModalKind::Success,
                title: "Message Sent!",
                message: SENT_MESSAGE,
                fallback_email: None,
            }),
            Self::Failed(ContactError::Validation(_)) => Some(ModalContent {
                kind: ModalKind::Error,
                title: "Missing Information",
                message: VALIDATION_MESSAGE,
                fallback_email: None,
            }),
            Self::Failed(_) => Some(ModalContent {
                kind: ModalKind::Error,
                title: "Message Not Sent",
                message: DELIVERY_FAILED_MESSAGE,
                fallback_email: Some(CONTACT_EMAIL),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    form: ContactForm,
    status: ContactStatus,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.status, ContactStatus::Sending)
    }

    pub fn edit(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    /// Validates the form and, on success, moves to `Sending` and returns
    /// the notification to deliver. A second call while a send is still
    /// outstanding is refused without touching the state.
    pub fn begin_submit(&mut self) -> Result<Notification, ContactError> {
        if self.is_sending() {
            return Err(ContactError::InFlight);
        }

        self.status = ContactStatus::Validating;
        match self.form.validate() {
            Ok(contact) => {
                self.status = ContactStatus::Sending;
                Ok(Notification::compose(&contact))
            }
            Err(e) => {
                let err = ContactError::from(e);
                self.status = ContactStatus::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Applies the relay outcome. Success clears the form; failure keeps it
    /// so nothing has to be retyped. Ignored unless a send is outstanding.
    pub fn finish(&mut self, outcome: Result<(), DeliveryError>) -> bool {
        if !self.is_sending() {
            log::warn!("Dropping relay outcome with no send outstanding");
            return false;
        }

        match outcome {
            Ok(()) => {
                self.form.clear();
                self.status = ContactStatus::Sent;
            }
            Err(e) => {
                log::error!("Contact message delivery failed: {}", e);
                self.status = ContactStatus::Failed(ContactError::Delivery(e));
            }
        }
        true
    }

    pub async fn submit<N>(&mut self, notifier: &N) -> Result<(), ContactError>
    where
        N: Notifier + ?Sized,
    {
        let notification = self.begin_submit()?;
        let outcome = notifier.send(&notification).await;
        self.finish(outcome.clone());
        outcome.map_err(ContactError::from)
    }

    /// Closes the result dialog.
    pub fn dismiss(&mut self) {
        if matches!(self.status, ContactStatus::Sent | ContactStatus::Failed(_)) {
            self.status = ContactStatus::Idle;
        }
    }
}
