//! Contact form. Nothing leaves the machine: a submission either becomes a
//! WhatsApp deep link or is acknowledged after a fixed delay.

use std::time::Duration;

use crate::whatsapp::WhatsApp;

pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
pub const SUCCESS_MESSAGE: &str = "Thank you! We'll get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please accept the privacy policy to continue.")]
    ConsentRequired,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub consent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: &'static str,
    pub delay: Duration,
}

impl ContactForm {
    /// Accepts the form and clears it. Fails only when consent is missing,
    /// in which case the form keeps its contents.
    pub fn submit(&mut self) -> Result<Acknowledgement, ContactError> {
        if !self.consent {
            return Err(ContactError::ConsentRequired);
        }

        log::info!("Contact form accepted for {}", self.display_name());
        *self = Self::default();

        Ok(Acknowledgement {
            message: SUCCESS_MESSAGE,
            delay: SUBMIT_DELAY,
        })
    }

    /// WhatsApp message summarising the filled-in fields; blank fields are left out.
    #[must_use]
    pub fn whatsapp_message(&self) -> String {
        let mut lines = vec![format!("Hi! I'm {}.", self.display_name())];

        for (label, value) in [
            ("Subject", &self.subject),
            ("Email", &self.email),
            ("Phone", &self.phone),
        ] {
            if !value.trim().is_empty() {
                lines.push(format!("{label}: {}", value.trim()));
            }
        }

        if !self.message.trim().is_empty() {
            lines.push(self.message.trim().to_string());
        }

        lines.join("\n")
    }

    /// Same consent guard as [`ContactForm::submit`], but hands the form off
    /// to WhatsApp instead of acknowledging it.
    pub fn whatsapp_link(&self, whatsapp: &WhatsApp) -> Result<String, ContactError> {
        if !self.consent {
            return Err(ContactError::ConsentRequired);
        }

        Ok(whatsapp.link(&self.whatsapp_message()))
    }

    fn display_name(&self) -> &str {
        match self.name.trim() {
            "" => "a visitor",
            name => name,
        }
    }
}
