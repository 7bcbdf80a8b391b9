//! `wa.me` deep links that open WhatsApp with a pre-filled message.

use crate::config::SiteConfig;

const BASE_URL: &str = "https://wa.me";

pub const GENERAL_ENQUIRY: &str = "Hi! I'd like to know more about your services.";

/// Keeps ASCII digits only; `+`, spaces and punctuation are dropped.
#[must_use]
pub fn digits_only(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsApp {
    number: String,
    company: String,
}

impl WhatsApp {
    /// No format validation beyond digit stripping: a bad number simply
    /// produces a link WhatsApp cannot open.
    #[must_use]
    pub fn new(number: &str, company: &str) -> Self {
        Self {
            number: digits_only(number),
            company: company.to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.whatsapp_number, &config.company_name)
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[must_use]
    pub fn link(&self, message: &str) -> String {
        format!(
            "{BASE_URL}/{number}?text={text}",
            number = self.number,
            text = urlencoding::encode(message)
        )
    }

    #[must_use]
    pub fn general_enquiry(&self) -> String {
        self.link(GENERAL_ENQUIRY)
    }

    #[must_use]
    pub fn product_enquiry(&self, product_name: &str) -> String {
        self.product_enquiry_from(product_name, &self.company)
    }

    #[must_use]
    pub fn product_enquiry_from(&self, product_name: &str, company: &str) -> String {
        self.link(&format!(
            "Hi, I'm interested in {product_name} from {company}. Please contact me."
        ))
    }

    #[must_use]
    pub fn service_enquiry(&self, service_name: &str) -> String {
        self.link(&format!(
            "Hi! I'd like to enquire about your {service_name} service."
        ))
    }
}
