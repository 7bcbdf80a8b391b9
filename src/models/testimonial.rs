use serde::{Deserialize, Serialize};

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub image: String,
    pub rating: u8,
    pub text: String,
    pub location: String,
}

impl Testimonial {
    /// Star rating clamped to the five-star scale.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.rating.min(MAX_RATING)
    }
}
