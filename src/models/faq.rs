#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Do you offer laptop warranty?",
        answer: "Yes, all refurbished laptops come with a warranty.",
    },
    Faq {
        question: "Can you provide bulk orders for offices?",
        answer: "Yes, we supply in bulk with custom pricing.",
    },
    Faq {
        question: "Do you install CCTV systems on-site?",
        answer: "Yes, full installation and after-sales support are provided.",
    },
    Faq {
        question: "What internet speeds do you offer?",
        answer: "Plans range from home to enterprise level.",
    },
    Faq {
        question: "How can I contact support?",
        answer: "Call 8447373543 or email vijay.massey@ditel.co.in",
    },
];
