#![allow(dead_code)]

use portfolio::models::*;

pub fn get_filled_form() -> ContactForm {
    ContactForm {
        name: "Maria Santos".to_string(),
        email: "maria@example.com".to_string(),
        subject: "Internship".to_string(),
        message: "Are you open to a summer internship?".to_string(),
    }
}

pub fn get_anonymous_form() -> ContactForm {
    ContactForm {
        name: "Maria Santos".to_string(),
        message: "Nice portfolio!".to_string(),
        ..Default::default()
    }
}

pub fn get_blank_form() -> ContactForm {
    ContactForm {
        name: "   ".to_string(),
        email: "maria@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "\n\t".to_string(),
    }
}

pub fn get_nameless_form() -> ContactForm {
    ContactForm {
        name: String::new(),
        ..get_filled_form()
    }
}

pub fn get_empty_message_form() -> ContactForm {
    ContactForm {
        message: " ".to_string(),
        ..get_filled_form()
    }
}

pub fn get_seed_notification() -> Notification {
    Notification {
        from_name: "Maria Santos".to_string(),
        from_email: "maria@example.com".to_string(),
        subject: "[Portfolio Contact] Internship".to_string(),
        message: "body".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tagged {
    pub id: u32,
    pub category: CertificateCategory,
}

impl Categorized for Tagged {
    type Category = CertificateCategory;

    fn category(&self) -> CertificateCategory {
        self.category
    }
}

pub fn get_seed_tagged() -> Vec<Tagged> {
    vec![
        Tagged { id: 1, category: CertificateCategory::Certificate },
        Tagged { id: 2, category: CertificateCategory::Seminar },
        Tagged { id: 3, category: CertificateCategory::Certificate },
        Tagged { id: 4, category: CertificateCategory::Seminar },
        Tagged { id: 5, category: CertificateCategory::Certificate },
    ]
}

pub fn ids(items: &[&Tagged]) -> Vec<u32> {
    items.iter().map(|item| item.id).collect()
}
