pub const OWNER_NAME: &str = "Ian Angelo Valmores";
pub const SITE_TITLE: &str = "Ian's Portfolio";
pub const ROLE: &str = "Computer Science Student";
pub const PROFILE_IMAGE: &str = "/images/profile/profile.jpg";
pub const TAGLINE: &str = "I'm a 2nd-year student passionate about web development.";

pub const CONTACT_EMAIL: &str = "vianangelo.14@gmail.com";
pub const CONTACT_MAILTO: &str = "mailto:vianangelo.14@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/veth14";
pub const GITHUB_HANDLE: &str = "veth14";
pub const LINKEDIN_URL: &str = "https://ph.linkedin.com/in/ian-angelo-valmores-89aa8423a";
pub const LOCATION: &str = "Quezon City, Metro Manila";

pub const UNIVERSITY: &str = "Quezon City University";
pub const DEGREE: &str = "Bachelor's Degree in Computer Science";
pub const STUDY_PERIOD: &str = "2023 - Present (2nd Year)";

pub static BIO: [&str; 2] = [
    "I'm a passionate 2nd-year student at Quezon City University pursuing a degree in Computer Science/Information Technology. \
     My journey in web development started with HTML and CSS, and I've since expanded my skills to \
     include modern frameworks and technologies like React, Vite, and Tailwind CSS.",
    "I'm constantly learning and exploring new technologies to improve my skills and create better web experiences. \
     I enjoy solving problems and building intuitive, user-friendly interfaces that provide great user experiences.",
];

pub static COURSEWORK: [&str; 8] = [
    "Web Development",
    "Data Structures and Algorithms",
    "Object-Oriented Programming",
    "Database Systems",
    "Computer Networks",
    "Software Engineering",
    "Mobile App Development",
    "UI/UX Design Principles",
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [Faq; 4] = [
    Faq {
        question: "Are you available for freelance work?",
        answer: "Yes, I'm open to freelance opportunities. Feel free to contact me with details about your project.",
    },
    Faq {
        question: "What technologies do you specialize in?",
        answer: "I specialize in frontend development with React, Tailwind CSS, and modern JavaScript. I'm also familiar with responsive design principles and creating user-friendly interfaces.",
    },
    Faq {
        question: "Can you help with an existing project?",
        answer: "Absolutely! I can help improve, debug, or add features to existing projects. Just provide me with the details and requirements.",
    },
    Faq {
        question: "How quickly do you respond to inquiries?",
        answer: "I typically respond to all inquiries within 24-48 hours. For urgent matters, please indicate so in your message.",
    },
];
