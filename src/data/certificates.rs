use crate::models::{Certificate, CertificateCategory};

pub static CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: 1,
        title: "Web Development Fundamentals",
        issuer: "Quezon City University",
        date: "June 2023",
        category: CertificateCategory::Certificate,
        description: "Completed a comprehensive course on web development fundamentals, covering HTML, CSS, JavaScript, and responsive design principles.",
        image: "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: Some("#"),
    },
    Certificate {
        id: 2,
        title: "React.js Essentials",
        issuer: "Udemy",
        date: "August 2023",
        category: CertificateCategory::Certificate,
        description: "Mastered React.js fundamentals including components, state management, hooks, and building single-page applications.",
        image: "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: Some("#"),
    },
    Certificate {
        id: 3,
        title: "Modern Web Design Seminar",
        issuer: "Design Philippines",
        date: "October 2023",
        category: CertificateCategory::Seminar,
        description: "Attended a seminar on modern web design principles, UI/UX best practices, and current design trends in the industry.",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: None,
    },
    Certificate {
        id: 4,
        title: "JavaScript Advanced Concepts",
        issuer: "Coursera",
        date: "November 2023",
        category: CertificateCategory::Certificate,
        description: "Deep dive into advanced JavaScript concepts including closures, prototypes, async programming, and ES6+ features.",
        image: "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: Some("#"),
    },
    Certificate {
        id: 5,
        title: "Tech Career Development Workshop",
        issuer: "Tech Career Philippines",
        date: "January 2024",
        category: CertificateCategory::Seminar,
        description: "Participated in a workshop focused on career development in the tech industry, including portfolio building and interview preparation.",
        image: "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: None,
    },
    Certificate {
        id: 6,
        title: "Tailwind CSS Mastery",
        issuer: "Frontend Masters",
        date: "March 2024",
        category: CertificateCategory::Certificate,
        description: "Comprehensive course on Tailwind CSS, covering utility-first workflow, responsive design, and component creation.",
        image: "https://images.pexels.com/photos/4974912/pexels-photo-4974912.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: Some("#"),
    },
    Certificate {
        id: 7,
        title: "Mobile App Development with React Native",
        issuer: "Pluralsight",
        date: "April 2024",
        category: CertificateCategory::Certificate,
        description: "Learned how to build cross-platform mobile applications using React Native, including navigation, state management, and native APIs.",
        image: "https://images.pexels.com/photos/1092644/pexels-photo-1092644.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: Some("#"),
    },
    Certificate {
        id: 8,
        title: "Cybersecurity Fundamentals",
        issuer: "CompTIA",
        date: "May 2024",
        category: CertificateCategory::Certificate,
        description: "Gained essential knowledge in network security, threat detection, encryption, and security best practices for web applications.",
        image: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: Some("#"),
    },
    Certificate {
        id: 9,
        title: "AI and Machine Learning Symposium",
        issuer: "Philippine AI Association",
        date: "February 2024",
        category: CertificateCategory::Seminar,
        description: "Participated in a symposium exploring the latest advancements in AI and machine learning and their applications in web development.",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: None,
    },
    Certificate {
        id: 10,
        title: "Database Management with MongoDB",
        issuer: "MongoDB University",
        date: "December 2023",
        category: CertificateCategory::Certificate,
        description: "Mastered NoSQL database concepts, MongoDB architecture, data modeling, and integration with modern web applications.",
        image: "https://images.pexels.com/photos/4497195/pexels-photo-4497195.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: Some("#"),
    },
    Certificate {
        id: 11,
        title: "DevOps and CI/CD Pipeline Workshop",
        issuer: "AWS Philippines",
        date: "March 2024",
        category: CertificateCategory::Seminar,
        description: "Hands-on workshop covering DevOps principles, continuous integration, continuous deployment, and cloud infrastructure management.",
        image: "https://images.pexels.com/photos/7988079/pexels-photo-7988079.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: None,
    },
    Certificate {
        id: 12,
        title: "Blockchain Technology Certification",
        issuer: "Blockchain Council",
        date: "April 2024",
        category: CertificateCategory::Certificate,
        description: "Comprehensive training on blockchain fundamentals, smart contracts, decentralized applications, and Web3 development.",
        image: "https://images.pexels.com/photos/8370752/pexels-photo-8370752.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: Some("#"),
    },
    Certificate {
        id: 13,
        title: "UX Research Methods",
        issuer: "Nielsen Norman Group",
        date: "January 2024",
        category: CertificateCategory::Certificate,
        description: "Learned user research methodologies, usability testing, information architecture, and how to apply research insights to design decisions.",
        image: "https://images.pexels.com/photos/7709020/pexels-photo-7709020.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: Some("#"),
    },
    Certificate {
        id: 14,
        title: "Sustainable Tech Conference",
        issuer: "Green Computing Initiative",
        date: "May 2024",
        category: CertificateCategory::Seminar,
        description: "Conference focused on sustainable and eco-friendly approaches to software development, cloud computing, and digital product design.",
        image: "https://images.pexels.com/photos/3183150/pexels-photo-3183150.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: None,
    },
    Certificate {
        id: 15,
        title: "TypeScript Advanced Patterns",
        issuer: "Microsoft Learning",
        date: "February 2024",
        category: CertificateCategory::Certificate,
        description: "Advanced course on TypeScript covering generics, decorators, advanced types, and integration with modern frameworks.",
        image: "https://images.pexels.com/photos/4164418/pexels-photo-4164418.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        url: Some("#"),
    },
];
