use super::{
    CertificationEntry, Contact, ExperienceEntry, HeroAction, Icon, NavLink, Portfolio, Profile, ProjectEntry,
    SkillEntry, SocialLink,
};

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Rudolph Benjamin",
        greeting: "Hi, my name is",
        headline: "Information Systems Student.",
        bio: &["Active student at Bhinneka Nusantara University with a high interest in Information \
                Technology, focusing on Web Development and System Administration."],
        photo: "/profile.jpg",
        credit: "Rudolph Benjamin G.",
    },
    nav_links: NAV_LINKS,
    hero_actions: &[
        HeroAction { label: "View Projects", href: "#projects", primary: true },
        HeroAction { label: "Download CV", href: "#contact", primary: false },
    ],
    experiences: EXPERIENCES,
    skills: SKILLS,
    certifications_heading: "National Certifications (BNSP)",
    certifications: CERTIFICATIONS,
    projects: PROJECTS,
    contact: Contact {
        lead: "04. What's Next?",
        heading: "Get In Touch",
        blurb: "I am currently open to new opportunities and collaborations. Whether you have a question or \
                just want to say hi, I'll try my best to get back to you!",
        email: "anakmanusia245@gmail.com",
        button_label: "Send Email",
        socials: &[
            SocialLink { label: "GitHub", href: "https://github.com/codefucks007", icon: Icon::Github },
            SocialLink { label: "Instagram", href: "https://www.instagram.com/999megapixel", icon: Icon::Instagram },
        ],
    },
};

const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Experience", href: "#experience" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Contact", href: "#contact" },
];

const SKILLS: &[SkillEntry] = &[
    SkillEntry { name: "Frontend & Web", description: "HTML, CSS, JavaScript, ReactJS", icon: Icon::Code },
    SkillEntry {
        name: "Backend Dev",
        description: "PHP (Laravel, CodeIgniter), Python (Flask)",
        icon: Icon::Server,
    },
    SkillEntry { name: "Database", description: "MySQL, MongoDB, Database Design", icon: Icon::Database },
    SkillEntry {
        name: "IT Ops & Network",
        description: "Linux, Windows, Troubleshooting, Basic Network Config",
        icon: Icon::Wifi,
    },
];

const CERTIFICATIONS: &[CertificationEntry] = &[
    CertificationEntry {
        name: "BNSP Certification",
        description: "Certified Web Developer (Sep 2023)",
        icon: Icon::Award,
    },
    CertificationEntry {
        name: "BNSP Certification",
        description: "Certified Database Programmer (Jul 2024)",
        icon: Icon::Award,
    },
];

// Most recent first.
const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Freelance Photographer",
        organization: "Self-Employed",
        period: "Jan 2024 - Present",
        description: "Managed photoshoot schedules, coordinated with clients, and performed editing and digital \
                      photo file management.",
    },
    ExperienceEntry {
        role: "Full Stack Web Development (MSIB)",
        organization: "LearningX",
        period: "Aug 2023 - Dec 2023",
        description: "Learned full stack web development (HTML, CSS, JS, Python) and built databases using \
                      MongoDB.",
    },
    ExperienceEntry {
        role: "Administration & IT Support (Internship)",
        organization: "Bea Cukai Malang",
        period: "Oct 2018 - Mar 2019",
        description: "Performed software/hardware troubleshooting and managed office administration data.",
    },
];

const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Points Credit System",
        description: "Web-based application for Student Activity Point Credit management (D3 Final Project).",
        tags: &["PHP", "MySQL", "Web App"],
        link: "https://github.com/codefucks007/sikp",
    },
    ProjectEntry {
        title: "Popcorn - Find Your Favorite Movies",
        description: "Popcorn is a front-end web application that allows users to explore movies, view detailed \
                      information such as director, cast, and genre, watch trailers via YouTube, and add movies \
                      to a favorites list for a more personalized experience.",
        tags: &["React", "Web App"],
        link: "https://popcorn-ecru.vercel.app/",
    },
    ProjectEntry {
        title: "Portfolio Website",
        description: "Responsive personal portfolio website with Dark Mode features.",
        tags: &["Rust", "Leptos", "WASM"],
        link: "#",
    },
];
