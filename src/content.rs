//! Static page content.
//!
//! The whole site renders from these tables; there is no CMS, no fetch and
//! no serialization. Strings are `'static` so the DOM builder can borrow
//! them freely.

/// Section ids in page order. The side nav shows one dot per entry.
pub const SECTIONS: [&str; 4] = ["intro", "work", "thoughts", "connect"];

pub struct Profile {
    pub given_name: &'static str,
    pub family_name: &'static str,
    pub kicker: &'static str,
    pub tagline: &'static str,
    pub availability: &'static str,
    pub location: &'static str,
    pub current_role: &'static str,
    pub current_org: &'static str,
    pub current_period: &'static str,
    pub focus: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    given_name: "Theodor",
    family_name: "Ionică",
    kicker: "PORTFOLIO / 2025",
    tagline: "Software Engineer creating digital solutions at the intersection \
              of design, technology, and user experience.",
    availability: "Available for work",
    location: "EU - Romania",
    current_role: "Software Engineer / Master Student",
    current_org: "@ Self-employed / RTU",
    current_period: "2021 — Present",
    focus: &["React", "TypeScript", "Node.js", "Python"],
};

/// One entry of the work-history timeline.
pub struct Job {
    pub year: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub const WORK_HEADING: &str = "What I did";
pub const WORK_PERIOD: &str = "2018 — 2025";

pub const JOBS: [Job; 4] = [
    Job {
        year: "2025",
        role: "FullStack Developer",
        company: "Treidee(e)",
        description: "Created the fullstack architecture for the whole \
                      application. Managed containerization and deployment.",
        tech: &["React", "TypeScript", "Node.js", "Supabase"],
    },
    Job {
        year: "2022",
        role: "Intern",
        company: "HASS Web Design",
        description: "Built performant scripts for automating mundane tasks.",
        tech: &["React", "Python", "Java"],
    },
    Job {
        year: "2020/24",
        role: "Student",
        company: "Technical University of Cluj-Napoca && Universidad \
                  Politencica de Cartagena",
        description: "Studied as an electronic engineer in Romania and in \
                      Spain with an Erasmus scolarship.",
        tech: &["Engineering", "Economics", "Management"],
    },
    Job {
        year: "2018/19",
        role: "WordPress Developer",
        company: "Freelance",
        description: "Developed e-commerce, portfolio and custom websites for \
                      various clients.",
        tech: &["WordPress", "php", "MySQL"],
    },
];

/// One project write-up card.
pub struct Project {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub status: &'static str,
    pub url: Option<&'static str>,
}

pub const PROJECTS_HEADING: &str = "Work In Progress";

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Experimental Clothing Using 3D Printers",
        excerpt: "Lessons learned from building and maintaining design \
                  systems across multiple products.",
        status: "Ongoing",
        url: None,
    },
    Project {
        title: "Tattoo Portfolio",
        excerpt: "Simple tattoo portfolio website made for a renowned tatoo \
                  artist.",
        status: "Ongoing",
        url: Some("https://tattoo.treideee.ro"),
    },
    Project {
        title: "Automated Motorised Hand for Light Switching",
        excerpt: "Exploring how automation can help daily tasks.",
        status: "Ongoing",
        url: None,
    },
    Project {
        title: "Package Delivery Solution",
        excerpt: "Simple website to be used as package delivery \
                  representation. Part of bigger fleet management project.",
        status: "Ongoing",
        url: Some("https://trainsport.1.treideee.ro"),
    },
    Project {
        title: "Treidee(e) - 3D Printing Web Application for Amateurs and \
                Enthusiasts",
        excerpt: "A 3D printing website with custom printing solutions.",
        status: "Finished",
        url: Some("https://treideee.ro"),
    },
    Project {
        title: "Brain App - Cognitive improvement in your pocket",
        excerpt: "Application meant to improve cognitive functions for users \
                  with mental defficiencies",
        status: "Finished",
        url: Some("https://github.com/crb3l/brain-app"),
    },
];

/// External profile link shown in the connect section.
pub struct Social {
    pub name: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
}

pub const CONNECT_HEADING: &str = "Let's Connect";
pub const CONNECT_BLURB: &str = "Always interested in new opportunities, \
    collaborations, and conversations about technology and science.";
pub const EMAIL: &str = "iotheodor@gmail.com";

pub const SOCIALS: [Social; 2] = [
    Social {
        name: "GitHub",
        handle: "@crb3l",
        url: "https://github.com/crb3l",
    },
    Social {
        name: "LinkedIn",
        handle: "theoio",
        url: "https://linkedin.com/in/theoio",
    },
];

pub const FOOTER_COPYRIGHT: &str = "© 2025 Theodor Ionică. All rights reserved.";
