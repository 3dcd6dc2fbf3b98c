//! Static portfolio content.
//!
//! Everything here is `'static` and defined once; nothing in the crate hands out
//! mutable access to it.

use std::time::Duration;

use crate::error::CoreError;
use crate::section::Section;

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
    pub source: Option<&'static str>,
}

/// A position held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// A canned question the visitor can send with one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickPrompt {
    pub text: &'static str,
    pub action: Section,
}

/// A fun fact revealed one character at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunFact {
    pub text: &'static str,
    /// Delay after the reel starts before the first character appears.
    pub start_delay: Duration,
    /// Time between characters.
    pub char_interval: Duration,
}

/// A way to get in touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub target: &'static str,
}

/// Owner of the portfolio.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub intro: &'static str,
    pub about: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub contact_blurb: &'static str,
    pub contacts: &'static [ContactLink],
}

pub const PROFILE: Profile = Profile {
    name: "Tahmeed T",
    headline: "ML Engineer",
    subheadline: "Founder & Developer",
    intro: "Building the future with artificial intelligence. Passionate about creating innovative \
            solutions at the intersection of machine learning, software development, and \
            entrepreneurship.",
    about: &[
        "I'm an aspiring ML Engineer and Founder with a passion for building intelligent systems \
         that solve real-world problems. My journey spans from academic research to practical \
         applications in industry.",
        "Currently focused on developing next-generation AI solutions while exploring \
         entrepreneurial opportunities in the tech space.",
    ],
    skills: &[
        "Python",
        "PyTorch",
        "TensorFlow",
        "React",
        "Node.js",
        "Docker",
        "AWS",
        "PostgreSQL",
    ],
    contact_blurb: "Interested in collaborating or discussing opportunities? Let's connect.",
    contacts: &[
        ContactLink {
            label: "Email",
            target: "#",
        },
        ContactLink {
            label: "LinkedIn",
            target: "#",
        },
        ContactLink {
            label: "GitHub",
            target: "#",
        },
    ],
};

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Neural Network Optimizer",
        description: "Advanced ML optimization framework for deep learning models with custom \
                      gradient descent algorithms.",
        tech: &["Python", "PyTorch", "CUDA", "NumPy"],
        link: None,
        source: Some("#"),
    },
    ProjectEntry {
        title: "AI-Powered Analytics Platform",
        description: "Full-stack platform leveraging machine learning for predictive business \
                      analytics.",
        tech: &["React", "Node.js", "TensorFlow", "PostgreSQL"],
        link: Some("#"),
        source: None,
    },
    ProjectEntry {
        title: "Computer Vision Pipeline",
        description: "Real-time object detection and classification system for autonomous \
                      systems.",
        tech: &["Python", "OpenCV", "YOLO", "Docker"],
        link: None,
        source: Some("#"),
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "ML Engineer",
        organization: "Stealth Startup",
        period: "2024 - Present",
        description: "Building next-generation AI systems for enterprise automation.",
    },
    ExperienceEntry {
        role: "Full Stack Developer",
        organization: "Freelance",
        period: "2022 - 2024",
        description: "Developed scalable web applications and ML-powered solutions for various \
                      clients.",
    },
    ExperienceEntry {
        role: "Research Assistant",
        organization: "University Lab",
        period: "2021 - 2022",
        description: "Conducted research in deep learning and neural network architectures.",
    },
];

pub const QUICK_PROMPTS: &[QuickPrompt] = &[
    QuickPrompt {
        text: "Tell me about yourself",
        action: Section::About,
    },
    QuickPrompt {
        text: "Show me your projects",
        action: Section::Projects,
    },
    QuickPrompt {
        text: "What's your experience?",
        action: Section::Experience,
    },
    QuickPrompt {
        text: "How can I contact you?",
        action: Section::Contact,
    },
];

// Staggered so each reveal finishes before the next one starts.
pub const FUN_FACTS: &[FunFact] = &[
    FunFact {
        text: "First program: a Python number guessing game",
        start_delay: Duration::from_millis(0),
        char_interval: Duration::from_millis(40),
    },
    FunFact {
        text: "Has trained models on a laptop GPU at 3am",
        start_delay: Duration::from_millis(2000),
        char_interval: Duration::from_millis(35),
    },
    FunFact {
        text: "Drinks pour-over coffee, never instant",
        start_delay: Duration::from_millis(3600),
        char_interval: Duration::from_millis(45),
    },
    FunFact {
        text: "Reads PyTorch release notes for fun",
        start_delay: Duration::from_millis(5500),
        char_interval: Duration::from_millis(40),
    },
    FunFact {
        text: "Keeps a notebook of startup ideas",
        start_delay: Duration::from_millis(7100),
        char_interval: Duration::from_millis(50),
    },
    FunFact {
        text: "Still prefers a terminal over any IDE",
        start_delay: Duration::from_millis(9000),
        char_interval: Duration::from_millis(35),
    },
];

pub const GREETING: &str = "Hi! I'm Tahmeed's AI assistant. I can help you navigate through the \
                            portfolio and answer questions about his work. Try asking me about \
                            his projects, experience, or background!";

pub const ABOUT_ANSWER: &str = "I'm Tahmeed T, an aspiring ML Engineer, Founder, and Developer. \
                                I'm passionate about building AI-powered solutions and creating \
                                innovative products. I focus on the intersection of machine \
                                learning, software development, and entrepreneurship.";

pub const PROJECTS_ANSWER: &str = "Here are some of Tahmeed's key projects: Neural Network \
                                   Optimizer, AI-Powered Analytics Platform, and Computer Vision \
                                   Pipeline. Each showcases different aspects of his ML and \
                                   development expertise. Would you like to know more about any \
                                   specific project?";

pub const EXPERIENCE_ANSWER: &str = "Tahmeed has experience as an ML Engineer at a stealth \
                                     startup, Full Stack Developer as a freelancer, and Research \
                                     Assistant at a university lab. His background spans both \
                                     practical application and academic research in AI/ML.";

pub const CONTACT_ANSWER: &str = "You can reach Tahmeed through LinkedIn, GitHub, or email. He's \
                                  always open to discussing new opportunities, collaborations, \
                                  or interesting projects in the AI/ML space.";

pub const DEFAULT_ANSWER: &str = "I can help you learn more about Tahmeed's background, \
                                  projects, experience, or how to get in touch. What would you \
                                  like to know?";

/// Look up a quick prompt by position.
pub fn quick_prompt(index: usize) -> Result<&'static QuickPrompt, CoreError> {
    QUICK_PROMPTS
        .get(index)
        .ok_or(CoreError::QuickPromptOutOfRange {
            index,
            count: QUICK_PROMPTS.len(),
        })
}
