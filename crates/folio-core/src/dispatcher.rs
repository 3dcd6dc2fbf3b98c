//! Keyword dispatcher for the scripted assistant.
//!
//! Rules are tried in order and the first one with a matching keyword wins, so an
//! input such as "tell me about your projects" resolves to the about answer.

use crate::content::{
    ABOUT_ANSWER, CONTACT_ANSWER, DEFAULT_ANSWER, EXPERIENCE_ANSWER, PROJECTS_ANSWER,
};
use crate::section::Section;

/// Answer chosen for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub text: &'static str,
    pub scroll_target: Option<Section>,
}

struct Rule {
    keywords: &'static [&'static str],
    reply: Reply,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["about", "yourself"],
        reply: Reply {
            text: ABOUT_ANSWER,
            scroll_target: Some(Section::About),
        },
    },
    Rule {
        keywords: &["project"],
        reply: Reply {
            text: PROJECTS_ANSWER,
            scroll_target: Some(Section::Projects),
        },
    },
    Rule {
        keywords: &["experience"],
        reply: Reply {
            text: EXPERIENCE_ANSWER,
            scroll_target: Some(Section::Experience),
        },
    },
    Rule {
        keywords: &["contact"],
        reply: Reply {
            text: CONTACT_ANSWER,
            scroll_target: Some(Section::Contact),
        },
    },
];

const FALLBACK: Reply = Reply {
    text: DEFAULT_ANSWER,
    scroll_target: None,
};

/// Pick the canned answer for free text.
pub fn respond(input: &str) -> Reply {
    let lowered = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_yourself() {
        let reply = respond("Tell me about yourself");
        assert_eq!(reply.text, ABOUT_ANSWER);
        assert_eq!(reply.scroll_target, Some(Section::About));
    }

    #[test]
    fn test_contact() {
        let reply = respond("How can I contact you?");
        assert_eq!(reply.text, CONTACT_ANSWER);
        assert_eq!(reply.scroll_target, Some(Section::Contact));
    }

    #[test]
    fn test_project_anywhere_any_case() {
        for input in [
            "project",
            "Show me your PROJECTS",
            "what side-projects?",
            "xxProjectxx",
            "  ProJeCt  ",
        ] {
            let reply = respond(input);
            assert_eq!(reply.text, PROJECTS_ANSWER, "input: {input}");
            assert_eq!(reply.scroll_target, Some(Section::Projects));
        }
    }

    #[test]
    fn test_experience() {
        let reply = respond("What's your experience?");
        assert_eq!(reply.scroll_target, Some(Section::Experience));
    }

    #[test]
    fn test_no_match_is_default() {
        for input in ["", "hello", "what's the weather", "🦀"] {
            assert_eq!(respond(input), FALLBACK, "input: {input}");
        }
        assert_eq!(respond("hi").scroll_target, None);
    }

    #[test]
    fn test_first_rule_wins() {
        let reply = respond("tell me about your experience with projects");
        assert_eq!(reply.scroll_target, Some(Section::About));

        let reply = respond("contact me about a project");
        assert_eq!(reply.scroll_target, Some(Section::About));

        let reply = respond("which project can I contact you about");
        assert_eq!(reply.scroll_target, Some(Section::About));

        let reply = respond("project contact");
        assert_eq!(reply.scroll_target, Some(Section::Projects));
    }
}
