//! Local fallback reply synthesis.
//!
//! When no live reply can be obtained (missing credential, upstream
//! outage, transport failure) the user still gets an answer, synthesized
//! by case-insensitive keyword matching over their message. The matching
//! rule is one pure function; the gateway and the session instantiate it
//! with their own keyword sets and reply catalogs. The two sides deploy
//! independently, so each must keep answering when the other is offline.

use vitrine_types::config::Persona;

/// The answer category a message falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Skills,
    Projects,
    Contact,
    General,
}

/// Keyword sets for one side of the pipeline.
///
/// Checked in the fixed order skills -> projects -> contact; the first
/// matching set wins, which is the tie-break when several keywords appear.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRules {
    skills: &'static [&'static str],
    projects: &'static [&'static str],
    contact: &'static [&'static str],
}

impl KeywordRules {
    /// Server-side rules: "build" and "work" also count as project talk.
    pub const GATEWAY: Self = Self {
        skills: &["skill"],
        projects: &["project", "build", "work"],
        contact: &["contact"],
    };

    /// Client-side rules: "email" also counts as contact talk.
    pub const SESSION: Self = Self {
        skills: &["skill"],
        projects: &["project"],
        contact: &["contact", "email"],
    };
}

/// Classify a message. Pure: same text (modulo case) always yields the
/// same topic. Substring search only, no tokenization.
pub fn match_topic(text: &str, rules: &KeywordRules) -> Topic {
    let lowered = text.to_lowercase();
    let hit = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

    if hit(rules.skills) {
        Topic::Skills
    } else if hit(rules.projects) {
        Topic::Projects
    } else if hit(rules.contact) {
        Topic::Contact
    } else {
        Topic::General
    }
}

/// A fixed reply catalog plus the keyword rules that select from it.
#[derive(Debug, Clone)]
pub struct FallbackReplies {
    rules: KeywordRules,
    skills: String,
    projects: String,
    contact: String,
    general: String,
}

impl FallbackReplies {
    /// The catalog the gateway answers from when the upstream is out.
    pub fn gateway(persona: &Persona) -> Self {
        Self {
            rules: KeywordRules::GATEWAY,
            skills: format!("I focus on {}.", persona.skills),
            projects: format!("Some key projects include {}.", persona.projects),
            contact: format!("You can reach {} at: {}.", persona.name, persona.email),
            general: "I'm the portfolio assistant! Ask about skills, projects, or contact details."
                .to_string(),
        }
    }

    /// The catalog the session answers from when the gateway is unreachable.
    pub fn session(persona: &Persona) -> Self {
        Self {
            rules: KeywordRules::SESSION,
            skills: format!("My work centers on {}.", persona.skills),
            projects: format!("Highlights include {}.", persona.projects),
            contact: format!(
                "You can reach me at {}, or through the contact section below.",
                persona.email
            ),
            general: format!(
                "I'm offline right now, but feel free to email {}.",
                persona.email
            ),
        }
    }

    /// Synthesize the reply for a message.
    pub fn reply_for(&self, text: &str) -> &str {
        match match_topic(text, &self.rules) {
            Topic::Skills => &self.skills,
            Topic::Projects => &self.projects,
            Topic::Contact => &self.contact,
            Topic::General => &self.general,
        }
    }
}
