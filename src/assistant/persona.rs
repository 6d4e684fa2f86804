//! Persona and fallback replies for the portfolio assistant.
//!
//! DESIGN
//! ======
//! The system instruction is rendered once from a [`Profile`] when the
//! persona is built, so every call carries the identical instruction and
//! only the visitor's message varies.

#[cfg(test)]
#[path = "persona_test.rs"]
mod tests;

/// First turn of every transcript. Locale independent.
pub const SEED_GREETING: &str = "Hi! I'm Mikeyas's AI assistant. Ask me anything about his skills or projects.";

/// Facts about the site owner the model is allowed to talk about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub experience: String,
    pub tech_stack: Vec<String>,
    pub interests: Vec<String>,
    pub personality: String,
    pub location: String,
    pub projects: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Mikeyas".into(),
            headline: "an ambitious Full-Stack React/Next.js Engineer from Ethiopia".into(),
            experience: "3+ years".into(),
            tech_stack: owned(&["React", "Next.js", "TypeScript", "Python", "Node.js"]),
            interests: owned(&["AI", "DevOps (Docker/K8s)", "Automation"]),
            personality: "Self-taught, detail-oriented, ambitious, loves clean architecture".into(),
            location: "Addis Ababa, Ethiopia".into(),
            projects: owned(&["Real Estate Map", "Betting Platform", "Admin Dashboards"]),
        }
    }
}

/// Fixed system instruction sent with every completion call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Persona {
    system_instruction: String,
}

impl Persona {
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self { system_instruction: render_instruction(profile) }
    }

    /// Use a hand-written instruction verbatim.
    #[must_use]
    pub fn custom(system_instruction: impl Into<String>) -> Self {
        Self { system_instruction: system_instruction.into() }
    }

    #[must_use]
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::from_profile(&Profile::default())
    }
}

fn render_instruction(p: &Profile) -> String {
    format!(
        "You are an AI assistant for a developer portfolio website. The developer is {name}, {headline}.\n\
         \n\
         Key Profile Details:\n\
         - Name: {name}\n\
         - Experience: {experience}.\n\
         - Tech Stack: {stack}.\n\
         - Interests: {interests}.\n\
         - Personality: {personality}.\n\
         - Location: {location}.\n\
         - Projects: {projects}.\n\
         \n\
         Your goal is to answer visitors' questions about {name} professionally but with a futuristic, \
         tech-savvy tone.\n\
         Keep answers concise (under 3 sentences if possible).\n\
         If asked about contact info, direct them to the contact form.",
        name = p.name,
        headline = p.headline,
        experience = p.experience,
        stack = p.tech_stack.join(", "),
        interests = p.interests.join(", "),
        personality = p.personality,
        location = p.location,
        projects = p.projects.join(", "),
    )
}

/// Replies substituted whenever a real completion cannot be shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackStrings {
    /// No API key was configured at startup.
    pub offline: String,
    /// The call succeeded but carried no text.
    pub empty_reply: String,
    /// Transport, status or decode failure.
    pub system_error: String,
}

impl Default for FallbackStrings {
    fn default() -> Self {
        Self {
            offline: "I'm currently offline (API Key missing). Please contact the developer directly!".into(),
            empty_reply: "I couldn't process that request right now.".into(),
            system_error: "System error. My AI circuits are slightly overloaded. Please try again.".into(),
        }
    }
}
