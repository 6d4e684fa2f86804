use super::*;

#[test]
fn default_instruction_names_owner_and_stack() {
    let persona = Persona::default();
    let sys = persona.system_instruction();
    assert!(sys.contains("The developer is Mikeyas"));
    assert!(sys.contains("- Tech Stack: React, Next.js, TypeScript, Python, Node.js."));
    assert!(sys.contains("- Location: Addis Ababa, Ethiopia."));
}

#[test]
fn instruction_redirects_contact_requests() {
    let sys = Persona::default().system_instruction().to_owned();
    assert!(sys.contains("direct them to the contact form"));
    assert!(sys.contains("under 3 sentences"));
}

#[test]
fn instruction_follows_profile_fields() {
    let profile = Profile {
        name: "Ada".into(),
        projects: vec!["Analytical Engine".into()],
        ..Profile::default()
    };
    let sys = Persona::from_profile(&profile).system_instruction().to_owned();
    assert!(sys.contains("The developer is Ada"));
    assert!(sys.contains("questions about Ada"));
    assert!(sys.contains("- Projects: Analytical Engine."));
    assert!(!sys.contains("Mikeyas"));
}

#[test]
fn instruction_is_stable_across_builds() {
    assert_eq!(Persona::default(), Persona::default());
}

#[test]
fn custom_persona_is_verbatim() {
    assert_eq!(Persona::custom("be brief").system_instruction(), "be brief");
}

#[test]
fn fallbacks_are_distinct_and_non_empty() {
    let f = FallbackStrings::default();
    for text in [&f.offline, &f.empty_reply, &f.system_error] {
        assert!(!text.trim().is_empty());
    }
    assert_ne!(f.offline, f.empty_reply);
    assert_ne!(f.empty_reply, f.system_error);
    assert_ne!(f.offline, f.system_error);
}

#[test]
fn seed_greeting_is_fixed_literal() {
    assert!(SEED_GREETING.starts_with("Hi! I'm Mikeyas's AI assistant."));
}
