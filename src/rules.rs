//! Structural completeness checks.
//!
//! A fixed, ordered checklist of independent predicates; each failing rule
//! contributes exactly one message, and the evaluation order defines the
//! presentation order of the feedback.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ResumeRecord;

/// Canonical action verbs a strong bullet should lead with or contain.
pub const ACTION_VERBS: [&str; 14] = [
    "developed",
    "designed",
    "built",
    "created",
    "implemented",
    "led",
    "managed",
    "improved",
    "achieved",
    "integrated",
    "deployed",
    "automated",
    "optimized",
    "analyzed",
];

static ACTION_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)\b({})\b", ACTION_VERBS.join("|"));
    Regex::new(&pattern).expect("action verb pattern is valid")
});

/// Runs every rule against the record and returns the triggered messages in
/// checklist order. No short-circuiting between rules.
pub fn evaluate(resume: &ResumeRecord) -> Vec<String> {
    let mut feedback = Vec::new();

    if resume.first_name.is_empty() || resume.last_name.is_empty() {
        feedback.push("Add your full name (first and last).".to_string());
    }

    if resume.email.is_empty() {
        feedback.push("Add your email address.".to_string());
    }

    if resume.phone.is_empty() {
        feedback.push("Add your phone number.".to_string());
    }

    if resume.linkedin.is_empty() && resume.github.is_empty() {
        feedback.push("Add a LinkedIn or GitHub profile to boost credibility.".to_string());
    }

    if resume.has_certifications() {
        feedback.push("Good job adding certifications! They validate your expertise.".to_string());
    } else {
        feedback.push("Consider adding certifications to validate your skills.".to_string());
    }

    if resume.education.is_empty() {
        feedback.push("Add at least one education entry.".to_string());
    } else if resume
        .education
        .iter()
        .any(|e| e.institution.is_empty() || e.degree.is_empty())
    {
        feedback.push("Complete all education entries with institution and degree.".to_string());
    }

    if resume.total_skills() < 3 {
        feedback.push("Add at least 3 skills.".to_string());
    }

    if resume.experience.is_empty() && resume.projects.is_empty() {
        feedback.push("Add at least one experience or project.".to_string());
    }

    let mut bullets = resume.all_bullets().peekable();
    if bullets.peek().is_some() && !bullets.any(|b| ACTION_VERB_RE.is_match(b)) {
        feedback.push(
            "Start bullet points with strong action verbs (e.g., Developed, Managed).".to_string(),
        );
    }

    feedback
}
