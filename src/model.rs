use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A structured resume as produced by the form editor or the OCR importer.
///
/// The record is read-only to the engine; all scoring passes take `&ResumeRecord`
/// and the engine never mutates or retains it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    // Personal info
    pub first_name: String,
    pub last_name: String,

    // Contact
    pub email: String,
    pub country_code: CountryCode,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,

    // Sections
    pub education: Vec<Education>,
    pub skills: BTreeMap<SkillCategory, Vec<String>>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub certifications: Option<Vec<Certification>>,
}

impl ResumeRecord {
    /// Parses a record from JSON and normalizes bullet lists: bullets are
    /// trimmed and empty ones dropped, so downstream code can assume every
    /// bullet is a non-empty trimmed string. Unknown skill-category keys are
    /// rejected here, not tolerated by the scoring passes.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let mut record: ResumeRecord =
            serde_json::from_str(json).map_err(|e| EngineError::json("resume record", e))?;
        for exp in &mut record.experience {
            normalize_bullets(&mut exp.bullets);
        }
        for project in &mut record.projects {
            normalize_bullets(&mut project.bullets);
        }
        Ok(record)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn full_phone(&self) -> String {
        if self.phone.is_empty() {
            return String::new();
        }
        format!("{} {}", self.country_code.dial_code, self.phone)
    }

    /// Total skill count across every category.
    pub fn total_skills(&self) -> usize {
        self.skills.values().map(Vec::len).sum()
    }

    /// Every bullet point, experience sections first, then projects, in
    /// record order.
    pub fn all_bullets(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|e| e.bullets.iter())
            .chain(self.projects.iter().flat_map(|p| p.bullets.iter()))
            .map(String::as_str)
    }

    pub fn has_certifications(&self) -> bool {
        self.certifications
            .as_ref()
            .is_some_and(|certs| !certs.is_empty())
    }
}

fn normalize_bullets(bullets: &mut Vec<String>) {
    for bullet in bullets.iter_mut() {
        let trimmed = bullet.trim();
        if trimmed.len() != bullet.len() {
            *bullet = trimmed.to_string();
        }
    }
    bullets.retain(|b| !b.is_empty());
}

/// Closed set of skill categories. Keys outside this enumeration fail record
/// deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Mobile,
    DevOps,
    Tools,
    Languages,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 9] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Mobile,
        SkillCategory::DevOps,
        SkillCategory::Tools,
        SkillCategory::Languages,
        SkillCategory::SoftSkills,
        SkillCategory::Other,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub year: String,
    pub score: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub link: String,
    pub tools: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountryCode {
    pub name: String,
    pub code: String,
    pub dial_code: String,
}

impl Default for CountryCode {
    fn default() -> Self {
        Self {
            name: "India".to_string(),
            code: "IN".to_string(),
            dial_code: "+91".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_a_valid_record() {
        let record = ResumeRecord::from_json("{}").unwrap();
        assert_eq!(record, ResumeRecord::default());
        assert_eq!(record.total_skills(), 0);
        assert_eq!(record.all_bullets().count(), 0);
    }

    #[test]
    fn from_json_trims_and_drops_empty_bullets() {
        let json = r#"{
            "experience": [
                {"title": "Engineer", "bullets": ["  Built a service  ", "   ", ""]}
            ]
        }"#;
        let record = ResumeRecord::from_json(json).unwrap();
        assert_eq!(record.experience[0].bullets, vec!["Built a service"]);
    }

    #[test]
    fn unknown_skill_category_is_rejected() {
        let json = r#"{"skills": {"Wizardry": ["Spells"]}}"#;
        assert!(ResumeRecord::from_json(json).is_err());
    }

    #[test]
    fn skill_categories_round_trip_wire_names() {
        let json = r#"{"skills": {"Soft Skills": ["Communication"], "DevOps": ["Docker"]}}"#;
        let record = ResumeRecord::from_json(json).unwrap();
        assert_eq!(
            record.skills[&SkillCategory::SoftSkills],
            vec!["Communication"]
        );
        assert_eq!(record.skills[&SkillCategory::DevOps], vec!["Docker"]);
        assert_eq!(record.total_skills(), 2);
    }

    #[test]
    fn full_phone_includes_dial_code_only_when_number_present() {
        let mut record = ResumeRecord::default();
        assert_eq!(record.full_phone(), "");
        record.phone = "9876543210".to_string();
        assert_eq!(record.full_phone(), "+91 9876543210");
    }

    #[test]
    fn bullets_iterate_experience_before_projects() {
        let record = ResumeRecord {
            experience: vec![Experience {
                bullets: vec!["first".into()],
                ..Default::default()
            }],
            projects: vec![Project {
                bullets: vec!["second".into()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let bullets: Vec<&str> = record.all_bullets().collect();
        assert_eq!(bullets, vec!["first", "second"]);
    }
}
