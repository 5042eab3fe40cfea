//! The ATS score rubric and calculator.
//!
//! Every weight, tier, and threshold lives in [`ScoreRubric`] so the rubric
//! can be retuned from a configuration file without touching the algorithm.
//! The `Default` impls carry the reference configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::ResumeRecord;
use crate::semantic::SemanticConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRubric {
    pub contact: ContactWeights,
    pub education: u32,
    pub experience: u32,
    pub projects: u32,
    pub skills: SkillTiers,
    pub content_depth_max: u32,
    pub semantic: SemanticConfig,
    /// Optional blend of average bullet length into the content-depth
    /// bucket. `None` keeps the canonical pure-semantic formula.
    pub bullet_length: Option<BulletLengthBlend>,
}

impl Default for ScoreRubric {
    fn default() -> Self {
        Self {
            contact: ContactWeights::default(),
            education: 10,
            experience: 10,
            projects: 5,
            skills: SkillTiers::default(),
            content_depth_max: 40,
            semantic: SemanticConfig::default(),
            bullet_length: None,
        }
    }
}

impl ScoreRubric {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| EngineError::read(path, e))?;
        serde_json::from_str(&raw).map_err(|e| EngineError::json(path.display().to_string(), e))
    }
}

/// Points awarded per present contact field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactWeights {
    pub full_name: u32,
    pub email: u32,
    pub phone: u32,
    pub links: u32,
    pub location: u32,
}

impl Default for ContactWeights {
    fn default() -> Self {
        Self {
            full_name: 3,
            email: 3,
            phone: 3,
            links: 3,
            location: 3,
        }
    }
}

/// Tiered award for the total skill count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillTiers {
    pub top_min: usize,
    pub top: u32,
    pub mid_min: usize,
    pub mid: u32,
    pub low: u32,
}

impl Default for SkillTiers {
    fn default() -> Self {
        Self {
            top_min: 5,
            top: 20,
            mid_min: 3,
            mid: 10,
            low: 5,
        }
    }
}

impl SkillTiers {
    fn award(&self, count: usize) -> u32 {
        if count >= self.top_min {
            self.top
        } else if count >= self.mid_min {
            self.mid
        } else if count > 0 {
            self.low
        } else {
            0
        }
    }
}

/// Folds average bullet length into the content-depth bucket. `weight` is
/// the share of the bucket driven by length, in [0, 1]; bullets at or above
/// `target_chars` characters earn the full length share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletLengthBlend {
    pub weight: f32,
    pub target_chars: usize,
}

impl Default for BulletLengthBlend {
    fn default() -> Self {
        Self {
            weight: 0.25,
            target_chars: 60,
        }
    }
}

/// Deterministic weighted rubric over five independent buckets, summed and
/// clamped to 100. `semantic` is the pre-computed [0, 1] semantic score of
/// the concatenated bullet text.
pub fn ats_score(resume: &ResumeRecord, rubric: &ScoreRubric, semantic: f32) -> u32 {
    let mut score = 0u32;

    // 1. Contact info
    if !resume.first_name.is_empty() && !resume.last_name.is_empty() {
        score += rubric.contact.full_name;
    }
    if !resume.email.is_empty() {
        score += rubric.contact.email;
    }
    if !resume.phone.is_empty() {
        score += rubric.contact.phone;
    }
    if !resume.linkedin.is_empty() || !resume.github.is_empty() {
        score += rubric.contact.links;
    }
    if !resume.location.is_empty() {
        score += rubric.contact.location;
    }

    // 2. Education
    if !resume.education.is_empty() {
        score += rubric.education;
    }

    // 3. Experience & projects
    if !resume.experience.is_empty() {
        score += rubric.experience;
    }
    if !resume.projects.is_empty() {
        score += rubric.projects;
    }

    // 4. Skills
    score += rubric.skills.award(resume.total_skills());

    // 5. Content depth
    let content = content_depth(resume, rubric, semantic);
    score += content;

    tracing::debug!(
        total = score.min(100),
        content,
        semantic,
        "ats score buckets"
    );

    score.min(100)
}

fn content_depth(resume: &ResumeRecord, rubric: &ScoreRubric, semantic: f32) -> u32 {
    let bullet_count = resume.all_bullets().count();
    if bullet_count == 0 {
        return 0;
    }

    let max = rubric.content_depth_max as f32;
    let points = match &rubric.bullet_length {
        None => semantic * max,
        Some(blend) => {
            let total_chars: usize = resume.all_bullets().map(str::len).sum();
            let avg = total_chars as f32 / bullet_count as f32;
            let length_factor = (avg / blend.target_chars as f32).min(1.0);
            (semantic * (1.0 - blend.weight) + length_factor * blend.weight) * max
        }
    };

    points as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Education, Experience, Project, SkillCategory};

    #[test]
    fn empty_record_scores_zero() {
        let score = ats_score(&ResumeRecord::default(), &ScoreRubric::default(), 0.0);
        assert_eq!(score, 0);
    }

    #[test]
    fn five_skills_alone_hit_the_skills_bucket_maximum() {
        let mut record = ResumeRecord::default();
        record.skills.insert(
            SkillCategory::Backend,
            vec!["Rust".into(), "Go".into(), "Python".into()],
        );
        record.skills.insert(
            SkillCategory::Database,
            vec!["PostgreSQL".into(), "Redis".into()],
        );
        assert_eq!(ats_score(&record, &ScoreRubric::default(), 0.0), 20);
    }

    #[test]
    fn skill_tiers_step_at_the_reference_thresholds() {
        let tiers = SkillTiers::default();
        assert_eq!(tiers.award(0), 0);
        assert_eq!(tiers.award(1), 5);
        assert_eq!(tiers.award(3), 10);
        assert_eq!(tiers.award(5), 20);
        assert_eq!(tiers.award(12), 20);
    }

    #[test]
    fn content_depth_is_floor_of_semantic_times_max() {
        let record = ResumeRecord {
            experience: vec![Experience {
                bullets: vec!["Developed a service".into()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let rubric = ScoreRubric::default();
        assert_eq!(ats_score(&record, &rubric, 0.5), 20);
        assert_eq!(ats_score(&record, &rubric, 0.99), 39);
        assert_eq!(ats_score(&record, &rubric, 1.0), 40);
    }

    #[test]
    fn no_bullets_means_zero_content_depth_regardless_of_semantic() {
        let score = ats_score(&ResumeRecord::default(), &ScoreRubric::default(), 1.0);
        assert_eq!(score, 0);
    }

    #[test]
    fn fully_populated_record_clamps_at_100() {
        let mut record = ResumeRecord {
            first_name: "Jackson".into(),
            last_name: "Miller".into(),
            email: "jackson@civitas.ltd".into(),
            phone: "2603779575".into(),
            location: "Wabash, IN".into(),
            linkedin: "linkedin.com/in/jackson-e-miller".into(),
            education: vec![Education::default()],
            experience: vec![Experience {
                bullets: vec!["Developed things".into()],
                ..Default::default()
            }],
            projects: vec![Project::default()],
            ..Default::default()
        };
        for (i, category) in SkillCategory::ALL.iter().take(5).enumerate() {
            record.skills.insert(*category, vec![format!("skill-{i}")]);
        }
        assert_eq!(ats_score(&record, &ScoreRubric::default(), 1.0), 100);
    }

    #[test]
    fn bullet_length_blend_defaults_off() {
        let record = ResumeRecord {
            projects: vec![Project {
                bullets: vec!["x".repeat(120)],
                ..Default::default()
            }],
            ..Default::default()
        };
        let canonical = ScoreRubric::default();
        let blended = ScoreRubric {
            bullet_length: Some(BulletLengthBlend::default()),
            ..Default::default()
        };
        // Long bullets with zero semantic alignment: the blend awards the
        // length share, the canonical rubric awards nothing.
        assert_eq!(ats_score(&record, &canonical, 0.0), 0);
        assert_eq!(ats_score(&record, &blended, 0.0), 10);
    }

    #[test]
    fn partial_rubric_json_overrides_only_named_weights() {
        let rubric: ScoreRubric =
            serde_json::from_str(r#"{"education": 15, "contact": {"email": 5}}"#).unwrap();
        assert_eq!(rubric.education, 15);
        assert_eq!(rubric.contact.email, 5);
        assert_eq!(rubric.contact.phone, 3);
        assert_eq!(rubric.skills, SkillTiers::default());
        assert_eq!(rubric.content_depth_max, 40);
    }
}
