//! Skill gap analysis — compares the skills a JD requires with the skills a candidate lists.

use serde::{Deserialize, Serialize};

use crate::skills::catalog::{SkillCategory, SkillLevel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SkillCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSkill {
    pub name: String,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    Strong,
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapEntry {
    #[serde(flatten)]
    pub skill: RequiredSkill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_level: Option<String>,
    #[serde(rename = "match")]
    pub strength: MatchStrength,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    pub matched_skills: Vec<GapEntry>,
    pub missing_skills: Vec<GapEntry>,
    pub match_percentage: u32,
    pub total_required: usize,
    pub total_matched: usize,
    pub total_missing: usize,
}

/// Splits `required` into skills the user already has and skills they lack.
/// Names compare case-insensitively (full Unicode lowercasing).
/// Required order is preserved in both lists.
pub fn analyze_gap(required: &[RequiredSkill], user: &[UserSkill]) -> GapReport {
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for req in required {
        let wanted = req.name.trim().to_lowercase();
        let held = user
            .iter()
            .find(|u| u.name.trim().to_lowercase() == wanted);

        match held {
            Some(u) => matched_skills.push(GapEntry {
                skill: req.clone(),
                user_level: u.level.clone(),
                strength: MatchStrength::Strong,
            }),
            None => missing_skills.push(GapEntry {
                skill: req.clone(),
                user_level: None,
                strength: MatchStrength::Missing,
            }),
        }
    }

    let total_required = required.len();
    let match_percentage = if total_required > 0 {
        ((matched_skills.len() as f64 / total_required as f64) * 100.0).round() as u32
    } else {
        0
    };

    GapReport {
        total_matched: matched_skills.len(),
        total_missing: missing_skills.len(),
        matched_skills,
        missing_skills,
        match_percentage,
        total_required,
    }
}
