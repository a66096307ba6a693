//! Axum route handlers for the skill extraction API.

use axum::{
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path,
    },
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::skills::catalog::{lookup, SkillDefinition, SKILL_CATALOG};
use crate::skills::extractor::{categorize, extract, CategorizedSkills, MatchedSkill};
use crate::skills::gap::{analyze_gap, GapReport, RequiredSkill, UserSkill};

/// Tag identifying which backend produced an analysis.
pub const SOURCE_TAG: &str = "rust-nlp";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeSkillsResponse {
    pub success: bool,
    pub skills: Vec<MatchedSkill>,
    pub total_skills: usize,
    pub categories: CategorizedSkills,
    pub source: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeGapRequest {
    pub required_skills: Vec<RequiredSkill>,
    pub user_skills: Vec<UserSkill>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeGapResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: GapReport,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub total: usize,
    pub skills: &'static [SkillDefinition],
}

// ────────────────────────────────────────────────────────────────────────────
// Core request processing
// ────────────────────────────────────────────────────────────────────────────

/// Pulls `job_description` out of a raw request body.
/// Empty or malformed bodies, a missing field, or a non-string value all read as "".
pub fn job_description_from_body(body: &[u8]) -> String {
    if body.is_empty() {
        return String::new();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value) => value
            .get("job_description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Err(e) => {
            warn!("Unparseable analyze-skills body, treating as empty text: {e}");
            String::new()
        }
    }
}

/// Runs extraction and grouping for one request.
pub fn analyze_skills(body: &[u8]) -> Result<AnalyzeSkillsResponse, AppError> {
    let job_description = job_description_from_body(body);
    let skills = extract(&job_description);
    let categories = categorize(&skills);

    Ok(AnalyzeSkillsResponse {
        success: true,
        total_skills: skills.len(),
        skills,
        categories,
        source: SOURCE_TAG,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze-skills
///
/// Extracts catalog skills from `job_description` and groups them by category.
/// The route has no body size limit; rejections still render the failure payload.
pub async fn handle_analyze_skills(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalyzeSkillsResponse>, AppError> {
    let body = body?;
    let response = analyze_skills(&body)?;
    if response.categories.is_empty() {
        debug!("No catalog skills found in job description");
    }
    info!(
        "Analyzed job description: {} skills in {} categories",
        response.total_skills,
        response.categories.len()
    );
    Ok(Json(response))
}

/// POST /analyze-gap
///
/// Compares required skills (usually the output of /analyze-skills) against the user's skills.
pub async fn handle_analyze_gap(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalyzeGapResponse>, AppError> {
    let body = body?;
    let request: AnalyzeGapRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("Invalid gap analysis request: {e}")))?;

    let report = analyze_gap(&request.required_skills, &request.user_skills);
    info!(
        "Gap analysis: {}/{} required skills matched ({}%)",
        report.total_matched, report.total_required, report.match_percentage
    );

    Ok(Json(AnalyzeGapResponse {
        success: true,
        report,
    }))
}

/// GET /skills
///
/// Lists the catalog in declared order.
pub async fn handle_list_skills() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        total: SKILL_CATALOG.len(),
        skills: SKILL_CATALOG,
    })
}

/// GET /skills/:keyword
///
/// Looks up a single catalog entry, case-insensitively.
pub async fn handle_get_skill(
    keyword: Result<Path<String>, PathRejection>,
) -> Result<Json<&'static SkillDefinition>, AppError> {
    let Path(keyword) = keyword?;
    lookup(&keyword)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Skill '{keyword}' is not in the catalog")))
}
