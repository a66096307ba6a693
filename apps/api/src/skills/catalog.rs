//! Skill Catalog — the fixed keyword dictionary that extraction matches against.

use serde::{Deserialize, Serialize};

/// Grouping label for a skill. Serialized by variant name ("Frontend", "DevOps", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Tools,
}

/// Proficiency level a role typically expects for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single catalog entry. `keyword` is always lowercase and may span words ("rest api").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillDefinition {
    pub keyword: &'static str,
    pub category: SkillCategory,
    pub level: SkillLevel,
}

const fn skill(keyword: &'static str, category: SkillCategory, level: SkillLevel) -> SkillDefinition {
    SkillDefinition {
        keyword,
        category,
        level,
    }
}

use SkillCategory::*;
use SkillLevel::*;

/// Declared order is the output order of extraction.
pub static SKILL_CATALOG: &[SkillDefinition] = &[
    skill("javascript", Frontend, Intermediate),
    skill("react", Frontend, Intermediate),
    skill("vue", Frontend, Intermediate),
    skill("angular", Frontend, Advanced),
    skill("typescript", Frontend, Intermediate),
    skill("html", Frontend, Beginner),
    skill("css", Frontend, Beginner),
    skill("node.js", Backend, Intermediate),
    skill("python", Backend, Intermediate),
    skill("java", Backend, Advanced),
    skill("spring boot", Backend, Advanced),
    skill("express", Backend, Intermediate),
    skill("django", Backend, Advanced),
    skill("flask", Backend, Intermediate),
    skill("mongodb", Database, Intermediate),
    skill("mysql", Database, Intermediate),
    skill("postgresql", Database, Intermediate),
    skill("sql", Database, Intermediate),
    skill("docker", DevOps, Intermediate),
    skill("kubernetes", DevOps, Advanced),
    skill("aws", DevOps, Advanced),
    skill("git", Tools, Beginner),
    skill("rest api", Backend, Intermediate),
    skill("graphql", Backend, Intermediate),
];

/// Case-insensitive lookup by keyword.
pub fn lookup(keyword: &str) -> Option<&'static SkillDefinition> {
    let keyword = keyword.trim().to_lowercase();
    SKILL_CATALOG.iter().find(|def| def.keyword == keyword)
}
