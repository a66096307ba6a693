//! Extraction Engine — finds catalog keywords in free text and groups the hits by category.
//!
//! Matching is whole-word and case-insensitive. A word character is any Unicode
//! alphanumeric or `_`; the characters on either side of a hit must not be word
//! characters. Punctuation inside a keyword ("node.js") is matched literally.

use std::collections::HashSet;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use tracing::debug;

use crate::skills::catalog::{SkillCategory, SkillDefinition, SkillLevel, SKILL_CATALOG};

/// Fixed score attached to every match. Not a probability.
pub const MATCH_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone, PartialEq, serde::Serialize, Deserialize)]
pub struct MatchedSkill {
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub confidence: f64,
}

/// Matched skills bucketed by category, in first-seen order.
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedSkills(Vec<(SkillCategory, Vec<MatchedSkill>)>);

impl CategorizedSkills {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl CategorizedSkills {
    pub fn get(&self, category: SkillCategory) -> Option<&[MatchedSkill]> {
        self.0
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = SkillCategory> + '_ {
        self.0.iter().map(|(c, _)| *c)
    }
}

impl Serialize for CategorizedSkills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, skills) in &self.0 {
            map.serialize_entry(category, skills)?;
        }
        map.end()
    }
}

/// Extracts skills from `text` using the built-in catalog.
pub fn extract(text: &str) -> Vec<MatchedSkill> {
    extract_with(SKILL_CATALOG, text)
}

/// Extracts skills from `text` against an arbitrary catalog.
/// Output follows catalog order; each rendered name appears at most once.
pub fn extract_with(catalog: &[SkillDefinition], text: &str) -> Vec<MatchedSkill> {
    let text_lower = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for def in catalog {
        if !contains_whole_word(&text_lower, def.keyword) {
            continue;
        }
        let name = title_case(def.keyword);
        if seen.insert(name.clone()) {
            found.push(MatchedSkill {
                name,
                category: def.category,
                level: def.level,
                confidence: MATCH_CONFIDENCE,
            });
        }
    }

    debug!(
        "Extracted {} skills from text ({} chars)",
        found.len(),
        text.len()
    );
    found
}

/// Groups skills by category without reordering anything.
pub fn categorize(skills: &[MatchedSkill]) -> CategorizedSkills {
    let mut buckets: Vec<(SkillCategory, Vec<MatchedSkill>)> = Vec::new();

    for skill in skills {
        match buckets.iter_mut().find(|(c, _)| *c == skill.category) {
            Some((_, bucket)) => bucket.push(skill.clone()),
            None => buckets.push((skill.category, vec![skill.clone()])),
        }
    }

    CategorizedSkills(buckets)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True if `needle` occurs in `haystack` with a non-word character (or an edge) on both sides.
/// Overlapping occurrences are all tried: the search resumes one char after each candidate.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        if before_ok && after_ok {
            return true;
        }
        // needle is non-empty, so a char starts at `start`
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }

    false
}

/// Upper-cases a letter when the previous character is not a letter, lower-cases it otherwise.
/// "node.js" → "Node.Js", "rest api" → "Rest Api".
fn title_case(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    let mut prev_is_letter = false;

    for c in keyword.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::catalog::{SkillCategory::*, SkillLevel::*};

    fn names(skills: &[MatchedSkill]) -> Vec<&str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    const STACK_JD: &str =
        "We need a developer skilled in React, Node.js, and MongoDB with Docker experience";

    #[test]
    fn test_stack_jd_extracts_four_skills() {
        let skills = extract(STACK_JD);
        assert_eq!(names(&skills), vec!["React", "Node.Js", "Mongodb", "Docker"]);
        assert_eq!(skills[0].category, Frontend);
        assert_eq!(skills[1].category, Backend);
        assert_eq!(skills[2].category, Database);
        assert_eq!(skills[3].category, DevOps);
        assert!(skills.iter().all(|s| s.level == Intermediate));
        assert!(skills.iter().all(|s| s.confidence == MATCH_CONFIDENCE));
    }

    #[test]
    fn test_stack_jd_categorizes_into_four_buckets() {
        let categories = categorize(&extract(STACK_JD));
        assert_eq!(categories.len(), 4);
        for category in [Frontend, Backend, Database, DevOps] {
            assert_eq!(categories.get(category).unwrap().len(), 1);
        }
        assert!(categories.get(Tools).is_none());
    }

    #[test]
    fn test_java_does_not_match_javascript() {
        let skills = extract("Senior Java Developer");
        assert_eq!(names(&skills), vec!["Java"]);
        assert_eq!(skills[0].category, Backend);
        assert_eq!(skills[0].level, Advanced);

        let skills = extract("javascript");
        assert_eq!(names(&skills), vec!["Javascript"]);
    }

    #[test]
    fn test_spaced_java_script_is_not_javascript() {
        let skills = extract("java script");
        assert_eq!(names(&skills), vec!["Java"]);
    }

    #[test]
    fn test_rejected_occurrence_does_not_hide_later_match() {
        let skills = extract("javascript first, then plain java");
        assert_eq!(names(&skills), vec!["Javascript", "Java"]);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let lower = extract("javascript");
        assert_eq!(extract("JavaScript"), lower);
        assert_eq!(extract("JAVASCRIPT"), lower);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract("").is_empty());
        assert!(categorize(&extract("")).is_empty());
    }

    #[test]
    fn test_repeated_keyword_counted_once() {
        let skills = extract("docker, Docker, DOCKER and more docker");
        assert_eq!(names(&skills), vec!["Docker"]);
    }

    #[test]
    fn test_output_follows_catalog_order_not_text_order() {
        let skills = extract("git, aws, css");
        assert_eq!(names(&skills), vec!["Css", "Aws", "Git"]);
    }

    #[test]
    fn test_multi_word_keywords() {
        let skills = extract("Spring Boot services behind a REST API");
        assert_eq!(names(&skills), vec!["Spring Boot", "Rest Api"]);
    }

    #[test]
    fn test_punctuated_keyword_boundaries() {
        assert!(contains_whole_word("we use node.js daily", "node.js"));
        assert!(contains_whole_word("(node.js)", "node.js"));
        assert!(!contains_whole_word("nodexjs", "node.js"));
        assert!(!contains_whole_word("node.jsx", "node.js"));
        // Trailing sentence punctuation is a boundary.
        assert!(contains_whole_word("experience with node.js.", "node.js"));
    }

    #[test]
    fn test_overlapping_occurrence_is_found() {
        // first "a a" starts after 'x' and is rejected; the one at byte 3 is valid
        assert!(contains_whole_word("xa a a", "a a"));

        let catalog = [SkillDefinition {
            keyword: "a a",
            category: Tools,
            level: Beginner,
        }];
        assert_eq!(extract_with(&catalog, "xa a a").len(), 1);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert!(!contains_whole_word("my_sql", "sql"));
        assert!(!contains_whole_word("sql2", "sql"));
        assert!(contains_whole_word("sql-server", "sql"));
    }

    #[test]
    fn test_sql_inside_mysql_is_not_matched() {
        let skills = extract("MySQL and PostgreSQL");
        assert_eq!(names(&skills), vec!["Mysql", "Postgresql"]);
    }

    #[test]
    fn test_unicode_neighbours_are_word_chars() {
        assert!(!contains_whole_word("éreact", "react"));
        assert!(contains_whole_word("…react…", "react"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("rest api"), "Rest Api");
        assert_eq!(title_case("mongodb"), "Mongodb");
        assert_eq!(title_case("3d"), "3D");
    }

    #[test]
    fn test_extract_is_deterministic() {
        let text = "Python, Django, Flask, PostgreSQL, AWS, Kubernetes, Git, GraphQL";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn test_result_never_exceeds_catalog_size() {
        let everything: String = SKILL_CATALOG
            .iter()
            .map(|d| d.keyword)
            .collect::<Vec<_>>()
            .join(" ");
        let skills = extract(&format!("{everything} {everything}"));
        assert_eq!(skills.len(), SKILL_CATALOG.len());
    }

    #[test]
    fn test_duplicate_catalog_entries_emit_once() {
        let catalog = [
            SkillDefinition {
                keyword: "rust",
                category: Backend,
                level: Advanced,
            },
            SkillDefinition {
                keyword: "rust",
                category: Tools,
                level: Beginner,
            },
        ];
        let skills = extract_with(&catalog, "Rust engineer");
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].category, Backend);
    }

    #[test]
    fn test_categorize_partitions_input() {
        let skills = extract("React, Vue, Python, Java, MySQL, Docker, Git, HTML");
        let categories = categorize(&skills);

        let total: usize = categories
            .categories()
            .map(|c| categories.get(c).unwrap().len())
            .sum();
        assert_eq!(total, skills.len());

        for skill in &skills {
            let holders = categories
                .categories()
                .filter(|c| categories.get(*c).unwrap().contains(skill))
                .count();
            assert_eq!(holders, 1, "{} in {holders} buckets", skill.name);
        }
    }

    #[test]
    fn test_categorize_preserves_encounter_order() {
        let skills = extract("Python, React, Java, HTML");
        let categories = categorize(&skills);
        assert_eq!(
            categories.categories().collect::<Vec<_>>(),
            vec![Frontend, Backend]
        );
        assert_eq!(names(categories.get(Frontend).unwrap()), vec!["React", "Html"]);
        assert_eq!(names(categories.get(Backend).unwrap()), vec!["Python", "Java"]);
    }

    #[test]
    fn test_categorized_serializes_in_order() {
        let categories = categorize(&extract("git and html"));
        let json = serde_json::to_string(&categories).unwrap();
        let frontend = json.find("\"Frontend\"").unwrap();
        let tools = json.find("\"Tools\"").unwrap();
        assert!(frontend < tools);
    }
}
