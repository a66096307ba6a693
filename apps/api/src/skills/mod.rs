// Skill extraction: static catalog, whole-word keyword matcher, category grouping,
// and gap analysis against a candidate's own skills.

pub mod catalog;
pub mod extractor;
pub mod gap;
pub mod handlers;
