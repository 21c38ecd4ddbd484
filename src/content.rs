use chrono::NaiveDate;
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Vec<Project>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub tag: String,
    pub repo_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    pub image: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub in_development: bool,
}

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Project content not found")]
    NotFound,
    #[error("Couldn't parse project content")]
    Parse,
}

/// Load the embedded project list, newest first, optionally narrowed to one
/// tag. Results are cached per tag for the lifetime of the process.
#[cfg(feature = "ssr")]
pub async fn get_projects(tag: String) -> Result<Vec<Project>, ContentError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(r) = cache.get(&tag) {
        return Ok(r.clone());
    }
    let raw = Assets::get("projects.json").ok_or(ContentError::NotFound)?;
    let mut projects: Vec<Project> = serde_json::from_slice(&raw.data).map_err(|e| {
        tracing::warn!("failed to parse projects.json: {e}");
        ContentError::Parse
    })?;
    projects.sort_by(|a, b| b.date.cmp(&a.date));
    if !tag.is_empty() {
        projects.retain(|p| p.tag == tag);
    }
    cache.insert(tag, projects.clone());
    Ok(projects)
}

/// Distinct tags in first-seen order, for the filter chips.
pub fn tags(projects: &[Project]) -> Vec<String> {
    let mut seen = Vec::new();
    for p in projects {
        if !seen.contains(&p.tag) {
            seen.push(p.tag.clone());
        }
    }
    seen
}

/// Client-side narrowing of an already-loaded list. An empty tag keeps
/// everything.
pub fn filter_by_tag(projects: &[Project], tag: &str) -> Vec<Project> {
    if tag.is_empty() {
        projects.to_vec()
    } else {
        projects.iter().filter(|p| p.tag == tag).cloned().collect()
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embedded_projects_parse_and_sort_newest_first() {
        let projects = get_projects(String::new())
            .await
            .expect("embedded projects.json should parse");
        assert!(!projects.is_empty());
        for pair in projects.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[tokio::test]
    async fn tag_filter_only_keeps_matching_projects() {
        let all = get_projects(String::new()).await.unwrap();
        let tag = all[0].tag.clone();
        let filtered = get_projects(tag.clone()).await.unwrap();
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|p| p.tag == tag));
        // cached second lookup returns the same list
        let again = get_projects(tag).await.unwrap();
        assert_eq!(filtered, again);
    }

    #[test]
    fn tags_are_distinct_and_ordered() {
        let projects = vec![
            project("a", "Full Stack"),
            project("b", "Mobile App"),
            project("c", "Full Stack"),
        ];
        assert_eq!(tags(&projects), vec!["Full Stack", "Mobile App"]);
    }

    #[test]
    fn filter_by_tag_with_empty_tag_keeps_everything() {
        let projects = vec![project("a", "Full Stack"), project("b", "Mobile App")];
        assert_eq!(filter_by_tag(&projects, "").len(), 2);
        let narrowed = filter_by_tag(&projects, "Mobile App");
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].title, "b");
    }

    fn project(title: &str, tag: &str) -> Project {
        Project {
            title: title.to_string(),
            description: String::new(),
            technologies: Vec::new(),
            tag: tag.to_string(),
            repo_url: String::new(),
            live_url: None,
            image: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            in_development: false,
        }
    }
}
