//! Listing views
//!
//! Selects and orders material groups for display: free-text search, exact
//! course and type filters, and a sort key. Operates purely on an in-memory
//! listing produced by the scanner.

pub mod files;

use crate::tree::collate;
use crate::types::MaterialGroup;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Field a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Course,
    Instructor,
    Type,
}

impl SortKey {
    fn key<'a>(&self, group: &'a MaterialGroup) -> &'a str {
        match self {
            SortKey::Course => &group.course,
            SortKey::Instructor => &group.instructor,
            SortKey::Type => &group.material_type,
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "course" => Ok(SortKey::Course),
            "instructor" => Ok(SortKey::Instructor),
            "type" => Ok(SortKey::Type),
            other => Err(format!(
                "Invalid sort key: {} (must be 'course', 'instructor', or 'type')",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Course => "course",
            SortKey::Instructor => "instructor",
            SortKey::Type => "type",
        };
        f.write_str(s)
    }
}

/// Search, filter and sort settings for a material listing.
///
/// `None` filters mean "all". A blank search matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialQuery {
    pub search: Option<String>,
    pub course: Option<String>,
    #[serde(rename = "type")]
    pub material_type: Option<String>,
    pub sort_by: SortKey,
}

impl MaterialQuery {
    /// Whether `group` passes the search and both filters.
    pub fn matches(&self, group: &MaterialGroup) -> bool {
        if let Some(query) = self.search.as_deref().map(str::trim) {
            if !query.is_empty() {
                let query = query.to_lowercase();
                let hit = group.course_label().to_lowercase().contains(&query)
                    || group.instructor_label().to_lowercase().contains(&query)
                    || group.material_type.to_lowercase().contains(&query);
                if !hit {
                    return false;
                }
            }
        }
        if let Some(course) = &self.course {
            if &group.course != course {
                return false;
            }
        }
        if let Some(material_type) = &self.material_type {
            if &group.material_type != material_type {
                return false;
            }
        }
        true
    }

    /// Groups passing the query, ordered by the sort key.
    ///
    /// The sort is stable, so groups with equal keys keep scan order.
    pub fn apply(&self, materials: &[MaterialGroup]) -> Vec<MaterialGroup> {
        let mut selected: Vec<MaterialGroup> = materials
            .iter()
            .filter(|g| self.matches(g))
            .cloned()
            .collect();
        let sort_by = self.sort_by;
        collate::sort_by_name(&mut selected, |g| sort_by.key(g));
        selected
    }
}

/// Course filter choice: raw key plus the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub key: String,
    pub label: String,
}

/// Distinct courses in a listing, labelled by the first group carrying each.
pub fn course_options(materials: &[MaterialGroup]) -> Vec<FilterOption> {
    let mut seen = HashSet::new();
    let mut options: Vec<FilterOption> = materials
        .iter()
        .filter(|g| seen.insert(g.course.as_str()))
        .map(|g| FilterOption {
            key: g.course.clone(),
            label: g.course_label().to_string(),
        })
        .collect();
    collate::sort_by_name(&mut options, |o| o.key.as_str());
    options
}

/// Distinct type keys in a listing.
pub fn type_options(materials: &[MaterialGroup]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut types: Vec<String> = materials
        .iter()
        .filter(|g| seen.insert(g.material_type.as_str()))
        .map(|g| g.material_type.clone())
        .collect();
    collate::sort_by_name(&mut types, |t| t.as_str());
    types
}

/// "N results found", singular for one.
pub fn results_summary(count: usize) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("{} {} found", count, noun)
}
