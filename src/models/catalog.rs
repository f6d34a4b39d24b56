// ============================================================================
// Catalog JSON Parsing
// ============================================================================
//
// File-based and string-based parsing for the classroom/section catalogs used
// to seed a repository before a timetable generation run.

use crate::api;
use anyhow::{Context, Result};
use std::path::Path;

#[derive(serde::Deserialize)]
struct CatalogInput {
    #[serde(default)]
    pub classrooms: Vec<api::Classroom>,
    #[serde(default)]
    pub sections: Vec<api::CourseSection>,
}

/// Parsed catalog: the rooms and course sections a repository is seeded with.
#[derive(Debug, Clone, Default)]
pub struct CatalogData {
    pub classrooms: Vec<api::Classroom>,
    pub sections: Vec<api::CourseSection>,
}

impl CatalogData {
    pub fn is_empty(&self) -> bool {
        self.classrooms.is_empty() && self.sections.is_empty()
    }
}

fn validate_input_catalog(catalog_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(catalog_json).context("Invalid catalog JSON")?;
    let obj = value
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("Catalog JSON must be an object"))?;
    if !obj.contains_key("classrooms") && !obj.contains_key("sections") {
        anyhow::bail!("Missing required 'classrooms' or 'sections' field");
    }
    Ok(())
}

/// Parse a catalog from a JSON string.
///
/// Entity-level invariants (positive capacities, enrollment within capacity)
/// are checked after deserializing so that a bad row names the offending
/// record instead of failing later inside the repository.
pub fn parse_catalog_json_str(catalog_json: &str) -> Result<CatalogData> {
    validate_input_catalog(catalog_json)?;

    let input: CatalogInput =
        serde_json::from_str(catalog_json).context("Failed to deserialize catalog JSON")?;

    for room in &input.classrooms {
        if room.code.trim().is_empty() {
            anyhow::bail!("Classroom with blank code in catalog");
        }
        if room.capacity == 0 {
            anyhow::bail!("Classroom {:?} has zero capacity", room.code);
        }
    }
    for section in &input.sections {
        if section.course_code.trim().is_empty() {
            anyhow::bail!("Section with blank course code in catalog");
        }
        if section.capacity == 0 {
            anyhow::bail!("Section {:?} has zero capacity", section.course_code);
        }
        if section.enrolled_count > section.capacity {
            anyhow::bail!(
                "Section {:?} enrollment {} exceeds capacity {}",
                section.course_code,
                section.enrolled_count,
                section.capacity
            );
        }
    }

    Ok(CatalogData {
        classrooms: input.classrooms,
        sections: input.sections,
    })
}

/// Parse a catalog from a JSON file on disk.
pub fn parse_catalog_json_file<P: AsRef<Path>>(path: P) -> Result<CatalogData> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    parse_catalog_json_str(&raw)
}
