//! Entity records recovered from the chapters. All four are built
//! incrementally during segmentation and are write-once afterwards.
//!
//! Elevations stay raw strings ("13,900+", "13,917n"): the book's notation
//! is too inconsistent to parse into numbers without losing information.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Region {
    pub region_id: String,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub name: String,
    pub slug: String,
    pub peaks: Vec<Peak>,
    pub passes: Vec<Pass>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Peak {
    pub peak_id: String,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub name: String,
    /// Alternate names. Reserved; nothing fills it yet.
    pub aka: Vec<String>,
    pub elevations: Vec<String>,
    pub routes: Vec<Route>,
    pub description: String,
    pub location_description: String,
    pub gps_coordinates: String,
    pub utm_coordinates: String,
    pub slug: String,
    pub region: String,
    pub region_slug: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Pass {
    pub pass_id: String,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub name: String,
    pub aka: Vec<String>,
    pub class_rating: String,
    pub elevations: Vec<String>,
    pub description: String,
    pub location_description: String,
    pub slug: String,
    pub region: String,
    pub region_slug: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub route_id: String,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub name: String,
    pub aka: Vec<String>,
    pub class_rating: String,
    pub description: String,
    pub slug: String,
    /// Weak back-reference to the owning peak's id. Lookup key only,
    /// never an owning pointer.
    pub peak_id: String,
}

impl Region {
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        let region_id = Uuid::new_v4().to_string();
        let slug = slug_for(name, &region_id);
        Region {
            region_id,
            created: now,
            last_modified: now,
            name: name.to_string(),
            slug,
            peaks: Vec::new(),
            passes: Vec::new(),
        }
    }
}

impl Peak {
    pub fn new() -> Self {
        let now = Utc::now();
        Peak {
            peak_id: Uuid::new_v4().to_string(),
            created: now,
            last_modified: now,
            name: String::new(),
            aka: Vec::new(),
            elevations: Vec::new(),
            routes: Vec::new(),
            description: String::new(),
            location_description: String::new(),
            gps_coordinates: String::new(),
            utm_coordinates: String::new(),
            slug: String::new(),
            region: String::new(),
            region_slug: String::new(),
        }
    }
}

impl Default for Peak {
    fn default() -> Self {
        Self::new()
    }
}

impl Pass {
    pub fn new() -> Self {
        let now = Utc::now();
        Pass {
            pass_id: Uuid::new_v4().to_string(),
            created: now,
            last_modified: now,
            name: String::new(),
            aka: Vec::new(),
            class_rating: String::new(),
            elevations: Vec::new(),
            description: String::new(),
            location_description: String::new(),
            slug: String::new(),
            region: String::new(),
            region_slug: String::new(),
        }
    }
}

impl Default for Pass {
    fn default() -> Self {
        Self::new()
    }
}

impl Route {
    pub fn new() -> Self {
        let now = Utc::now();
        Route {
            route_id: Uuid::new_v4().to_string(),
            created: now,
            last_modified: now,
            name: String::new(),
            aka: Vec::new(),
            class_rating: String::new(),
            description: String::new(),
            slug: String::new(),
            peak_id: String::new(),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}

/// URL-safe slug: lowercase, non-alphanumeric runs collapsed to `-`.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Slug from a display name plus the last hyphen component of the entity's
/// id, so duplicate names across documents stay globally unique.
pub fn slug_for(name: &str, id: &str) -> String {
    let suffix = id.rsplit('-').next().unwrap_or(id);
    slugify(&format!("{name} {suffix}"))
}

// ── Tests ──
