//! Exercise Taxonomies
//!
//! Fixed categorical domains (difficulty level, equipment type, target
//! muscle) mapping canonical keys to alias strings. Loaded once at startup
//! into an immutable registry shared by reference across requests.

use std::collections::HashMap;

// ============================================================================
// Constants - Domain Tables
// ============================================================================

/// Difficulty levels and their aliases
const LEVELS: &[(&str, &[&str])] = &[
    ("beginner", &["beginner", "novice", "easy", "starting"]),
    ("intermediate", &["intermediate", "mid-level", "medium"]),
    ("expert", &["advanced", "expert", "hard", "difficult"]),
];

/// Equipment types and their aliases
const EQUIPMENT: &[(&str, &[&str])] = &[
    ("barbell", &["barbell", "bar"]),
    ("dumbbell", &["dumbbell"]),
    ("other", &["other"]),
    ("body_only", &["body only", "body"]),
    ("cable", &["cable", "cable machine"]),
    ("machine", &["machine"]),
    ("kettlebells", &["kettlebells", "kettlebell"]),
    ("bands", &["bands", "tension band", "rubber ban", "stretch band"]),
    ("medicine_ball", &["medicine ball", "medicine"]),
    ("exercise_ball", &["exercise ball"]),
    ("foam_roll", &["foam roll", "roller"]),
    ("e-z_curl_bar", &["e-z curl bar", "ez bar"]),
];

/// Target muscles and their aliases
const MUSCLES: &[(&str, &[&str])] = &[
    ("abdominals", &["abdominals", "abs", "core"]),
    ("hamstrings", &["hamstrings", "hams", "legs"]),
    ("adductors", &["adductors"]),
    ("quadriceps", &["quadriceps", "quads", "legs", "leg"]),
    ("biceps", &["biceps", "bicep"]),
    ("shoulders", &["shoulders", "deltoids"]),
    ("chest", &["chest"]),
    ("middle_back", &["middle back", "back"]),
    ("calves", &["calves", "calf", "legs"]),
    ("glutes", &["glutes", "butt"]),
    ("lower_back", &["lower back", "back"]),
    ("triceps", &["triceps", "back of arm"]),
    ("forearms", &["forearms"]),
    ("neck", &["neck"]),
    ("traps", &["traps"]),
    ("abductors", &["abductors"]),
    ("lats", &["lats"]),
];

// ============================================================================
// Registry
// ============================================================================

/// A categorical domain of the exercise catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Level,
    Equipment,
    Muscle,
}

/// One taxonomy: ordered canonical keys plus an alias set per key.
#[derive(Debug)]
struct Taxonomy {
    keys: Vec<String>,
    aliases: HashMap<String, Vec<String>>,
}

impl Taxonomy {
    fn from_table(table: &[(&str, &[&str])]) -> Self {
        let mut keys = Vec::with_capacity(table.len());
        let mut aliases = HashMap::with_capacity(table.len());

        for (key, alias_list) in table {
            let mut alias_vec: Vec<String> =
                alias_list.iter().map(|s| s.to_string()).collect();
            // Every key is an alias of itself
            if !alias_vec.iter().any(|a| a == key) {
                alias_vec.push(key.to_string());
            }
            keys.push(key.to_string());
            aliases.insert(key.to_string(), alias_vec);
        }

        Self { keys, aliases }
    }
}

/// Immutable registry of the three exercise taxonomies.
///
/// Constructed once at process start; exposes read-only accessors and no
/// mutation operations.
#[derive(Debug)]
pub struct TaxonomyRegistry {
    level: Taxonomy,
    equipment: Taxonomy,
    muscle: Taxonomy,
}

impl Default for TaxonomyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxonomyRegistry {
    /// Create a registry with the built-in domain tables.
    pub fn new() -> Self {
        Self {
            level: Taxonomy::from_table(LEVELS),
            equipment: Taxonomy::from_table(EQUIPMENT),
            muscle: Taxonomy::from_table(MUSCLES),
        }
    }

    /// Ordered canonical keys of a domain.
    pub fn alias_keys(&self, domain: Domain) -> &[String] {
        &self.taxonomy(domain).keys
    }

    /// Alias strings for a canonical key, or `None` for an unknown key.
    pub fn aliases(&self, domain: Domain, key: &str) -> Option<&[String]> {
        self.taxonomy(domain).aliases.get(key).map(|v| v.as_slice())
    }

    /// Whether `token` exactly matches one of `key`'s aliases.
    pub fn is_alias(&self, domain: Domain, key: &str, token: &str) -> bool {
        self.aliases(domain, key)
            .is_some_and(|aliases| aliases.iter().any(|a| a == token))
    }

    fn taxonomy(&self, domain: Domain) -> &Taxonomy {
        match domain {
            Domain::Level => &self.level,
            Domain::Equipment => &self.equipment,
            Domain::Muscle => &self.muscle,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
