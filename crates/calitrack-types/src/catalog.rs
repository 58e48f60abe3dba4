use crate::domain::Split;

/// One exercise in the static catalog, with the recommended set/rep scheme.
///
/// Reference data for pickers and guidance. Nothing in the engine requires
/// logged exercise names to come from here; free-form names written by older
/// trackers stay queryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub sets: u32,
    /// Target reps per set. Hold exercises use seconds here.
    pub reps: u32,
}

impl CatalogEntry {
    pub fn recommended(&self) -> String {
        format!("{}x{}", self.sets, self.reps)
    }
}

const PUSH: &[CatalogEntry] = &[
    CatalogEntry { name: "Dips", sets: 3, reps: 8 },
    CatalogEntry { name: "Pseudo Planche Push-ups", sets: 3, reps: 6 },
    CatalogEntry { name: "Pike Push-ups", sets: 3, reps: 8 },
    CatalogEntry { name: "Incline/Decline Push-ups", sets: 3, reps: 12 },
    CatalogEntry { name: "Triceps Band Pushdowns", sets: 3, reps: 12 },
];

const PULL: &[CatalogEntry] = &[
    CatalogEntry { name: "Pull-ups", sets: 3, reps: 6 },
    CatalogEntry { name: "Assisted Pull-ups (Band)", sets: 2, reps: 8 },
    CatalogEntry { name: "Negative Pull-ups", sets: 3, reps: 4 },
    CatalogEntry { name: "Australian Rows", sets: 3, reps: 10 },
    CatalogEntry { name: "Banded Curls", sets: 3, reps: 12 },
    CatalogEntry { name: "Dead Hangs", sets: 3, reps: 30 },
];

const LEGS_CORE: &[CatalogEntry] = &[
    CatalogEntry { name: "Pistol Squats", sets: 3, reps: 5 },
    CatalogEntry { name: "Bulgarian Split Squats", sets: 4, reps: 8 },
    CatalogEntry { name: "Wall Sits", sets: 3, reps: 30 },
    CatalogEntry { name: "Glute Bridges", sets: 3, reps: 12 },
    CatalogEntry { name: "Hanging Leg Raises", sets: 3, reps: 8 },
    CatalogEntry { name: "Plank Variations", sets: 3, reps: 30 },
];

const SKILLS_MOBILITY: &[CatalogEntry] = &[
    CatalogEntry { name: "Handstand Holds", sets: 3, reps: 20 },
    CatalogEntry { name: "Front Lever Tuck Holds", sets: 3, reps: 15 },
    CatalogEntry { name: "Shoulder Dislocates (Banded)", sets: 3, reps: 10 },
    CatalogEntry { name: "Shoulder Mobility Drills", sets: 3, reps: 30 },
];

/// Catalog entries for one split.
pub fn exercises_for(split: Split) -> &'static [CatalogEntry] {
    match split {
        Split::Push => PUSH,
        Split::Pull => PULL,
        Split::LegsCore => LEGS_CORE,
        Split::SkillsMobility => SKILLS_MOBILITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_split_has_entries() {
        for split in Split::all() {
            assert!(!exercises_for(split).is_empty());
        }
    }

    #[test]
    fn test_recommended_format() {
        let entry = &exercises_for(Split::Push)[0];
        assert_eq!(entry.recommended(), "3x8");
    }
}
