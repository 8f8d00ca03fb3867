//! Skill groups for the home page skills grid.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100. Drives the bar width.
    pub level: u8,
}

impl Skill {
    /// Inline width style for the proficiency bar.
    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        id: "languages",
        title: "Languages",
        skills: &[
            Skill { name: "Rust", level: 95 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "Go", level: 70 },
            Skill { name: "SQL", level: 80 },
        ],
    },
    SkillGroup {
        id: "systems",
        title: "Systems",
        skills: &[
            Skill { name: "Async runtimes", level: 90 },
            Skill { name: "Distributed queues", level: 80 },
            Skill { name: "Observability", level: 85 },
        ],
    },
    SkillGroup {
        id: "frontend",
        title: "Front end",
        skills: &[
            Skill { name: "Leptos / WASM", level: 85 },
            Skill { name: "Design systems", level: 75 },
            Skill { name: "Accessibility", level: 70 },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_group_ids_are_unique() {
        let mut ids: Vec<&str> = SKILL_GROUPS.iter().map(|g| g.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SKILL_GROUPS.len());
    }

    #[test]
    fn skill_levels_are_percentages() {
        for group in SKILL_GROUPS {
            for skill in group.skills {
                assert!(skill.level <= 100, "{}", skill.name);
            }
        }
    }

    #[test]
    fn bar_style_clamps_to_hundred() {
        let skill = Skill { name: "x", level: 250 };
        assert_eq!(skill.bar_style(), "width: 100%");
    }
}
