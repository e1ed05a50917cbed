//! Static skill records shown by the showcase.

/// Broad grouping used by the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    /// AI and machine-learning tooling.
    AiMl,
    Tools,
    Soft,
}

/// One showcased skill. Immutable configuration data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
    pub category: SkillCategory,
}

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

/// The full catalog, in display order. The showcase never reorders it.
pub const SKILLS: &[Skill] = &[
    skill("React", 92, SkillCategory::Frontend),
    skill("TypeScript", 90, SkillCategory::Frontend),
    skill("Next.js", 85, SkillCategory::Frontend),
    skill("Vue.js", 74, SkillCategory::Frontend),
    skill("HTML & CSS", 95, SkillCategory::Frontend),
    skill("Tailwind CSS", 88, SkillCategory::Frontend),
    skill("Node.js", 87, SkillCategory::Backend),
    skill("Python", 90, SkillCategory::Backend),
    skill("PostgreSQL", 82, SkillCategory::Backend),
    skill("REST APIs", 91, SkillCategory::Backend),
    skill("GraphQL", 76, SkillCategory::Backend),
    skill("LangChain", 84, SkillCategory::AiMl),
    skill("AutoGen", 78, SkillCategory::AiMl),
    skill("PyTorch", 72, SkillCategory::AiMl),
    skill("Pandas & NumPy", 83, SkillCategory::AiMl),
    skill("Docker", 85, SkillCategory::Tools),
    skill("Git & GitHub Actions", 93, SkillCategory::Tools),
    skill("AWS", 75, SkillCategory::Tools),
    skill("Communication", 90, SkillCategory::Soft),
    skill("Problem Solving", 94, SkillCategory::Soft),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::{select, CategoryFilter};

    #[test]
    fn test_catalog_records_are_well_formed() {
        for s in SKILLS {
            assert!(!s.name.is_empty());
            assert!(s.level <= 100, "{} has level {}", s.name, s.level);
        }
    }

    #[test]
    fn test_all_view_collapses_to_twelve() {
        // 20 skills against the All cap of 12 leaves 8 behind the fold.
        assert_eq!(SKILLS.len(), 20);

        let sel = select(SKILLS, CategoryFilter::All, false);
        assert_eq!(sel.visible.len(), 12);
        assert_eq!(sel.hidden_count(), 8);
        assert_eq!(sel.toggle_label(), "Show More (8 more)");

        let expanded = select(SKILLS, CategoryFilter::All, true);
        assert_eq!(expanded.visible.len(), 20);
        assert_eq!(expanded.toggle_label(), "Show Less");
    }

    #[test]
    fn test_tools_fit_under_their_cap() {
        // Three tools against a cap of four: everything visible, no control.
        let sel = select(SKILLS, CategoryFilter::Tools, false);
        assert_eq!(sel.visible.len(), 3);
        assert!(!sel.has_hidden());
    }
}
