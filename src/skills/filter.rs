//! Category filtering and progressive disclosure.
//!
//! Pure functions over the static catalog: the view layer feeds in the
//! current filter and disclosure flag and renders whatever comes back.

use super::catalog::{Skill, SkillCategory};

/// The currently selected category view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Frontend,
    Backend,
    AiMl,
    Tools,
    Soft,
}

impl CategoryFilter {
    /// Every filter, in the order the filter row renders them.
    pub const ALL: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Frontend,
        CategoryFilter::Backend,
        CategoryFilter::AiMl,
        CategoryFilter::Tools,
        CategoryFilter::Soft,
    ];

    /// Button text for the filter row.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Skills",
            CategoryFilter::Frontend => "Frontend",
            CategoryFilter::Backend => "Backend",
            CategoryFilter::AiMl => "AI & Machine Learning",
            CategoryFilter::Tools => "Tools & DevOps",
            CategoryFilter::Soft => "Soft Skills",
        }
    }

    /// How many records this view shows before the user asks for the rest.
    ///
    /// The mapping is total: an exhaustive enum leaves no "undefined
    /// category" to fall back from.
    pub fn initial_cap(self) -> usize {
        match self {
            CategoryFilter::All => 12,
            CategoryFilter::Frontend | CategoryFilter::Backend | CategoryFilter::AiMl => 6,
            CategoryFilter::Tools | CategoryFilter::Soft => 4,
        }
    }

    /// Whether a record in `category` belongs to this view.
    pub fn admits(self, category: SkillCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Frontend => category == SkillCategory::Frontend,
            CategoryFilter::Backend => category == SkillCategory::Backend,
            CategoryFilter::AiMl => category == SkillCategory::AiMl,
            CategoryFilter::Tools => category == SkillCategory::Tools,
            CategoryFilter::Soft => category == SkillCategory::Soft,
        }
    }
}

/// What the grid renders for one (filter, disclosure) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// Records to render, in catalog order.
    pub visible: Vec<&'a Skill>,
    /// How many records matched the filter before the cap was applied.
    pub matching: usize,
    /// The filter's initial-display cap.
    pub cap: usize,
    /// Disclosure flag this selection was computed with.
    pub expanded: bool,
}

impl Selection<'_> {
    /// True iff the show-more control should render at all.
    pub fn has_hidden(&self) -> bool {
        self.matching > self.cap
    }

    /// Records behind the fold while collapsed.
    pub fn hidden_count(&self) -> usize {
        self.matching.saturating_sub(self.cap)
    }

    /// Label for the show-more control.
    pub fn toggle_label(&self) -> String {
        if self.expanded {
            "Show Less".to_string()
        } else {
            format!("Show More ({} more)", self.hidden_count())
        }
    }
}

/// Filter `skills` and apply the disclosure cap.
///
/// Catalog order is preserved; collapsed views truncate, never sample.
pub fn select(skills: &[Skill], filter: CategoryFilter, expanded: bool) -> Selection<'_> {
    let matched: Vec<&Skill> = skills
        .iter()
        .filter(|s| filter.admits(s.category))
        .collect();
    let matching = matched.len();
    let cap = filter.initial_cap();

    let visible = if expanded {
        matched
    } else {
        matched.into_iter().take(cap).collect()
    };

    Selection {
        visible,
        matching,
        cap,
        expanded,
    }
}

/// Showcase view state: the active filter plus the disclosure flag.
///
/// Switching filters drops any expansion, so a stale "show everything"
/// choice never bleeds into a shorter filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseState {
    filter: CategoryFilter,
    expanded: bool,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            expanded: false,
        }
    }
}

impl ShowcaseState {
    pub fn filter(self) -> CategoryFilter {
        self.filter
    }

    pub fn expanded(self) -> bool {
        self.expanded
    }

    /// Select a category view. Always collapses.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.expanded = false;
    }

    /// Flip the show-more control. The filter is untouched.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Compute the records to render for the current state.
    pub fn selection(self, skills: &[Skill]) -> Selection<'_> {
        select(skills, self.filter, self.expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn s(name: &'static str, category: SkillCategory) -> Skill {
        Skill {
            name,
            level: 80,
            category,
        }
    }

    // 7 frontend, 6 backend, 3 AI/ML, 5 tools, 0 soft - interleaved so an
    // accidental re-sort would show up in the order assertions.
    const FIXTURE: &[Skill] = &[
        s("f1", SkillCategory::Frontend),
        s("b1", SkillCategory::Backend),
        s("t1", SkillCategory::Tools),
        s("f2", SkillCategory::Frontend),
        s("a1", SkillCategory::AiMl),
        s("b2", SkillCategory::Backend),
        s("f3", SkillCategory::Frontend),
        s("t2", SkillCategory::Tools),
        s("b3", SkillCategory::Backend),
        s("f4", SkillCategory::Frontend),
        s("a2", SkillCategory::AiMl),
        s("t3", SkillCategory::Tools),
        s("b4", SkillCategory::Backend),
        s("f5", SkillCategory::Frontend),
        s("t4", SkillCategory::Tools),
        s("b5", SkillCategory::Backend),
        s("f6", SkillCategory::Frontend),
        s("a3", SkillCategory::AiMl),
        s("t5", SkillCategory::Tools),
        s("b6", SkillCategory::Backend),
        s("f7", SkillCategory::Frontend),
    ];

    fn names(selection: &Selection<'_>) -> Vec<&'static str> {
        selection.visible.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_all_filter_admits_every_record() {
        let sel = select(FIXTURE, CategoryFilter::All, true);
        assert_eq!(sel.matching, FIXTURE.len());
        assert_eq!(sel.visible.len(), FIXTURE.len());
    }

    #[test]
    fn test_filters_admit_only_their_category() {
        for filter in CategoryFilter::ALL {
            let sel = select(FIXTURE, filter, true);
            for skill in &sel.visible {
                assert!(
                    filter.admits(skill.category),
                    "{:?} leaked {} into its view",
                    filter,
                    skill.name
                );
            }
        }
    }

    #[test]
    fn test_collapsed_count_is_min_of_matching_and_cap() {
        for filter in CategoryFilter::ALL {
            let sel = select(FIXTURE, filter, false);
            assert_eq!(
                sel.visible.len(),
                sel.matching.min(sel.cap),
                "wrong collapsed count for {:?}",
                filter
            );
        }
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        // Frontend records appear interleaved in the fixture; the view must
        // keep their relative order and take a prefix when collapsed.
        let collapsed = select(FIXTURE, CategoryFilter::Frontend, false);
        assert_eq!(names(&collapsed), ["f1", "f2", "f3", "f4", "f5", "f6"]);

        let expanded = select(FIXTURE, CategoryFilter::Frontend, true);
        assert_eq!(names(&expanded), ["f1", "f2", "f3", "f4", "f5", "f6", "f7"]);
    }

    #[test]
    fn test_show_more_visible_iff_over_cap() {
        // 7 frontend > cap 6: control renders.
        assert!(select(FIXTURE, CategoryFilter::Frontend, false).has_hidden());
        // Exactly at the cap (6 backend, cap 6): nothing is hidden.
        assert!(!select(FIXTURE, CategoryFilter::Backend, false).has_hidden());
        // Under the cap (3 AI/ML, cap 6): nothing is hidden.
        assert!(!select(FIXTURE, CategoryFilter::AiMl, false).has_hidden());
        // Expansion does not remove the control; it must offer "Show Less".
        assert!(select(FIXTURE, CategoryFilter::Frontend, true).has_hidden());
    }

    #[test]
    fn test_expanding_reveals_exactly_the_hidden_records() {
        let collapsed = select(FIXTURE, CategoryFilter::Tools, false);
        let expanded = select(FIXTURE, CategoryFilter::Tools, true);

        assert_eq!(collapsed.hidden_count(), 1);
        assert_eq!(
            expanded.visible.len(),
            collapsed.visible.len() + collapsed.hidden_count()
        );
        // The collapsed view is a strict prefix of the expanded one.
        assert_eq!(
            expanded.visible[..collapsed.visible.len()],
            collapsed.visible[..]
        );
    }

    #[test]
    fn test_toggle_labels() {
        let collapsed = select(FIXTURE, CategoryFilter::All, false);
        assert_eq!(collapsed.toggle_label(), "Show More (9 more)");

        let expanded = select(FIXTURE, CategoryFilter::All, true);
        assert_eq!(expanded.toggle_label(), "Show Less");
    }

    #[test]
    fn test_empty_category_renders_nothing() {
        // No soft skills in the fixture: empty grid, no control, no message.
        let sel = select(FIXTURE, CategoryFilter::Soft, false);
        assert!(sel.visible.is_empty());
        assert_eq!(sel.matching, 0);
        assert!(!sel.has_hidden());
    }

    #[test]
    fn test_switching_category_always_collapses() {
        let mut state = ShowcaseState::default();
        state.toggle_expanded();
        assert!(state.expanded());

        state.set_filter(CategoryFilter::Tools);
        assert_eq!(state.filter(), CategoryFilter::Tools);
        assert!(!state.expanded());

        // Re-selecting the active filter collapses too.
        state.toggle_expanded();
        state.set_filter(CategoryFilter::Tools);
        assert!(!state.expanded());
    }

    #[test]
    fn test_toggle_keeps_the_filter() {
        let mut state = ShowcaseState::default();
        state.set_filter(CategoryFilter::Backend);

        state.toggle_expanded();
        assert!(state.expanded());
        assert_eq!(state.filter(), CategoryFilter::Backend);

        state.toggle_expanded();
        assert!(!state.expanded());
        assert_eq!(state.filter(), CategoryFilter::Backend);
    }

    #[test]
    fn test_state_selection_matches_free_function() {
        let mut state = ShowcaseState::default();
        state.set_filter(CategoryFilter::Frontend);
        state.toggle_expanded();

        assert_eq!(
            state.selection(FIXTURE),
            select(FIXTURE, CategoryFilter::Frontend, true)
        );
    }
}
