//! Filtered, sorted projection of the loaded talents.
//!
//! The projection borrows from the loaded list and sorts its own vector of
//! references, so the loaded list keeps its original order no matter how often
//! the view is rebuilt.

use itertools::Itertools;
use talent_api::endpoints::{talents::Profile, Skill};

/// Skill filter applied to the talent list
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillFilter {
    #[default]
    All,
    Only(Skill),
}

impl SkillFilter {
    /// Cycle All → Frontend → Backend → Fullstack → All
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Only(Skill::Frontend),
            Self::Only(Skill::Fullstack) => Self::All,
            Self::Only(skill) => Self::Only(skill.next()),
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::All => Self::Only(Skill::Fullstack),
            Self::Only(Skill::Frontend) => Self::All,
            Self::Only(skill) => Self::Only(skill.previous()),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(skill) => skill.as_str(),
        }
    }

    pub fn matches(&self, skill: Skill) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == skill,
        }
    }
}

/// Build the rendered talent list.
///
/// 1. keep profiles whose primary skill matches `filter`
/// 2. keep profiles whose display name contains `query`, ignoring case
/// 3. stable sort ascending by years of experience
pub fn visible_talents<'a>(
    talents: &'a [Profile],
    query: &str,
    filter: SkillFilter,
) -> Vec<&'a Profile> {
    let query_lower = query.to_lowercase();

    talents
        .iter()
        .filter(|t| filter.matches(t.primary_skill))
        .filter(|t| query_lower.is_empty() || t.display_name.to_lowercase().contains(&query_lower))
        .sorted_by(|a, b| a.years_experience.total_cmp(&b.years_experience))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::profile;

    fn names<'a>(talents: &[&'a Profile]) -> Vec<&'a str> {
        talents.iter().map(|t| t.display_name.as_str()).collect()
    }

    #[test]
    fn sorts_ascending_by_experience() {
        let talents = vec![
            profile("t_001", "Amara Okoye", Skill::Frontend, 4),
            profile("t_002", "Bola Adeyemi", Skill::Backend, 7),
            profile("t_003", "Chinedu Umeh", Skill::Frontend, 2),
        ];

        let visible = visible_talents(&talents, "", SkillFilter::All);
        let years: Vec<f64> = visible
            .iter()
            .map(|t| t.years_experience.inner())
            .collect();
        assert_eq!(years, vec![2.0, 4.0, 7.0]);
        assert_eq!(names(&visible)[0], "Chinedu Umeh");
    }

    #[test]
    fn does_not_reorder_the_loaded_list() {
        let talents = vec![
            profile("t_001", "Amara Okoye", Skill::Frontend, 4),
            profile("t_002", "Chinedu Umeh", Skill::Frontend, 2),
        ];

        let _ = visible_talents(&talents, "", SkillFilter::All);
        assert_eq!(talents[0].id.as_str(), "t_001");
        assert_eq!(talents[1].id.as_str(), "t_002");
    }

    #[test]
    fn ties_keep_their_loaded_order() {
        let talents = vec![
            profile("t_001", "First", Skill::Frontend, 3),
            profile("t_002", "Second", Skill::Backend, 1),
            profile("t_003", "Third", Skill::Fullstack, 3),
            profile("t_004", "Fourth", Skill::Frontend, 3),
        ];

        let visible = visible_talents(&talents, "", SkillFilter::All);
        assert_eq!(names(&visible), vec!["Second", "First", "Third", "Fourth"]);
    }

    #[test]
    fn result_is_non_decreasing_in_experience() {
        let talents: Vec<Profile> = [9, 0, 3, 3, 12, 1, 7, 7, 2]
            .iter()
            .enumerate()
            .map(|(i, years)| profile(&format!("t_{i}"), &format!("Talent {i}"), Skill::Backend, *years))
            .collect();

        let visible = visible_talents(&talents, "", SkillFilter::All);
        assert_eq!(visible.len(), talents.len());
        assert!(visible
            .windows(2)
            .all(|pair| pair[0].years_experience <= pair[1].years_experience));
    }

    #[test]
    fn skill_filter_keeps_only_matching_profiles() {
        let talents = vec![
            profile("t_001", "Amara Okoye", Skill::Frontend, 4),
            profile("t_002", "Bola Adeyemi", Skill::Backend, 7),
            profile("t_003", "Chinedu Umeh", Skill::Backend, 2),
            profile("t_004", "Dayo Ade", Skill::Fullstack, 5),
        ];

        let visible = visible_talents(&talents, "", SkillFilter::Only(Skill::Backend));
        let expected = talents
            .iter()
            .filter(|t| t.primary_skill == Skill::Backend)
            .count();
        assert_eq!(visible.len(), expected);
        assert!(visible.iter().all(|t| t.primary_skill == Skill::Backend));
    }

    #[test]
    fn backend_filter_over_frontend_and_backend_leaves_one() {
        let talents = vec![
            profile("t_001", "Amara Okoye", Skill::Frontend, 4),
            profile("t_002", "Bola Adeyemi", Skill::Backend, 4),
        ];

        let visible = visible_talents(&talents, "", SkillFilter::Only(Skill::Backend));
        assert_eq!(names(&visible), vec!["Bola Adeyemi"]);
    }

    #[test]
    fn search_is_case_insensitive_substring_of_display_name() {
        let talents = vec![
            profile("t_001", "Amara Okoye", Skill::Frontend, 4),
            profile("t_002", "Bola Adeyemi", Skill::Backend, 7),
        ];

        assert_eq!(
            names(&visible_talents(&talents, "OKO", SkillFilter::All)),
            vec!["Amara Okoye"]
        );
        assert_eq!(
            names(&visible_talents(&talents, "a", SkillFilter::All)),
            vec!["Amara Okoye", "Bola Adeyemi"]
        );
        assert!(visible_talents(&talents, "zzz", SkillFilter::All).is_empty());
    }

    #[test]
    fn search_and_filter_combine() {
        let talents = vec![
            profile("t_001", "Amara Okoye", Skill::Frontend, 4),
            profile("t_002", "Amaka Obi", Skill::Backend, 7),
        ];

        let visible = visible_talents(&talents, "ama", SkillFilter::Only(Skill::Backend));
        assert_eq!(names(&visible), vec!["Amaka Obi"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(visible_talents(&[], "anything", SkillFilter::All).is_empty());
    }

    #[test]
    fn skill_filter_cycles_through_all_values() {
        let mut filter = SkillFilter::All;
        let mut seen = vec![filter];
        for _ in 0..3 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(
            seen,
            vec![
                SkillFilter::All,
                SkillFilter::Only(Skill::Frontend),
                SkillFilter::Only(Skill::Backend),
                SkillFilter::Only(Skill::Fullstack),
            ]
        );
        assert_eq!(filter.next(), SkillFilter::All);
        assert_eq!(SkillFilter::All.previous(), SkillFilter::Only(Skill::Fullstack));
        assert_eq!(SkillFilter::Only(Skill::Frontend).previous(), SkillFilter::All);
    }
}
