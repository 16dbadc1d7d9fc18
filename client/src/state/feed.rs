//! Plans feed filtering.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::data::types::{Plan, PlanCategory};

/// Chip row above the feed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Pair plans of any category.
    Pair,
    Category(PlanCategory),
}

impl CategoryFilter {
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Pair,
        Self::Category(PlanCategory::Event),
        Self::Category(PlanCategory::Casual),
        Self::Category(PlanCategory::Activity),
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Pair => "Вдвоём",
            Self::Category(PlanCategory::Event) => "События",
            Self::Category(PlanCategory::Casual) => "Casual",
            Self::Category(PlanCategory::Activity) => "Активности",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::All => "✨",
            Self::Pair => "👥",
            Self::Category(category) => category.icon(),
        }
    }

    #[must_use]
    pub fn matches(self, plan: &Plan) -> bool {
        match self {
            Self::All => true,
            Self::Pair => plan.is_pair_activity,
            Self::Category(category) => plan.category == category,
        }
    }
}

/// Case-insensitive substring match over title and location. An empty query
/// matches everything.
#[must_use]
pub fn matches_query(plan: &Plan, query: &str) -> bool {
    let needle = query.to_lowercase();
    plan.title.to_lowercase().contains(&needle) || plan.location.to_lowercase().contains(&needle)
}

/// Plans passing both the chip filter and the search box, in feed order.
#[must_use]
pub fn filter_plans(plans: &[Plan], filter: CategoryFilter, query: &str) -> Vec<Plan> {
    plans
        .iter()
        .filter(|plan| filter.matches(plan) && matches_query(plan, query))
        .cloned()
        .collect()
}
