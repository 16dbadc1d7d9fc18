//! Two-step create-plan wizard.
//!
//! DESIGN
//! ======
//! Step one collects what and with whom, step two collects where and when.
//! Each step's primary button is gated by a pure predicate; a submit
//! packages the form as a `PlanDraft` for the shell's creation callback.

#[cfg(test)]
#[path = "create_plan_test.rs"]
mod create_plan_test;

use crate::data::types::PlanCategory;

pub const PAIR_MAX_PARTICIPANTS: u32 = 2;
pub const GROUP_DEFAULT_MAX_PARTICIPANTS: u32 = 6;
pub const GROUP_MIN_PARTICIPANTS: u32 = 3;
pub const GROUP_MAX_PARTICIPANTS: u32 = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Basics,
    Details,
}

impl WizardStep {
    /// One-based step number for the "Шаг n из 2" header.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Basics => 1,
            Self::Details => 2,
        }
    }
}

/// Who the plan is for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivityType {
    #[default]
    Pair,
    Group,
}

impl ActivityType {
    pub const ALL: [Self; 2] = [Self::Pair, Self::Group];

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pair => "👥",
            Self::Group => "👨‍👩‍👧‍👦",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pair => "Вдвоём",
            Self::Group => "Компанией",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Pair => "Ищу одного человека",
            Self::Group => "Ищу небольшую группу",
        }
    }

    #[must_use]
    pub fn default_max_participants(self) -> u32 {
        match self {
            Self::Pair => PAIR_MAX_PARTICIPANTS,
            Self::Group => GROUP_DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

/// What the wizard hands to the creation callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanDraft {
    pub title: String,
    pub category: PlanCategory,
    pub activity_type: ActivityType,
    pub description: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub max_participants: u32,
    pub is_custom: bool,
    pub is_pair_activity: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatePlanForm {
    pub step: WizardStep,
    pub title: String,
    pub category: PlanCategory,
    pub activity_type: ActivityType,
    pub description: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub max_participants: u32,
}

impl Default for CreatePlanForm {
    fn default() -> Self {
        Self {
            step: WizardStep::Basics,
            title: String::new(),
            category: PlanCategory::Casual,
            activity_type: ActivityType::Pair,
            description: String::new(),
            location: String::new(),
            date: String::new(),
            time: String::new(),
            price: String::new(),
            max_participants: PAIR_MAX_PARTICIPANTS,
        }
    }
}

impl CreatePlanForm {
    /// Pick pair or group; resets the participant cap to that type's default.
    pub fn set_activity_type(&mut self, activity_type: ActivityType) {
        self.activity_type = activity_type;
        self.max_participants = activity_type.default_max_participants();
    }

    /// Set the group cap from the number input. Out-of-range values clamp;
    /// unparseable input leaves the cap unchanged. Pair plans stay at two.
    pub fn set_max_participants(&mut self, raw: &str) {
        if self.activity_type == ActivityType::Pair {
            return;
        }
        if let Ok(n) = raw.trim().parse::<u32>() {
            self.max_participants = n.clamp(GROUP_MIN_PARTICIPANTS, GROUP_MAX_PARTICIPANTS);
        }
    }

    /// Live update while the user types. Only in-range values apply, so a
    /// partial entry like the `1` of `15` is not clamped mid-keystroke;
    /// [`Self::set_max_participants`] settles it when the field commits.
    pub fn type_max_participants(&mut self, raw: &str) {
        if self.activity_type == ActivityType::Pair {
            return;
        }
        if let Ok(n) = raw.trim().parse::<u32>()
            && (GROUP_MIN_PARTICIPANTS..=GROUP_MAX_PARTICIPANTS).contains(&n)
        {
            self.max_participants = n;
        }
    }

    /// Step one is complete once the plan has a title.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.title.is_empty()
    }

    /// Step two is complete once location and date are filled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.location.is_empty() && !self.date.is_empty()
    }

    /// Whether the primary button on the current step is enabled.
    #[must_use]
    pub fn primary_enabled(&self) -> bool {
        match self.step {
            WizardStep::Basics => self.can_advance(),
            WizardStep::Details => self.can_submit(),
        }
    }

    /// Move to step two. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if self.step != WizardStep::Basics || !self.can_advance() {
            return false;
        }
        self.step = WizardStep::Details;
        true
    }

    pub fn back(&mut self) {
        self.step = WizardStep::Basics;
    }

    /// Package the form. `None` unless on step two with required fields set.
    #[must_use]
    pub fn submit(&self) -> Option<PlanDraft> {
        if self.step != WizardStep::Details || !self.can_advance() || !self.can_submit() {
            return None;
        }
        Some(PlanDraft {
            title: self.title.clone(),
            category: self.category,
            activity_type: self.activity_type,
            description: self.description.clone(),
            location: self.location.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            price: self.price.clone(),
            max_participants: self.max_participants,
            is_custom: true,
            is_pair_activity: self.activity_type == ActivityType::Pair,
        })
    }
}
