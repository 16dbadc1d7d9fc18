//! Top-level navigation: which screen renders and which entities are selected.
//!
//! DESIGN
//! ======
//! The shell owns one `NavState` signal. Every change goes through a named
//! transition so detail selections are set and cleared in one place, and a
//! detail screen never renders without its entity.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::data::types::{Person, Plan};

/// Bottom-bar tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Plans,
    Discover,
    Chats,
    Profile,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Plans, Self::Discover, Self::Chats, Self::Profile];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Plans => "Планы",
            Self::Discover => "Открыть",
            Self::Chats => "Чаты",
            Self::Profile => "Профиль",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Plans => "🗓️",
            Self::Discover => "🔍",
            Self::Chats => "💬",
            Self::Profile => "👤",
        }
    }

    #[must_use]
    pub fn screen(self) -> Screen {
        match self {
            Self::Plans => Screen::Plans,
            Self::Discover => Screen::Discover,
            Self::Chats => Screen::Chats,
            Self::Profile => Screen::Profile,
        }
    }
}

/// Every screen the shell can render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Plans,
    Discover,
    Chats,
    Profile,
    PlanDetails,
    PersonDetails,
    CreatePlan,
}

impl Screen {
    /// The tab this screen belongs to; `None` for detail and wizard screens.
    #[must_use]
    pub fn tab(self) -> Option<Tab> {
        match self {
            Self::Plans => Some(Tab::Plans),
            Self::Discover => Some(Tab::Discover),
            Self::Chats => Some(Tab::Chats),
            Self::Profile => Some(Tab::Profile),
            Self::PlanDetails | Self::PersonDetails | Self::CreatePlan => None,
        }
    }

    /// The bottom bar is shown only on tab screens.
    #[must_use]
    pub fn shows_navigation(self) -> bool {
        self.tab().is_some()
    }
}

/// Cross-screen state held by the shell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub screen: Screen,
    pub selected_plan: Option<Plan>,
    pub selected_person: Option<Person>,
    /// Where "back" from person details goes.
    person_origin: Option<Screen>,
}

impl NavState {
    /// Open a plan's detail screen.
    pub fn select_plan(&mut self, plan: Plan) {
        self.selected_plan = Some(plan);
        self.screen = Screen::PlanDetails;
    }

    /// Open a person's detail screen, remembering where it was opened from.
    pub fn select_person(&mut self, person: Person) {
        self.person_origin = Some(self.screen);
        self.selected_person = Some(person);
        self.screen = Screen::PersonDetails;
    }

    /// Leave plan details or the create-plan wizard for the plans feed.
    pub fn back_to_plans(&mut self) {
        self.selected_plan = None;
        self.selected_person = None;
        self.person_origin = None;
        self.screen = Screen::Plans;
    }

    /// Leave person details for the screen that opened it.
    ///
    /// Returning to plan details keeps the selected plan; anything else
    /// lands on Discover.
    pub fn back_from_person(&mut self) {
        self.selected_person = None;
        let origin = self.person_origin.take();
        self.screen = match origin {
            Some(Screen::PlanDetails) if self.selected_plan.is_some() => Screen::PlanDetails,
            _ => {
                self.selected_plan = None;
                Screen::Discover
            }
        };
    }

    /// Switch tabs, dropping any detail selection.
    pub fn change_tab(&mut self, tab: Tab) {
        self.selected_plan = None;
        self.selected_person = None;
        self.person_origin = None;
        self.screen = tab.screen();
    }

    pub fn open_create_plan(&mut self) {
        self.selected_plan = None;
        self.screen = Screen::CreatePlan;
    }

    /// After the wizard submits, land on the feed.
    pub fn plan_created(&mut self) {
        self.back_to_plans();
    }

    /// "Message" on person details opens the chat list.
    pub fn open_chats(&mut self) {
        self.change_tab(Tab::Chats);
    }
}
