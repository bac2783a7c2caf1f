use std::rc::Rc;

use yew::prelude::*;

use crate::section::SectionId;

/// Page-level UI state. Starts at `{ home, closed }` on every load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub active_section: SectionId,
    pub menu_open: bool,
}

pub enum UiAction {
    /// Result of a scroll probe. `None` leaves the current section in place.
    Scrolled(Option<SectionId>),
    ToggleMenu,
    /// A nav item or call-to-action was activated. The active section itself
    /// follows from the scroll that navigation triggers.
    Navigated(SectionId),
}

impl UiState {
    pub fn apply(&self, action: UiAction) -> UiState {
        match action {
            UiAction::Scrolled(Some(section)) => UiState {
                active_section: section,
                ..self.clone()
            },
            UiAction::Scrolled(None) => self.clone(),
            UiAction::ToggleMenu => UiState {
                menu_open: !self.menu_open,
                ..self.clone()
            },
            UiAction::Navigated(_) => UiState {
                menu_open: false,
                ..self.clone()
            },
        }
    }
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCROLL_PROBE_OFFSET;
    use crate::section::{section_at, SectionBounds};

    #[test]
    fn starts_on_home_with_menu_closed() {
        let state = UiState::default();
        assert_eq!(state.active_section, SectionId::Home);
        assert!(!state.menu_open);
    }

    #[test]
    fn toggling_twice_restores_the_menu() {
        let closed = UiState::default();
        let open = closed.apply(UiAction::ToggleMenu);
        assert!(open.menu_open);
        assert_eq!(open.apply(UiAction::ToggleMenu), closed);
    }

    #[test]
    fn unmatched_scroll_keeps_the_stale_section() {
        let state = UiState {
            active_section: SectionId::Skills,
            menu_open: false,
        };
        assert_eq!(state.apply(UiAction::Scrolled(None)).active_section, SectionId::Skills);
    }

    #[test]
    fn navigation_closes_menu_and_settled_scroll_activates_target() {
        let bounds = [
            SectionBounds::new(SectionId::Home, 0.0, 900.0),
            SectionBounds::new(SectionId::About, 900.0, 700.0),
            SectionBounds::new(SectionId::Skills, 1600.0, 800.0),
            SectionBounds::new(SectionId::Contact, 2400.0, 700.0),
        ];
        let open = UiState::default().apply(UiAction::ToggleMenu);

        for target in SectionId::ALL {
            let after_click = open.apply(UiAction::Navigated(target));
            assert!(!after_click.menu_open);

            // scrollIntoView settles with the section top at the viewport top
            let settled_y = bounds.iter().find(|b| b.id == target).map(|b| b.top).unwrap();
            let probed = section_at(settled_y, SCROLL_PROBE_OFFSET, &bounds);
            let settled = after_click.apply(UiAction::Scrolled(probed));
            assert_eq!(settled.active_section, target);
        }
    }

    #[test]
    fn navigating_with_menu_closed_leaves_it_closed() {
        let state = UiState::default().apply(UiAction::Navigated(SectionId::Contact));
        assert!(!state.menu_open);
    }
}
