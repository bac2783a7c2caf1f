use yew::prelude::*;
use web_sys::MouseEvent;

use crate::animation::{Animated, Animation, Frame, Trigger};
use crate::content::OWNER_NAME;
use crate::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: SectionId,
    pub menu_open: bool,
    pub on_navigate: Callback<SectionId>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavBarProps { active, menu_open, on_navigate, on_toggle_menu } = props;

    let toggle_menu = on_toggle_menu.reform(|_: MouseEvent| ());

    let nav_button = |section: SectionId, class: Classes| {
        let on_navigate = on_navigate.clone();
        html! {
            <button
                key={section.id()}
                class={class}
                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}
            >
                {section.label()}
            </button>
        }
    };

    let slide_in = Animation::new(
        Trigger::Mount,
        Frame::VISIBLE.shifted(0.0, -100.0),
        Frame::VISIBLE,
        600,
    );

    html! {
        <Animated tag="nav" class="top-nav" animation={slide_in}>
            <div class="nav-content">
                <div class="nav-logo">{OWNER_NAME}</div>

                <div class="nav-links">
                    {
                        for SectionId::ALL.into_iter().map(|section| {
                            nav_button(
                                section,
                                classes!("nav-link", (section == *active).then(|| "active")),
                            )
                        })
                    }
                </div>

                <button
                    class={classes!("burger-menu", menu_open.then(|| "open"))}
                    aria-label="menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-panel", menu_open.then(|| "open"))}>
                <div class="mobile-panel-inner">
                    {
                        for SectionId::ALL.into_iter().map(|section| {
                            nav_button(section, classes!("mobile-link"))
                        })
                    }
                </div>
            </div>
        </Animated>
    }
}
