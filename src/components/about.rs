use yew::prelude::*;

use crate::animation::{Animated, Animation};
use crate::content::{ABOUT_FACTS, ABOUT_PARAGRAPHS, ABOUT_TAGS};
use crate::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
}

/// Centered section title with the gradient underline, rising in on first view.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <Animated class="section-heading" animation={Animation::rise()}>
            <h2>{props.title.clone()}</h2>
            <div class="heading-rule"></div>
        </Animated>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={SectionId::About.id()} class="page-section">
            <div class="section-inner">
                <SectionHeading title="About Me" />

                <div class="two-columns">
                    <Animated animation={Animation::slide_from_left()}>
                        <h3 class="column-title">{"9년의 여정"}</h3>
                        {
                            for ABOUT_PARAGRAPHS.iter().map(|text| html! {
                                <p class="body-text">{*text}</p>
                            })
                        }
                        <div class="chips">
                            {
                                for ABOUT_TAGS.iter().map(|(label, class)| html! {
                                    <span class={classes!("chip", *class)}>{*label}</span>
                                })
                            }
                        </div>
                    </Animated>

                    <Animated class="fact-list" animation={Animation::slide_from_right()}>
                        {
                            for ABOUT_FACTS.iter().map(|fact| html! {
                                <div class="card">
                                    <h4>{fact.title}</h4>
                                    <p>{fact.body}</p>
                                </div>
                            })
                        }
                    </Animated>
                </div>
            </div>
        </section>
    }
}
