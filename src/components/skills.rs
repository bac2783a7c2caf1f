use yew::prelude::*;

use crate::animation::{Animated, Animation};
use crate::components::about::SectionHeading;
use crate::content::{SkillEntry, SKILLS};
use crate::section::SectionId;

const STAGGER_MS: u32 = 100;
const FILL_LAG_MS: u32 = 200;

#[derive(Properties, PartialEq)]
pub struct SkillBarProps {
    pub skill: SkillEntry,
    pub index: usize,
}

/// One labelled bar. The fill grows to `level` percent once, the first time
/// the bar is seen, and stays there.
#[function_component(SkillBar)]
pub fn skill_bar(props: &SkillBarProps) -> Html {
    let SkillBarProps { skill, index } = props;

    let card = Animation::slide_from_left()
        .duration(600)
        .staggered(*index, STAGGER_MS, 0);
    let fill = Animation::fill(skill.level).staggered(*index, STAGGER_MS, FILL_LAG_MS);

    html! {
        <Animated class="card skill-card" animation={card}>
            <div class="skill-header">
                <h3>{skill.name}</h3>
                <span class="skill-level">{format!("{}%", skill.level)}</span>
            </div>
            <div class="skill-track">
                <Animated class={classes!("skill-fill", skill.color.css_class())} animation={fill} />
            </div>
        </Animated>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id={SectionId::Skills.id()} class="page-section tinted">
            <div class="section-inner">
                <SectionHeading title="Skills" />
                <div class="skill-grid">
                    {
                        for SKILLS.iter().enumerate().map(|(index, skill)| html! {
                            <SkillBar key={skill.name} skill={*skill} {index} />
                        })
                    }
                </div>
            </div>
        </section>
    }
}
