use yew::prelude::*;
use web_sys::MouseEvent;

use crate::animation::{Animated, Animation, Easing, Frame, Trigger};
use crate::config;
use crate::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Parallax shift in percent, see `scroll::parallax_offset`.
    pub parallax: f64,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let go_to = |section: SectionId| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    let avatar = Animation::new(Trigger::Mount, Frame::HIDDEN.scaled(0.5), Frame::VISIBLE, 1000)
        .easing(Easing::EaseOut);
    let heading = Animation::rise().on_mount().duration(1000).delay(200);
    let subtitle = heading.delay(400);
    let actions = heading.delay(600);

    html! {
        <section id={SectionId::Home.id()} class="hero">
            <div class="hero-backdrop"></div>

            <div class="hero-content" style={format!("transform: translateY({}%);", props.parallax)}>
                <Animated class="hero-avatar" animation={avatar}>
                    // a missing file leaves the browser's broken-image placeholder
                    <img src={config::profile_image_src()} alt="프로필" />
                </Animated>

                <Animated tag="h1" class="hero-title" animation={heading}>
                    {"안녕하세요"}
                </Animated>

                <Animated tag="p" class="hero-subtitle" animation={subtitle}>
                    {"꿈을 코드로 만드는 "}
                    <span class="gradient-text">{"프론트엔드 개발자"}</span>
                    {" 정소리입니다"}
                </Animated>

                <Animated class="hero-actions" animation={actions}>
                    <button class="cta-primary" onclick={go_to(SectionId::About)}>
                        {"더 알아보기"}
                    </button>
                    <button class="cta-secondary" onclick={go_to(SectionId::Contact)}>
                        {"연락하기"}
                    </button>
                </Animated>
            </div>

            <div class="scroll-hint">
                <div class="scroll-hint-dot"></div>
            </div>
        </section>
    }
}
