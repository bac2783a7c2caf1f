//! Declarative entrance animations.
//!
//! An [`Animation`] says *what* moves: when it starts, the frame it starts
//! from, the frame it settles on, and its timing. The [`Animated`] component
//! is the only thing that knows *how*: it renders the start frame, waits for
//! the trigger (mount or first intersection with the viewport) and then
//! switches to the settled frame, leaving the CSS transition to interpolate.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Delay before a mount animation flips to its settled frame, long enough
/// for the browser to paint the start frame first.
const MOUNT_KICKOFF_MS: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Plays as soon as the element is mounted.
    Mount,
    /// Plays the first time the element scrolls into view, then never again.
    InView,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Ease,
    EaseOut,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::EaseOut => "ease-out",
        }
    }
}

/// A visual state. Offsets are in pixels, `width` in percent of the parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub width: Option<f64>,
}

impl Frame {
    pub const VISIBLE: Frame = Frame {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        width: None,
    };

    pub const HIDDEN: Frame = Frame {
        opacity: 0.0,
        ..Frame::VISIBLE
    };

    pub fn shifted(self, x: f64, y: f64) -> Frame {
        Frame { x, y, ..self }
    }

    pub fn scaled(self, scale: f64) -> Frame {
        Frame { scale, ..self }
    }

    pub fn with_width(self, percent: f64) -> Frame {
        Frame {
            width: Some(percent),
            ..self
        }
    }

    pub fn to_style(&self) -> String {
        let mut style = format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        );
        if let Some(width) = self.width {
            style.push_str(&format!(" width: {}%;", width));
        }
        style
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub trigger: Trigger,
    pub from: Frame,
    pub to: Frame,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Animation {
    pub fn new(trigger: Trigger, from: Frame, to: Frame, duration_ms: u32) -> Self {
        Self {
            trigger,
            from,
            to,
            duration_ms,
            delay_ms: 0,
            easing: Easing::Ease,
        }
    }

    /// Fade in while rising 50px, on first view.
    pub fn rise() -> Self {
        Self::new(Trigger::InView, Frame::HIDDEN.shifted(0.0, 50.0), Frame::VISIBLE, 800)
    }

    pub fn slide_from_left() -> Self {
        Self::new(Trigger::InView, Frame::HIDDEN.shifted(-50.0, 0.0), Frame::VISIBLE, 800)
    }

    pub fn slide_from_right() -> Self {
        Self::new(Trigger::InView, Frame::HIDDEN.shifted(50.0, 0.0), Frame::VISIBLE, 800)
    }

    pub fn fade() -> Self {
        Self::new(Trigger::InView, Frame::HIDDEN, Frame::VISIBLE, 800)
    }

    /// Bar fill growing from nothing to `level` percent.
    pub fn fill(level: u8) -> Self {
        Self::new(
            Trigger::InView,
            Frame::VISIBLE.with_width(0.0),
            Frame::VISIBLE.with_width(f64::from(level.min(100))),
            1000,
        )
    }

    pub fn on_mount(self) -> Self {
        Self {
            trigger: Trigger::Mount,
            ..self
        }
    }

    pub fn duration(self, duration_ms: u32) -> Self {
        Self { duration_ms, ..self }
    }

    pub fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    /// Delays the n-th item of a list by `step_ms` per position, on top of `base_ms`.
    pub fn staggered(self, index: usize, step_ms: u32, base_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay(base_ms.saturating_add(index.saturating_mul(step_ms)))
    }

    pub fn frame(&self, played: bool) -> Frame {
        if played {
            self.to
        } else {
            self.from
        }
    }

    pub fn style(&self, played: bool) -> String {
        format!(
            "{} transition-property: opacity, transform, width; \
             transition-duration: {}ms; transition-delay: {}ms; \
             transition-timing-function: {};",
            self.frame(played).to_style(),
            self.duration_ms,
            self.delay_ms,
            self.easing.css()
        )
    }
}

/// Disconnects its observer when dropped.
struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatch {
    fn once(element: &Element, mut on_visible: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                observer.disconnect();
                on_visible();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.1));
        init.set_root_margin("0px 0px -50px 0px");

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

enum Pending {
    Timer(Timeout),
    Watch(ViewportWatch),
}

#[derive(Properties, PartialEq)]
pub struct AnimatedProps {
    pub animation: Animation,
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Animated)]
pub fn animated(props: &AnimatedProps) -> Html {
    let node = use_node_ref();
    let played = use_state(|| false);

    {
        let node = node.clone();
        let played = played.clone();
        let trigger = props.animation.trigger;
        use_effect_with_deps(
            move |_| {
                let setter = played.setter();
                let pending = match trigger {
                    Trigger::Mount => Some(Pending::Timer(Timeout::new(MOUNT_KICKOFF_MS, move || {
                        setter.set(true)
                    }))),
                    Trigger::InView => {
                        let watch = node
                            .cast::<Element>()
                            .and_then(|element| ViewportWatch::once(&element, move || setter.set(true)));
                        if watch.is_none() {
                            // no observer support: show the content rather than leave it hidden
                            played.set(true);
                        }
                        watch.map(Pending::Watch)
                    }
                };
                move || drop(pending)
            },
            (),
        );
    }

    html! {
        <@{props.tag} ref={node} class={props.class.clone()} style={props.animation.style(*played)}>
            { for props.children.iter() }
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SKILLS;

    #[test]
    fn rise_starts_hidden_and_settles_in_place() {
        let rise = Animation::rise();
        assert_eq!(rise.trigger, Trigger::InView);
        assert_eq!(rise.frame(false).opacity, 0.0);
        assert_eq!(rise.frame(false).y, 50.0);
        assert_eq!(rise.frame(true), Frame::VISIBLE);
    }

    #[test]
    fn style_carries_timing() {
        let style = Animation::fade().duration(600).delay(300).easing(Easing::EaseOut).style(false);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("transition-duration: 600ms;"));
        assert!(style.contains("transition-delay: 300ms;"));
        assert!(style.contains("transition-timing-function: ease-out;"));
    }

    #[test]
    fn settled_fill_width_matches_each_skill_level() {
        for skill in SKILLS {
            let fill = Animation::fill(skill.level);
            assert_eq!(fill.frame(false).width, Some(0.0));
            assert_eq!(fill.frame(true).width, Some(f64::from(skill.level)));
            assert!(fill.style(true).contains(&format!("width: {}%;", skill.level)));
        }
        assert!(Animation::fill(30).style(true).contains("width: 30%;"));
        assert!(Animation::fill(98).style(true).contains("width: 98%;"));
    }

    #[test]
    fn fill_never_exceeds_full_width() {
        assert_eq!(Animation::fill(250).to.width, Some(100.0));
    }

    #[test]
    fn stagger_adds_per_index_delay() {
        assert_eq!(Animation::rise().staggered(0, 100, 200).delay_ms, 200);
        assert_eq!(Animation::rise().staggered(3, 100, 200).delay_ms, 500);
        assert_eq!(Animation::rise().staggered(usize::MAX, 100, 0).delay_ms, u32::MAX);
    }

    #[test]
    fn on_mount_keeps_frames() {
        let anim = Animation::rise().on_mount();
        assert_eq!(anim.trigger, Trigger::Mount);
        assert_eq!(anim.from, Animation::rise().from);
    }

    #[test]
    fn frame_style_formats_transform() {
        let style = Frame::HIDDEN.scaled(0.5).to_style();
        assert_eq!(style, "opacity: 0; transform: translate(0px, 0px) scale(0.5);");
    }
}
