use log::{debug, info};
use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, nav::NavBar, skills::Skills,
};
use crate::config::SCROLL_PROBE_OFFSET;
use crate::scroll::{measure_sections, parallax_offset, read_scroll, scroll_to_section, ScrollListener};
use crate::section::{section_at, SectionId};
use crate::state::{UiAction, UiState};

/// Desktop links from 768px up, burger menu below.
const PAGE_STYLES: &str = r#"
    .portfolio {
        background: #000;
        color: #fff;
        min-height: 100vh;
        overflow-x: hidden;
        font-family: system-ui, -apple-system, "Apple SD Gothic Neo", "Noto Sans KR", sans-serif;
    }

    button {
        font: inherit;
        color: inherit;
        background: none;
        border: none;
        cursor: pointer;
    }

    .gradient-text,
    .nav-logo {
        background: linear-gradient(to right, #c084fc, #f472b6);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }

    /* Navigation */
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(0, 0, 0, 0.8);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #1f2937;
    }

    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .nav-logo {
        font-size: 1.5rem;
        font-weight: 700;
        transition: transform 0.2s ease;
    }

    .nav-logo:hover {
        transform: scale(1.05);
    }

    .nav-links {
        display: flex;
        gap: 2rem;
    }

    .nav-link {
        text-transform: capitalize;
        color: #d1d5db;
        transition: color 0.3s ease, transform 0.2s ease;
    }

    .nav-link:hover {
        color: #fff;
        transform: scale(1.1);
    }

    .nav-link:active {
        transform: scale(0.95);
    }

    .nav-link.active {
        color: #c084fc;
    }

    .burger-menu {
        display: none;
        width: 1.5rem;
        height: 1.5rem;
        flex-direction: column;
        justify-content: center;
        align-items: center;
    }

    .burger-menu span {
        display: block;
        width: 1.5rem;
        height: 2px;
        background: #fff;
        transition: all 0.3s ease;
    }

    .burger-menu span + span {
        margin-top: 0.25rem;
    }

    .burger-menu.open span:nth-child(1) {
        transform: translateY(6px) rotate(45deg);
    }

    .burger-menu.open span:nth-child(2) {
        opacity: 0;
    }

    .burger-menu.open span:nth-child(3) {
        transform: translateY(-6px) rotate(-45deg);
    }

    .mobile-panel {
        display: none;
        max-height: 0;
        opacity: 0;
        overflow: hidden;
        background: rgba(0, 0, 0, 0.95);
        transition: max-height 0.3s ease, opacity 0.3s ease;
    }

    .mobile-panel.open {
        max-height: 20rem;
        opacity: 1;
    }

    .mobile-panel-inner {
        padding: 1rem 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }

    .mobile-link {
        text-align: left;
        text-transform: capitalize;
        color: #d1d5db;
        transition: color 0.3s ease;
    }

    .mobile-link:hover {
        color: #fff;
    }

    /* Hero */
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        position: relative;
        overflow: hidden;
    }

    .hero-backdrop {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom right, rgba(88, 28, 135, 0.2), #000, rgba(131, 24, 67, 0.2));
    }

    .hero-content {
        position: relative;
        z-index: 10;
        text-align: center;
        padding: 0 1.5rem;
    }

    .hero-avatar {
        margin-bottom: 2rem;
    }

    .hero-avatar img {
        width: 8rem;
        height: 8rem;
        object-fit: cover;
        border-radius: 9999px;
        margin: 0 auto 2rem;
        display: block;
    }

    .hero-title {
        font-size: 4.5rem;
        font-weight: 300;
        margin: 0 0 1.5rem;
    }

    .hero-subtitle {
        font-size: 1.5rem;
        color: #d1d5db;
        max-width: 42rem;
        margin: 0 auto 2rem;
    }

    .hero-actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
    }

    .cta-primary,
    .cta-secondary,
    .submit-button {
        padding: 0.75rem 2rem;
        border-radius: 9999px;
        font-weight: 500;
        transition: all 0.3s ease;
    }

    .cta-primary,
    .submit-button {
        background: linear-gradient(to right, #a855f7, #ec4899);
    }

    .cta-primary:hover {
        transform: scale(1.05);
        box-shadow: 0 0 25px rgba(168, 85, 247, 0.4);
    }

    .cta-secondary {
        border: 1px solid #4b5563;
    }

    .cta-secondary:hover {
        transform: scale(1.05);
        border-color: #c084fc;
    }

    .cta-primary:active,
    .cta-secondary:active {
        transform: scale(0.95);
    }

    .scroll-hint {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        width: 1.5rem;
        height: 2.5rem;
        border: 2px solid #4b5563;
        border-radius: 9999px;
        display: flex;
        justify-content: center;
        animation: bob 2s ease-in-out infinite;
    }

    .scroll-hint-dot {
        width: 0.25rem;
        height: 0.75rem;
        margin-top: 0.5rem;
        background: #4b5563;
        border-radius: 9999px;
    }

    @keyframes bob {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, 10px); }
    }

    /* Sections */
    .page-section {
        padding: 5rem 1.5rem;
    }

    .page-section.tinted {
        background: rgba(17, 24, 39, 0.3);
    }

    .section-inner {
        max-width: 56rem;
        margin: 0 auto;
    }

    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }

    .section-heading h2 {
        font-size: 3rem;
        font-weight: 300;
        margin: 0 0 1.5rem;
    }

    .heading-rule {
        width: 5rem;
        height: 0.25rem;
        margin: 0 auto;
        background: linear-gradient(to right, #c084fc, #f472b6);
    }

    .two-columns {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }

    .column-title {
        font-size: 1.5rem;
        font-weight: 300;
        color: #c084fc;
        margin: 0 0 1.5rem;
    }

    .body-text {
        color: #d1d5db;
        line-height: 1.7;
        margin: 0 0 1.5rem;
    }

    .chips {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }

    .chip {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.875rem;
    }

    .chip-purple { background: rgba(168, 85, 247, 0.2); color: #d8b4fe; }
    .chip-pink { background: rgba(236, 72, 153, 0.2); color: #f9a8d4; }
    .chip-blue { background: rgba(59, 130, 246, 0.2); color: #93c5fd; }

    .card {
        background: rgba(17, 24, 39, 0.5);
        padding: 1.5rem;
        border-radius: 1rem;
        border: 1px solid #1f2937;
    }

    .fact-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }

    .card h4 {
        font-size: 1.25rem;
        font-weight: 500;
        margin: 0 0 0.5rem;
    }

    .card p {
        color: #d1d5db;
        margin: 0;
    }

    /* Skills */
    .skill-grid {
        display: grid;
        gap: 1.5rem;
    }

    .skill-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 0.5rem;
    }

    .skill-header h3 {
        font-size: 1.125rem;
        font-weight: 500;
        margin: 0;
    }

    .skill-level {
        color: #9ca3af;
    }

    .skill-track {
        width: 100%;
        height: 0.5rem;
        background: #1f2937;
        border-radius: 9999px;
    }

    .skill-fill {
        height: 0.5rem;
        border-radius: 9999px;
    }

    .fill-orange { background: #f97316; }
    .fill-yellow { background: #eab308; }
    .fill-purple { background: #a855f7; }
    .fill-green { background: #22c55e; }
    .fill-blue { background: #3b82f6; }
    .fill-deep-blue { background: #2563eb; }

    /* Contact */
    .channel-list {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }

    .channel {
        display: flex;
        align-items: center;
        gap: 1rem;
        color: #d1d5db;
        transition: transform 0.2s ease;
    }

    .channel:hover {
        transform: translateX(10px);
    }

    .channel p {
        margin: 0;
    }

    .channel-label {
        font-weight: 500;
    }

    .channel-value {
        font-size: 0.875rem;
    }

    .channel-icon {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
    }

    .accent-purple { background: rgba(168, 85, 247, 0.2); }
    .accent-pink { background: rgba(236, 72, 153, 0.2); }
    .accent-blue { background: rgba(59, 130, 246, 0.2); }

    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding: 2rem;
    }

    .contact-form h3 {
        font-size: 1.25rem;
        font-weight: 500;
        margin: 0 0 0.5rem;
    }

    .contact-form input,
    .contact-form textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem;
        background: #1f2937;
        border: 1px solid #374151;
        border-radius: 0.5rem;
        color: #fff;
        font: inherit;
        transition: border-color 0.3s ease;
    }

    .contact-form textarea {
        resize: none;
    }

    .contact-form input:focus,
    .contact-form textarea:focus {
        border-color: #c084fc;
        outline: none;
    }

    .submit-button {
        width: 100%;
        border-radius: 0.5rem;
    }

    .submit-button:hover {
        transform: scale(1.02);
    }

    .submit-button:active {
        transform: scale(0.98);
    }

    .form-notice {
        padding: 0.75rem;
        border-radius: 0.5rem;
        background: rgba(168, 85, 247, 0.15);
        color: #e9d5ff;
        text-align: center;
    }

    .page-footer {
        padding: 2rem 1.5rem;
        border-top: 1px solid #1f2937;
        text-align: center;
        color: #9ca3af;
    }

    @media (max-width: 767px) {
        .nav-links {
            display: none;
        }

        .burger-menu {
            display: flex;
        }

        .mobile-panel {
            display: block;
        }

        .hero-title {
            font-size: 3rem;
        }

        .hero-subtitle {
            font-size: 1.25rem;
        }

        .hero-actions {
            flex-direction: column;
        }

        .section-heading h2 {
            font-size: 2.25rem;
        }

        .two-columns {
            grid-template-columns: 1fr;
        }
    }
"#;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let ui = use_reducer_eq(UiState::default);
    let parallax = use_state_eq(|| 0.0_f64);

    // Track the current section and hero offset for as long as the page is mounted
    {
        let dispatcher = ui.dispatcher();
        let parallax = parallax.clone();
        use_effect_with_deps(
            move |_| {
                info!("Portfolio mounted");
                let listener = web_sys::window().and_then(|window| {
                    let probe_window = window.clone();
                    ScrollListener::subscribe(window, move || {
                        let Some(sample) = read_scroll(&probe_window) else {
                            return;
                        };
                        let sections = probe_window
                            .document()
                            .map(|document| measure_sections(&document))
                            .unwrap_or_default();
                        dispatcher.dispatch(UiAction::Scrolled(section_at(
                            sample.y,
                            SCROLL_PROBE_OFFSET,
                            &sections,
                        )));
                        parallax.set(parallax_offset(sample.progress));
                    })
                });
                if let Some(listener) = &listener {
                    listener.fire();
                }
                move || drop(listener)
            },
            (),
        );
    }

    use_effect_with_deps(
        |active: &SectionId| {
            debug!("active section: {}", active);
            || ()
        },
        ui.active_section,
    );

    let on_navigate = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |section: SectionId| {
            scroll_to_section(section);
            dispatcher.dispatch(UiAction::Navigated(section));
        })
    };

    let on_toggle_menu = {
        let dispatcher = ui.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(UiAction::ToggleMenu))
    };

    html! {
        <div class="portfolio">
            <NavBar
                active={ui.active_section}
                menu_open={ui.menu_open}
                on_navigate={on_navigate.clone()}
                {on_toggle_menu}
            />
            <Hero parallax={*parallax} {on_navigate} />
            <About />
            <Skills />
            <Contact />
            <Footer />

            <style>{PAGE_STYLES}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_layout_stops_below_768px() {
        assert!(PAGE_STYLES.contains("@media (max-width: 767px)"));
        assert!(!PAGE_STYLES.contains("768px)"));
    }
}
