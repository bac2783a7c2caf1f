use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod animation;
mod content;
mod scroll;
mod section;
mod state;
mod pages {
    pub mod portfolio;
    pub mod not_found;
}
mod components {
    pub mod nav;
    pub mod hero;
    pub mod about;
    pub mod skills;
    pub mod contact;
    pub mod footer;
}

use pages::{
    portfolio::Portfolio,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
