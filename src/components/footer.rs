use chrono::Datelike;
use yew::prelude::*;

use crate::animation::{Animated, Animation};
use crate::content::OWNER_NAME;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. 꿈을 현실로 만드는 개발자.", year, OWNER_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="page-footer">
            <Animated tag="p" animation={Animation::fade()}>
                {copyright_line(year)}
            </Animated>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_owner_and_year() {
        assert_eq!(copyright_line(2026), "© 2026 정소리. 꿈을 현실로 만드는 개발자.");
    }
}
