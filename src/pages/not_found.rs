use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"페이지를 찾을 수 없습니다."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"홈으로 돌아가기"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        background: #000;
                        color: #fff;
                        font-family: system-ui, sans-serif;
                    }

                    .not-found h1 {
                        font-size: 4rem;
                        font-weight: 300;
                        margin: 0;
                    }

                    .not-found-link {
                        color: #c084fc;
                    }
                "#}
            </style>
        </div>
    }
}
