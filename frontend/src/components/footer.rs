use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let scroll_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer-cta">
            <div class="footer-content">
                <div class="footer-top">
                    <a href="#top" class="footer-logo" onclick={scroll_to_top}>{"студия"}</a>
                    <p class="footer-contact">
                        {"Ваши предложения: "}
                        <a href="mailto:info@agency.ru">{"info@agency.ru"}</a>
                    </p>
                    <div class="footer-links">
                        <a href="#projects">{"Примеры работ"}</a>
                        <a href="#process">{"По шагам. Как все пройдет"}</a>
                        <a href="#pricing">{"Сколько стоит"}</a>
                    </div>
                </div>
                <div class="footer-bottom">
                    <Link<Route> to={Route::Privacy} classes="footer-privacy">
                        {"Политика конфиденциальности"}
                    </Link<Route>>
                    <div class="footer-buttons">
                        <a href="#quiz" class="footer-cta-button">{"Запросить расчет стоимости"}</a>
                    </div>
                    <p class="footer-legal">{format!("© {} Студия", year)}</p>
                </div>
            </div>
        </footer>
    }
}
