use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <div>
                <h1>{"Политика конфиденциальности"}</h1>

                <section>
                    <h2>{"1. Какие данные мы получаем"}</h2>
                    <p>{"Заполняя форму расчета стоимости, вы передаете нам:"}</p>
                    <ul>
                        <li>{"ответы на вопросы о проекте (наличие сайта, сфера деятельности, задача, сроки, бюджет)"}</li>
                        <li>{"предпочтительный способ связи"}</li>
                        <li>{"номер телефона и имя"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"2. Как мы их используем"}</h2>
                    <p>{"Заявка пересылается менеджеру студии в закрытый чат и используется только для того, чтобы связаться с вами и подготовить расчет."}</p>
                    <p>{"Мы не храним заявки в базе данных и не передаем их третьим лицам для рекламы."}</p>
                </section>

                <section>
                    <h2>{"3. Ваши права"}</h2>
                    <p>{"Вы можете попросить удалить переписку по вашей заявке, написав на "}
                        <a href="mailto:info@agency.ru">{"info@agency.ru"}</a>
                    </p>
                </section>

                <Link<Route> to={Route::Home} classes="hero-cta">
                    {"На главную"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                    .legal-content {
                        min-height: 100vh;
                        background: #1a1a1a;
                        padding: 4rem 2rem;
                        color: #fff;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }

                    .legal-content > div {
                        max-width: 800px;
                        padding: 3rem;
                        border-radius: 16px;
                        background: rgba(30, 30, 30, 0.7);
                    }

                    .legal-content section {
                        margin: 1.5rem 0;
                    }

                    .legal-content h2 {
                        color: #FF3D00;
                        font-size: 1.4rem;
                    }

                    .legal-content p, .legal-content li {
                        color: #999;
                        line-height: 1.6;
                    }

                    .legal-content a {
                        color: #FF3D00;
                    }
                "#}
            </style>
        </div>
    }
}
