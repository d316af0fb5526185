use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::quiz_form::QuizForm;
use crate::components::typewriter::RotatingText;

const HERO_PHRASES: &[&str] = &[
    "Интернет-магазины",
    "Лендинги",
    "Корпоративные сайты",
    "Промо сайты",
    "UX/UI Аудит",
];

struct Project {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Интернет-магазин",
        description: "Современный e-commerce с интеграцией платежей",
        image: "/assets/project-shop.webp",
    },
    Project {
        title: "Корпоративный сайт",
        description: "Многофункциональный портал для бизнеса",
        image: "/assets/project-corporate.webp",
    },
    Project {
        title: "Лендинг страница",
        description: "Высококонверсионная страница для продукта",
        image: "/assets/project-landing.webp",
    },
    Project {
        title: "Мобильное приложение",
        description: "iOS и Android приложение с синхронизацией",
        image: "/assets/project-mobile.webp",
    },
];

const PROCESS_KEYWORDS: &[&str] = &[
    "ТЗ",
    "брифинг",
    "аналитика",
    "roadmap",
    "проектирование",
    "прозрачный процесс работы",
    "коммуникация",
    "осознанность команды",
];

const SERVICES: &[(&str, &str)] = &[
    ("Лендинг", "от 300.000 Р"),
    ("Промо-сайт", "от 300.000 Р"),
    ("Интернет-магазин", "от 400.000 Р"),
    ("Корпоративный сайт", "от 500.000 Р"),
    ("Портал / сервис", "от 650.000 Р"),
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero" id="top">
            <div class="hero-content">
                <h1 class="hero-title">{"мы делаем"}</h1>
                <div class="rotating-text-container">
                    <RotatingText phrases={HERO_PHRASES} class={classes!("hero-accent")} />
                </div>
                <div class="hero-cta-group">
                    <a href="#quiz" class="hero-cta">{"Узнать стоимость"}</a>
                    <a href="#quiz" class="hero-cta secondary">{"Напишите нам, мы онлайн"}</a>
                </div>
            </div>
        </header>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    html! {
        <section class="projects" id="projects">
            <h2>{"Проекты"}</h2>
            <div class="projects-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <div class="project-card">
                        <img src={project.image} alt={project.title} loading="lazy" />
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <section class="process" id="process">
            <h2>{"Делаем сложное понятным"}</h2>
            <p>
                {"Мы всегда берем на себя ответственность за конечный результат. \
                  Вы оцените нашу проактивность и готовность оперативно реагировать на изменения. \
                  Без бюрократизма. С доверием друг к другу."}
            </p>
            <div class="process-keywords">
                { for PROCESS_KEYWORDS.iter().map(|word| html! {
                    <span class="process-keyword">{*word}</span>
                }) }
            </div>
        </section>
    }
}

#[function_component(ServicesPricing)]
fn services_pricing() -> Html {
    html! {
        <section class="pricing" id="pricing">
            <h2>{"Сколько стоит"}</h2>
            <ul class="pricing-list">
                { for SERVICES.iter().map(|(name, price)| html! {
                    <li class="pricing-row">
                        <span class="pricing-name">{*name}</span>
                        <span class="pricing-price">{*price}</span>
                    </li>
                }) }
            </ul>
            <a href="#quiz" class="hero-cta">{"Рассчитать мой проект"}</a>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Header />
            <main>
                <Hero />
                <Projects />
                <Process />
                <ServicesPricing />
                <QuizForm />
                <Footer />
            </main>
            <style>
                {r#"
                    :root {
                        --accent: #FF3D00;
                        --background: #0f0f0f;
                        --foreground: #ffffff;
                        --muted: #1a1a1a;
                        --muted-foreground: #9a9a9a;
                    }

                    [data-theme="light"] {
                        --background: #f6f6f6;
                        --foreground: #111111;
                        --muted: #ffffff;
                        --muted-foreground: #555555;
                    }

                    body {
                        margin: 0;
                        background: var(--background);
                        color: var(--foreground);
                        font-family: system-ui, -apple-system, sans-serif;
                    }

                    .top-nav {
                        position: absolute;
                        top: 0;
                        left: 1rem;
                        right: 1rem;
                        z-index: 1000;
                        background: var(--muted);
                        border-radius: 0 0 2rem 2rem;
                    }

                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 5rem;
                        padding: 0 2rem;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 1.5rem;
                        color: var(--foreground);
                        text-decoration: none;
                    }

                    .nav-logo-mark {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 1rem;
                        background: var(--accent);
                    }

                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                    }

                    .nav-link {
                        color: var(--muted-foreground);
                        text-decoration: none;
                        font-size: 1.1rem;
                    }

                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        flex-direction: column;
                        gap: 4px;
                    }

                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: var(--foreground);
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-right {
                            display: none;
                        }

                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 5rem;
                            left: 0;
                            right: 0;
                            padding: 1rem;
                            background: var(--muted);
                        }
                    }

                    .hero {
                        padding: 9rem 2rem 3rem;
                    }

                    .hero-title, .rotating-text-container {
                        font-size: clamp(2rem, 6vw, 5rem);
                        font-weight: 900;
                        margin: 0;
                    }

                    .rotating-text-container {
                        min-height: 1.3em;
                    }

                    .hero-accent {
                        color: var(--accent);
                    }

                    .caret {
                        margin-left: 0.25rem;
                        animation: blink 0.8s infinite alternate;
                    }

                    .rotating-text.deleting .caret {
                        animation: none;
                    }

                    @keyframes blink {
                        from { opacity: 1; }
                        to { opacity: 0; }
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: flex-end;
                        margin-top: 6rem;
                        flex-wrap: wrap;
                    }

                    .hero-cta {
                        display: inline-block;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        font-weight: 700;
                        background: var(--accent);
                        color: #fff;
                        text-decoration: none;
                    }

                    .hero-cta.secondary {
                        background: transparent;
                        border: 2px solid var(--accent);
                        color: var(--accent);
                    }

                    .projects, .process, .pricing {
                        margin: 2rem 1rem;
                        padding: 3rem 2rem;
                        border-radius: 2rem;
                        background: var(--muted);
                    }

                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }

                    .project-card img {
                        width: 100%;
                        border-radius: 1rem;
                    }

                    .process-keywords {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }

                    .process-keyword {
                        padding: 0.5rem 1.25rem;
                        border: 1px solid var(--muted-foreground);
                        border-radius: 999px;
                    }

                    .pricing-list {
                        list-style: none;
                        padding: 0;
                        margin-bottom: 2rem;
                    }

                    .pricing-row {
                        display: flex;
                        justify-content: space-between;
                        padding: 1.25rem 0;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 1.3rem;
                    }

                    .pricing-price {
                        color: var(--accent);
                        font-weight: 700;
                    }

                    .quiz-section {
                        padding: 5rem 1rem;
                    }

                    .quiz-card {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        min-height: 600px;
                        padding: 3rem;
                        border-radius: 1rem;
                        background: var(--muted);
                    }

                    @media (max-width: 1024px) {
                        .quiz-card {
                            grid-template-columns: 1fr;
                        }
                    }

                    .quiz-intro {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 3rem;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, #ea580c, #9a3412);
                        color: #fff;
                        text-align: center;
                    }

                    .quiz-intro h2 {
                        font-size: clamp(2rem, 4vw, 4rem);
                    }

                    .quiz-separator {
                        border-top: 1px solid #d1d5db;
                        margin: 2rem 0;
                    }

                    .quiz-step-title {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .quiz-progress {
                        color: var(--muted-foreground);
                    }

                    .quiz-choices {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .quiz-choice {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }

                    .quiz-select, .quiz-textarea, .quiz-input, .quiz-phone input {
                        width: 100%;
                        padding: 1rem;
                        font-size: 1.1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                        background: #fff;
                        color: #111;
                        box-sizing: border-box;
                    }

                    .quiz-textarea {
                        height: 8rem;
                        resize: none;
                    }

                    .quiz-phone {
                        display: flex;
                        margin-bottom: 1.5rem;
                    }

                    .quiz-phone-prefix {
                        display: flex;
                        align-items: center;
                        padding: 0 1rem;
                        border: 1px solid #d1d5db;
                        border-right: none;
                        border-radius: 0.5rem 0 0 0.5rem;
                        background: #f9fafb;
                        color: #111;
                    }

                    .quiz-nav {
                        display: flex;
                        justify-content: space-between;
                        padding-top: 1.5rem;
                    }

                    .quiz-back {
                        background: none;
                        border: none;
                        color: var(--muted-foreground);
                        font-size: 1rem;
                        cursor: pointer;
                    }

                    .quiz-forward {
                        margin-left: auto;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: var(--accent);
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }

                    .quiz-forward.disabled {
                        background: #d1d5db;
                        cursor: not-allowed;
                    }

                    .quiz-modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                    }

                    .quiz-modal {
                        max-width: 28rem;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #fff;
                        color: #111;
                        text-align: center;
                    }

                    .quiz-modal-icon {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 50%;
                        background: #dcfce7;
                        color: #16a34a;
                        font-size: 2.5rem;
                        line-height: 5rem;
                    }

                    .quiz-modal-close {
                        width: 100%;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: var(--accent);
                        color: #fff;
                        cursor: pointer;
                    }

                    .footer-cta {
                        margin: 4rem 0.5rem 1rem;
                        padding: 4rem;
                        border-radius: 1.5rem;
                        background: #1a1a1a;
                        color: #d1d5db;
                    }

                    .footer-top, .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .footer-bottom {
                        padding-top: 2rem;
                    }

                    .footer-logo {
                        font-size: 2rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }

                    .footer-cta a {
                        color: inherit;
                    }

                    .footer-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .footer-cta-button {
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.75rem;
                        background: var(--accent);
                        color: #fff !important;
                        text-decoration: none;
                    }
                "#}
            </style>
        </div>
    }
}
