use yew::prelude::*;
use web_sys::window;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything that is not "light" falls back to the dark default.
    pub fn parse(value: &str) -> Theme {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

fn saved_theme() -> Option<Theme> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(THEME_KEY).ok())
        .flatten()
        .map(|value| Theme::parse(&value))
}

fn apply_theme(theme: Theme) {
    let Some(window) = window() else { return };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Сколько стоит", "#pricing"),
    ("Проекты", "#projects"),
    ("О нас", "#process"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let theme = use_state(|| Theme::Dark);

    {
        let theme = theme.clone();
        use_effect_with_deps(move |_| {
            if let Some(saved) = saved_theme() {
                apply_theme(saved);
                theme.set(saved);
            }
            || ()
        }, ());
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: Event| {
            let next = theme.toggled();
            apply_theme(next);
            theme.set(next);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = NAV_ITEMS.iter().map(|(label, href)| {
        html! {
            <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
        }
    });

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <a href="#top" class="nav-logo">
                    <span class="nav-logo-mark"></span>
                    {"Студия"}
                </a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for links }
                    <label class="switch" title="Тема">
                        <input
                            type="checkbox"
                            checked={*theme == Theme::Dark}
                            onchange={toggle_theme}
                        />
                        <span class="slider"></span>
                    </label>
                </nav>
            </div>
        </header>
    }
}
