use yew::prelude::*;
use gloo_timers::callback::Timeout;

pub const TYPE_DELAY_MS: u32 = 80;
pub const DELETE_DELAY_MS: u32 = 50;
pub const HOLD_DELAY_MS: u32 = 500;

/// Types a phrase one character at a time, holds it, erases it and moves
/// on to the next phrase. Positions count chars, so Cyrillic text is
/// never cut inside a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    visible: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            visible: 0,
            deleting: false,
        }
    }

    fn current_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    pub fn text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().take(self.visible).collect())
            .unwrap_or_default()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// How long to wait before the next `tick`.
    pub fn delay_ms(&self) -> u32 {
        if self.deleting {
            DELETE_DELAY_MS
        } else if self.visible > 0 && self.visible == self.current_len() {
            TYPE_DELAY_MS + HOLD_DELAY_MS
        } else {
            TYPE_DELAY_MS
        }
    }

    pub fn tick(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        if !self.deleting {
            if self.visible < self.current_len() {
                self.visible += 1;
            } else {
                self.deleting = true;
            }
        } else if self.visible > 0 {
            self.visible -= 1;
        } else {
            self.deleting = false;
            self.index = (self.index + 1) % self.phrases.len();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RotatingTextProps {
    pub phrases: &'static [&'static str],
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(RotatingText)]
pub fn rotating_text(props: &RotatingTextProps) -> Html {
    let writer = use_state(|| Typewriter::new(props.phrases));

    {
        let deps = *writer;
        let writer = writer.clone();
        use_effect_with_deps(
            move |current: &Typewriter| {
                let mut next = *current;
                let timeout = Timeout::new(current.delay_ms(), move || {
                    next.tick();
                    writer.set(next);
                });
                // Dropping the timeout cancels it when the hero unmounts.
                move || drop(timeout)
            },
            deps,
        );
    }

    html! {
        <span class={classes!(
            "rotating-text",
            writer.is_deleting().then(|| "deleting"),
            props.class.clone()
        )}>
            {writer.text()}
            <span class="caret">{"|"}</span>
        </span>
    }
}
