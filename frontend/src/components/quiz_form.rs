use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::quiz::flow::{Advance, QuizField, QuizFlow, Step, QUESTION_COUNT};
use crate::quiz::relay::{HttpLeadSender, LeadSender, RelayResult};

type Choices = &'static [(&'static str, &'static str)];

const EXISTING_SITE_CHOICES: Choices = &[
    ("existing", "Есть сайт"),
    ("new", "Нужно создать сайт с нуля"),
];

const ACTIVITY_CHOICES: Choices = &[
    ("construction", "Строительство"),
    ("production", "Производство"),
    ("it", "IT"),
    ("medicine", "Медицина"),
    ("services", "Сфера услуг"),
    ("infobusiness", "Инфобизнес и реклама"),
    ("events", "Общественные мероприятия"),
    ("other", "Другое"),
];

const SPEED_CHOICES: Choices = &[
    ("no", "Нет"),
    ("1month", "Запуск через месяц"),
    ("2-3months", "Запуск через 2-3 месяца"),
    ("accelerated", "Нужна ускоренная разработка"),
];

const BUDGET_CHOICES: Choices = &[
    ("300-500", "300.000 - 500.000 ₽"),
    ("500-700", "500.000 - 700.000 ₽"),
    ("700-1000", "700.000 - 1.000.000 ₽"),
    ("1000+", "1.000.000 ₽ +"),
];

const CONTACT_CHOICES: Choices = &[
    ("telegram", "Telegram"),
    ("whatsapp", "WhatsApp"),
    ("phone", "Телефон"),
    ("email", "Email"),
];

const FAILURE_NOTICE: &str = "Произошла ошибка. Попробуйте еще раз.";

pub enum QuizMsg {
    SetField(QuizField, String),
    Next,
    Back,
    Submit,
    Relayed(RelayResult),
    CloseModal,
}

pub struct QuizForm {
    flow: QuizFlow,
    sending: bool,
    show_success: bool,
}

impl Component for QuizForm {
    type Message = QuizMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: QuizFlow::new(),
            sending: false,
            show_success: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QuizMsg::SetField(_, _) | QuizMsg::Back if self.sending => false,
            QuizMsg::SetField(field, value) => {
                self.flow.set_field(field, value);
                true
            }
            QuizMsg::Next => match self.flow.advance() {
                Advance::Moved(step) => {
                    log::debug!("Quiz moved to step {}", step.number());
                    true
                }
                Advance::Blocked => false,
                Advance::Submit(message) => self.relay(ctx, message),
            },
            QuizMsg::Back => self.flow.retreat().is_some(),
            QuizMsg::Submit => match self.flow.begin_submit() {
                Ok(message) => self.relay(ctx, message),
                Err(e) => {
                    log::warn!("Quiz not submitted: {}", e);
                    false
                }
            },
            QuizMsg::Relayed(result) => {
                self.sending = false;
                self.flow.finish_submit(&result);
                match result {
                    Ok(()) => {
                        log::info!("Lead sent");
                        self.show_success = true;
                    }
                    Err(e) => {
                        log::error!("Error sending lead: {}", e);
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(FAILURE_NOTICE);
                        }
                    }
                }
                true
            }
            QuizMsg::CloseModal => {
                // The sent lead is not kept around for a second request.
                self.show_success = false;
                self.flow.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let step = self.flow.step();
        let valid = self.flow.is_current_step_valid();
        let submitted = self.flow.is_submitted();

        let label = match step {
            Step::Budget => "Получить расчет",
            Step::Contact => "Получить расчет стоимости",
            _ => "Далее",
        };
        let forward = ctx.link().callback(move |_: MouseEvent| {
            if step == Step::Contact {
                QuizMsg::Submit
            } else {
                QuizMsg::Next
            }
        });
        let back = ctx.link().callback(|_: MouseEvent| QuizMsg::Back);

        html! {
            <section id="quiz" class="quiz-section">
                <div class="quiz-card">
                    <div class="quiz-intro">
                        <h2>{"Узнайте стоимость разработки сайта для Вашего проекта"}</h2>
                    </div>
                    <div class="quiz-body">
                        <div class="quiz-header">
                            <h3>{"Ответьте на 5 коротких вопросов"}</h3>
                            <p>{"Это сократит время коммуникации и увеличит точность расчета"}</p>
                        </div>
                        <div class="quiz-separator"></div>
                        <div class="quiz-step" key={step.number().to_string()}>
                            { self.render_step(ctx, step) }
                        </div>
                        <div class="quiz-nav">
                            if step.prev().is_some() && !submitted {
                                <button class="quiz-back" disabled={self.sending} onclick={back}>{"Назад"}</button>
                            }
                            <button
                                class={classes!("quiz-forward", (!valid || self.sending).then(|| "disabled"))}
                                disabled={!valid || self.sending || submitted}
                                onclick={forward}
                            >
                                { if self.sending { "Отправляем..." } else { label } }
                            </button>
                        </div>
                    </div>
                </div>
                if self.show_success {
                    { self.render_success(ctx) }
                }
            </section>
        }
    }
}

impl QuizForm {
    fn relay(&mut self, ctx: &Context<Self>, message: String) -> bool {
        self.sending = true;
        ctx.link().send_future(async move {
            QuizMsg::Relayed(HttpLeadSender.send(&message).await)
        });
        true
    }

    fn step_title(step: Step, title: &'static str) -> Html {
        html! {
            <div class="quiz-step-title">
                <h3>{title}</h3>
                if step.is_question() {
                    <div class="quiz-progress">{format!("{}/{}", step.number(), QUESTION_COUNT)}</div>
                }
            </div>
        }
    }

    fn render_step(&self, ctx: &Context<Self>, step: Step) -> Html {
        match step {
            Step::ExistingSite => html! {
                <>
                    { Self::step_title(step, "Есть ли действующий сайт или нужно создать его с нуля?") }
                    { self.render_choices(ctx, QuizField::ExistingSite, "existingSite", EXISTING_SITE_CHOICES) }
                </>
            },
            Step::FieldOfActivity => html! {
                <>
                    { Self::step_title(step, "Ваша сфера деятельности:") }
                    { self.render_select(ctx, QuizField::FieldOfActivity, "Выберите сферу деятельности", ACTIVITY_CHOICES) }
                </>
            },
            Step::KeyTask => {
                let oninput = ctx.link().callback(|e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    QuizMsg::SetField(QuizField::KeyTask, input.value())
                });
                html! {
                    <>
                        { Self::step_title(step, "Ключевая задача на проект") }
                        <textarea
                            class="quiz-textarea"
                            placeholder="Запишите задачу в поле ниже"
                            value={self.flow.fields().key_task.clone()}
                            oninput={oninput}
                        />
                    </>
                }
            }
            Step::DevelopmentSpeed => html! {
                <>
                    { Self::step_title(step, "Есть ли требования к скорости разработки?") }
                    { self.render_choices(ctx, QuizField::DevelopmentSpeed, "developmentSpeed", SPEED_CHOICES) }
                </>
            },
            Step::Budget => html! {
                <>
                    { Self::step_title(step, "Ваш бюджет на разработку сайта") }
                    { self.render_choices(ctx, QuizField::Budget, "budget", BUDGET_CHOICES) }
                </>
            },
            Step::Contact => self.render_contact(ctx),
        }
    }

    fn render_choices(&self, ctx: &Context<Self>, field: QuizField, name: &'static str, choices: Choices) -> Html {
        let selected = self.flow.fields().get(field);
        html! {
            <div class="quiz-choices">
                { for choices.iter().map(|(value, label)| {
                    let onchange = ctx.link().callback(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        QuizMsg::SetField(field, input.value())
                    });
                    html! {
                        <label class="quiz-choice">
                            <input
                                type="radio"
                                name={name}
                                value={*value}
                                checked={selected == *value}
                                onchange={onchange}
                            />
                            <span>{*label}</span>
                        </label>
                    }
                }) }
            </div>
        }
    }

    fn render_select(&self, ctx: &Context<Self>, field: QuizField, placeholder: &'static str, choices: Choices) -> Html {
        let selected = self.flow.fields().get(field);
        let onchange = ctx.link().callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            QuizMsg::SetField(field, select.value())
        });
        html! {
            <select class="quiz-select" disabled={self.sending} onchange={onchange}>
                <option value="" selected={selected.is_empty()}>{placeholder}</option>
                { for choices.iter().map(|(value, label)| html! {
                    <option value={*value} selected={selected == *value}>{*label}</option>
                }) }
            </select>
        }
    }

    fn render_contact(&self, ctx: &Context<Self>) -> Html {
        let fields = self.flow.fields();
        let on_phone = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            QuizMsg::SetField(QuizField::PhoneNumber, input.value())
        });
        let on_name = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            QuizMsg::SetField(QuizField::Name, input.value())
        });

        html! {
            <div class="quiz-contact">
                <div class="quiz-step-title">
                    <h3>{"ВЗЯЛИ ИНФОРМАЦИЮ В РАБОТУ"}</h3>
                    <p>{"Напоминаем, что мы свяжемся повторно, для уточнения деталей"}</p>
                </div>
                <h4>{"Как будет удобнее связаться для получения информации?"}</h4>
                { self.render_select(ctx, QuizField::ContactMethod, "Выберите способ связи", CONTACT_CHOICES) }
                <label class="quiz-label">{"Номер телефона, к которому привязан мессенджер"}</label>
                <div class="quiz-phone">
                    <span class="quiz-phone-prefix">{"🇷🇺 +7"}</span>
                    <input
                        type="tel"
                        placeholder="(000) 000-00-00"
                        value={fields.phone_number.clone()}
                        disabled={self.sending}
                        oninput={on_phone}
                    />
                </div>
                <input
                    type="text"
                    class="quiz-input"
                    placeholder="Ваше имя"
                    value={fields.name.clone()}
                    disabled={self.sending}
                    oninput={on_name}
                />
            </div>
        }
    }

    fn render_success(&self, ctx: &Context<Self>) -> Html {
        let close = ctx.link().callback(|_: MouseEvent| QuizMsg::CloseModal);
        html! {
            <div class="quiz-modal-backdrop" onclick={close.clone()}>
                <div class="quiz-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="quiz-modal-icon">{"✓"}</div>
                    <h3>{"Спасибо!"}</h3>
                    <p>{"Мы свяжемся с вами в ближайшее время для обсуждения деталей вашего проекта."}</p>
                    <button class="quiz-modal-close" onclick={close}>{"Закрыть"}</button>
                </div>
            </div>
        }
    }
}
