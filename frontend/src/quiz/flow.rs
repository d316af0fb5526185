//! Step sequencing for the "get a quote" quiz.
//!
//! The flow owns every answer the visitor gives and decides when the form
//! may move forward. Moving back is always allowed. Nothing leaves the
//! browser until the contact step is complete and [`QuizFlow::submit`]
//! (or [`QuizFlow::begin_submit`]) is called.

use thiserror::Error;

use crate::quiz::relay::{LeadSender, RelayResult};

/// Number of question screens shown with a "n/5" counter. The contact
/// screen comes after them and has no counter.
pub const QUESTION_COUNT: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    ExistingSite,
    FieldOfActivity,
    KeyTask,
    DevelopmentSpeed,
    Budget,
    Contact,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::ExistingSite,
        Step::FieldOfActivity,
        Step::KeyTask,
        Step::DevelopmentSpeed,
        Step::Budget,
        Step::Contact,
    ];

    pub fn number(self) -> u8 {
        match self {
            Step::ExistingSite => 1,
            Step::FieldOfActivity => 2,
            Step::KeyTask => 3,
            Step::DevelopmentSpeed => 4,
            Step::Budget => 5,
            Step::Contact => 6,
        }
    }

    pub fn from_number(number: u8) -> Option<Step> {
        Step::ALL.iter().copied().find(|s| s.number() == number)
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }

    pub fn is_question(self) -> bool {
        self.number() <= QUESTION_COUNT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizField {
    ExistingSite,
    FieldOfActivity,
    KeyTask,
    DevelopmentSpeed,
    Budget,
    ContactMethod,
    PhoneNumber,
    Name,
}

impl QuizField {
    /// Template order of the lead message.
    pub const ALL: [QuizField; 8] = [
        QuizField::ExistingSite,
        QuizField::FieldOfActivity,
        QuizField::KeyTask,
        QuizField::DevelopmentSpeed,
        QuizField::Budget,
        QuizField::ContactMethod,
        QuizField::PhoneNumber,
        QuizField::Name,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuizField::ExistingSite => "Есть ли сайт",
            QuizField::FieldOfActivity => "Сфера деятельности",
            QuizField::KeyTask => "Ключевая задача",
            QuizField::DevelopmentSpeed => "Скорость разработки",
            QuizField::Budget => "Бюджет",
            QuizField::ContactMethod => "Способ связи",
            QuizField::PhoneNumber => "Телефон",
            QuizField::Name => "Имя",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizFields {
    pub existing_site: String,
    pub field_of_activity: String,
    pub key_task: String,
    pub development_speed: String,
    pub budget: String,
    pub contact_method: String,
    pub phone_number: String,
    pub name: String,
}

impl QuizFields {
    pub fn get(&self, field: QuizField) -> &str {
        match field {
            QuizField::ExistingSite => &self.existing_site,
            QuizField::FieldOfActivity => &self.field_of_activity,
            QuizField::KeyTask => &self.key_task,
            QuizField::DevelopmentSpeed => &self.development_speed,
            QuizField::Budget => &self.budget,
            QuizField::ContactMethod => &self.contact_method,
            QuizField::PhoneNumber => &self.phone_number,
            QuizField::Name => &self.name,
        }
    }

    fn slot(&mut self, field: QuizField) -> &mut String {
        match field {
            QuizField::ExistingSite => &mut self.existing_site,
            QuizField::FieldOfActivity => &mut self.field_of_activity,
            QuizField::KeyTask => &mut self.key_task,
            QuizField::DevelopmentSpeed => &mut self.development_speed,
            QuizField::Budget => &mut self.budget,
            QuizField::ContactMethod => &mut self.contact_method,
            QuizField::PhoneNumber => &mut self.phone_number,
            QuizField::Name => &mut self.name,
        }
    }
}

type Validator = fn(&QuizFields) -> bool;

fn has_existing_site(f: &QuizFields) -> bool {
    !f.existing_site.is_empty()
}

fn has_field_of_activity(f: &QuizFields) -> bool {
    !f.field_of_activity.is_empty()
}

fn has_key_task(f: &QuizFields) -> bool {
    !f.key_task.trim().is_empty()
}

fn has_development_speed(f: &QuizFields) -> bool {
    !f.development_speed.is_empty()
}

fn has_budget(f: &QuizFields) -> bool {
    !f.budget.is_empty()
}

fn has_contact_details(f: &QuizFields) -> bool {
    !f.contact_method.is_empty() && !f.phone_number.is_empty() && !f.name.is_empty()
}

/// What each step needs before the visitor may leave it forwards.
const STEP_VALIDATORS: [(Step, Validator); 6] = [
    (Step::ExistingSite, has_existing_site),
    (Step::FieldOfActivity, has_field_of_activity),
    (Step::KeyTask, has_key_task),
    (Step::DevelopmentSpeed, has_development_speed),
    (Step::Budget, has_budget),
    (Step::Contact, has_contact_details),
];

pub fn is_step_valid(step: Step, fields: &QuizFields) -> bool {
    STEP_VALIDATORS
        .iter()
        .find(|(s, _)| *s == step)
        .map(|(_, valid)| valid(fields))
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved(Step),
    /// The current step is incomplete, nothing changed.
    Blocked,
    /// The contact step is complete. Carries the message to relay.
    Submit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("the quiz is at step {0:?} and cannot be submitted yet")]
    NotAtContactStep(Step),
    #[error("contact details are incomplete")]
    IncompleteContact,
    #[error("the quiz has already been submitted")]
    AlreadySubmitted,
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFlow {
    step: Step,
    fields: QuizFields,
    submitted: bool,
    // Set between `begin_submit` and `finish_submit`; answers are frozen.
    pending: bool,
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizFlow {
    pub fn new() -> Self {
        Self {
            step: Step::ExistingSite,
            fields: QuizFields::default(),
            submitted: false,
            pending: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn fields(&self) -> &QuizFields {
        &self.fields
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn is_locked(&self) -> bool {
        self.submitted || self.pending
    }

    pub fn is_current_step_valid(&self) -> bool {
        is_step_valid(self.step, &self.fields)
    }

    /// Overwrites one answer. Ignored while the lead is being sent and
    /// once it has been sent.
    pub fn set_field(&mut self, field: QuizField, value: impl Into<String>) {
        if self.is_locked() {
            return;
        }
        *self.fields.slot(field) = value.into();
    }

    pub fn advance(&mut self) -> Advance {
        if self.is_locked() || !self.is_current_step_valid() {
            return Advance::Blocked;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Advance::Moved(next)
            }
            None => match self.begin_submit() {
                Ok(message) => Advance::Submit(message),
                Err(_) => Advance::Blocked,
            },
        }
    }

    /// Goes back one step without checking the current answers.
    /// Returns `None` on the first step.
    pub fn retreat(&mut self) -> Option<Step> {
        if self.is_locked() {
            return None;
        }
        let prev = self.step.prev()?;
        self.step = prev;
        Some(prev)
    }

    /// Checks that the lead may be sent and renders its message. On
    /// success the answers stay frozen until `finish_submit`.
    pub fn begin_submit(&mut self) -> Result<String, QuizError> {
        if self.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        if self.pending {
            return Err(QuizError::InFlight);
        }
        if self.step != Step::Contact {
            return Err(QuizError::NotAtContactStep(self.step));
        }
        if !self.is_current_step_valid() {
            return Err(QuizError::IncompleteContact);
        }
        self.pending = true;
        Ok(compose_lead_message(&self.fields))
    }

    /// Records the relay outcome of the last `begin_submit`. A failure
    /// unfreezes the answers so the visitor can simply press the button
    /// again.
    pub fn finish_submit(&mut self, result: &RelayResult) {
        if !self.pending {
            return;
        }
        self.pending = false;
        self.submitted = result.is_ok();
    }

    pub async fn submit<S>(&mut self, sender: &S) -> RelayResult
    where
        S: LeadSender + ?Sized,
    {
        let message = self.begin_submit()?;
        let result = sender.send(&message).await;
        self.finish_submit(&result);
        result
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn existing_site_label(value: &str) -> &'static str {
    if value == "existing" {
        "Есть сайт"
    } else {
        "Нужно создать с нуля"
    }
}

/// The relay sends messages in Telegram's HTML parse mode.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn compose_lead_message(fields: &QuizFields) -> String {
    let line = |field: QuizField| {
        let value = match field {
            QuizField::ExistingSite => existing_site_label(&fields.existing_site).to_string(),
            other => escape_html(fields.get(other)),
        };
        format!("• {}: {}\n", field.label(), value)
    };

    let mut message = String::from("🎯 Новая заявка на расчет стоимости сайта:\n\n📋 Информация о проекте:\n");
    for field in &QuizField::ALL[..5] {
        message.push_str(&line(*field));
    }
    message.push_str("\n📞 Контактная информация:\n");
    for field in &QuizField::ALL[5..] {
        message.push_str(&line(*field));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::relay::RelayFailure;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Pretends to be the backend: answers with a fixed HTTP status.
    struct StubSender {
        status: Option<u16>,
        sent: RefCell<Vec<String>>,
    }

    impl StubSender {
        fn answering(status: u16) -> Self {
            Self { status: Some(status), sent: RefCell::new(Vec::new()) }
        }

        fn unreachable() -> Self {
            Self { status: None, sent: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl LeadSender for StubSender {
        async fn send(&self, message: &str) -> RelayResult {
            self.sent.borrow_mut().push(message.to_string());
            match self.status {
                Some(status) if (200..300).contains(&status) => Ok(()),
                Some(status) => Err(RelayFailure::Status(status)),
                None => Err(RelayFailure::Request("connection refused".into())),
            }
        }
    }

    fn answer(flow: &mut QuizFlow, step: Step) {
        match step {
            Step::ExistingSite => flow.set_field(QuizField::ExistingSite, "new"),
            Step::FieldOfActivity => flow.set_field(QuizField::FieldOfActivity, "it"),
            Step::KeyTask => flow.set_field(QuizField::KeyTask, "redesign"),
            Step::DevelopmentSpeed => flow.set_field(QuizField::DevelopmentSpeed, "1month"),
            Step::Budget => flow.set_field(QuizField::Budget, "500-700"),
            Step::Contact => {
                flow.set_field(QuizField::ContactMethod, "telegram");
                flow.set_field(QuizField::PhoneNumber, "9991234567");
                flow.set_field(QuizField::Name, "Ivan");
            }
        }
    }

    fn flow_at_contact_step() -> QuizFlow {
        let mut flow = QuizFlow::new();
        for step in &Step::ALL[..5] {
            answer(&mut flow, *step);
            assert_eq!(flow.advance(), Advance::Moved(step.next().unwrap()));
        }
        flow
    }

    #[test]
    fn starts_empty_on_the_first_step() {
        let flow = QuizFlow::new();
        assert_eq!(flow.step(), Step::ExistingSite);
        assert_eq!(flow.fields(), &QuizFields::default());
        assert!(!flow.is_submitted());
    }

    #[test]
    fn step_numbers_round_trip_and_stay_in_range() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.number() as usize, i + 1);
            assert_eq!(Step::from_number(step.number()), Some(*step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(7), None);
        assert_eq!(Step::ExistingSite.prev(), None);
        assert_eq!(Step::Contact.next(), None);
        assert!(Step::Budget.is_question());
        assert!(!Step::Contact.is_question());
    }

    #[test]
    fn advance_is_blocked_until_the_step_is_answered() {
        let mut flow = QuizFlow::new();
        for step in &Step::ALL[..5] {
            assert_eq!(flow.step(), *step);
            assert_eq!(flow.advance(), Advance::Blocked);
            assert_eq!(flow.step(), *step);

            answer(&mut flow, *step);
            let next = step.next().unwrap();
            assert_eq!(flow.advance(), Advance::Moved(next));
            assert_eq!(flow.step(), next);
        }
    }

    #[test]
    fn key_task_needs_more_than_whitespace() {
        let mut flow = QuizFlow::new();
        answer(&mut flow, Step::ExistingSite);
        flow.advance();
        answer(&mut flow, Step::FieldOfActivity);
        flow.advance();
        assert_eq!(flow.step(), Step::KeyTask);

        flow.set_field(QuizField::KeyTask, "  \n\t ");
        assert_eq!(flow.advance(), Advance::Blocked);
        flow.set_field(QuizField::KeyTask, " landing ");
        assert_eq!(flow.advance(), Advance::Moved(Step::DevelopmentSpeed));
    }

    #[test]
    fn contact_step_needs_all_three_fields() {
        let fields = QuizFields {
            contact_method: "telegram".into(),
            phone_number: "9991234567".into(),
            ..QuizFields::default()
        };
        assert!(!is_step_valid(Step::Contact, &fields));

        let fields = QuizFields { name: "Ivan".into(), ..fields };
        assert!(is_step_valid(Step::Contact, &fields));
    }

    #[test]
    fn every_step_has_a_validator() {
        let empty = QuizFields::default();
        for step in Step::ALL {
            assert!(STEP_VALIDATORS.iter().any(|(s, _)| *s == step));
            assert!(!is_step_valid(step, &empty), "{:?} accepted empty answers", step);
        }
    }

    #[test]
    fn retreat_ignores_validity_and_stops_at_the_first_step() {
        let mut flow = flow_at_contact_step();
        flow.set_field(QuizField::Budget, "");
        flow.set_field(QuizField::KeyTask, "");

        for step in Step::ALL[..5].iter().rev() {
            assert_eq!(flow.retreat(), Some(*step));
            assert_eq!(flow.step(), *step);
        }
        assert_eq!(flow.retreat(), None);
        assert_eq!(flow.step(), Step::ExistingSite);
    }

    #[test]
    fn set_field_never_moves_and_is_idempotent() {
        let mut flow = QuizFlow::new();
        for field in QuizField::ALL {
            flow.set_field(field, "x");
            assert_eq!(flow.step(), Step::ExistingSite);
        }
        let before = flow.clone();
        flow.set_field(QuizField::Name, "x");
        assert_eq!(flow, before);
    }

    #[test]
    fn advance_on_contact_step_asks_for_submission() {
        let mut flow = flow_at_contact_step();
        assert_eq!(flow.advance(), Advance::Blocked);
        answer(&mut flow, Step::Contact);
        match flow.advance() {
            Advance::Submit(message) => assert!(message.contains("Ivan")),
            other => panic!("expected submission, got {:?}", other),
        }
        assert_eq!(flow.step(), Step::Contact);
        assert!(!flow.is_submitted());
        assert!(flow.is_pending());
        assert_eq!(flow.advance(), Advance::Blocked);

        flow.finish_submit(&Ok(()));
        assert!(flow.is_submitted());
    }

    #[test]
    fn message_lists_every_answer_in_template_order() {
        let mut flow = flow_at_contact_step();
        answer(&mut flow, Step::Contact);
        let message = flow.begin_submit().unwrap();

        let expected = "🎯 Новая заявка на расчет стоимости сайта:\n\n\
            📋 Информация о проекте:\n\
            • Есть ли сайт: Нужно создать с нуля\n\
            • Сфера деятельности: it\n\
            • Ключевая задача: redesign\n\
            • Скорость разработки: 1month\n\
            • Бюджет: 500-700\n\
            \n📞 Контактная информация:\n\
            • Способ связи: telegram\n\
            • Телефон: 9991234567\n\
            • Имя: Ivan\n";
        assert_eq!(message, expected);

        let positions: Vec<usize> = ["it", "redesign", "1month", "500-700", "telegram", "9991234567", "Ivan"]
            .iter()
            .map(|v| message.find(&format!(": {}\n", v)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn existing_site_is_rendered_as_a_label() {
        let fields = QuizFields { existing_site: "existing".into(), ..QuizFields::default() };
        assert!(compose_lead_message(&fields).contains("• Есть ли сайт: Есть сайт\n"));
    }

    #[test]
    fn user_text_is_escaped_for_html_parse_mode() {
        let fields = QuizFields {
            key_task: "<b>shop</b> & blog".into(),
            ..QuizFields::default()
        };
        let message = compose_lead_message(&fields);
        assert!(message.contains("• Ключевая задача: &lt;b&gt;shop&lt;/b&gt; &amp; blog\n"));
    }

    #[test]
    fn begin_submit_is_rejected_before_the_contact_step() {
        let mut flow = QuizFlow::new();
        answer(&mut flow, Step::Contact);
        assert_eq!(flow.begin_submit(), Err(QuizError::NotAtContactStep(Step::ExistingSite)));

        let mut flow = flow_at_contact_step();
        assert_eq!(flow.begin_submit(), Err(QuizError::IncompleteContact));
        assert!(!flow.is_pending());
    }

    #[test]
    fn successful_submission_relays_once_and_marks_submitted() {
        let mut flow = flow_at_contact_step();
        answer(&mut flow, Step::Contact);
        let sender = StubSender::answering(200);

        let result = block_on(flow.submit(&sender));

        assert_eq!(result, Ok(()));
        assert!(flow.is_submitted());
        let sent = sender.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], compose_lead_message(flow.fields()));
    }

    #[test]
    fn failed_submission_keeps_everything_for_a_retry() {
        let mut flow = flow_at_contact_step();
        answer(&mut flow, Step::Contact);
        let before = flow.clone();
        let sender = StubSender::answering(500);

        let result = block_on(flow.submit(&sender));

        assert_eq!(result, Err(RelayFailure::Status(500)));
        assert!(!flow.is_submitted());
        assert_eq!(flow.step(), Step::Contact);
        assert_eq!(flow, before);

        // A manual retry sends the same lead again.
        let retry = StubSender::answering(200);
        assert_eq!(block_on(flow.submit(&retry)), Ok(()));
        assert!(flow.is_submitted());
    }

    #[test]
    fn unreachable_backend_is_a_failure() {
        let mut flow = flow_at_contact_step();
        answer(&mut flow, Step::Contact);
        let sender = StubSender::unreachable();

        let result = block_on(flow.submit(&sender));

        assert!(matches!(result, Err(RelayFailure::Request(_))));
        assert!(!flow.is_submitted());
    }

    #[test]
    fn incomplete_contact_never_reaches_the_relay() {
        let mut flow = flow_at_contact_step();
        flow.set_field(QuizField::ContactMethod, "phone");
        let sender = StubSender::answering(200);

        let result = block_on(flow.submit(&sender));

        assert_eq!(result, Err(RelayFailure::Quiz(QuizError::IncompleteContact)));
        assert!(sender.sent.borrow().is_empty());
        assert!(!flow.is_submitted());
    }

    #[test]
    fn submitted_flow_ignores_further_input() {
        let mut flow = flow_at_contact_step();
        answer(&mut flow, Step::Contact);
        block_on(flow.submit(&StubSender::answering(200))).unwrap();
        let done = flow.clone();

        flow.set_field(QuizField::Name, "Someone else");
        assert_eq!(flow.advance(), Advance::Blocked);
        assert_eq!(flow.retreat(), None);
        assert_eq!(flow, done);

        let sender = StubSender::answering(200);
        assert_eq!(
            block_on(flow.submit(&sender)),
            Err(RelayFailure::Quiz(QuizError::AlreadySubmitted))
        );
        assert!(sender.sent.borrow().is_empty());
    }

    #[test]
    fn answers_are_frozen_while_the_lead_is_in_flight() {
        let mut flow = flow_at_contact_step();
        answer(&mut flow, Step::Contact);
        let message = flow.begin_submit().unwrap();
        let frozen = flow.clone();

        assert_eq!(flow.retreat(), None);
        flow.set_field(QuizField::PhoneNumber, "");
        assert_eq!(flow.advance(), Advance::Blocked);
        assert_eq!(flow.begin_submit(), Err(QuizError::InFlight));
        assert_eq!(flow, frozen);
        assert_eq!(message, compose_lead_message(flow.fields()));

        flow.finish_submit(&Ok(()));
        assert!(flow.is_submitted());
        assert!(!flow.is_pending());
        assert_eq!(flow.step(), Step::Contact);
    }

    #[test]
    fn confirmed_success_is_never_dropped() {
        let mut flow = flow_at_contact_step();
        answer(&mut flow, Step::Contact);
        flow.begin_submit().unwrap();

        // Back and edits during the send are ignored, so the reply still lands.
        flow.retreat();
        flow.set_field(QuizField::Name, "");
        flow.finish_submit(&Ok(()));

        assert!(flow.is_submitted());
        assert_eq!(flow.step(), Step::Contact);
        assert_eq!(flow.fields().get(QuizField::Name), "Ivan");
    }

    #[test]
    fn failed_send_unfreezes_the_answers() {
        let mut flow = flow_at_contact_step();
        answer(&mut flow, Step::Contact);
        flow.begin_submit().unwrap();
        flow.finish_submit(&Err(RelayFailure::Status(500)));

        assert!(!flow.is_pending());
        assert!(!flow.is_submitted());
        assert_eq!(flow.retreat(), Some(Step::Budget));
    }

    #[test]
    fn stray_outcome_without_a_send_is_ignored() {
        let mut flow = flow_at_contact_step();
        answer(&mut flow, Step::Contact);
        flow.finish_submit(&Ok(()));
        assert!(!flow.is_submitted());
    }

    #[test]
    fn reset_returns_to_a_fresh_form() {
        let mut flow = flow_at_contact_step();
        answer(&mut flow, Step::Contact);
        block_on(flow.submit(&StubSender::answering(200))).unwrap();
        flow.reset();
        assert_eq!(flow, QuizFlow::new());
    }
}
