//! The contact form and its submission simulator.
//!
//! Submission is a local placeholder: `Idle -> Submitting -> Submitted ->
//! Idle`, with the two fixed delays driven by timer tasks the app spawns.
//! The machine enforces strict sequencing itself. Every timer event
//! carries the epoch of the submission that scheduled it, so an event that
//! arrives after the machine has moved on is dropped instead of mutating
//! a state it no longer belongs to.

use std::time::Duration;

/// Simulated delivery time after submit.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// How long the success panel stays up before the form resets.
pub const SUBMITTED_DISPLAY: Duration = Duration::from_secs(3);

/// Length cap for the single-line fields.
pub const MAX_FIELD_LEN: usize = 120;

/// Length cap for the message body.
pub const MAX_MESSAGE_LEN: usize = 2000;

/// The four required fields, in layout and validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "your.email@example.com",
            FormField::Subject => "What's this about?",
            FormField::Message => "Tell me about your project or just say hello!",
        }
    }
}

/// Which control inside the form owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Submit,
}

impl FormFocus {
    pub fn next(&self) -> FormFocus {
        match self {
            FormFocus::Name => FormFocus::Email,
            FormFocus::Email => FormFocus::Subject,
            FormFocus::Subject => FormFocus::Message,
            FormFocus::Message => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Name,
        }
    }

    pub fn prev(&self) -> FormFocus {
        match self {
            FormFocus::Name => FormFocus::Submit,
            FormFocus::Email => FormFocus::Name,
            FormFocus::Subject => FormFocus::Email,
            FormFocus::Message => FormFocus::Subject,
            FormFocus::Submit => FormFocus::Message,
        }
    }

    pub fn field(&self) -> Option<FormField> {
        match self {
            FormFocus::Name => Some(FormField::Name),
            FormFocus::Email => Some(FormField::Email),
            FormFocus::Subject => Some(FormField::Subject),
            FormFocus::Message => Some(FormField::Message),
            FormFocus::Submit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// The machine moved to `Submitting`; schedule the delivery timer.
    Accepted,
    /// A required field was empty; it has been flagged and focused.
    EmptyField(FormField),
    /// A submission is already in flight (or showing); nothing queued.
    Rejected,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    pub focus: FormFocus,
    state: FormState,
    /// Field flagged by the last failed validation, for field-level
    /// required-input feedback.
    pub flagged: Option<FormField>,
    /// Bumped on every accepted submit; timer events must match.
    epoch: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        ContactForm::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Append a character to the focused field, respecting its length cap.
    /// Editing is frozen while a submission is in flight.
    pub fn insert_char(&mut self, c: char) {
        if self.state != FormState::Idle || c.is_control() {
            return;
        }
        let Some(field) = self.focus.field() else {
            return;
        };
        let cap = match field {
            FormField::Message => MAX_MESSAGE_LEN,
            _ => MAX_FIELD_LEN,
        };
        let target = self.field_mut(field);
        if target.chars().count() < cap {
            target.push(c);
            self.flagged = None;
        }
    }

    /// Insert a line break in the message body.
    pub fn insert_newline(&mut self) {
        if self.state != FormState::Idle || self.focus != FormFocus::Message {
            return;
        }
        if self.message.chars().count() < MAX_MESSAGE_LEN {
            self.message.push('\n');
        }
    }

    pub fn backspace(&mut self) {
        if self.state != FormState::Idle {
            return;
        }
        if let Some(field) = self.focus.field() {
            self.field_mut(field).pop();
        }
    }

    /// Attempt to submit. All four fields must be non-empty; re-entrant
    /// submission is rejected, not queued.
    pub fn submit(&mut self) -> SubmitAttempt {
        if self.state != FormState::Idle {
            return SubmitAttempt::Rejected;
        }
        for field in FormField::ALL {
            if self.field(field).trim().is_empty() {
                self.flagged = Some(field);
                self.focus = match field {
                    FormField::Name => FormFocus::Name,
                    FormField::Email => FormFocus::Email,
                    FormField::Subject => FormFocus::Subject,
                    FormField::Message => FormFocus::Message,
                };
                return SubmitAttempt::EmptyField(field);
            }
        }
        self.flagged = None;
        self.epoch += 1;
        self.state = FormState::Submitting;
        SubmitAttempt::Accepted
    }

    /// The delivery timer fired. Only moves `Submitting -> Submitted`, and
    /// only for the epoch that scheduled it.
    pub fn delivery_complete(&mut self, epoch: u64) -> bool {
        if self.state == FormState::Submitting && self.epoch == epoch {
            self.state = FormState::Submitted;
            true
        } else {
            false
        }
    }

    /// The success-display timer fired. Only moves `Submitted -> Idle`,
    /// clearing the fields on the way back.
    pub fn display_elapsed(&mut self, epoch: u64) -> bool {
        if self.state == FormState::Submitted && self.epoch == epoch {
            self.state = FormState::Idle;
            self.name.clear();
            self.email.clear();
            self.subject.clear();
            self.message.clear();
            self.focus = FormFocus::Name;
            true
        } else {
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}
