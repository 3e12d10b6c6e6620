// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form validation and simulated submission.
//!
//! Nothing is sent anywhere. A valid form moves the submit button into a
//! "sending" state, and after a fixed delay the page reports success and
//! resets the form.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::effect::{Effect, ElementId, Mutation};
use crate::time::Duration;

/// Class marking a form group whose label floats above its input.
pub const FOCUSED_CLASS: &str = "focused";

/// Submit button label while the simulated send is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Notification text after a successful send.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// A required contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Sender name.
    Name,
    /// Sender email.
    Email,
    /// Message subject.
    Subject,
    /// Message body.
    Message,
}

impl Field {
    /// Every required field, in form order.
    pub const REQUIRED: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The input's `name` attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// Why a submission was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    /// One or more required fields are empty, in form order.
    MissingFields(Vec<Field>),
    /// The email field is not `local@domain.tld`.
    InvalidEmail,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                f.write_str("Please fill in: ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(field.name())?;
                }
                Ok(())
            }
            Self::InvalidEmail => f.write_str("Please enter a valid email address"),
        }
    }
}

impl core::error::Error for FormError {}

/// Raw field values read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// A message that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Returns the value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Sets the value of the field with input name `name`.
    ///
    /// Returns `false` for names that are not contact fields.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "subject" => &mut self.subject,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Checks required fields, then the email syntax.
    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        let missing: Vec<Field> = Field::REQUIRED
            .into_iter()
            .filter(|&f| self.value(f).is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

/// Accepts `local@domain.tld`: no whitespace, exactly one `@`, and a `.` in
/// the domain with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Any dot works as the separator as long as both sides are non-empty.
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// The submit button and the text span whose label changes while sending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    /// Submit button.
    pub button: ElementId,
    /// Text span inside the submit button.
    pub label: ElementId,
    /// The button label before any submission.
    pub idle_label: String,
}

/// Submit button and form groups touched by a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormElements {
    /// Submit button, if the form has one.
    pub submit: Option<SubmitButton>,
    /// Every `.form-group` wrapper.
    pub groups: Vec<ElementId>,
}

/// Effects putting the submit button into its "sending" state.
#[must_use]
pub fn sending_effects(elements: &FormElements) -> Vec<Effect> {
    let Some(submit) = &elements.submit else {
        return Vec::new();
    };
    alloc::vec![
        Effect::now(
            submit.button,
            Mutation::SetAttribute("disabled", String::new())
        ),
        Effect::now(submit.label, Mutation::SetText(SENDING_LABEL.into())),
        Effect::style(submit.button, "opacity", "0.7"),
    ]
}

/// Effects restoring the button and clearing floating labels after a send.
#[must_use]
pub fn reset_effects(elements: &FormElements) -> Vec<Effect> {
    let mut effects = Vec::new();
    if let Some(submit) = &elements.submit {
        effects.extend([
            Effect::now(submit.button, Mutation::RemoveAttribute("disabled")),
            Effect::now(submit.label, Mutation::SetText(submit.idle_label.clone())),
            Effect::style(submit.button, "opacity", "1"),
        ]);
    }
    effects.extend(
        elements
            .groups
            .iter()
            .map(|&g| Effect::now(g, Mutation::RemoveClass(FOCUSED_CLASS))),
    );
    effects
}

/// Result of [`Submitter::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; show the error and leave the form as is.
    Rejected(FormError),
    /// The simulated send started. Apply `effects`, then call
    /// [`Submitter::complete`] after `complete_after`.
    Sending {
        /// The validated message.
        message: ContactMessage,
        /// Button effects for the sending state.
        effects: Vec<Effect>,
        /// Simulated network delay.
        complete_after: Duration,
    },
    /// A send is already in flight; the submission is ignored.
    Busy,
}

/// Drives the simulated send: idle → sending → idle.
#[derive(Clone, Copy, Debug)]
pub struct Submitter {
    delay: Duration,
    in_flight: bool,
}

impl Submitter {
    /// Creates an idle submitter with the given simulated delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: false,
        }
    }

    /// Whether a simulated send is in flight.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validates `form` and starts the simulated send if it passes.
    pub fn submit(&mut self, form: &ContactForm, elements: &FormElements) -> SubmitOutcome {
        if self.in_flight {
            return SubmitOutcome::Busy;
        }
        match form.validate() {
            Err(err) => SubmitOutcome::Rejected(err),
            Ok(message) => {
                self.in_flight = true;
                SubmitOutcome::Sending {
                    message,
                    effects: sending_effects(elements),
                    complete_after: self.delay,
                }
            }
        }
    }

    /// Finishes the simulated send and returns the reset effects.
    ///
    /// Returns `None` if nothing was in flight. The caller also resets the
    /// form inputs and raises the success notification.
    pub fn complete(&mut self, elements: &FormElements) -> Option<Vec<Effect>> {
        if !self.in_flight {
            return None;
        }
        self.in_flight = false;
        Some(reset_effects(elements))
    }
}

/// Floating label class after an input gains or loses focus.
///
/// Focus always floats the label; blur keeps it only while the input has text.
#[must_use]
pub fn label_effect(group: ElementId, focused: bool, value: &str) -> Effect {
    Effect::now(
        group,
        Mutation::ToggleClass(FOCUSED_CLASS, focused || !value.is_empty()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "a@b.co".into(),
            subject: "Hello".into(),
            message: "Nice site".into(),
        }
    }

    #[test]
    fn complete_form_validates() {
        let msg = filled().validate().unwrap();
        assert_eq!(msg.email, "a@b.co");
    }

    #[test]
    fn missing_fields_listed_in_order() {
        let form = ContactForm {
            subject: "Hi".into(),
            ..ContactForm::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(
            err,
            FormError::MissingFields(alloc::vec![Field::Name, Field::Email, Field::Message])
        );
        assert_eq!(err.to_string(), "Please fill in: name, email, message");
    }

    #[test]
    fn missing_fields_reported_before_email_syntax() {
        let form = ContactForm {
            email: "nope".into(),
            ..ContactForm::default()
        };
        assert!(matches!(form.validate(), Err(FormError::MissingFields(_))));
    }

    #[test]
    fn bad_email_rejected() {
        let form = ContactForm {
            email: "ada@example".into(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, FormError::InvalidEmail);
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn email_syntax() {
        for ok in ["a@b.co", "first.last@sub.example.org", "x@y.z.", "x@.y.z"] {
            assert!(is_valid_email(ok), "{ok} should pass");
        }
        for bad in ["", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.de", "a@b@c.de", "ab.co"] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn set_by_input_name() {
        let mut form = ContactForm::default();
        assert!(form.set("subject", "Hi".into()));
        assert!(!form.set("phone", "123".into()));
        assert_eq!(form.value(Field::Subject), "Hi");
    }

    #[test]
    fn labels_float_while_focused_or_filled() {
        let g = ElementId(4);
        assert_eq!(
            label_effect(g, true, ""),
            Effect::now(g, Mutation::ToggleClass(FOCUSED_CLASS, true))
        );
        assert_eq!(
            label_effect(g, false, ""),
            Effect::now(g, Mutation::ToggleClass(FOCUSED_CLASS, false))
        );
        assert_eq!(
            label_effect(g, false, "Ada"),
            Effect::now(g, Mutation::ToggleClass(FOCUSED_CLASS, true))
        );
    }

    fn elements() -> FormElements {
        FormElements {
            submit: Some(SubmitButton {
                button: ElementId(1),
                label: ElementId(5),
                idle_label: "Send Message".into(),
            }),
            groups: alloc::vec![ElementId(2), ElementId(3)],
        }
    }

    #[test]
    fn submitter_rejects_incomplete_forms() {
        let mut submitter = Submitter::new(Duration::from_millis(1500));
        let outcome = submitter.submit(&ContactForm::default(), &elements());
        assert!(matches!(outcome, SubmitOutcome::Rejected(FormError::MissingFields(_))));
        assert!(!submitter.is_in_flight(), "rejected forms stay unsubmitted");
        assert!(submitter.complete(&elements()).is_none());
    }

    #[test]
    fn submitter_sends_then_resets() {
        let mut submitter = Submitter::new(Duration::from_millis(1500));
        let SubmitOutcome::Sending {
            message,
            complete_after,
            ..
        } = submitter.submit(&filled(), &elements())
        else {
            panic!("valid form should start sending");
        };
        assert_eq!(message.name, "Ada");
        assert_eq!(complete_after, Duration::from_millis(1500));
        assert_eq!(submitter.submit(&filled(), &elements()), SubmitOutcome::Busy);

        let reset = submitter.complete(&elements()).expect("send in flight");
        assert!(!reset.is_empty());
        assert!(!submitter.is_in_flight());
    }

    #[test]
    fn reset_clears_every_group() {
        let elements = elements();
        let effects = reset_effects(&elements);
        assert_eq!(effects.len(), 5);
        assert!(effects.contains(&Effect::now(
            ElementId(3),
            Mutation::RemoveClass(FOCUSED_CLASS)
        )));
        assert!(effects.contains(&Effect::now(
            ElementId(5),
            Mutation::SetText("Send Message".into())
        )));

        let sending = sending_effects(&elements);
        assert!(sending.contains(&Effect::style(ElementId(1), "opacity", "0.7")));
        assert!(sending.contains(&Effect::now(
            ElementId(5),
            Mutation::SetText(SENDING_LABEL.into())
        )));
    }

    #[test]
    fn forms_without_a_button_still_validate_and_send() {
        let elements = FormElements {
            submit: None,
            groups: alloc::vec![ElementId(2)],
        };
        let mut submitter = Submitter::new(Duration::from_millis(1500));
        assert!(matches!(
            submitter.submit(&ContactForm::default(), &elements),
            SubmitOutcome::Rejected(_)
        ));

        let SubmitOutcome::Sending { effects, .. } = submitter.submit(&filled(), &elements) else {
            panic!("valid form should start sending");
        };
        assert!(effects.is_empty(), "no button to disable");
        assert_eq!(
            submitter.complete(&elements),
            Some(alloc::vec![Effect::now(
                ElementId(2),
                Mutation::RemoveClass(FOCUSED_CLASS)
            )])
        );
    }
}
