//! Checkout flow state machine.

use serde::{Deserialize, Serialize};

use crate::checkout::form::CheckoutForm;
use crate::error::CommerceError;
use crate::money::Money;

/// States of the checkout flow.
///
/// Forward transitions require the current step's fields to validate;
/// backward transitions are unconditional. `Submitting` is not
/// cancellable and `Complete` is terminal for the checkout instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutState {
    /// Step 1: shipping information.
    #[default]
    Shipping,
    /// Step 2: payment details.
    Payment,
    /// Step 3: order review.
    Review,
    /// Payment settle in flight.
    Submitting,
    /// Checkout finished.
    Complete,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Shipping => "shipping",
            CheckoutState::Payment => "payment",
            CheckoutState::Review => "review",
            CheckoutState::Submitting => "submitting",
            CheckoutState::Complete => "complete",
        }
    }

    /// The form step number (1..=3) for the three form-backed states.
    pub fn step_number(&self) -> Option<u8> {
        match self {
            CheckoutState::Shipping => Some(1),
            CheckoutState::Payment => Some(2),
            CheckoutState::Review => Some(3),
            CheckoutState::Submitting | CheckoutState::Complete => None,
        }
    }
}

/// The receipt produced when the simulated payment settles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Generated order number, uppercase alphanumeric.
    pub order_number: String,
    /// Amount paid.
    pub total: Money,
    /// Confirmation email address, from the shipping step.
    pub email: String,
}

/// One checkout attempt: form state plus the step state machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    state: CheckoutState,
    form: CheckoutForm,
    confirmation: Option<OrderConfirmation>,
}

impl CheckoutFlow {
    /// Start a fresh checkout at the shipping step.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// The form, for reads.
    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// The form, for field edits.
    pub fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    /// The confirmation receipt, present once the flow is `Complete`.
    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// Advance to the next form step.
    ///
    /// Valid from `Shipping` and `Payment`, and only when the current
    /// step's fields validate; a failed validation leaves the flow where
    /// it is with the field errors set. Advancing out of `Review` goes
    /// through [`CheckoutFlow::begin_submit`] instead.
    pub fn advance(&mut self) -> Result<CheckoutState, CommerceError> {
        let next = match self.state {
            CheckoutState::Shipping => CheckoutState::Payment,
            CheckoutState::Payment => CheckoutState::Review,
            other => {
                return Err(CommerceError::InvalidTransition {
                    from: other.as_str(),
                    to: "next",
                })
            }
        };

        let step = self.state.step_number().unwrap_or(0);
        if !self.form.validate_step(step) {
            return Err(CommerceError::ValidationFailed(step));
        }

        self.state = next;
        Ok(next)
    }

    /// Go back one step, unconditionally.
    ///
    /// Valid from `Payment` and `Review`. There is nothing before
    /// `Shipping`, and neither `Submitting` nor `Complete` can be left
    /// backwards.
    pub fn go_back(&mut self) -> Result<CheckoutState, CommerceError> {
        let prev = match self.state {
            CheckoutState::Payment => CheckoutState::Shipping,
            CheckoutState::Review => CheckoutState::Payment,
            other => {
                return Err(CommerceError::InvalidTransition {
                    from: other.as_str(),
                    to: "previous",
                })
            }
        };
        self.state = prev;
        Ok(prev)
    }

    /// Enter `Submitting`.
    ///
    /// Only valid from `Review`, and only once: a second submit while one
    /// is in flight is rejected, which keeps at most one settle pending.
    /// Payment fields are re-validated as a final gate.
    pub fn begin_submit(&mut self) -> Result<(), CommerceError> {
        if self.state != CheckoutState::Review {
            return Err(CommerceError::InvalidTransition {
                from: self.state.as_str(),
                to: "submitting",
            });
        }
        if !self.form.validate_step(2) {
            return Err(CommerceError::ValidationFailed(2));
        }
        self.state = CheckoutState::Submitting;
        Ok(())
    }

    /// Record the settle and move to `Complete`.
    ///
    /// Only valid from `Submitting`. Produces the confirmation receipt for
    /// the given total.
    pub fn complete_submit(&mut self, total: Money) -> Result<OrderConfirmation, CommerceError> {
        if self.state != CheckoutState::Submitting {
            return Err(CommerceError::InvalidTransition {
                from: self.state.as_str(),
                to: "complete",
            });
        }
        let confirmation = OrderConfirmation {
            order_number: generate_order_number(),
            total,
            email: self.form.email.clone(),
        };
        self.state = CheckoutState::Complete;
        self.confirmation = Some(confirmation.clone());
        Ok(confirmation)
    }

    /// Check if a settle is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state == CheckoutState::Submitting
    }

    /// Check if the flow is finished.
    pub fn is_complete(&self) -> bool {
        self.state == CheckoutState::Complete
    }
}

/// Generate an order number: 9 uppercase base-36 characters derived from
/// the clock and a process-wide counter.
fn generate_order_number() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut seed = timestamp ^ counter.rotate_left(32);

    let mut out = String::with_capacity(9);
    for _ in 0..9 {
        let digit = (seed % 36) as u32;
        let c = char::from_digit(digit, 36).unwrap_or('0');
        out.push(c.to_ascii_uppercase());
        seed = (seed / 36) ^ seed.rotate_left(7);
    }
    out
}
