//! Checkout module.
//!
//! The multi-step checkout: form state with per-field validation, and the
//! state machine that gates progress through it.

mod flow;
mod form;

pub use flow::{CheckoutFlow, CheckoutState, OrderConfirmation};
pub use form::{format_card_number, format_expiry_date, CheckoutField, CheckoutForm};
