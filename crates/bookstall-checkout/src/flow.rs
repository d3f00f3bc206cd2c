//! # Checkout Flow
//!
//! The step controller gating checkout progression.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Steps                                  │
//! │                                                                     │
//! │             submit_shipping()          submit_payment()             │
//! │            (shipping valid)           (payment valid)               │
//! │  ┌──────────┐──────────────►┌─────────┐─────────────►┌────────────┐ │
//! │  │ Shipping │               │ Payment │              │ Processing │ │
//! │  └──────────┘◄──────────────└─────────┘◄─────────────└─────┬──────┘ │
//! │               back_to_shipping()        charge declined    │        │
//! │                                                            │ charge │
//! │                                                            │   ok   │
//! │                                         ┌──────────┐       │        │
//! │                                         │ Complete │◄──────┘        │
//! │                                         └──────────┘                │
//! │                                          (terminal)                 │
//! │                                                                     │
//! │  Invalid forms never advance; errors populate in place.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shipping and payment each own an independent error map, and the
//! gateway failure message is a third, separate slot; nothing here
//! can clear errors it does not own.

use tracing::{debug, info, warn};

use bookstall_core::forms::{
    validate_payment, validate_shipping, FieldErrors, PaymentInfo, ShippingInfo,
};
use bookstall_core::format::{format_card_number, format_expiry};
use bookstall_core::money::TaxRate;
use bookstall_core::SALES_TAX_BPS;
use bookstall_store::storage::CartStorage;
use bookstall_store::CartStore;

use crate::gateway::PaymentGateway;

// =============================================================================
// Steps and Entry Guard
// =============================================================================

/// Where the shopper is in the checkout sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    /// Capturing the shipping address (initial).
    Shipping,
    /// Capturing card details.
    Payment,
    /// Awaiting the gateway (transient).
    Processing,
    /// Order placed (terminal).
    Complete,
}

/// Verdict of the empty-cart guard on entering checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutEntry {
    /// Checkout may be shown.
    Proceed,
    /// Nothing to check out; send the shopper back to the cart.
    RedirectToCart,
}

// =============================================================================
// Checkout Flow
// =============================================================================

/// The checkout session: current step, both form drafts, their
/// independent error maps, and the completion flag.
///
/// Created fresh when checkout starts and discarded when it ends;
/// nothing in here is persisted.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    step: Step,
    shipping: ShippingInfo,
    shipping_errors: FieldErrors,
    payment: PaymentInfo,
    payment_errors: FieldErrors,
    gateway_error: Option<String>,
    order_complete: bool,
}

/// Private step holder so `Default` can start at `Shipping`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Step {
    #[default]
    Shipping,
    Payment,
    Processing,
    Complete,
}

impl From<Step> for CheckoutStep {
    fn from(step: Step) -> Self {
        match step {
            Step::Shipping => CheckoutStep::Shipping,
            Step::Payment => CheckoutStep::Payment,
            Step::Processing => CheckoutStep::Processing,
            Step::Complete => CheckoutStep::Complete,
        }
    }
}

impl CheckoutFlow {
    /// Starts a fresh checkout session at the shipping step.
    pub fn new() -> Self {
        CheckoutFlow::default()
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step.into()
    }

    /// True once payment has succeeded. Stays set for the rest of the
    /// session.
    pub fn order_complete(&self) -> bool {
        self.order_complete
    }

    /// The shipping draft, for field-by-field mutation.
    pub fn shipping_mut(&mut self) -> &mut ShippingInfo {
        &mut self.shipping
    }

    /// The payment draft. Prefer [`CheckoutFlow::enter_card_number`] and
    /// [`CheckoutFlow::enter_expiry`] for the formatted fields.
    pub fn payment_mut(&mut self) -> &mut PaymentInfo {
        &mut self.payment
    }

    /// Shipping errors from the latest shipping validation.
    pub fn shipping_errors(&self) -> &FieldErrors {
        &self.shipping_errors
    }

    /// Payment errors from the latest payment validation.
    pub fn payment_errors(&self) -> &FieldErrors {
        &self.payment_errors
    }

    /// Top-level gateway failure message, if the last charge was declined.
    pub fn gateway_error(&self) -> Option<&str> {
        self.gateway_error.as_deref()
    }

    /// Records a raw card-number entry, applying display grouping.
    pub fn enter_card_number(&mut self, raw: &str) {
        self.payment.card_number = format_card_number(raw);
    }

    /// Records a raw expiry entry, applying the `MM/YY` shape.
    pub fn enter_expiry(&mut self, raw: &str) {
        self.payment.expiry_date = format_expiry(raw);
    }

    /// Empty-cart guard: checkout is only shown when there is something
    /// to check out.
    ///
    /// A cart that is empty because payment just succeeded must NOT
    /// redirect, which is why the completion flag and the processing
    /// step are consulted alongside emptiness.
    pub fn entry_check(&self, cart_is_empty: bool) -> CheckoutEntry {
        if cart_is_empty && !self.order_complete && self.step != Step::Processing {
            CheckoutEntry::RedirectToCart
        } else {
            CheckoutEntry::Proceed
        }
    }

    /// Submits the shipping form.
    ///
    /// Advances `Shipping -> Payment` iff validation passes; otherwise
    /// stays on `Shipping` with the errors populated. A no-op from any
    /// other step.
    pub fn submit_shipping(&mut self) -> CheckoutStep {
        if self.step != Step::Shipping {
            return self.step();
        }

        self.shipping_errors = validate_shipping(&self.shipping);
        if self.shipping_errors.is_empty() {
            debug!("Shipping accepted, advancing to payment");
            self.step = Step::Payment;
        } else {
            debug!(errors = self.shipping_errors.len(), "Shipping rejected");
        }
        self.step()
    }

    /// Explicit back navigation from the payment step.
    pub fn back_to_shipping(&mut self) -> CheckoutStep {
        if self.step == Step::Payment {
            self.step = Step::Shipping;
        }
        self.step()
    }

    /// Submits the payment form and, if it validates, charges the
    /// gateway for the cart total.
    ///
    /// On success the order is completed and the cart cleared; on a
    /// declined charge the flow returns to `Payment` with a top-level
    /// gateway error and the cart untouched. A no-op from any step but
    /// `Payment`.
    pub async fn submit_payment<S, G>(
        &mut self,
        cart: &mut CartStore<S>,
        gateway: &G,
    ) -> CheckoutStep
    where
        S: CartStorage,
        G: PaymentGateway,
    {
        if self.step != Step::Payment {
            return self.step();
        }

        self.payment_errors = validate_payment(&self.payment);
        if !self.payment_errors.is_empty() {
            debug!(errors = self.payment_errors.len(), "Payment form rejected");
            return self.step();
        }

        self.gateway_error = None;
        self.step = Step::Processing;

        let amount = cart.totals(TaxRate::from_bps(SALES_TAX_BPS)).total;
        match gateway.charge(amount, &self.payment).await {
            Ok(receipt) => {
                // Ordering invariant: the completion flag must be
                // observable before the cart empties, or the entry
                // guard would read this as an abandoned checkout.
                self.order_complete = true;
                self.step = Step::Complete;
                cart.clear();
                info!(reference = %receipt.reference, amount = %amount, "Order complete");
            }
            Err(err) => {
                warn!(error = %err, "Charge failed, returning to payment step");
                self.gateway_error = Some(err.to_string());
                self.step = Step::Payment;
            }
        }
        self.step()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
