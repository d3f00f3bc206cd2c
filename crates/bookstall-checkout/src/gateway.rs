//! # Payment Gateway
//!
//! The checkout flow charges cards through this seam. The simulated
//! implementation stands in for a real processor: it waits a configured
//! delay and then approves or declines, exactly the shape a real
//! integration would have.
//!
//! No timeout or retry policy wraps the charge; it either resolves or
//! the whole flow is abandoned by the shopper navigating away.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use bookstall_core::forms::PaymentInfo;
use bookstall_core::money::Money;

// =============================================================================
// Gateway Seam
// =============================================================================

/// Outcome of a successful charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Processor reference for the charge.
    pub reference: String,

    /// Amount charged.
    pub amount: Money,
}

/// Why a charge did not go through.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The processor refused the charge.
    #[error("payment declined: {reason}")]
    Declined { reason: String },
}

/// An asynchronous payment processor.
pub trait PaymentGateway {
    /// Charges `amount` against the given card details.
    fn charge(
        &self,
        amount: Money,
        card: &PaymentInfo,
    ) -> impl std::future::Future<Output = Result<PaymentReceipt, GatewayError>> + Send;
}

// =============================================================================
// Simulated Gateway
// =============================================================================

/// Fixed outcome the simulated gateway will produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Approve,
    Decline,
}

/// A stand-in processor: sleeps for the configured delay, then returns
/// a fixed outcome.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    outcome: Outcome,
}

impl SimulatedGateway {
    /// A gateway that approves every charge after `delay`.
    pub fn approving(delay: Duration) -> Self {
        SimulatedGateway {
            delay,
            outcome: Outcome::Approve,
        }
    }

    /// A gateway that declines every charge after `delay`.
    pub fn declining(delay: Duration) -> Self {
        SimulatedGateway {
            delay,
            outcome: Outcome::Decline,
        }
    }
}

impl PaymentGateway for SimulatedGateway {
    async fn charge(
        &self,
        amount: Money,
        card: &PaymentInfo,
    ) -> Result<PaymentReceipt, GatewayError> {
        debug!(amount = %amount, cardholder = %card.cardholder_name, "Simulated charge started");
        tokio::time::sleep(self.delay).await;

        match self.outcome {
            Outcome::Approve => {
                let receipt = PaymentReceipt {
                    reference: Uuid::new_v4().to_string(),
                    amount,
                };
                info!(reference = %receipt.reference, amount = %amount, "Simulated charge approved");
                Ok(receipt)
            }
            Outcome::Decline => Err(GatewayError::Declined {
                reason: "card declined by issuer".to_string(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
