//! # bookstall-checkout: Checkout Flow and Payment Gateway
//!
//! A small sequential state machine gating progression from shipping
//! capture to payment capture to completion, coordinating the cart
//! store and an asynchronous payment gateway.
//!
//! ## Modules
//!
//! - [`gateway`] - The `PaymentGateway` seam and the simulated gateway
//! - [`flow`] - The `CheckoutFlow` step controller
//!
//! ## Correctness Note
//!
//! On successful payment the completion flag is set *before* the cart
//! is cleared. The empty-cart redirect guard checks both, so a
//! legitimately finished checkout is never mistaken for an abandoned
//! one. See [`flow::CheckoutFlow::entry_check`].

pub mod flow;
pub mod gateway;

pub use flow::{CheckoutEntry, CheckoutFlow, CheckoutStep};
pub use gateway::{GatewayError, PaymentGateway, PaymentReceipt, SimulatedGateway};
