//! Bookstall kiosk: a non-interactive walkthrough of the storefront
//! core. Loads the catalog, fills a cart, and completes a checkout
//! against the simulated gateway.
//!
//! Run with `RUST_LOG=debug cargo run -p bookstall-kiosk` for the full
//! trace of what the crates are doing underneath.

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bookstall_checkout::{CheckoutEntry, CheckoutFlow, CheckoutStep, SimulatedGateway};
use bookstall_core::format::format_price;
use bookstall_core::money::TaxRate;
use bookstall_core::{MAX_LINE_QUANTITY, SALES_TAX_BPS};
use bookstall_store::{Catalog, CartStore, JsonFileStorage, CART_STORE_NAME};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let catalog = Catalog::load();
    info!(products = catalog.len(), "Catalog ready");

    // The cart survives restarts: rerun the kiosk after an aborted
    // checkout and the same lines come back.
    let data_dir = std::env::temp_dir().join("bookstall-kiosk");
    let mut cart = CartStore::open(JsonFileStorage::new(&data_dir, CART_STORE_NAME));
    cart.clear();

    browse_and_fill_cart(&catalog, &mut cart).await;
    print_cart(&cart);

    match run_checkout(&mut cart).await {
        CheckoutStep::Complete => println!("\nOrder placed. Thank you for shopping at Bookstall!"),
        step => println!("\nCheckout abandoned at {step:?}"),
    }
}

async fn browse_and_fill_cart(catalog: &Catalog, cart: &mut CartStore<JsonFileStorage>) {
    let first = catalog
        .by_slug("midnight-in-the-morgue")
        .await
        .expect("seed catalog includes this title");
    let second = catalog
        .by_id("nonfiction-4")
        .await
        .expect("seed catalog includes this title");

    cart.add(&first, 1).expect("non-zero quantity");
    // The store itself has no upper bound; the kiosk clamps like any UI
    cart.add(&second, 2.min(MAX_LINE_QUANTITY)).expect("non-zero quantity");
}

fn print_cart(cart: &CartStore<JsonFileStorage>) {
    println!("Your cart");
    println!("---------");
    for line in cart.cart().lines() {
        println!(
            "  {} x{}  {}  ({})",
            line.product.title,
            line.quantity,
            format_price(line.line_total()),
            line.product.author,
        );
    }

    let totals = cart.totals(TaxRate::from_bps(SALES_TAX_BPS));
    println!("  Subtotal: {}", format_price(totals.subtotal));
    println!("  Tax (8%): {}", format_price(totals.tax));
    println!("  Total:    {}", format_price(totals.total));
}

async fn run_checkout(cart: &mut CartStore<JsonFileStorage>) -> CheckoutStep {
    let mut flow = CheckoutFlow::new();

    if flow.entry_check(cart.is_empty()) == CheckoutEntry::RedirectToCart {
        println!("Cart is empty, nothing to check out.");
        return flow.step();
    }

    let shipping = flow.shipping_mut();
    shipping.first_name = "Jane".to_string();
    shipping.last_name = "Doe".to_string();
    shipping.email = "jane@doe.dev".to_string();
    shipping.phone = "555-0100".to_string();
    shipping.address = "1 Market St".to_string();
    shipping.city = "Lagos".to_string();
    shipping.state = "LA".to_string();
    shipping.zip_code = "10001".to_string();

    if flow.submit_shipping() != CheckoutStep::Payment {
        for (field, message) in flow.shipping_errors().iter() {
            println!("  shipping/{field}: {message}");
        }
        return flow.step();
    }

    flow.enter_card_number("4111111111111111");
    flow.enter_expiry("1226");
    let payment = flow.payment_mut();
    payment.cvv = "123".to_string();
    payment.cardholder_name = "Jane Doe".to_string();

    println!("\nProcessing your payment...");
    let gateway = SimulatedGateway::approving(Duration::from_secs(3));
    let step = flow.submit_payment(cart, &gateway).await;

    if let Some(message) = flow.gateway_error() {
        println!("  payment failed: {message}");
    }
    step
}
