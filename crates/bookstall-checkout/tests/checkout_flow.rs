//! End-to-end checkout: catalog → cart → shipping → payment → complete.

use std::time::Duration;

use bookstall_checkout::{CheckoutEntry, CheckoutFlow, CheckoutStep, SimulatedGateway};
use bookstall_core::money::TaxRate;
use bookstall_core::SALES_TAX_BPS;
use bookstall_store::{Catalog, CartStore, JsonFileStorage, CART_STORE_NAME};

fn fill_valid_forms(flow: &mut CheckoutFlow) {
    let shipping = flow.shipping_mut();
    shipping.first_name = "Jane".to_string();
    shipping.last_name = "Doe".to_string();
    shipping.email = "jane@doe.dev".to_string();
    shipping.phone = "555-0100".to_string();
    shipping.address = "1 Market St".to_string();
    shipping.city = "Lagos".to_string();
    shipping.state = "LA".to_string();
    shipping.zip_code = "10001".to_string();

    flow.enter_card_number("4111111111111111");
    flow.enter_expiry("1226");
    let payment = flow.payment_mut();
    payment.cvv = "123".to_string();
    payment.cardholder_name = "Jane Doe".to_string();
}

#[tokio::test]
async fn two_books_through_successful_checkout() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::load();
    let mut cart = CartStore::open(JsonFileStorage::new(dir.path(), CART_STORE_NAME));

    // Two distinct products into an empty cart
    let first = catalog.by_slug("midnight-in-the-morgue").await.unwrap();
    let second = catalog.by_id("nonfiction-4").await.unwrap();
    cart.add(&first, 1).unwrap();
    cart.add(&second, 2).unwrap();

    let totals = cart.totals(TaxRate::from_bps(SALES_TAX_BPS));
    assert_eq!(totals.line_count, 2);
    assert_eq!(totals.total_quantity, 3);
    assert_eq!(totals.subtotal.minor(), 2_000_000);
    assert_eq!(totals.tax.minor(), 160_000);

    let mut flow = CheckoutFlow::new();
    fill_valid_forms(&mut flow);

    // The guard lets a populated cart into checkout
    assert_eq!(flow.entry_check(cart.is_empty()), CheckoutEntry::Proceed);

    assert_eq!(flow.submit_shipping(), CheckoutStep::Payment);

    let gateway = SimulatedGateway::approving(Duration::from_millis(10));
    let step = flow.submit_payment(&mut cart, &gateway).await;

    // Cart empty + completion flag set, and the guard must NOT read the
    // emptied cart as an abandoned checkout
    assert_eq!(step, CheckoutStep::Complete);
    assert!(flow.order_complete());
    assert!(cart.is_empty());
    assert_eq!(flow.entry_check(cart.is_empty()), CheckoutEntry::Proceed);

    // The cleared cart was persisted: a fresh session starts empty
    let reopened = CartStore::open(JsonFileStorage::new(dir.path(), CART_STORE_NAME));
    assert!(reopened.is_empty());
}

#[tokio::test]
async fn declined_checkout_preserves_cart_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::load();
    let mut cart = CartStore::open(JsonFileStorage::new(dir.path(), CART_STORE_NAME));

    let book = catalog.by_id("pride-3").await.unwrap();
    cart.add(&book, 1).unwrap();

    let mut flow = CheckoutFlow::new();
    fill_valid_forms(&mut flow);
    flow.submit_shipping();

    let gateway = SimulatedGateway::declining(Duration::from_millis(10));
    let step = flow.submit_payment(&mut cart, &gateway).await;

    assert_eq!(step, CheckoutStep::Payment);
    assert!(flow.gateway_error().is_some());
    assert!(!flow.order_complete());

    // The cart survives the failed attempt, including a reload
    let reopened = CartStore::open(JsonFileStorage::new(dir.path(), CART_STORE_NAME));
    assert_eq!(reopened.cart().total_quantity(), 1);
    assert_eq!(reopened.cart().lines()[0].product.id, "pride-3");
}
