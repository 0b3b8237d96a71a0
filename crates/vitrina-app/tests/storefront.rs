//! A full storefront session: browse, filter, favorite, fill the cart,
//! check out, and come back with the favorites still on disk.

use std::time::Duration;

use vitrina_app::prelude::*;
use vitrina_commerce::checkout::{CheckoutField, CheckoutState};
use vitrina_commerce::money::Money;
use vitrina_commerce::search::{CategoryFilter, SortOrder};
use vitrina_storage::Store;

fn shop_over(dir: &std::path::Path) -> Storefront {
    Storefront::new(Store::on_disk(dir), Store::on_disk(dir))
        .with_client(CatalogClient::instant())
        .with_settle_delay(Duration::ZERO)
}

#[tokio::test]
async fn full_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut shop = shop_over(dir.path());

    // The catalog arrives; the price slider is seeded to the max price.
    shop.load_catalog().await;
    assert_eq!(shop.catalog().products().len(), 20);
    assert_eq!(shop.criteria().price_max, Money::from_decimal(2499.99));

    // Browse: search from another screen lands back home.
    shop.navigate(View::Stats);
    shop.search("premium");
    assert_eq!(shop.view(), View::Home);
    let hits: Vec<u32> = shop.listing().iter().map(|p| p.id).collect();
    assert!(!hits.is_empty());

    // Narrow down and order by price.
    shop.search("");
    shop.set_category(CategoryFilter::Named("electronics".to_string()));
    shop.set_sort(SortOrder::PriceAsc);
    let listing = shop.listing().to_vec();
    assert!(listing.iter().all(|p| p.category == "electronics"));
    assert!(listing.windows(2).all(|w| w[0].price <= w[1].price));

    // Like something, put two headphones and a console in the cart.
    let headphones = listing.iter().find(|p| p.id == 6).cloned().unwrap();
    let console = listing.iter().find(|p| p.id == 18).cloned().unwrap();
    shop.toggle_favorite(headphones.clone()).unwrap();
    shop.add_to_cart(headphones.clone());
    shop.add_to_cart(headphones.clone());
    shop.add_to_cart(console.clone());

    assert_eq!(shop.cart().total_items(), 3);
    let expected_total = headphones.price.multiply(2) + console.price;
    assert_eq!(shop.cart().total_price(), expected_total);

    // Check out.
    shop.navigate(View::Cart);
    shop.begin_checkout();
    {
        let form = shop.checkout_mut().unwrap().form_mut();
        form.set(CheckoutField::Email, "cliente@example.com");
        form.set(CheckoutField::FullName, "Cliente Ejemplo");
        form.set(CheckoutField::Address, "Calle Falsa 123");
        form.set(CheckoutField::City, "Valencia");
        form.set(CheckoutField::ZipCode, "46001");
        form.set(CheckoutField::Country, "ES");
    }
    shop.checkout_mut().unwrap().advance().unwrap();
    {
        let form = shop.checkout_mut().unwrap().form_mut();
        form.set(CheckoutField::CardNumber, "1234567812345678");
        form.set(CheckoutField::CardName, "CLIENTE EJEMPLO");
        form.set(CheckoutField::ExpiryDate, "0829");
        form.set(CheckoutField::Cvv, "123");
    }
    assert_eq!(
        shop.checkout().unwrap().form().card_number,
        "1234 5678 1234 5678"
    );
    shop.checkout_mut().unwrap().advance().unwrap();
    assert_eq!(shop.checkout().unwrap().state(), CheckoutState::Review);

    let confirmation = shop.submit_order().await.unwrap();
    assert_eq!(confirmation.total, expected_total);
    assert_eq!(confirmation.email, "cliente@example.com");
    assert!(shop.cart().is_empty());
    assert!(shop
        .notices()
        .visible()
        .iter()
        .any(|n| n.message == vitrina_app::PAYMENT_SUCCESS_MESSAGE));

    shop.finish_checkout();
    assert_eq!(shop.view(), View::Home);
    assert!(shop.checkout().is_none());

    // A new session over the same storage still has the favorite; the
    // cart was volatile and is gone.
    drop(shop);
    let mut next = shop_over(dir.path());
    next.load_catalog().await;
    assert!(next.favorites().is_favorite(6));
    assert_eq!(next.favorites().len(), 1);
    assert!(next.cart().is_empty());
}

#[tokio::test]
async fn validation_blocks_the_unwary() {
    let dir = tempfile::tempdir().unwrap();
    let mut shop = shop_over(dir.path());
    shop.load_catalog().await;

    let product = shop.listing().first().cloned().unwrap();
    shop.add_to_cart(product);
    shop.begin_checkout();

    // Step 1 with a malformed email goes nowhere.
    {
        let form = shop.checkout_mut().unwrap().form_mut();
        form.set(CheckoutField::Email, "foo");
        form.set(CheckoutField::FullName, "Cliente Ejemplo");
        form.set(CheckoutField::Address, "Calle Falsa 123");
        form.set(CheckoutField::City, "Valencia");
        form.set(CheckoutField::ZipCode, "46001");
        form.set(CheckoutField::Country, "ES");
    }
    assert!(shop.checkout_mut().unwrap().advance().is_err());
    assert_eq!(
        shop.checkout().unwrap().state(),
        CheckoutState::Shipping
    );

    // Fixing the email unblocks step 1; a 15-digit card blocks step 2.
    shop.checkout_mut()
        .unwrap()
        .form_mut()
        .set(CheckoutField::Email, "a@b.co");
    shop.checkout_mut().unwrap().advance().unwrap();
    {
        let form = shop.checkout_mut().unwrap().form_mut();
        form.set(CheckoutField::CardNumber, "123456781234567");
        form.set(CheckoutField::CardName, "CLIENTE EJEMPLO");
        form.set(CheckoutField::ExpiryDate, "0829");
        form.set(CheckoutField::Cvv, "123");
    }
    assert!(shop.checkout_mut().unwrap().advance().is_err());
    assert_eq!(shop.checkout().unwrap().state(), CheckoutState::Payment);
}
