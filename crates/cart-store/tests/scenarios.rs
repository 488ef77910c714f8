//! End-to-end cart scenarios: a fern and a cactus.

use cart_store::prelude::*;

fn fern() -> ProductListing {
    ProductListing::new("Fern", "https://example.com/fern.jpg", "$5.00")
}

fn cactus() -> ProductListing {
    ProductListing::new("Cactus", "https://example.com/cactus.jpg", "$3.50")
}

fn subtotal_of(cart: &CartStore, name: &str) -> String {
    let item = cart.get(name).expect("item present");
    cart.item_subtotal(item).unwrap().display_amount()
}

fn total(cart: &CartStore) -> String {
    cart.cart_total().unwrap().display_amount()
}

#[test]
fn test_empty_cart_total() {
    let cart = CartStore::new();
    assert_eq!(total(&cart), "0.00");
    assert_eq!(cart.view().unwrap().heading(), "Total Cart Amount: $0.00");
}

#[test]
fn test_fern_and_cactus_walkthrough() {
    let mut cart = CartStore::new();

    // Two ferns.
    cart.add_listing(&fern(), 2).unwrap();
    assert_eq!(total(&cart), "10.00");
    assert_eq!(subtotal_of(&cart, "Fern"), "10.00");

    // One cactus.
    cart.add_listing(&cactus(), 1).unwrap();
    assert_eq!(cart.len(), 2);
    assert_eq!(total(&cart), "13.50");

    // Decrementing the single cactus removes it.
    cart.decrement_quantity("Cactus").unwrap();
    assert!(!cart.contains("Cactus"));
    assert_eq!(cart.len(), 1);
    assert_eq!(total(&cart), "10.00");

    // Three increments take the ferns from 2 to 5.
    for _ in 0..3 {
        cart.increment_quantity("Fern").unwrap();
    }
    assert_eq!(cart.quantity_of("Fern"), Some(5));
    assert_eq!(subtotal_of(&cart, "Fern"), "25.00");

    // Removing something that isn't there changes nothing.
    let before = cart.clone();
    assert!(!cart.remove_item("Nonexistent"));
    assert_eq!(cart, before);
}

#[test]
fn test_decrement_above_one_keeps_item() {
    let mut cart = CartStore::new();
    cart.add_listing(&fern(), 4).unwrap();
    cart.decrement_quantity("Fern").unwrap();
    assert_eq!(cart.quantity_of("Fern"), Some(3));
}

#[test]
fn test_remove_twice_equals_once() {
    let mut once = CartStore::new();
    once.add_listing(&fern(), 1).unwrap();
    once.add_listing(&cactus(), 2).unwrap();
    let mut twice = once.clone();

    once.remove_item("Cactus");
    twice.remove_item("Cactus");
    twice.remove_item("Cactus");
    assert_eq!(once, twice);
}

#[test]
fn test_duplicate_add_merges() {
    let mut cart = CartStore::new();
    cart.add_listing(&fern(), 1).unwrap();
    cart.add_listing(&fern(), 1).unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.quantity_of("Fern"), Some(2));
}

#[test]
fn test_invalid_cost_rejected_at_creation() {
    let mut cart = CartStore::new();
    let broken = ProductListing::new("Orchid", "", "$ten");
    assert!(matches!(
        cart.add_listing(&broken, 1),
        Err(CartError::InvalidCostFormat(_))
    ));
    assert!(cart.is_empty());
}

#[test]
fn test_total_rounds_once_after_summing() {
    let mut cart = CartStore::new();
    cart.add_listing(&ProductListing::new("Seed A", "", "$0.333"), 1).unwrap();
    cart.add_listing(&ProductListing::new("Seed B", "", "$0.333"), 1).unwrap();
    cart.add_listing(&ProductListing::new("Seed C", "", "$0.334"), 1).unwrap();

    let pricing = cart.pricing().unwrap();
    assert!(pricing.line_items.iter().all(|l| l.subtotal.display_amount() == "0.33"));
    assert_eq!(total(&cart), "1.00");
}

#[test]
fn test_view_commands_round_trip_through_dispatch() {
    let mut cart = CartStore::new();
    let commands = vec![
        CartCommand::Add { listing: fern(), quantity: 2 },
        CartCommand::Add { listing: cactus(), quantity: 1 },
        CartCommand::Decrement { name: "Cactus".into() },
        CartCommand::Increment { name: "Fern".into() },
        CartCommand::Remove { name: "Nonexistent".into() },
    ];
    let outcomes: Vec<CommandOutcome> = commands
        .into_iter()
        .map(|c| cart.dispatch(c).unwrap())
        .collect();

    assert_eq!(
        outcomes,
        vec![
            CommandOutcome::Updated,
            CommandOutcome::Updated,
            CommandOutcome::Updated,
            CommandOutcome::Updated,
            CommandOutcome::Unchanged,
        ]
    );
    let view = cart.view().unwrap();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].subtotal_label(), "Subtotal: $15.00");
    assert_eq!(view.heading(), "Total Cart Amount: $15.00");
}
