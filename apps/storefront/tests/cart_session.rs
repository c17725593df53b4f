//! End-to-end cart session: catalog payloads in, snapshots and toasts out.

use std::sync::Arc;

use inkstudio_storefront::commands::cart::{
    add_to_cart, clear_cart, get_cart, remove_from_cart, update_cart_item, ProductInput,
};
use inkstudio_storefront::commands::checkout::create_order_draft;
use inkstudio_storefront::config::ShopConfig;
use inkstudio_storefront::error::ErrorCode;
use inkstudio_storefront::notify::{BroadcastNotifier, Notification, Severity};
use inkstudio_storefront::Storefront;
use tokio::sync::broadcast::error::TryRecvError;

fn product(json: &str) -> ProductInput {
    serde_json::from_str(json).unwrap()
}

fn poster() -> ProductInput {
    product(r#"{"id":"p1","name":"Poster","price":"89.90","image":"/img/poster.jpg","category":"prints"}"#)
}

fn sticker() -> ProductInput {
    product(r#"{"id":"p2","name":"Sticker","price":"29.90","image":"/img/sticker.jpg","category":"stickers"}"#)
}

#[test]
fn poster_and_sticker_session() {
    let notifier = BroadcastNotifier::default();
    let mut toasts = notifier.subscribe();
    let shop = Storefront::new(ShopConfig::default(), Arc::new(notifier));
    let (cart, store) = (&shop.cart, &shop.config.store);

    // 1. Poster x1
    let res = add_to_cart(cart, store, poster(), Some(1)).unwrap();
    assert_eq!(res.items.len(), 1);
    assert_eq!(res.totals.total_items, 1);
    assert_eq!(res.totals.total_price_cents, 8990);
    assert_eq!(toasts.try_recv().unwrap(), Notification::added("Poster"));

    // 2. Poster x2 again merges into the same entry
    let res = add_to_cart(cart, store, poster(), Some(2)).unwrap();
    assert_eq!(res.items.len(), 1);
    assert_eq!(res.items[0].id, "p1");
    assert_eq!(res.items[0].quantity, 3);
    assert_eq!(res.totals.total_items, 3);
    assert_eq!(res.totals.total_price_cents, 26970);
    assert_eq!(toasts.try_recv().unwrap().severity, Severity::Success);

    // 3. Sticker x1 (quantity omitted)
    let res = add_to_cart(cart, store, sticker(), None).unwrap();
    assert_eq!(res.items.len(), 2);
    assert_eq!(res.totals.total_items, 4);
    assert_eq!(res.totals.total_price_cents, 29960);
    assert_eq!(res.totals.total_price_display, "R$ 299,60");
    assert_eq!(toasts.try_recv().unwrap(), Notification::added("Sticker"));

    // Checkout reads the snapshot without clearing it
    let draft = create_order_draft(cart, store).unwrap();
    assert_eq!(draft.subtotal.cents(), 29960);
    assert_eq!(get_cart(cart, store).totals.total_items, 4);

    // 4. Quantity 0 removes the poster, silently
    let res = update_cart_item(cart, store, "p1".into(), 0);
    assert_eq!(res.items.len(), 1);
    assert_eq!(res.items[0].id, "p2");
    assert_eq!(res.totals.total_items, 1);
    assert_eq!(res.totals.total_price_cents, 2990);
    assert!(matches!(toasts.try_recv(), Err(TryRecvError::Empty)));

    // 5. Clear
    let res = clear_cart(cart, store);
    assert!(res.items.is_empty());
    assert_eq!(res.totals.total_items, 0);
    assert_eq!(res.totals.total_price_cents, 0);
    assert_eq!(toasts.try_recv().unwrap(), Notification::cleared());
}

#[test]
fn removing_unknown_item_still_succeeds() {
    let notifier = BroadcastNotifier::default();
    let mut toasts = notifier.subscribe();
    let shop = Storefront::new(ShopConfig::default(), Arc::new(notifier));

    add_to_cart(&shop.cart, &shop.config.store, sticker(), None).unwrap();
    toasts.try_recv().unwrap();

    let res = remove_from_cart(&shop.cart, &shop.config.store, "p404".into());
    assert_eq!(res.items.len(), 1);
    assert_eq!(toasts.try_recv().unwrap(), Notification::removed(None));
}

#[test]
fn rejected_input_leaves_cart_and_toasts_untouched() {
    let notifier = BroadcastNotifier::default();
    let mut toasts = notifier.subscribe();
    let shop = Storefront::new(ShopConfig::default(), Arc::new(notifier));
    let (cart, store) = (&shop.cart, &shop.config.store);

    assert!(add_to_cart(cart, store, poster(), Some(-1)).is_err());
    assert!(add_to_cart(cart, store, product(r#"{"id":"p3","name":"Print","price":"12.345"}"#), None).is_err());
    assert!(add_to_cart(cart, store, product(r#"{"id":"p3","name":"","priceCents":100}"#), None).is_err());

    assert!(get_cart(cart, store).items.is_empty());
    assert!(matches!(toasts.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn disabled_notifications_stay_quiet() {
    let notifier = BroadcastNotifier::default();
    let mut toasts = notifier.subscribe();
    let mut config = ShopConfig::default();
    config.notifications.enabled = false;
    let shop = Storefront::new(config, Arc::new(notifier));

    add_to_cart(&shop.cart, &shop.config.store, poster(), None).unwrap();
    clear_cart(&shop.cart, &shop.config.store);

    assert!(matches!(toasts.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn padded_catalog_id_is_rejected_instead_of_rewritten() {
    let notifier = BroadcastNotifier::default();
    let mut toasts = notifier.subscribe();
    let shop = Storefront::new(ShopConfig::default(), Arc::new(notifier));
    let (cart, store) = (&shop.cart, &shop.config.store);

    let padded = product(r#"{"id":"p1 ","name":"Poster","price":"89.90"}"#);
    let err = add_to_cart(cart, store, padded, None).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
    assert!(get_cart(cart, store).items.is_empty());
    assert!(matches!(toasts.try_recv(), Err(TryRecvError::Empty)));

    // The id the catalog sends is the id every later operation uses
    add_to_cart(cart, store, poster(), None).unwrap();
    toasts.try_recv().unwrap();
    assert_eq!(update_cart_item(cart, store, "p1".into(), 5).totals.total_items, 5);
    assert!(remove_from_cart(cart, store, "p1".into()).items.is_empty());
    assert_eq!(toasts.try_recv().unwrap(), Notification::removed(Some("Poster")));
}
