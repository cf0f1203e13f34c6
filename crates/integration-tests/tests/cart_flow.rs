//! End-to-end cart scenarios through the controller.
//!
//! The controller runs over a real store backend and the real API client;
//! the backend address is dead, so `init` exercises the sample-catalog
//! fallback exactly as an offline browser session would.

use fresh_bowl_core::{Currency, Price};
use fresh_bowl_storefront::{CartController, StateStore};
use fresh_bowl_storefront::ui::{CartEvent, RecordingView};

use fresh_bowl_integration_tests::{offline_file_state, offline_state};

#[tokio::test]
async fn shopping_session_adds_merges_and_totals() {
    let state = offline_state();
    let mut controller =
        CartController::new(&state, RecordingView::new()).expect("all mounts present");
    controller.init().await;

    let products = controller.products().to_vec();
    assert!(products.len() >= 3, "sample catalog must back the grid");
    let first = products[0].clone();
    let second = products[1].clone();

    controller
        .dispatch(CartEvent::Add(first.id.clone()))
        .expect("add");
    controller
        .dispatch(CartEvent::Add(first.id.clone()))
        .expect("add again merges");
    controller
        .dispatch(CartEvent::Add(second.id.clone()))
        .expect("add second");

    let cart = controller.cart();
    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.line(&first.id).expect("line").quantity, 2);
    assert_eq!(cart.item_count(), 3);

    let expected = first.price.times(2) + second.price;
    assert_eq!(cart.total(), expected);

    // The last render reflects the same totals the model reports.
    let view = controller.into_view();
    let rendered = view.last_cart().expect("cart rendered");
    assert_eq!(rendered.count, 3);
    assert_eq!(rendered.total, expected.display(Currency::Clp));
}

#[tokio::test]
async fn decrement_and_clear_round_out_the_session() {
    let state = offline_state();
    let mut controller =
        CartController::new(&state, RecordingView::new()).expect("all mounts present");
    controller.init().await;
    let id = controller.products()[0].id.clone();

    controller.dispatch(CartEvent::Add(id.clone())).expect("add");
    controller
        .dispatch(CartEvent::Increment(id.clone()))
        .expect("plus");
    controller
        .dispatch(CartEvent::Decrement(id.clone()))
        .expect("minus");
    assert_eq!(controller.cart().line(&id).expect("line").quantity, 1);

    controller
        .dispatch(CartEvent::Decrement(id.clone()))
        .expect("minus to zero");
    assert!(controller.cart().is_empty());

    controller.dispatch(CartEvent::ClearCart).expect("clear");
    assert_eq!(controller.cart().total(), Price::from_minor(0));
    assert!(state.store().get_raw("fb_cart").expect("raw").is_none());
}

#[tokio::test]
async fn cart_survives_process_restart_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let state = offline_file_state(dir.path());
        let mut controller =
            CartController::new(&state, RecordingView::new()).expect("all mounts present");
        controller.init().await;
        let id = controller.products()[0].id.clone();
        controller.dispatch(CartEvent::Add(id.clone())).expect("add");
        controller.dispatch(CartEvent::Add(id)).expect("add");
    }

    // A fresh state over the same directory, as after a restart.
    let state = offline_file_state(dir.path());
    let mut controller =
        CartController::new(&state, RecordingView::new()).expect("all mounts present");
    controller.init().await;

    assert_eq!(controller.cart().item_count(), 2);
    let id = controller.products()[0].id.clone();
    assert_eq!(controller.cart().line(&id).expect("line").quantity, 2);
}
