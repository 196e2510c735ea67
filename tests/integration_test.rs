use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use storefront::comment_actor::CommentError;
use storefront::config::StorefrontConfig;
use storefront::framework::ActorClient;
use storefront::lifecycle::StorefrontSystem;
use storefront::item_actor::ItemError;
use storefront::model::{
    AccountDetails, CommentCreate, CommentEdit, CommentId, ContactCreate, CustomerProfile,
    CustomerType, EmployeeProfile, ItemCreate, ItemId, ItemStatus, ItemUpdate, OrderCreate,
    OrderStatus, Rating, UserId, UserUpdate,
};
use storefront::order_actor::OrderError;
use storefront::user_actor::UserError;

fn start() -> StorefrontSystem {
    StorefrontSystem::new(StorefrontConfig::default()).expect("Failed to start storefront")
}

async fn register(system: &StorefrontSystem, name: &str, user_type: CustomerType) -> UserId {
    system
        .user_client
        .register_customer(
            AccountDetails::new(name, format!("{name}@example.com")),
            CustomerProfile {
                user_type,
                ..CustomerProfile::default()
            },
        )
        .await
        .expect("Failed to register customer")
}

async fn stock_item(system: &StorefrontSystem, stock: u32) -> ItemId {
    system
        .item_client
        .create_item(ItemCreate {
            weight: dec!(0.5),
            ..ItemCreate::new("Super Widget", 2550, stock)
        })
        .await
        .expect("Failed to create item")
}

async fn rate(system: &StorefrontSystem, vendor: UserId, email: &str, stars: i64) -> CommentId {
    system
        .comment_client
        .post_comment(CommentCreate {
            vendor,
            item: None,
            name: "Rater".into(),
            email: email.into(),
            comment: None,
            rating: Rating::from_integer(stars).unwrap(),
        })
        .await
        .expect("Failed to post comment")
}

async fn average(system: &StorefrontSystem, vendor: UserId) -> Decimal {
    system
        .user_client
        .get(vendor)
        .await
        .unwrap()
        .expect("Vendor not found")
        .avg_rating()
}

/// Full end-to-end order flow with all real actors.
#[tokio::test]
async fn test_order_decrements_stock_and_prices_from_snapshot() {
    let system = start();
    let buyer = register(&system, "alice", CustomerType::Buyer).await;
    let item = stock_item(&system, 100).await;

    let order = system
        .order_client
        .place_order(OrderCreate {
            buyer,
            item,
            quantity: 5,
        })
        .await
        .expect("Failed to place order");

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.unit_price, 2550);
    assert_eq!(order.total_price, 12750);
    assert_eq!(order.total_amount(), dec!(127.50));
    assert_eq!(order.total_weight, dec!(2.5));
    assert_eq!(system.item_client.check_stock(item).await.unwrap(), 95);

    let orders = system.order_client.orders_for(buyer).await.unwrap();
    assert_eq!(orders, vec![order]);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_insufficient_stock_leaves_stock_unchanged() {
    let system = start();
    let buyer = register(&system, "alice", CustomerType::Buyer).await;
    let item = stock_item(&system, 3).await;

    let result = system
        .order_client
        .place_order(OrderCreate {
            buyer,
            item,
            quantity: 4,
        })
        .await;

    assert_eq!(
        result,
        Err(OrderError::InsufficientStock {
            item,
            requested: 4,
            available: 3
        })
    );
    assert_eq!(system.item_client.check_stock(item).await.unwrap(), 3);
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_are_rejected_for_unknown_buyers_items_and_zero_quantity() {
    let system = start();
    let buyer = register(&system, "alice", CustomerType::Buyer).await;
    let item = stock_item(&system, 3).await;

    let unknown_buyer = system
        .order_client
        .place_order(OrderCreate {
            buyer: UserId(99),
            item,
            quantity: 1,
        })
        .await;
    assert_eq!(unknown_buyer, Err(OrderError::InvalidUser(UserId(99))));

    let unknown_item = system
        .order_client
        .place_order(OrderCreate {
            buyer,
            item: ItemId(99),
            quantity: 1,
        })
        .await;
    assert_eq!(unknown_item, Err(OrderError::InvalidItem(ItemId(99))));

    let zero = system
        .order_client
        .place_order(OrderCreate {
            buyer,
            item,
            quantity: 0,
        })
        .await;
    assert_eq!(zero, Err(OrderError::InvalidQuantity(0)));
    assert_eq!(system.item_client.check_stock(item).await.unwrap(), 3);

    system.shutdown().await.unwrap();
}

/// Stock = 1, two simultaneous orders for 1: exactly one wins.
#[tokio::test]
async fn test_concurrent_orders_never_oversell() {
    let system = start();
    let buyer = register(&system, "bob", CustomerType::Buyer).await;
    let item = stock_item(&system, 1).await;

    let mut handles = vec![];
    for _ in 0..2 {
        let order_client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            order_client
                .place_order(OrderCreate {
                    buyer,
                    item,
                    quantity: 1,
                })
                .await
        }));
    }

    let mut successful = 0;
    let mut insufficient = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(OrderError::InsufficientStock { .. }) => insufficient += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(successful, 1);
    assert_eq!(insufficient, 1);
    assert_eq!(system.item_client.check_stock(item).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_many_concurrent_orders_consume_exactly_the_stock() {
    let system = start();
    let buyer = register(&system, "bob", CustomerType::Buyer).await;
    let item = stock_item(&system, 20).await;

    let mut handles = vec![];
    for _ in 0..15 {
        let order_client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            order_client
                .place_order(OrderCreate {
                    buyer,
                    item,
                    quantity: 2,
                })
                .await
        }));
    }

    let mut successful = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successful += 1;
        }
    }

    assert_eq!(successful, 10, "20 units / 2 per order");
    assert_eq!(system.item_client.check_stock(item).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancelling_releases_stock_and_transitions_are_enforced() {
    let system = start();
    let buyer = register(&system, "carol", CustomerType::Buyer).await;
    let item = stock_item(&system, 5).await;
    let place = |quantity| OrderCreate {
        buyer,
        item,
        quantity,
    };

    let cancelled = system.order_client.place_order(place(2)).await.unwrap();
    system.order_client.mark_confirmed(cancelled.id).await.unwrap();
    let after = system.order_client.mark_cancelled(cancelled.id).await.unwrap();
    assert_eq!(after.status, OrderStatus::Cancelled);
    assert_eq!(system.item_client.check_stock(item).await.unwrap(), 5);

    let delivered = system.order_client.place_order(place(1)).await.unwrap();
    system.order_client.mark_confirmed(delivered.id).await.unwrap();
    system.order_client.mark_shipped(delivered.id).await.unwrap();
    system.order_client.mark_delivered(delivered.id).await.unwrap();
    // Marking delivered twice is a no-op.
    let again = system.order_client.mark_delivered(delivered.id).await.unwrap();
    assert_eq!(again.status, OrderStatus::Delivered);

    let invalid = system.order_client.mark_cancelled(delivered.id).await;
    assert_eq!(
        invalid,
        Err(OrderError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Cancelled
        })
    );
    // Shipped stock is not returned.
    assert_eq!(system.item_client.check_stock(item).await.unwrap(), 4);

    system.shutdown().await.unwrap();
}

/// Ratings [4, 5, 3] average to 4.00.
#[tokio::test]
async fn test_sequential_ratings_average() {
    let system = start();
    let vendor = register(&system, "vera", CustomerType::Vendor).await;

    for stars in [4, 5, 3] {
        rate(&system, vendor, "rater@example.com", stars).await;
    }

    assert_eq!(average(&system, vendor).await, dec!(4.00));
    assert_eq!(system.comment_client.comments_for(vendor).await.unwrap().len(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_soft_delete_reverts_the_average() {
    let system = start();
    let vendor = register(&system, "vera", CustomerType::Vendor).await;
    rate(&system, vendor, "a@example.com", 4).await;
    rate(&system, vendor, "b@example.com", 3).await;
    let before = average(&system, vendor).await;

    let five = rate(&system, vendor, "c@example.com", 5).await;
    assert_eq!(average(&system, vendor).await, dec!(4.00));

    system
        .comment_client
        .soft_delete(five, "C@example.com")
        .await
        .expect("Failed to delete comment");
    assert_eq!(average(&system, vendor).await, before);

    // The row is kept, but hidden from reads.
    let row = system.comment_client.get(five).await.unwrap().unwrap();
    assert!(row.deleted);
    let visible = system.comment_client.comments_for(vendor).await.unwrap();
    assert!(visible.iter().all(|c| c.id != five));

    assert_eq!(
        system.comment_client.soft_delete(five, "c@example.com").await,
        Err(CommentError::AlreadyDeleted(five))
    );
    assert_eq!(
        system.comment_client.delete(five).await,
        Err(CommentError::HardDeleteForbidden(five))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleting_the_only_rating_resets_to_zero() {
    let system = start();
    let vendor = register(&system, "vera", CustomerType::Vendor).await;
    let only = rate(&system, vendor, "a@example.com", 5).await;

    system.comment_client.soft_delete(only, "a@example.com").await.unwrap();

    assert_eq!(average(&system, vendor).await, dec!(0.00));
    let user = system.user_client.get(vendor).await.unwrap().unwrap();
    assert_eq!(user.rating.count, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_only_the_author_may_delete_and_vendors_cannot_self_rate() {
    let system = start();
    let vendor = register(&system, "vera", CustomerType::Vendor).await;
    let comment = rate(&system, vendor, "a@example.com", 2).await;

    let forbidden = system.comment_client.soft_delete(comment, "b@example.com").await;
    assert!(matches!(forbidden, Err(CommentError::Forbidden(_))));
    assert_eq!(average(&system, vendor).await, dec!(2));

    let self_rating = system
        .comment_client
        .post_comment(CommentCreate {
            vendor,
            item: None,
            name: "Vera".into(),
            email: "VERA@example.com".into(),
            comment: None,
            rating: Rating::from_integer(5).unwrap(),
        })
        .await;
    assert_eq!(self_rating, Err(CommentError::SelfRating));
    assert_eq!(average(&system, vendor).await, dec!(2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_moderation_moves_ratings_in_and_out() {
    let system = start();
    let vendor = register(&system, "vera", CustomerType::Vendor).await;
    rate(&system, vendor, "a@example.com", 4).await;
    let harsh = rate(&system, vendor, "b@example.com", 1).await;
    assert_eq!(average(&system, vendor).await, dec!(2.50));

    let hidden = system.comment_client.moderate(harsh, false).await.unwrap();
    assert!(!hidden.approved);
    assert_eq!(average(&system, vendor).await, dec!(4));

    let restored = system.comment_client.moderate(harsh, true).await.unwrap();
    assert!(restored.approved);
    assert_eq!(average(&system, vendor).await, dec!(2.50));
    assert_eq!(system.comment_client.comments_for(vendor).await.unwrap().len(), 2);

    system.comment_client.moderate(harsh, false).await.unwrap();
    assert_eq!(average(&system, vendor).await, dec!(4));

    // Deleting a hidden comment does not touch the average again.
    system.comment_client.soft_delete(harsh, "b@example.com").await.unwrap();
    assert_eq!(average(&system, vendor).await, dec!(4));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_registration_uniqueness_and_staff_rules() {
    let system = start();
    let alice = register(&system, "alice", CustomerType::Buyer).await;

    let duplicate = system
        .user_client
        .register_customer(
            AccountDetails::new("someone", "ALICE@Example.com"),
            CustomerProfile::default(),
        )
        .await;
    assert!(matches!(duplicate, Err(UserError::AlreadyExists(_))));

    let forbidden = system
        .user_client
        .register_employee(
            alice,
            AccountDetails::new("eve", "eve@example.com"),
            EmployeeProfile::default(),
        )
        .await;
    assert!(matches!(forbidden, Err(UserError::Forbidden(_))));

    let wrong_profile = system
        .user_client
        .update_profile(
            alice,
            UserUpdate {
                employee: Some(EmployeeProfile::default()),
                ..UserUpdate::default()
            },
        )
        .await;
    assert!(matches!(wrong_profile, Err(UserError::Forbidden(_))));

    let found = system.user_client.find_by_username("ALICE").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(alice));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_email_verification_gates_customer_listing() {
    let system = start();
    let vera = register(&system, "vera", CustomerType::Vendor).await;
    let bob = register(&system, "bob", CustomerType::Buyer).await;

    let page = system.config.first_page();
    assert_eq!(system.user_client.list_customers(None, page).await.unwrap().total, 0);

    system.user_client.verify_email(vera).await.unwrap();
    system.user_client.verify_email(bob).await.unwrap();
    assert_eq!(
        system.user_client.request_verification(bob).await,
        Err(UserError::AlreadyVerified(bob))
    );

    let vendors = system
        .user_client
        .list_customers(Some(CustomerType::Vendor), page)
        .await
        .unwrap();
    assert_eq!(vendors.items.iter().map(|u| u.id).collect::<Vec<_>>(), vec![vera]);

    // Changing the email clears verification.
    let updated = system
        .user_client
        .update_profile(
            bob,
            UserUpdate {
                email: Some("bob@new.example.com".into()),
                ..UserUpdate::default()
            },
        )
        .await
        .unwrap();
    assert!(!updated.email_verified);
    system.user_client.request_verification(bob).await.unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_contact_form() {
    let system = start();

    let id = system
        .contact_client
        .submit(ContactCreate {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            message: "Do you ship abroad?".into(),
        })
        .await
        .unwrap();

    let contacts = system.contact_client.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id, id);
    assert_eq!(contacts[0].name, "Ada");

    let blank = system
        .contact_client
        .submit(ContactCreate {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "   ".into(),
        })
        .await;
    assert!(blank.is_err());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_editing_comment_text_keeps_rating() {
    let system = start();
    let vendor = register(&system, "vera", CustomerType::Vendor).await;
    let comment = rate(&system, vendor, "a@example.com", 4).await;

    let edited = system
        .comment_client
        .edit_comment(
            comment,
            CommentEdit {
                comment: Some("Arrived early".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.comment.as_deref(), Some("Arrived early"));
    assert!(edited.date_updated >= edited.date_created);
    assert_eq!(average(&system, vendor).await, dec!(4));

    system.comment_client.soft_delete(comment, "a@example.com").await.unwrap();
    let after_delete = system
        .comment_client
        .edit_comment(comment, CommentEdit { comment: None })
        .await;
    assert_eq!(after_delete, Err(CommentError::AlreadyDeleted(comment)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_item_updates_reslug_and_inactive_items_are_hidden() {
    let system = start();
    let widget = stock_item(&system, 5).await;
    let lamp = system
        .item_client
        .create_item(ItemCreate::new("Desk Lamp", 1999, 2))
        .await
        .unwrap();

    let renamed = system
        .item_client
        .update_item(
            widget,
            ItemUpdate {
                title: Some("  Mega Widget 2000! ".into()),
                price: Some(3000),
                ..ItemUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.title, "Mega Widget 2000!");
    assert_eq!(renamed.slug, "mega-widget-2000");
    assert_eq!(renamed.price, 3000);
    assert_eq!(renamed.stock, 5);

    let listed: Vec<ItemId> = system
        .item_client
        .list_items()
        .await
        .unwrap()
        .iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(listed, vec![widget, lamp]);

    system
        .item_client
        .update_item(
            lamp,
            ItemUpdate {
                status: Some(ItemStatus::Inactive),
                ..ItemUpdate::default()
            },
        )
        .await
        .unwrap();
    let listed: Vec<ItemId> = system
        .item_client
        .list_items()
        .await
        .unwrap()
        .iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(listed, vec![widget]);
    assert_eq!(system.item_client.list().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_hard_deletes_are_refused_so_open_orders_can_cancel() {
    let system = start();
    let buyer = register(&system, "alice", CustomerType::Buyer).await;
    let item = stock_item(&system, 4).await;
    let order = system
        .order_client
        .place_order(OrderCreate {
            buyer,
            item,
            quantity: 3,
        })
        .await
        .unwrap();

    assert_eq!(
        system.item_client.delete(item).await,
        Err(ItemError::HardDeleteForbidden(item))
    );
    assert_eq!(
        system.user_client.delete(buyer).await,
        Err(UserError::HardDeleteForbidden(buyer))
    );

    let cancelled = system.order_client.mark_cancelled(order.id).await.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(system.item_client.check_stock(item).await.unwrap(), 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_oversized_weights_are_rejected_and_orders_keep_working() {
    let system = start();
    let buyer = register(&system, "alice", CustomerType::Buyer).await;

    let heavy = system
        .item_client
        .create_item(ItemCreate {
            weight: dec!(70000000000000000000000000000),
            ..ItemCreate::new("Neutron Star", 100, 1000)
        })
        .await;
    assert!(matches!(heavy, Err(ItemError::ValidationError(_))));

    let crate_item = system
        .item_client
        .create_item(ItemCreate {
            weight: dec!(9999999.999),
            ..ItemCreate::new("Shipping Crate", 100, 1000)
        })
        .await
        .unwrap();
    let order = system
        .order_client
        .place_order(OrderCreate {
            buyer,
            item: crate_item,
            quantity: 1000,
        })
        .await
        .unwrap();
    assert_eq!(order.total_weight, dec!(9999999999));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_profile_email_is_trimmed_before_validation() {
    let system = start();
    let bob = register(&system, "bob", CustomerType::Buyer).await;

    let updated = system
        .user_client
        .update_profile(
            bob,
            UserUpdate {
                email: Some("  bob@New.Example.com ".into()),
                ..UserUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.email, "bob@new.example.com");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_find_by_username_folds_non_ascii_case() {
    let system = start();
    let elodie = system
        .user_client
        .register_customer(
            AccountDetails::new("Élodie", "elodie@example.com"),
            CustomerProfile::default(),
        )
        .await
        .unwrap();

    let found = system.user_client.find_by_username("éLODIE").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(elodie));

    let duplicate = system
        .user_client
        .register_customer(
            AccountDetails::new("ÉLODIE", "other@example.com"),
            CustomerProfile::default(),
        )
        .await;
    assert!(matches!(duplicate, Err(UserError::AlreadyExists(_))));

    system.shutdown().await.unwrap();
}
