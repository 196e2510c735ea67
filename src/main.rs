use rust_decimal::Decimal;
use storefront::config::StorefrontConfig;
use storefront::framework::ActorClient;
use storefront::lifecycle::{setup_tracing, StorefrontSystem};
use storefront::model::{
    AccountDetails, CommentCreate, CustomerProfile, CustomerType, ItemCreate, OrderCreate, Rating,
};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    info!(?config, "Starting storefront demo");
    let system = StorefrontSystem::new(config)?;

    let span = tracing::info_span!("registration");
    let (vendor, buyer) = async {
        let vendor = system
            .user_client
            .register_customer(
                AccountDetails::new("ada", "ada@example.com"),
                CustomerProfile {
                    user_type: CustomerType::Vendor,
                    store_url: Some("https://ada.example.com".into()),
                    ..CustomerProfile::default()
                },
            )
            .await?;
        let buyer = system
            .user_client
            .register_customer(
                AccountDetails::new("bob", "bob@example.com"),
                CustomerProfile::default(),
            )
            .await?;
        Ok::<_, storefront::user_actor::UserError>((vendor, buyer))
    }
    .instrument(span)
    .await?;

    let lamp = system
        .item_client
        .create_item(ItemCreate {
            vendor: Some(vendor),
            weight: Decimal::new(1250, 3),
            ..ItemCreate::new("Desk Lamp", 2500, 3)
        })
        .await?;

    let span = tracing::info_span!("order_processing");
    async {
        let order = system
            .order_client
            .place_order(OrderCreate {
                buyer,
                item: lamp,
                quantity: 2,
            })
            .await?;
        info!(order = %order.id, total = %order.total_amount(), "Order placed");

        // Only one lamp left.
        match system
            .order_client
            .place_order(OrderCreate {
                buyer,
                item: lamp,
                quantity: 2,
            })
            .await
        {
            Ok(order) => info!(order = %order.id, "Unexpectedly placed second order"),
            Err(e) => error!(error = %e, "Second order rejected"),
        }

        system.order_client.mark_cancelled(order.id).await?;
        Ok::<_, storefront::order_actor::OrderError>(())
    }
    .instrument(span)
    .await?;
    info!(stock = system.item_client.check_stock(lamp).await?, "Stock after cancel");

    let span = tracing::info_span!("rating");
    async {
        for stars in [4, 5, 3] {
            system
                .comment_client
                .post_comment(CommentCreate {
                    vendor,
                    item: Some(lamp),
                    name: "Bob".into(),
                    email: "bob@example.com".into(),
                    comment: Some(format!("{stars} stars")),
                    rating: Rating::from_integer(stars)?,
                })
                .await?;
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    if let Some(vendor) = system.user_client.get(vendor).await? {
        info!(vendor = %vendor.username, average = %vendor.avg_rating(), "Vendor rating");
    }

    system.shutdown().await?;
    info!("Storefront demo completed successfully");
    Ok(())
}
