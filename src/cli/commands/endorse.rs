//! Endorsement commands - give endorsements and list them

use repulink::core::models::NewEndorsement;
use repulink::output::{EndorsementList, EndorsementSide, OperationResult};

use super::Context;

/// Endorse a user
pub async fn endorse(ctx: &Context, user_id: &str, confidence: f64) -> anyhow::Result<()> {
    let payload = NewEndorsement::new(user_id, confidence);
    let endorsement = ctx.client.endorsements().create(&payload).await?;

    OperationResult::ok(
        format!("Endorsed {} with confidence {:.2}", endorsement.endorsed_id, endorsement.confidence),
        serde_json::to_value(&endorsement).ok(),
    )
    .render(ctx.mode);
    Ok(())
}

/// List endorsements given (or received) by the viewer or another user
pub async fn endorsements(ctx: &Context, endorsers: bool, user: Option<&str>) -> anyhow::Result<()> {
    let api = ctx.client.endorsements();
    let (side, endorsements) = match (user, endorsers) {
        (None, false) => (EndorsementSide::Given, api.endorsed_by_me().await?),
        (None, true) => (EndorsementSide::Received, api.endorsing_me().await?),
        (Some(user), false) => (EndorsementSide::Given, api.endorsed_by_user(Some(user)).await?),
        (Some(user), true) => (EndorsementSide::Received, api.endorsers_of(Some(user)).await?),
    };

    EndorsementList { side, endorsements }.render(ctx.mode);
    Ok(())
}
