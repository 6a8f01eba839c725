//! Rating commands - rate accepted interactions and list ratings

use anyhow::bail;
use repulink::core::models::NewRating;
use repulink::core::services::Eligibility;
use repulink::output::{OperationResult, RatingList};

use super::Context;
use super::interactions::find_interaction;

/// Rate an accepted interaction
pub async fn rate(ctx: &Context, id: &str, score: i8, comment: Option<&str>) -> anyhow::Result<()> {
    let viewer = ctx.client.users().viewer_id().await?;
    let interaction = find_interaction(ctx, &viewer, id).await?;
    match ctx.client.interactions().eligibility(&interaction, &viewer).await? {
        Eligibility::Accepted { has_rated: false } => {},
        Eligibility::Accepted { has_rated: true } => {
            bail!("You have already rated this interaction")
        },
        Eligibility::Pending(_) | Eligibility::Denied => {
            bail!("Only accepted interactions can be rated (this one is {})", interaction.status)
        },
    }

    let mut payload = NewRating::new(score);
    if let Some(comment) = comment {
        payload = payload.with_comment(comment);
    }
    let rating = ctx.client.ratings().add(id, &payload).await?;

    OperationResult::ok(
        format!("Rated interaction {id} {}", rating.signed_score()),
        serde_json::to_value(&rating).ok(),
    )
    .render(ctx.mode);
    Ok(())
}

/// List ratings of an interaction
pub async fn ratings(ctx: &Context, id: &str) -> anyhow::Result<()> {
    let ratings = ctx.client.ratings().for_interaction(Some(id)).await?;
    RatingList {
        interaction_id: id.to_string(),
        ratings,
    }
    .render(ctx.mode);
    Ok(())
}
