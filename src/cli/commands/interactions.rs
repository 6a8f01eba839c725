//! Interaction commands - send, list, inspect and answer requests

use anyhow::{anyhow, bail};
use repulink::core::models::{
    Interaction, InteractionRole, InteractionStatus, NewInteraction, Rating,
};
use repulink::core::services::InteractionView;
use repulink::output::{InteractionDetail, InteractionList, InteractionRow, OperationResult};
use repulink::resources::InteractionFilter;

use super::Context;

/// Find one of the viewer's interactions by ID
///
/// Fails when the viewer is not a party to it.
pub(super) async fn find_interaction(
    ctx: &Context,
    viewer_id: &str,
    id: &str,
) -> anyhow::Result<Interaction> {
    let interactions = ctx.client.interactions().for_user(Some(viewer_id)).await?;
    interactions
        .into_iter()
        .find(|i| i.id == id)
        .ok_or_else(|| anyhow!("Interaction '{id}' not found"))
}

async fn ratings_if_accepted(ctx: &Context, interaction: &Interaction) -> anyhow::Result<Vec<Rating>> {
    if interaction.status == InteractionStatus::Accepted {
        Ok(ctx.client.ratings().for_interaction(Some(&interaction.id)).await?)
    } else {
        Ok(Vec::new())
    }
}

/// Send an interaction request
pub async fn interact(ctx: &Context, user_id: &str, message: Option<&str>) -> anyhow::Result<()> {
    let mut payload = NewInteraction::new(user_id);
    if let Some(message) = message {
        payload = payload.with_message(message);
    }
    let interaction = ctx.client.interactions().create(&payload).await?;

    OperationResult::ok(
        format!("Sent interaction request {} to {}", interaction.id, interaction.target_id),
        serde_json::to_value(&interaction).ok(),
    )
    .render(ctx.mode);
    Ok(())
}

/// List the viewer's interactions
pub async fn interactions(
    ctx: &Context,
    role: Option<&str>,
    skip: Option<u32>,
    limit: Option<u32>,
) -> anyhow::Result<()> {
    let role = role.map(str::parse::<InteractionRole>).transpose().map_err(|e: String| anyhow!(e))?;
    let filter = InteractionFilter { role, skip, limit };

    let viewer = ctx.client.users().viewer_id().await?;
    let interactions = ctx.client.interactions().for_user_filtered(Some(&viewer), filter).await?;

    let mut rows = Vec::with_capacity(interactions.len());
    for interaction in &interactions {
        let ratings = ratings_if_accepted(ctx, interaction).await?;
        let view = InteractionView::new(interaction, &viewer, &ratings);
        rows.push(InteractionRow::from(&view));
    }

    InteractionList { interactions: rows }.render(ctx.mode);
    Ok(())
}

/// Show one interaction with its ratings and the viewer's options
pub async fn show(ctx: &Context, id: &str) -> anyhow::Result<()> {
    let viewer = ctx.client.users().viewer_id().await?;
    let interaction = find_interaction(ctx, &viewer, id).await?;

    let ratings = ratings_if_accepted(ctx, &interaction).await?;
    let row = InteractionRow::from(&InteractionView::new(&interaction, &viewer, &ratings));

    InteractionDetail {
        row,
        message: interaction.message.clone(),
        ratings,
    }
    .render(ctx.mode);
    Ok(())
}

/// Accept or deny an interaction
pub async fn respond(ctx: &Context, id: &str, accept: bool) -> anyhow::Result<()> {
    let viewer = ctx.client.users().viewer_id().await?;
    let interaction = find_interaction(ctx, &viewer, id).await?;
    let view = InteractionView::new(&interaction, &viewer, &[]);
    if !view.eligibility.can_respond() {
        bail!(
            "Only the recipient of a pending interaction can respond (this one is {})",
            interaction.status
        );
    }

    let outcome = ctx.client.interactions().respond(id, accept).await?;
    let status = outcome.status().unwrap_or_else(|| InteractionStatus::from_response(accept));

    OperationResult::ok(format!("Interaction {status}"), serde_json::to_value(&outcome).ok())
        .render(ctx.mode);
    Ok(())
}
