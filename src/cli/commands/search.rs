//! Search command - find users to endorse or interact with

use repulink::output::SearchResult;

use super::Context;

/// Search users by name or email
pub async fn search(ctx: &Context, query: &str) -> anyhow::Result<()> {
    let page = ctx.client.users().search(Some(query)).await?;
    SearchResult::new(query, page).render(ctx.mode);
    Ok(())
}
