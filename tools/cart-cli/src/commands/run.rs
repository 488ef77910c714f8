//! Replay a shopping session against a fresh cart.

use anyhow::{Context as _, Result};
use cart_store::cart::{CartStore, CartView, CommandOutcome};
use serde::Serialize;

use super::RunArgs;
use crate::context::Context;
use crate::session::{Session, SessionAction};

/// JSON report for a session run.
#[derive(Serialize)]
struct RunReport {
    actions: Vec<ActionRecord>,
    cart: CartView,
}

#[derive(Serialize)]
struct ActionRecord {
    action: SessionAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<CommandOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the run command.
pub fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.session);
    let session = Session::load(&path)?;
    ctx.output.debug(&format!(
        "Loaded {} products and {} actions from {}",
        session.catalog.len(),
        session.actions.len(),
        path.display()
    ));

    let mut cart = CartStore::with_config(ctx.config.cart.clone())?;
    let total = session.actions.len();
    tracing::info!(session = %path.display(), actions = total, "replaying session");
    let mut records = Vec::with_capacity(total);

    for (index, action) in session.actions.iter().enumerate() {
        let result = session
            .resolve(action)
            .and_then(|command| cart.dispatch(command).map_err(Into::into))
            .with_context(|| format!("Action {} ({}) failed", index + 1, action.label()));

        match result {
            Ok(outcome) => {
                ctx.output.action(index + 1, total, action, &outcome);
                records.push(ActionRecord {
                    action: action.clone(),
                    outcome: Some(outcome),
                    error: None,
                });
            }
            Err(e) if args.keep_going => {
                ctx.output.error(&format!("{:#}", e));
                records.push(ActionRecord {
                    action: action.clone(),
                    outcome: None,
                    error: Some(format!("{:#}", e)),
                });
            }
            Err(e) => return Err(e),
        }
    }

    let view = cart.view()?;
    if ctx.output.is_json() {
        ctx.output.json(&RunReport {
            actions: records,
            cart: view,
        });
    } else {
        ctx.output.cart(&view);
    }
    Ok(())
}
