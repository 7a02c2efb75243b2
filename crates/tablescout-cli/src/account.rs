use std::sync::Arc;

use tablescout_app::{AppContext, Outcome};
use tablescout_core::view::{self, ProfileView};
use tablescout_core::{AppConfig, KeyValueStore, Session};

use crate::output;

fn print_session(verb: &str, session: &Session, reload: Option<&Outcome>, ctx: &AppContext) {
    println!("{verb} as {} <{}>", session.name, session.email);
    if let Some(listings) = reload.and_then(Outcome::listings) {
        println!();
        output::print_cards(ctx.view().title(), &view::cards(listings));
    }
}

pub(crate) async fn run_login(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
    email: &str,
    password: &str,
    json: bool,
) -> anyhow::Result<()> {
    let ctx = AppContext::from_config(config, store)?;
    ctx.restore();
    let (session, reload) = ctx.login(email, password).await;
    if json {
        return output::print_json(&ProfileView::from(&session));
    }
    print_session("signed in", &session, reload.as_ref(), &ctx);
    Ok(())
}

pub(crate) async fn run_signup(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
    email: &str,
    name: &str,
    password: &str,
    json: bool,
) -> anyhow::Result<()> {
    let ctx = AppContext::from_config(config, store)?;
    ctx.restore();
    let (session, reload) = ctx.signup(email, name, password).await;
    if json {
        return output::print_json(&ProfileView::from(&session));
    }
    print_session("registered", &session, reload.as_ref(), &ctx);
    Ok(())
}

/// Clears the stored session. No listings are shown, so the reload that
/// follows a session change in the browse flow is skipped.
pub(crate) fn run_logout(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
) -> anyhow::Result<()> {
    let ctx = AppContext::from_config(config, store)?;
    if ctx.restore().is_none() {
        println!("not signed in");
        return Ok(());
    }
    ctx.session().logout();
    println!("signed out");
    Ok(())
}

/// Prints the signed-in profile, or points at `login` when there is none.
pub(crate) fn run_profile(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
    json: bool,
) -> anyhow::Result<()> {
    let ctx = AppContext::from_config(config, store)?;
    ctx.restore();
    let Some(profile) = ctx.profile() else {
        println!("not signed in; run `tablescout login` first");
        return Ok(());
    };
    if json {
        return output::print_json(&profile);
    }
    output::print_profile(&profile);
    Ok(())
}
