//! One landing-page view: load metadata, detect, resolve, present.

use anyhow::{Result, anyhow};
use log::{debug, info};

use crate::{
    config::Config,
    metadata,
    navigator::Navigator,
    platform::{CanonicalPlatform, detect},
    presentation::{ButtonAction, ButtonChoice, Notice, PageLayout, Presenter},
    resolver::{PresentationDecision, resolve},
};

/// What a completed page view produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub platform: CanonicalPlatform,
    pub decision: PresentationDecision,
    pub layout: PageLayout,
}

/// Run the page view once.
///
/// A metadata failure is shown as a single fatal notice and returned as a
/// [`metadata::MetadataFetchError`]; nothing else is rendered in that case.
#[tracing::instrument(skip(config, presenter))]
pub async fn run<N: Navigator, P: Presenter + ?Sized>(
    config: &Config<N>,
    presenter: &mut P,
) -> Result<PageView> {
    let table = match metadata::load(&config.http_client, &config.metadata).await {
        Ok(table) => table,
        Err(e) => {
            presenter.notice(&Notice::fatal(format!(
                "Failed to load download information. {}",
                e
            )))?;
            return Err(e.into());
        }
    };

    let platform = detect(&config.navigator, config.hint_timeout).await;
    info!("Detected platform: {}", platform);

    let decision = resolve(&platform, &table);
    let layout = PageLayout::build(&decision, &table);
    presenter.render(&layout)?;

    if let Some(choice) = config.activate {
        click(&layout, choice, presenter)?;
    }

    Ok(PageView {
        platform,
        decision,
        layout,
    })
}

/// Activate a button: navigate to its URL, or tell the user nothing is available.
pub fn click<P: Presenter + ?Sized>(
    layout: &PageLayout,
    choice: ButtonChoice,
    presenter: &mut P,
) -> Result<()> {
    let button = layout
        .button(choice)
        .ok_or_else(|| anyhow!("This page has no {:?} download button", choice))?;
    debug!("Activating {:?}", button);

    match button.activate() {
        ButtonAction::Navigate(url) => presenter.navigate(&url),
        ButtonAction::Unavailable(notice) => presenter.notice(&notice),
    }
}
