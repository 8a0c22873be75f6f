//! Root application component and browser bootstrap.

use canvas::config::CanvasConfig;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::canvas_host::CanvasHost;
#[cfg(feature = "csr")]
use crate::error::HostError;
#[cfg(feature = "csr")]
use crate::util::host::load_config;

/// Root application component.
#[component]
pub fn App(config: CanvasConfig) -> impl IntoView {
    provide_meta_context();
    let title = config.title.clone();

    view! {
        <Title text=title/>
        <CanvasHost config=config/>
    }
}

/// Resolve configuration from the page and mount [`App`] into `<body>`.
///
/// # Errors
///
/// Returns [`HostError::NoWindow`] or [`HostError::NoDocument`] outside a browser page.
#[cfg(feature = "csr")]
pub fn launch() -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    let config = load_config(&document);
    log::info!("starting \"{}\" at {}x{}", config.title, config.width, config.height);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
    Ok(())
}
