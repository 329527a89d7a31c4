//! Browser-side helpers for the finance dashboard: the account creation
//! dialog, palette-based chart theming and the monthly debit pie charts.

pub mod account;
pub mod api;
pub mod chart;
pub mod colors;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod swatches;

use tracing::{debug, error, warn};

use crate::chart::component::MonthlyDebitsPanelProps;
use crate::chart::MonthlyDebitsPanel;
use crate::config::FrontendConfig;
use crate::swatches::{PaletteSwatches, SWATCHES_ELEMENT_ID};

pub use error::{FrontendError, Result};

/// Wire every widget the current page carries.
pub fn start() {
    let config = FrontendConfig::load();
    logging::init_logging(&config.log_level);

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            warn!(error = %err, "not running in a page; nothing to do");
            return;
        }
    };

    if let Err(err) = account::dom::attach(&document, &config.account_form) {
        error!(error = %err, "could not attach account form handlers");
    }

    match document.get_element_by_id(&config.chart.container_id) {
        Some(root) => {
            let props = MonthlyDebitsPanelProps {
                url: config.yearly_debit_url.clone(),
                config: config.chart.clone(),
            };
            yew::Renderer::<MonthlyDebitsPanel>::with_root_and_props(root, props).render();
        }
        None => debug!(id = %config.chart.container_id, "no chart container on this page"),
    }

    if let Some(root) = document.get_element_by_id(SWATCHES_ELEMENT_ID) {
        yew::Renderer::<PaletteSwatches>::with_root(root).render();
    }
}
