use tracing::{debug, info};

use crate::api::{AccountFormResponse, SubmitOutcome};
use crate::config::AccountFormConfig;

/// Name of the selects that receive the `parent` option markup.
const PARENT_FIELD: &str = "parent";

/// A `<select>` the controller can rewrite.
pub trait SelectControl {
    fn name(&self) -> String;
    fn value(&self) -> String;
    /// Select the option carrying `value`. Returns `false` when the control
    /// offers no such option and kept its current selection.
    fn set_value(&mut self, value: &str) -> bool;
    fn replace_options(&mut self, markup: &str);
    fn select_first(&mut self);
}

/// A table row holding account selects and a summary grouping field.
pub trait AccountRow {
    type Select: SelectControl;

    /// Value of the row's summary field; `None` when the row has none.
    fn summary(&self) -> Option<String>;
    fn selects_mut(&mut self) -> &mut [Self::Select];
}

/// The account-creation dialog.
pub trait AccountDialog {
    fn hide(&mut self);
    fn replace_body(&mut self, markup: &str);
}

/// Applies submit results and keeps summary-linked rows in step.
#[derive(Debug, Clone)]
pub struct AccountFormController {
    config: AccountFormConfig,
}

impl AccountFormController {
    pub fn new(config: AccountFormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccountFormConfig {
        &self.config
    }

    /// Whether edits to the select named `name` are tracked.
    pub fn handles_select(&self, name: &str) -> bool {
        name != self.config.account_type_field
    }

    /// Route a submit result: refresh the selects and close the dialog, or
    /// show the returned form in the dialog.
    pub fn apply_outcome<S, D>(&self, outcome: &SubmitOutcome, selects: &mut [S], dialog: &mut D)
    where
        S: SelectControl,
        D: AccountDialog,
    {
        match outcome {
            SubmitOutcome::Saved(response) => {
                let refreshed = self.refresh_options(selects, response);
                info!(refreshed, new_pk = ?response.new_pk, "account saved");
                dialog.hide();
            }
            SubmitOutcome::Rejected(markup) => {
                info!("account form rejected");
                dialog.replace_body(markup);
            }
        }
    }

    /// Replace the options of every tracked select, keeping each one's value
    /// when the new list still offers it. Returns how many selects changed.
    pub fn refresh_options<S: SelectControl>(
        &self,
        selects: &mut [S],
        response: &AccountFormResponse,
    ) -> usize {
        let mut refreshed = 0;
        for select in selects.iter_mut() {
            let name = select.name();
            if !self.handles_select(&name) {
                continue;
            }
            let markup = match response.parent.as_deref() {
                Some(parent) if name == PARENT_FIELD => parent,
                _ => response.result.as_str(),
            };

            let prior = select.value();
            select.replace_options(markup);
            // the control parsed the markup; only it knows what is offered
            let kept = select.set_value(&prior);
            if !kept {
                select.select_first();
            }
            debug!(select = %name, prior = %prior, kept, "refreshed options");
            refreshed += 1;
        }
        refreshed
    }

    /// Copy `new_value` into the empty selects of every other row whose summary
    /// matches the edited row's. Returns how many selects were filled.
    pub fn propagate_account_type<R: AccountRow>(
        &self,
        rows: &mut [R],
        edited: usize,
        new_value: &str,
    ) -> usize {
        if !self.config.sync_summary_rows {
            return 0;
        }
        let Some(summary) = rows.get(edited).and_then(|row| row.summary()) else {
            return 0;
        };

        let mut filled = 0;
        for (index, row) in rows.iter_mut().enumerate() {
            if index == edited || row.summary().as_deref() != Some(summary.as_str()) {
                continue;
            }
            for select in row.selects_mut() {
                if select.value().is_empty() && select.set_value(new_value) {
                    filled += 1;
                }
            }
        }
        debug!(summary = %summary, value = new_value, filled, "propagated account type");
        filled
    }
}
