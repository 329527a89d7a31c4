//! Binds the account controller to the live page.

use std::rc::Rc;

use tracing::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, HtmlTextAreaElement, NodeList,
};

use super::controller::{AccountDialog, AccountFormController, AccountRow, SelectControl};
use crate::api::submit_form;
use crate::config::AccountFormConfig;
use crate::dom;
use crate::error::Result;

pub struct DomSelect(HtmlSelectElement);

impl SelectControl for DomSelect {
    fn name(&self) -> String {
        self.0.name()
    }

    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&mut self, value: &str) -> bool {
        self.0.set_value(value);
        // an unmatched value leaves the select with no selection at all
        self.0.selected_index() >= 0 && self.0.value() == value
    }

    fn replace_options(&mut self, markup: &str) {
        self.0.set_inner_html(markup);
    }

    fn select_first(&mut self) {
        self.0.set_selected_index(0);
    }
}

pub struct DomRow {
    summary: Option<String>,
    selects: Vec<DomSelect>,
}

impl DomRow {
    fn read(row: &Element, summary_suffix: &str) -> Result<Self> {
        let summary = row
            .query_selector(&format!("[name$='{summary_suffix}']"))?
            .and_then(|field| field_value(&field));
        Ok(Self {
            summary,
            selects: selects_in(row)?,
        })
    }
}

impl AccountRow for DomRow {
    type Select = DomSelect;

    fn summary(&self) -> Option<String> {
        self.summary.clone()
    }

    fn selects_mut(&mut self) -> &mut [DomSelect] {
        &mut self.selects
    }
}

/// Bootstrap-style modal: hidden by dropping its open classes.
pub struct DomDialog {
    dialog: Option<Element>,
    body: Option<Element>,
}

impl DomDialog {
    fn find(document: &Document, config: &AccountFormConfig) -> Self {
        Self {
            dialog: document.get_element_by_id(&config.dialog_id),
            body: document.get_element_by_id(&config.dialog_body_id),
        }
    }

    fn close(dialog: &Element) -> Result<()> {
        dialog.class_list().remove_2("in", "show")?;
        dialog.set_attribute("aria-hidden", "true")?;
        dom::set_displayed(dialog, false)?;

        let document = dom::document()?;
        if let Some(body) = document.body() {
            body.class_list().remove_1("modal-open")?;
        }
        let backdrops = document.query_selector_all(".modal-backdrop")?;
        for i in 0..backdrops.length() {
            if let Some(backdrop) = backdrops.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                backdrop.remove();
            }
        }
        Ok(())
    }
}

impl AccountDialog for DomDialog {
    fn hide(&mut self) {
        match &self.dialog {
            Some(dialog) => {
                if let Err(err) = Self::close(dialog) {
                    warn!(error = %err, "could not close account dialog");
                }
            }
            None => debug!("no account dialog to close"),
        }
    }

    fn replace_body(&mut self, markup: &str) {
        match &self.body {
            Some(body) => body.set_inner_html(markup),
            None => warn!("account dialog body is missing; dropping returned form"),
        }
    }
}

/// Install the submit and change handlers.
///
/// Both listen on the document so a form re-rendered into the dialog keeps
/// working.
pub fn attach(document: &Document, config: &AccountFormConfig) -> Result<()> {
    let controller = Rc::new(AccountFormController::new(config.clone()));

    let on_submit = {
        let controller = controller.clone();
        Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
            let Some(form) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
            else {
                return;
            };
            if form.id() != controller.config().form_id {
                return;
            }
            event.prevent_default();
            submit(controller.clone(), &form);
        }))
    };
    document.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    let on_change = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
        let Some(select) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        if !controller.handles_select(&select.name()) {
            return;
        }
        if let Err(err) = sync_rows(&controller, &select) {
            warn!(error = %err, "could not propagate account type");
        }
    }));
    document.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    debug!(form = %config.form_id, "account form handlers attached");
    Ok(())
}

fn submit(controller: Rc<AccountFormController>, form: &HtmlFormElement) {
    let method = form.method();
    let action = form.action();
    let fields = serialize_form(form);

    spawn_local(async move {
        let outcome = match submit_form(&method, &action, &fields).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(url = %action, error = %err, "account form submit failed");
                return;
            }
        };
        let document = match dom::document() {
            Ok(document) => document,
            Err(err) => {
                error!(error = %err, "page went away before the account form answered");
                return;
            }
        };
        let mut selects = match document.query_selector_all("select") {
            Ok(nodes) => collect_selects(&nodes),
            Err(err) => {
                error!(error = ?err, "could not collect selects");
                return;
            }
        };
        let mut dialog = DomDialog::find(&document, controller.config());
        controller.apply_outcome(&outcome, &mut selects, &mut dialog);
    });
}

fn sync_rows(controller: &AccountFormController, select: &HtmlSelectElement) -> Result<()> {
    let Some(edited_row) = select.closest("tr")? else {
        return Ok(());
    };
    let suffix = &controller.config().summary_suffix;
    let row_elements = dom::document()?.query_selector_all("tr")?;

    let mut rows = Vec::new();
    let mut edited = None;
    for i in 0..row_elements.length() {
        let Some(row) = row_elements.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if row.is_same_node(Some(&edited_row)) {
            edited = Some(rows.len());
        }
        rows.push(DomRow::read(&row, suffix)?);
    }

    if let Some(edited) = edited {
        controller.propagate_account_type(&mut rows, edited, &select.value());
    }
    Ok(())
}

fn selects_in(root: &Element) -> Result<Vec<DomSelect>> {
    Ok(collect_selects(&root.query_selector_all("select")?))
}

fn collect_selects(nodes: &NodeList) -> Vec<DomSelect> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlSelectElement>().ok())
        .map(DomSelect)
        .collect()
}

fn field_value(field: &Element) -> Option<String> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        Some(area.value())
    } else {
        field.get_attribute("value")
    }
}

/// A named form control as far as serialization cares.
#[derive(Debug, Clone, PartialEq)]
enum FormControl {
    Input { kind: String, checked: bool, value: String },
    Select { selected: Vec<String> },
    TextArea { value: String },
}

impl FormControl {
    /// `None` for disabled controls and elements that carry no value.
    fn read(element: &Element) -> Option<Self> {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            (!input.disabled()).then(|| Self::Input {
                kind: input.type_(),
                checked: input.checked(),
                value: input.value(),
            })
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            if select.disabled() {
                return None;
            }
            let options = select.selected_options();
            let selected = (0..options.length())
                .filter_map(|i| options.item(i))
                .filter_map(|o| o.dyn_into::<HtmlOptionElement>().ok())
                .map(|o| o.value())
                .collect();
            Some(Self::Select { selected })
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            (!area.disabled()).then(|| Self::TextArea { value: area.value() })
        } else {
            None
        }
    }

    /// Values submitted under the control's name; a multi-select sends one
    /// per selected option.
    fn into_values(self) -> Vec<String> {
        match self {
            Self::Input { kind, checked, value } => {
                let kind = kind.to_ascii_lowercase();
                let skipped = matches!(kind.as_str(), "submit" | "button" | "reset" | "file" | "image")
                    || (matches!(kind.as_str(), "checkbox" | "radio") && !checked);
                if skipped {
                    Vec::new()
                } else {
                    vec![value]
                }
            }
            Self::Select { selected } => selected,
            Self::TextArea { value } => vec![value],
        }
    }
}

fn form_pairs(controls: impl IntoIterator<Item = (String, FormControl)>) -> Vec<(String, String)> {
    controls
        .into_iter()
        .filter(|(name, _)| !name.is_empty())
        .flat_map(|(name, control)| {
            control
                .into_values()
                .into_iter()
                .map(move |value| (name.clone(), value))
        })
        .collect()
}

/// Successful controls of `form` as name/value pairs, in document order.
fn serialize_form(form: &HtmlFormElement) -> Vec<(String, String)> {
    let elements = form.elements();
    form_pairs((0..elements.length()).filter_map(|i| elements.item(i)).filter_map(|element| {
        let name = element.get_attribute("name").unwrap_or_default();
        FormControl::read(&element).map(|control| (name, control))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(kind: &str, checked: bool, value: &str) -> FormControl {
        FormControl::Input {
            kind: kind.to_string(),
            checked,
            value: value.to_string(),
        }
    }

    #[test]
    fn multi_select_sends_every_selected_option() {
        let pairs = form_pairs([
            ("name".to_string(), input("text", false, "Car")),
            (
                "tags".to_string(),
                FormControl::Select {
                    selected: vec!["2".to_string(), "5".to_string()],
                },
            ),
            ("parent".to_string(), FormControl::Select { selected: Vec::new() }),
        ]);
        let expected = [("name", "Car"), ("tags", "2"), ("tags", "5")]
            .map(|(n, v)| (n.to_string(), v.to_string()));
        assert_eq!(pairs, expected);
    }

    #[test]
    fn buttons_unchecked_boxes_and_unnamed_controls_are_skipped() {
        let pairs = form_pairs([
            ("save".to_string(), input("SUBMIT", false, "Save")),
            ("active".to_string(), input("checkbox", false, "on")),
            ("budget".to_string(), input("checkbox", true, "on")),
            (String::new(), input("text", false, "stray")),
            (
                "notes".to_string(),
                FormControl::TextArea {
                    value: "monthly".to_string(),
                },
            ),
        ]);
        let expected = [("budget", "on"), ("notes", "monthly")].map(|(n, v)| (n.to_string(), v.to_string()));
        assert_eq!(pairs, expected);
    }
}
