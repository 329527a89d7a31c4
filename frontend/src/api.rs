//! Calls to the finance server.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use tracing::debug;
use web_sys::{RequestCredentials, UrlSearchParams};

use crate::chart::{parse_monthly_data, MonthlyData};
use crate::error::{FrontendError, Result};

/// Body of the account-creation endpoint's answer.
///
/// `result` holds `<option>` markup on success and the re-rendered form on
/// failure; the two are told apart by status only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountFormResponse {
    pub result: String,
    /// Option markup for the parent-account selects, when the server sends it.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub new_pk: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved(AccountFormResponse),
    /// Markup to show in place of the dialog body.
    Rejected(String),
}

impl SubmitOutcome {
    pub fn from_response(status: u16, body: &str) -> Result<Self> {
        let ok = (200..300).contains(&status);
        match serde_json::from_str::<AccountFormResponse>(body) {
            Ok(response) if ok => Ok(SubmitOutcome::Saved(response)),
            Ok(response) => Ok(SubmitOutcome::Rejected(response.result)),
            Err(err) if ok => Err(FrontendError::Decode(err)),
            Err(_) => Err(FrontendError::Status {
                status,
                body: body.to_string(),
            }),
        }
    }
}

/// Send serialized form fields to `url` with the form's own method.
pub async fn submit_form(
    method: &str,
    url: &str,
    fields: &[(String, String)],
) -> Result<SubmitOutcome> {
    let params = UrlSearchParams::new()?;
    for (name, value) in fields {
        params.append(name, value);
    }

    let request = if method.eq_ignore_ascii_case("get") {
        let query = String::from(params.to_string());
        let separator = if url.contains('?') { '&' } else { '?' };
        ajax(Request::get(&format!("{url}{separator}{query}"))).build()?
    } else {
        ajax(Request::post(url)).body(params)?
    };
    debug!(method, url, fields = fields.len(), "submitting form");

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    SubmitOutcome::from_response(status, &body)
}

/// Load the per-month debit totals for the selected year.
pub async fn fetch_monthly_debits(url: &str) -> Result<MonthlyData> {
    let response = ajax(Request::get(url)).send().await?;
    let body = checked_text(response).await?;
    Ok(parse_monthly_data(&body)?)
}

// the server only answers with JSON fragments to XHR-flagged requests
fn ajax(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .header("X-Requested-With", "XMLHttpRequest")
}

async fn checked_text(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if !response.ok() {
        return Err(FrontendError::Status { status, body });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_carries_options() {
        let outcome = SubmitOutcome::from_response(
            200,
            r#"{"result": "<option value='1'>Cash</option>", "new_pk": 7}"#,
        )
        .unwrap();
        let SubmitOutcome::Saved(response) = outcome else {
            panic!("expected a saved outcome");
        };
        assert_eq!(response.result, "<option value='1'>Cash</option>");
        assert_eq!(response.parent, None);
        assert_eq!(response.new_pk, Some(7));
    }

    #[test]
    fn error_status_carries_form_markup() {
        let outcome =
            SubmitOutcome::from_response(400, r#"{"result": "<form>bad</form>"}"#).unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected("<form>bad</form>".to_string()));
    }

    #[test]
    fn unreadable_bodies_are_errors() {
        assert!(matches!(
            SubmitOutcome::from_response(200, "<html>"),
            Err(FrontendError::Decode(_))
        ));
        assert!(matches!(
            SubmitOutcome::from_response(500, "Server Error"),
            Err(FrontendError::Status { status: 500, .. })
        ));
    }
}
