use crate::app::AppState;
use crate::domain::normalize::normalize_codlocal;
use crate::domain::{RecordSummary, Table};
use crate::errors::ServerError;
use crate::responses::{fragment_response, html_response, json_response, text_response, ResultResp};
use crate::templates::pages::{dashboard_page, record_panels, DashboardVm};
use astra::Request;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let today = Local::now().date_naive();
    route(&req, state, today)
}

/// Same as `handle`, with the reference day for deadline math passed in.
pub fn route(req: &Request, state: &AppState, today: NaiveDate) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let table = state.cache.table()?;
            let params = parse_query(req);
            let requested = params.get("codlocal").filter(|c| !c.trim().is_empty());
            let summary = match requested {
                Some(code) => Some(summarize(&table, code, today)?),
                // Same default as the selector: the first code in order.
                None => table
                    .keys()
                    .first()
                    .map(|code| summarize(&table, code, today))
                    .transpose()?,
            };

            let vm = DashboardVm {
                codlocales: table.keys(),
                summary,
            };
            html_response(dashboard_page(&vm))
        }

        ("GET", "/record") => {
            let table = state.cache.table()?;
            let code = required_codlocal(req)?;
            let summary = summarize(&table, &code, today)?;
            fragment_response(record_panels(&summary), &page_url(&summary.codlocal))
        }

        ("GET", "/api/record") => {
            let table = state.cache.table()?;
            let code = required_codlocal(req)?;
            json_response(&summarize(&table, &code, today)?)
        }

        ("GET", "/healthz") => text_response("ok"),

        _ => Err(ServerError::NotFound),
    }
}

fn summarize(table: &Table, code: &str, today: NaiveDate) -> Result<RecordSummary, ServerError> {
    let code = normalize_codlocal(code);
    let record = table.select_record(&code).ok_or(ServerError::NotFound)?;
    Ok(RecordSummary::build(record, today))
}

/// The full-page URL for a facility, as pushed to the address bar after a swap.
fn page_url(codlocal: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("codlocal", codlocal)
        .finish();
    format!("/?{query}")
}

fn required_codlocal(req: &Request) -> Result<String, ServerError> {
    parse_query(req)
        .remove("codlocal")
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ServerError::BadRequest("Falta el parámetro codlocal".into()))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
