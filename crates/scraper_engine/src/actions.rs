//! The fixed action handlers, one per macro command.
//!
//! Handlers never raise past their own boundary: every internal fault is
//! converted into an error `ActionResult` so the dispatcher can apply its
//! abort rule uniformly.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use scraper_core::{ActionResult, Payload, ScrollDirection, SelectorType};

use crate::filename::{auto_filename, safe_filename};
use crate::persist::write_html;
use crate::session::{BrowserSession, SessionError};

/// Shared knobs handlers need besides the session itself.
pub(crate) struct ActionContext<'a> {
    pub job_id: Option<&'a str>,
    pub output_dir: &'a Path,
    pub element_timeout: Duration,
    pub scroll_settle: Duration,
}

type Params = HashMap<String, String>;

fn param<'a>(params: &'a Params, key: &str, default: &'a str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or(default)
}

pub(crate) async fn click_element(
    session: &mut dyn BrowserSession,
    params: &Params,
    ctx: &ActionContext<'_>,
) -> ActionResult {
    let selector = param(params, "selector", "");
    let selector_type = SelectorType::parse(param(params, "type", "css"));

    match session
        .find_clickable(selector, selector_type, ctx.element_timeout)
        .await
    {
        Ok(mut element) => match element.click().await {
            Ok(()) => ActionResult::success(format!("Clicked element: {selector}")),
            Err(err) => ActionResult::error(format!("Error clicking element: {err}")),
        },
        Err(SessionError::ElementTimeout { selector }) => {
            ActionResult::error(format!("Timeout waiting for element: {selector}"))
        }
        Err(err) => ActionResult::error(format!("Error clicking element: {err}")),
    }
}

pub(crate) async fn scroll_page(
    session: &mut dyn BrowserSession,
    params: &Params,
    ctx: &ActionContext<'_>,
) -> ActionResult {
    let direction = param(params, "direction", "down");
    let pixels: i64 = match param(params, "pixels", "500").trim().parse() {
        Ok(value) => value,
        Err(_) => {
            return ActionResult::error(format!(
                "Error scrolling: invalid pixels value: {}",
                param(params, "pixels", "500")
            ))
        }
    };

    // An unrecognized direction scrolls nowhere but still succeeds.
    let script = match ScrollDirection::parse(direction) {
        Some(ScrollDirection::Down) => Some(format!("window.scrollBy(0, {pixels});")),
        Some(ScrollDirection::Up) => Some(format!("window.scrollBy(0, -{pixels});")),
        Some(ScrollDirection::Top) => Some("window.scrollTo(0, 0);".to_string()),
        Some(ScrollDirection::Bottom) => {
            Some("window.scrollTo(0, document.body.scrollHeight);".to_string())
        }
        None => None,
    };

    if let Some(script) = script {
        if let Err(err) = session.run_script(&script).await {
            return ActionResult::error(format!("Error scrolling: {err}"));
        }
    }

    // Let layout settle before the next step.
    tokio::time::sleep(ctx.scroll_settle).await;
    ActionResult::success(format!("Scrolled {direction} by {pixels}px"))
}

pub(crate) async fn save_html(
    session: &mut dyn BrowserSession,
    params: &Params,
    ctx: &ActionContext<'_>,
) -> ActionResult {
    let filename = match params.get("filename") {
        Some(name) => safe_filename(name),
        None => auto_filename(ctx.job_id, chrono::Local::now()),
    };

    let html = match session.page_source().await {
        Ok(html) => html,
        Err(err) => return ActionResult::error(format!("Error saving HTML: {err}")),
    };

    match write_html(ctx.output_dir, &filename, &html) {
        Ok(path) => ActionResult::success_with(
            format!("HTML saved to: {}", path.display()),
            Payload::File(path),
        ),
        Err(err) => ActionResult::error(format!("Error saving HTML: {err}")),
    }
}

pub(crate) async fn wait_seconds(params: &Params) -> ActionResult {
    let raw = param(params, "seconds", "2").trim();
    // try_from_secs_f64 rejects negatives, non-finite values and floats
    // beyond Duration's range without panicking.
    let duration = raw
        .parse::<f64>()
        .ok()
        .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok());
    match duration {
        Some(duration) => {
            tokio::time::sleep(duration).await;
            ActionResult::success(format!("Waited {raw} seconds"))
        }
        None => ActionResult::error(format!("Error waiting: invalid seconds value: {raw}")),
    }
}

pub(crate) async fn extract_text(
    session: &mut dyn BrowserSession,
    params: &Params,
    ctx: &ActionContext<'_>,
) -> ActionResult {
    let selector = param(params, "selector", "");
    let selector_type = SelectorType::parse(param(params, "type", "css"));

    match session
        .find_present(selector, selector_type, ctx.element_timeout)
        .await
    {
        Ok(mut element) => match element.text().await {
            Ok(text) => ActionResult::success_with(
                format!("Extracted text from {selector}"),
                Payload::Text(text),
            ),
            Err(err) => ActionResult::error(format!("Error extracting text: {err}")),
        },
        Err(SessionError::ElementTimeout { selector }) => {
            ActionResult::error(format!("Timeout waiting for element: {selector}"))
        }
        Err(err) => ActionResult::error(format!("Error extracting text: {err}")),
    }
}
