use std::time::Duration;

use async_trait::async_trait;
use scraper_core::SelectorType;
use thiserror::Error;

/// Faults at the browser-session boundary.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session could not be created; nothing has run.
    #[error("failed to initialize WebDriver: {0}")]
    Setup(String),
    /// The job URL could not be loaded.
    #[error("failed to navigate: {0}")]
    Navigation(String),
    /// A selector did not resolve within its wait bound.
    #[error("timeout waiting for element: {selector}")]
    ElementTimeout { selector: String },
    /// Any other driver-side fault.
    #[error("webdriver error: {0}")]
    Driver(String),
}

/// Opens browser sessions. Exactly one session drives one run.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    async fn open(&self, headless: bool) -> Result<Box<dyn BrowserSession>, SessionError>;
}

/// A live element located within the session's current page.
#[async_trait]
pub trait PageElement: Send {
    async fn click(&mut self) -> Result<(), SessionError>;
    async fn text(&mut self) -> Result<String, SessionError>;
}

/// Narrow view of one controllable browser instance.
///
/// The engine only ever talks to the browser through this trait; the
/// production implementation wraps a WebDriver client, tests substitute a
/// scripted fake.
#[async_trait]
pub trait BrowserSession: Send {
    async fn navigate(&mut self, url: &str) -> Result<(), SessionError>;

    /// Waits (bounded) for a matching element to become clickable.
    async fn find_clickable(
        &mut self,
        selector: &str,
        selector_type: SelectorType,
        timeout: Duration,
    ) -> Result<Box<dyn PageElement>, SessionError>;

    /// Waits (bounded) for a matching element to be present in the DOM.
    async fn find_present(
        &mut self,
        selector: &str,
        selector_type: SelectorType,
        timeout: Duration,
    ) -> Result<Box<dyn PageElement>, SessionError>;

    /// Runs a JavaScript snippet in the page.
    async fn run_script(&mut self, script: &str) -> Result<(), SessionError>;

    /// Full rendered HTML of the current page.
    async fn page_source(&mut self) -> Result<String, SessionError>;

    /// Releases the underlying browser session.
    async fn close(self: Box<Self>) -> Result<(), SessionError>;
}
