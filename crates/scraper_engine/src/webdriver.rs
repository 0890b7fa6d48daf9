use std::time::Duration;

use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use scraper_core::SelectorType;
use serde_json::json;

use crate::session::{BrowserSession, PageElement, SessionError, SessionFactory};

const CLICKABLE_POLL: Duration = Duration::from_millis(250);

/// Connection settings for the WebDriver endpoint.
#[derive(Debug, Clone)]
pub struct WebDriverSettings {
    pub webdriver_url: String,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for WebDriverSettings {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            window_width: 1920,
            window_height: 1080,
        }
    }
}

/// Opens Chrome sessions through a chromedriver endpoint.
#[derive(Debug, Clone)]
pub struct WebDriverFactory {
    settings: WebDriverSettings,
}

impl WebDriverFactory {
    pub fn new(settings: WebDriverSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl SessionFactory for WebDriverFactory {
    async fn open(&self, headless: bool) -> Result<Box<dyn BrowserSession>, SessionError> {
        let caps = chrome_capabilities(&self.settings, headless);
        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&self.settings.webdriver_url)
            .await
            .map_err(|err| SessionError::Setup(err.to_string()))?;
        log::debug!("webdriver session opened at {}", self.settings.webdriver_url);
        Ok(Box::new(WebDriverSession { client }))
    }
}

/// Chrome capability object for one session.
fn chrome_capabilities(
    settings: &WebDriverSettings,
    headless: bool,
) -> serde_json::Map<String, serde_json::Value> {
    let mut args: Vec<String> = Vec::new();
    if headless {
        args.push("--headless=new".to_string());
    }
    args.push("--no-sandbox".to_string());
    args.push("--disable-dev-shm-usage".to_string());
    args.push("--disable-gpu".to_string());
    args.push(format!(
        "--window-size={},{}",
        settings.window_width, settings.window_height
    ));

    let mut caps = serde_json::Map::new();
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    caps
}

// Locator borrows its selector string, so class selectors need an owned
// CSS form to point at.
enum ResolvedSelector {
    Css(String),
    XPath(String),
    Id(String),
}

fn resolve_selector(selector: &str, selector_type: SelectorType) -> ResolvedSelector {
    match selector_type {
        SelectorType::Css => ResolvedSelector::Css(selector.to_string()),
        SelectorType::Xpath => ResolvedSelector::XPath(selector.to_string()),
        SelectorType::Id => ResolvedSelector::Id(selector.to_string()),
        SelectorType::Class => ResolvedSelector::Css(format!(".{selector}")),
    }
}

impl ResolvedSelector {
    fn as_locator(&self) -> Locator<'_> {
        match self {
            ResolvedSelector::Css(css) => Locator::Css(css),
            ResolvedSelector::XPath(xpath) => Locator::XPath(xpath),
            ResolvedSelector::Id(id) => Locator::Id(id),
        }
    }
}

struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    async fn wait_for(
        &mut self,
        selector: &str,
        selector_type: SelectorType,
        timeout: Duration,
    ) -> Result<Element, SessionError> {
        let resolved = resolve_selector(selector, selector_type);
        self.client
            .wait()
            .at_most(timeout)
            .for_element(resolved.as_locator())
            .await
            .map_err(|err| match err {
                CmdError::WaitTimeout => SessionError::ElementTimeout {
                    selector: selector.to_string(),
                },
                other => SessionError::Driver(other.to_string()),
            })
    }
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn navigate(&mut self, url: &str) -> Result<(), SessionError> {
        self.client
            .goto(url)
            .await
            .map_err(|err| SessionError::Navigation(err.to_string()))
    }

    async fn find_clickable(
        &mut self,
        selector: &str,
        selector_type: SelectorType,
        timeout: Duration,
    ) -> Result<Box<dyn PageElement>, SessionError> {
        let deadline = tokio::time::Instant::now() + timeout;
        let element = self.wait_for(selector, selector_type, timeout).await?;
        // Present is not clickable yet; poll visibility and enablement
        // until the same deadline.
        loop {
            let displayed = element
                .is_displayed()
                .await
                .map_err(|err| SessionError::Driver(err.to_string()))?;
            let enabled = element
                .is_enabled()
                .await
                .map_err(|err| SessionError::Driver(err.to_string()))?;
            if displayed && enabled {
                return Ok(Box::new(WebDriverElement { element }));
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(SessionError::ElementTimeout {
                    selector: selector.to_string(),
                });
            }
            tokio::time::sleep(CLICKABLE_POLL).await;
        }
    }

    async fn find_present(
        &mut self,
        selector: &str,
        selector_type: SelectorType,
        timeout: Duration,
    ) -> Result<Box<dyn PageElement>, SessionError> {
        let element = self.wait_for(selector, selector_type, timeout).await?;
        Ok(Box::new(WebDriverElement { element }))
    }

    async fn run_script(&mut self, script: &str) -> Result<(), SessionError> {
        self.client
            .execute(script, vec![])
            .await
            .map(|_| ())
            .map_err(|err| SessionError::Driver(err.to_string()))
    }

    async fn page_source(&mut self) -> Result<String, SessionError> {
        self.client
            .source()
            .await
            .map_err(|err| SessionError::Driver(err.to_string()))
    }

    async fn close(self: Box<Self>) -> Result<(), SessionError> {
        let mut client = self.client;
        client
            .close()
            .await
            .map_err(|err| SessionError::Driver(err.to_string()))
    }
}

struct WebDriverElement {
    element: Element,
}

#[async_trait]
impl PageElement for WebDriverElement {
    async fn click(&mut self) -> Result<(), SessionError> {
        self.element
            .clone()
            .click()
            .await
            .map_err(|err| SessionError::Driver(err.to_string()))
    }

    async fn text(&mut self) -> Result<String, SessionError> {
        self.element
            .text()
            .await
            .map_err(|err| SessionError::Driver(err.to_string()))
    }
}
