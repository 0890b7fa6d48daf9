//! Scraper engine: browser session boundary and macro run execution.
mod actions;
mod filename;
mod persist;
mod runner;
mod session;
mod webdriver;

pub use filename::{auto_filename, safe_filename};
pub use persist::{ensure_output_dir, write_html, SaveError};
pub use runner::{RunnerSettings, ScrapeRunner};
pub use session::{BrowserSession, PageElement, SessionError, SessionFactory};
pub use webdriver::{WebDriverFactory, WebDriverSettings};
