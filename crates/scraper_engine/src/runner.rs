use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use scraper_core::{
    parse_macro, script_lines, ActionResult, Command, JobSnapshot, RunResult, Stage, StepRecord,
};

use crate::actions::{self, ActionContext};
use crate::session::{BrowserSession, SessionFactory};

/// Per-run knobs. One settings value is shared by every run a runner
/// executes; runs themselves share no state.
#[derive(Debug, Clone)]
pub struct RunnerSettings {
    pub headless: bool,
    pub output_dir: PathBuf,
    pub element_timeout: Duration,
    pub scroll_settle: Duration,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            headless: true,
            output_dir: PathBuf::from("downloads"),
            element_timeout: Duration::from_secs(10),
            scroll_settle: Duration::from_secs(1),
        }
    }
}

/// Sequential macro execution engine.
///
/// `run_job` is the only entry point the surrounding dashboard needs: it
/// opens one browser session, navigates, feeds each instruction line to
/// its handler in source order, stops at the first failure and guarantees
/// the session is released before returning.
pub struct ScrapeRunner {
    factory: Arc<dyn SessionFactory>,
    settings: RunnerSettings,
    runtime: tokio::runtime::Runtime,
}

impl ScrapeRunner {
    pub fn new(factory: Arc<dyn SessionFactory>, settings: RunnerSettings) -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        Self {
            factory,
            settings,
            runtime,
        }
    }

    /// Executes one job start to finish, blocking the calling thread.
    ///
    /// The caller is expected to invoke this from a worker thread; the
    /// engine itself has no internal concurrency and no cancellation.
    pub fn run_job(&self, job: &JobSnapshot) -> RunResult {
        self.runtime.block_on(self.run_job_async(job))
    }

    /// Async body of [`run_job`](Self::run_job), for callers that already
    /// own a runtime.
    pub async fn run_job_async(&self, job: &JobSnapshot) -> RunResult {
        let job_id = job.display_id();

        log_stage(job_id, Stage::DriverStarting);
        let mut session = match self.factory.open(self.settings.headless).await {
            Ok(session) => session,
            Err(err) => {
                log::error!("job {job_id}: driver setup failed: {err}");
                log_stage(job_id, Stage::Failed);
                return RunResult::failed(
                    format!("Failed to initialize WebDriver: {err}"),
                    Vec::new(),
                );
            }
        };

        let steps = self.drive(session.as_mut(), job).await;

        // The session is released on every path that opened one; a close
        // failure is logged, never surfaced as a run failure.
        log_stage(job_id, Stage::Finalizing);
        if let Err(err) = session.close().await {
            log::warn!("job {job_id}: failed to close browser session: {err}");
        }

        if steps.iter().any(StepRecord::is_error) {
            log_stage(job_id, Stage::Failed);
            RunResult::failed(format!("Scraping job {job_id} failed"), steps)
        } else {
            log_stage(job_id, Stage::Completed);
            RunResult::completed(format!("Scraping job {job_id} completed"), steps)
        }
    }

    /// Parses and executes a single instruction line against a live
    /// session, yielding the step record the run log stores.
    pub async fn execute_instruction(
        &self,
        session: &mut dyn BrowserSession,
        line: &str,
        job_id: Option<&str>,
    ) -> StepRecord {
        let ctx = self.action_context(job_id);
        let result = dispatch(session, line, &ctx).await;
        StepRecord::for_line(line, result)
    }

    async fn drive(&self, session: &mut dyn BrowserSession, job: &JobSnapshot) -> Vec<StepRecord> {
        let job_id = job.display_id();
        let mut steps = Vec::new();

        log_stage(job_id, Stage::Navigating);
        match session.navigate(&job.url).await {
            Ok(()) => {
                steps.push(StepRecord::synthetic(ActionResult::success(format!(
                    "Navigated to: {}",
                    job.url
                ))));
            }
            Err(err) => {
                log::error!("job {job_id}: navigation failed: {err}");
                steps.push(StepRecord::synthetic(ActionResult::error(format!(
                    "Error during scraping: {err}"
                ))));
                return steps;
            }
        }

        log_stage(job_id, Stage::ExecutingInstructions);
        for line in script_lines(&job.instructions) {
            let step = self
                .execute_instruction(session, line, job.id.as_deref())
                .await;
            let failed = step.is_error();
            if failed {
                log::warn!("job {job_id}: step failed: {}", step.result.message);
            }
            steps.push(step);
            // Abort rule: nothing executes past the first error step.
            if failed {
                break;
            }
        }
        steps
    }

    fn action_context<'a>(&'a self, job_id: Option<&'a str>) -> ActionContext<'a> {
        ActionContext {
            job_id,
            output_dir: &self.settings.output_dir,
            element_timeout: self.settings.element_timeout,
            scroll_settle: self.settings.scroll_settle,
        }
    }
}

async fn dispatch(
    session: &mut dyn BrowserSession,
    line: &str,
    ctx: &ActionContext<'_>,
) -> ActionResult {
    let Some(parsed) = parse_macro(line) else {
        return ActionResult::error(format!("Invalid instruction format: {line}"));
    };
    let Some(command) = Command::from_name(&parsed.name) else {
        return ActionResult::error(format!("Unknown command: {}", parsed.name));
    };
    match command {
        Command::ClickElement => actions::click_element(session, &parsed.params, ctx).await,
        Command::ScrollPage => actions::scroll_page(session, &parsed.params, ctx).await,
        Command::SaveHtml => actions::save_html(session, &parsed.params, ctx).await,
        Command::Wait => actions::wait_seconds(&parsed.params).await,
        Command::ExtractText => actions::extract_text(session, &parsed.params, ctx).await,
    }
}

fn log_stage(job_id: &str, stage: Stage) {
    log::debug!("job {job_id}: {stage}");
}
