//! Scraper core: macro parsing, command vocabulary and the run result model.
mod command;
mod docs;
mod job;
mod parse;
mod result;
mod script;

pub use command::{Command, ScrollDirection, SelectorType};
pub use docs::{macro_documentation, MacroDoc, ParamDoc};
pub use job::JobSnapshot;
pub use parse::{parse_macro, ParsedCommand};
pub use result::{
    ActionResult, ActionStatus, Payload, RunResult, RunStatus, Stage, StepRecord,
};
pub use script::script_lines;
