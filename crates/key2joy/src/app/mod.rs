mod runner;
mod translator;

pub use runner::{run, RunOutcome};
pub use translator::{AxisState, Translator, TranslatorState};
