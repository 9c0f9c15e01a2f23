mod coverage;
mod format;
mod render;
mod run;
mod segment;

pub use run::run;

const PLACEHOLDER_TITLE: &str = "Introduction";
const FRONT_MATTER_MIN_CHARS: usize = 2000;
const SUBHEADING_MAX_CHARS: usize = 100;
