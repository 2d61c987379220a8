pub mod cleanup;
pub mod doctree;
pub mod git;
pub mod metrics;
pub mod paths;
pub mod process;
pub mod prompt;
pub mod scaffold;
pub mod templates;
