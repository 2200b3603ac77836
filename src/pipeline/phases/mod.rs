// Pipeline phases, in the order the orchestrator runs them.

#[path = "01_discover.rs"]
pub mod discover;
#[path = "02_naming.rs"]
pub mod naming;
#[path = "03_materialize.rs"]
pub mod materialize;
#[path = "04_build.rs"]
pub mod build;
#[path = "05_metadata.rs"]
pub mod metadata;
