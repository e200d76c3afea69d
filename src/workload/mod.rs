/*!
 * Workload Module
 * Loading and generating process workloads
 */

pub mod generator;
pub mod loader;

pub use generator::{generate, write_workload, GeneratorConfig};
pub use loader::{load_workload, parse_workload, read_workload};
