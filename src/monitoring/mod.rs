/*!
 * Monitoring Module
 */

pub mod tracer;

pub use tracer::init_tracing;
