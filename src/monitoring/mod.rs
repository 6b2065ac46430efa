/*!
 * Monitoring
 * Structured tracing for the process primitives
 */

mod tracer;

pub use tracer::{init_tracing, PrimitiveSpan};
