//! Consumer side of the panel event channel: what has been asked for so far

mod request_log;
mod request_log_render;

pub use request_log::{LoggedRequest, RequestLog};
pub use request_log_render::render_requests;
