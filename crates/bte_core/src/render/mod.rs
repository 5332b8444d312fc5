//! Render-settings computation and batch submission.

mod frame;
mod submit;

pub use frame::{slate_mark_in, UNDER_REPORTED_RATES};
pub use submit::{submit_renders, RenderRequest};
