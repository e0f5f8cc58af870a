mod dashboard_harness;

pub(crate) use dashboard_harness::*;

mod html_render_tests;
mod navigation_tests;
mod runtime_loop_tests;
