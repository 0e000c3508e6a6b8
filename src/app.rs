mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_events;

#[cfg(test)]
#[path = "app/app_events_tests.rs"]
mod app_events_tests;


pub use app_state::App;
