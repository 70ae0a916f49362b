pub mod app_reducer;
pub mod request_reducer;
pub mod status_bar_reducer;
