//! Window Commands
//!
//! Viewport and clock access through `web_sys`/`js_sys`.

/// Smoothly scroll the viewport back to the top of the page.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        tracing::warn!("no window to scroll");
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Current calendar year from the browser clock
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
