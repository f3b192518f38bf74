// Small formatting helpers shared by the renderer and config.

/// `m:ss`; the countdown can overshoot zero by a tick, show that as `0:00`.
pub fn format_clock(secs: i64) -> String {
    let secs = secs.max(0);
    let m = secs / 60;
    let s = secs % 60;
    format!("{}:{:02}", m, s)
}

/// Static image location used by the experiment for components without an explicit image.
pub fn default_image_path(component: &str) -> String {
    let name = component.to_lowercase().replace(' ', "_");
    format!("/static/sandwiches/images/{name}.jpg")
}
