use crate::gradient::model::{GradientShape, GradientSpec};

/// Comma-separated `"<color> <position>%"` list in stop order.
pub fn stop_list(spec: &GradientSpec) -> String {
    spec.stops()
        .iter()
        .map(|s| format!("{} {}%", s.color, s.position))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The CSS `<image>` value for `spec`, e.g. `linear-gradient(90deg, ...)`.
pub fn gradient_value(spec: &GradientSpec) -> String {
    let stops = stop_list(spec);
    match spec.shape {
        GradientShape::Linear => format!("linear-gradient({}deg, {stops})", spec.angle),
        GradientShape::Radial => format!("radial-gradient(circle, {stops})"),
    }
}

/// A `background:` declaration, followed by ` filter: blur(Npx);` when blur is active.
pub fn to_css_text(spec: &GradientSpec) -> String {
    let mut css = format!("background: {};", gradient_value(spec));
    if let Some(radius) = spec.blur.active_amount() {
        css.push_str(&format!(" filter: blur({radius}px);"));
    }
    css
}

/// Arbitrary-value utility classes: `bg-[...]` with whitespace runs as `_`, plus
/// `blur-[Npx]` when blur is active.
pub fn to_utility_classes(spec: &GradientSpec) -> String {
    let value = gradient_value(spec)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let mut classes = vec![format!("bg-[{value}]")];
    if let Some(radius) = spec.blur.active_amount() {
        classes.push(format!("blur-[{radius}px]"));
    }
    classes.join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/export/css.rs"]
mod tests;
