use crate::color::model::Color;
use crate::foundation::error::{HueforgeError, HueforgeResult};

const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("magenta", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
    ("cyan", [0, 255, 255]),
    ("orange", [255, 165, 0]),
    ("pink", [255, 192, 203]),
];

pub(crate) fn parse_css_color(input: &str) -> HueforgeResult<Color> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(HueforgeError::validation("color must be non-empty"));
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| invalid(input));
    }
    if s == "transparent" {
        return Ok(Color::rgba(0.0, 0.0, 0.0, 0.0));
    }
    if let Some(&(_, [r, g, b])) = NAMED.iter().find(|(name, _)| *name == s) {
        return Ok(Color::from_rgba8(r, g, b, 255));
    }

    let (func, args) = split_function(&s).ok_or_else(|| invalid(input))?;
    let args = split_args(args).ok_or_else(|| invalid(input))?;
    match func {
        "rgb" | "rgba" => parse_rgb_args(&args).ok_or_else(|| invalid(input)),
        "hsl" | "hsla" => parse_hsl_args(&args).ok_or_else(|| invalid(input)),
        _ => Err(invalid(input)),
    }
}

fn invalid(input: &str) -> HueforgeError {
    HueforgeError::validation(format!("unrecognized color \"{input}\""))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let [r, g, b, a] = match hex.len() {
        3 => [nibble(0)?, nibble(1)?, nibble(2)?, 255],
        4 => [nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?],
        6 => [byte(0)?, byte(2)?, byte(4)?, 255],
        8 => [byte(0)?, byte(2)?, byte(4)?, byte(6)?],
        _ => return None,
    };
    Some(Color::from_rgba8(r, g, b, a))
}

fn split_function(s: &str) -> Option<(&str, &str)> {
    let open = s.find('(')?;
    let body = s.strip_suffix(')')?;
    Some((s[..open].trim(), &body[open + 1..]))
}

/// Accepts both `a, b, c[, d]` and `a b c[ / d]`.
fn split_args(args: &str) -> Option<Vec<&str>> {
    let parts: Vec<&str> = if args.contains(',') {
        args.split(',').map(str::trim).collect()
    } else {
        let (main, alpha) = match args.split_once('/') {
            Some((m, a)) => (m, Some(a.trim())),
            None => (args, None),
        };
        let mut v: Vec<&str> = main.split_whitespace().collect();
        v.extend(alpha);
        v
    };
    if parts.len() == 3 || parts.len() == 4 {
        Some(parts)
    } else {
        None
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}

/// Channel: `0..=255` or a percentage.
fn parse_channel(s: &str) -> Option<f64> {
    match s.strip_suffix('%') {
        Some(p) => parse_number(p).map(|v| v / 100.0),
        None => parse_number(s).map(|v| v / 255.0),
    }
}

/// Alpha: `0..=1` or a percentage.
fn parse_alpha(s: &str) -> Option<f64> {
    match s.strip_suffix('%') {
        Some(p) => parse_number(p).map(|v| v / 100.0),
        None => parse_number(s),
    }
}

fn parse_percent(s: &str) -> Option<f64> {
    let p = s.strip_suffix('%').unwrap_or(s);
    parse_number(p).map(|v| v / 100.0)
}

fn parse_rgb_args(args: &[&str]) -> Option<Color> {
    let r = parse_channel(args[0])?;
    let g = parse_channel(args[1])?;
    let b = parse_channel(args[2])?;
    let a = match args.get(3) {
        Some(a) => parse_alpha(a)?,
        None => 1.0,
    };
    Some(Color::rgba(r, g, b, a))
}

fn parse_hsl_args(args: &[&str]) -> Option<Color> {
    let h = parse_number(args[0].strip_suffix("deg").unwrap_or(args[0]))?;
    let s = parse_percent(args[1])?;
    let l = parse_percent(args[2])?;
    let a = match args.get(3) {
        Some(a) => parse_alpha(a)?,
        None => 1.0,
    };
    Some(hsla_to_rgba(h, s, l, a))
}

fn hsla_to_rgba(h: f64, s: f64, l: f64, a: f64) -> Color {
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Color::rgba(l, l, l, a);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Color::rgba(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
        a,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/color/parse.rs"]
mod tests;
