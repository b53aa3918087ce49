use serde::Serialize;

const FILL_OPACITY: f64 = 0.2;

#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub line: &'static str,
    pub fill_opacity: f64,
}

impl Palette {
    pub fn moving_time() -> Self {
        Self {
            name: "moving_time",
            line: "#FC5200",
            fill_opacity: FILL_OPACITY,
        }
    }

    pub fn distance() -> Self {
        Self {
            name: "distance",
            line: "#00A9F1",
            fill_opacity: FILL_OPACITY,
        }
    }

    /// Area fill beneath the series, e.g. `rgba(252, 82, 0, 0.2)`.
    pub fn fill(&self) -> String {
        let (r, g, b) = parse_hex_color(self.line).unwrap_or((128, 128, 128));
        format!("rgba({}, {}, {}, {})", r, g, b, self.fill_opacity)
    }

    /// Darkens the line colour toward black by `t` (0.0 keeps it unchanged).
    pub fn shade(&self, t: f64) -> String {
        let t = t.clamp(0.0, 1.0);
        let (r, g, b) = parse_hex_color(self.line).unwrap_or((128, 128, 128));
        format!(
            "#{:02X}{:02X}{:02X}",
            lerp_u8(r, 0, t),
            lerp_u8(g, 0, t),
            lerp_u8(b, 0, t)
        )
    }
}

/// `#RRGGBB` (leading `#` optional) to its channels.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let value = hex.trim_start_matches('#');
    if value.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&value[0..2], 16).ok()?;
    let g = u8::from_str_radix(&value[2..4], 16).ok()?;
    let b = u8::from_str_radix(&value[4..6], 16).ok()?;
    Some((r, g, b))
}

fn lerp_u8(start: u8, end: u8, t: f64) -> u8 {
    let value = start as f64 + (end as f64 - start as f64) * t;
    value.round().clamp(0.0, 255.0) as u8
}
