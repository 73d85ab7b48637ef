//! Sequential colour ramps (ColorBrewer YlOrRd and Reds)

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in [0, 1]
    pub fn luminance(self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// Readable text colour on this background
    pub fn text_color(self) -> &'static str {
        if self.luminance() < 0.408 {
            "#f1f1f1"
        } else {
            "#000000"
        }
    }
}

const YL_OR_RD: [Rgb; 9] = [
    Rgb::new(0xff, 0xff, 0xcc),
    Rgb::new(0xff, 0xed, 0xa0),
    Rgb::new(0xfe, 0xd9, 0x76),
    Rgb::new(0xfe, 0xb2, 0x4c),
    Rgb::new(0xfd, 0x8d, 0x3c),
    Rgb::new(0xfc, 0x4e, 0x2a),
    Rgb::new(0xe3, 0x1a, 0x1c),
    Rgb::new(0xbd, 0x00, 0x26),
    Rgb::new(0x80, 0x00, 0x26),
];

const REDS: [Rgb; 9] = [
    Rgb::new(0xff, 0xf5, 0xf0),
    Rgb::new(0xfe, 0xe0, 0xd2),
    Rgb::new(0xfc, 0xbb, 0xa1),
    Rgb::new(0xfc, 0x92, 0x72),
    Rgb::new(0xfb, 0x6a, 0x4a),
    Rgb::new(0xef, 0x3b, 0x2c),
    Rgb::new(0xcb, 0x18, 0x1d),
    Rgb::new(0xa5, 0x0f, 0x15),
    Rgb::new(0x67, 0x00, 0x0d),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorRamp {
    /// Heat-map table shading
    YlOrRd,
    /// Ranking bar colour
    Reds,
}

impl ColorRamp {
    fn stops(self) -> &'static [Rgb; 9] {
        match self {
            ColorRamp::YlOrRd => &YL_OR_RD,
            ColorRamp::Reds => &REDS,
        }
    }

    /// Colour at `t` in [0, 1] (clamped), linearly interpolated between stops
    pub fn at(self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(stops.len() - 1);
        let frac = scaled - lower as f64;

        let lerp = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * frac).round() as u8 };
        let (a, b) = (stops[lower], stops[upper]);
        Rgb::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ColorRamp::YlOrRd.at(0.0).to_hex(), "#ffffcc");
        assert_eq!(ColorRamp::YlOrRd.at(1.0).to_hex(), "#800026");
        assert_eq!(ColorRamp::Reds.at(1.0).to_hex(), "#67000d");
    }

    #[test]
    fn test_ramp_clamps_out_of_range() {
        assert_eq!(ColorRamp::Reds.at(-3.0), ColorRamp::Reds.at(0.0));
        assert_eq!(ColorRamp::Reds.at(7.0), ColorRamp::Reds.at(1.0));
        assert_eq!(ColorRamp::Reds.at(f64::NAN), ColorRamp::Reds.at(0.0));
    }

    #[test]
    fn test_ramp_hits_interior_stop() {
        // 0.5 lands exactly on the fifth stop
        assert_eq!(ColorRamp::YlOrRd.at(0.5).to_hex(), "#fd8d3c");
    }

    #[test]
    fn test_text_color_contrast() {
        assert_eq!(ColorRamp::YlOrRd.at(0.0).text_color(), "#000000");
        assert_eq!(ColorRamp::YlOrRd.at(1.0).text_color(), "#f1f1f1");
    }
}
