use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Tag colours
// ---------------------------------------------------------------------------

const TAG_SATURATION: f32 = 0.55;
const TAG_LIGHTNESS: f32 = 0.42;

/// Stable hue in `[0, 360)` for a label (FNV-1a over its bytes).
fn hue_for(label: &str) -> f32 {
    let hash = label.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
    });
    (hash % 360) as f32
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Background colour for a tag chip. The same tag always gets the same colour.
pub fn tag_color(tag: &str) -> Color32 {
    hsl_to_color32(hue_for(tag), TAG_SATURATION, TAG_LIGHTNESS)
}
