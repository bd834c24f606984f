//! Stateless egui helpers shared across the app views: color
//! conversions from the theme's value types, the diagonal hero
//! gradient, icon glyphs, and small text utilities.

use eframe::egui;

use folio::theme::{ConicOrnament, Rgb, Rgba};

/// Convert a theme RGB to an egui color.
pub fn color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// Convert a theme RGBA to an egui color.
pub fn color32a(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Multiply a color's alpha by `factor` (0.0..=1.0).
pub fn faded(color: egui::Color32, factor: f32) -> egui::Color32 {
    let a = (color.a() as f32 * factor.clamp(0.0, 1.0)) as u8;
    egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// Paint a diagonal gradient (top-left `from` → bottom-right `to`)
/// using a two-triangle mesh with vertex colors.
pub fn gradient_rect(painter: &egui::Painter, rect: egui::Rect, from: Rgb, to: Rgb) {
    let c_from = color32(from);
    let c_to = color32(to);
    let mid = egui::Color32::from_rgb(
        ((from.r as u16 + to.r as u16) / 2) as u8,
        ((from.g as u16 + to.g as u16) / 2) as u8,
        ((from.b as u16 + to.b as u16) / 2) as u8,
    );

    let mut mesh = egui::Mesh::default();
    let idx = mesh.vertices.len() as u32;
    for (pos, color) in [
        (rect.left_top(), c_from),
        (rect.right_top(), mid),
        (rect.right_bottom(), c_to),
        (rect.left_bottom(), mid),
    ] {
        mesh.vertices.push(egui::epaint::Vertex {
            pos,
            uv: egui::epaint::WHITE_UV,
            color,
        });
    }
    mesh.indices
        .extend_from_slice(&[idx, idx + 1, idx + 2, idx, idx + 2, idx + 3]);
    painter.add(egui::Shape::mesh(mesh));
}

/// Paint a square rotated by `angle_rad` around its center.
pub fn rotated_square(
    painter: &egui::Painter,
    center: egui::Pos2,
    half: f32,
    angle_rad: f32,
    color: egui::Color32,
) {
    let (s, c) = angle_rad.sin_cos();
    let corners = [(-half, -half), (half, -half), (half, half), (-half, half)]
        .map(|(x, y)| center + egui::vec2(x * c - y * s, x * s + y * c));
    painter.add(egui::Shape::convex_polygon(
        corners.to_vec(),
        color,
        egui::Stroke::NONE,
    ));
}

/// Paint a conic ornament as three 120° arc strokes, one per stop,
/// starting at the ornament's angle.
pub fn conic_ring(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    ornament: &ConicOrnament,
) {
    const ARC_STEPS: usize = 16;
    for (i, stop) in ornament.stops.iter().enumerate() {
        let a0 = (ornament.start_angle_deg + 120.0 * i as f32).to_radians();
        let points: Vec<egui::Pos2> = (0..=ARC_STEPS)
            .map(|step| {
                let a = a0 + (step as f32 / ARC_STEPS as f32) * 120.0_f32.to_radians();
                center + radius * egui::vec2(a.cos(), a.sin())
            })
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(3.0, color32a(*stop)),
        ));
    }
}

/// Glyph for a certificate icon name. Unknown names get the award
/// ribbon.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "award" | "certificate" => "\u{1F396}",
        "code" => "\u{2328}",
        "cloud" => "\u{2601}",
        "security" | "shield" => "\u{1F6E1}",
        "data" | "database" => "\u{1F5C3}",
        "design" | "palette" => "\u{1F3A8}",
        "game" => "\u{1F3AE}",
        _ => "\u{1F396}",
    }
}

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending
/// `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("abcdefghij", 8), "abcde...");
        assert_eq!(truncate_str("héllo wörld", 11), "héllo wörld");
    }

    #[test]
    fn faded_scales_alpha() {
        let c = egui::Color32::from_rgba_unmultiplied(10, 20, 30, 200);
        assert_eq!(faded(c, 0.5).a(), 100);
        assert_eq!(faded(c, 2.0).a(), 200);
    }
}
