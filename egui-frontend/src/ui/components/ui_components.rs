//! # Shared UI Components
//!
//! Small reusable widgets: section titles, the filled/outline button styles
//! used across screens, and the icon glyph lookup for catalog icon names.

use eframe::egui;

use crate::ui::components::theme::colors;

/// Render a centered section title with an optional subtitle and divider
pub fn render_section_title(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(title)
                .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT),
        );

        if let Some(subtitle) = subtitle {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(subtitle)
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_LIGHT),
            );
        }

        ui.add_space(8.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(60.0, 4.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::Rounding::same(2.0), colors::PRIMARY);
        ui.add_space(16.0);
    });
}

/// A filled call-to-action button
pub fn primary_button(text: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_owned())
            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
            .color(colors::WHITE),
    )
    .fill(fill)
    .stroke(egui::Stroke::new(2.0, fill))
    .rounding(egui::Rounding::same(10.0))
    .min_size(egui::vec2(120.0, 40.0))
}

/// An outline button tinted with the given accent colour
pub fn outline_button(text: &str, accent: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_owned())
            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
            .color(accent),
    )
    .fill(egui::Color32::TRANSPARENT)
    .stroke(egui::Stroke::new(2.0, accent))
    .rounding(egui::Rounding::same(10.0))
    .min_size(egui::vec2(120.0, 40.0))
}

/// Map a catalog icon name to a display glyph
pub fn icon_glyph(icon_name: &str) -> &'static str {
    match icon_name {
        "Utensils" => "🍽",
        "Shirt" => "👕",
        "Gamepad2" => "🎮",
        "Banknote" => "💵",
        "Users" => "👥",
        "Heart" => "❤",
        "Home" => "🏠",
        "Award" => "🏆",
        "GraduationCap" => "🎓",
        "Stethoscope" => "🩺",
        "HeartHandshake" => "🤝",
        "Clock" => "🕐",
        "Target" => "🎯",
        "Globe" => "🌍",
        "Mail" => "✉",
        "Phone" => "📞",
        "MapPin" => "📍",
        "Search" => "🔍",
        "CheckCircle" => "✅",
        "CreditCard" => "💳",
        "Quote" => "❝",
        "Calendar" => "📅",
        _ => "❤",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_icons_fall_back_to_heart() {
        assert_eq!(icon_glyph("NotAnIcon"), "❤");
        assert_eq!(icon_glyph("Utensils"), "🍽");
    }
}
