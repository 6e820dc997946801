//! Showcase widgets: carousel controls, info card, quantity selector

use egui::{Align, Color32, Layout, RichText, Rounding, Stroke, Vec2};
use vitrine_core::{Catalog, Product};

/// Carousel action requested by the user this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Prev,
    Next,
    Select(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Increase,
    Decrease,
}

/// Previous/next arrows and one dot per product. Controls are disabled
/// while a load is in flight; quantity elsewhere stays live.
pub fn carousel_controls(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    active_index: usize,
    enabled: bool,
) -> Option<NavAction> {
    let mut action = None;
    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
        ui.add_space(ui.available_width() / 2.0 - 80.0);

        if ui
            .add_enabled(enabled, egui::Button::new("◀").min_size(Vec2::splat(32.0)))
            .clicked()
        {
            action = Some(NavAction::Prev);
        }

        for (index, _) in catalog.iter().enumerate() {
            let selected = index == active_index;
            let (rect, response) =
                ui.allocate_exact_size(Vec2::splat(14.0), egui::Sense::click());
            let color = dot_color(ui.visuals(), selected, enabled);
            ui.painter()
                .circle(rect.center(), 4.0, color, Stroke::NONE);
            if enabled && response.clicked() {
                action = Some(NavAction::Select(index));
            }
        }

        if ui
            .add_enabled(enabled, egui::Button::new("▶").min_size(Vec2::splat(32.0)))
            .clicked()
        {
            action = Some(NavAction::Next);
        }
    });
    action
}

/// Dot indicator color. Disabled dots are dimmed so the whole carousel
/// reads as inactive while a load is in flight, not just the arrows.
fn dot_color(visuals: &egui::Visuals, selected: bool, enabled: bool) -> Color32 {
    let color = if selected {
        visuals.strong_text_color()
    } else {
        visuals.weak_text_color()
    };
    if enabled {
        color
    } else {
        color.gamma_multiply(0.4)
    }
}

/// Title, rating, description, and price for the active product.
pub fn product_info_card(ui: &mut egui::Ui, product: &Product) {
    egui::Frame::group(ui.style())
        .rounding(Rounding::same(8.0))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.heading(&product.title);
            ui.add_space(4.0);
            // Fixed storefront rating, same for every product.
            ui.horizontal(|ui| {
                ui.label(RichText::new("★★★★").color(Color32::GOLD));
                ui.label(RichText::new("★").color(ui.visuals().weak_text_color()));
                ui.label(RichText::new("(42)").weak());
            });
            ui.add_space(4.0);
            ui.label(&product.description);
            ui.add_space(8.0);
            ui.label(
                RichText::new(&product.price)
                    .size(20.0)
                    .strong()
                    .color(Color32::from_rgb(0x2e, 0x7d, 0x32)),
            );
        });
}

/// Minus/count/plus row. Always live, even during loads.
pub fn quantity_selector(ui: &mut egui::Ui, quantity: u32) -> Option<QuantityChange> {
    let mut change = None;
    ui.horizontal(|ui| {
        ui.label("Quantity:");
        if ui.button("−").clicked() {
            change = Some(QuantityChange::Decrease);
        }
        ui.label(RichText::new(quantity.to_string()).strong());
        if ui.button("+").clicked() {
            change = Some(QuantityChange::Increase);
        }
    });
    change
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_dimmed_while_disabled() {
        let visuals = egui::Visuals::default();
        for selected in [false, true] {
            let live = dot_color(&visuals, selected, true);
            let dimmed = dot_color(&visuals, selected, false);
            assert_ne!(live, dimmed);
            assert!(dimmed.a() < live.a());
        }
    }

    #[test]
    fn selected_dot_stands_out_when_enabled() {
        let visuals = egui::Visuals::default();
        assert_ne!(
            dot_color(&visuals, true, true),
            dot_color(&visuals, false, true)
        );
    }
}
