use eframe::egui::{CentralPanel, Context, Frame, RichText, ScrollArea, TopBottomPanel};
use strum::IntoEnumIterator;

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

use super::app::{CarPriceApp, Page};

impl CarPriceApp {
    pub(super) fn render_top_bar(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(8.0);

        TopBottomPanel::top("top_bar").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.app_title)
                        .size(20.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(24.0);

                let mut selected = self.page;
                for page in Page::iter() {
                    ui.selectable_value(&mut selected, page, page.title());
                }
                self.set_page(selected);
            });
        });
    }

    pub(super) fn render_status_bar(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(4.0);

        TopBottomPanel::bottom("status_bar").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.metric(
                    UI_TEXT.backend_label,
                    self.api.as_ref().map_or("-", |api| api.base_url()),
                    UI_CONFIG.colors.accent,
                );
                ui.separator();

                let in_flight = self.in_flight_count();
                if in_flight > 0 {
                    ui.spinner();
                    ui.label_subdued(format!("{} {}", in_flight, UI_TEXT.in_flight_label));
                } else {
                    ui.label_subdued(format!("0 {}", UI_TEXT.in_flight_label));
                }
            });
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(12.0);

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| match self.page {
                    Page::Predict => self.render_predict_page(ui),
                    Page::Analytics => self.render_analytics_page(ui),
                });
        });
    }
}
