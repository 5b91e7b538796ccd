// src/ui.rs
//! egui surfaces drawn over the galaxy: the loading overlay, the section nav
//! bar, and the scrolled page content with reveal poses applied.

use crate::reveal::RevealPose;
use crate::scroll::{ScrollPage, SECTIONS};
use egui::{Align2, Color32, FontId, Frame, Id, Order, RichText};

/// Full-screen loading overlay with the live counter.
pub fn draw_loader(ctx: &egui::Context, progress: u32) {
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(Order::Foreground, Id::new("loader")));

    painter.rect_filled(screen, 0.0, Color32::from_rgb(4, 4, 10));
    painter.text(
        screen.center(),
        Align2::CENTER_CENTER,
        format!("{progress}"),
        FontId::monospace(72.0),
        Color32::from_rgb(180, 160, 255),
    );
    painter.text(
        screen.center() + egui::vec2(0.0, 64.0),
        Align2::CENTER_CENTER,
        "initializing galaxy",
        FontId::monospace(14.0),
        Color32::from_gray(140),
    );
}

/// Top nav bar. Returns the id of the section whose anchor was clicked.
pub fn draw_nav(ctx: &egui::Context) -> Option<&'static str> {
    let mut clicked = None;

    egui::TopBottomPanel::top("nav")
        .frame(
            Frame::none()
                .fill(Color32::from_black_alpha(160))
                .inner_margin(egui::Margin::symmetric(16.0, 8.0)),
        )
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("galaxy-viewer")
                        .monospace()
                        .color(Color32::from_rgb(180, 160, 255)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Right-to-left layout, so iterate reversed to keep order.
                    for section in SECTIONS.iter().rev() {
                        if ui.link(section.title).clicked() {
                            clicked = Some(section.id);
                        }
                    }
                });
            });
        });

    clicked
}

/// Page sections, positioned by the scroll offset with each block's reveal
/// pose (opacity + slide) applied.
pub fn draw_sections(ctx: &egui::Context, page: &ScrollPage, poses: &[RevealPose]) {
    let ppp = ctx.pixels_per_point();
    let screen = ctx.screen_rect();
    let viewport_h_pt = page.viewport_h() / ppp;

    for (i, section) in SECTIONS.iter().enumerate() {
        let pose = poses.get(i).copied().unwrap_or(RevealPose::HIDDEN);
        let top_pt = (page.block_top(i) + pose.y_offset) / ppp;

        // Cull blocks far outside the viewport.
        if top_pt < -viewport_h_pt || top_pt > 2.0 * viewport_h_pt {
            continue;
        }

        egui::Area::new(Id::new(section.id))
            .order(Order::Middle)
            .fixed_pos(egui::pos2(screen.left() + 48.0, top_pt))
            .show(ctx, |ui| {
                ui.set_opacity(pose.opacity);
                ui.set_max_width(screen.width() * 0.5);
                ui.heading(RichText::new(section.title).size(32.0).strong());
                ui.add_space(8.0);
                ui.label(section_body(section.id));
            });
    }
}

fn section_body(id: &str) -> &'static str {
    match id {
        "home" => {
            "Fifteen thousand particles, a dense core, and two polar jets. \
             Scroll to fly the camera through the disk."
        }
        "about" => {
            "The disk is sampled with a power-law radius so the core glows \
             brighter, while the jet streams loop endlessly along the poles."
        }
        "projects" => {
            "Every frame eases the scene toward the pointer, spins the mesh, \
             and advances the jets before a single instanced draw call."
        }
        "contact" => "Move the pointer to sway the galaxy. That's the whole deal.",
        _ => "",
    }
}
