use galaxy_viewer::reveal::{Reveal, REVEAL_SLIDE_PX, REVEAL_THRESHOLD};
use galaxy_viewer::scroll::{ScrollPage, BLOCK_MARGIN_FRACTION, SECTIONS};

const VIEW_H: f32 = 1000.0;

// ── Scroll page ─────────────────────────────────────────────────────────────

#[test]
fn page_spans_one_viewport_per_section() {
    let page = ScrollPage::new(VIEW_H);
    assert_eq!(page.max_offset(), (SECTIONS.len() - 1) as f32 * VIEW_H);
    assert_eq!(page.offset(), 0.0);
    assert_eq!(page.progress(), 0.0);
}

#[test]
fn scroll_clamps_at_both_ends() {
    let mut page = ScrollPage::new(VIEW_H);
    page.scroll_by(-500.0);
    assert_eq!(page.offset(), 0.0);

    page.scroll_by(1e9);
    assert_eq!(page.offset(), page.max_offset());
    assert_eq!(page.progress(), 1.0);
}

#[test]
fn progress_is_linear_in_offset() {
    let mut page = ScrollPage::new(VIEW_H);
    page.scroll_by(page.max_offset() / 2.0);
    assert!((page.progress() - 0.5).abs() < 1e-6);
}

#[test]
fn scroll_to_unknown_anchor_is_a_noop() {
    let mut page = ScrollPage::new(VIEW_H);
    page.scroll_by(137.0);
    page.scroll_to("missing");
    assert!(!page.gliding());

    // Stepping with no glide leaves the offset untouched.
    for _ in 0..10 {
        page.step();
    }
    assert_eq!(page.offset(), 137.0);
}

#[test]
fn glide_converges_on_the_anchor() {
    let mut page = ScrollPage::new(VIEW_H);
    let target = page.section_offset("contact").unwrap();
    page.scroll_to("contact");
    assert!(page.gliding());

    for _ in 0..60 {
        page.step();
    }
    assert!(!page.gliding());
    assert!((page.offset() - target).abs() < 1e-3);
}

#[test]
fn glide_moves_monotonically_toward_target() {
    let mut page = ScrollPage::new(VIEW_H);
    page.scroll_to("projects");
    let mut prev = page.offset();
    while page.gliding() {
        page.step();
        assert!(page.offset() >= prev - 1e-6, "glide reversed direction");
        assert!(page.offset() <= page.max_offset());
        prev = page.offset();
    }
}

#[test]
fn wheel_input_cancels_glide() {
    let mut page = ScrollPage::new(VIEW_H);
    page.scroll_to("contact");
    page.step();
    page.scroll_by(-10.0);
    assert!(!page.gliding());
}

#[test]
fn refresh_is_idempotent_for_identical_viewports() {
    let mut page = ScrollPage::new(VIEW_H);
    page.scroll_by(1234.0);
    let before = page.offset();
    page.refresh(VIEW_H);
    page.refresh(VIEW_H);
    assert_eq!(page.offset(), before);
    assert_eq!(page.max_offset(), (SECTIONS.len() - 1) as f32 * VIEW_H);
}

#[test]
fn refresh_preserves_page_position_across_resize() {
    let mut page = ScrollPage::new(VIEW_H);
    page.scroll_by(VIEW_H); // exactly one section down
    let progress = page.progress();

    page.refresh(VIEW_H / 2.0);
    assert!((page.progress() - progress).abs() < 1e-6);
    assert!((page.offset() - VIEW_H / 2.0).abs() < 1e-3);
}

#[test]
fn block_top_tracks_scroll_offset() {
    let mut page = ScrollPage::new(VIEW_H);
    assert_eq!(page.block_top(0), BLOCK_MARGIN_FRACTION * VIEW_H);
    assert_eq!(page.block_top(1), (1.0 + BLOCK_MARGIN_FRACTION) * VIEW_H);

    page.scroll_by(100.0);
    assert_eq!(page.block_top(0), BLOCK_MARGIN_FRACTION * VIEW_H - 100.0);
}

// ── Reveals ─────────────────────────────────────────────────────────────────

#[test]
fn block_below_threshold_stays_hidden() {
    let mut reveal = Reveal::new();
    let top = VIEW_H * REVEAL_THRESHOLD + 1.0;
    for _ in 0..120 {
        let pose = reveal.step(top, VIEW_H);
        assert_eq!(pose.opacity, 0.0);
        assert_eq!(pose.y_offset, REVEAL_SLIDE_PX);
    }
}

#[test]
fn crossing_the_threshold_fades_and_slides_in() {
    let mut reveal = Reveal::new();
    let top = VIEW_H * REVEAL_THRESHOLD - 1.0;

    let mut prev_opacity = 0.0;
    let mut settled_at = None;
    for frame in 0..120 {
        let pose = reveal.step(top, VIEW_H);
        assert!(pose.opacity >= prev_opacity, "opacity regressed mid-reveal");
        // Opacity and slide are locked together.
        let expected_offset = (1.0 - pose.opacity) * REVEAL_SLIDE_PX;
        assert!((pose.y_offset - expected_offset).abs() < 1e-5);
        prev_opacity = pose.opacity;
        if pose.opacity >= 1.0 && settled_at.is_none() {
            settled_at = Some(frame);
        }
    }
    let settled = settled_at.expect("reveal never completed");
    assert!(settled >= 30, "reveal completed implausibly fast");
    let pose = reveal.pose();
    assert_eq!(pose.opacity, 1.0);
    assert_eq!(pose.y_offset, 0.0);
}

#[test]
fn scrolling_back_out_reverses_the_reveal() {
    let mut reveal = Reveal::new();
    let inside = VIEW_H * REVEAL_THRESHOLD - 1.0;
    let outside = VIEW_H * REVEAL_THRESHOLD + 1.0;

    for _ in 0..120 {
        reveal.step(inside, VIEW_H);
    }
    assert_eq!(reveal.pose().opacity, 1.0);

    // Toggle runs both directions; this is not a play-once effect.
    let mut prev = 1.0;
    for _ in 0..120 {
        let pose = reveal.step(outside, VIEW_H);
        assert!(pose.opacity <= prev);
        prev = pose.opacity;
    }
    assert_eq!(reveal.pose().opacity, 0.0);
    assert_eq!(reveal.pose().y_offset, REVEAL_SLIDE_PX);
}

#[test]
fn reveal_reverses_mid_flight() {
    let mut reveal = Reveal::new();
    let inside = VIEW_H * 0.5;
    let outside = VIEW_H;

    for _ in 0..15 {
        reveal.step(inside, VIEW_H);
    }
    let partial = reveal.pose().opacity;
    assert!(partial > 0.0 && partial < 1.0);

    let pose = reveal.step(outside, VIEW_H);
    assert!(pose.opacity < partial);
}
