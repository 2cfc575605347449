use std::time::Duration;

use duro::prelude::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// 100 tall viewport over 400 of content, no horizontal overflow.
fn tall(scroll_top: f32) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top,
        scroll_left: 0.0,
        scroll_height: 400.0,
        scroll_width: 200.0,
        client_height: 100.0,
        client_width: 200.0,
    }
}

struct Fixture {
    area: ScrollArea,
    viewport: ScrollAreaViewport,
    vertical: ScrollAreaScrollbar,
    horizontal: ScrollAreaScrollbar,
    thumb: ScrollAreaThumb,
}

fn area_with(options: ScrollAreaOptions) -> Fixture {
    let area = ScrollArea::new(options);
    let scope = area.provide(&Scope::new());
    Fixture {
        viewport: ScrollAreaViewport::mount(&scope).unwrap(),
        vertical: ScrollAreaScrollbar::mount(&scope, Orientation::Vertical).unwrap(),
        horizontal: ScrollAreaScrollbar::mount(&scope, Orientation::Horizontal).unwrap(),
        thumb: ScrollAreaThumb::mount(&scope, Orientation::Vertical).unwrap(),
        area,
    }
}

// ============================================================================
// Scroll activity
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_scrolling_clears_after_quiescence() {
    let f = area_with(ScrollAreaOptions::new());
    f.viewport.on_resize(tall(0.0));
    assert!(!f.area.is_scrolling());

    f.viewport.on_scroll(tall(40.0)).unwrap();
    assert!(f.area.is_scrolling());
    assert!(f.vertical.is_visible());

    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(f.area.is_scrolling());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(!f.area.is_scrolling());
    assert!(!f.vertical.is_visible());
    assert_eq!(f.vertical.attrs().get("data-state"), Some("hidden"));
}

#[tokio::test(start_paused = true)]
async fn test_each_scroll_restarts_the_window() {
    let f = area_with(ScrollAreaOptions::new().quiescence(Duration::from_millis(200)));
    f.viewport.on_scroll(tall(10.0)).unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    f.viewport.on_scroll(tall(20.0)).unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    // 300ms since the first scroll, 150ms since the last.
    assert!(f.area.is_scrolling());

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(!f.area.is_scrolling());
}

#[tokio::test(start_paused = true)]
async fn test_unmount_cancels_pending_quiescence() {
    let f = area_with(ScrollAreaOptions::new());
    f.viewport.on_scroll(tall(10.0)).unwrap();
    f.area.unmount();
    assert!(!f.area.is_scrolling());
    f.area.clear_dirty();

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(!f.area.is_dirty());
}

#[test]
fn test_scroll_without_runtime_records_metrics() {
    let f = area_with(ScrollAreaOptions::new());
    assert_eq!(f.viewport.on_scroll(tall(30.0)), Err(Error::NoRuntime));
    assert!(approx(f.area.axis(Orientation::Vertical).offset, 30.0));
    assert!(!f.area.is_scrolling());
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_scrollbars_render_only_on_overflow() {
    let f = area_with(ScrollAreaOptions::new());
    f.viewport.on_resize(tall(0.0));
    assert!(f.vertical.is_rendered());
    assert!(!f.horizontal.is_rendered());
}

#[test]
fn test_resize_keeps_offsets() {
    let f = area_with(ScrollAreaOptions::new());
    f.viewport.on_resize(tall(0.0));
    let mut grown = tall(999.0);
    grown.scroll_height = 800.0;
    f.viewport.on_resize(grown);

    let axis = f.area.axis(Orientation::Vertical);
    assert!(approx(axis.offset, 0.0));
    assert!(approx(axis.content, 800.0));
}

#[tokio::test(start_paused = true)]
async fn test_thumb_tracks_scroll_position() {
    let f = area_with(ScrollAreaOptions::new());
    f.viewport.on_scroll(tall(300.0)).unwrap();
    let geometry = f.thumb.geometry();
    assert!(approx(geometry.size_percent, 25.0));
    assert!(approx(geometry.offset, 75.0));
    assert_eq!(f.thumb.attrs().get("data-size-percent"), Some("25.00"));
}

#[test]
fn test_min_thumb_percent_option() {
    let f = area_with(ScrollAreaOptions::new().min_thumb_percent(30.0));
    f.viewport.on_resize(tall(0.0));
    assert!(approx(f.thumb.geometry().size_percent, 30.0));
}

#[tokio::test(start_paused = true)]
async fn test_scroll_to_clamps() {
    let f = area_with(ScrollAreaOptions::new());
    f.viewport.on_resize(tall(0.0));
    assert!(approx(f.area.scroll_to(Orientation::Vertical, 1000.0).unwrap(), 300.0));
    assert!(approx(f.area.scroll_to(Orientation::Vertical, -5.0).unwrap(), 0.0));
}

// ============================================================================
// Thumb drag
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_thumb_drag_scales_pointer_delta() {
    let f = area_with(ScrollAreaOptions::new());
    f.viewport.on_resize(tall(0.0));

    // Thumb 25 of a 100 track: 75 of travel maps onto 300 of scroll.
    f.thumb.pointer_down(10.0);
    assert!(f.area.is_dragging());
    let offset = f.thumb.pointer_move(35.0).unwrap().unwrap();
    assert!(approx(offset, 100.0));
    assert!(f.area.is_scrolling());

    let clamped = f.thumb.pointer_move(500.0).unwrap().unwrap();
    assert!(approx(clamped, 300.0));

    f.thumb.pointer_up();
    assert!(!f.area.is_dragging());
    assert_eq!(f.thumb.pointer_move(40.0).unwrap(), None);
}

#[test]
fn test_move_without_drag_is_ignored() {
    let f = area_with(ScrollAreaOptions::new());
    f.viewport.on_resize(tall(0.0));
    assert_eq!(f.thumb.pointer_move(20.0), Ok(None));
}

#[test]
fn test_viewport_max_height() {
    let f = area_with(ScrollAreaOptions::new().max_height(240.0));
    assert_eq!(f.viewport.max_height(), Some(240.0));
    assert_eq!(f.viewport.attrs().get("data-max-height"), Some("240"));
}
