#![cfg(target_arch = "wasm32")]

use folio::components::carousel::prefers_reduced_motion;
use folio::scroll::dom::{DomRegions, current_viewport, scroll_to_section};
use folio::scroll::tracker::{RegionSource, SectionTracker};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_section(id: &str, height_px: u32) -> web_sys::HtmlElement {
    let document = gloo::utils::document();
    let section = document
        .create_element("section")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    section.set_id(id);
    section
        .set_attribute("style", &format!("display: block; height: {height_px}px; margin: 0;"))
        .unwrap();
    gloo::utils::body().append_child(&section).unwrap();
    section
}

#[wasm_bindgen_test]
fn viewport_is_measurable() {
    let viewport = current_viewport().expect("window reports its size");
    assert!(viewport.height > 0.0);
    assert!(viewport.scroll_y >= 0.0);
}

#[wasm_bindgen_test]
fn dom_regions_measure_mounted_sections_only() {
    let first = mount_section("web-first", 400);
    let second = mount_section("web-second", 400);
    let viewport = current_viewport().unwrap();

    let first_top = DomRegions.top_of("web-first", &viewport).unwrap();
    let second_top = DomRegions.top_of("web-second", &viewport).unwrap();
    assert!((second_top - first_top - 400.0).abs() < 1.0);
    assert_eq!(None, DomRegions.top_of("web-missing", &viewport));

    first.remove();
    second.remove();
}

#[wasm_bindgen_test]
fn tracker_reads_the_live_layout() {
    let top = mount_section("web-top", 2000);
    let viewport = current_viewport().unwrap();
    let mut tracker = SectionTracker::new(
        vec!["web-top".to_owned(), "web-absent".to_owned()],
        "web-absent",
    );
    tracker.recompute(&viewport, &DomRegions);
    assert_eq!("web-top", tracker.active());
    top.remove();
}

#[wasm_bindgen_test]
fn scrolling_to_a_missing_section_is_refused() {
    assert!(!scroll_to_section("web-nowhere"));
    let target = mount_section("web-target", 100);
    assert!(scroll_to_section("web-target"));
    target.remove();
}

#[wasm_bindgen_test]
fn reduced_motion_query_matches_the_media_query_list() {
    let expected = gloo::utils::window()
        .match_media("(prefers-reduced-motion: reduce)")
        .unwrap()
        .is_some_and(|query| query.matches());
    assert_eq!(expected, prefers_reduced_motion());
}
