//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop handlers for sortable lists.
//! Handlers only translate DOM events into callbacks; whoever owns the list
//! keeps the drag state.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where a dropped row lands relative to the row under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

impl Placement {
    /// Upper half of the target row means before, lower half after.
    pub fn from_offset(offset_y: f64, height: f64) -> Self {
        if offset_y < height / 2.0 {
            Placement::Before
        } else {
            Placement::After
        }
    }

    pub fn is_before(self) -> bool {
        self == Placement::Before
    }
}

/// Placement of the pointer within the element the handler is bound to
pub fn placement_from_event(ev: &web_sys::DragEvent) -> Placement {
    let rect = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.get_bounding_client_rect());
    match rect {
        Some(rect) => Placement::from_offset(f64::from(ev.client_y()) - rect.top(), rect.height()),
        None => Placement::Before,
    }
}

/// True when the pointer left the bound element itself, not just moved
/// onto one of its children.
fn left_bound_element(ev: &web_sys::DragEvent) -> bool {
    let Some(current) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return true;
    };
    let related = ev.related_target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    !current.contains(related.as_ref())
}

/// dragstart: mark the move and report the source id
pub fn make_on_dragstart(item_id: u64, on_start: Callback<u64>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox will not start a drag without data
            let _ = dt.set_data("text/plain", &item_id.to_string());
        }
        on_start.run(item_id);
    }
}

/// dragover: allow dropping here and report the hovered id.
/// Fires continuously while hovering; callers should ignore repeats.
pub fn make_on_dragover(item_id: u64, on_over: Callback<u64>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        on_over.run(item_id);
    }
}

/// dragleave: report only when the pointer really left the row
pub fn make_on_dragleave(item_id: u64, on_leave: Callback<u64>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if left_bound_element(&ev) {
            on_leave.run(item_id);
        }
    }
}

/// drop: report the target id and the pointer placement
pub fn make_on_drop(item_id: u64, on_drop: Callback<(u64, Placement)>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_drop.run((item_id, placement_from_event(&ev)));
    }
}

/// dragend: the drag finished, dropped or not
pub fn make_on_dragend(on_end: Callback<()>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        on_end.run(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_half_is_before() {
        assert_eq!(Placement::from_offset(0.0, 40.0), Placement::Before);
        assert_eq!(Placement::from_offset(19.9, 40.0), Placement::Before);
        assert!(Placement::from_offset(5.0, 40.0).is_before());
    }

    #[test]
    fn test_midpoint_and_below_is_after() {
        assert_eq!(Placement::from_offset(20.0, 40.0), Placement::After);
        assert_eq!(Placement::from_offset(39.0, 40.0), Placement::After);
        assert!(!Placement::from_offset(60.0, 40.0).is_before());
    }
}
