//! Scroll tracking for the showcase page.
//!
//! All of the page's runtime state lives here: scroll progress, the active
//! section highlight, and floating-nav visibility. The state is derived from
//! a [`ScrollSnapshot`] by a pure reducer so it can be tested on the host;
//! the DOM is only touched when sampling a snapshot and when registering the
//! window listener.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Pixels added to the raw scroll offset when matching sections, so a
/// section highlights slightly before its top edge reaches the viewport top.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;

/// The floating nav stays hidden until the page has scrolled past this offset.
pub const FLOATING_NAV_THRESHOLD_PX: f64 = 300.0;

/// Named page anchors, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Features,
    Tech,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Overview, Section::Features, Section::Tech];

    /// DOM id of the section's anchor element.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Features => "features",
            Section::Tech => "tech",
        }
    }

    /// Label shown in the floating nav.
    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Features => "Features",
            Section::Tech => "Tech",
        }
    }
}

/// Vertical extent of one mounted section, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

/// Page geometry sampled from the DOM on each scroll event.
///
/// Sections whose anchor element is not in the DOM yet contribute no span.
/// Geometry falls back to zero when `window` or `document` is unavailable.
#[derive(Debug, Clone, Default)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub spans: Vec<SectionSpan>,
}

/// Derived UI state, recomputed from scratch on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Percentage of the scrollable range traversed, in `[0, 100]`.
    pub progress: f64,
    pub active: Section,
    pub floating_nav: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            active: Section::Overview,
            floating_nav: false,
        }
    }
}

/// Reduce a snapshot to the next scroll state.
///
/// The active section is the first span in document order containing
/// `scroll_y` plus the lookahead offset. When no span matches, the previous
/// selection is kept rather than reset, so the highlight does not flick off
/// while the viewport sits in a gap between sections.
///
/// Progress is 0 whenever the scrollable range is zero or negative (content
/// shorter than the viewport), never NaN or infinite.
pub fn compute_scroll_state(snapshot: &ScrollSnapshot, prev: ScrollState) -> ScrollState {
    let probe = snapshot.scroll_y + SECTION_LOOKAHEAD_PX;
    let active = snapshot
        .spans
        .iter()
        .find(|span| probe >= span.top && probe < span.top + span.height)
        .map(|span| span.section)
        .unwrap_or(prev.active);

    let max_scroll = snapshot.scroll_height - snapshot.client_height;
    let progress = if max_scroll > 0.0 {
        (snapshot.scroll_y / max_scroll * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    ScrollState {
        progress,
        active,
        floating_nav: snapshot.scroll_y > FLOATING_NAV_THRESHOLD_PX,
    }
}

/// Sample the current viewport and section geometry.
fn snapshot_from_dom() -> ScrollSnapshot {
    let Some(window) = web_sys::window() else {
        return ScrollSnapshot::default();
    };
    let Some(document) = window.document() else {
        return ScrollSnapshot::default();
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let (scroll_height, client_height) = document
        .document_element()
        .map(|root| (root.scroll_height() as f64, root.client_height() as f64))
        .unwrap_or((0.0, 0.0));

    let spans = Section::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.anchor())?;
            let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
            Some(SectionSpan {
                section,
                top: element.offset_top() as f64,
                height: element.offset_height() as f64,
            })
        })
        .collect();

    ScrollSnapshot {
        scroll_y,
        scroll_height,
        client_height,
        spans,
    }
}

/// Track the viewport scroll position for the lifetime of the calling scope.
///
/// Registers a window scroll listener after mount and removes it again when
/// the owning scope is disposed. State is seeded once at registration so the
/// initial viewport position is reflected before the first scroll event.
pub fn use_scroll_state() -> ReadSignal<ScrollState> {
    let (state, set_state) = signal(ScrollState::default());

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };

        let handler = Closure::<dyn FnMut()>::new(move || {
            set_state.update(|prev| *prev = compute_scroll_state(&snapshot_from_dom(), *prev));
        });
        if window
            .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
            .is_err()
        {
            return;
        }

        set_state.update(|prev| *prev = compute_scroll_state(&snapshot_from_dom(), *prev));

        let handler = SendWrapper::new(handler);
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    handler.as_ref().unchecked_ref(),
                );
            }
        });
    });

    state
}

/// Smoothly scroll the viewport to a section's anchor.
///
/// Does nothing when the anchor element is not in the DOM.
pub fn scroll_to_section(section: Section) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(section.anchor()) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Three contiguous sections of 800px each, 2400px document, 800px viewport.
    fn page_spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan {
                section: Section::Overview,
                top: 0.0,
                height: 800.0,
            },
            SectionSpan {
                section: Section::Features,
                top: 800.0,
                height: 800.0,
            },
            SectionSpan {
                section: Section::Tech,
                top: 1600.0,
                height: 800.0,
            },
        ]
    }

    fn snapshot(scroll_y: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y,
            scroll_height: 2400.0,
            client_height: 800.0,
            spans: page_spans(),
        }
    }

    #[test]
    fn test_progress_stays_in_range() {
        let mut scroll_y = 0.0;
        while scroll_y <= 1600.0 {
            let state = compute_scroll_state(&snapshot(scroll_y), ScrollState::default());
            assert!(
                (0.0..=100.0).contains(&state.progress),
                "progress {} out of range at scroll_y {}",
                state.progress,
                scroll_y
            );
            scroll_y += 50.0;
        }
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut last = -1.0;
        let mut scroll_y = 0.0;
        while scroll_y <= 1600.0 {
            let state = compute_scroll_state(&snapshot(scroll_y), ScrollState::default());
            assert!(state.progress >= last);
            last = state.progress;
            scroll_y += 50.0;
        }
    }

    #[test]
    fn test_progress_clamps_past_end() {
        // Overscroll (rubber-banding) must not push progress past 100.
        let state = compute_scroll_state(&snapshot(1800.0), ScrollState::default());
        assert_eq!(state.progress, 100.0);
    }

    #[test]
    fn test_zero_scroll_range_yields_zero_progress() {
        let short_page = ScrollSnapshot {
            scroll_y: 0.0,
            scroll_height: 600.0,
            client_height: 800.0,
            spans: Vec::new(),
        };
        let state = compute_scroll_state(&short_page, ScrollState::default());
        assert_eq!(state.progress, 0.0);
        assert!(state.progress.is_finite());
    }

    #[test]
    fn test_floating_nav_threshold_boundary() {
        let at = compute_scroll_state(&snapshot(300.0), ScrollState::default());
        assert!(!at.floating_nav, "exactly 300 keeps the nav hidden");

        let past = compute_scroll_state(&snapshot(301.0), ScrollState::default());
        assert!(past.floating_nav);
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let state = compute_scroll_state(&snapshot(1000.0), ScrollState::default());
        assert_eq!(state.active, Section::Features);

        let state = compute_scroll_state(&snapshot(1600.0), state);
        assert_eq!(state.active, Section::Tech);
    }

    #[test]
    fn test_lookahead_activates_section_early() {
        // 701 + 100 lands inside Features even though its top is still 99px away.
        let state = compute_scroll_state(&snapshot(701.0), ScrollState::default());
        assert_eq!(state.active, Section::Features);

        // 699 + 100 is still inside Overview's [0, 800) span.
        let state = compute_scroll_state(&snapshot(699.0), ScrollState::default());
        assert_eq!(state.active, Section::Overview);
    }

    #[test]
    fn test_no_matching_span_keeps_previous_selection() {
        // All sections start below the probe position.
        let below_fold = ScrollSnapshot {
            scroll_y: 0.0,
            scroll_height: 2400.0,
            client_height: 800.0,
            spans: vec![SectionSpan {
                section: Section::Features,
                top: 400.0,
                height: 800.0,
            }],
        };
        let prev = ScrollState {
            active: Section::Tech,
            ..ScrollState::default()
        };
        let state = compute_scroll_state(&below_fold, prev);
        assert_eq!(state.active, Section::Tech);
    }

    #[test]
    fn test_unmounted_sections_are_skipped() {
        let nothing_mounted = ScrollSnapshot {
            scroll_y: 500.0,
            scroll_height: 2400.0,
            client_height: 800.0,
            spans: Vec::new(),
        };
        let state = compute_scroll_state(&nothing_mounted, ScrollState::default());
        assert_eq!(state.active, Section::Overview);
    }

    #[test]
    fn test_initial_and_final_positions() {
        let top = compute_scroll_state(&snapshot(0.0), ScrollState::default());
        assert_eq!(
            top,
            ScrollState {
                progress: 0.0,
                active: Section::Overview,
                floating_nav: false,
            }
        );

        let bottom = compute_scroll_state(&snapshot(1600.0), top);
        assert_eq!(bottom.progress, 100.0);
        assert!(bottom.floating_nav);
    }

    #[test]
    fn test_anchors_are_unique() {
        let mut anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
    }
}
