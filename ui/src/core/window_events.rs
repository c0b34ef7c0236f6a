//! Window-level events (scroll, resize, hash change) fanned out to mounted
//! components.
//!
//! The platform installs one event source per app with
//! [`use_window_event_source`]; components listen through
//! [`use_window_events`]. A listener lives exactly as long as its
//! [`Subscription`]: dropping the guard detaches it, so a component that is
//! torn down for any reason never receives another event.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::nav::Location;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WindowEvent {
    Scroll { offset: f64 },
    Resize { width: f64 },
    Hash { hash: String },
}

type Listener = Rc<dyn Fn(&WindowEvent)>;

#[derive(Default)]
struct Hub {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
    last_width: Option<f64>,
    last_hash: String,
    last_path: Option<String>,
}

thread_local! {
    static HUB: RefCell<Hub> = RefCell::new(Hub::default());
}

/// Keeps a listener registered; dropping it unregisters.
#[must_use = "dropping a Subscription immediately detaches its listener"]
pub struct Subscription {
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // The hub may already be gone during thread teardown.
        let _ = HUB.try_with(|hub| {
            hub.borrow_mut().listeners.remove(&self.id);
        });
        trace!(id = self.id, "window listener detached");
    }
}

pub fn subscribe(listener: impl Fn(&WindowEvent) + 'static) -> Subscription {
    HUB.with(|hub| {
        let mut hub = hub.borrow_mut();
        let id = hub.next_id;
        hub.next_id += 1;
        hub.listeners.insert(id, Rc::new(listener));
        trace!(id, "window listener attached");
        Subscription { id }
    })
}

/// Delivers `event` to every listener registered at the time of the call.
pub fn publish(event: WindowEvent) {
    let listeners: Vec<Listener> = HUB.with(|hub| {
        let mut hub = hub.borrow_mut();
        match &event {
            WindowEvent::Resize { width } => hub.last_width = Some(*width),
            WindowEvent::Hash { hash } => hub.last_hash = hash.clone(),
            WindowEvent::Scroll { .. } => {}
        }
        hub.listeners.values().cloned().collect()
    });

    for listener in listeners {
        listener(&event);
    }
}

pub fn listener_count() -> usize {
    HUB.with(|hub| hub.borrow().listeners.len())
}

/// Most recent window width, if a source has reported one.
pub fn last_width() -> Option<f64> {
    HUB.with(|hub| hub.borrow().last_width)
}

pub fn current_hash() -> String {
    HUB.with(|hub| hub.borrow().last_hash.clone())
}

/// Records a router path change and re-reads the fragment.
///
/// Router navigation goes through `pushState` (or in-memory history on
/// native), neither of which fires `hashchange`, so the fragment seen on the
/// previous page would otherwise stick.
pub fn observe_route(pathname: &str) {
    let moved = HUB.with(|hub| {
        let mut hub = hub.borrow_mut();
        if hub.last_path.as_deref() == Some(pathname) {
            return false;
        }
        hub.last_path = Some(pathname.to_string());
        true
    });
    if !moved {
        return;
    }

    let hash = window_hash();
    if hash != current_hash() {
        trace!(pathname, %hash, "fragment reset by navigation");
        publish(WindowEvent::Hash { hash });
    }
}

#[cfg(target_arch = "wasm32")]
fn window_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

/// Desktop routes live in memory history and never carry a fragment.
#[cfg(not(target_arch = "wasm32"))]
fn window_hash() -> String {
    String::new()
}

/// Registers `handler` for the lifetime of the calling component.
///
/// Only the handler passed on the first render is kept; capture signals
/// rather than plain values.
pub fn use_window_events(handler: impl Fn(&WindowEvent) + 'static) {
    use_hook(move || Rc::new(subscribe(handler)));
}

/// Location hash kept in sync with `hashchange`.
fn use_location_hash() -> Signal<String> {
    let hash = use_signal(current_hash);
    use_window_events(move |event| {
        if let WindowEvent::Hash { hash: next } = event {
            let mut hash = hash;
            if *hash.peek() != *next {
                hash.set(next.clone());
            }
        }
    });
    hash
}

/// Current location for `pathname`, the path the router reports.
///
/// The fragment follows `hashchange` and is re-read whenever the path
/// changes.
pub fn use_location(pathname: String) -> Location {
    let hash = use_location_hash();
    use_effect(use_reactive((&pathname,), |(pathname,)| {
        observe_route(&pathname);
        #[cfg(not(target_arch = "wasm32"))]
        bridge::drop_webview_fragment();
    }));
    Location::new(pathname, hash())
}

/// Starts forwarding browser window events into the hub. Call once, from the
/// root component.
#[cfg(target_arch = "wasm32")]
pub fn use_window_event_source() {
    use_hook(|| Rc::new(dom::DomSource::attach()));
}

/// Starts forwarding webview window events into the hub. Call once, from the
/// root component.
#[cfg(not(target_arch = "wasm32"))]
pub fn use_window_event_source() {
    use_hook(|| spawn(bridge::forward_events()));
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use tracing::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::Window;

    use super::{publish, WindowEvent};

    type Reader = fn(&Window) -> Option<WindowEvent>;

    const EVENTS: [(&str, Reader); 3] = [
        ("scroll", read_scroll),
        ("resize", read_resize),
        ("hashchange", read_hash),
    ];

    fn read_scroll(window: &Window) -> Option<WindowEvent> {
        window
            .scroll_y()
            .ok()
            .map(|offset| WindowEvent::Scroll { offset })
    }

    fn read_resize(window: &Window) -> Option<WindowEvent> {
        window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .map(|width| WindowEvent::Resize { width })
    }

    fn read_hash(window: &Window) -> Option<WindowEvent> {
        window
            .location()
            .hash()
            .ok()
            .map(|hash| WindowEvent::Hash { hash })
    }

    /// DOM listeners on `window`, removed again on drop.
    pub(super) struct DomSource {
        window: Window,
        handlers: Vec<(&'static str, Closure<dyn Fn()>)>,
    }

    impl DomSource {
        pub(super) fn attach() -> Option<Self> {
            let Some(window) = web_sys::window() else {
                warn!("no window available; navbar will not track scroll or resize");
                return None;
            };

            let mut handlers = Vec::with_capacity(EVENTS.len());
            for (name, read) in EVENTS {
                let target = window.clone();
                let closure = Closure::<dyn Fn()>::new(move || {
                    if let Some(event) = read(&target) {
                        publish(event);
                    }
                });
                if let Err(err) =
                    window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
                {
                    warn!(?err, event = name, "failed to attach window listener");
                    continue;
                }
                handlers.push((name, closure));
            }

            // Seed the hub so the first render sees real values.
            for (_, read) in EVENTS {
                if let Some(event) = read(&window) {
                    publish(event);
                }
            }

            Some(Self { window, handlers })
        }
    }

    impl Drop for DomSource {
        fn drop(&mut self) {
            for (name, closure) in &self.handlers {
                let _ = self
                    .window
                    .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod bridge {
    use dioxus::prelude::*;
    use tracing::{debug, warn};

    use super::{publish, WindowEvent};

    const WINDOW_BRIDGE_JS: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/js/window_bridge.js"
    ));

    /// The webview keeps its own fragment across memory-history navigation;
    /// clearing it lets the next click on the same anchor fire `hashchange`.
    pub(super) fn drop_webview_fragment() {
        let _ = document::eval(
            "if (location.hash) history.replaceState(null, '', location.pathname + location.search);",
        );
    }

    /// Runs until the webview stops answering.
    pub(super) async fn forward_events() {
        let mut bridge = document::eval(WINDOW_BRIDGE_JS);
        debug!("window event bridge started");
        loop {
            match bridge.recv::<WindowEvent>().await {
                Ok(event) => publish(event),
                Err(err) => {
                    warn!(?err, "window event bridge closed");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl Fn(&WindowEvent) + 'static) {
        let hits = Rc::new(Cell::new(0));
        let sink = hits.clone();
        (hits, move |_: &WindowEvent| sink.set(sink.get() + 1))
    }

    #[test]
    fn listener_receives_events_while_subscribed() {
        let (hits, listener) = counter();
        let _sub = subscribe(listener);

        publish(WindowEvent::Scroll { offset: 42.0 });
        publish(WindowEvent::Resize { width: 500.0 });
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn dropping_subscription_leaves_no_listener() {
        let (hits, listener) = counter();
        let before = listener_count();
        let sub = subscribe(listener);
        assert_eq!(listener_count(), before + 1);

        drop(sub);
        assert_eq!(listener_count(), before);

        publish(WindowEvent::Scroll { offset: 99.0 });
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn listeners_are_independent() {
        let (first_hits, first) = counter();
        let (second_hits, second) = counter();
        let first_sub = subscribe(first);
        let _second_sub = subscribe(second);

        drop(first_sub);
        publish(WindowEvent::Scroll { offset: 1.0 });
        assert_eq!(first_hits.get(), 0);
        assert_eq!(second_hits.get(), 1);
    }

    #[test]
    fn listener_may_unsubscribe_during_dispatch() {
        let before = listener_count();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let inner = slot.clone();
        let sub = subscribe(move |_| {
            inner.borrow_mut().take();
        });
        slot.borrow_mut().replace(sub);

        publish(WindowEvent::Scroll { offset: 30.0 });
        assert!(slot.borrow().is_none());
        assert_eq!(listener_count(), before);
    }

    #[test]
    fn hub_remembers_width_and_hash() {
        publish(WindowEvent::Resize { width: 640.0 });
        publish(WindowEvent::Hash {
            hash: "#about".into(),
        });
        assert_eq!(last_width(), Some(640.0));
        assert_eq!(current_hash(), "#about");
    }

    #[test]
    fn route_change_clears_stale_fragment() {
        observe_route("/");
        publish(WindowEvent::Hash {
            hash: "#features".into(),
        });

        let (hits, listener) = counter();
        let _sub = subscribe(listener);

        // Same path again: the fragment stays.
        observe_route("/");
        assert_eq!(current_hash(), "#features");
        assert_eq!(hits.get(), 0);

        observe_route("/login");
        assert_eq!(current_hash(), "");
        assert_eq!(hits.get(), 1);
        assert!(!Location::new("/login", current_hash()).is_active("#features"));
    }

    #[test]
    fn route_change_without_fragment_publishes_nothing() {
        observe_route("/about");
        let (hits, listener) = counter();
        let _sub = subscribe(listener);

        observe_route("/contact");
        assert_eq!(hits.get(), 0);
        assert!(Location::new("/contact", current_hash()).is_active("/contact"));
    }

    #[test]
    fn bridge_payloads_deserialize() {
        let scroll: WindowEvent = serde_json::from_str(r##"{"kind":"scroll","offset":21.5}"##).unwrap();
        assert_eq!(scroll, WindowEvent::Scroll { offset: 21.5 });

        let hash: WindowEvent = serde_json::from_str(r##"{"kind":"hash","hash":"#features"}"##).unwrap();
        assert_eq!(
            hash,
            WindowEvent::Hash {
                hash: "#features".into()
            }
        );
    }
}
