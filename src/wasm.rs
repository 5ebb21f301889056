// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings: the search box on the page.
//!
//! This is the browser-facing API. Construct a `PodsiftWidget` once the DOM is
//! ready and it takes over from there: it fetches the index in the background,
//! listens for input on the search box, renders matches into the results
//! container, and hides the container when the user clicks elsewhere.
//!
//! ```js
//! import init, { PodsiftWidget } from "./pkg/podsift.js";
//!
//! await init();
//! const widget = new PodsiftWidget({
//!     indexUrl: "search_index.json",
//!     inputId: "search-input",
//!     resultsId: "search-results",
//! });
//! ```
//!
//! Typing before the fetch finishes is fine: the widget searches an empty
//! index and shows "No results found" until the real one arrives. A failed
//! fetch is reported on the devtools console and search stays empty.

use crate::loader::{parse_index, LoadError, LoadStatus};
use crate::region::ResultRegion;
use crate::search::search;
use crate::types::{SearchDocument, SearchIndex};
use crate::widget::{InteractionTarget, SearchWidget, WidgetConfig};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, Node, Response, Window,
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second module instance on the same page already installed a logger.
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::debug!("Initialized podsift logger");
    }
}

/// Search result for JavaScript consumption. The body text stays on the Rust side.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSearchResult {
    title: String,
    url: String,
    feed: String,
}

impl From<&SearchDocument> for JsSearchResult {
    fn from(doc: &SearchDocument) -> Self {
        Self {
            title: doc.title.clone(),
            url: doc.url.clone(),
            feed: doc.feed.clone(),
        }
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// =============================================================================
// INDEX FETCH
// =============================================================================

/// Fetch and parse the index artifact. No retry, no timeout.
pub async fn fetch_index(window: &Window, url: &str) -> Result<SearchIndex, LoadError> {
    let fetch_err = |err: JsValue| LoadError::Fetch {
        url: url.to_string(),
        message: describe(&err),
    };

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?;
    let response: Response = response.dyn_into().map_err(fetch_err)?;
    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    let raw = body.as_string().ok_or_else(|| LoadError::Parse {
        message: "response body is not text".to_string(),
    })?;
    parse_index(&raw)
}

type SharedWidget = Rc<RefCell<SearchWidget<DomRegion>>>;

async fn load_into(widget: Weak<RefCell<SearchWidget<DomRegion>>>, window: Window, url: String) {
    let outcome = fetch_index(&window, &url).await;
    match widget.upgrade() {
        Some(widget) => {
            widget.borrow_mut().install_index(outcome);
        }
        None => log::debug!("search widget unmounted before {} loaded", url),
    }
}

// =============================================================================
// DOM REGION
// =============================================================================

/// [`ResultRegion`] over a container element.
///
/// Renders the placeholder as `<div class="no-results">` and each result as
/// `<div class="search-result"><a href="…">title</a><span class="feed">feed</span></div>`.
pub struct DomRegion {
    document: Document,
    container: HtmlElement,
}

impl DomRegion {
    pub fn new(document: Document, container: HtmlElement) -> Self {
        Self {
            document,
            container,
        }
    }

    fn element(&self, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        element.set_text_content(Some(text));
        Ok(element)
    }

    fn append_entry(&self, doc: &SearchDocument) -> Result<(), JsValue> {
        let entry = self.document.create_element("div")?;
        entry.set_class_name("search-result");

        let link = self.document.create_element("a")?;
        link.set_attribute("href", &doc.url)?;
        link.set_text_content(Some(&doc.title));
        entry.append_child(&link)?;

        let feed = self.element("span", "feed", &doc.feed)?;
        entry.append_child(&feed)?;

        self.container.append_child(&entry)?;
        Ok(())
    }
}

impl ResultRegion for DomRegion {
    fn clear(&mut self) {
        self.container.set_inner_html("");
    }

    fn render_placeholder(&mut self, message: &str) {
        let appended = self
            .element("div", "no-results", message)
            .and_then(|node| self.container.append_child(&node));
        if let Err(err) = appended {
            log::warn!("failed to render placeholder: {}", describe(&err));
        }
    }

    fn render_entry(&mut self, doc: &SearchDocument) {
        if let Err(err) = self.append_entry(doc) {
            log::warn!("failed to render result {}: {}", doc.url, describe(&err));
        }
    }

    fn set_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(err) = self.container.style().set_property("display", display) {
            log::warn!("failed to set result visibility: {}", describe(&err));
        }
    }
}

/// Work out what a click landed on.
fn classify(target: Option<EventTarget>, input: &Node, results: &Node) -> InteractionTarget {
    let Some(node) = target.and_then(|t| t.dyn_into::<Node>().ok()) else {
        return InteractionTarget::Elsewhere;
    };
    if input.contains(Some(&node)) {
        InteractionTarget::Input
    } else if results.contains(Some(&node)) {
        InteractionTarget::ResultRegion
    } else {
        InteractionTarget::Elsewhere
    }
}

fn element_by_id<T: JsCast>(document: &Document, id: &str, what: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from(format!("no element with id '{}'", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from(format!("#{} is not {}", id, what)))
}

// =============================================================================
// WIDGET
// =============================================================================

/// WASM-accessible search widget bound to one input and one results container.
///
/// Listeners are removed when the widget is freed (`widget.free()` from JS).
#[wasm_bindgen]
pub struct PodsiftWidget {
    widget: SharedWidget,
    document: Document,
    input: HtmlInputElement,
    on_input: Closure<dyn FnMut(Event)>,
    on_click: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
impl PodsiftWidget {
    /// Mount the widget and start loading the index.
    ///
    /// Options (all optional):
    /// - `indexUrl`: index artifact location (default: "search_index.json")
    /// - `inputId`: id of the query input (default: "search-input")
    /// - `resultsId`: id of the results container (default: "search-results")
    /// - `placeholder`: empty-result text (default: "No results found")
    /// - `minQueryLen`: shortest query that runs (default: 2)
    /// - `maxResults`: result cap (default: 10)
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<PodsiftWidget, JsValue> {
        let config: WidgetConfig = match options {
            Some(opts) => from_value(opts).unwrap_or_else(|err| {
                log::warn!("invalid search widget options, using defaults: {}", err);
                WidgetConfig::default()
            }),
            None => WidgetConfig::default(),
        };

        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("window has no document")?;
        let input: HtmlInputElement = element_by_id(&document, &config.input_id, "an <input>")?;
        let container: HtmlElement =
            element_by_id(&document, &config.results_id, "an HTML element")?;

        let index_url = config.index_url.clone();
        let region = DomRegion::new(document.clone(), container.clone());
        let widget = Rc::new(RefCell::new(SearchWidget::new(region, config)));

        let on_input = {
            let widget = Rc::clone(&widget);
            let input = input.clone();
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                widget.borrow_mut().on_query_changed(&input.value());
            })
        };
        input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;

        let on_click = {
            let widget = Rc::clone(&widget);
            let input_node: Node = input.clone().into();
            let results_node: Node = container.into();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let target = classify(event.target(), &input_node, &results_node);
                widget.borrow_mut().on_outside_interaction(target);
            })
        };
        document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        spawn_local(load_into(Rc::downgrade(&widget), window, index_url));

        Ok(PodsiftWidget {
            widget,
            document,
            input,
            on_input,
            on_click,
        })
    }

    /// Run a query as if it had been typed. Returns the number of rendered results.
    #[wasm_bindgen]
    pub fn query(&self, raw: &str) -> usize {
        self.widget.borrow_mut().on_query_changed(raw)
    }

    /// Search without touching the page.
    ///
    /// Returns `[{title, url, feed}]`; empty for queries below the threshold.
    #[wasm_bindgen]
    pub fn search(&self, raw: &str) -> Result<JsValue, JsValue> {
        let widget = self.widget.borrow();
        let outcome = search(widget.index(), raw, &widget.config().search);
        let results: Vec<JsSearchResult> = outcome
            .documents()
            .iter()
            .map(|doc| JsSearchResult::from(*doc))
            .collect();
        to_value(&results).map_err(|e| e.to_string().into())
    }

    /// Number of documents in the loaded index (0 until the load completes).
    #[wasm_bindgen]
    pub fn doc_count(&self) -> usize {
        self.widget.borrow().index().len()
    }

    /// "pending", "loaded" or "unavailable".
    #[wasm_bindgen]
    pub fn load_status(&self) -> String {
        match self.widget.borrow().load_status() {
            LoadStatus::Pending => "pending",
            LoadStatus::Loaded => "loaded",
            LoadStatus::Unavailable => "unavailable",
        }
        .to_string()
    }

    /// Whether the result container is currently shown.
    #[wasm_bindgen]
    pub fn is_visible(&self) -> bool {
        self.widget.borrow().state().is_visible()
    }
}

impl Drop for PodsiftWidget {
    fn drop(&mut self) {
        let removed_input = self
            .input
            .remove_event_listener_with_callback("input", self.on_input.as_ref().unchecked_ref());
        let removed_click = self
            .document
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        if let Err(err) = removed_input.and(removed_click) {
            log::warn!("failed to remove search listeners: {}", describe(&err));
        }
        self.widget.borrow_mut().teardown();
    }
}
