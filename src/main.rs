//! Tick List entry point
//!
//! Handles platform-specific initialization and wires the DOM to the store.
//! Every successful mutation is followed by an explicit persistence write
//! and a re-render; nothing writes to storage behind the store's back.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

    use tick_list::{storage, EditState, Priority, TodoItem, TodoList};

    /// Application state shared by all event handlers
    struct App {
        list: TodoList,
        edit: EditState,
    }

    impl App {
        fn new(list: TodoList) -> Self {
            Self {
                list,
                edit: EditState::default(),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tick List starting...");

        let document = document();

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let list = storage::load();
        let app = Rc::new(RefCell::new(App::new(list)));

        render(&app.borrow());

        setup_add(app.clone());
        setup_list_actions(app.clone());
        setup_reset(app);

        log::info!("Tick List running!");
    }

    fn document() -> Document {
        web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
    }

    fn text_input(document: &Document, id: &str) -> Option<HtmlInputElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn select_element(document: &Document, id: &str) -> Option<HtmlSelectElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    /// Read a priority selector, falling back to Low
    fn select_priority(document: &Document, id: &str) -> Priority {
        select_element(document, id)
            .and_then(|sel| Priority::from_str(&sel.value()))
            .unwrap_or_default()
    }

    /// Mirror the live edit field values into the draft
    ///
    /// Re-rendering rebuilds the edit row from the draft, so any mutation
    /// outside the edit row must pull the fields in first or in-progress
    /// typing is lost.
    fn sync_edit_draft(document: &Document, edit: &mut EditState) {
        if edit.target().is_none() {
            return;
        }
        let Some(input) = text_input(document, "edit-text") else {
            return;
        };
        let priority = select_element(document, "edit-priority")
            .and_then(|sel| Priority::from_str(&sel.value()))
            .unwrap_or(edit.priority);
        edit.update_draft(&input.value(), priority);
    }

    fn setup_add(app: Rc<RefCell<App>>) {
        let document = document();

        // Add button
        if let Some(btn) = document.get_element_by_id("add-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                submit_add(&app);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter in the text field
        if let Some(input) = document.get_element_by_id("todo-input") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.key() == "Enter" {
                    submit_add(&app);
                }
            });
            let _ =
                input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn submit_add(app: &Rc<RefCell<App>>) {
        let document = document();
        let Some(input) = text_input(&document, "todo-input") else {
            return;
        };
        let priority = select_priority(&document, "todo-priority");

        let mut app = app.borrow_mut();
        if app.list.add(&input.value(), priority).is_some() {
            // Clear the pending fields back to their defaults
            input.set_value("");
            if let Some(sel) = select_element(&document, "todo-priority") {
                sel.set_value(Priority::Low.as_str());
            }
            sync_edit_draft(&document, &mut app.edit);
            storage::save(&app.list);
            render(&app);
            log::info!("Added todo ({} total)", app.list.len());
        }
    }

    /// Per-item actions arrive via delegation: one listener on the list,
    /// buttons tagged with data-action/data-id. Handlers survive re-renders
    /// without re-wiring.
    fn setup_list_actions(app: Rc<RefCell<App>>) {
        let document = document();
        let Some(list_el) = document.get_element_by_id("todo-list") else {
            return;
        };

        // Clicks on the item buttons
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok())
                else {
                    return;
                };
                let Some(source) = target.closest("[data-action]").ok().flatten() else {
                    return;
                };
                let action = source.get_attribute("data-action").unwrap_or_default();
                let id = source
                    .get_attribute("data-id")
                    .and_then(|v| v.parse::<u32>().ok());
                handle_action(&app, &action, id);
            });
            let _ =
                list_el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter saves / Escape cancels while typing in the inline edit field
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok())
                else {
                    return;
                };
                if target.id() != "edit-text" {
                    return;
                }
                match event.key().as_str() {
                    "Enter" => save_edit(&app),
                    "Escape" => cancel_edit(&app),
                    _ => {}
                }
            });
            let _ = list_el
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn handle_action(app: &Rc<RefCell<App>>, action: &str, id: Option<u32>) {
        match (action, id) {
            ("edit", Some(id)) => start_edit(app, id),
            ("remove", Some(id)) => remove_todo(app, id),
            ("toggle", Some(id)) => toggle_todo(app, id),
            ("save", _) => save_edit(app),
            ("cancel", _) => cancel_edit(app),
            _ => {}
        }
    }

    fn start_edit(app: &Rc<RefCell<App>>, id: u32) {
        let mut app = app.borrow_mut();
        let item = app.list.get(id).cloned();
        if let Some(item) = item {
            app.edit.begin(&item);
            render(&app);
        }
    }

    fn save_edit(app: &Rc<RefCell<App>>) {
        let document = document();
        let mut app = app.borrow_mut();
        let Some(id) = app.edit.target() else {
            return;
        };
        let Some(input) = text_input(&document, "edit-text") else {
            return;
        };
        let priority = select_priority(&document, "edit-priority");

        if app.list.save_edit(id, &input.value(), priority) {
            app.edit.cancel();
            storage::save(&app.list);
            render(&app);
        }
        // Blank text is rejected silently and edit mode stays open
    }

    fn cancel_edit(app: &Rc<RefCell<App>>) {
        let mut app = app.borrow_mut();
        app.edit.cancel();
        render(&app);
    }

    fn toggle_todo(app: &Rc<RefCell<App>>, id: u32) {
        let document = document();
        let mut app = app.borrow_mut();
        if app.list.toggle_completed(id) {
            sync_edit_draft(&document, &mut app.edit);
            storage::save(&app.list);
            render(&app);
        }
    }

    fn remove_todo(app: &Rc<RefCell<App>>, id: u32) {
        let document = document();
        let mut app = app.borrow_mut();
        if app.edit.is_editing(id) {
            app.edit.cancel();
        } else {
            sync_edit_draft(&document, &mut app.edit);
        }
        if app.list.remove(id) {
            storage::save(&app.list);
            render(&app);
            log::info!("Removed todo ({} left)", app.list.len());
        }
    }

    fn setup_reset(app: Rc<RefCell<App>>) {
        let document = document();
        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut app = app.borrow_mut();
                app.list.reset();
                app.edit.cancel();
                storage::save(&app.list);
                render(&app);
                log::info!("List reset");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Rebuild the list DOM and the remaining counter from current state
    fn render(app: &App) {
        let document = document();
        let Some(list_el) = document.get_element_by_id("todo-list") else {
            return;
        };

        let mut html = String::new();
        for item in app.list.iter() {
            if app.edit.is_editing(item.id) {
                html.push_str(&edit_row(item, &app.edit));
            } else {
                html.push_str(&item_row(item));
            }
        }
        list_el.set_inner_html(&html);

        if let Some(el) = document.get_element_by_id("remaining-count") {
            el.set_text_content(Some(&app.list.remaining().to_string()));
        }

        // The inline edit field gets focus as soon as it appears
        if let Some(input) = text_input(&document, "edit-text") {
            let _ = input.focus();
        }
    }

    fn item_row(item: &TodoItem) -> String {
        let li_class = if item.completed { " class=\"completed\"" } else { "" };
        // The original widget hides Edit on completed items; the text itself
        // stays clickable either way
        let edit_btn = if item.completed {
            String::new()
        } else {
            format!(
                "<button class=\"edit\" data-action=\"edit\" data-id=\"{}\">Edit</button>",
                item.id
            )
        };
        let toggle_label = if item.completed { "Undo" } else { "Complete" };
        format!(
            "<li{li_class}>\
             <span class=\"todo-text\" data-action=\"edit\" data-id=\"{id}\">{text}</span>\
             {edit_btn}\
             <button class=\"remove\" data-action=\"remove\" data-id=\"{id}\">Remove</button>\
             <button class=\"toggle\" data-action=\"toggle\" data-id=\"{id}\">{toggle_label}</button>\
             </li>",
            id = item.id,
            text = escape_html(&item.text),
        )
    }

    fn edit_row(item: &TodoItem, edit: &EditState) -> String {
        let selected = |p: Priority| if edit.priority == p { " selected" } else { "" };
        format!(
            "<li class=\"editing\">\
             <input id=\"edit-text\" type=\"text\" value=\"{text}\">\
             <select id=\"edit-priority\">\
             <option value=\"Low\"{low}>Low</option>\
             <option value=\"Medium\"{medium}>Medium</option>\
             <option value=\"High\"{high}>High</option>\
             </select>\
             <button class=\"save\" data-action=\"save\" data-id=\"{id}\">\u{2713}</button>\
             <button class=\"cancel\" data-action=\"cancel\" data-id=\"{id}\">\u{2715}</button>\
             </li>",
            id = item.id,
            text = escape_html(&edit.text),
            low = selected(Priority::Low),
            medium = selected(Priority::Medium),
            high = selected(Priority::High),
        )
    }

    /// Item text is user input and lands in innerHTML, so escape it
    fn escape_html(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                _ => out.push(c),
            }
        }
        out
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tick List (native) starting...");
    log::info!("The widget is browser-only - run with `trunk serve` for the web version");

    // Run smoke check
    println!("\nRunning store smoke check...");
    smoke_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_check() {
    use tick_list::{Priority, TodoList};

    let mut list = TodoList::new();
    assert!(list.add("Buy milk", Priority::Low).is_some());
    assert!(list.add("Call bank", Priority::High).is_some());
    assert_eq!(
        list.iter().next().map(|item| item.text.as_str()),
        Some("Call bank")
    );
    assert!(list.add("   ", Priority::High).is_none());
    println!("✓ Store smoke check passed!");
}
