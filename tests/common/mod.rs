//! Shared fake browser host for integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use tokio::task::LocalSet;

use fragment_router::host::{
    BrowserHistory, ClickDisposition, ClickEvent, DocumentChrome, EventSurface, FragmentHost,
    ListenerId, Platform, Spawner,
};
use fragment_router::{LoadError, Router};

/// In-memory stand-in for the browser: records history pushes, title
/// changes, and listener registrations, and spawns engine tasks onto the
/// ambient tokio `LocalSet`.
#[derive(Default)]
pub struct FakePlatform {
    pushed: RefCell<Vec<String>>,
    pathname: RefCell<String>,
    title: RefCell<String>,
    next_listener: Cell<ListenerId>,
    popstate: RefCell<HashMap<ListenerId, Box<dyn Fn()>>>,
    clicks: RefCell<HashMap<ListenerId, Box<dyn Fn(&ClickEvent) -> ClickDisposition>>>,
}

impl FakePlatform {
    pub fn new() -> Rc<Self> {
        let platform = Self::default();
        *platform.pathname.borrow_mut() = "/".to_string();
        Rc::new(platform)
    }

    /// Point the fake address bar at `pathname`, as the browser does on
    /// back/forward before firing popstate.
    pub fn set_pathname(&self, pathname: &str) {
        *self.pathname.borrow_mut() = pathname.to_string();
    }

    /// Fire a popstate at every registered listener.
    pub fn emit_popstate(&self) {
        for handler in self.popstate.borrow().values() {
            handler();
        }
    }

    /// Deliver a document-level click; reports whether any listener
    /// suppressed the default action.
    pub fn emit_click(&self, event: &ClickEvent) -> ClickDisposition {
        for handler in self.clicks.borrow().values() {
            if handler(event) == ClickDisposition::Intercepted {
                return ClickDisposition::Intercepted;
            }
        }
        ClickDisposition::PassThrough
    }

    pub fn pushed_urls(&self) -> Vec<String> {
        self.pushed.borrow().clone()
    }

    pub fn last_pushed(&self) -> Option<String> {
        self.pushed.borrow().last().cloned()
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn popstate_listener_count(&self) -> usize {
        self.popstate.borrow().len()
    }

    pub fn click_listener_count(&self) -> usize {
        self.clicks.borrow().len()
    }
}

impl BrowserHistory for FakePlatform {
    fn push_url(&self, url: &str) {
        self.pushed.borrow_mut().push(url.to_string());
    }

    fn current_pathname(&self) -> String {
        self.pathname.borrow().clone()
    }

    fn origin(&self) -> String {
        "http://spa.test".to_string()
    }
}

impl DocumentChrome for FakePlatform {
    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }
}

impl EventSurface for FakePlatform {
    fn add_popstate_listener(&self, handler: Box<dyn Fn()>) -> ListenerId {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.popstate.borrow_mut().insert(id, handler);
        id
    }

    fn add_click_listener(
        &self,
        handler: Box<dyn Fn(&ClickEvent) -> ClickDisposition>,
    ) -> ListenerId {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.clicks.borrow_mut().insert(id, handler);
        id
    }

    fn remove_popstate_listener(&self, id: ListenerId) {
        self.popstate.borrow_mut().remove(&id);
    }

    fn remove_click_listener(&self, id: ListenerId) {
        self.clicks.borrow_mut().remove(&id);
    }
}

impl Spawner for FakePlatform {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }
}

/// Container double recording mounted fragment tags.
#[derive(Default)]
pub struct FakeContainer {
    children: RefCell<Vec<String>>,
}

impl FakeContainer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Tag of the sole mounted fragment, if any.
    pub fn mounted(&self) -> Option<String> {
        self.children.borrow().last().cloned()
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }
}

impl FragmentHost for FakeContainer {
    fn clear_content(&self) {
        self.children.borrow_mut().clear();
    }

    fn append_fragment(&self, tag: &str) {
        self.children.borrow_mut().push(tag.to_string());
    }
}

pub fn new_router(platform: &Rc<FakePlatform>, container: &Rc<FakeContainer>) -> Router {
    Router::new(
        Rc::clone(platform) as Rc<dyn Platform>,
        Rc::clone(container) as Rc<dyn FragmentHost>,
    )
}

/// Run a test body on a `LocalSet` so the engine's spawned mount tasks
/// have somewhere to execute.
pub async fn run_local<F: Future>(body: F) -> F::Output {
    LocalSet::new().run_until(body).await
}

/// Let spawned mount tasks run to completion on the current `LocalSet`.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Loader that resolves immediately and counts its invocations.
pub fn counting_loader(
    calls: &Rc<Cell<u32>>,
) -> impl Fn() -> std::future::Ready<Result<(), LoadError>> + 'static {
    let calls = Rc::clone(calls);
    move || {
        calls.set(calls.get() + 1);
        std::future::ready(Ok(()))
    }
}

/// Loader that resolves immediately.
pub fn instant_loader() -> impl Fn() -> std::future::Ready<Result<(), LoadError>> + 'static {
    || std::future::ready(Ok(()))
}

/// Loader that always fails with `message`.
pub fn failing_loader(
    message: &str,
) -> impl Fn() -> std::future::Ready<Result<(), LoadError>> + 'static {
    let message = message.to_string();
    move || std::future::ready(Err(LoadError(message.clone())))
}

/// Loader that stays pending until the paired oneshot sender fires.
pub fn gated_loader(
    gate: tokio::sync::oneshot::Receiver<()>,
) -> impl Fn() -> LocalBoxFuture<'static, Result<(), LoadError>> + 'static {
    let gate = RefCell::new(Some(gate));
    move || {
        let gate = gate.borrow_mut().take();
        Box::pin(async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(())
        })
    }
}
