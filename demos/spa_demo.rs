//! End-to-end router walkthrough against a simulated browser.
//!
//! Run with `cargo run --example spa_demo`. Set `RUST_LOG=fragment_router=debug`
//! to watch the engine's dispatch decisions.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use tokio::task::LocalSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fragment_router::host::{
    BrowserHistory, ClickDisposition, ClickEvent, ClickNode, DocumentChrome, EventSurface,
    FragmentHost, ListenerId, Platform, Spawner,
};
use fragment_router::{LoadError, Route, Router};

/// In-memory browser stand-in: an address bar, a title bar, and the two
/// global event surfaces the router listens on.
#[derive(Default)]
struct SimulatedBrowser {
    pushed: RefCell<Vec<String>>,
    pathname: RefCell<String>,
    title: RefCell<String>,
    next_listener: Cell<ListenerId>,
    popstate: RefCell<HashMap<ListenerId, Box<dyn Fn()>>>,
    clicks: RefCell<HashMap<ListenerId, Box<dyn Fn(&ClickEvent) -> ClickDisposition>>>,
}

impl SimulatedBrowser {
    fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Simulate the user pressing the back button: the browser moves to
    /// `pathname` on its own and then fires popstate.
    fn go_back_to(&self, pathname: &str) {
        *self.pathname.borrow_mut() = pathname.to_string();
        for handler in self.popstate.borrow().values() {
            handler();
        }
    }

    /// Simulate a document-level click.
    fn click(&self, event: &ClickEvent) -> ClickDisposition {
        for handler in self.clicks.borrow().values() {
            if handler(event) == ClickDisposition::Intercepted {
                return ClickDisposition::Intercepted;
            }
        }
        ClickDisposition::PassThrough
    }

    fn title(&self) -> String {
        self.title.borrow().clone()
    }
}

impl BrowserHistory for SimulatedBrowser {
    fn push_url(&self, url: &str) {
        self.pushed.borrow_mut().push(url.to_string());
        // Keep the address bar in sync; a real browser does this for us.
        let end = url.find(['?', '#']).unwrap_or(url.len());
        *self.pathname.borrow_mut() = url[..end].to_string();
    }

    fn current_pathname(&self) -> String {
        self.pathname.borrow().clone()
    }

    fn origin(&self) -> String {
        "http://localhost:8000".to_string()
    }
}

impl DocumentChrome for SimulatedBrowser {
    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }
}

impl EventSurface for SimulatedBrowser {
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

impl Spawner for SimulatedBrowser {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }
}

/// Container that prints every mount instead of touching a DOM.
#[derive(Default)]
struct SimulatedContainer {
    children: RefCell<Vec<String>>,
}

impl FragmentHost for SimulatedContainer {
    fn clear_content(&self) {
        self.children.borrow_mut().clear();
    }

    fn append_fragment(&self, tag: &str) {
        println!("  [container] mounted <{tag}>");
        self.children.borrow_mut().push(tag.to_string());
    }
}

/// Let the spawned mount tasks run.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fragment_router=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let local = LocalSet::new();
    local
        .run_until(async {
            let browser = SimulatedBrowser::new();
            let container = Rc::new(SimulatedContainer::default());

            let router = Router::new(
                Rc::clone(&browser) as Rc<dyn Platform>,
                Rc::clone(&container) as Rc<dyn FragmentHost>,
            );

            // 1. Register routes. The base URL is prepended at
            //    registration time, so it comes first.
            router.set_base_url("/app");
            router.add_route(
                Route::fragment("/", "home-page", || async { Ok(()) }).with_title("Home"),
            );
            router.add_route(
                Route::fragment("/chat/:id", "chat-page", || async { Ok(()) })
                    .with_title("Chat"),
            );
            router.add_route(Route::redirect("/old-home", "/app/"));
            router.add_route(Route::fragment("/broken", "broken-page", || async {
                Err(LoadError("fragment bundle unreachable".into()))
            }));
            router.add_route(
                Route::fragment("*", "not-found-page", || async { Ok(()) })
                    .with_title("Not Found"),
            );

            // 2. Plain navigation.
            println!("Navigating to /app/ ...");
            router.navigate("/app/");
            settle().await;
            println!("  title: {:?}", browser.title());

            // 3. Parameter extraction.
            println!("Navigating to /app/chat/42 ...");
            router.navigate("/app/chat/42");
            settle().await;
            let active = router.active_route().expect("chat route should be active");
            println!("  active: {} (id = {:?})", active.path, active.param("id"));

            // 4. A redirect route re-enters navigation with its target.
            println!("Navigating to /app/old-home (redirects to /app/) ...");
            router.navigate("/app/old-home");
            settle().await;
            println!("  title: {:?}", browser.title());

            // 5. A failing loader leaves the previous view in place.
            println!("Navigating to /app/broken (loader fails) ...");
            router.navigate("/app/broken");
            settle().await;
            let active = router.active_route().expect("previous route stays active");
            println!("  still active: {}", active.path);

            // 6. Intercepted link click.
            println!("Clicking a link to /app/chat/7 ...");
            let link = ClickNode::element("A").with_attribute("href", "/app/chat/7");
            browser.click(&ClickEvent::new(link));
            settle().await;
            let active = router.active_route().expect("chat route should be active");
            println!("  active: {} (id = {:?})", active.path, active.param("id"));

            // 7. Browser back button.
            println!("Pressing back to /app/ ...");
            browser.go_back_to("/app/");
            settle().await;
            println!("  title: {:?}", browser.title());

            // 8. Anything else falls through to the catch-all.
            println!("Navigating to /app/no/such/page ...");
            router.navigate("/app/no/such/page");
            settle().await;
            println!("  title: {:?}", browser.title());

            router.destroy();
        })
        .await;
}
