use std::rc::Rc;

use common::{report_outcome, Console, DataSet, FetchState, LoadError, FETCH_STARTED};
use futures::future::{self, FutureExt};

use crate::dom::{PageDocument, PageElement};
use crate::fetch::Fetcher;
use crate::ready::ReadySignal;

pub const CONTAINER_ID: &str = "plot1";
pub const PLACEHOLDER_HTML: &str = "<h1>JS is Working!</h1>";
pub const DATA_PATH: &str = "data_d3.csv";

/// Writes the placeholder heading into the plot container. Returns whether
/// the container existed; a missing container is not an error.
pub fn render_placeholder<D>(document: &D) -> bool
where
    D: PageDocument + ?Sized,
{
    match document.element_by_id(CONTAINER_ID) {
        Some(container) => {
            container.set_inner_html(PLACEHOLDER_HTML);
            true
        }
        None => false,
    }
}

pub async fn load_data_set<F>(fetcher: &F, path: &str) -> Result<DataSet, LoadError>
where
    F: Fetcher + ?Sized,
{
    let text = fetcher.fetch_text(path).await?;
    DataSet::parse_str(&text)
}

pub async fn fetch_and_report<F, C>(fetcher: &F, console: &C, path: &str) -> FetchState
where
    F: Fetcher + ?Sized,
    C: Console + ?Sized,
{
    console.info(FETCH_STARTED);
    let outcome = load_data_set(fetcher, path).await;
    report_outcome(console, &outcome)
}

/// Subscribes the page's two ready-time jobs: the placeholder render and the
/// data fetch. They share no state and may run in either order.
pub struct PageLoadHandler<D, F, C> {
    document: Rc<D>,
    fetcher: Rc<F>,
    console: Rc<C>,
}

impl<D, F, C> PageLoadHandler<D, F, C>
where
    D: PageDocument + 'static,
    F: Fetcher + 'static,
    C: Console + 'static,
{
    pub fn new(document: Rc<D>, fetcher: Rc<F>, console: Rc<C>) -> Self {
        PageLoadHandler {
            document,
            fetcher,
            console,
        }
    }

    pub fn register<S>(&self, signal: &S)
    where
        S: ReadySignal + ?Sized,
    {
        let document = Rc::clone(&self.document);
        signal.on_ready(Box::new(move || {
            render_placeholder(&*document);
            future::ready(()).boxed_local()
        }));

        let fetcher = Rc::clone(&self.fetcher);
        let console = Rc::clone(&self.console);
        signal.on_ready(Box::new(move || {
            async move {
                fetch_and_report(&*fetcher, &*console, DATA_PATH).await;
            }
            .boxed_local()
        }));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use common::testing::{LogEntry, RecordingConsole};
    use common::{DATA_EMPTY, LOAD_FAILED, LOAD_SUCCEEDED};
    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::ready::ReadyHandler;

    #[derive(Default)]
    struct FakeDocument {
        elements: HashMap<String, FakeElement>,
    }

    impl FakeDocument {
        fn with_container(content: &str) -> FakeDocument {
            let mut elements = HashMap::new();
            elements.insert(
                CONTAINER_ID.to_string(),
                FakeElement {
                    html: Rc::new(RefCell::new(content.to_string())),
                    writes: Rc::new(Cell::new(0)),
                },
            );
            FakeDocument { elements }
        }

        fn container(&self) -> Option<&FakeElement> {
            self.elements.get(CONTAINER_ID)
        }
    }

    impl PageDocument for FakeDocument {
        type Element = FakeElement;

        fn element_by_id(&self, id: &str) -> Option<FakeElement> {
            self.elements.get(id).cloned()
        }
    }

    #[derive(Clone)]
    struct FakeElement {
        html: Rc<RefCell<String>>,
        writes: Rc<Cell<usize>>,
    }

    impl PageElement for FakeElement {
        fn set_inner_html(&self, html: &str) {
            *self.html.borrow_mut() = html.to_string();
            self.writes.set(self.writes.get() + 1);
        }
    }

    /// Serves files from memory; anything else is a 404, or a network
    /// failure when `offline` is set.
    #[derive(Default)]
    struct FakeFetcher {
        files: HashMap<String, String>,
        offline: bool,
        requests: RefCell<Vec<String>>,
    }

    impl FakeFetcher {
        fn serving(path: &str, body: &str) -> FakeFetcher {
            let mut files = HashMap::new();
            files.insert(path.to_string(), body.to_string());
            FakeFetcher {
                files,
                ..Default::default()
            }
        }
    }

    impl Fetcher for FakeFetcher {
        fn fetch_text(&self, path: &str) -> LocalBoxFuture<'_, Result<String, LoadError>> {
            self.requests.borrow_mut().push(path.to_string());
            let result = if self.offline {
                Err(LoadError::Network("Failed to fetch".into()))
            } else {
                self.files
                    .get(path)
                    .cloned()
                    .ok_or_else(|| LoadError::Status {
                        status: 404,
                        status_text: "Not Found".into(),
                    })
            };
            future::ready(result).boxed_local()
        }
    }

    /// Ready signal fired by hand, in registration order or reversed.
    #[derive(Default)]
    struct ManualReady {
        handlers: RefCell<Vec<ReadyHandler>>,
    }

    impl ManualReady {
        fn fire(&self, reversed: bool) {
            let mut handlers: Vec<ReadyHandler> = self.handlers.borrow_mut().drain(..).collect();
            if reversed {
                handlers.reverse();
            }
            block_on(async {
                for handler in handlers {
                    handler().await;
                }
            });
        }

        fn fire_interleaved(&self) {
            let handlers: Vec<ReadyHandler> = self.handlers.borrow_mut().drain(..).collect();
            block_on(future::join_all(handlers.into_iter().map(|h| h())));
        }
    }

    impl ReadySignal for ManualReady {
        fn on_ready(&self, handler: ReadyHandler) {
            self.handlers.borrow_mut().push(handler);
        }
    }

    struct Page {
        document: Rc<FakeDocument>,
        fetcher: Rc<FakeFetcher>,
        console: Rc<RecordingConsole>,
        ready: ManualReady,
    }

    impl Page {
        fn new(document: FakeDocument, fetcher: FakeFetcher) -> Page {
            let page = Page {
                document: Rc::new(document),
                fetcher: Rc::new(fetcher),
                console: Rc::new(RecordingConsole::default()),
                ready: ManualReady::default(),
            };
            PageLoadHandler::new(
                Rc::clone(&page.document),
                Rc::clone(&page.fetcher),
                Rc::clone(&page.console),
            )
            .register(&page.ready);
            page
        }
    }

    #[test]
    fn registers_two_independent_subscribers() {
        let page = Page::new(FakeDocument::default(), FakeFetcher::default());
        assert_eq!(page.ready.handlers.borrow().len(), 2);
        assert!(page.console.entries().is_empty());
        assert!(page.fetcher.requests.borrow().is_empty());
    }

    #[test]
    fn placeholder_written_once_when_container_exists() {
        let page = Page::new(
            FakeDocument::with_container("loading"),
            FakeFetcher::serving(DATA_PATH, "a\n1\n"),
        );

        page.ready.fire(false);

        let container = page.document.container().unwrap();
        assert_eq!(*container.html.borrow(), PLACEHOLDER_HTML);
        assert_eq!(container.writes.get(), 1);
    }

    #[test]
    fn missing_container_is_silent() {
        let document = FakeDocument::default();
        assert!(!render_placeholder(&document));

        let page = Page::new(document, FakeFetcher::serving(DATA_PATH, "a\n1\n"));
        page.ready.fire(false);

        assert!(page.console.errors().is_empty());
        assert!(page.console.warnings().is_empty());
    }

    #[test]
    fn logs_rows_keyed_by_header() {
        let page = Page::new(
            FakeDocument::default(),
            FakeFetcher::serving(DATA_PATH, "date,close\n2024-01-02,10\n2024-01-03,11\n2024-01-04,12\n"),
        );

        page.ready.fire(false);

        assert_eq!(*page.fetcher.requests.borrow(), vec![DATA_PATH.to_string()]);
        let logged = page.console.logged_data();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].len(), 3);
        assert_eq!(logged[0].columns(), ["date", "close"]);
        for row in &logged[0] {
            assert_eq!(row.columns(), ["date", "close"]);
        }
        assert!(page.console.warnings().is_empty());
        assert_eq!(
            page.console.entries()[0],
            LogEntry::Info(FETCH_STARTED.to_string())
        );
    }

    #[test]
    fn header_only_file_warns() {
        let page = Page::new(
            FakeDocument::default(),
            FakeFetcher::serving(DATA_PATH, "date,close\n"),
        );

        page.ready.fire(false);

        let entries = page.console.entries();
        assert_eq!(entries.len(), 3);
        assert!(matches!(&entries[1], LogEntry::Data(msg, data) if msg == LOAD_SUCCEEDED && data.is_empty()));
        assert_eq!(entries[2], LogEntry::Warn(DATA_EMPTY.to_string()));
    }

    #[test]
    fn missing_file_logs_error_and_no_data() {
        let page = Page::new(FakeDocument::default(), FakeFetcher::default());

        page.ready.fire(false);

        assert!(page.console.logged_data().is_empty());
        assert_eq!(
            page.console.entries()[1],
            LogEntry::Error(LOAD_FAILED.to_string(), "404 Not Found".to_string())
        );
    }

    #[test]
    fn network_failure_is_reported() {
        let fetcher = FakeFetcher {
            offline: true,
            ..Default::default()
        };
        let console = RecordingConsole::default();

        let state = block_on(fetch_and_report(&fetcher, &console, DATA_PATH));

        assert_eq!(state, FetchState::Failed);
        assert_eq!(console.errors(), vec!["request failed: Failed to fetch".to_string()]);
        assert!(console.logged_data().is_empty());
    }

    #[test]
    fn load_is_testable_without_logging() {
        let fetcher = FakeFetcher::serving("other.csv", "x,y\n1\n");

        let data = block_on(load_data_set(&fetcher, "other.csv")).unwrap();
        assert_eq!(data.rows()[0].values(), ["1", ""]);

        let err = block_on(load_data_set(&fetcher, DATA_PATH)).unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
    }

    fn run_page(fire: impl Fn(&ManualReady)) -> (String, Vec<LogEntry>) {
        let page = Page::new(
            FakeDocument::with_container(""),
            FakeFetcher::serving(DATA_PATH, "k,v\na,1\nb,2\n"),
        );
        fire(&page.ready);
        let html = page.document.container().unwrap().html.borrow().clone();
        (html, page.console.entries())
    }

    #[test]
    fn handlers_do_not_interfere_in_any_order() {
        let forward = run_page(|r| r.fire(false));
        let reversed = run_page(|r| r.fire(true));
        let interleaved = run_page(|r| r.fire_interleaved());

        assert_eq!(forward, reversed);
        assert_eq!(forward, interleaved);
        assert_eq!(forward.0, PLACEHOLDER_HTML);
    }
}
