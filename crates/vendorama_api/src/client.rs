use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_warn;

use crate::fetch::{ApiSettings, ReqwestSearchApi, SearchApi};
use crate::types::{FetchError, FetchTag, ParamPair, SearchPage};

enum ApiCommand {
    FetchPage {
        tag: FetchTag,
        params: Vec<ParamPair>,
        bypass_cache: bool,
    },
}

/// Results coming back from the background runtime, drained by polling.
#[derive(Debug)]
pub enum ApiEvent {
    PageFetched {
        tag: FetchTag,
        result: Result<SearchPage, FetchError>,
    },
}

/// Handle to the background fetch runtime.
///
/// One dedicated thread owns a tokio runtime; commands go in over a std mpsc
/// channel and events come back the same way, so the single-threaded session
/// context never blocks and never shares state with the runtime.
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
    event_rx: mpsc::Receiver<ApiEvent>,
}

impl ApiHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, FetchError> {
        let api = ReqwestSearchApi::new(settings)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    /// Runs against any [`SearchApi`]; tests inject scripted fakes here.
    pub fn with_api(api: Arc<dyn SearchApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ApiCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_warn!("api runtime failed to start: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_page(&self, tag: FetchTag, params: Vec<ParamPair>, bypass_cache: bool) {
        let _ = self.cmd_tx.send(ApiCommand::FetchPage {
            tag,
            params,
            bypass_cache,
        });
    }

    /// Non-blocking drain; the binding layer polls this from its own context.
    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn SearchApi,
    command: ApiCommand,
    event_tx: mpsc::Sender<ApiEvent>,
) {
    match command {
        ApiCommand::FetchPage {
            tag,
            params,
            bypass_cache,
        } => {
            let result = api.fetch_page(&params, bypass_cache).await;
            let _ = event_tx.send(ApiEvent::PageFetched { tag, result });
        }
    }
}
