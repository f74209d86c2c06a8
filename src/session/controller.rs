use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, error};

use super::history::HistoryStore;
use super::visibility::WindowPhase;
use crate::config::ChatConfig;
use crate::constants::{CLIENT_FAILURE_REPLY, CLOSE_ANIMATION_MS};
use crate::model::{ChatClient, ChatMessage, ServiceStatus};
use crate::storage::KeyValueStore;
use crate::utils::{IdGenerator, UuidIds};
use crate::view::{input_placeholder, RenderState, StatusBanner};

/// State shared between the session handle and the deferred-close task
struct SessionInner {
    window: WindowPhase,
    thinking: bool,
    status: ServiceStatus,
    conversation: Vec<ChatMessage>,
    close_timer: Option<AbortHandle>,
    /// Bumped on every open and every scheduled close; a deferred close only
    /// acts while it still holds the epoch it was scheduled under
    close_epoch: u64,
}

impl SessionInner {
    /// Complete a deferred close, unless the window lifecycle has moved on
    /// since the timer was scheduled. `abort()` cannot stop a task that has
    /// already finished its sleep and is waiting on the lock, so the epoch
    /// check is what keeps such a straggler from closing a newer window.
    fn finish_deferred_close(&mut self, epoch: u64) {
        if self.close_epoch != epoch {
            return;
        }
        self.window.finish_close();
        self.close_timer = None;
    }
}

/// One chat widget's runtime: conversation, window lifecycle, and the send
/// pipeline, wired to the injected client, storage, and id ports.
///
/// Cloning yields another handle to the same session. All methods except
/// `send` are synchronous; `send` suspends only for the client call, so the
/// window stays interactive while a reply is in flight. `close` schedules its
/// deferred finish on the ambient Tokio runtime.
#[derive(Clone)]
pub struct ChatSession {
    inner: Arc<Mutex<SessionInner>>,
    history: HistoryStore,
    client: Arc<dyn ChatClient>,
    ids: Arc<dyn IdGenerator>,
    config: ChatConfig,
}

impl ChatSession {
    /// Create a session with the default id source (random UUIDs)
    pub fn new(
        config: ChatConfig,
        client: Arc<dyn ChatClient>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self::with_ids(config, client, store, Arc::new(UuidIds))
    }

    /// Create a session with an explicit id source
    pub fn with_ids(
        config: ChatConfig,
        client: Arc<dyn ChatClient>,
        store: Arc<dyn KeyValueStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let history = HistoryStore::new(store);
        // Restore a persisted conversation if the backend has one, otherwise
        // start from the host's seed. The window always starts closed.
        let conversation = history.load(&config.initial_messages);

        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                window: WindowPhase::default(),
                thinking: false,
                status: config.status,
                conversation,
                close_timer: None,
                close_epoch: 0,
            })),
            history,
            client,
            ids,
            config,
        }
    }

    /// Open the window. Idempotent; a pending deferred close is cancelled so
    /// reopening mid-animation cannot leave the window half closed.
    pub fn open(&self) {
        let mut inner = self.inner.lock();
        if let Some(timer) = inner.close_timer.take() {
            timer.abort();
        }
        inner.close_epoch += 1;
        inner.window.open();
    }

    /// Start closing the window: visibility drops immediately for the exit
    /// animation, and the actual unmount is deferred by the animation length.
    /// No-op while already closing or closed. Must be called within a Tokio
    /// runtime.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        if !inner.window.begin_close() {
            return;
        }

        inner.close_epoch += 1;
        let epoch = inner.close_epoch;
        let shared = Arc::clone(&self.inner);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(CLOSE_ANIMATION_MS)).await;
            shared.lock().finish_deferred_close(epoch);
        });
        inner.close_timer = Some(timer.abort_handle());
    }

    /// Close if open, open otherwise
    pub fn toggle(&self) {
        let open = self.inner.lock().window.is_open();
        if open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Accept the externally supplied service status for later interactions
    pub fn set_status(&self, status: ServiceStatus) {
        self.inner.lock().status = status;
    }

    /// Send a user message and reconcile the model's reply into the
    /// conversation.
    ///
    /// Silently ignored while a send is already in flight or the service is
    /// restricted. The user message is appended and persisted before the
    /// client call begins, so the model always observes its own user turn;
    /// on failure a canned apology is appended instead of the reply and the
    /// root error is logged. No error escapes.
    pub async fn send(&self, text: &str) {
        let trimmed = text.trim();
        // The input boundary keeps blank submissions out; guard regardless
        if trimmed.is_empty() {
            return;
        }

        let snapshot = {
            let mut inner = self.inner.lock();
            if inner.thinking {
                debug!("Ignoring send while a reply is pending");
                return;
            }
            if inner.status.is_restricted() {
                debug!("Ignoring send while service status is {:?}", inner.status);
                return;
            }

            let user = ChatMessage::user(self.ids.generate(), trimmed);
            inner.conversation.push(user);
            inner.thinking = true;
            inner.conversation.clone()
        };
        self.history.save(&snapshot);

        // Sole suspension point. The lock is not held here, so toggling and
        // closing stay responsive while the reply is in flight.
        let result = self.client.reply(&snapshot).await;

        let assistant = match result {
            Ok(reply) => ChatMessage::assistant(self.ids.generate(), reply),
            Err(e) => {
                error!("Chat client call failed: {e:#}");
                ChatMessage::assistant(self.ids.generate(), CLIENT_FAILURE_REPLY)
            }
        };

        // Reconcile onto the snapshot taken before the call, not a re-read
        let mut reconciled = snapshot;
        reconciled.push(assistant);
        {
            let mut inner = self.inner.lock();
            inner.conversation = reconciled.clone();
            inner.thinking = false;
        }
        self.history.save(&reconciled);
    }

    /// Whether the window is mounted
    pub fn is_open(&self) -> bool {
        self.inner.lock().window.is_open()
    }

    /// Whether the window is visible (false during the exit animation)
    pub fn is_visible(&self) -> bool {
        self.inner.lock().window.is_visible()
    }

    /// Whether a send is awaiting its reply
    pub fn is_thinking(&self) -> bool {
        self.inner.lock().thinking
    }

    /// Current ordered conversation
    pub fn conversation(&self) -> Vec<ChatMessage> {
        self.inner.lock().conversation.clone()
    }

    /// Everything the presentation layer needs for one render
    pub fn render_state(&self) -> RenderState {
        let inner = self.inner.lock();
        let restricted = inner.status.is_restricted();

        RenderState {
            title: self.config.title.clone(),
            theme: self.config.theme,
            position: self.config.position,
            status: inner.status,
            banner: StatusBanner::for_status(inner.status),
            messages: inner.conversation.clone(),
            is_open: inner.window.is_open(),
            is_visible: inner.window.is_visible(),
            is_closing: inner.window.is_closing(),
            is_thinking: inner.thinking,
            input_enabled: !restricted && !inner.thinking,
            input_placeholder: input_placeholder(restricted, inner.thinking),
        }
    }
}
