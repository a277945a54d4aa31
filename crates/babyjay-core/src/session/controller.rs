//! Session controller — startup and the per-event loop.
//!
//! Startup sequence:
//! 1. Check the database file exists (fatal otherwise) and open storage
//! 2. Connect the transport; it publishes into the event bus
//! 3. On `start`: resolve identity, greet, welcome on first run
//! 4. On `message`: classify → dispatch → send
//! 5. On `error`: log and carry on
//!
//! Events are handled one at a time, in the order the transport produced them.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Notify;
use tracing::{debug, error, info, warn};

use crate::bus::{EventBus, TransportEvent};
use crate::classifier::classify;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::identity::Identity;
use crate::storage::{Storage, StorageError};
use crate::transport::Transport;
use crate::types::{InboundEvent, OutboundResponse, Snapshot};
use crate::utils::truncate_string;

use super::state::SessionState;

/// Event bus capacity.
const EVENT_BUFFER: usize = 100;

/// Fatal session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Database path \"{}\" does not exist or is not readable", .0.display())]
    MissingDatabase(std::path::PathBuf),
    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for SessionError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::MissingDatabase(path) => SessionError::MissingDatabase(path),
            other => SessionError::Storage(other),
        }
    }
}

/// One bot session: a transport, a storage handle, and the dispatch core.
pub struct Session<S: Storage> {
    config: Arc<Config>,
    transport: Arc<dyn Transport>,
    dispatcher: Dispatcher,
    bus: Arc<EventBus>,
    shutdown: Arc<Notify>,
    state: SessionState,
    /// Written once, on the first `start` event.
    identity: Option<Identity>,
    snapshot: Snapshot,
    storage: Option<S>,
}

impl<S: Storage> Session<S> {
    /// Create a session with the dispatcher built from `config.bot`.
    pub fn new(config: Arc<Config>, transport: Arc<dyn Transport>) -> Self {
        let dispatcher = Dispatcher::from_config(&config.bot);
        Self::with_dispatcher(config, transport, dispatcher)
    }

    /// Create a session with a custom dispatcher.
    pub fn with_dispatcher(
        config: Arc<Config>,
        transport: Arc<dyn Transport>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            config,
            transport,
            dispatcher,
            bus: Arc::new(EventBus::new(EVENT_BUFFER)),
            shutdown: Arc::new(Notify::new()),
            state: SessionState::Disconnected,
            identity: None,
            snapshot: Snapshot::default(),
            storage: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Handle that ends [`Session::run`] when notified.
    pub fn shutdown_handle(&self) -> Arc<Notify> {
        self.shutdown.clone()
    }

    /// Ask a running session to stop.
    pub fn stop(&self) {
        // notify_one keeps a permit, so a stop issued before run() starts
        // waiting is not lost.
        self.shutdown.notify_one();
    }

    /// Open storage, connect, and process events until shutdown.
    ///
    /// The only error is a fatal startup failure, after which the session is
    /// `Terminated`. A transport that disconnects or fails leaves the session
    /// `Running` with no further events.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        self.open_storage().await?;

        self.state = SessionState::Connecting;
        info!(
            transport = %self.transport.name(),
            bot = %self.config.bot.name,
            "connecting"
        );

        let transport = self.transport.clone();
        let bus = self.bus.clone();
        let shutdown = self.shutdown.clone();

        // The connection future is dropped at the end of this block, before
        // stop() runs, so nothing it holds can block the shutdown.
        {
            let connection = transport.connect(bus.clone());
            tokio::pin!(connection);
            let mut connected = true;

            loop {
                tokio::select! {
                    result = &mut connection, if connected => {
                        connected = false;
                        match result {
                            Ok(()) => warn!("transport stream ended, no further events will arrive"),
                            Err(e) => error!(error = %e, "transport connection failed"),
                        }
                    }
                    event = bus.consume() => {
                        match event {
                            Some(event) => self.handle_event(event).await,
                            None => break,
                        }
                    }
                    _ = shutdown.notified() => {
                        info!("shutdown signal received");
                        break;
                    }
                }
            }
        }

        if let Err(e) = self.transport.stop().await {
            warn!(error = %e, "transport stop failed");
        }
        info!(state = %self.state, "session stopped");
        Ok(())
    }

    /// Database precondition + open. Any failure here is fatal.
    async fn open_storage(&mut self) -> Result<(), SessionError> {
        let db_path = self.config.db_path();
        if !db_path.exists() {
            self.state = SessionState::Terminated;
            error!(path = %db_path.display(), "database file missing");
            return Err(SessionError::MissingDatabase(db_path));
        }

        match S::open(&db_path).await {
            Ok(storage) => {
                debug!(path = %db_path.display(), "storage opened");
                self.storage = Some(storage);
                Ok(())
            }
            Err(e) => {
                self.state = SessionState::Terminated;
                error!(error = %e, "failed to open storage");
                Err(e.into())
            }
        }
    }

    /// Process one transport event to completion.
    pub async fn handle_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::Start(snapshot) => self.on_start(snapshot).await,
            TransportEvent::Message(message) => self.on_message(&message).await,
            TransportEvent::Error(e) => {
                error!(error = %e, state = %self.state, "transport error");
            }
        }
    }

    async fn on_start(&mut self, snapshot: Snapshot) {
        if !self.adopt_snapshot(snapshot) {
            return;
        }

        let greeting = self.dispatcher.startup_greeting();
        self.deliver(greeting).await;

        self.welcome_if_first_run().await;

        self.state = SessionState::Running;
    }

    /// Resolve identity and keep the snapshot; moves to `Connected`.
    ///
    /// Returns `false` (and changes nothing) if a snapshot was already taken.
    fn adopt_snapshot(&mut self, snapshot: Snapshot) -> bool {
        if self.identity.is_some() {
            warn!("duplicate start event ignored");
            return false;
        }

        let identity = Identity::resolve(self.dispatcher.name(), &snapshot.users);
        match identity.resolved_user_id.as_deref() {
            Some(id) => info!(user_id = %id, name = %identity.name, "resolved bot identity"),
            None => warn!(
                name = %identity.name,
                users = snapshot.users.len(),
                "bot name not found in roster, self-detection disabled"
            ),
        }
        self.identity = Some(identity);
        self.snapshot = snapshot;
        self.state = SessionState::Connected;

        info!(
            users = self.snapshot.users.len(),
            channels = self.snapshot.channels.len(),
            "starting bot"
        );
        true
    }

    async fn welcome_if_first_run(&self) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };

        match storage.is_first_run().await {
            Ok(true) => {
                let welcome = self.dispatcher.first_run_welcome();
                let target = welcome.target_channel.clone();
                self.deliver(welcome).await;
                info!(channel = %target, "posted welcome message");

                if let Err(e) = storage.record_run().await {
                    warn!(error = %e, "failed to record first run");
                }
            }
            Ok(false) => debug!("not the first run, skipping welcome"),
            Err(e) => warn!(error = %e, "first-run check failed, skipping welcome"),
        }
    }

    async fn on_message(&self, message: &InboundEvent) {
        let facets = classify(message, self.identity.as_ref(), self.dispatcher.name());

        let channel_id = message.channel.as_deref().unwrap_or("");
        debug!(
            event_type = %message.event_type,
            channel = %channel_id,
            channel_name = %self.snapshot.channel_name(channel_id).unwrap_or("?"),
            user = %message.user.as_deref().unwrap_or(""),
            text = %truncate_string(message.text.as_deref().unwrap_or(""), 80),
            chat = facets.is_chat_message,
            in_channel = facets.is_channel_conversation,
            from_self = facets.is_from_self,
            mentioned = facets.mentions_bot,
            "classified event"
        );

        if let Some(reply) = self.dispatcher.decide(message, &facets) {
            self.deliver(reply).await;
        }
    }

    /// Hand a response to the transport. Failures are logged, never retried.
    async fn deliver(&self, response: OutboundResponse) {
        let OutboundResponse {
            target_channel,
            text,
            options,
        } = response;

        match self
            .transport
            .post_message_to_channel(&target_channel, &text, &options)
            .await
        {
            Ok(()) => debug!(
                channel = %target_channel,
                channel_name = %self
                    .snapshot
                    .channel_name(&target_channel)
                    .unwrap_or(target_channel.as_str()),
                "message posted"
            ),
            Err(e) => error!(channel = %target_channel, error = %e, "failed to post message"),
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
