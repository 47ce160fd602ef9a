//! Generic runtime orchestrating the sync engine and its collaborators.
//!
//! The runtime owns the [`SyncEngine`] on a single task; every store
//! mutation happens inside that task, so the engine's single-writer model
//! holds even on a multi-threaded host. Reconciling fetches are awaited
//! inline and their completions re-enter the engine with the selection
//! epoch captured at issue time.

use natter_client::{SyncAction, SyncEngine};
use natter_proto::UserProfile;
use tokio::sync::mpsc;

use crate::{EventBus, RemoteChannel, RuntimeError, UserIntent, View};

/// What woke the event loop.
enum Turn {
    Broadcast(Option<natter_proto::InboundEvent>),
    Intent(Option<UserIntent>),
}

/// Event loop binding a [`SyncEngine`] to an [`EventBus`], a
/// [`RemoteChannel`], and a [`View`].
///
/// # Type Parameters
///
/// - `B`: push-side bus transport
/// - `R`: request/response transport
/// - `V`: render target
pub struct Runtime<B, R, V>
where
    B: EventBus,
    R: RemoteChannel,
    V: View,
{
    bus: B,
    remote: R,
    view: V,
    engine: SyncEngine,
    intents: mpsc::Receiver<UserIntent>,
}

impl<B, R, V> Runtime<B, R, V>
where
    B: EventBus,
    R: RemoteChannel,
    V: View,
{
    /// Create a runtime for the given viewer identity.
    ///
    /// All collaborators are injected here; nothing is resolved globally.
    pub fn new(
        bus: B,
        remote: R,
        view: V,
        viewer: UserProfile,
        intents: mpsc::Receiver<UserIntent>,
    ) -> Self {
        Self { bus, remote, view, engine: SyncEngine::new(viewer), intents }
    }

    /// The engine's current state.
    pub fn engine(&self) -> &SyncEngine {
        &self.engine
    }

    /// Run the event loop until the bus stream ends or a quit intent
    /// arrives.
    ///
    /// Connects the bus, performs the initial bulk channel load, then
    /// alternates between user intents and server broadcasts. Intents drain
    /// first so a quit is honored promptly.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator failure; no retry is attempted.
    pub async fn run(&mut self) -> Result<(), RuntimeError<B::Error, R::Error, V::Error>> {
        self.bus.connect().await.map_err(|e| {
            tracing::error!(error = %e, "bus connect failed");
            RuntimeError::Bus(e)
        })?;

        let startup = self.engine.start();
        self.dispatch(startup).await?;

        let mut intents_open = true;
        loop {
            let Self { bus, intents, .. } = self;
            let turn = tokio::select! {
                biased;
                intent = intents.recv(), if intents_open => Turn::Intent(intent),
                event = bus.next_event() => Turn::Broadcast(event),
            };

            match turn {
                Turn::Intent(Some(UserIntent::Quit)) => break,
                Turn::Intent(Some(intent)) => {
                    let actions = self.apply_intent(intent);
                    self.dispatch(actions).await?;
                },
                // Frontend hung up; keep following broadcasts.
                Turn::Intent(None) => intents_open = false,
                Turn::Broadcast(Some(event)) => {
                    let actions = self.engine.handle(event);
                    self.dispatch(actions).await?;
                },
                Turn::Broadcast(None) => {
                    tracing::debug!("bus stream ended");
                    break;
                },
            }
        }

        self.bus.disconnect().await;
        Ok(())
    }

    fn apply_intent(&mut self, intent: UserIntent) -> Vec<SyncAction> {
        match intent {
            UserIntent::CreateChannel { name, description } => {
                self.engine.create_channel(&name, &description)
            },
            UserIntent::EditChannel { channel_id, name, description } => {
                self.engine.edit_channel(channel_id, &name, &description)
            },
            UserIntent::DeleteChannel { channel_id } => self.engine.delete_channel(channel_id),
            UserIntent::SendMessage { body } => self.engine.send_message(&body),
            UserIntent::EditMessage { message, body } => self.engine.edit_message(&message, &body),
            UserIntent::DeleteMessage { message_id } => self.engine.delete_message(message_id),
            UserIntent::StartTyping => self.engine.start_typing(),
            UserIntent::StopTyping => self.engine.stop_typing(),
            UserIntent::SelectChannel { channel_id } => self.engine.select_channel(&channel_id),
            UserIntent::UpdateProfile { profile } => self.engine.update_profile(profile),
            // Handled in the loop before actions are produced.
            UserIntent::Quit => vec![],
        }
    }

    /// Execute actions, feeding fetch completions back into the engine
    /// until it settles.
    async fn dispatch(
        &mut self,
        initial: Vec<SyncAction>,
    ) -> Result<(), RuntimeError<B::Error, R::Error, V::Error>> {
        let mut pending = initial;

        while !pending.is_empty() {
            let actions = std::mem::take(&mut pending);

            for action in actions {
                match action {
                    SyncAction::Emit(event) => {
                        self.bus.emit(event).await.map_err(|e| {
                            tracing::error!(error = %e, "bus emit failed");
                            RuntimeError::Bus(e)
                        })?;
                    },
                    SyncAction::FetchChannels { epoch } => {
                        let channels =
                            self.remote.fetch_channels().await.map_err(Self::remote_error)?;
                        pending.extend(self.engine.channels_fetched(epoch, channels));
                    },
                    SyncAction::FetchMessages { channel_id, epoch } => {
                        let messages = self
                            .remote
                            .fetch_messages(&channel_id)
                            .await
                            .map_err(Self::remote_error)?;
                        pending.extend(self.engine.messages_fetched(epoch, &channel_id, messages));
                    },
                    SyncAction::FetchUserMessages { user_id } => {
                        let messages = self
                            .remote
                            .fetch_user_messages(&user_id)
                            .await
                            .map_err(Self::remote_error)?;
                        pending.extend(self.engine.user_messages_fetched(messages));
                    },
                    SyncAction::UpdateChannel { channel_id, name, description } => {
                        self.remote
                            .update_channel(&channel_id, &name, &description)
                            .await
                            .map_err(Self::remote_error)?;
                    },
                    SyncAction::DeleteChannel { channel_id } => {
                        self.remote
                            .delete_channel(&channel_id)
                            .await
                            .map_err(Self::remote_error)?;
                    },
                    SyncAction::UpdateMessage { message_id, update } => {
                        self.remote
                            .update_message(&message_id, &update)
                            .await
                            .map_err(Self::remote_error)?;
                    },
                    SyncAction::DeleteMessage { message_id } => {
                        self.remote
                            .delete_message(&message_id)
                            .await
                            .map_err(Self::remote_error)?;
                    },
                    SyncAction::Render => {
                        self.view.render(&self.engine).map_err(|e| {
                            tracing::error!(error = %e, "render failed");
                            RuntimeError::View(e)
                        })?;
                    },
                }
            }
        }
        Ok(())
    }

    fn remote_error(e: R::Error) -> RuntimeError<B::Error, R::Error, V::Error> {
        tracing::error!(error = %e, "request channel call failed");
        RuntimeError::Remote(e)
    }
}
