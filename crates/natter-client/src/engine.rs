//! Event-sourced cache synchronizer.
//!
//! [`SyncEngine`] bridges push broadcasts and request/response completions
//! into [`ChatStateStore`] mutations and owns the causality policy: which
//! broadcasts mutate state directly, which trigger a reconciling fetch, and
//! which fetch completions are stale and must be discarded.
//!
//! This is a pure state machine in the same mold as the rest of the crate:
//! it consumes intents, [`InboundEvent`]s, and fetch completions, and
//! produces [`SyncAction`]s for the runtime to execute. No I/O dependencies,
//! fully testable without a network.
//!
//! # Mutation paths
//!
//! Creation intents (channels, messages) and typing signals are emitted over
//! the bus; the server assigns ids and timestamps and echoes a broadcast to
//! every client, the originator included. Edits and deletes go over the
//! request/response channel only; the server applies them and broadcasts,
//! and every client converges through the reconciling refetch.

use natter_proto::{
    Channel, ChannelId, InboundEvent, Message, MessageId, MessageUpdate, OutboundEvent, UserProfile,
};

use crate::{
    action::SyncAction,
    camel::to_camel_case,
    selection::{Epoch, SelectionController},
    store::ChatStateStore,
    typing::TypingRegistry,
};

/// Client-side synchronizer for chat state.
///
/// Single-writer: all mutation flows through `&mut self` methods, and the
/// runtime confines the engine to one task, so last-write-wins semantics
/// hold even on a multi-threaded host.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    store: ChatStateStore,
    selection: SelectionController,
    typing: TypingRegistry,
    viewer: UserProfile,
}

impl SyncEngine {
    /// Create an engine for the given viewer identity.
    pub fn new(viewer: UserProfile) -> Self {
        Self {
            store: ChatStateStore::new(),
            selection: SelectionController::new(),
            typing: TypingRegistry::new(),
            viewer,
        }
    }

    /// Kick off the initial bulk channel load.
    pub fn start(&self) -> Vec<SyncAction> {
        vec![SyncAction::FetchChannels { epoch: self.selection.epoch() }]
    }

    // ---- read accessors -------------------------------------------------

    /// Snapshot of the underlying store.
    pub fn store(&self) -> &ChatStateStore {
        &self.store
    }

    /// Channels in display order.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.store.channels()
    }

    /// Messages of the active channel in arrival order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.store.messages()
    }

    /// Currently selected channel, if any.
    pub fn selected_channel(&self) -> Option<&Channel> {
        self.selection.selected().and_then(|id| self.store.channel(id))
    }

    /// True while no channel is selected and message send is disabled.
    pub fn send_disabled(&self) -> bool {
        self.selection.selected().is_none()
    }

    /// The viewer identity flattened into outgoing messages.
    pub fn viewer(&self) -> &UserProfile {
        &self.viewer
    }

    /// Typing banner for the current viewer and selection.
    pub fn typing_banner(&self) -> String {
        self.typing.banner(&self.viewer.name, self.selection.selected())
    }

    // ---- user intents ---------------------------------------------------

    /// Emit a channel-creation intent.
    ///
    /// No local mutation happens here; the store changes when the server's
    /// `channelCreated` broadcast is echoed back.
    pub fn create_channel(&self, name: &str, description: &str) -> Vec<SyncAction> {
        vec![
            SyncAction::Emit(OutboundEvent::NewChannel {
                name: to_camel_case(name),
                description: description.to_owned(),
            }),
        ]
    }

    /// Apply a channel edit over the request/response channel.
    pub fn edit_channel(
        &self,
        channel_id: ChannelId,
        name: &str,
        description: &str,
    ) -> Vec<SyncAction> {
        vec![SyncAction::UpdateChannel {
            channel_id,
            name: to_camel_case(name),
            description: description.to_owned(),
        }]
    }

    /// Delete a channel over the request/response channel.
    ///
    /// Local state changes when the delete broadcast triggers the refetch;
    /// if the deleted channel was selected, selection falls back to the
    /// first remaining channel at that point.
    pub fn delete_channel(&self, channel_id: ChannelId) -> Vec<SyncAction> {
        vec![SyncAction::DeleteChannel { channel_id }]
    }

    /// Send a message to the selected channel.
    ///
    /// Requires a non-empty body, a selection, and a viewer with id and
    /// name; otherwise the send is silently skipped (disabled input, not an
    /// error). A stop-typing signal for the sender follows the message.
    pub fn send_message(&self, body: &str) -> Vec<SyncAction> {
        let Some(channel_id) = self.selection.selected() else {
            tracing::debug!("send skipped: no channel selected");
            return vec![];
        };
        if body.is_empty() || self.viewer.id.is_empty() || self.viewer.name.is_empty() {
            tracing::debug!(%channel_id, "send skipped: empty body or viewer");
            return vec![];
        }

        vec![
            SyncAction::Emit(OutboundEvent::NewMessage {
                body: body.to_owned(),
                channel_id: channel_id.clone(),
                user: self.viewer.clone(),
            }),
            SyncAction::Emit(OutboundEvent::StopType { user_name: self.viewer.name.clone() }),
        ]
    }

    /// Apply a message edit over the request/response channel.
    ///
    /// The author fields are rewritten from the current viewer profile, as
    /// the backend stores them flattened into the message.
    pub fn edit_message(&self, message: &Message, new_body: &str) -> Vec<SyncAction> {
        vec![SyncAction::UpdateMessage {
            message_id: message.id.clone(),
            update: MessageUpdate {
                body: new_body.to_owned(),
                user_id: self.viewer.id.clone(),
                channel_id: message.channel_id.clone(),
                user_name: self.viewer.name.clone(),
                user_avatar: self.viewer.avatar.clone(),
                user_avatar_color: self.viewer.avatar_color.clone(),
            },
        }]
    }

    /// Delete a message over the request/response channel.
    pub fn delete_message(&self, message_id: MessageId) -> Vec<SyncAction> {
        vec![SyncAction::DeleteMessage { message_id }]
    }

    /// Broadcast that the viewer started typing in the selected channel.
    pub fn start_typing(&self) -> Vec<SyncAction> {
        match self.selection.selected() {
            Some(channel_id) => vec![SyncAction::Emit(OutboundEvent::StartType {
                user_name: self.viewer.name.clone(),
                channel_id: channel_id.clone(),
            })],
            None => vec![],
        }
    }

    /// Broadcast that the viewer stopped typing.
    pub fn stop_typing(&self) -> Vec<SyncAction> {
        vec![SyncAction::Emit(OutboundEvent::StopType { user_name: self.viewer.name.clone() })]
    }

    /// Select a channel: clear its unread flag and reload its messages.
    ///
    /// The only writer of unread-clearing. Idempotent state-wise; the epoch
    /// still advances so reloads in flight for the previous view are
    /// discarded on completion. Selecting an unknown channel is ignored.
    pub fn select_channel(&mut self, channel_id: &ChannelId) -> Vec<SyncAction> {
        if !self.store.contains_channel(channel_id) {
            tracing::debug!(%channel_id, "select ignored: unknown channel");
            return vec![];
        }

        let epoch = self.selection.select(channel_id.clone());
        self.store.mark_read(channel_id);
        vec![
            SyncAction::FetchMessages { channel_id: channel_id.clone(), epoch },
            SyncAction::Render,
        ]
    }

    /// Adopt a new viewer profile and re-attribute authored messages.
    ///
    /// The backend flattens author fields into each message, so a profile
    /// edit rewrites every message the viewer has sent. The rewrite happens
    /// when the authored-message fetch completes.
    pub fn update_profile(&mut self, profile: UserProfile) -> Vec<SyncAction> {
        self.viewer = profile;
        vec![SyncAction::FetchUserMessages { user_id: self.viewer.id.clone() }]
    }

    // ---- inbound broadcasts ---------------------------------------------

    /// Translate one server broadcast into store mutations and reconciling
    /// fetches.
    ///
    /// Subscribed once per engine lifetime by the runtime; every handler is
    /// idempotent under duplicate delivery.
    pub fn handle(&mut self, event: InboundEvent) -> Vec<SyncAction> {
        match event {
            InboundEvent::ChannelCreated(channel) => self.on_channel_created(channel),
            InboundEvent::ChannelUpdated(channel) => {
                // Authoritative copy arrives in the payload; apply it, then
                // reconcile the full list.
                self.store.upsert_channel(channel);
                vec![
                    SyncAction::FetchChannels { epoch: self.selection.epoch() },
                    SyncAction::Render,
                ]
            },
            InboundEvent::ChannelDeleted { channel_id } => {
                tracing::debug!(%channel_id, "channel deleted; reconciling channel list");
                vec![SyncAction::FetchChannels { epoch: self.selection.epoch() }]
            },
            InboundEvent::MessageCreated(message) => self.on_message_created(message),
            InboundEvent::MessageUpdated { channel_id } => {
                if self.selection.is_selected(&channel_id) {
                    vec![SyncAction::FetchMessages {
                        channel_id,
                        epoch: self.selection.epoch(),
                    }]
                } else {
                    vec![]
                }
            },
            InboundEvent::MessageDeleted { message_id } => {
                tracing::debug!(%message_id, "message deleted; reconciling active channel");
                match self.selection.selected() {
                    Some(channel_id) => vec![SyncAction::FetchMessages {
                        channel_id: channel_id.clone(),
                        epoch: self.selection.epoch(),
                    }],
                    None => vec![],
                }
            },
            InboundEvent::TypingUpdate(snapshot) => {
                self.typing.replace(snapshot);
                vec![SyncAction::Render]
            },
        }
    }

    fn on_channel_created(&mut self, channel: Channel) -> Vec<SyncAction> {
        let channel_id = channel.id.clone();
        self.store.upsert_channel(channel);

        // First channel on an empty board becomes the selection, matching
        // the initial-load rule. An existing selection is never disturbed.
        if self.selection.selected().is_none() {
            return self.select_channel(&channel_id);
        }
        vec![SyncAction::Render]
    }

    fn on_message_created(&mut self, message: Message) -> Vec<SyncAction> {
        if !self.store.contains_channel(&message.channel_id) {
            tracing::warn!(channel_id = %message.channel_id, "dropping message for unknown channel");
            return vec![];
        }

        if self.selection.is_selected(&message.channel_id) {
            if !self.store.append_message(message) {
                return vec![];
            }
        } else if !self.store.mark_unread(message.channel_id) {
            return vec![];
        }
        vec![SyncAction::Render]
    }

    // ---- fetch completions ----------------------------------------------

    /// Apply a completed channel-list fetch.
    ///
    /// Stale-epoch results are discarded. If the selected channel vanished,
    /// selection falls back to the first remaining channel; if nothing was
    /// selected and channels exist, the first one is selected.
    pub fn channels_fetched(&mut self, epoch: Epoch, channels: Vec<Channel>) -> Vec<SyncAction> {
        if !self.selection.is_current(epoch) {
            tracing::debug!("discarding stale channel fetch");
            return vec![];
        }

        self.store.set_channels(channels);

        match self.selection.selected().cloned() {
            Some(id) if self.store.contains_channel(&id) => vec![SyncAction::Render],
            _ => match self.store.first_channel().map(|c| c.id.clone()) {
                Some(first) => self.select_channel(&first),
                None => {
                    self.selection.clear();
                    vec![SyncAction::Render]
                },
            },
        }
    }

    /// Apply a completed message-list fetch for `channel_id`.
    ///
    /// Discarded when the epoch is stale or the channel is no longer the
    /// selection — a slow reload for a previously selected channel must not
    /// overwrite the newer channel's view.
    pub fn messages_fetched(
        &mut self,
        epoch: Epoch,
        channel_id: &ChannelId,
        messages: Vec<Message>,
    ) -> Vec<SyncAction> {
        if !self.selection.is_current(epoch) || !self.selection.is_selected(channel_id) {
            tracing::debug!(%channel_id, "discarding stale message fetch");
            return vec![];
        }

        self.store.set_messages(channel_id, messages);
        vec![SyncAction::Render]
    }

    /// Apply a completed authored-messages fetch: issue one rewrite per
    /// message still attributed to the viewer.
    pub fn user_messages_fetched(&self, messages: Vec<Message>) -> Vec<SyncAction> {
        messages
            .into_iter()
            .filter(|message| message.user_id == self.viewer.id)
            .map(|message| SyncAction::UpdateMessage {
                message_id: message.id.clone(),
                update: MessageUpdate::reattribute(&message, &self.viewer),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use natter_proto::UserId;

    use super::*;
    use crate::selection::Epoch;

    fn viewer() -> UserProfile {
        UserProfile {
            id: UserId::from("u1"),
            name: "alice".into(),
            avatar: "avatarDefault.png".into(),
            avatar_color: "#336699".into(),
        }
    }

    fn channel(id: &str, name: &str) -> Channel {
        Channel { id: ChannelId::from(id), name: name.into(), description: String::new() }
    }

    fn message(id: &str, channel_id: &str, user_id: &str) -> Message {
        Message {
            id: MessageId::from(id),
            channel_id: ChannelId::from(channel_id),
            user_id: UserId::from(user_id),
            user_name: "bob".into(),
            user_avatar: "avatarDefault.png".into(),
            user_avatar_color: "#654321".into(),
            body: "hello".into(),
            time_stamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
        }
    }

    /// Engine with the given channels loaded and the first one selected.
    fn loaded_engine(channels: Vec<Channel>) -> SyncEngine {
        let mut engine = SyncEngine::new(viewer());
        let _ = engine.channels_fetched(Epoch::default(), channels);
        engine
    }

    fn current_epoch(engine: &SyncEngine) -> Epoch {
        engine.selection.epoch()
    }

    #[test]
    fn start_fetches_channels() {
        let engine = SyncEngine::new(viewer());
        let actions = engine.start();
        assert!(matches!(actions.as_slice(), [SyncAction::FetchChannels { .. }]));
    }

    #[test]
    fn create_channel_camel_cases_and_emits() {
        let engine = SyncEngine::new(viewer());
        let actions = engine.create_channel("General Chat", "small talk");

        match actions.as_slice() {
            [SyncAction::Emit(OutboundEvent::NewChannel { name, description })] => {
                assert_eq!(name, "generalChat");
                assert_eq!(description, "small talk");
            },
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn edit_channel_goes_over_rest_only() {
        let engine = SyncEngine::new(viewer());
        let actions = engine.edit_channel(ChannelId::from("c1"), "New Name", "desc");

        match actions.as_slice() {
            [SyncAction::UpdateChannel { channel_id, name, .. }] => {
                assert_eq!(channel_id, &ChannelId::from("c1"));
                assert_eq!(name, "newName");
            },
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn initial_fetch_selects_first_channel() {
        let engine = loaded_engine(vec![channel("c1", "general"), channel("c2", "random")]);
        assert_eq!(engine.selected_channel().map(|c| c.id.as_str()), Some("c1"));
        assert!(!engine.send_disabled());
    }

    #[test]
    fn empty_fetch_leaves_send_disabled() {
        let engine = loaded_engine(vec![]);
        assert!(engine.selected_channel().is_none());
        assert!(engine.send_disabled());
    }

    #[test]
    fn send_without_selection_emits_nothing() {
        let engine = SyncEngine::new(viewer());
        assert!(engine.send_message("hello").is_empty());
    }

    #[test]
    fn send_with_empty_body_emits_nothing() {
        let engine = loaded_engine(vec![channel("c1", "general")]);
        assert!(engine.send_message("").is_empty());
    }

    #[test]
    fn send_with_empty_viewer_emits_nothing() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        engine.viewer = UserProfile {
            id: UserId::from(""),
            name: String::new(),
            avatar: String::new(),
            avatar_color: String::new(),
        };
        assert!(engine.send_message("hello").is_empty());
    }

    #[test]
    fn send_emits_message_then_stop_typing() {
        let engine = loaded_engine(vec![channel("c1", "general")]);
        let actions = engine.send_message("hello");

        match actions.as_slice() {
            [
                SyncAction::Emit(OutboundEvent::NewMessage { body, channel_id, user }),
                SyncAction::Emit(OutboundEvent::StopType { user_name }),
            ] => {
                assert_eq!(body, "hello");
                assert_eq!(channel_id, &ChannelId::from("c1"));
                assert_eq!(user.name, "alice");
                assert_eq!(user_name, "alice");
            },
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn select_unknown_channel_is_ignored() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        assert!(engine.select_channel(&ChannelId::from("missing")).is_empty());
        assert_eq!(engine.selected_channel().map(|c| c.id.as_str()), Some("c1"));
    }

    #[test]
    fn select_clears_unread_and_reloads() {
        let mut engine = loaded_engine(vec![channel("c1", "general"), channel("c2", "random")]);
        let _ = engine.handle(InboundEvent::MessageCreated(message("m1", "c2", "u2")));
        assert!(engine.store().is_unread(&ChannelId::from("c2")));

        let actions = engine.select_channel(&ChannelId::from("c2"));
        assert!(!engine.store().is_unread(&ChannelId::from("c2")));
        assert!(matches!(
            actions.as_slice(),
            [SyncAction::FetchMessages { channel_id, .. }, SyncAction::Render]
                if channel_id == &ChannelId::from("c2")
        ));
    }

    #[test]
    fn select_is_idempotent() {
        let mut engine = loaded_engine(vec![channel("c1", "general"), channel("c2", "random")]);
        let _ = engine.select_channel(&ChannelId::from("c2"));
        let mut unread_before: Vec<_> = engine.store().unread().iter().cloned().collect();
        unread_before.sort();

        let _ = engine.select_channel(&ChannelId::from("c2"));
        assert_eq!(engine.selected_channel().map(|c| c.id.as_str()), Some("c2"));
        let mut unread_after: Vec<_> = engine.store().unread().iter().cloned().collect();
        unread_after.sort();
        assert_eq!(unread_before, unread_after);
    }

    #[test]
    fn message_for_selected_channel_appends() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        let actions = engine.handle(InboundEvent::MessageCreated(message("m1", "c1", "u2")));

        assert!(matches!(actions.as_slice(), [SyncAction::Render]));
        assert_eq!(engine.store().message_count(), 1);
        assert!(!engine.store().is_unread(&ChannelId::from("c1")));
    }

    #[test]
    fn duplicate_message_broadcast_appends_once() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        let _ = engine.handle(InboundEvent::MessageCreated(message("m1", "c1", "u2")));
        let actions = engine.handle(InboundEvent::MessageCreated(message("m1", "c1", "u2")));

        assert!(actions.is_empty());
        assert_eq!(engine.store().message_count(), 1);
    }

    #[test]
    fn message_for_other_channel_marks_unread_exactly_once() {
        let mut engine = loaded_engine(vec![channel("c1", "general"), channel("c2", "random")]);
        let _ = engine.handle(InboundEvent::MessageCreated(message("m1", "c2", "u2")));
        let _ = engine.handle(InboundEvent::MessageCreated(message("m2", "c2", "u2")));

        assert!(engine.store().is_unread(&ChannelId::from("c2")));
        assert_eq!(engine.store().unread().len(), 1);
        // Selected channel untouched by foreign traffic
        assert_eq!(engine.store().message_count(), 0);
    }

    #[test]
    fn message_for_unknown_channel_is_dropped() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        let actions = engine.handle(InboundEvent::MessageCreated(message("m1", "ghost", "u2")));

        assert!(actions.is_empty());
        assert!(engine.store().unread().is_empty());
    }

    #[test]
    fn channel_created_broadcast_adds_exactly_once() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        let _ = engine.handle(InboundEvent::ChannelCreated(channel("c2", "random")));
        let _ = engine.handle(InboundEvent::ChannelCreated(channel("c2", "random")));

        assert_eq!(engine.store().channel_count(), 2);
        // Existing selection is not disturbed
        assert_eq!(engine.selected_channel().map(|c| c.id.as_str()), Some("c1"));
    }

    #[test]
    fn channel_created_on_empty_board_selects_it() {
        let mut engine = loaded_engine(vec![]);
        let actions = engine.handle(InboundEvent::ChannelCreated(channel("c1", "general")));

        assert_eq!(engine.selected_channel().map(|c| c.id.as_str()), Some("c1"));
        assert!(
            actions
                .iter()
                .any(|a| matches!(a, SyncAction::FetchMessages { channel_id, .. }
                    if channel_id == &ChannelId::from("c1")))
        );
    }

    #[test]
    fn channel_updated_applies_payload_and_reconciles() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        let actions = engine.handle(InboundEvent::ChannelUpdated(channel("c1", "renamed")));

        assert_eq!(engine.store().channel(&ChannelId::from("c1")).map(|c| c.name.as_str()), Some("renamed"));
        assert!(actions.iter().any(|a| matches!(a, SyncAction::FetchChannels { .. })));
    }

    #[test]
    fn stale_channel_fetch_is_discarded() {
        let mut engine = loaded_engine(vec![channel("c1", "general"), channel("c2", "random")]);
        let stale = Epoch::default();

        let actions = engine.channels_fetched(stale, vec![channel("c9", "late")]);
        assert!(actions.is_empty());
        assert_eq!(engine.store().channel_count(), 2);
    }

    #[test]
    fn deleting_selected_channel_falls_back_to_first_remaining() {
        let mut engine = loaded_engine(vec![channel("c1", "general"), channel("c2", "random")]);
        assert_eq!(engine.selected_channel().map(|c| c.id.as_str()), Some("c1"));

        // Server confirms deletion of c1; refetch returns the remainder.
        let actions = engine.handle(InboundEvent::ChannelDeleted { channel_id: ChannelId::from("c1") });
        let epoch = match actions.as_slice() {
            [SyncAction::FetchChannels { epoch }] => *epoch,
            other => panic!("unexpected actions: {other:?}"),
        };

        let actions = engine.channels_fetched(epoch, vec![channel("c2", "random")]);
        assert_eq!(engine.selected_channel().map(|c| c.id.as_str()), Some("c2"));
        assert!(matches!(
            actions.as_slice(),
            [SyncAction::FetchMessages { channel_id, .. }, SyncAction::Render]
                if channel_id == &ChannelId::from("c2")
        ));
    }

    #[test]
    fn deleting_last_channel_clears_selection() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        let epoch = current_epoch(&engine);

        let _ = engine.channels_fetched(epoch, vec![]);
        assert!(engine.selected_channel().is_none());
        assert!(engine.send_disabled());
    }

    #[test]
    fn stale_message_fetch_does_not_overwrite_newer_view() {
        let mut engine = loaded_engine(vec![channel("c1", "general"), channel("c2", "random")]);
        let stale_epoch = current_epoch(&engine);

        // User switches to c2 while the c1 reload is still in flight.
        let _ = engine.select_channel(&ChannelId::from("c2"));
        let actions =
            engine.messages_fetched(stale_epoch, &ChannelId::from("c1"), vec![message("m1", "c1", "u2")]);

        assert!(actions.is_empty());
        assert_eq!(engine.store().message_count(), 0);
    }

    #[test]
    fn current_message_fetch_replaces_view() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        let epoch = current_epoch(&engine);

        let actions = engine.messages_fetched(
            epoch,
            &ChannelId::from("c1"),
            vec![message("m1", "c1", "u2"), message("m2", "c1", "u2")],
        );
        assert!(matches!(actions.as_slice(), [SyncAction::Render]));
        assert_eq!(engine.store().message_count(), 2);
    }

    #[test]
    fn message_updated_reloads_selected_channel_only() {
        let mut engine = loaded_engine(vec![channel("c1", "general"), channel("c2", "random")]);

        let actions = engine.handle(InboundEvent::MessageUpdated { channel_id: ChannelId::from("c2") });
        assert!(actions.is_empty());

        let actions = engine.handle(InboundEvent::MessageUpdated { channel_id: ChannelId::from("c1") });
        assert!(matches!(actions.as_slice(), [SyncAction::FetchMessages { .. }]));
    }

    #[test]
    fn message_deleted_reloads_active_channel() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        let actions =
            engine.handle(InboundEvent::MessageDeleted { message_id: MessageId::from("m1") });

        assert!(matches!(
            actions.as_slice(),
            [SyncAction::FetchMessages { channel_id, .. }] if channel_id == &ChannelId::from("c1")
        ));
    }

    #[test]
    fn typing_update_feeds_banner() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        let map = natter_proto::TypingMap::from([
            ("bob".to_owned(), ChannelId::from("c1")),
            ("carol".to_owned(), ChannelId::from("c1")),
        ]);

        let _ = engine.handle(InboundEvent::TypingUpdate(map));
        assert_eq!(engine.typing_banner(), "bob, carol are typing a message...");
    }

    #[test]
    fn profile_update_rewrites_only_authored_messages() {
        let mut engine = loaded_engine(vec![channel("c1", "general")]);
        let new_profile = UserProfile {
            id: UserId::from("u1"),
            name: "alicia".into(),
            avatar: "avatarDark1.png".into(),
            avatar_color: "#abcdef".into(),
        };

        let actions = engine.update_profile(new_profile);
        assert!(matches!(
            actions.as_slice(),
            [SyncAction::FetchUserMessages { user_id }] if user_id == &UserId::from("u1")
        ));

        let actions = engine.user_messages_fetched(vec![
            message("m1", "c1", "u1"),
            message("m2", "c1", "u2"),
            message("m3", "c2", "u1"),
        ]);

        assert_eq!(actions.len(), 2);
        for action in &actions {
            match action {
                SyncAction::UpdateMessage { update, .. } => {
                    assert_eq!(update.user_name, "alicia");
                    assert_eq!(update.user_avatar, "avatarDark1.png");
                },
                other => panic!("unexpected action: {other:?}"),
            }
        }
    }
}
