use std::{collections::HashMap, sync::Arc};

use poise::serenity_prelude::ChannelId;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use super::{Game, Settings};

/// Everything a single channel remembers between messages.
#[derive(Debug, Clone)]
pub struct ChannelState {
    pub settings: Settings,
    pub game: Option<Game>,
}

impl ChannelState {
    pub const fn new(settings: Settings) -> Self {
        Self {
            settings,
            game: None,
        }
    }

    /// A game exists and hasn't been won yet.
    pub fn game_in_progress(&self) -> bool {
        self.game.as_ref().is_some_and(|game| !game.is_won())
    }
}

/// Channel states keyed by channel. Each channel has its own lock, so
/// channels never wait on each other.
#[derive(Clone, Debug)]
pub struct GamesCache {
    defaults: Settings,
    channels: Arc<RwLock<HashMap<ChannelId, Arc<Mutex<ChannelState>>>>>,
}

impl GamesCache {
    pub fn new(defaults: Settings) -> Self {
        Self {
            defaults,
            channels: Arc::default(),
        }
    }

    pub async fn get(&self, channel_id: ChannelId) -> Option<Arc<Mutex<ChannelState>>> {
        let guard = self.channels.read().await;
        guard.get(&channel_id).cloned()
    }

    /// The channel's state, created from the default settings on first use.
    pub async fn channel(&self, channel_id: ChannelId) -> Arc<Mutex<ChannelState>> {
        if let Some(state) = self.get(channel_id).await {
            return state;
        }

        let mut guard = self.channels.write().await;
        let known = guard.len();
        guard
            .entry(channel_id)
            .or_insert_with(|| {
                debug!(%channel_id, known, "new channel state");
                Arc::new(Mutex::new(ChannelState::new(self.defaults.clone())))
            })
            .clone()
    }

}
