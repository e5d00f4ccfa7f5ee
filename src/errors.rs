use poise::{serenity_prelude as serenity, BoxFuture, FrameworkError};
use thiserror::Error as ThisError;
use tracing::{error, error_span, Instrument};

use crate::{
    framework::{config, Data},
    games::wordle::{LoadError, SettingError},
};

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("other serenity error: {0}")]
    Serenity(#[from] serenity::Error),

    #[error("problem loading config file: {0}")]
    Config(#[from] config::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid default settings: {0}")]
    Defaults(#[from] SettingError),
}

pub fn handle_framework_error(err: FrameworkError<'_, Data, Error>) -> BoxFuture<'_, ()> {
    Box::pin(async move {
        match err {
            FrameworkError::EventHandler { error, event, .. } => {
                let span = error_span!("", event = event.snake_case_name());

                async {
                    error!(%error, "event handler failed");
                }
                .instrument(span)
                .await;
            }
            FrameworkError::Setup { error, .. } => {
                error!(%error, "framework setup failed");
            }
            _ => {
                if let Err(error) = poise::builtins::on_error(err).await {
                    error!(%error, "failed to handle framework error");
                }
            }
        };
    })
}
