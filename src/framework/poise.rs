use tracing::info;

use crate::errors::{self, Error};

use super::{data::Data, event_handler};

pub fn build(data: Data) -> poise::Framework<Data, Error> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            on_error: errors::handle_framework_error,
            event_handler: event_handler::poise,
            ..Default::default()
        })
        .setup(|ctx, ready, _framework| {
            Box::pin(async move {
                let activity = data.config.bot.activity();
                ctx.set_activity(activity);

                info!(user = %ready.user.name, "finished setup, listening for messages");

                Ok(data)
            })
        })
        .build()
}
