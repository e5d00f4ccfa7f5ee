use std::{future::Future, pin::Pin};

use poise::{
    serenity_prelude::{
        self as serenity, CacheHttp, CreateEmbed, CreateEmbedFooter, CreateMessage, FullEvent,
        Message,
    },
    FrameworkContext,
};
use tracing::{debug, instrument};

use super::Data;
use crate::{
    built_info,
    commands::wordle::{respond, Reply},
    errors::Error,
};

fn footer() -> String {
    format!("Wortlerino v{}", built_info::PKG_VERSION)
}

fn embed(reply: &Reply) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .description(&reply.description)
        .color(reply.tone.color())
        .footer(CreateEmbedFooter::new(footer()));

    if let Some(title) = &reply.title {
        embed = embed.title(title);
    }

    if let Some(url) = &reply.url {
        embed = embed.url(url.as_str());
    }

    embed
}

#[instrument(skip_all, fields(channel = %msg.channel_id, author = %msg.author.name))]
async fn wordle_message(
    serenity_ctx: &serenity::Context,
    msg: &Message,
    data: &Data,
) -> Result<(), Error> {
    let reply = {
        let state = data.games.channel(msg.channel_id).await;
        let mut state = state.lock().await;

        respond(
            &msg.content,
            &mut state,
            &data.catalog,
            data.config.wordle.style,
            &mut rand::thread_rng(),
        )
    };

    let Some(reply) = reply else {
        return Ok(());
    };

    debug!(tone = ?reply.tone, "replying");

    msg.channel_id
        .send_message(serenity_ctx.http(), CreateMessage::new().embed(embed(&reply)))
        .await?;

    Ok(())
}

async fn event_handler(
    serenity_ctx: &serenity::Context,
    event: &FullEvent,
    _framework_ctx: FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        FullEvent::Message { new_message: msg }
            if !msg.author.bot && !msg.is_own(&serenity_ctx.cache) =>
        {
            wordle_message(serenity_ctx, msg, data).await?;
        }
        _ => (),
    }

    Ok(())
}

pub fn poise<'a>(
    serenity_ctx: &'a serenity::Context,
    event: &'a FullEvent,
    framework_ctx: FrameworkContext<'a, Data, Error>,
    data: &'a Data,
) -> Pin<Box<dyn Future<Output = Result<(), Error>> + Send + 'a>> {
    Box::pin(event_handler(serenity_ctx, event, framework_ctx, data))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{embed, footer};
    use crate::commands::wordle::{wiki_url, Reply};

    #[test]
    fn footer_names_version() {
        assert_eq!(footer(), format!("Wortlerino v{}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn won_reply_embed() {
        let reply = Reply::success("Congrats! You guessed right after 3 guesses.")
            .title("CRANE")
            .url(wiki_url("en", "crane"));

        let json = serde_json::to_value(embed(&reply)).unwrap();

        assert_eq!(json["title"], "CRANE");
        assert_eq!(json["url"], "https://en.wikipedia.org/wiki/Crane");
        assert_eq!(json["color"], 0x538D4E);
        assert_eq!(
            json["description"],
            "Congrats! You guessed right after 3 guesses."
        );
        assert_eq!(json["footer"]["text"], footer());
    }

    #[test]
    fn error_reply_embed_has_no_title() {
        let json = serde_json::to_value(embed(&Reply::error("Too many words!"))).unwrap();

        assert_eq!(json["color"], 0x8D4E4E);
        assert!(json.get("title").map_or(true, serde_json::Value::is_null));
        assert!(json.get("url").map_or(true, serde_json::Value::is_null));
    }
}
