use rand::Rng;
use thiserror::Error;
use tracing::{info, instrument};

use crate::games::wordle::{
    AsEmoji, Catalog, ChannelState, GameStyle, GuessError, NoCandidatesError, SettingError,
};

mod parse;
pub use parse::{Command, ParseError};

mod reply;
pub use reply::{wiki_url, Reply};

/// Anything a message can go wrong with. Every variant becomes an error reply.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("There's already a game in progress!")]
    GameInProgress,

    #[error("There's no game running! Start one with `wordle`.")]
    NoGame,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    Setting(#[from] SettingError),

    #[error(transparent)]
    NoCandidates(#[from] NoCandidatesError),
}

/// Answers a chat message, or `None` if it wasn't meant for the bot.
pub fn respond(
    message: &str,
    state: &mut ChannelState,
    catalog: &Catalog,
    style: GameStyle,
    rng: &mut impl Rng,
) -> Option<Reply> {
    let result = Command::parse(message)?
        .map_err(CommandError::from)
        .and_then(|command| execute(command, state, catalog, style, rng));

    Some(result.unwrap_or_else(|err| {
        info!(%err, "rejected");
        Reply::error(err)
    }))
}

#[instrument(skip_all, fields(?command))]
pub fn execute(
    command: Command,
    state: &mut ChannelState,
    catalog: &Catalog,
    style: GameStyle,
    rng: &mut impl Rng,
) -> Result<Reply, CommandError> {
    let reply = match command {
        Command::NewGame => return new_game(state, rng),
        Command::Guess(word) => return guess(state, &word, style),
        Command::SetWordList(name) => {
            let list = state.settings.set_word_list(catalog, &name)?;
            format!(
                "Word list has been changed to {}: {}!",
                list.name(),
                list.description()
            )
        }
        Command::SetGuessList(name) => {
            let list = state.settings.set_guess_list(catalog, &name)?;
            format!(
                "Guess list has been changed to {}: {}!",
                list.name(),
                list.description()
            )
        }
        Command::SetAlphabet(name) => {
            let alphabet = state.settings.set_alphabet(catalog, &name)?;
            format!(
                "Alphabet has been changed to {}: {}!",
                alphabet.name(),
                alphabet.description()
            )
        }
        Command::SetLength { min, max: None } => {
            state.settings.set_length(min, min)?;
            format!("Length for new words has been set to {min}.")
        }
        Command::SetLength {
            min,
            max: Some(max),
        } => {
            state.settings.set_length(min, max)?;
            format!("Length for new words has been set to {min}-{max}.")
        }
    };

    Ok(Reply::success(reply))
}

fn new_game(state: &mut ChannelState, rng: &mut impl Rng) -> Result<Reply, CommandError> {
    if state.game_in_progress() {
        return Err(CommandError::GameInProgress);
    }

    let settings = &state.settings;
    let game = settings.new_game(rng)?;
    let length = game.answer().len();

    info!(
        length,
        word_list = %settings.word_list().name(),
        guess_list = %settings.guess_list().name(),
        alphabet = %settings.alphabet().name(),
        bounds = ?settings.length().range(),
        "new game"
    );
    state.game = Some(game);

    Ok(Reply::success(format!(
        "New game started! (Word has {length} letters and is from word list {})",
        state.settings.word_list().name()
    )))
}

fn guess(state: &mut ChannelState, word: &str, style: GameStyle) -> Result<Reply, CommandError> {
    let game = state.game.as_mut().ok_or(CommandError::NoGame)?;

    game.guess(word)?;

    let board = game.guesses().emoji_with_style(style);

    if game.is_won() {
        let count = game.count_guesses();
        let answer = game.answer().to_string();
        let language = state.settings.word_list().language();

        info!(guesses = count, "game won");

        Ok(Reply::success(format!(
            "{board}\n\nCongrats! You guessed right after {count} guess{}.",
            if count > 1 { "es" } else { "" }
        ))
        .title(answer.to_uppercase())
        .url(wiki_url(language, &answer)))
    } else {
        let letters = |letters: Vec<char>| letters.into_iter().collect::<String>();

        Ok(Reply::standard(format!(
            "{board}\n\nConfirmed to be in the word: {}\nNot yet tried: {}\nDefinitely not in the word: {}",
            letters(game.letters_in_word()),
            letters(game.letters_not_tried()),
            letters(game.letters_not_in_word()),
        )))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use tracing_test::traced_test;

    use super::{reply::Tone, respond, Reply};
    use crate::games::wordle::{
        test_catalog, Catalog, ChannelState, DefaultSettings, GameStyle, Settings,
    };

    struct Channel {
        catalog: Catalog,
        state: ChannelState,
        rng: StdRng,
    }

    impl Channel {
        fn new() -> Self {
            let catalog = test_catalog();
            let settings = Settings::from_defaults(&catalog, &DefaultSettings::default()).unwrap();

            Self {
                catalog,
                state: ChannelState::new(settings),
                rng: StdRng::seed_from_u64(42),
            }
        }

        fn send(&mut self, message: &str) -> Option<Reply> {
            respond(
                message,
                &mut self.state,
                &self.catalog,
                GameStyle::Colors,
                &mut self.rng,
            )
        }

        fn reply(&mut self, message: &str) -> Reply {
            self.send(message).expect("message should be answered")
        }

        fn answer(&self) -> String {
            self.state.game.as_ref().unwrap().answer().to_string()
        }
    }

    #[test]
    fn ignores_chatter() {
        let mut channel = Channel::new();

        assert_eq!(channel.send("good morning"), None);
        assert!(channel.state.game.is_none());
    }

    #[test]
    #[traced_test]
    fn full_game() {
        let mut channel = Channel::new();

        let reply = channel.reply("wordle");
        assert_eq!(reply.tone, Tone::Success);
        assert_eq!(
            reply.description,
            "New game started! (Word has 5 letters and is from word list Wordle)"
        );
        assert!(logs_contain("new game"));

        let reply = channel.reply("wordle");
        assert_eq!(reply.tone, Tone::Error);
        assert_eq!(reply.description, "There's already a game in progress!");

        let answer = channel.answer();
        let wrong = if answer == "apple" { "crane" } else { "apple" };

        let reply = channel.reply(&format!("w {wrong}"));
        assert_eq!(reply.tone, Tone::Standard);
        assert!(reply.description.contains("Confirmed to be in the word: "));
        assert!(reply.description.contains("Not yet tried: "));

        let reply = channel.reply(&format!("w {}", answer.to_uppercase()));
        assert_eq!(reply.tone, Tone::Success);
        assert_eq!(reply.title, Some(answer.to_uppercase()));
        assert!(reply
            .description
            .ends_with("Congrats! You guessed right after 2 guesses."));
        assert_eq!(
            reply.url.map(String::from),
            Some(format!(
                "https://en.wikipedia.org/wiki/{}{}",
                answer[..1].to_uppercase(),
                &answer[1..]
            ))
        );

        let reply = channel.reply(&format!("w {wrong}"));
        assert_eq!(reply.description, "Start a new game before guessing!");

        // a won game can be replaced
        assert_eq!(channel.reply("new").tone, Tone::Success);
    }

    #[test]
    fn invalid_guesses_are_explained() {
        let mut channel = Channel::new();

        assert_eq!(
            channel.reply("w crane").description,
            "There's no game running! Start one with `wordle`."
        );

        channel.reply("wordle");

        assert_eq!(
            channel.reply("w cran").description,
            "Guess needs to be 5 letters long!"
        );
        assert_eq!(
            channel.reply("w qwert").description,
            "`qwert` is not a valid word!"
        );
        assert_eq!(
            channel.reply("w äpfel").description,
            "`äpfel` contains invalid characters!"
        );
        assert_eq!(channel.state.game.as_ref().unwrap().count_guesses(), 0);
    }

    #[test]
    fn settings_replies() {
        let mut channel = Channel::new();

        assert_eq!(
            channel.reply("set wl german").description,
            "Word list has been changed to German: Deutsche Wörter (inklusive Flexionen)!"
        );
        assert_eq!(
            channel.reply("set letters German").description,
            "Alphabet has been changed to German: Normales deutsches Alphabet!"
        );
        assert_eq!(
            channel.reply("set l 5").description,
            "Length for new words has been set to 5."
        );
        assert_eq!(
            channel.reply("set l 4 6").description,
            "Length for new words has been set to 4-6."
        );

        let reply = channel.reply("set l 3 2");
        assert_eq!(reply.tone, Tone::Error);
        assert_eq!(
            reply.description,
            "Minimum length must be smaller than maximum length!"
        );

        assert_eq!(
            channel.reply("set l 0").description,
            "Length must be at least 1!"
        );
        assert_eq!(
            channel.reply("set l 21").description,
            "Length must be 20 or smaller!"
        );
        assert_eq!(
            channel.reply("set l 99999999999999999999999").description,
            "Length must be 20 or smaller!"
        );
        assert_eq!(
            channel.reply("set l 3 3").description,
            "Length for new words has been set to 3-3."
        );
        assert_eq!(
            channel.reply("set gl klingon").description,
            "klingon is not a valid word list. Available word lists: Wordle, Wordle-all, German, Empty"
        );
    }

    #[test]
    fn no_candidates() {
        let mut channel = Channel::new();
        channel.reply("set l 9 12");

        let reply = channel.reply("wordle");
        assert_eq!(reply.tone, Tone::Error);
        assert_eq!(
            reply.description,
            "There are no words to choose! Change the word list or length requirements!"
        );
        assert!(channel.state.game.is_none());
    }

    #[test]
    fn settings_do_not_touch_running_game() {
        let mut channel = Channel::new();
        channel.reply("wordle");
        let answer = channel.answer();

        channel.reply("set wl german");
        channel.reply("set l 3 3");

        assert_eq!(channel.answer(), answer);
        assert_eq!(channel.reply(&format!("w {answer}")).tone, Tone::Success);
    }
}
