
use arcade::Options;
use utils::{Serialize, Deserialize};

///
/// Represents a full configuration.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default)]
    pub games: Options,

    #[serde(default = "font_path")]
    pub font_path: String,

    #[serde(default = "log_path")]
    pub log_path: String,

    #[serde(default = "log_level")]
    pub log_level: String
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config { games: Options::default(), font_path: font_path(), log_path: log_path(), log_level: log_level() }
    }
}

///
/// Returns the default font path.
///
fn font_path () -> String 
{
    "assets/font.ttf".to_owned()
}

///
/// Returns the default log path.
///
fn log_path () -> String 
{
    "logs".to_owned()
}

///
/// Returns the default log level; moves are logged at debug.
///
fn log_level () -> String 
{
    "debug".to_owned()
}

#[cfg(test)]
mod tests 
{
    use super::*;

    #[test]
    fn empty_file_takes_defaults ()
    {
        let config : Config = toml::from_str("").unwrap();
        assert_eq!(config.log_path, "logs");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.font_path, "assets/font.ttf");
        assert_eq!(config.games, Options::default());
    }

    #[test]
    fn games_table_overrides_word_lists ()
    {
        let config : Config = toml::from_str(
            "log_path = \"/tmp/arcade\"\n\
             [games]\n\
             seed = 7\n\
             wordle_words = [\"crane\", \"slate\"]\n"
        ).unwrap();

        assert_eq!(config.log_path, "/tmp/arcade");
        assert_eq!(config.games.seed, Some(7));
        assert_eq!(config.games.wordle_words, vec!["crane", "slate"]);
        assert_eq!(config.games.hangman_words, Options::default().hangman_words);

        let setup = config.games.compile().unwrap();
        assert_eq!(setup.wordle_words().len(), 2);
    }

    #[test]
    fn log_level_can_be_raised ()
    {
        let config : Config = toml::from_str("log_level = \"warn\"\n").unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_path, "logs");
    }

    #[test]
    fn bad_wordle_word_fails_to_compile ()
    {
        let config : Config = toml::from_str("[games]\nwordle_words = [\"toolong\"]\n").unwrap();
        assert!(config.games.compile().is_err());
    }
}
