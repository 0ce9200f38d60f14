
mod cabinet;
mod canvas;
mod config;
mod launch;
mod states;

use std::fs::OpenOptions;
use std::io::Read;

use clap::Parser;

use arcade::screens::*;
use cabinet::play;
use launch::Launch;

use utils::*;

///
/// A structure representing command line arguments.
///
#[derive(Parser)]
struct CLIArgs 
{
    #[clap(short, long, default_value = "tictactoe")]
    game: String,

    #[clap(short, long, default_value = "config/config.toml")]
    config: String
}

fn main () -> Result<()>
{
    let args = CLIArgs::parse();

    let mut config_str = String::new();
    OpenOptions::new().read(true).open(& args.config)
        .and_then(|mut file| file.read_to_string(& mut config_str))
        .with_context(|| format!("Could not read the configuration at '{}'.", & args.config))?;
    let config : config::Config = toml::from_str(& config_str)?;

    let _logger = log::initialize(& config.log_path, "client", & config.log_level)?;
    log::info!("Launching '{}' with the configuration at '{}'.", & args.game, & args.config);

    let setup = config.games.compile()?;

    let mut font = Vec::new();
    OpenOptions::new().read(true).open(& config.font_path)
        .and_then(|mut file| file.read_to_end(& mut font))
        .with_context(|| format!("Could not read the font at '{}'.", & config.font_path))?;
    Launch::initialize(Box::leak(font.into_boxed_slice()), setup)?;

    match args.game.as_str()
    {
        "tictactoe" => play::<Classic>(),
        "infinite"  => play::<Infinite>(),
        "wordle"    => play::<WordleScreen>(),
        "hangman"   => play::<HangmanScreen>(),
        "pong"      => play::<PongScreen>(),
        "rps"       => play::<RpsScreen>(),
        _ => 
        {
            Err(error::error!("Game '{}' is unsupported.", & args.game))
        }
    }
}
