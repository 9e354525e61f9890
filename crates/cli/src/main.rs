mod commands;

use anyhow::Context;
use commands::{parse_command, Command};
use janken_core::{
    EventBus, GameConfig, GameEngine, GameError, Hand, HandSource, RngState, SessionSummary,
};
use janken_data::{load_game_config, load_i18n_or_builtin, I18n};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone)]
struct CliOptions {
    auto: bool,
    cui: bool,
    help: bool,
    seed: Option<u64>,
    rounds: Option<u32>,
    locale: Option<String>,
    assets_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end over one game engine.
struct Console {
    i18n: I18n,
    locale: String,
    engine: GameEngine,
    events: EventBus,
}

impl Console {
    fn new(i18n: I18n, locale: Option<&str>, config: GameConfig, seed: u64) -> Result<Self, GameError> {
        let engine = GameEngine::new(config, seed)?;
        let locale = i18n.locale_or_default(locale).to_string();
        Ok(Self {
            i18n,
            locale,
            engine,
            events: EventBus::default(),
        })
    }

    fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.i18n.translate_or_key(&self.locale, key)
    }

    fn hand_label(&self, hand: Hand) -> String {
        format!("{} {}", hand.glyph(), self.t(hand.label_key()))
    }

    fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::Play(hand) => self.play(hand, out)?,
            Command::Status => self.print_status(out)?,
            Command::Reset => {
                self.engine.reset(&mut self.events);
                writeln!(out, "{}", self.t("game.new_game_started"))?;
                self.print_status(out)?;
            }
            Command::Lang(code) => {
                self.locale = self.i18n.locale_or_default(Some(code.as_str())).to_string();
                writeln!(
                    out,
                    "{}: {}",
                    self.t("game.language"),
                    self.i18n.language_name(&self.locale).unwrap_or(&self.locale)
                )?;
            }
            Command::Help => writeln!(out, "{}", self.t("game.help.commands"))?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(input) => {
                writeln!(out, "{}: {input}", self.t("game.unknown_command"))?;
            }
        }
        self.drain_events();
        Ok(Flow::Continue)
    }

    fn play(&mut self, hand: Option<Hand>, out: &mut impl Write) -> io::Result<()> {
        if self.engine.is_session_over() {
            writeln!(out, "{}. {}: reset", self.t("game.over"), self.t("game.new_game"))?;
            return Ok(());
        }
        match self.engine.submit_choice(hand, &mut self.events) {
            Ok(outcome) => {
                writeln!(
                    out,
                    "{}: {}",
                    self.t("game.you_played"),
                    self.hand_label(outcome.user_hand)
                )?;
                writeln!(
                    out,
                    "{} {}: {}",
                    self.t(outcome.result.label_key()),
                    self.t("game.system_played"),
                    self.hand_label(outcome.system_hand)
                )?;
                writeln!(out, "{}: {}", self.t("game.rounds_left"), outcome.rounds_remaining)?;
                if let Some(summary) = self.engine.summary() {
                    self.print_summary(&summary, out)?;
                    writeln!(out, "{}: reset", self.t("game.new_game"))?;
                }
            }
            Err(GameError::InputMissing) => writeln!(out, "{}", self.t("game.choose_hand"))?,
            Err(err) => writeln!(out, "{}: {err}", self.t("game.error"))?,
        }
        Ok(())
    }

    fn print_status(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{}: {}/{}",
            self.t("game.rounds_left"),
            self.engine.rounds_remaining(),
            self.engine.config().initial_rounds
        )?;
        let standings = self.engine.standings();
        writeln!(
            out,
            "{}: {}  {}: {}  {}: {}",
            self.t("game.summary.wins"),
            standings.wins,
            self.t("game.summary.draws"),
            standings.draws,
            self.t("game.summary.losses"),
            standings.losses
        )
    }

    fn print_summary(&self, summary: &SessionSummary, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "== {} ==", self.t("game.summary"))?;
        writeln!(out, "{}: {}", self.t("game.summary.wins"), summary.wins)?;
        writeln!(out, "{}: {}", self.t("game.summary.draws"), summary.draws)?;
        writeln!(out, "{}: {}", self.t("game.summary.losses"), summary.losses)?;
        writeln!(
            out,
            "{}: {:.0}%",
            self.t("game.summary.win_rate"),
            summary.win_rate_percent()
        )
    }

    fn drain_events(&mut self) {
        for event in self.events.drain() {
            log::debug!("event: {:?}", event);
        }
    }
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        auto: false,
        cui: false,
        help: false,
        seed: None,
        rounds: None,
        locale: std::env::var("JANKEN_LANG").ok(),
        assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
    };
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => options.auto = true,
            "--cui" => options.cui = true,
            "--help" | "-h" => options.help = true,
            "--lang" | "-l" => {
                if let Some(value) = args.get(idx + 1) {
                    options.locale = Some(value.clone());
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--rounds" => {
                if let Some(value) = args.get(idx + 1) {
                    options.rounds = value.parse::<u32>().ok();
                    idx += 1;
                }
            }
            "--assets" => {
                if let Some(value) = args.get(idx + 1) {
                    options.assets_dir = PathBuf::from(value);
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    options
}

fn load_setup(assets_dir: &Path, rounds: Option<u32>) -> anyhow::Result<(I18n, GameConfig)> {
    let i18n = load_i18n_or_builtin(assets_dir).context("load strings")?;
    let mut config = if assets_dir.is_dir() {
        load_game_config(assets_dir).context("load config")?
    } else {
        GameConfig::default()
    };
    if let Some(rounds) = rounds {
        config.initial_rounds = rounds;
    }
    Ok((i18n, config))
}

fn print_usage() {
    println!("usage: janken-cli [--lang <code>] [--seed <n>] [--rounds <n>] [--assets <dir>] [--auto | --cui]");
    println!("  JANKEN_LANG selects the locale when --lang is absent; RUST_LOG controls logging");
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if options.help {
        print_usage();
        return;
    }
    if options.cui {
        let launch = janken_cui::LaunchOptions {
            locale: options.locale.clone(),
            seed: options.seed,
            rounds: options.rounds,
            assets_dir: Some(options.assets_dir.clone()),
        };
        if let Err(err) = janken_cui::run(launch) {
            eprintln!("cui launch error: {err:#}");
            std::process::exit(1);
        }
        return;
    }
    let seed = options
        .seed
        .unwrap_or_else(|| RngState::from_entropy().seed());
    let result = load_setup(&options.assets_dir, options.rounds).and_then(|(i18n, config)| {
        let console = Console::new(i18n, options.locale.as_deref(), config, seed)
            .context("start game")?;
        if options.auto {
            run_auto(console, seed, &mut io::stdout().lock()).context("auto play")
        } else {
            run_interactive(console).context("interactive play")
        }
    });
    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

/// Plays a whole session with seeded random user hands.
fn run_auto(mut console: Console, seed: u64, out: &mut impl Write) -> anyhow::Result<()> {
    let mut user = RngState::from_seed(seed.wrapping_add(1));
    writeln!(out, "locale: {} seed: {}", console.locale, seed)?;
    while !console.engine.is_session_over() {
        let hand = user.draw_hand();
        console
            .engine
            .submit_choice(Some(hand), &mut console.events)
            .context("play round")?;
    }
    for event in console.events.drain() {
        writeln!(out, "event: {:?}", event)?;
    }
    if let Some(summary) = console.engine.summary() {
        console.print_summary(&summary, out)?;
    }
    Ok(())
}

fn run_interactive(mut console: Console) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{} - {}", console.t("game.title"), console.t("game.submit"))?;
    writeln!(stdout, "{}", console.t("game.help.commands"))?;
    console.print_status(&mut stdout)?;
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "{} > ", console.t("game.title"))?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let command = parse_command(&line?);
        if console.handle(command, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
