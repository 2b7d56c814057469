use clap::{Parser, Subcommand};
use log::{info, warn};
use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wordle_dictionary::*;

const WORDS_PER_LINE: usize = 15;

/// Lists the Wordle words that still fit your clues.
///
/// Clues are given as the letters that are not in the word, followed by one clue per letter:
/// '.' if nothing is known, 'x' if the letter x is here, or '-xy' if x and y are in the word but
/// not here.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a RON file with the dictionary configuration. Flags override the file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a file that contains the raw word list, with one word on each line.
    #[arg(short = 'f', long, env = "DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Path to a file of words to leave out, with one word on each line.
    #[arg(short, long, env = "REMOVE")]
    remove: Option<PathBuf>,

    /// The page that lists past answers.
    #[arg(long, env = "PAST_ANSWERS_URL")]
    past_answers_url: Option<String>,

    /// How long to wait for the past answers page, in seconds.
    #[arg(long)]
    fetch_timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the words that fit a single set of clues.
    Filter {
        /// Letters that are not in the word.
        missed: String,
        /// One clue per letter.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        positions: Vec<String>,
    },
    /// Read one set of clues per line from standard input. The dictionary is reloaded when it
    /// gets too old, or on ':reload'.
    Interactive {
        /// Reload the dictionary once it is older than this many seconds.
        #[arg(long, default_value_t = 24 * 60 * 60)]
        max_age: u64,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let start_time = Instant::now();
    let args = Args::parse();
    let config = load_config(&args)?;

    match &args.command {
        Command::Filter { missed, positions } => run_filter(&config, missed, positions)?,
        Command::Interactive { max_age } => {
            run_interactive(&config, Duration::from_secs(*max_age))?
        }
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn load_config(args: &Args) -> Result<DictionaryConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ron::from_str::<DictionaryConfig>(&fs::read_to_string(path)?)?,
        None => DictionaryConfig::default(),
    };
    if let Some(dictionary) = &args.dictionary {
        config.source_path = dictionary.clone();
    }
    if let Some(remove) = &args.remove {
        config.exclude_path = Some(remove.clone());
    }
    if let Some(url) = &args.past_answers_url {
        config.past_answers_url = url.clone();
    }
    if let Some(seconds) = args.fetch_timeout {
        config.fetch_timeout = Duration::from_secs(seconds);
    }

    if config.source_path.as_os_str().is_empty() {
        return Err("no word list given: pass --dictionary or set DICTIONARY".into());
    }
    if config.exclude_path.is_none() {
        info!("No REMOVE list given. Will not remove any extra words.");
    }
    Ok(config)
}

fn run_filter(
    config: &DictionaryConfig,
    missed: &str,
    positions: &[String],
) -> Result<(), Box<dyn Error>> {
    let restrictions = parse_clues(
        &missed.to_lowercase(),
        &positions
            .iter()
            .map(|position| position.to_lowercase())
            .collect::<Vec<String>>(),
        config.word_length,
    )?;
    let words = build_dictionary(config)?;
    info!("There are {} possible words.", words.len());

    let candidates = make_candidates(&words, &restrictions);
    print_candidates(&mut io::stdout().lock(), &candidates)?;
    Ok(())
}

fn run_interactive(config: &DictionaryConfig, max_age: Duration) -> Result<(), Box<dyn Error>> {
    let store = WordStore::new(DictionaryBuilder::from_config(config)?)?;
    println!(
        "Enter the missed letters, then one clue per letter. For example: \"ertios -ag . -a -n .\"\n\
         Use ':count' to see the dictionary size, and ':reload' to rebuild it."
    );

    let mut stdout = io::stdout().lock();
    for line in io::stdin().lock().lines() {
        let line = line?.trim().to_lowercase();
        match line.as_str() {
            "" => continue,
            ":count" => {
                println!(
                    "{} words (last reload: {:?})",
                    store.count(),
                    store.last_reload()
                );
                continue;
            }
            ":reload" => {
                match store.reload() {
                    Ok(()) => println!("Reloaded: {} words", store.count()),
                    Err(err) => eprintln!("error: {}", err),
                }
                continue;
            }
            _ => {}
        }

        if let Err(err) = store.reload_if_stale(max_age) {
            warn!("Dictionary is stale and could not be reloaded: {}", err);
        }
        match parse_command_line(&line, config.word_length) {
            Ok(restrictions) => {
                let snapshot = store.snapshot();
                let candidates = make_candidates(snapshot.words(), &restrictions);
                print_candidates(&mut stdout, &candidates)?;
            }
            Err(err) => eprintln!("error: {}", err),
        }
    }
    Ok(())
}

fn print_candidates(out: &mut impl Write, candidates: &[Arc<str>]) -> io::Result<()> {
    for row in candidates.chunks(WORDS_PER_LINE) {
        writeln!(out, "{}", row.join(" "))?;
    }
    writeln!(out, "({} words)\n", candidates.len())?;
    out.flush()
}
