use std::path::PathBuf;
use std::process;
use ventuno_advisor::{advise_report, write_json, AdvisorConfig, EvMode};
use ventuno_core::{hand_total, Hand};

#[derive(Debug, Clone, Default)]
struct CliOptions {
    player: Option<u32>,
    cards: Option<String>,
    dealer: Option<u32>,
    ace: bool,
    double: bool,
    trials: Option<u32>,
    seed: Option<u64>,
    exact: bool,
    json: bool,
    out: Option<PathBuf>,
    help: bool,
}

const USAGE: &str = "\
Usage: ventuno [OPTIONS]

Hand (exactly one of --player/--cards, plus --dealer):
  --player <SUM>     player hand total
  --cards <LIST>     comma-separated player card ranks, e.g. A,7 or 10,6
  --dealer <VALUE>   dealer upcard value (2-11)
  --ace              the player total counts an ace as 11 (with --player)
  --double           doubling down is allowed

Engine:
  --trials <N>       Monte Carlo trials (default 100000)
  --seed <N>         generator seed (default 0xACE21)
  --exact            closed-form EVs instead of sampling

Output:
  --json             print the report as JSON instead of text
  --out <PATH>       also write the JSON report to a file
  --help             show this help";

fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--ace" => options.ace = true,
            "--double" => options.double = true,
            "--exact" => options.exact = true,
            "--json" => options.json = true,
            "--help" | "-h" => options.help = true,
            "--player" => {
                options.player = Some(parse_value(args, &mut idx, "--player")?);
            }
            "--cards" => {
                options.cards = Some(take_value(args, &mut idx, "--cards")?);
            }
            "--dealer" => {
                options.dealer = Some(parse_value(args, &mut idx, "--dealer")?);
            }
            "--trials" => {
                options.trials = Some(parse_value(args, &mut idx, "--trials")?);
            }
            "--seed" => {
                options.seed = Some(parse_value(args, &mut idx, "--seed")?);
            }
            "--out" => {
                options.out = Some(PathBuf::from(take_value(args, &mut idx, "--out")?));
            }
            other => return Err(format!("unknown option: {other}")),
        }
        idx += 1;
    }
    Ok(options)
}

fn take_value(args: &[String], idx: &mut usize, flag: &str) -> Result<String, String> {
    match args.get(*idx + 1) {
        Some(value) => {
            *idx += 1;
            Ok(value.clone())
        }
        None => Err(format!("{flag} needs a value")),
    }
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    idx: &mut usize,
    flag: &str,
) -> Result<T, String> {
    let raw = take_value(args, idx, flag)?;
    raw.parse::<T>()
        .map_err(|_| format!("{flag}: cannot parse `{raw}`"))
}

fn build_hand(options: &CliOptions) -> Result<Hand, String> {
    let (player_sum, has_ace) = match (&options.cards, options.player) {
        (Some(_), Some(_)) => {
            return Err("give either --player or --cards, not both".to_string());
        }
        (None, None) => {
            return Err("one of --player or --cards is required".to_string());
        }
        (Some(cards), None) => {
            let ranks: Vec<&str> = cards
                .split(',')
                .map(str::trim)
                .filter(|rank| !rank.is_empty())
                .collect();
            hand_total(&ranks).map_err(|err| err.to_string())?
        }
        (None, Some(player)) => (player, options.ace),
    };
    let dealer_upcard = options
        .dealer
        .ok_or_else(|| "--dealer is required".to_string())?;
    Ok(Hand {
        player_sum,
        dealer_upcard,
        has_ace,
        can_double_down: options.double,
    })
}

fn build_config(options: &CliOptions) -> AdvisorConfig {
    let mut config = AdvisorConfig::default();
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    if let Some(trials) = options.trials {
        config.trials = trials;
    }
    if options.exact {
        config.mode = EvMode::Exact;
    }
    config
}

fn run(options: &CliOptions) -> Result<(), String> {
    let hand = build_hand(options)?;
    let config = build_config(options);
    let report = advise_report(&hand, &config).map_err(|err| err.to_string())?;
    if options.json {
        let body = serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
        println!("{body}");
    } else {
        println!("{}", report.to_text_report());
    }
    if let Some(path) = &options.out {
        write_json(path, &report).map_err(|err| err.to_string())?;
        eprintln!("report written to {}", path.display());
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };
    if options.help {
        println!("{USAGE}");
        return;
    }
    if let Err(err) = run(&options) {
        eprintln!("{err}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn flags_fill_the_options() {
        let options = parse_cli_options(&args(&[
            "--player", "16", "--dealer", "10", "--double", "--trials", "5000", "--seed", "7",
            "--exact", "--json", "--out", "report.json",
        ]))
        .unwrap();
        assert_eq!(options.player, Some(16));
        assert_eq!(options.dealer, Some(10));
        assert!(options.double);
        assert_eq!(options.trials, Some(5000));
        assert_eq!(options.seed, Some(7));
        assert!(options.exact && options.json);
        assert_eq!(options.out, Some(PathBuf::from("report.json")));
        assert!(!options.ace && !options.help);
    }

    #[test]
    fn unknown_and_dangling_flags_fail() {
        assert!(parse_cli_options(&args(&["--wat"])).is_err());
        assert!(parse_cli_options(&args(&["--player"])).is_err());
        assert!(parse_cli_options(&args(&["--trials", "many"])).is_err());
    }

    #[test]
    fn hand_from_a_total() {
        let options =
            parse_cli_options(&args(&["--player", "18", "--dealer", "6", "--ace"])).unwrap();
        let hand = build_hand(&options).unwrap();
        assert_eq!(hand.player_sum, 18);
        assert_eq!(hand.dealer_upcard, 6);
        assert!(hand.has_ace);
        assert!(!hand.can_double_down);
    }

    #[test]
    fn hand_from_cards_detects_the_soft_ace() {
        let options = parse_cli_options(&args(&["--cards", "A,7", "--dealer", "9"])).unwrap();
        let hand = build_hand(&options).unwrap();
        assert_eq!(hand.player_sum, 18);
        assert!(hand.has_ace);

        let options =
            parse_cli_options(&args(&["--cards", "A, 9, 5", "--dealer", "9"])).unwrap();
        let hand = build_hand(&options).unwrap();
        assert_eq!(hand.player_sum, 15);
        assert!(!hand.has_ace);
    }

    #[test]
    fn hand_sources_are_exclusive() {
        let both = parse_cli_options(&args(&[
            "--cards", "A,7", "--player", "18", "--dealer", "9",
        ]))
        .unwrap();
        assert!(build_hand(&both).is_err());
        let neither = parse_cli_options(&args(&["--dealer", "9"])).unwrap();
        assert!(build_hand(&neither).is_err());
        let no_dealer = parse_cli_options(&args(&["--player", "18"])).unwrap();
        assert!(build_hand(&no_dealer).is_err());
    }

    #[test]
    fn unknown_rank_is_reported() {
        let options = parse_cli_options(&args(&["--cards", "A,X", "--dealer", "9"])).unwrap();
        let err = build_hand(&options).unwrap_err();
        assert!(err.contains("unknown card rank"));
    }

    #[test]
    fn config_defaults_and_overrides() {
        let options = parse_cli_options(&args(&["--player", "12", "--dealer", "4"])).unwrap();
        let config = build_config(&options);
        assert_eq!(config.trials, 100_000);
        assert_eq!(config.mode, EvMode::Sampled);

        let options = parse_cli_options(&args(&[
            "--player", "12", "--dealer", "4", "--seed", "3", "--trials", "10", "--exact",
        ]))
        .unwrap();
        let config = build_config(&options);
        assert_eq!(config.seed, 3);
        assert_eq!(config.trials, 10);
        assert_eq!(config.mode, EvMode::Exact);
    }
}
