use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, styling};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use dictionary::{
    ALL_SEARCH_METHODS, Order, SearchMethod, search_method_from_name, search_method_name,
};
use sorting::{SortMethod, all_methods, method_from_name, method_name};

use crate::keys::{ALL_KEY_GENERATORS, KeyGenerator, key_generator_from_name, key_generator_name};
use crate::times::SizeRange;

pub const DEFAULT_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Experiment {
    Sort {
        method: SortMethod,
    },
    Search {
        method: SearchMethod,
        keys: KeyGenerator,
        order: Order,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub experiment: Experiment,
    pub output: PathBuf,
    pub sizes: SizeRange,
    /// Permutations per size when sorting, key sweeps per size when searching.
    pub reps: usize,
    pub seed: u64,
    pub verbosity: u8,
}

fn parse_seed(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|err| format!("invalid seed `{s}`: {err}"))
}

fn parse_order(s: &str) -> Order {
    match s {
        "sorted" => Order::Sorted,
        "unsorted" => Order::Unsorted,
        _ => unreachable!(),
    }
}

fn shared_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("output")
            .long("output")
            .short('o')
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("File the result table is written to."),
    )
    .arg(
        Arg::new("min")
            .long("min")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("Smallest problem size."),
    )
    .arg(
        Arg::new("max")
            .long("max")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("Largest problem size."),
    )
    .arg(
        Arg::new("step")
            .long("step")
            .value_parser(value_parser!(usize))
            .default_value("1")
            .help("Increment between consecutive problem sizes."),
    )
    .arg(
        Arg::new("reps")
            .long("reps")
            .value_parser(value_parser!(usize))
            .default_value("1")
            .help("Permutations sorted per size, or key sweeps searched per size."),
    )
    .arg(
        Arg::new("seed")
            .long("seed")
            .value_parser(parse_seed)
            .default_value("0x5EED_2026")
            .help("Seed for every random choice of the run; accepts decimal or 0x-prefixed hex."),
    )
}

pub fn command() -> Command {
    let styles = styling::Styles::styled()
        .header(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Cyan.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default());

    let sort_methods: Vec<&'static str> = all_methods().iter().map(|&m| method_name(m)).collect();
    let search_methods: Vec<&'static str> =
        ALL_SEARCH_METHODS.iter().map(|&m| search_method_name(m)).collect();
    let key_generators: Vec<&'static str> =
        ALL_KEY_GENERATORS.iter().map(|&g| key_generator_name(g)).collect();

    Command::new("algolab")
        .version(std::env!("CARGO_PKG_VERSION"))
        .about(std::env!("CARGO_PKG_DESCRIPTION"))
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Raise log verbosity (info, debug, trace). RUST_LOG overrides it."),
        )
        .subcommand(shared_args(
            Command::new("sort")
                .about("Times a sorting method over random permutations")
                .arg(
                    Arg::new("method")
                        .long("method")
                        .short('m')
                        .required(true)
                        .value_parser(PossibleValuesParser::new(sort_methods))
                        .help("Sorting method to measure."),
                ),
        ))
        .subcommand(shared_args(
            Command::new("search")
                .about("Times a search method over a randomly filled dictionary")
                .arg(
                    Arg::new("method")
                        .long("method")
                        .short('m')
                        .required(true)
                        .value_parser(PossibleValuesParser::new(search_methods))
                        .help("Search method to measure."),
                )
                .arg(
                    Arg::new("keys")
                        .long("keys")
                        .short('k')
                        .required(true)
                        .value_parser(PossibleValuesParser::new(key_generators))
                        .help("Distribution of the searched keys."),
                )
                .arg(
                    Arg::new("order")
                        .long("order")
                        .value_parser(PossibleValuesParser::new(["sorted", "unsorted"]))
                        .help(
                            "Insertion mode of the dictionary \
                             [default: unsorted for self-organizing, sorted otherwise].",
                        ),
                ),
        ))
}

impl Config {
    pub fn from_args() -> Self {
        Self::from_matches(&command().get_matches())
    }

    pub fn try_from_iter<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::from_matches(&command().try_get_matches_from(args)?))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let verbosity = matches.get_count("verbose");

        let (experiment, sub) = match matches.subcommand() {
            Some(("sort", sub)) => {
                let name = sub.get_one::<String>("method").unwrap();
                let experiment = Experiment::Sort {
                    method: method_from_name(name).unwrap(),
                };
                (experiment, sub)
            }
            Some(("search", sub)) => {
                let name = sub.get_one::<String>("method").unwrap();
                let keys = sub.get_one::<String>("keys").unwrap();
                let method = search_method_from_name(name).unwrap();
                let order = match sub.get_one::<String>("order") {
                    Some(order) => parse_order(order),
                    None if method == SearchMethod::SelfOrganizing => Order::Unsorted,
                    None => Order::Sorted,
                };
                let experiment = Experiment::Search {
                    method,
                    keys: key_generator_from_name(keys).unwrap(),
                    order,
                };
                (experiment, sub)
            }
            _ => unreachable!(),
        };

        Config {
            experiment,
            output: sub.get_one::<PathBuf>("output").unwrap().clone(),
            sizes: SizeRange {
                min: *sub.get_one::<usize>("min").unwrap(),
                max: *sub.get_one::<usize>("max").unwrap(),
                step: *sub.get_one::<usize>("step").unwrap(),
            },
            reps: *sub.get_one::<usize>("reps").unwrap(),
            seed: *sub.get_one::<u64>("seed").unwrap(),
            verbosity,
        }
    }
}
