//! Command-line interface for grid-areas
//! Generates grid area utilities from a layout configuration and resolves class names against them.
//!
//! Usage:
//!   grid-areas build `<config>` [--format `<format>`]       - Print every generated utility
//!   grid-areas resolve [--config `<config>`] `<class>`...   - Print the rules for specific classes
//!   grid-areas areas `<config>`                             - List discovered area names
//!   grid-areas list-formats                               - List available output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use grid_areas::formats::FormatRegistry;
use grid_areas::{generate_stylesheet, GenerationSummary, GridAreasConfig, Stylesheet};

fn main() {
    env_logger::init();

    let matches = Command::new("grid-areas")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate CSS Grid named-area utilities from layout configurations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("build")
                .about("Generate all static utilities for a configuration")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON or YAML layout configuration")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'css', 'json')")
                        .default_value("css"),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve class names, including bracketed arbitrary values")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Path to a JSON or YAML layout configuration"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'css', 'json')")
                        .default_value("css"),
                )
                .arg(
                    Arg::new("classes")
                        .help("Class names to resolve")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("areas")
                .about("List the area names a configuration defines")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON or YAML layout configuration")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("build", build_matches)) => handle_build_command(build_matches),
        Some(("resolve", resolve_matches)) => handle_resolve_command(resolve_matches),
        Some(("areas", areas_matches)) => handle_areas_command(areas_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!("subcommand_required guarantees a subcommand"),
    }
}

fn load_config(path: Option<&String>) -> GridAreasConfig {
    match path {
        Some(path) => GridAreasConfig::from_path(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => GridAreasConfig::new(),
    }
}

fn generate_or_exit(config: &GridAreasConfig) -> (Stylesheet, GenerationSummary) {
    generate_stylesheet(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn format_or_exit(rules: &[grid_areas::UtilityRule], format: &str) -> String {
    let registry = FormatRegistry::with_defaults();
    registry.format(rules, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    })
}

/// Handle the build command
fn handle_build_command(matches: &ArgMatches) {
    let config = load_config(matches.get_one::<String>("config"));
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("css");

    let (stylesheet, summary) = generate_or_exit(&config);
    for name in &summary.shadowed_layouts {
        eprintln!("warning: layout '{}' is shadowed by a reserved keyword", name);
    }
    print!("{}", format_or_exit(stylesheet.rules(), format));
}

/// Handle the resolve command
fn handle_resolve_command(matches: &ArgMatches) {
    let config = load_config(matches.get_one::<String>("config"));
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("css");
    let (stylesheet, _) = generate_or_exit(&config);

    let mut resolved = Vec::new();
    let mut unknown = Vec::new();
    for class in matches.get_many::<String>("classes").into_iter().flatten() {
        match stylesheet.resolve(class) {
            Some(rule) => resolved.push(rule),
            None => unknown.push(class.as_str()),
        }
    }

    print!("{}", format_or_exit(&resolved, format));
    if !unknown.is_empty() {
        for class in &unknown {
            eprintln!("Unknown class: {}", class);
        }
        std::process::exit(1);
    }
}

/// Handle the areas command
fn handle_areas_command(matches: &ArgMatches) {
    let config = load_config(matches.get_one::<String>("config"));
    let (_, summary) = generate_or_exit(&config);
    for area in summary.areas {
        println!("{}", area);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
