use anstream::{eprintln, print, println};
use anyhow::Context;
use clap::{arg, command, value_parser, ArgMatches};
use duotone::{Duotone, StyleSheet, Surface};
use owo_colors::OwoColorize;

pub fn main() {
    let matches = command!()
        .arg(
            arg!(-n --count <N> "Number of pairs to generate")
                .default_value("1")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(arg!(--seed <SEED> "Seed the pseudorandom generator").value_parser(value_parser!(u64)))
        .arg(arg!(--css "Print each pair as a CSS rule"))
        .arg(arg!(--selector <SELECTOR> "Selector of the CSS rule").default_value(":root"))
        .arg(
            arg!(-q --quiet "Quiet, only show the color values")
                .visible_alias("only-values")
                .conflicts_with("css"),
        )
        .arg(
            arg!(--color <WHEN> "Controls when to use color")
                .default_value("auto")
                .value_parser(clap::builder::EnumValueParser::<clap::ColorChoice>::new()),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let color = match matches
        .get_one::<clap::ColorChoice>("color")
        .expect("default color value")
    {
        clap::ColorChoice::Auto => anstream::ColorChoice::Auto,
        clap::ColorChoice::Always => anstream::ColorChoice::Always,
        clap::ColorChoice::Never => anstream::ColorChoice::Never,
    };
    color.write_global();

    if let Err(err) = run(&matches) {
        eprintln!("{}: {err:#}", "error".red());
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let count = *matches.get_one::<u32>("count").expect("default count value");
    let seed = matches.get_one::<u64>("seed").copied();
    let selector = matches
        .get_one::<String>("selector")
        .expect("default selector value");
    let css = matches.get_flag("css");
    let quiet = matches.get_flag("quiet");

    let mut generator = if let Some(seed) = seed {
        Duotone::with_seed(seed)
    } else {
        Duotone::new()
    };

    for i in 0..count {
        if css {
            let mut sheet = StyleSheet::new(selector.as_str());
            generator
                .apply(Surface::Available(&mut sheet))
                .with_context(|| format!("applying pair {}", i + 1))?;
            if i > 0 {
                println!();
            }
            print!("{sheet}");
            continue;
        }

        let pair = generator.generate();
        if quiet {
            println!("{} {}", pair.primary, pair.secondary);
        } else {
            println!(
                "{} {} {}",
                "primary  ".bold(),
                pair.primary.swatch(),
                pair.primary
            );
            println!(
                "{} {} {}",
                "secondary".bold(),
                pair.secondary.swatch(),
                pair.secondary
            );
        }
    }

    Ok(())
}
