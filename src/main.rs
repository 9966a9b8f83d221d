use clap::{Arg, ArgAction, Command};
use std::process;
use std::time::Instant;

use chrono::Utc;
use colored::*;
use portprobe::{
    config::ProbeConfig,
    output::{OutputConfig, OutputManager},
    scanner::engine::ScanEngine,
    utils::target::resolve_host,
};

fn print_banner() {
    println!("{}", r" ____    ___   ____  _____  ____   ____    ___   ____   _____ ".truecolor(231, 76, 60).bold());
    println!("{}", r"|  _ \  / _ \ |  _ \|_   _||  _ \ |  _ \  / _ \ | __ ) | ____|".truecolor(231, 76, 60).bold());
    println!("{}", r"| |_) || | | || |_) |  | |  | |_) || |_) || | | ||  _ \ |  _|  ".truecolor(231, 76, 60).bold());
    println!("{}", r"|  __/ | |_| ||  _ <   | |  |  __/ |  _ < | |_| || |_) || |___ ".truecolor(231, 76, 60).bold());
    println!("{}", r"|_|     \___/ |_| \_\  |_|  |_|    |_| \_\ \___/ |____/ |_____|".truecolor(231, 76, 60).bold());
    println!();
    println!("{}", "Knock on every door, keep none open.".bright_blue());
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Command::new("portprobe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Small TCP connectivity prober")
        .arg(
            Arg::new("target")
                .help("Host to probe, by domain name or IP address")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .value_parser(clap::value_parser!(u16))
                .help("Probe a single port"),
        )
        .arg(
            Arg::new("series")
                .short('s')
                .long("series")
                .value_name("PORTS")
                .help("Probe a comma-separated series of ports (e.g. 22,80,443)"),
        )
        .arg(
            Arg::new("range")
                .short('r')
                .long("range")
                .value_name("RANGE")
                .help("Probe an inclusive port range as <min>-<max> (e.g. 1-999)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("MS")
                .value_parser(clap::value_parser!(u64))
                .help("Connection timeout per probe in milliseconds [default: 100]"),
        )
        .arg(
            Arg::new("no-banner")
                .long("no-banner")
                .action(ArgAction::SetTrue)
                .help("Hide the startup banner"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored output"),
        )
        .get_matches();

    if !matches.get_flag("no-banner") {
        print_banner();
    }

    // Config file supplies defaults, command line wins.
    let mut config = ProbeConfig::load_default_config();
    config.target = matches
        .get_one::<String>("target")
        .cloned()
        .unwrap_or_default();
    if let Some(&timeout) = matches.get_one::<u64>("timeout") {
        config.timeout = timeout;
    }
    if let Some(&port) = matches.get_one::<u16>("port") {
        config.port = Some(port);
    }
    if let Some(series) = matches.get_one::<String>("series") {
        config.series = Some(series.clone());
    }
    if let Some(range) = matches.get_one::<String>("range") {
        config.range = Some(range.clone());
    }

    let mut output = OutputManager::new(OutputConfig {
        colored: !matches.get_flag("no-color"),
    });

    // Resolution failure is fatal: nothing is probed.
    let addresses = match resolve_host(&config.target).await {
        Ok(addresses) => addresses,
        Err(err) => {
            eprintln!("{} {:#}", "Host error:".bright_red().bold(), err);
            process::exit(1);
        }
    };
    output.print_resolution(&config.target, &addresses);
    output.print_timeout(config.timeout_duration());

    let has_modes = config.port.is_some() || config.series.is_some() || config.range.is_some();
    if has_modes {
        println!(
            "{} {}",
            "[~] Scan started at".bright_blue(),
            Utc::now()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .bright_cyan()
        );
    }

    let engine = ScanEngine::new(config)?;
    let started = Instant::now();

    match engine.run(&mut output).await {
        Ok(stats) => {
            output.print_summary(&stats, started.elapsed());
            Ok(())
        }
        Err(err) => {
            eprintln!(
                "{} {}",
                "[!]".bright_red().bold(),
                err.to_string().bright_red()
            );
            process::exit(1);
        }
    }
}
