// std imports
use std::{
    fs,
    io::{IsTerminal, Read, stdin, stdout},
    process, thread,
    time::Duration,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use strmatch::{
    cli::{self, ColorOption},
    config,
    error::*,
    output::{OutputStream, Printer},
    playback::Playback,
    run::{self, Request, RunResultSet},
    settings::{OutputFormat, Settings},
};

const STRMATCH_DEBUG_LOG: &str = "STRMATCH_DEBUG_LOG";
const STRMATCH_DEBUG_LOG_STYLE: &str = "STRMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() -> Result<Settings> {
    if std::env::var(STRMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(STRMATCH_DEBUG_LOG).write_style(STRMATCH_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let settings = config::load()?;
    config::initialize(settings.clone());

    Ok(settings)
}

fn run() -> Result<()> {
    let settings = bootstrap()?;
    let opt = cli::Opt::parse_from(wild::args());

    let colors = match opt.color {
        ColorOption::Auto => stdout().is_terminal(),
        ColorOption::Always => true,
        ColorOption::Never => false,
    };
    let output: OutputStream = Box::new(stdout());
    let mut printer = Printer::new(output, colors);

    if opt.list_algorithms {
        return Ok(printer.algorithms()?);
    }

    let text = match (&opt.text, &opt.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) if path.to_str() == Some("-") => {
            let mut text = String::new();
            stdin().read_to_string(&mut text)?;
            text
        }
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => settings.text.clone(),
    };

    let request = Request::parse(
        &text,
        &opt.patterns,
        &opt.algorithm,
        opt.case_insensitive(settings.ignore_case),
    )?;
    let results = run::run(&request)?;

    match render(&mut printer, &opt, &settings, &text, &results) {
        Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

fn render(
    printer: &mut Printer<OutputStream>,
    opt: &cli::Opt,
    settings: &Settings,
    text: &str,
    results: &RunResultSet,
) -> Result<()> {
    match opt.format.unwrap_or(settings.output.format) {
        OutputFormat::Json => printer.json(results),
        OutputFormat::Text => {
            let trace = (opt.trace || settings.output.trace) && !opt.play;
            printer.results(text, results, trace)?;
            if opt.play {
                play(printer, results, opt.interval.unwrap_or(settings.playback.interval))?;
            }
            Ok(printer.flush()?)
        }
    }
}

fn play(printer: &mut Printer<OutputStream>, results: &RunResultSet, interval: Duration) -> Result<()> {
    let RunResultSet::Patterns(results) = results else {
        log::warn!("benchmark results have no step traces to play");
        return Ok(());
    };

    for result in results {
        printer.flush()?;
        printer.summary(result)?;

        let mut playback = Playback::new(&result.steps);
        let mut step = playback.current();
        while let Some(current) = step {
            printer.step(playback.index(), current)?;
            printer.flush()?;
            if playback.is_finished() {
                break;
            }
            thread::sleep(interval);
            step = playback.forward();
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
