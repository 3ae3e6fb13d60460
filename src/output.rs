//! Rendering of run results for the terminal and as JSON.

// std imports
use std::{
    collections::BTreeMap,
    io::{self, Write},
};

// third-party imports
use itertools::Itertools;
use owo_colors::OwoColorize;

// local imports
use crate::{
    algorithm::AlgorithmId,
    error::Result,
    highlight::{self, Segment},
    matcher::MatchResult,
    registry,
    run::{BenchmarkResult, RunResultSet},
    trace::Step,
};

// ---

pub type OutputStream = Box<dyn Write + Send + Sync>;

/// Writes human-readable or JSON output.
///
/// Without colors, highlighted matches are enclosed in square brackets.
pub struct Printer<W> {
    out: W,
    colors: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, colors: bool) -> Self {
        Self { out, colors }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn json(&mut self, results: &RunResultSet) -> Result<()> {
        json::to_writer_pretty(&mut self.out, results)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn results(&mut self, text: &str, results: &RunResultSet, trace: bool) -> io::Result<()> {
        match results {
            RunResultSet::Patterns(results) => {
                for (i, result) in results.iter().enumerate() {
                    if i != 0 {
                        writeln!(self.out)?;
                    }
                    self.summary(result)?;
                    self.text(text, result)?;
                    if trace {
                        self.trace(&result.steps)?;
                    }
                }
                Ok(())
            }
            RunResultSet::Benchmark(results) => self.benchmark(results),
        }
    }

    /// One line with the algorithm, pattern, match positions, comparisons and elapsed time.
    pub fn summary(&mut self, result: &MatchResult) -> io::Result<()> {
        let algorithm: &str = result.algorithm.map_or("?", Into::into);
        let pattern = format!("{:?}", result.pattern.as_deref().unwrap_or_default());
        if self.colors {
            write!(self.out, "{} {}", algorithm.bold(), pattern.yellow())?;
        } else {
            write!(self.out, "{} {}", algorithm, pattern)?;
        }

        let n = result.matches.len();
        write!(self.out, ": {} {}", n, if n == 1 { "match" } else { "matches" })?;
        if n != 0 {
            write!(self.out, " at [{}]", result.matches.iter().join(", "))?;
        }
        write!(self.out, ", {} comparisons", result.comparisons)?;
        if let Some(elapsed) = result.elapsed {
            write!(self.out, " in {}", humantime::format_duration(elapsed))?;
        }
        writeln!(self.out)
    }

    /// The text with all matches of `result` highlighted, indented by two spaces.
    pub fn text(&mut self, text: &str, result: &MatchResult) -> io::Result<()> {
        write!(self.out, "  ")?;
        for segment in highlight::segments(text, result) {
            match segment {
                Segment::Plain(s) => write!(self.out, "{}", s)?,
                Segment::Highlighted(s) if self.colors => write!(self.out, "{}", s.black().on_yellow())?,
                Segment::Highlighted(s) => write!(self.out, "[{}]", s)?,
            }
        }
        writeln!(self.out)
    }

    pub fn trace(&mut self, steps: &[Step]) -> io::Result<()> {
        for (index, step) in steps.iter().enumerate() {
            self.step(index, step)?;
        }
        Ok(())
    }

    /// A single trace line, numbered from 1.
    pub fn step(&mut self, index: usize, step: &Step) -> io::Result<()> {
        let kind = format!("{:<13}", step.kind().as_ref());
        if self.colors {
            writeln!(self.out, "{:>6}  {} {}", (index + 1).dimmed(), kind.cyan(), step)
        } else {
            writeln!(self.out, "{:>6}  {} {}", index + 1, kind, step)
        }
    }

    pub fn benchmark(&mut self, results: &BTreeMap<AlgorithmId, BenchmarkResult>) -> io::Result<()> {
        let header = format!(
            "{:<12} {:>8} {:>8} {:>12}  {}",
            "algorithm", "patterns", "matches", "comparisons", "elapsed"
        );
        if self.colors {
            writeln!(self.out, "{}", header.bold())?;
        } else {
            writeln!(self.out, "{}", header)?;
        }

        for result in results.values() {
            writeln!(
                self.out,
                "{:<12} {:>8} {:>8} {:>12}  {}",
                result.algorithm.as_ref(),
                result.patterns,
                result.matches,
                result.comparisons,
                humantime::format_duration(result.elapsed)
            )?;
        }
        Ok(())
    }

    pub fn algorithms(&mut self) -> io::Result<()> {
        for descriptor in registry::all() {
            if self.colors {
                writeln!(self.out, "{:<12} {}", descriptor.id.as_ref().bold(), descriptor.name)?;
            } else {
                writeln!(self.out, "{:<12} {}", descriptor.id.as_ref(), descriptor.name)?;
            }
            writeln!(self.out, "{:<12} {}", "", descriptor.description)?;
        }
        Ok(())
    }
}
