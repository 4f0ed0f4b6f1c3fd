use clap::{Parser, ValueEnum};
use std::fmt::Write;
use tracing::info;

use tracewin_fixtures::probe::{run_pattern_loop, run_value_script};
use tracewin_fixtures::sink::dump_words;
use tracewin_fixtures::sort::quicksort;
use tracewin_fixtures::{
    PROBE_PATTERN_BASE, PROBE_SCRIPT_BASE, SORT_AFTER_BASE, SORT_BEFORE_BASE, SORT_DATASET,
};

/// Expected contents of one memory window: the base address plus the exact
/// words the fixture writes there.
struct WindowTrace {
    name: &'static str,
    base: usize,
    words: Vec<u32>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Fixture {
    /// Sorter+Dumper: pre/post-sort snapshots of the fixed dataset
    Quicksort,
    /// Register Prober: value script plus the counting pattern loop
    Probe,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "TraceWin reference-trace generator", long_about = None)]
struct Args {
    /// Fixture to compute expected window contents for
    #[arg(value_enum)]
    fixture: Fixture,

    /// Emit a JSON object keyed by window base instead of a text dump
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn quicksort_traces() -> Vec<WindowTrace> {
    let mut before = Vec::new();
    dump_words(&SORT_DATASET, &mut before);

    let mut data = SORT_DATASET;
    quicksort(&mut data);
    let mut after = Vec::new();
    dump_words(&data, &mut after);

    vec![
        WindowTrace {
            name: "pre-sort",
            base: SORT_BEFORE_BASE,
            words: before,
        },
        WindowTrace {
            name: "post-sort",
            base: SORT_AFTER_BASE,
            words: after,
        },
    ]
}

fn probe_traces() -> Vec<WindowTrace> {
    let mut script = Vec::new();
    run_value_script(&mut script);

    let mut pattern = Vec::new();
    run_pattern_loop(&mut pattern);

    vec![
        WindowTrace {
            name: "value-script",
            base: PROBE_SCRIPT_BASE,
            words: script,
        },
        WindowTrace {
            name: "pattern-loop",
            base: PROBE_PATTERN_BASE,
            words: pattern,
        },
    ]
}

// One `addr: value` line per word, the dump format the harness diffs.
fn render_text(traces: &[WindowTrace]) -> String {
    let mut out = String::new();
    for trace in traces {
        let _ = writeln!(out, "{} window:", trace.name);
        for (i, &word) in trace.words.iter().enumerate() {
            let _ = writeln!(out, "{:#010x}: {:#010x}", trace.base + i * 4, word);
        }
    }
    out
}

fn render_json(traces: &[WindowTrace]) -> serde_json::Value {
    let mut windows = serde_json::Map::new();
    for trace in traces {
        windows.insert(
            format!("{:#010x}", trace.base),
            serde_json::json!({
                "name": trace.name,
                "words": trace.words,
            }),
        );
    }
    serde_json::Value::Object(windows)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the dump on stdout stays machine-diffable.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let traces = match args.fixture {
        Fixture::Quicksort => quicksort_traces(),
        Fixture::Probe => probe_traces(),
    };

    for trace in &traces {
        info!(
            "window {} at {:#010x}: {} words",
            trace.name,
            trace.base,
            trace.words.len()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&render_json(&traces))?);
    } else {
        print!("{}", render_text(&traces));
    }

    Ok(())
}
