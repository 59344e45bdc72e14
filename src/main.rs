//! Replays recorded frame observations through the interaction core.
//!
//! Input is newline-delimited JSON, one frame per line:
//! `{"t_ms": 0, "coordinates": {...}, "gestures": {"right_hand": {"gesture": "palm"}}}`.
//! One event per frame is written to stdout as JSON.
//!
//! Usage: `gesture_replay [--settings PATH] [--log-file PATH] [INPUT | -]`

use anyhow::{bail, Context};
use gesture_remote::event::{EventSink, JsonLinesSink};
use gesture_remote::{logging, FrameObservation, GestureHandler, InteractionSettings};
use serde::Deserialize;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Deserialize)]
struct RecordedFrame {
    t_ms: u64,
    #[serde(flatten)]
    observation: FrameObservation,
}

struct Args {
    settings: Option<String>,
    log_file: Option<PathBuf>,
    input: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        settings: None,
        log_file: None,
        input: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => {
                args.settings = Some(iter.next().context("--settings requires a path")?);
            }
            "--log-file" => {
                args.log_file = Some(iter.next().context("--log-file requires a path")?.into());
            }
            "-" => args.input = None,
            other if other.starts_with("--") => bail!("unknown flag {other}"),
            other => args.input = Some(other.to_string()),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    let settings = match &args.settings {
        Some(path) => InteractionSettings::load(path)?,
        None => InteractionSettings::default(),
    };
    logging::init(settings.debug_logging, args.log_file.clone());

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path).with_context(|| format!("opening {path}"))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut handler = GestureHandler::new(&settings);
    let mut sink = JsonLinesSink::new(io::stdout().lock());
    let base = Instant::now();
    let mut last_t_ms = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: RecordedFrame = serde_json::from_str(&line)
            .with_context(|| format!("line {}: invalid frame", line_no + 1))?;
        if frame.t_ms < last_t_ms {
            tracing::warn!(line = line_no + 1, t_ms = frame.t_ms, "timestamp went backwards, clamping");
        }
        last_t_ms = last_t_ms.max(frame.t_ms);
        let now = base
            .checked_add(Duration::from_millis(last_t_ms))
            .with_context(|| format!("line {}: t_ms {} is out of range", line_no + 1, frame.t_ms))?;
        let event = handler.tick(&frame.observation, now);
        sink.dispatch(&event)?;
    }
    Ok(())
}
