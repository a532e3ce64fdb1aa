//! Terminal front-end for the Wrapped story flow.
//!
//! Drives the core state machine in a frame loop: a reader thread turns
//! stdin lines into logical input events, the app ticks against a
//! monotonic clock, and the current snapshot is redrawn as a single
//! status line whenever the app requests a render.

use std::{
    io::{self, BufRead, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    thread,
    time::{Duration, Instant},
};

use log::info;
use wrapped_core::{
    analytics::AnalyticsSink,
    app::{StoryApp, StoryConfig, TickResult},
    assets::AssetGate,
    deck::{CtaAction, Deck, Tone},
    input::{InputEvent, InputProvider},
    render::{Screen, SegmentFill},
};

const FRAME_MS: u64 = 33;
const ASSET_WARMUP_MS: u64 = 500;

struct ChannelInput {
    rx: mpsc::Receiver<InputEvent>,
}

impl InputProvider for ChannelInput {
    type Error = std::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        match self.rx.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Ok(None),
        }
    }
}

/// Logs each tracked event instead of calling the tracking webhook.
struct ConsoleAnalytics;

impl AnalyticsSink for ConsoleAnalytics {
    type Error = io::Error;

    fn report(&mut self, event: &str, source: &str) -> Result<(), Self::Error> {
        info!("analytics event={} source={}", event, source);
        Ok(())
    }
}

/// Ready a fixed warmup after start, standing in for image preloading.
struct WarmupAssets {
    started: Instant,
    warmup: Duration,
}

impl AssetGate for WarmupAssets {
    fn is_ready(&self) -> bool {
        self.started.elapsed() >= self.warmup
    }
}

fn parse_command(line: &str) -> Option<InputEvent> {
    let line = line.trim();
    if let Ok(index) = line.parse::<u16>() {
        return Some(InputEvent::SegmentTap(index));
    }

    match line {
        "" | "n" => Some(InputEvent::TapNext),
        "p" => Some(InputEvent::TapBack),
        "r" => Some(InputEvent::ChooseTone(Tone::Roast)),
        "g" => Some(InputEvent::ChooseTone(Tone::Gentle)),
        "d" => Some(InputEvent::Cta(CtaAction::SavingsDetail)),
        "k" => Some(InputEvent::Cta(CtaAction::CategoryOffer)),
        "o" => Some(InputEvent::Cta(CtaAction::PartnerOffer)),
        "x" => Some(InputEvent::Cta(CtaAction::OtherOptions)),
        "c" => Some(InputEvent::Cta(CtaAction::Confirm)),
        "j" => Some(InputEvent::Cta(CtaAction::ConfirmSwitch)),
        "e" => Some(InputEvent::Cta(CtaAction::FeedbackSubmit)),
        "s" => Some(InputEvent::OpenShare),
        "z" => Some(InputEvent::DismissShare),
        _ => None,
    }
}

fn draw(screen: &Screen<'_>) {
    let mut line = String::new();

    match screen {
        Screen::Loading => line.push_str("loading assets..."),
        Screen::Story {
            current,
            label,
            transition,
            locked,
            tone,
            awaiting_tone,
            share_open,
            segments,
            ..
        } => {
            line.push('[');
            for segment in segments.iter() {
                line.push(match segment {
                    SegmentFill::Full => '#',
                    SegmentFill::Partial(_) => '>',
                    SegmentFill::Empty => '.',
                });
            }
            line.push_str("] ");
            line.push_str(&format!("{:02} {}", current, label));

            if let Some(frame) = transition {
                line.push_str(&format!(
                    " {:?} {}% dir={:+}",
                    frame.kind,
                    frame.progress_pct,
                    frame.direction.signum()
                ));
            }
            if *locked {
                line.push_str(" [locked]");
            }
            if *awaiting_tone {
                line.push_str(" choose tone: r/g");
            } else if let Some(tone) = tone {
                line.push_str(&format!(" tone={:?}", tone));
            }
            if *share_open {
                line.push_str(" [share open]");
            }
        }
    }

    let mut stdout = io::stdout();
    // Clear-to-end keeps shorter lines from leaving stale characters.
    let _ = write!(stdout, "\r\x1b[K{}", line);
    let _ = stdout.flush();
}

fn main() {
    env_logger::init();

    let (tx, rx) = mpsc::channel();
    let quit = Arc::new(AtomicBool::new(false));

    let reader_quit = Arc::clone(&quit);
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line.trim() == "q" {
                reader_quit.store(true, Ordering::Relaxed);
                break;
            }
            let Some(event) = parse_command(&line) else {
                continue;
            };
            if tx.send(event).is_err() {
                break;
            }
        }
        reader_quit.store(true, Ordering::Relaxed);
    });

    println!("wrapped story player");
    println!("  enter/n next   p back   0-12 jump   r/g choose tone");
    println!("  d savings detail   k category offer   o partner offer");
    println!("  x other options    c confirm   j confirm switch   e send feedback");
    println!("  s share   z dismiss   q quit");

    let started = Instant::now();
    let mut app = StoryApp::new(
        Deck::standard(),
        ChannelInput { rx },
        ConsoleAnalytics,
        WarmupAssets {
            started,
            warmup: Duration::from_millis(ASSET_WARMUP_MS),
        },
        StoryConfig::default(),
    );

    while !quit.load(Ordering::Relaxed) {
        let now_ms = started.elapsed().as_millis() as u64;
        if app.tick(now_ms) == TickResult::RenderRequested {
            app.with_screen(now_ms, |screen| draw(&screen));
        }
        thread::sleep(Duration::from_millis(FRAME_MS));
    }

    println!();
}
