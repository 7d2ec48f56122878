//! Terminal front end for the vocabulary drill.

pub mod config;
pub mod controller;
pub mod feedback;
pub mod render;

use anyhow::Context;
use drill_core::DrillSession;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::controller::{Controller, Transition};
use crate::feedback::FeedbackTimer;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    let entries = config.load_words()?;
    tracing::info!(words = entries.len(), "starting drill");

    let mut controller = Controller::new(DrillSession::new(entries, config.settings));
    let (tx, mut rx) = mpsc::channel(1);
    let mut timer = FeedbackTimer::new(tx);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    let mut transition = controller.start();
    loop {
        match transition {
            Transition::Exit => break,
            Transition::Ignored => {}
            Transition::Show => {
                render::screen(&mut stdout, controller.screen(), &controller.session().summary())?;
            }
            Transition::AwaitFeedback(delay) => {
                render::screen(&mut stdout, controller.screen(), &controller.session().summary())?;
                timer.schedule(delay)?;
            }
        }

        transition = tokio::select! {
            line = lines.next_line() => match line.context("reading input")? {
                Some(line) => match render::parse_input(&line) {
                    Some(input) => controller.handle(input),
                    None => Transition::Ignored,
                },
                None => Transition::Exit,
            },
            Some(()) = rx.recv() => {
                timer.fired();
                controller.feedback_elapsed()
            }
        };
    }

    timer.cancel();
    tracing::info!(summary = ?controller.session().summary(), "drill ended");
    Ok(())
}
