//! CLI entrypoint for eduquiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection: config, store adapter, identity provider, auth
//! gate, score watcher, and the resolve-question use case.

use anyhow::{Context, Result, bail};
use clap::Parser;
use eduquiz_application::{
    BehaviorConfig, IdentityProviderPort, NavigatorPort, RedirectDecision,
    ResolveQuestionUseCase, ScoreWatcher, await_auth_resolution, decide_redirect,
};
use eduquiz_domain::{Identity, Level, Selection, Track};
use eduquiz_infrastructure::{ConfigLoader, InMemoryDocumentStore, SeedData, StaticIdentityProvider};
use eduquiz_presentation::{Cli, ConsoleFormatter, ConsoleNavigator, OutputFormat, QueryProgress};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    ConsoleFormatter::apply_color_preference(config.output.color);

    if cli.choices {
        print!("{}", ConsoleFormatter::format_choices());
        return Ok(());
    }

    // === Dependency Injection ===
    // Document store, optionally seeded from a data file
    let seed_path = cli
        .data
        .clone()
        .or_else(|| config.data.seed_file.as_ref().map(PathBuf::from));
    let store = Arc::new(match &seed_path {
        Some(path) => {
            let seed = SeedData::load(path)
                .with_context(|| format!("Failed to load seed data from {}", path.display()))?;
            InMemoryDocumentStore::from_seed(seed)
        }
        None => InMemoryDocumentStore::new(),
    });

    // Identity provider and the one-shot auth gate
    let email = cli.email.clone().or_else(|| config.identity.email.clone());
    let provider = StaticIdentityProvider::new(email.map(Identity::User));
    let mut auth_rx = provider.observe();
    let auth = await_auth_resolution(&mut auth_rx).await;

    let navigator = ConsoleNavigator;
    match decide_redirect(&auth) {
        RedirectDecision::ToLogin => {
            navigator.go_to_login();
            return Ok(());
        }
        RedirectDecision::Stay | RedirectDecision::Defer => {}
    }
    let identity = auth
        .identity()
        .cloned()
        .unwrap_or(Identity::Anonymous);
    info!("Signed in as {identity}");

    // Live score subscription for the signed-in identity
    let mut watcher = ScoreWatcher::new(store.clone());
    watcher
        .set_identity(Some(identity.clone()))
        .await
        .context("Failed to subscribe to the score document")?;
    let mut score_rx = watcher.observe();

    // Build the selection from the flags
    if cli.level.is_none() && cli.subject.is_none() {
        bail!("Select a level and subject. Use --choices to list the options.");
    }
    let mut selection = Selection::new();
    if let Some(level) = &cli.level {
        selection.set_level(level.parse::<Level>()?);
    }
    if let Some(track) = &cli.track {
        selection.set_track(track.parse::<Track>()?);
    }
    if let Some(subject) = &cli.subject {
        selection.set_subject(subject.clone());
    }
    if let (Some(level), Some(subject)) = (selection.level(), selection.subject())
        && !level.offers_subject(subject)
    {
        warn!("'{subject}' is not in the {level} subject list; looking it up anyway");
    }

    // Ctrl-C invalidates an in-flight resolution
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let use_case = ResolveQuestionUseCase::new(store.clone())
        .with_behavior(
            BehaviorConfig::new().with_surface_empty_sets(config.behavior.surface_empty_sets),
        )
        .with_cancellation_token(cancel.clone());

    let progress = if cli.quiet {
        QueryProgress::disabled()
    } else {
        QueryProgress::start("Looking up question set...")
    };
    let result = match cli.seed {
        Some(seed) => {
            use_case
                .execute_with_rng(&selection, &mut StdRng::seed_from_u64(seed))
                .await
        }
        None => use_case.execute(&selection).await,
    };
    progress.finish();

    match result {
        Ok(resolution) => {
            // The initial score snapshot arrives asynchronously; give it a beat
            let _ = tokio::time::timeout(Duration::from_millis(200), score_rx.changed()).await;
            let score = *score_rx.borrow_and_update();

            match cli.output {
                OutputFormat::Route => {
                    if let Some(route) = resolution.route() {
                        navigator.go_to_question(route);
                    }
                    // Empty set: completes with no navigation and no error
                }
                OutputFormat::Full => {
                    print!(
                        "{}",
                        ConsoleFormatter::format_full(&resolution, &identity, score)
                    );
                }
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_json(&resolution));
                }
            }
        }
        Err(error) => {
            eprintln!("{}", ConsoleFormatter::format_error(&error));
            watcher.release().await;
            std::process::exit(1);
        }
    }

    if cli.watch {
        info!("Watching score updates for {identity} (Ctrl-C to stop)");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                changed = score_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    if let Some(score) = *score_rx.borrow_and_update() {
                        println!("{}", ConsoleFormatter::format_score_update(&identity, score));
                    }
                }
            }
        }
    }

    watcher.release().await;
    Ok(())
}
