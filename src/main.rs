//! Scripted walkthrough of the navigation guard.
//!
//! Wires the guard to the YAML launch flag store and the in-memory session
//! provider and router, then plays a first launch: onboarding, sign-in,
//! browsing and sign-out. Pass `--reset-onboarding` to clear the persisted
//! flag first.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wishlist_navigation::adapters::{FileLaunchFlagStore, InMemoryEventBus, InMemoryRouter, InMemorySessionProvider};
use wishlist_navigation::application::{GuardRuntime, LaunchStateController, NavigationGuard, ShellView};
use wishlist_navigation::config::{AppConfig, LoggingConfig};
use wishlist_navigation::domain::foundation::{DomainError, EventEnvelope, UserId};
use wishlist_navigation::domain::navigation::{GuardPhaseChanged, Location, NavigationRedirected, Section};
use wishlist_navigation::ports::{EventHandler, EventSubscriber, LocationObserver, SessionProvider};

const SETTLE: Duration = Duration::from_millis(50);

/// Logs every guard notice, standing in for the client's toast layer.
struct NoticeLogger;

impl EventHandler for NoticeLogger {
    fn handle(&self, event: &EventEnvelope) -> Result<(), DomainError> {
        if event.event_type == NavigationRedirected::EVENT_TYPE {
            let redirect: NavigationRedirected = event.payload_as()?;
            info!(to = %redirect.to, rule = %redirect.rule, route = %redirect.route, "Notice: redirected");
        } else {
            let change: GuardPhaseChanged = event.payload_as()?;
            info!(from = %change.from, to = %change.to, "Notice: phase changed");
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NoticeLogger"
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.filter))?;

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let routes = config.routes.route_table()?;
    let store = Arc::new(FileLaunchFlagStore::new(&config.storage.launch_flag_path));
    info!(path = %store.path().display(), "Using launch flag file");

    let launch = LaunchStateController::new(store);
    let sessions = InMemorySessionProvider::new();
    let router = Arc::new(InMemoryRouter::new(routes.entry(Section::App).location()));

    let bus = Arc::new(InMemoryEventBus::new());
    bus.subscribe_all(
        &[NavigationRedirected::EVENT_TYPE, GuardPhaseChanged::EVENT_TYPE],
        Arc::new(NoticeLogger),
    );

    let guard = NavigationGuard::new(routes, router.clone()).with_event_publisher(bus.clone());
    let (views_tx, mut views) = watch::channel(ShellView::Loading);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let runtime = GuardRuntime::new(guard, launch.subscribe(), sessions.subscribe(), router.subscribe())
        .with_view_sender(views_tx);
    let guard_task = tokio::spawn(runtime.run(shutdown_rx));

    let view_task = tokio::spawn(async move {
        while views.changed().await.is_ok() {
            let view = *views.borrow_and_update();
            info!(view = ?view, "Shell");
        }
    });

    if let Err(e) = launch.hydrate().await {
        warn!(error = %e, "Continuing without a launch flag; the shell stays on its loading view");
    }
    if std::env::args().any(|arg| arg == "--reset-onboarding") {
        launch.reset().await?;
    }
    sessions.restore(None);
    tokio::time::sleep(SETTLE).await;

    if !launch.current().completed {
        info!(at = %router.current(), "User finishes onboarding");
        launch.complete_onboarding().await?;
        tokio::time::sleep(SETTLE).await;
    }

    info!(at = %router.current(), "User signs in");
    sessions.sign_in(UserId::new("demo-user")?);
    tokio::time::sleep(SETTLE).await;

    router.push(Location::new(["(tabs)", "wishlists"])?);
    tokio::time::sleep(SETTLE).await;

    info!(at = %router.current(), "User signs out");
    sessions.sign_out();
    tokio::time::sleep(SETTLE).await;

    let _ = shutdown_tx.send(true);
    let guard = guard_task.await?;
    view_task.abort();

    info!(
        location = %router.current(),
        phase = %guard.phase(),
        redirects = guard.redirect_count(),
        events = bus.event_count(),
        signed_in = sessions.current().has_identity(),
        "Walkthrough finished"
    );
    Ok(())
}
