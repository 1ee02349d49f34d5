mod config;
mod demo;

use std::process::ExitCode;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, AuthProvider, Clock, LocalAuthProvider, ProgressService};
use storage::{CourseCatalog, StaticCatalog, Storage};
use ui::{App, UiApp, build_app_context};

use crate::config::{ArgsError, Command, Settings, parse_command, print_usage};

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<dyn CourseCatalog> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn auth(&self) -> Arc<dyn AuthProvider> {
        self.services.auth()
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("GATEWAY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. under a test runner) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn build_services(settings: &Settings) -> Result<AppServices, Box<dyn std::error::Error>> {
    let clock = Clock::default_clock();
    let cache_lifetime = chrono::TimeDelta::try_seconds(settings.cache_secs).ok_or_else(|| {
        ArgsError::InvalidCacheSecs {
            raw: settings.cache_secs.to_string(),
        }
    })?;

    if settings.offline {
        let storage = Storage::with_progress(Arc::new(demo::demo_progress()?));
        tracing::info!(
            email = demo::DEMO_EMAIL,
            password = demo::DEMO_PASSWORD,
            "offline mode: sign in with the demo account"
        );
        return Ok(AppServices::with_cache_lifetime(
            &storage,
            Arc::new(demo::demo_auth()),
            clock,
            cache_lifetime,
        ));
    }

    let storage = Storage::remote(&settings.remote)?;
    tracing::info!(api_url = %settings.remote.base_url, "reading progress from remote api");
    Ok(AppServices::with_cache_lifetime(
        &storage,
        Arc::new(LocalAuthProvider::new()),
        clock,
        cache_lifetime,
    ))
}

fn launch_ui(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let services = build_services(settings)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("SHARE Gateway")
            .with_always_on_top(false),
    );

    tracing::info!(cache_secs = settings.cache_secs, "launching ui");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

/// Print the built-in catalog and check it. Returns the number of violations.
fn print_catalog() -> usize {
    let catalog = StaticCatalog::builtin();
    for course in catalog.all_courses() {
        println!(
            "{}\t{}\t{} lessons, {} quizzes",
            course.id(),
            course.title(),
            course.lessons().len(),
            course.quizzes().len()
        );
    }

    let report = catalog.validation_report();
    for (course_id, err) in &report {
        eprintln!("{course_id}: {err}");
    }
    if report.is_empty() {
        println!("catalog ok: {} course(s)", catalog.len());
    }
    report.len()
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let (cmd, rest) = parse_command(argv)?;

    let mut settings = Settings::from_env()?;
    settings.apply_flags(&mut rest.into_iter())?;
    setup_tracing(settings.verbose);

    match cmd {
        Command::Help => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        Command::Catalog => {
            if print_catalog() == 0 {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Ui => {
            launch_ui(&settings)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err}");
            if err.is::<ArgsError>() {
                print_usage();
            }
            ExitCode::from(2)
        }
    }
}
