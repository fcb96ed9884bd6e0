use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLimited { raw: String },
    InvalidTitle { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLimited { raw } => write!(f, "invalid --limited value: {raw}"),
            ArgsError::InvalidTitle { raw } => write!(f, "invalid --title value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    limit_checked_on_launch: bool,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> String {
        self.title.clone()
    }

    fn limit_checked_on_launch(&self) -> bool {
        self.limit_checked_on_launch
    }
}

struct Args {
    title: String,
    limited: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--limited <bool>] [--title <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --limited false");
    eprintln!("  --title Timebox");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TIMEBOX_LIMITED, TIMEBOX_TITLE");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut title = std::env::var("TIMEBOX_TITLE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "Timebox".to_string());
        let mut limited = std::env::var("TIMEBOX_LIMITED")
            .ok()
            .and_then(|value| parse_bool(&value))
            .unwrap_or(false);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--limited" => {
                    let value = require_value(args, "--limited")?;
                    limited =
                        parse_bool(&value).ok_or(ArgsError::InvalidLimited { raw: value })?;
                }
                "--title" => {
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidTitle { raw: value });
                    }
                    title = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { title, limited })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: parsed.title.clone(),
        limit_checked_on_launch: parsed.limited,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(parsed.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
