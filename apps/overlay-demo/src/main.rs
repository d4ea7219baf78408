mod host;

use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use swipesheet_foundation::{PointerEvent, ScrollSurface};
use swipesheet_runtime_std::{StdClock, StdScheduler};
use swipesheet_ui::{Collaborators, OverlayConfig, OverlayScreen, StaticCatalog};

use host::LoggingHost;

const BUNDLED_CATALOG: &str = include_str!("../assets/songs.json");
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 600;

#[derive(Parser)]
#[command(name = "overlay-demo")]
#[command(about = "Mount the overlay and play a scripted drag", long_about = None)]
struct Cli {
    /// Item id from the route; unknown or malformed ids show the first entry
    item: Option<String>,

    /// Vertical drag distance; negative values drag upward
    #[arg(short, long, default_value_t = 150.0, allow_hyphen_values = true)]
    drag_distance: f32,

    /// JSON catalog to load instead of the bundled one
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn load_catalog(path: Option<&Path>) -> Result<StaticCatalog> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?,
        None => BUNDLED_CATALOG.to_string(),
    };
    StaticCatalog::from_json(&json).context("failed to load catalog")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Cli::parse();
    let catalog = load_catalog(args.catalog.as_deref())?;

    let host = Rc::new(LoggingHost::default());
    let collaborators = Collaborators {
        navigator: host.clone(),
        haptics: host.clone(),
        scale_consumer: host.clone(),
        status_bar: host.clone(),
    };
    let scheduler = Arc::new(StdScheduler::new());
    let clock = StdClock::new();
    let surface = ScrollSurface::new(800.0, 1200.0);

    let mut screen = OverlayScreen::builder(collaborators)
        .config(OverlayConfig::default())
        .scheduler(scheduler.clone())
        .scroll_surface(surface)
        .mount(args.item.as_deref(), &catalog)?;

    let item = screen.item();
    println!("=== Swipesheet overlay ===");
    println!("Now playing: {} by {} (id {})", item.title, item.artist, item.id);
    println!("Dragging {:.0} units", args.drag_distance);
    println!();

    let origin = 100.0;
    let steps = (args.drag_distance.abs() / 12.0).ceil().max(1.0) as usize;
    let step = args.drag_distance / steps as f32;
    let mut y = origin;
    let mut script = Vec::with_capacity(steps + 2);
    script.push(PointerEvent::down(1, 0.0, y));
    for _ in 0..steps {
        y += step;
        script.push(PointerEvent::moved(1, 0.0, y));
    }
    script.push(PointerEvent::up(1, 0.0, y));

    let mut script = script.into_iter();
    for frame in 0..MAX_FRAMES {
        if let Some(event) = script.next() {
            screen.on_pointer_event(&event);
        }
        let style = screen.frame(clock.frame_time_nanos());
        println!(
            "frame {frame:3}: translate_y {:7.2} opacity {:.2} scale {:.3} phase {:?}",
            style.translate_y,
            style.opacity,
            screen.signals().scale(),
            screen.phase(),
        );

        let busy = scheduler.take_frame_request() || screen.needs_frame();
        if host.navigated() || (script.len() == 0 && !busy) {
            break;
        }
        std::thread::sleep(FRAME_INTERVAL);
    }

    screen.unmount();
    println!();
    println!(
        "Navigated back: {}; ancestor scale after teardown: {:.2}",
        host.navigated(),
        host.scale()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_drag_150_with_bundled_catalog() {
        let cli = Cli::try_parse_from(["overlay-demo"]).unwrap();
        assert_eq!(cli.item, None);
        assert_eq!(cli.drag_distance, 150.0);
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn named_options_are_parsed() {
        let cli = Cli::try_parse_from([
            "overlay-demo",
            "2",
            "--drag-distance",
            "-40",
            "--catalog",
            "songs.json",
        ])
        .unwrap();
        assert_eq!(cli.item.as_deref(), Some("2"));
        assert_eq!(cli.drag_distance, -40.0);
        assert_eq!(cli.catalog, Some(PathBuf::from("songs.json")));
    }

    #[test]
    fn help_and_unknown_flags_do_not_run_the_demo() {
        let help = Cli::try_parse_from(["overlay-demo", "--help"]).err().unwrap();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);

        let unknown = Cli::try_parse_from(["overlay-demo", "--speed", "3"]).err().unwrap();
        assert_eq!(unknown.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = load_catalog(None).unwrap();
        assert!(!catalog.is_empty());
    }
}
