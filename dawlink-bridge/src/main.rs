mod burst;

use std::fs::File;
use std::io;

use dawlink_core::{BatchReport, Config, Dispatcher};
use dawlink_display::{Display, DisplayTransport, Rect, TransmitBuffer};
use dawlink_model::ModelMirror;

use burst::Bursts;

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("dawlink")
        .join("dawlink.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path)
        .or_else(|_| File::create(std::env::temp_dir().join("dawlink.log")))
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("dawlink: logging disabled, cannot create log file: {}", e);
            return;
        }
    };

    if let Err(e) = WriteLogger::init(log_level, Config::default(), log_file) {
        eprintln!("dawlink: logging disabled: {}", e);
        return;
    }

    log::info!("dawlink-bridge starting (log level: {:?})", log_level);
}

/// Stand-in for the controller's USB endpoint. Frames are counted and logged.
#[derive(Default)]
struct LoggedTransport {
    frames: usize,
}

impl DisplayTransport for LoggedTransport {
    fn transmit(&mut self, frame: &[u8]) -> io::Result<()> {
        self.frames += 1;
        log::debug!(target: "display", "frame {} ({} bytes)", self.frames, frame.len());
        Ok(())
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let dump = args.iter().any(|a| a == "--dump");
    init_logging(verbose);

    let config = Config::load();
    let mut model = ModelMirror::new(config.bank_sizes());
    let dispatcher = Dispatcher::new(config.value_range());
    log::debug!(
        target: "config",
        "value resolution {}, banks {:?}",
        config.value_range().upper_bound(),
        config.bank_sizes()
    );

    let settings = config.display();
    let screen = Rect::screen(settings.width, settings.height);
    let mut display = Display::new(
        settings.id,
        TransmitBuffer::for_screen(settings.width, settings.height),
        LoggedTransport::default(),
    );
    display.show_clear(screen)?;

    let mut total = BatchReport::default();
    for burst in Bursts::new(io::stdin().lock()) {
        let report = dispatcher.dispatch_batch(&mut model, &burst?);
        if !report.is_clean() {
            log::warn!(
                target: "dispatch",
                "{} of {} lines rejected",
                report.errors.len(),
                report.lines
            );
        }
        total.merge(report);
        show_selection(&mut display, &model, screen)?;
    }

    log::info!(
        "applied {} of {} lines, {} frames sent",
        total.applied(),
        total.lines,
        display.transport().frames
    );

    if dump {
        match serde_json::to_string_pretty(&model) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("could not serialize mirror: {}", e),
        }
    }
    Ok(())
}

/// Paint the screen with the selected track's color, or clear it.
fn show_selection<T: DisplayTransport>(
    display: &mut Display<T>,
    model: &ModelMirror,
    screen: Rect,
) -> io::Result<()> {
    match model.selected_track() {
        Some(track) => {
            let (red, green, blue) = track.color.to_rgb8();
            display.show_fill(screen, red, green, blue)?;
        }
        None => {
            display.show_clear(screen)?;
        }
    }
    Ok(())
}
