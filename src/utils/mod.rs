use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};
use tokio::fs;

pub fn set_hook() {
    // setup a panic hook to easily exit the program on panic
    std::panic::set_hook(Box::new(|panic_info| {
        // print the panic message
        let message = if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else {
            format!("{panic_info:?}")
        };

        log::error!("{message}");

        #[cfg(debug_assertions)]
        log::debug!("{panic_info}");

        std::process::exit(1);
    }));

    ctrlc::set_handler(|| {
        // the cursor can be left hidden when a child is interrupted
        let term = console::Term::stdout();
        let _ = term.show_cursor();
        std::process::exit(0);
    })
    .ok();
}

pub fn logs(verbose: bool) {
    let colors = ColoredLevelConfig::new()
        .info(Color::BrightCyan)
        .error(Color::BrightRed)
        .warn(Color::BrightYellow)
        .debug(Color::BrightWhite);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level();

            match level {
                Level::Debug => out.finish(format_args!(
                    "{} [{}]: {}",
                    colors.color(Level::Debug).to_string().to_lowercase(),
                    record.target(),
                    message
                )),

                level => out.finish(format_args!(
                    "{}: {}",
                    colors.color(level).to_string().to_lowercase(),
                    message
                )),
            }
        })
        .level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| !matches!(metadata.level(), Level::Error | Level::Warn))
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .level(log::LevelFilter::Error)
                .level(log::LevelFilter::Warn)
                .chain(std::io::stderr()),
        )
        .apply()
        .ok();
}

#[cfg(windows)]
const SEPARATOR: &str = ";";

#[cfg(not(windows))]
const SEPARATOR: &str = ":";

pub async fn in_path(program: &str) -> bool {
    #[cfg(windows)]
    let program = &format!("{}.exe", program);

    let path = std::env::var("PATH").unwrap();
    let paths: Vec<&str> = path.split(SEPARATOR).collect();

    for path in paths {
        let to_try = format!("{path}/{program}");

        log::debug!("Checking if {to_try} exists");

        if fs::metadata(to_try).await.is_ok() {
            return true;
        }
    }

    false
}
