use chrono::Utc;
use log::LevelFilter;
use std::io::Write;

fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// Maps the number of `-v` flags to the level used for this crate.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger. `RUST_LOG` takes precedence over `verbosity`.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_env("RUST_LOG");
    } else {
        builder.filter(None, LevelFilter::Off);
        builder.filter(Some(env!("CARGO_CRATE_NAME")), level_for(verbosity));
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] {:<5} {}: {}",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        )
    });

    builder.try_init().ok();
}
