use clap::Parser;
use hawk_advisor::core::config::{self, CliOverrides, EnvOverrides, ResolvedConfig};
use hawk_advisor::core::dump::dump_screen;
use hawk_advisor::core::{App, Route, Screen};
use hawk_advisor::data::{BundledResources, DirResources, Memoized, ResourceSource};
use hawk_advisor::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hawkadvisor", about = "Browse majors, careers and electives")]
struct Args {
    /// Load resources from this directory instead of the bundled data
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Route to open first, e.g. "majors" or "career/Computer%20Science"
    #[arg(long)]
    start: Option<String>,

    /// Log level written to hawkadvisor.log
    #[arg(long)]
    log_level: Option<String>,

    /// Print the screen for this route as plain text and exit
    #[arg(long, value_name = "ROUTE")]
    dump: Option<String>,
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(config::DEFAULT_LOG_FILE) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn resource_source(config: &ResolvedConfig) -> Box<dyn ResourceSource> {
    match &config.data_dir {
        Some(dir) => Box::new(Memoized::new(DirResources::new(dir))),
        None => Box::new(BundledResources),
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let cli = CliOverrides {
        data_dir: args.data_dir,
        log_level: args.log_level,
        start_route: args.start,
    };
    let resolved = match config::resolve(&file_config, &EnvOverrides::from_env(), &cli) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    init_logging(&resolved);
    log::info!("HawkAdvisor starting up: {:?}", resolved);
    for warning in &resolved.warnings {
        log::warn!("{warning}");
        eprintln!("Warning: {warning}");
    }

    let source = resource_source(&resolved);

    if let Some(path) = args.dump {
        let route = match Route::from_path(&path) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
        };
        let screen = Screen::mount(route, source.as_ref());
        print!("{}", dump_screen(&screen));
        if screen.error().is_some() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let app = App::starting_at(resolved.start_route, source.as_ref());
    tui::run(app, source.as_ref())
}
