//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use hufzip::compression::{compress::compress, decompress::decompress};
use hufzip::tools::cli::{hzopts_init, Mode};
use hufzip::tools::timer::Timer;

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }

    let options = hzopts_init();
    let mut timer = Timer::new();

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress(&options, &mut timer),
        Mode::Unzip => decompress(&options, &mut timer),
    };

    match result {
        Ok(report) => {
            report.print(options.verbose);
            info!("Done.\n");
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
