use asciify::cli::Args;
use asciify::config::Config;
use asciify::{convert_file, Error};
use clap::Parser;

fn init_logger(args: &Args) {
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<(), Error> {
    let config = Config::load_optional(args.config.as_deref())?;
    let options = args.render_options(&config);
    log::debug!("Render options: {:?}", options);

    let canvas = convert_file(&args.file, &options)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    canvas.write_to(&mut out, options.color)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(&args);

    match run(&args) {
        Ok(()) => {}
        Err(Error::StepTooSmall {
            axis,
            extent,
            count,
        }) => {
            log::info!(
                "Cannot split {} pixels along {} into {} chunks",
                extent,
                axis,
                count
            );
            println!("Step too small");
        }
        Err(e) if e.is_graceful() => {
            log::debug!("Output closed early: {}", e);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
