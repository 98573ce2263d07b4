// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::{self, paths, report, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", app::cli::HELP);
        return ExitCode::SUCCESS;
    }

    match try_main(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main(args: pico_args::Arguments) -> gallery_lens::error::Result<()> {
    let flags = Flags::parse(args)?;
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone())?;

    let store = app::run(&flags).await?;
    print!("{}", report::render(&store, flags.stats));
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
