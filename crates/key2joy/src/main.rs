mod cli;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::unbounded;

use key2joy::app::{run, RunOutcome};
use key2joy::{logging, print_debug, print_error, print_info, print_warning};
use key2joy::{Error, RuntimeError};
use key2joy_gamepad::{
    find_device, spawn_reader, ChannelSource, VirtualGamepad, DEFAULT_DEVICE_NAME,
};
use key2joy_preset::load_preset;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    match start(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn start(cli: &Cli) -> Result<(), Error> {
    let preset = load_preset(&cli.preset, cli.input.as_deref())?;
    print_debug!(
        "loaded preset {} with {} mapped keys",
        cli.preset.display(),
        preset.len()
    );
    let input = preset.input().ok_or(RuntimeError::MissingInput)?;

    print_info!("searching device with name: '{input}'");
    let (path, device) = find_device(input).map_err(RuntimeError::from)?;
    print_info!("found device '{input}' at {}", path.display());

    let (stop_tx, stop_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .map_err(RuntimeError::from)?;

    let mut gamepad =
        VirtualGamepad::new(DEFAULT_DEVICE_NAME).map_err(RuntimeError::from)?;
    if let Some(node) = gamepad.device_path() {
        print_debug!("virtual gamepad node: {}", node.display());
    }
    print_info!("starting virtual gamepad");

    let events = spawn_reader(device).map_err(RuntimeError::from)?;
    let mut source = ChannelSource::new(events, stop_rx);

    match run(&mut source, &preset, &mut gamepad)? {
        RunOutcome::Cancelled => {
            print_info!("stopping virtual gamepad");
        }
        RunOutcome::Exhausted => {
            print_warning!("input device '{input}' stopped sending events");
        }
    }
    Ok(())
}
