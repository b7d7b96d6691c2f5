use std::process;

use lg_brightness::cli::{self, Invocation};
use lg_brightness::{device, tui, usb, Error, Interrupt, MonitorConfig, Session};

fn print_help() {
    println!("{}", cli::USAGE);
}

fn run(invocation: Invocation) -> lg_brightness::Result<()> {
    let interrupt = Interrupt::install();
    let config = MonitorConfig::default();
    let monitors = device::find_supported_devices(usb::devices()?, &config);

    let mut session = match Session::open(&monitors, &config) {
        Ok(session) => session,
        Err(Error::NoMonitors) => {
            println!("Could not find any LG monitors.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    match invocation {
        Invocation::Once(direction) => {
            let percent = session.run_once_interruptible(direction, &interrupt)?;
            session.close();
            println!("{}%", percent);
        }
        Invocation::Interactive => {
            tui::run_interactive(&mut session, &interrupt)?;
            session.close();
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let invocation = match cli::parse_invocation(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(usage) => {
            if usage.too_many {
                println!("lg cannot be called with more than one argument.");
            }
            print_help();
            process::exit(1);
        }
    };

    if let Err(e) = run(invocation) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
