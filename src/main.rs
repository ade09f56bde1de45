//! Binary entry point: parse arguments and dispatch.

use sunbreak::args::{self, CliAction, ParsedArgs};
use sunbreak::constants::EXIT_FAILURE;
use sunbreak::{Sunbreak, log_end, log_error_exit};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    match parsed_args.action {
        CliAction::ShowVersion => args::display_version_info(),
        CliAction::ShowHelp => args::display_help(),
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Run {
            debug_enabled,
            config_dir,
        } => {
            if let Err(e) = Sunbreak::new(debug_enabled)
                .with_config_dir(config_dir)
                .run()
            {
                log_error_exit!("{}", e);
                for cause in e.chain().skip(1) {
                    eprintln!("  caused by: {cause}");
                }
                log_end!();
                std::process::exit(EXIT_FAILURE);
            }
        }
    }
}
