//! Command-line argument parsing.
//!
//! sunbreak takes no arguments in normal use. The flags below exist for
//! troubleshooting: a debug mode, an alternate configuration directory, and
//! the usual help and version output. Anything unrecognized prints help.

/// What the process should do after parsing arguments.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the schedule loop
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to an unknown or malformed argument and exit with failure
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse arguments, skipping the program name.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut config_dir: Option<String> = None;

        let mut args_iter = args.into_iter().skip(1).map(|s| s.as_ref().to_string());

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "--help" | "-h" => {
                    return ParsedArgs {
                        action: CliAction::ShowHelp,
                    };
                }
                "--version" | "-V" | "-v" => {
                    return ParsedArgs {
                        action: CliAction::ShowVersion,
                    };
                }
                "--debug" | "-d" => debug_enabled = true,
                "--config" | "-c" => match args_iter.next() {
                    Some(dir) if !dir.starts_with('-') => config_dir = Some(dir),
                    _ => {
                        log_warning!("{} requires a directory argument", arg);
                        return ParsedArgs {
                            action: CliAction::ShowHelpDueToError,
                        };
                    }
                },
                unknown => {
                    log_warning!("Unknown argument: {}", unknown);
                    return ParsedArgs {
                        action: CliAction::ShowHelpDueToError,
                    };
                }
            }
        }

        ParsedArgs {
            action: CliAction::Run {
                debug_enabled,
                config_dir,
            },
        }
    }

    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using the logger.
pub fn display_version_info() {
    log_version!();
    log_block_start!("{}", env!("CARGO_PKG_DESCRIPTION"));
    log_end!();
}

/// Displays the help message using the logger.
pub fn display_help() {
    log_version!();
    log_block_start!("{}", env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("sunbreak [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Read sunbreak.toml from a custom directory");
    log_indented!("-d, --debug            Print solar angles and break timing each tick");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Requires:");
    log_indented!("xrandr                 Monitor discovery and screen blanking");
    log_indented!("sct                    Color temperature control");
    log_end!();
}
