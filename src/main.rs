//! `totem` - Command-line tool for generating totem icons from Minecraft skins

use std::process::ExitCode;

use totem_renderer::cli;

fn main() -> ExitCode {
    cli::run()
}
