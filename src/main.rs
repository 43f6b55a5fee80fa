// SPDX-License-Identifier: MPL-2.0
use iced_swipe::app::{self, Flags};

const HELP: &str = "\
iced_swipe - swipe-to-confirm demo

USAGE:
  iced_swipe [OPTIONS]

OPTIONS:
  --config-dir <PATH>   Directory holding settings.toml and exported diagnostics
  --ratio <FLOAT>       Confirm threshold of the first control (0.0 - 1.0)
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = args
        .opt_value_from_str::<_, String>("--config-dir")
        .unwrap_or_else(|err| {
            eprintln!("Ignoring --config-dir: {err}");
            None
        });
    let ratio = args
        .opt_value_from_str::<_, f32>("--ratio")
        .unwrap_or_else(|err| {
            eprintln!("Ignoring --ratio: {err}");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(Flags { config_dir, ratio })
}
