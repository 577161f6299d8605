// SPDX-License-Identifier: MPL-2.0
use galeria::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        collection: args.opt_value_from_str("--collection").unwrap_or(None),
    };

    app::run(flags)
}
