// SPDX-License-Identifier: MPL-2.0
use people_lens::app::{self, config, paths, Flags};

const HELP: &str = "\
PeopleLens - people gallery for a photo server

USAGE:
  people_lens [OPTIONS]

OPTIONS:
  --endpoint <URL>    GraphQL endpoint (overrides PEOPLE_LENS_ENDPOINT and settings.toml)
  --token <TOKEN>     Bearer token sent with every request
  --config-dir <DIR>  Directory holding settings.toml (overrides PEOPLE_LENS_CONFIG_DIR)
  -h, --help          Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        endpoint: args.opt_value_from_str("--endpoint")?,
        token: args.opt_value_from_str("--token")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone(), flags.endpoint.clone());

    let (config, _warning) = config::load();
    app::logging::init(Some(config.logging.filter_or_default()));

    app::run(flags)
}
