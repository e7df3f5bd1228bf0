// SPDX-License-Identifier: MPL-2.0
use photo_review::app::{self, paths, Flags};
use photo_review::logging;
use photo_review::media::NetworkImageLoader;
use std::sync::Arc;

const USAGE: &str = "\
Usage: photo_review [PHOTO_URL] [OPTIONS]

Options:
  --review FILE      JSON file with the review to show
  --photo INDEX      Open the review photo at INDEX (0-based) on startup
  --lang LOCALE      UI language (e.g. en-US, ru)
  --config-dir DIR   Directory holding settings.toml
  -h, --help         Print this help";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        std::process::exit(0);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let review_path = args.opt_value_from_str("--review")?;
    let photo_index = args.opt_value_from_str("--photo")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let photo_url = args
        .finish()
        .into_iter()
        .next()
        .and_then(|arg| arg.into_string().ok());

    Ok(Flags {
        lang,
        photo_url,
        review_path,
        photo_index,
        config_dir,
    })
}

fn main() -> iced::Result {
    logging::init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    if flags.photo_url.is_none() && flags.review_path.is_none() {
        eprintln!("Error: nothing to show, pass a PHOTO_URL or --review FILE\n\n{USAGE}");
        std::process::exit(2);
    }

    paths::init_cli_overrides(flags.config_dir.clone());

    let loader = match NetworkImageLoader::new() {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("Error: failed to initialize the image loader: {err}");
            std::process::exit(1);
        }
    };

    app::run(flags, Arc::new(loader))
}
