use std::{fs, io, path::PathBuf, process, time::Duration};

use clap::Parser;
use promotion_admin::{
    console, AdminResult, FormController, PromotionBody, PromotionClient, PromotionClientConfig,
};

/// Interactive form for the Promotions REST service
#[derive(Parser, Debug)]
#[command(name = "promotion-form", version)]
struct Args {
    /// Base url of the Promotions service
    #[arg(long, env = "PROMOTIONS_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Request timeout in seconds, no timeout when omitted
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the service name and version before reading commands
    #[arg(long)]
    check: bool,

    /// Replace every stored promotion with the JSON array in this file
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> AdminResult<()> {
    let mut builder = PromotionClientConfig::builder(args.base_url);
    if let Some(secs) = args.timeout_secs {
        builder = builder.with_timeout(Duration::from_secs(secs));
    }
    let client = PromotionClient::new(builder.build()?);
    log::info!("using service at {}", client.config().base_url());

    if args.check {
        let info = client.index()?;
        println!("{} {}", info.name, info.version);
    }

    if let Some(path) = args.seed {
        let bodies: Vec<PromotionBody> = serde_json::from_slice(&fs::read(&path)?)?;
        let created = client.reset_with(&bodies)?;
        log::info!("loaded {} promotions from {}", created.len(), path.display());
        for c in created.iter() {
            let promotion = c.promotion();
            match c.location() {
                Some(location) => println!("{} {} -> {}", promotion.get_id(), promotion.get_name(), location),
                None => println!("{} {}", promotion.get_id(), promotion.get_name()),
            }
        }
    }

    let mut controller = FormController::new(client);
    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(&mut controller, stdin.lock(), stdout.lock())
}
