use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use codetrek_client::{GfgExtractor, LeetCodeExtractor, ReqwestFetcher};
use codetrek_core::presentation::HeatmapView;
use codetrek_core::{Provider, ProviderConfig, StatsService};

type Service = StatsService<ReqwestFetcher, GfgExtractor, LeetCodeExtractor>;

#[derive(Parser)]
#[command(name = "codetrek", version, about = "Coding-practice statistics from GeeksforGeeks and LeetCode")]
struct Cli {
    #[command(flatten)]
    provider: ProviderArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ProviderArgs {
    /// GeeksforGeeks profile base URL
    #[arg(long, global = true, env = "CODETREK_GFG_BASE_URL")]
    gfg_base_url: Option<String>,

    /// LeetCode profile base URL
    #[arg(long, global = true, env = "CODETREK_LEETCODE_BASE_URL")]
    leetcode_base_url: Option<String>,

    /// Per-provider fetch timeout in seconds
    #[arg(long, global = true, env = "CODETREK_FETCH_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

impl ProviderArgs {
    /// Provider settings with command-line values taking precedence over the environment.
    fn config(&self) -> Result<ProviderConfig> {
        let config = ProviderConfig::from_lookup(|key| match key {
            "CODETREK_GFG_BASE_URL" => self.gfg_base_url.clone(),
            "CODETREK_LEETCODE_BASE_URL" => self.leetcode_base_url.clone(),
            "CODETREK_FETCH_TIMEOUT_SECS" => self.timeout_secs.map(|s| s.to_string()),
            _ => std::env::var(key).ok(),
        })?;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape a GeeksforGeeks profile
    Gfg {
        /// Profile username (defaults to the demo user)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Scrape a LeetCode profile
    Leetcode {
        /// Profile username (defaults to the demo user)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Scrape both profiles and merge them
    Combined {
        #[arg(long)]
        gfg_username: Option<String>,

        #[arg(long)]
        leetcode_username: Option<String>,
    },

    /// Print the GeeksforGeeks activity heatmap, one row per day
    Heatmap {
        /// Profile username (defaults to the demo user)
        #[arg(short, long)]
        username: Option<String>,

        /// Write CSV instead of JSON
        #[arg(long, default_value_t = false)]
        csv: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("codetrek=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.provider.config()?;
    let service = build_service(config)?;

    match cli.command {
        Commands::Gfg { username } => cmd_gfg(&service, username.as_deref()).await,
        Commands::Leetcode { username } => cmd_leetcode(&service, username.as_deref()).await,
        Commands::Combined {
            gfg_username,
            leetcode_username,
        } => cmd_combined(&service, gfg_username.as_deref(), leetcode_username.as_deref()).await,
        Commands::Heatmap { username, csv } => cmd_heatmap(&service, username.as_deref(), csv).await,
    }
}

fn build_service(config: ProviderConfig) -> Result<Service> {
    let fetcher = ReqwestFetcher::new().context("Failed to create HTTP client")?;
    let gfg = GfgExtractor::new().context("Failed to build GeeksforGeeks extractor")?;
    Ok(StatsService::new(fetcher, gfg, LeetCodeExtractor::new(), config))
}

async fn cmd_gfg(service: &Service, username: Option<&str>) -> Result<()> {
    let username = service
        .config()
        .resolve_username(Provider::GeeksforGeeks, username);
    let report = service
        .gfg(&username)
        .await
        .with_context(|| format!("Failed to scrape GeeksforGeeks profile '{username}'"))?;

    let output = serde_json::json!({
        "stats": report.stats,
        "recentProblems": report.recent_problems,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn cmd_leetcode(service: &Service, username: Option<&str>) -> Result<()> {
    let username = service.config().resolve_username(Provider::LeetCode, username);
    let report = service
        .leetcode(&username)
        .await
        .with_context(|| format!("Failed to scrape LeetCode profile '{username}'"))?;

    println!("{}", serde_json::to_string_pretty(&report.stats)?);
    Ok(())
}

async fn cmd_combined(
    service: &Service,
    gfg_username: Option<&str>,
    leetcode_username: Option<&str>,
) -> Result<()> {
    let config = service.config();
    let gfg_username = config.resolve_username(Provider::GeeksforGeeks, gfg_username);
    let leetcode_username = config.resolve_username(Provider::LeetCode, leetcode_username);

    let report = service
        .combined(&gfg_username, &leetcode_username)
        .await
        .context("Both providers failed")?;

    if report.gfg.is_none() {
        tracing::warn!("GeeksforGeeks unavailable; its numbers are placeholders");
    }
    if report.leetcode.is_none() {
        tracing::warn!("LeetCode unavailable; its numbers are placeholders");
    }

    let output = serde_json::json!({
        "gfg": report.gfg,
        "leetcode": report.leetcode,
        "combined": report.combined,
        "recentProblems": report.recent_problems,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn cmd_heatmap(service: &Service, username: Option<&str>, csv: bool) -> Result<()> {
    let username = service
        .config()
        .resolve_username(Provider::GeeksforGeeks, username);
    let report = service
        .gfg(&username)
        .await
        .with_context(|| format!("Failed to scrape GeeksforGeeks profile '{username}'"))?;

    let view = HeatmapView::new(&report.stats.activity_history, Local::now().date_naive());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if csv {
        write_csv(&view, &mut out)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &view.days)?;
        writeln!(out)?;
    }
    Ok(())
}

/// One `date,count,level` row per day.
fn write_csv(view: &HeatmapView, out: impl Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for cell in &view.days {
        writer.serialize(cell)?;
    }
    writer.flush()?;
    Ok(())
}
