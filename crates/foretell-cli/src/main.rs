mod allocate;
mod classify;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use foretell_rewards::{ChartMetric, SeriesOrder};

#[derive(Debug, Parser)]
#[command(name = "foretell")]
#[command(about = "Foretell sentiment classification and reward allocation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a piece of text into polarity, score, and intensity
    Classify {
        /// Text to classify
        text: String,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a new response against a survey and print the entry it would create
    Submit {
        /// Survey file (.json or .yaml)
        survey: PathBuf,

        /// Response text
        #[arg(long)]
        answer: String,

        /// Respondent id; omitted for anonymous surveys
        #[arg(long)]
        uid: Option<String>,
    },
    /// Compute the reward distribution for a survey file
    Allocate {
        /// Survey file (.json or .yaml)
        survey: PathBuf,

        /// Override the survey's reward pool
        #[arg(long)]
        pool: Option<f64>,

        /// Value plotted on the combined chart
        #[arg(long, value_enum, default_value_t = MetricArg::Reward)]
        metric: MetricArg,

        /// Ordering of the per-group mini-series
        #[arg(long, value_enum, default_value_t = OrderArg::Score)]
        order: OrderArg,

        /// Print the full allocation (stats, table, chart, series) as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MetricArg {
    Reward,
    Pct,
}

impl From<MetricArg> for ChartMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Reward => ChartMetric::RewardAmount,
            MetricArg::Pct => ChartMetric::PctShare,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Score,
    Intensity,
}

impl From<OrderArg> for SeriesOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Score => SeriesOrder::Score,
            OrderArg::Intensity => SeriesOrder::Intensity,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = foretell_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Classify { text, json }) => {
            classify::run_classify(&config, &text, json).await?;
        }
        Some(Commands::Submit {
            survey,
            answer,
            uid,
        }) => {
            classify::run_submit(&config, &survey, &answer, uid.as_deref()).await?;
        }
        Some(Commands::Allocate {
            survey,
            pool,
            metric,
            order,
            json,
        }) => {
            let options = allocate::AllocateArgs {
                pool,
                metric: metric.into(),
                order: order.into(),
                json,
            };
            allocate::run_allocate(&config, &survey, &options)?;
        }
        Some(Commands::Config) => println!("{config:#?}"),
        None => println!("foretell: run with --help to list commands"),
    }

    Ok(())
}
