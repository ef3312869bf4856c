//! Reward allocation handler.

use std::path::Path;

use foretell_core::{AppConfig, Polarity};
use foretell_rewards::{allocate, Allocation, AllocationOptions, ChartMetric, SeriesOrder};

#[derive(Debug, Clone, Copy)]
pub(crate) struct AllocateArgs {
    pub pool: Option<f64>,
    pub metric: ChartMetric,
    pub order: SeriesOrder,
    pub json: bool,
}

/// Load a survey, distribute its pool, and print the reward table.
///
/// # Errors
///
/// Returns an error if the survey file cannot be loaded or the pool override
/// is negative or not finite.
pub(crate) fn run_allocate(
    config: &AppConfig,
    survey_path: &Path,
    args: &AllocateArgs,
) -> anyhow::Result<()> {
    let survey = foretell_core::load_survey(survey_path)?;

    let pool = match args.pool {
        Some(pool) if !pool.is_finite() || pool < 0.0 => {
            anyhow::bail!("--pool must be a non-negative number, got {pool}")
        }
        Some(pool) => pool,
        None => survey.pool_amount(config.default_reward_pool),
    };

    let options = AllocationOptions {
        chart_metric: args.metric,
        series_order: args.order,
        ..AllocationOptions::from_config(config)
    };
    let allocation = allocate(&survey.responses, pool, &options);

    tracing::info!(
        survey_id = %survey.survey_id,
        responses = allocation.processed.len(),
        pool,
        distributed = allocation.total_distributed(),
        "allocation complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&allocation)?);
    } else {
        print!("{}", render_table(&allocation)?);
    }
    Ok(())
}

/// Plain-text summary: per-group statistics followed by the reward table.
///
/// # Errors
///
/// Returns [`std::fmt::Error`] if writing to the output buffer fails.
pub(crate) fn render_table(allocation: &Allocation) -> Result<String, std::fmt::Error> {
    use std::fmt::Write as _;

    let mut out = String::new();
    if allocation.processed.is_empty() {
        out.push_str("no responses; nothing to distribute\n");
        return Ok(out);
    }

    writeln!(
        out,
        "{:<10}{:<8}{:<10}{:<10}GROUP REWARD",
        "GROUP", "COUNT", "MEDIAN", "MAX DIST"
    )?;
    for polarity in Polarity::ALL {
        let stats = allocation.stats.get(polarity);
        let median = stats
            .median
            .map_or_else(|| "-".to_string(), |m| format!("{m:.4}"));
        writeln!(
            out,
            "{:<10}{:<8}{:<10}{:<10.4}{:.2}",
            polarity.label(),
            stats.count,
            median,
            stats.max_dist,
            stats.group_reward
        )?;
    }

    out.push('\n');
    writeln!(
        out,
        "{:<40}{:<10}{:<10}{:<10}REWARD",
        "UID", "POLARITY", "SCORE", "SHARE %"
    )?;
    for row in allocation.by_reward_desc() {
        writeln!(
            out,
            "{:<40}{:<10}{:<10.4}{:<10.2}{:.2}",
            row.uid(),
            row.polarity().as_i8(),
            row.score(),
            row.pct_share,
            row.reward_amount
        )?;
    }
    writeln!(
        out,
        "\ntotal distributed: {:.2} of {:.2}",
        allocation.total_distributed(),
        allocation.total_pool
    )?;
    Ok(out)
}
