//! Command Line Interface for the Monte Carlo equity risk simulator.
use anyhow::Result;
use clap::{Parser, Subcommand};
use eqsim_data::{MarketDataProvider, providers::CsvDirectoryProvider};
use eqsim_simulation::monte_carlo::{SimulationRequest, run_simulation};

#[derive(Parser)]
#[command(name = "eqsim")]
#[command(about = "Monte Carlo risk simulator for single-equity positions", long_about = None)]
struct Cli {
    /// Directory holding one <SYMBOL>.csv file per instrument
    #[arg(short, long, default_value = "data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the price history that would feed the estimator
    History {
        /// Stock symbol (e.g., AAPL)
        #[arg(short, long)]
        symbol: String,

        /// Years of history to load
        #[arg(short, long, default_value_t = 5.0)]
        years: f64,
    },
    /// Estimate parameters and simulate the terminal price distribution
    Simulate {
        /// Stock symbol (e.g., AAPL)
        #[arg(short, long)]
        symbol: String,

        /// Years of history used for estimation
        #[arg(short, long, default_value_t = 5.0)]
        years: f64,

        /// Simulation horizon in years
        #[arg(long, default_value_t = 1.0)]
        horizon: f64,

        /// Time steps across the horizon
        #[arg(long, default_value_t = 252)]
        steps: usize,

        /// Number of simulated paths
        #[arg(short, long, default_value_t = 10_000)]
        n_paths: usize,

        /// Position size in shares (negative for short)
        #[arg(short, long, default_value_t = 200.0)]
        position: f64,

        /// RNG seed for reproducible runs
        #[arg(long, default_value_t = 123)]
        seed: u64,

        /// Print the full report as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
}

fn lookback_days(years: f64) -> u32 {
    (years * 365.0).round() as u32
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let provider = CsvDirectoryProvider::new(&cli.data_dir);

    match &cli.command {
        Commands::History { symbol, years } => {
            let series = provider
                .price_history(symbol, lookback_days(*years))
                .await?;

            println!(
                "✅ Loaded {} closing prices for {}:",
                series.len(),
                symbol.trim().to_uppercase()
            );
            println!("{:<12} | {:<12}", "Date", "Close");
            println!("{}", "-".repeat(27));
            for point in series.points() {
                println!("{:<12} | {:<12.4}", point.date.to_string(), point.close);
            }
        }
        Commands::Simulate {
            symbol,
            years,
            horizon,
            steps,
            n_paths,
            position,
            seed,
            json,
        } => {
            let symbol = symbol.trim().to_uppercase();

            println!("🔍 Loading {} years of history for {}...", years, symbol);
            let series = provider
                .price_history(&symbol, lookback_days(*years))
                .await?;

            let request = SimulationRequest::new()
                .with_horizon_years(*horizon)
                .with_steps(*steps)
                .with_n_paths(*n_paths)
                .with_position_size(*position)
                .with_seed(*seed);

            println!("🚀 Simulating {} paths over {} steps...", n_paths, steps);
            let report = run_simulation(&symbol, &series, &request)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!("\n📊 Simulation Results for {}", report.symbol);
            println!("════════════════════════════════════");
            println!("Spot Price:      ${:.2}", report.spot_price);
            println!("Annual Drift:    {:.2}%", report.mu_annual * 100.0);
            println!("Annual Vol:      {:.2}%", report.sigma_annual * 100.0);
            println!("------------------------------------");
            println!("Mean Return:     {:.2}%", report.mean_return * 100.0);
            println!("Return Std:      {:.2}%", report.std_return * 100.0);
            println!("VaR 95% (ret):   {:.2}%", report.var_95_return * 100.0);
            println!("ES 95% (ret):    {:.2}%", report.es_95_return * 100.0);
            println!("------------------------------------");
            println!("Position:        {} shares", position);
            println!("Mean PnL:        ${:.2}", report.mean_pnl);
            println!("PnL Std:         ${:.2}", report.std_pnl);
            println!("VaR 95% (PnL):   ${:.2}", report.var_95_pnl);
            println!("ES 95% (PnL):    ${:.2}", report.es_95_pnl);
            println!("════════════════════════════════════");
        }
    }

    Ok(())
}
