//! Vigorish CLI binary.
//!
//! Provides a command-line interface for the Vigorish signal engine.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::process;
use vigorish_combine::{
    AggregateResult, BonusInputs, ConfluenceLevel, Direction, DirectionalScore, SignalMap,
    WeightTable, aggregate, check_confluence,
};
use vigorish_odds::{OddsClient, OddsEvent};
use vigorish_signals::esoteric::{
    check_trigger, life_path, moon_reading, ruler_for, validate_immortal,
};
use vigorish_signals::{SignalCategory, available_signals, default_signals, evaluate_all};
use vigorish_traits::{GameContext, Sport};

#[derive(Parser)]
#[command(name = "vig")]
#[command(about = "Weighted signal engine for sports-betting confidence scores", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one game from supplied inputs
    Analyze {
        /// Sport (NBA, NFL, MLB, NHL, NCAAB)
        #[arg(short, long)]
        sport: Sport,

        /// Home team name
        #[arg(long)]
        home: String,

        /// Away team name
        #[arg(long)]
        away: String,

        /// Point spread from the home team's perspective
        #[arg(long)]
        spread: Option<f64>,

        /// American odds on the spread
        #[arg(long)]
        spread_odds: Option<i32>,

        /// Game total (over/under line)
        #[arg(long)]
        total: Option<f64>,

        /// Public bet share on the heavy side, 0-100
        #[arg(long)]
        public: Option<f64>,

        /// The public's heavy side is the favorite
        #[arg(long)]
        public_on_favorite: bool,

        /// Money share on the heavy side, 0-100
        #[arg(long)]
        money: Option<f64>,

        /// Ticket share on the heavy side, 0-100
        #[arg(long)]
        tickets: Option<f64>,

        /// Days of rest for the home team
        #[arg(long)]
        home_rest: Option<u32>,

        /// Days of rest for the away team
        #[arg(long)]
        away_rest: Option<u32>,

        /// Game date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// External research model score, 0-10
        #[arg(long)]
        research: Option<f64>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Score the live odds board for a sport
    Slate {
        /// Sport (NBA, NFL, MLB, NHL, NCAAB)
        #[arg(short, long)]
        sport: Sport,

        /// Markets to fetch, comma-separated
        #[arg(long, default_value = "spreads,totals")]
        markets: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List available signals
    Signals {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the default weight table
    Weights {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Today's esoteric energy reading
    Energy {
        /// Date to read (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Check a number against the Jarvis trigger table
    Trigger {
        /// The number to check
        value: u64,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[allow(clippy::too_many_lines)]
async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            sport,
            home,
            away,
            spread,
            spread_odds,
            total,
            public,
            public_on_favorite,
            money,
            tickets,
            home_rest,
            away_rest,
            date,
            research,
            format,
        } => {
            let mut ctx = GameContext::new(sport, home, away);
            ctx.spread = spread;
            ctx.spread_odds = spread_odds;
            ctx.total = total;
            ctx.public_pct = public;
            ctx.public_on_favorite = public.map(|_| public_on_favorite);
            ctx.money_pct = money;
            ctx.ticket_pct = tickets;
            ctx.home_rest_days = home_rest;
            ctx.away_rest_days = away_rest;
            ctx.game_date = date.as_deref().map(parse_date).transpose()?;
            ctx.research_score = research;

            analyze_game(&ctx, &format)?;
        }
        Commands::Slate {
            sport,
            markets,
            format,
        } => {
            score_slate(sport, &markets, &format).await?;
        }
        Commands::Signals { category, verbose } => {
            list_signals(category.as_deref(), verbose);
        }
        Commands::Weights { format } => {
            show_weights(&format)?;
        }
        Commands::Energy { date } => {
            let date = match date.as_deref() {
                Some(d) => parse_date(d)?,
                None => Utc::now().date_naive(),
            };
            show_energy(date);
        }
        Commands::Trigger { value } => {
            show_trigger(value);
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date string.
fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("Invalid date '{s}': {e}. Use YYYY-MM-DD."))
}

/// Category of a shipped signal, by registry name.
fn category_of(name: &str) -> Option<SignalCategory> {
    available_signals()
        .iter()
        .find(|info| info.name == name)
        .map(|info| info.category)
}

/// Run every signal over a context and aggregate.
fn score_context(ctx: &GameContext, weights: &WeightTable) -> (SignalMap, AggregateResult) {
    let outputs = evaluate_all(&default_signals(), ctx);
    let bonus = BonusInputs {
        has_market_odds: ctx.has_market_odds(),
    };
    let result = aggregate(&outputs, weights, &bonus);
    (outputs, result)
}

/// The informational esoteric-edge confluence readout.
///
/// Blends the esoteric signals on their own and compares that score to the
/// headline confidence. Both scores back the same analyzed side, so this
/// reads agreement of magnitude, not direction.
fn esoteric_confluence(
    outputs: &SignalMap,
    result: &AggregateResult,
    weights: &WeightTable,
) -> (i32, ConfluenceLevel) {
    let esoteric: SignalMap = outputs
        .iter()
        .filter(|(name, _)| category_of(name) == Some(SignalCategory::Esoteric))
        .map(|(name, output)| (name.clone(), output.clone()))
        .collect();
    let edge = aggregate(&esoteric, weights, &BonusInputs::default());

    let main = DirectionalScore::new(f64::from(result.confidence), Direction::Home);
    let other = DirectionalScore::new(f64::from(edge.confidence), Direction::Home);
    (edge.confidence, check_confluence(&main, &other))
}

fn analyze_game(ctx: &GameContext, format: &str) -> Result<()> {
    let weights = WeightTable::default();
    let (outputs, result) = score_context(ctx, &weights);
    let (edge, confluence) = esoteric_confluence(&outputs, &result, &weights);

    if format == "json" {
        let json = serde_json::json!({
            "context": ctx,
            "signals": outputs,
            "result": result,
            "esoteric_edge": edge,
            "confluence": confluence,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       Game Analysis                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Matchup:  {} @ {}", ctx.away_team, ctx.home_team);
    println!("Sport:    {}", ctx.sport);
    if let Some(spread) = ctx.spread {
        let odds = ctx
            .spread_odds
            .map(|o| format!(" ({o})"))
            .unwrap_or_default();
        println!("Spread:   {spread}{odds}");
    }
    if let Some(date) = ctx.game_date {
        println!("Date:     {date}");
    }
    println!();

    // Rank the full signal board by weighted impact
    let mut rows: Vec<(&str, f64, u32, &str)> = outputs
        .iter()
        .map(|(name, output)| {
            (
                name.as_str(),
                output.score,
                weights.weight(name),
                output.contribution.as_str(),
            )
        })
        .collect();
    rows.sort_by(|a, b| {
        (b.1 * f64::from(b.2))
            .partial_cmp(&(a.1 * f64::from(a.2)))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    println!("{:<16} {:>6} {:>7}  Contribution", "Signal", "Score", "Weight");
    println!("{}", "─".repeat(72));
    for (name, score, weight, contribution) in rows {
        println!("{name:<16} {score:>6.1} {weight:>7}  {contribution}");
    }
    println!();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Confidence:     {}", result.confidence);
    println!("Tier:           {}", result.tier);
    println!("Recommendation: {}", result.recommendation);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!("Top signals:");
    for ranked in &result.top_signals {
        println!(
            "  {:<16} impact {:>7.1}  ({})",
            ranked.name, ranked.impact, ranked.contribution
        );
    }
    println!();

    println!("Esoteric edge:  {edge} ({confluence} confluence)");
    println!();

    Ok(())
}

async fn score_slate(sport: Sport, markets: &str, format: &str) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        Slate Scores                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let client = match OddsClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            println!("Odds feed unavailable: {e}");
            println!("No events to score.\n");
            return Ok(());
        }
    };

    println!("Fetching {sport} board ({markets})...\n");

    let events = match client.odds(sport, markets).await {
        Ok(events) => events,
        Err(e) => {
            println!("Could not fetch the board: {e}");
            println!("No events to score.\n");
            return Ok(());
        }
    };

    if events.is_empty() {
        println!("No events on the board.\n");
        return Ok(());
    }

    let weights = WeightTable::default();
    let mut scored: Vec<(OddsEvent, AggregateResult)> = events
        .into_iter()
        .map(|event| {
            let ctx = context_from_event(sport, &event);
            let (_, result) = score_context(&ctx, &weights);
            (event, result)
        })
        .collect();

    // Best bets first
    scored.sort_by(|a, b| {
        b.1.confidence
            .cmp(&a.1.confidence)
            .then_with(|| a.0.commence_time.cmp(&b.0.commence_time))
    });

    if format == "json" {
        let json: Vec<_> = scored
            .iter()
            .map(|(event, result)| {
                serde_json::json!({
                    "home_team": event.home_team,
                    "away_team": event.away_team,
                    "commence_time": event.commence_time,
                    "result": result,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!(
        "{:<44} {:>7} {:>11}  {:<20}",
        "Matchup", "Spread", "Confidence", "Tier"
    );
    println!("{}", "─".repeat(88));
    for (event, result) in &scored {
        let matchup = format!("{} @ {}", event.away_team, event.home_team);
        let spread = event
            .home_spread()
            .map(|(point, _)| format!("{point}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{matchup:<44} {spread:>7} {:>11}  {:<20}",
            result.confidence, result.tier
        );
    }
    println!();
    println!("{} events scored.\n", scored.len());

    Ok(())
}

/// Build the signal context for one odds board event.
fn context_from_event(sport: Sport, event: &OddsEvent) -> GameContext {
    let mut ctx = GameContext::new(sport, event.home_team.clone(), event.away_team.clone());
    ctx.game_date = Some(event.commence_time.date_naive());
    if let Some((point, price)) = event.home_spread() {
        ctx.spread = Some(point);
        ctx.spread_odds = Some(price);
    }
    ctx.total = event.total_line();
    ctx
}

fn list_signals(category: Option<&str>, verbose: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Available Signals                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let weights = WeightTable::default();
    let categories = [
        (SignalCategory::Market, "Market"),
        (SignalCategory::Situational, "Situational"),
        (SignalCategory::Esoteric, "Esoteric"),
        (SignalCategory::Protocol, "Protocol"),
    ];

    for (cat, cat_name) in categories {
        if let Some(filter) = category
            && !cat_name.to_lowercase().contains(&filter.to_lowercase())
        {
            continue;
        }

        let entries: Vec<_> = available_signals()
            .iter()
            .filter(|info| info.category == cat)
            .collect();
        if entries.is_empty() {
            continue;
        }

        println!("{cat_name}:");
        println!("{}", "-".repeat(60));

        for info in entries {
            if verbose {
                println!(
                    "  {:<18} (weight {:>2}) - {}",
                    info.name,
                    weights.weight(info.name),
                    info.description
                );
            } else {
                println!("  {}", info.name);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for weights and descriptions.\n");
    }
}

fn show_weights(format: &str) -> Result<()> {
    let weights = WeightTable::default();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&weights)?);
        return Ok(());
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Default Weight Table                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mut entries: Vec<(&str, u32)> = weights.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    println!("{:<22} {:>6}", "Signal", "Weight");
    println!("{}", "─".repeat(30));
    for (name, weight) in entries {
        println!("{name:<22} {weight:>6}");
    }
    println!();
    println!("Unlisted signals default to weight 1.\n");

    Ok(())
}

fn show_energy(date: NaiveDate) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       Esoteric Energy                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let moon = moon_reading(date);
    let path = life_path(date);
    let ruler = ruler_for(date);
    let master_day = matches!(path, 11 | 22 | 33);
    let power_day = matches!(path, 8 | 11 | 22);

    println!("Date:        {date}");
    println!(
        "Moon:        {} ({:.1} days, {:.0}% of cycle)",
        moon.phase, moon.age_days, moon.cycle_pct
    );
    println!("Life path:   {path}{}", if master_day { " (MASTER NUMBER)" } else { "" });
    println!("Ruler:       {} - {}", ruler.planet, ruler.energy);
    println!();

    if power_day {
        println!("POWER DAY - numerology favors decisive action.");
    } else {
        println!("Ordinary energy. Lean on the market signals.");
    }
    println!();
}

fn show_trigger(value: u64) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Jarvis Trigger Check                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let check = check_trigger(value);

    println!("Value:     {value}");
    println!("Triggered: {}", if check.triggered { "YES" } else { "no" });
    if let Some(tier) = check.highest_tier {
        println!("Tier:      {tier}");
    }
    println!("Boost:     {}", check.total_boost);
    println!();

    if check.details.is_empty() {
        println!("No trigger checks fired.");
    } else {
        println!("Checks fired:");
        for detail in &check.details {
            println!("  - {detail}");
        }
    }
    println!();

    let immortal = validate_immortal();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("THE IMMORTAL (2178)");
    println!(
        "  {} × 4 = {} (its reversal)",
        immortal.number, immortal.reversal
    );
    println!(
        "  {} × {} = {} = 66⁴",
        immortal.number, immortal.reversal, immortal.product
    );
    println!(
        "  Status: {}",
        if immortal.validated {
            "IMMORTAL CONFIRMED"
        } else {
            "VALIDATION FAILED"
        }
    );
    println!();
}
