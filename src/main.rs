use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use garage_advisor::config::AppConfig;
use garage_advisor::error::AppError;
use garage_advisor::telemetry;
use garage_advisor::workflows::parking::{
    compare_evaluators, DecisionTreeEvaluator, Recommendation, TableDrivenEvaluator,
    TicketEvaluator, TicketRequest,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Garage Advisor",
    about = "Recommend a garage placement and price estimate for an arriving car",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    ticket: TicketArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run both evaluators on one request and report whether they agree (default command)
    Compare(TicketArgs),
    /// Run a single evaluator and print the ticket as JSON
    Recommend {
        #[command(flatten)]
        ticket: TicketArgs,
        /// Evaluator used to produce the ticket
        #[arg(long, value_enum, default_value_t = EvaluatorKind::Table)]
        evaluator: EvaluatorKind,
    },
}

#[derive(Args, Debug)]
struct TicketArgs {
    /// Car model name as listed in the catalog (lowercase)
    #[arg(long, default_value = "pirate")]
    model: String,
    /// Make year of the car
    #[arg(long, default_value_t = 1902)]
    year: u16,
    /// Entry time (YYYY-MM-DDTHH:MM)
    #[arg(long, value_parser = parse_entry_time, default_value = "2013-01-18T01:30")]
    entry: NaiveDateTime,
}

impl TicketArgs {
    fn into_request(self) -> TicketRequest {
        TicketRequest::new(self.entry, self.model, self.year)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum EvaluatorKind {
    Tree,
    Table,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "garage advisor starting");

    let command = cli.command.unwrap_or(Command::Compare(cli.ticket));

    match command {
        Command::Compare(args) => run_compare(args.into_request()),
        Command::Recommend { ticket, evaluator } => run_recommend(ticket.into_request(), evaluator),
    }
}

fn parse_entry_time(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DDTHH:MM ({err})"))
}

fn run_compare(request: TicketRequest) -> Result<(), AppError> {
    let tree = DecisionTreeEvaluator::new();
    let table = TableDrivenEvaluator::initialize();

    let comparison = compare_evaluators(&request, &tree, &table)?;
    info!(
        model = %request.model,
        entry = %request.entry_time,
        agrees = comparison.agrees(),
        "compared evaluators"
    );

    println!(
        "Request: {} ({}) entering at {}",
        request.model, request.make_year, request.entry_time
    );
    for (name, response) in [
        (comparison.left, &comparison.left_response),
        (comparison.right, &comparison.right_response),
    ] {
        println!("\n{name}");
        println!("  car: {} ({})", response.car.car_type, response.car.car_class());
        render_recommendation("first choice", &response.primary);
        render_recommendation("second choice", &response.secondary);
    }

    if comparison.agrees() {
        println!("\nEvaluators agree.");
    } else {
        let slots = comparison
            .diverging_slots
            .iter()
            .map(|slot| slot.0.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("\nEvaluators diverge on slot(s): {slots}");
    }

    Ok(())
}

fn run_recommend(request: TicketRequest, kind: EvaluatorKind) -> Result<(), AppError> {
    let evaluator: Box<dyn TicketEvaluator> = match kind {
        EvaluatorKind::Tree => Box::new(DecisionTreeEvaluator::new()),
        EvaluatorKind::Table => Box::new(TableDrivenEvaluator::initialize()),
    };

    let response = evaluator.evaluate(&request)?;
    info!(evaluator = evaluator.name(), model = %request.model, "issued ticket");

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn render_recommendation(label: &str, recommendation: &Recommendation) {
    let estimate = &recommendation.estimate;
    println!(
        "  {label}: {} for {}h at {}/h (est. {})",
        recommendation.placement,
        estimate.hours,
        estimate.hourly_rate.round_dp(2),
        estimate.estimated_total().round_dp(2)
    );
}
