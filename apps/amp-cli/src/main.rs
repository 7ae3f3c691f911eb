use amp_core::{CoreError, Dimension, Measurement, Tolerances, catalog_entries, parse_unit};
use amp_relations::{ArithmeticPath, Engine, RegistryBuilder, RelationError, RelationRegistry};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "amp-cli")]
#[command(about = "Ampere CLI - multiply and divide physical measurements", long_about = None)]
struct Cli {
    /// Relative tolerance for validating preferred unit mappings
    #[arg(long, global = true, default_value_t = Tolerances::default().rel)]
    rel_tol: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiply two measurements, e.g. `multiply 60 km/h 2 h`
    #[command(allow_negative_numbers = true)]
    Multiply {
        a_value: f64,
        a_unit: String,
        b_value: f64,
        b_unit: String,
        /// Show which unit mapping was used
        #[arg(long)]
        explain: bool,
    },
    /// Divide a product by one of its factors, e.g. `divide 120 km 2 h`
    #[command(allow_negative_numbers = true)]
    Divide {
        product_value: f64,
        product_unit: String,
        factor_value: f64,
        factor_unit: String,
        /// Show which unit mapping was used
        #[arg(long)]
        explain: bool,
    },
    /// List registered relations
    Relations {
        /// Print as YAML
        #[arg(long)]
        yaml: bool,
    },
    /// Validate the standard relation declarations
    Validate,
    /// List catalog units, optionally for one dimension
    Units {
        /// Dimension name, e.g. `speed` or `electric_current`
        dimension: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Relation(#[from] RelationError),

    #[error(transparent)]
    Unit(#[from] CoreError),

    #[error("Unknown dimension '{0}'")]
    UnknownDimension(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let tolerances = Tolerances::with_rel(cli.rel_tol);

    match cli.command {
        Commands::Multiply {
            a_value,
            a_unit,
            b_value,
            b_unit,
            explain,
        } => {
            let a = measurement(a_value, &a_unit)?;
            let b = measurement(b_value, &b_unit)?;
            cmd_multiply(tolerances, a, b, explain)
        }
        Commands::Divide {
            product_value,
            product_unit,
            factor_value,
            factor_unit,
            explain,
        } => {
            let p = measurement(product_value, &product_unit)?;
            let f = measurement(factor_value, &factor_unit)?;
            cmd_divide(tolerances, p, f, explain)
        }
        Commands::Relations { yaml } => cmd_relations(tolerances, yaml),
        Commands::Validate => cmd_validate(tolerances),
        Commands::Units { dimension } => cmd_units(dimension.as_deref()),
    }
}

fn load_registry(tolerances: Tolerances) -> CliResult<RelationRegistry> {
    debug!(rel_tol = tolerances.rel, "loading standard relations");
    Ok(RegistryBuilder::standard()
        .with_tolerances(tolerances)
        .build()?)
}

fn measurement(value: f64, unit: &str) -> CliResult<Measurement> {
    Ok(Measurement::checked(value, parse_unit(unit)?)?)
}

fn describe(path: &ArithmeticPath) -> String {
    match path {
        ArithmeticPath::Exact(m) => format!("exact via {m}"),
        ArithmeticPath::Canonical(m) => format!("canonical via {m}"),
    }
}

fn cmd_multiply(
    tolerances: Tolerances,
    a: Measurement,
    b: Measurement,
    explain: bool,
) -> CliResult<()> {
    let registry = load_registry(tolerances)?;
    let engine = Engine::new(&registry);
    let result = engine.multiply(a, b)?;
    println!("{a} × {b} = {result}");
    if explain {
        println!("  {}", describe(&engine.path_for_multiply(a, b)?));
    }
    Ok(())
}

fn cmd_divide(
    tolerances: Tolerances,
    p: Measurement,
    f: Measurement,
    explain: bool,
) -> CliResult<()> {
    let registry = load_registry(tolerances)?;
    let engine = Engine::new(&registry);
    let result = engine.divide(p, f)?;
    println!("{p} ÷ {f} = {result}");
    if explain {
        println!("  {}", describe(&engine.path_for_divide(p, f)?));
    }
    Ok(())
}

fn cmd_relations(tolerances: Tolerances, yaml: bool) -> CliResult<()> {
    let registry = load_registry(tolerances)?;
    if yaml {
        print!("{}", serde_yaml::to_string(registry.relations())?);
        return Ok(());
    }

    println!("Relations ({}):", registry.len());
    for relation in registry.relations() {
        println!("  {}", relation.key());
        if let Some(default) = relation.default_mapping() {
            println!("    default:   {default}");
        }
        for mapping in relation.preferred_mappings() {
            println!("    preferred: {mapping}");
        }
    }
    Ok(())
}

fn cmd_validate(tolerances: Tolerances) -> CliResult<()> {
    let registry = load_registry(tolerances)?;
    let preferred: usize = registry
        .relations()
        .iter()
        .map(|r| r.preferred_mappings().len())
        .sum();
    println!(
        "✓ {} relations, {} preferred mappings are exact (rel tol {:e})",
        registry.len(),
        preferred,
        tolerances.rel
    );
    Ok(())
}

fn cmd_units(dimension: Option<&str>) -> CliResult<()> {
    let filter = match dimension {
        Some(name) => Some(
            Dimension::from_name(name)
                .ok_or_else(|| CliError::UnknownDimension(name.to_string()))?,
        ),
        None => None,
    };

    let mut current = None;
    for entry in catalog_entries() {
        if filter.is_some_and(|d| d != entry.dimension) {
            continue;
        }
        if current != Some(entry.dimension) {
            println!("{}:", entry.dimension);
            current = Some(entry.dimension);
        }
        println!("  {:<8} {:<28} × {}", entry.symbol, entry.name, entry.scale);
    }
    Ok(())
}
