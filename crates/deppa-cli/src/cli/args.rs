use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "deppa",
    version,
    about = "Query the DEPPA teacher-evaluation service: active periods, evaluation links, evaluation status"
)]
pub struct Cli {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Where to find the service and which credentials to send.
///
/// Flags override values loaded from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// YAML config file (url, usuario, password, codigo_unidad, transport)
    #[arg(long, global = true, env = "DEPPA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Service base URL
    #[arg(long, global = true, env = "DEPPA_URL")]
    pub url: Option<String>,

    /// Username issued to the academic unit
    #[arg(long, global = true, env = "DEPPA_USUARIO")]
    pub usuario: Option<String>,

    /// Password issued to the academic unit
    #[arg(long, global = true, env = "DEPPA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Academic unit code
    #[arg(long, global = true, env = "DEPPA_CODIGO_UNIDAD")]
    pub codigo_unidad: Option<i64>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "DEPPA_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Log outgoing parameters at debug level (password redacted)
    #[arg(long, global = true)]
    pub log_parameters: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether an evaluation period is active on a date
    Periodo(PeriodoArgs),
    /// Reserve an evaluation ticket and print its link
    Enlace(EnlaceArgs),
    /// Check the status of a survey for an evaluator token
    Estado(EstadoArgs),
}

#[derive(Args, Debug)]
pub struct PeriodoArgs {
    /// Date to check, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub fecha: Option<chrono::NaiveDate>,
}

#[derive(Args, Debug)]
pub struct EnlaceArgs {
    /// Year the evaluation belongs to
    #[arg(long)]
    pub anio: i64,

    /// Period code
    #[arg(long = "periodo")]
    pub codigo_periodo: String,

    /// Course code in the unit's nomenclature
    #[arg(long = "curso")]
    pub codigo_curso: String,

    /// Course section
    #[arg(long)]
    pub seccion: String,

    /// Evaluator token
    #[arg(long)]
    pub token: String,

    /// Enrollment slip number
    #[arg(long = "boleta")]
    pub numero_boleta: String,
}

#[derive(Args, Debug)]
pub struct EstadoArgs {
    /// Survey id
    #[arg(long)]
    pub sid: i64,

    /// Evaluator token
    #[arg(long)]
    pub token: String,
}
