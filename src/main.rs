use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use fuel_calculator::{
    app::{self, AppError, Session},
    config, i18n,
    input::{CombustionForm, FuelOilForm},
    logging, report,
};

#[derive(Parser)]
#[command(name = "fuel_calculator_cli")]
#[command(about = "Fuel combustion and fuel-oil composition calculator", long_about = None)]
struct Cli {
    /// Language: auto, uk, en
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    lang: String,
    /// Path to config.toml
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Heat of combustion and dry/combustible composition (Mendeleev formula)
    Combustion(CombustionArgs),
    /// Working-mass composition of fuel oil
    FuelOil(FuelOilArgs),
}

/// Values are taken as text and validated like the interactive form.
#[derive(Args)]
struct CombustionArgs {
    #[arg(long, allow_hyphen_values = true)]
    carbon: String,
    #[arg(long, allow_hyphen_values = true)]
    hydrogen: String,
    #[arg(long, allow_hyphen_values = true)]
    sulfur: String,
    #[arg(long, allow_hyphen_values = true)]
    nitrogen: String,
    #[arg(long, allow_hyphen_values = true)]
    oxygen: String,
    #[arg(long, allow_hyphen_values = true)]
    moisture: String,
    #[arg(long, allow_hyphen_values = true)]
    ash: String,
}

#[derive(Args)]
struct FuelOilArgs {
    #[arg(long, allow_hyphen_values = true)]
    carbon: String,
    #[arg(long, allow_hyphen_values = true)]
    hydrogen: String,
    #[arg(long, allow_hyphen_values = true)]
    sulfur: String,
    #[arg(long, allow_hyphen_values = true)]
    oxygen: String,
    #[arg(long, allow_hyphen_values = true)]
    moisture: String,
    #[arg(long, allow_hyphen_values = true)]
    ash: String,
    /// mg/kg
    #[arg(long, allow_hyphen_values = true)]
    vanadium: String,
    /// MJ/kg
    #[arg(long, allow_hyphen_values = true)]
    lower_heat: String,
}

impl From<CombustionArgs> for CombustionForm {
    fn from(a: CombustionArgs) -> Self {
        Self {
            carbon: a.carbon,
            hydrogen: a.hydrogen,
            sulfur: a.sulfur,
            nitrogen: a.nitrogen,
            oxygen: a.oxygen,
            moisture: a.moisture,
            ash: a.ash,
        }
    }
}

impl From<FuelOilArgs> for FuelOilForm {
    fn from(a: FuelOilArgs) -> Self {
        Self {
            carbon: a.carbon,
            hydrogen: a.hydrogen,
            sulfur: a.sulfur,
            oxygen: a.oxygen,
            moisture: a.moisture,
            ash: a.ash,
            vanadium: a.vanadium,
            lower_heat: a.lower_heat,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 단발 계산 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let lang = cli.lang.clone();
    match try_run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}: {err}", error_prefix(&lang));
            ExitCode::FAILURE
        }
    }
}

/// 최상위 오류 접두어. 설정 로드 자체가 실패했을 수 있으므로 CLI 플래그와 시스템 로케일만 본다.
fn error_prefix(cli_lang: &str) -> String {
    i18n::Translator::new(&i18n::resolve_language(cli_lang, None)).t(i18n::keys::ERROR_PREFIX)
}

fn try_run(cli: Cli) -> Result<ExitCode, AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    let mut session = Session::new(cfg, cli.config.clone(), &cli.lang);
    let decimals = session.config.decimals;
    let outcome = match cli.command {
        None => {
            app::run(&mut session)?;
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Combustion(args)) => {
            report::evaluate_combustion_form(&args.into(), &session.tr, decimals)
        }
        Some(Commands::FuelOil(args)) => {
            report::evaluate_fuel_oil_form(&args.into(), &session.tr, decimals)
        }
    };
    match outcome {
        Ok(text) => {
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(message) => {
            eprintln!("{message}");
            Ok(ExitCode::from(2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_prefix_follows_lang_flag() {
        assert_eq!(error_prefix("en"), "Error");
        assert_eq!(error_prefix("uk"), "Помилка");
    }
}
