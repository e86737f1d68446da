use thiserror::Error;

use crate::cli::{Args, Command, OfftakeArgs, ProjectArgs};
use crate::config::{self, Config, ConfigError, LoadedConfig};
use crate::finance::revenue_sharing::{calculate_revenue_sharing, RevenueSharingInput};
use crate::finance::revenue_split::{
    default_share, provider_metrics, solve_max_share_for_irr_with_npv, ProjectFinancials,
};
use crate::finance::{solve_required_credit_price, CashFlowError, SplitError};
use crate::i18n::{self, keys, Translator};
use crate::pricing::{compute_price, default_range, sweep, PriceField, PriceInputs, PricingError};
use crate::ui_cli::{self, MenuChoice};
use crate::units::{convert_price_per_energy, EnergyUnit, UnitError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 해석 오류
    #[error("단위 오류: {0}")]
    Unit(#[from] UnitError),
    /// 증기 단가 계산 오류
    #[error("단가 계산 오류: {0}")]
    Pricing(#[from] PricingError),
    /// 현금흐름 계산 오류
    #[error("현금흐름 계산 오류: {0}")]
    CashFlow(#[from] CashFlowError),
    /// 크레딧 가격/배분 역산 오류
    #[error("배분 계산 오류: {0}")]
    Split(#[from] SplitError),
    /// 입력값이 허용 범위를 벗어난 경우. 값은 [`keys`]의 메시지 키이다.
    #[error("입력 오류: {}", i18n::ko(.0))]
    InvalidInput(&'static str),
}

/// 사업 기간 상한 [년]
pub const MAX_PROJECT_LIFETIME: u32 = 100;

impl AppError {
    /// 입출력 오류만 세션을 끝낸다. 나머지는 메시지를 보여주고 메뉴로 돌아간다.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Io(_))
    }

    /// 현재 언어로 오류 메시지를 만든다.
    pub fn localized(&self, tr: &Translator) -> String {
        match self {
            AppError::Io(e) => tr.fill(keys::ERR_IO, &[("detail", e.to_string())]),
            AppError::Config(e) => {
                let detail = match e {
                    ConfigError::Io(inner) => inner.to_string(),
                    ConfigError::Serde(inner) => inner.to_string(),
                    ConfigError::Serialize(inner) => inner.to_string(),
                };
                tr.fill(keys::ERR_CONFIG, &[("detail", detail)])
            }
            AppError::Unit(UnitError::UnknownUnit(unit)) => {
                tr.fill(keys::ERR_UNKNOWN_UNIT, &[("value", unit.clone())])
            }
            AppError::Pricing(e) | AppError::Split(SplitError::Pricing(e)) => {
                pricing_message(tr, *e)
            }
            AppError::CashFlow(e) => cash_flow_message(tr, *e),
            AppError::Split(SplitError::NoFeasiblePrice { emissions_avoided }) => tr.fill(
                keys::ERR_NO_FEASIBLE_PRICE,
                &[("value", format!("{emissions_avoided:.4}"))],
            ),
            AppError::Split(SplitError::TargetUnreachable { target_irr }) => tr.fill(
                keys::ERR_TARGET_UNREACHABLE,
                &[("value", format!("{:.1}", target_irr * 100.0))],
            ),
            AppError::InvalidInput(key) => tr.t(key).to_string(),
        }
    }
}

fn pricing_message(tr: &Translator, err: PricingError) -> String {
    match err {
        PricingError::DivisionByZero => tr.t(keys::ERR_DIVISION_BY_ZERO).to_string(),
    }
}

fn cash_flow_message(tr: &Translator, err: CashFlowError) -> String {
    match err {
        CashFlowError::IrrNotFound => tr.t(keys::ERR_IRR_NOT_FOUND).to_string(),
        CashFlowError::InvalidDiscountRate(rate) => {
            tr.fill(keys::ERR_INVALID_DISCOUNT_RATE, &[("rate", rate.to_string())])
        }
    }
}

/// 명령행 인자에 따라 대화형 메뉴 또는 하위 명령을 실행한다.
pub fn run(args: Args) -> Result<(), AppError> {
    let mut loaded = config::load_or_default(args.config.as_deref())?;
    apply_overrides(&mut loaded.config, &args);
    let lang = i18n::resolve_language(args.lang.as_deref(), Some(&loaded.config.language));
    let tr = Translator::new_with_pack(&lang, None);

    match args.command {
        None => run_interactive(&mut loaded, tr),
        Some(command) => {
            let cfg = &loaded.config;
            validate_price_inputs(&cfg.price)?;
            run_command(command, cfg, &tr)
        }
    }
}

/// CLI 옵션으로 설정 파일 값을 덮어쓴다. 파일에는 저장하지 않는다.
fn apply_overrides(cfg: &mut Config, args: &Args) {
    if let Some(unit) = args.gas_price_unit {
        cfg.gas_price_unit = unit;
    }
    let ng_price = args
        .price
        .ng_price
        .map(|p| convert_price_per_energy(p, cfg.gas_price_unit, EnergyUnit::MMBtu));
    args.price.apply(&mut cfg.price, ng_price);
}

fn is_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

fn ensure(ok: bool, key: &'static str) -> Result<(), AppError> {
    if ok {
        Ok(())
    } else {
        Err(AppError::InvalidInput(key))
    }
}

/// 핵심 계산에 넘기기 전 입력 범위를 확인한다.
pub fn validate_price_inputs(input: &PriceInputs) -> Result<(), AppError> {
    ensure(
        input.boiler_efficiency > 0.0 && input.boiler_efficiency <= 1.0,
        keys::INPUT_BOILER_EFFICIENCY,
    )?;
    let non_negative = [
        input.ng_price_per_mmbtu,
        input.carbon_price_per_ton,
        input.baseline_emissions_factor,
        input.project_emissions_factor,
        input.o_and_m_cost,
    ];
    ensure(non_negative.into_iter().all(is_non_negative), keys::INPUT_NEGATIVE_PRICE)
}

/// 투자비, 사업 기간, 할인율, 목표 IRR을 확인한다.
pub fn validate_project(project: &ProjectFinancials) -> Result<(), AppError> {
    ensure(is_non_negative(project.capital_investment), keys::INPUT_NEGATIVE_CAPITAL)?;
    ensure(project.project_lifetime <= MAX_PROJECT_LIFETIME, keys::INPUT_LIFETIME)?;
    ensure(
        project.discount_rate.is_finite() && project.discount_rate > -1.0,
        keys::INPUT_DISCOUNT_RATE,
    )?;
    ensure(project.target_irr.is_finite(), keys::INPUT_TARGET_IRR)
}

/// 목표 단가와 연간 사용량을 확인한다.
pub fn validate_offtake(target_price: f64, annual_volume: f64) -> Result<(), AppError> {
    ensure(
        is_non_negative(target_price) && is_non_negative(annual_volume),
        keys::INPUT_OFFTAKE,
    )
}

/// 배분 비율[%]이 0~100인지 확인하고 소수로 바꾼다.
pub fn share_from_pct(share_pct: f64) -> Result<f64, AppError> {
    ensure((0.0..=100.0).contains(&share_pct), keys::INPUT_SHARE)?;
    Ok(share_pct / 100.0)
}

fn merge_project(base: ProjectFinancials, args: &ProjectArgs) -> ProjectFinancials {
    ProjectFinancials {
        capital_investment: args.capital.unwrap_or(base.capital_investment),
        project_lifetime: args.lifetime.unwrap_or(base.project_lifetime),
        discount_rate: args.discount_pct.map_or(base.discount_rate, |p| p / 100.0),
        target_irr: args.target_irr_pct.map_or(base.target_irr, |p| p / 100.0),
    }
}

fn run_command(command: Command, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    match command {
        Command::Price => {
            let result = compute_price(&cfg.price)?;
            ui_cli::print_price(tr, &result, cfg.price.o_and_m_cost);
        }
        Command::Sweep { field, values } => {
            let field = PriceField::from(field);
            let values = if values.is_empty() {
                default_range(&cfg.price, field)
            } else {
                values
            };
            let points = sweep(&cfg.price, field, &values)?;
            ui_cli::print_sweep(tr, &points);
        }
        Command::Credit { offtake } => {
            let (target, volume) = merge_offtake(cfg, &offtake);
            validate_offtake(target, volume)?;
            let required = solve_required_credit_price(&cfg.price, target, volume)?;
            ui_cli::print_credit(tr, &required);
        }
        Command::Split {
            offtake,
            project,
            share_pct,
        } => {
            let (target, volume) = merge_offtake(cfg, &offtake);
            validate_offtake(target, volume)?;
            let project = merge_project(cfg.project, &project);
            validate_project(&project)?;
            let chosen_share = share_pct.map(share_from_pct).transpose()?;
            let required = solve_required_credit_price(&cfg.price, target, volume)?;
            ui_cli::print_credit(tr, &required);

            let search = solve_max_share_for_irr_with_npv(
                required.annual_credit_revenue,
                project.capital_investment,
                project.project_lifetime,
                project.target_irr,
                project.discount_rate,
            )?;
            ui_cli::print_split_search(tr, &search);

            let share = chosen_share.unwrap_or_else(|| default_share(&search));
            let metrics = provider_metrics(&project, required.annual_credit_revenue, share)?;
            ui_cli::print_provider(tr, share, project.target_irr, &metrics);
        }
        Command::Savings {
            steam_price,
            baseline_steam_price,
            credit_per_year,
            share_pct,
            volume,
            project,
            detailed,
        } => {
            let project = merge_project(cfg.project, &project);
            validate_project(&project)?;
            let offtaker_share = share_from_pct(share_pct)?;
            let annual_steam_usage = volume.unwrap_or(cfg.offtake.annual_steam_usage);
            validate_offtake(0.0, annual_steam_usage)?;
            ensure(
                steam_price.map_or(true, is_non_negative)
                    && is_non_negative(baseline_steam_price)
                    && is_non_negative(credit_per_year),
                keys::INPUT_SAVINGS,
            )?;
            let steam_price = match steam_price {
                Some(p) => p,
                None => compute_price(&cfg.price)?.net_price,
            };
            let input = RevenueSharingInput {
                steam_price,
                baseline_steam_price,
                annual_steam_usage,
                credit_value_per_year: credit_per_year,
                capital_investment: project.capital_investment,
                project_lifetime: project.project_lifetime,
                discount_rate: project.discount_rate,
                offtaker_share,
            };
            let result = calculate_revenue_sharing(&input)?;
            ui_cli::print_savings(tr, &result, detailed);
        }
    }
    Ok(())
}

fn merge_offtake(cfg: &Config, args: &OfftakeArgs) -> (f64, f64) {
    (
        args.target_price.unwrap_or(cfg.offtake.target_steam_price),
        args.volume.unwrap_or(cfg.offtake.annual_steam_usage),
    )
}

/// 대화형 메뉴 루프를 실행한다.
fn run_interactive(loaded: &mut LoadedConfig, tr: Translator) -> Result<(), AppError> {
    if let Err(err) = validate_price_inputs(&loaded.config.price) {
        ui_cli::print_error(&tr, &err);
        println!("{}", tr.t(keys::SCENARIO_INVALID_HINT));
    }
    run_menu_loop(loaded, tr, ui_cli::main_menu)
}

/// `next_choice`가 돌려주는 메뉴를 종료 전까지 처리한다.
///
/// 계산/입력 오류는 출력하고 메뉴로 돌아간다. 입출력 오류만 루프를 끝낸다.
/// 1번(단가 입력) 외의 계산 메뉴는 현재 시나리오가 유효할 때만 실행한다.
/// 언어를 바꾸면 번역기를 다시 만든다.
fn run_menu_loop<S>(
    loaded: &mut LoadedConfig,
    mut tr: Translator,
    mut next_choice: S,
) -> Result<(), AppError>
where
    S: FnMut(&Translator) -> Result<MenuChoice, AppError>,
{
    loop {
        let outcome = match next_choice(&tr)? {
            MenuChoice::Price => ui_cli::handle_price(&tr, &mut loaded.config),
            MenuChoice::Sensitivity => validate_price_inputs(&loaded.config.price)
                .and_then(|()| ui_cli::handle_sensitivity(&tr, &mut loaded.config)),
            MenuChoice::Credit => validate_price_inputs(&loaded.config.price)
                .and_then(|()| ui_cli::handle_credit(&tr, &mut loaded.config)),
            MenuChoice::Split => validate_price_inputs(&loaded.config.price)
                .and_then(|()| ui_cli::handle_split(&tr, &mut loaded.config)),
            MenuChoice::Savings => validate_price_inputs(&loaded.config.price)
                .and_then(|()| ui_cli::handle_savings(&tr, &mut loaded.config)),
            MenuChoice::Settings => {
                let saved = ui_cli::handle_settings(&tr, &mut loaded.config).and_then(|save| {
                    if save {
                        loaded.save()?;
                        println!("{}", tr.t(keys::SETTINGS_SAVED));
                    }
                    Ok(())
                });
                let lang = i18n::resolve_language(None, Some(&loaded.config.language));
                tr = Translator::new_with_pack(&lang, None);
                saved
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                return Ok(());
            }
        };
        match outcome {
            Err(err) if err.is_recoverable() => ui_cli::print_error(&tr, &err),
            other => other?,
        }
    }
}
