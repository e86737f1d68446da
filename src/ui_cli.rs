use std::io::{self, Write};

use crate::app::{AppError, MAX_PROJECT_LIFETIME};
use crate::config::Config;
use crate::finance::revenue_sharing::{
    calculate_revenue_sharing, RevenueSharingInput, RevenueSharingResult,
};
use crate::finance::revenue_split::{
    default_share, provider_metrics, solve_max_share_for_irr_with_npv, ProviderMetrics,
    SplitSearchResult,
};
use crate::finance::{solve_required_credit_price, RequiredCreditPrice};
use crate::i18n::{keys, Translator};
use crate::pricing::{compute_price, default_range, sweep, PriceField, PriceResult, SweepPoint};
use crate::units::{convert_price_per_energy, EnergyUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Price,
    Sensitivity,
    Credit,
    Split,
    Savings,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_PRICE,
        keys::MAIN_MENU_SENSITIVITY,
        keys::MAIN_MENU_CREDIT,
        keys::MAIN_MENU_SPLIT,
        keys::MAIN_MENU_SAVINGS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Price),
            "2" => return Ok(MenuChoice::Sensitivity),
            "3" => return Ok(MenuChoice::Credit),
            "4" => return Ok(MenuChoice::Split),
            "5" => return Ok(MenuChoice::Savings),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 증기 단가 메뉴를 처리한다. 입력값은 세션 동안 다음 기본값이 된다.
pub fn handle_price(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRICE_HEADING));
    println!("{}", tr.t(keys::NOTE_KEEP_DEFAULT));
    read_price_inputs(tr, cfg)?;
    let result = compute_price(&cfg.price)?;
    print_price(tr, &result, cfg.price.o_and_m_cost);
    Ok(())
}

/// 민감도 분석 메뉴를 처리한다.
pub fn handle_sensitivity(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SENSITIVITY_HEADING));
    println!("{}", tr.t(keys::SENSITIVITY_OPTIONS));
    let field = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => PriceField::NgPrice,
        "2" => PriceField::BoilerEfficiency,
        "3" => PriceField::CarbonPrice,
        "4" => PriceField::OAndM,
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION));
            return Ok(());
        }
    };
    let values = default_range(&cfg.price, field);
    let points = sweep(&cfg.price, field, &values)?;
    print_sweep(tr, &points);
    Ok(())
}

/// 필요 탄소크레딧 가격 메뉴를 처리한다.
pub fn handle_credit(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CREDIT_HEADING));
    println!("{}", tr.t(keys::NOTE_KEEP_DEFAULT));
    read_offtake(tr, cfg)?;
    let required = solve_required_credit_price(
        &cfg.price,
        cfg.offtake.target_steam_price,
        cfg.offtake.annual_steam_usage,
    )?;
    print_credit(tr, &required);
    Ok(())
}

/// 크레딧 수익 배분 메뉴를 처리한다.
pub fn handle_split(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SPLIT_HEADING));
    println!("{}", tr.t(keys::NOTE_KEEP_DEFAULT));
    read_offtake(tr, cfg)?;
    read_project(tr, cfg)?;

    let required = solve_required_credit_price(
        &cfg.price,
        cfg.offtake.target_steam_price,
        cfg.offtake.annual_steam_usage,
    )?;
    print_credit(tr, &required);

    let project = cfg.project;
    let search = solve_max_share_for_irr_with_npv(
        required.annual_credit_revenue,
        project.capital_investment,
        project.project_lifetime,
        project.target_irr,
        project.discount_rate,
    )?;
    print_split_search(tr, &search);

    let suggested = default_share(&search) * 100.0;
    let share_pct = read_f64_bounded(tr, tr.t(keys::PROMPT_OFFTAKER_SHARE), suggested, |v| {
        (0.0..=100.0).contains(&v)
    })?;
    let share = share_pct / 100.0;
    let metrics = provider_metrics(&project, required.annual_credit_revenue, share)?;
    print_provider(tr, share, project.target_irr, &metrics);
    Ok(())
}

/// 비용 절감 수익 배분 메뉴를 처리한다.
pub fn handle_savings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SAVINGS_HEADING));
    println!("{}", tr.t(keys::NOTE_KEEP_DEFAULT));
    let defaults = RevenueSharingInput::default();
    let computed = compute_price(&cfg.price)?.net_price;
    let steam_price = read_non_negative(tr, tr.t(keys::PROMPT_STEAM_PRICE), computed.max(0.0))?;
    let baseline_steam_price = read_non_negative(
        tr,
        tr.t(keys::PROMPT_BASELINE_STEAM_PRICE),
        defaults.baseline_steam_price,
    )?;
    let annual_steam_usage = read_non_negative(
        tr,
        tr.t(keys::PROMPT_ANNUAL_USAGE),
        cfg.offtake.annual_steam_usage,
    )?;
    let credit_value_per_year = read_non_negative(
        tr,
        tr.t(keys::PROMPT_CREDIT_PER_YEAR),
        defaults.credit_value_per_year,
    )?;
    read_project(tr, cfg)?;
    let share_pct = read_f64_bounded(
        tr,
        tr.t(keys::PROMPT_OFFTAKER_SHARE),
        defaults.offtaker_share * 100.0,
        |v| (0.0..=100.0).contains(&v),
    )?;

    let input = RevenueSharingInput {
        steam_price,
        baseline_steam_price,
        annual_steam_usage,
        credit_value_per_year,
        capital_investment: cfg.project.capital_investment,
        project_lifetime: cfg.project.project_lifetime,
        discount_rate: cfg.project.discount_rate,
        offtaker_share: share_pct / 100.0,
    };
    let result = calculate_revenue_sharing(&input)?;
    print_savings(tr, &result, true);
    Ok(())
}

/// 설정 메뉴를 처리한다. 파일에 저장해야 하면 true를 돌려준다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.fill(
            keys::SETTINGS_CURRENT,
            &[
                ("lang", tr.language().as_code().to_string()),
                ("unit", cfg.gas_price_unit.symbol().to_string()),
            ],
        )
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            cfg.language = "ko".to_string();
            Ok(true)
        }
        "2" => {
            cfg.language = "en".to_string();
            Ok(true)
        }
        "3" => {
            println!("1) MMBtu  2) GJ  3) therm  4) MWh");
            let unit = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
                "1" => EnergyUnit::MMBtu,
                "2" => EnergyUnit::GigaJoule,
                "3" => EnergyUnit::Therm,
                "4" => EnergyUnit::MegaWattHour,
                _ => {
                    println!("{}", tr.t(keys::INVALID_SELECTION));
                    return Ok(false);
                }
            };
            cfg.gas_price_unit = unit;
            Ok(true)
        }
        "4" => Ok(true),
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION));
            Ok(false)
        }
    }
}

fn read_price_inputs(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    let unit = cfg.gas_price_unit;
    let ng_prompt = tr.fill(keys::PROMPT_NG_PRICE, &[("unit", unit.symbol().to_string())]);
    let ng_default =
        convert_price_per_energy(cfg.price.ng_price_per_mmbtu, EnergyUnit::MMBtu, unit);
    let ng = read_non_negative(tr, &ng_prompt, ng_default)?;

    let price = &mut cfg.price;
    price.ng_price_per_mmbtu = convert_price_per_energy(ng, unit, EnergyUnit::MMBtu);
    price.boiler_efficiency = read_f64_bounded(
        tr,
        tr.t(keys::PROMPT_BOILER_EFFICIENCY),
        price.boiler_efficiency,
        |v| v > 0.0 && v <= 1.0,
    )?;
    price.carbon_price_per_ton =
        read_non_negative(tr, tr.t(keys::PROMPT_CARBON_PRICE), price.carbon_price_per_ton)?;
    price.baseline_emissions_factor = read_non_negative(
        tr,
        tr.t(keys::PROMPT_BASELINE_EMISSIONS),
        price.baseline_emissions_factor,
    )?;
    price.project_emissions_factor = read_non_negative(
        tr,
        tr.t(keys::PROMPT_PROJECT_EMISSIONS),
        price.project_emissions_factor,
    )?;
    price.o_and_m_cost = read_non_negative(tr, tr.t(keys::PROMPT_O_AND_M), price.o_and_m_cost)?;
    Ok(())
}

fn read_offtake(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    let offtake = &mut cfg.offtake;
    offtake.target_steam_price =
        read_non_negative(tr, tr.t(keys::PROMPT_TARGET_PRICE), offtake.target_steam_price)?;
    offtake.annual_steam_usage =
        read_non_negative(tr, tr.t(keys::PROMPT_ANNUAL_USAGE), offtake.annual_steam_usage)?;
    Ok(())
}

fn read_project(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    let project = &mut cfg.project;
    project.capital_investment =
        read_non_negative(tr, tr.t(keys::PROMPT_CAPITAL), project.capital_investment)?;
    let lifetime = read_f64_bounded(
        tr,
        tr.t(keys::PROMPT_LIFETIME),
        f64::from(project.project_lifetime),
        |v| v >= 0.0 && v.fract() == 0.0 && v <= f64::from(MAX_PROJECT_LIFETIME),
    )?;
    project.project_lifetime = lifetime as u32;
    project.discount_rate = read_f64_bounded(
        tr,
        tr.t(keys::PROMPT_DISCOUNT_RATE),
        project.discount_rate * 100.0,
        |v| v > -100.0,
    )? / 100.0;
    project.target_irr =
        read_f64_default(tr, tr.t(keys::PROMPT_TARGET_IRR), project.target_irr * 100.0)? / 100.0;
    Ok(())
}

/// 증기 단가 계산 결과를 출력한다.
pub fn print_price(tr: &Translator, result: &PriceResult, o_and_m_cost: f64) {
    let rows = [
        (keys::RESULT_FUEL_REQUIRED, format!("{:.4}", result.fuel_required_per_unit_output)),
        (keys::RESULT_FUEL_COST, format!("{:.2}", result.fuel_cost)),
        (keys::RESULT_EMISSIONS_AVOIDED, format!("{:.4}", result.emissions_avoided)),
        (keys::RESULT_CREDIT_VALUE, format!("{:.2}", result.credit_value)),
        (keys::RESULT_O_AND_M, format!("{o_and_m_cost:.2}")),
        (keys::RESULT_NET_PRICE, format!("{:.2}", result.net_price)),
    ];
    for (key, value) in rows {
        println!("{}", tr.fill(key, &[("value", value)]));
    }
}

/// 민감도 곡선을 출력한다.
pub fn print_sweep(tr: &Translator, points: &[SweepPoint]) {
    for p in points {
        println!(
            "{}",
            tr.fill(
                keys::SENSITIVITY_ROW,
                &[
                    ("value", format!("{:.4}", p.value)),
                    ("price", format!("{:.2}", p.net_price)),
                ],
            )
        );
    }
}

/// 필요 크레딧 가격 계산 결과를 출력한다.
pub fn print_credit(tr: &Translator, required: &RequiredCreditPrice) {
    println!(
        "{}",
        tr.fill(
            keys::RESULT_PRICE_NO_CREDIT,
            &[("value", format!("{:.2}", required.price_without_credit))]
        )
    );
    println!(
        "{}",
        tr.fill(keys::RESULT_PRICE_GAP, &[("value", format!("{:.2}", required.raw_price_gap))])
    );
    println!(
        "{}",
        tr.fill(
            keys::RESULT_EMISSIONS_AVOIDED,
            &[("value", format!("{:.4}", required.emissions_avoided))]
        )
    );
    match required.carbon_price() {
        Ok(price) => println!(
            "{}",
            tr.fill(keys::RESULT_REQUIRED_CARBON_PRICE, &[("value", format!("{price:.2}"))])
        ),
        Err(_) => println!("{}", tr.t(keys::RESULT_NO_FEASIBLE_PRICE)),
    }
    println!(
        "{}",
        tr.fill(
            keys::RESULT_ANNUAL_CREDIT_REVENUE,
            &[("value", format_money(required.annual_credit_revenue))]
        )
    );
}

/// 배분 비율별 IRR 곡선과 추천값을 출력한다.
pub fn print_split_search(tr: &Translator, search: &SplitSearchResult) {
    for p in &search.irr_curve {
        let mut line = tr.fill(
            keys::SPLIT_ROW,
            &[
                ("share", format!("{:.0}", p.share * 100.0)),
                ("irr", format_pct(tr, p.irr)),
            ],
        );
        if let Some(npv) = p.npv {
            line.push_str(&format!(", NPV ${}", format_money(npv)));
        }
        println!("{line}");
    }
    match search.recommendation() {
        Ok(share) => println!(
            "{}",
            tr.fill(keys::RESULT_RECOMMENDED_SHARE, &[("value", format!("{:.0}", share * 100.0))])
        ),
        Err(_) => println!("{}", tr.t(keys::RESULT_TARGET_UNREACHABLE)),
    }
}

/// 선택한 배분 비율에서 기술사업자 지표를 출력한다.
pub fn print_provider(tr: &Translator, share: f64, target_irr: f64, m: &ProviderMetrics) {
    println!(
        "{}",
        tr.fill(keys::RESULT_DEFAULT_SHARE, &[("value", format!("{:.0}", share * 100.0))])
    );
    println!(
        "{}",
        tr.fill(
            keys::RESULT_SPLIT_AMOUNTS,
            &[
                ("offtaker", format_money(m.split.offtaker_annual)),
                ("provider", format_money(m.split.provider_annual)),
            ],
        )
    );
    println!(
        "{}",
        tr.fill(keys::RESULT_PROVIDER_NPV, &[("value", format_money(m.metrics.npv))])
    );
    println!(
        "{}",
        tr.fill(keys::RESULT_PROVIDER_IRR, &[("value", format_pct(tr, m.metrics.irr))])
    );
    println!(
        "{}",
        tr.fill(keys::RESULT_PAYBACK, &[("value", format_years(tr, m.metrics.payback_period))])
    );
    let target = [("value", format!("{:.1}", target_irr * 100.0))];
    if m.target_met {
        println!("{}", tr.fill(keys::RESULT_TARGET_MET, &target));
    } else {
        println!("{}", tr.fill(keys::RESULT_TARGET_NOT_MET, &target));
    }
    println!(
        "{}",
        tr.fill(
            keys::RESULT_LIFETIME_REVENUE,
            &[
                ("total", format_money(m.lifetime_credit_revenue)),
                ("provider", format_money(m.lifetime_provider_revenue)),
            ],
        )
    );
    println!("{}", tr.fill(keys::RESULT_ROI, &[("value", format_pct(tr, m.roi))]));
}

/// 비용 절감 수익 배분 결과를 출력한다.
pub fn print_savings(tr: &Translator, r: &RevenueSharingResult, detailed: bool) {
    println!(
        "{}",
        tr.fill(
            keys::RESULT_COST_SAVINGS,
            &[
                ("savings", format_money(r.annual_cost_savings)),
                ("benefit", format_money(r.total_annual_benefit)),
            ],
        )
    );
    println!(
        "{}",
        tr.fill(
            keys::RESULT_SAVINGS_SPLIT,
            &[
                ("offtaker", format_money(r.offtaker_annual_share)),
                ("producer", format_money(r.producer_annual_share)),
            ],
        )
    );
    println!(
        "{}",
        tr.fill(keys::RESULT_PROVIDER_NPV, &[("value", format_money(r.producer_npv))])
    );
    println!(
        "{}",
        tr.fill(keys::RESULT_OFFTAKER_NPV, &[("value", format_money(r.offtaker_npv))])
    );
    println!(
        "{}",
        tr.fill(keys::RESULT_PROVIDER_IRR, &[("value", format_pct(tr, r.producer_irr))])
    );
    println!(
        "{}",
        tr.fill(keys::RESULT_PAYBACK, &[("value", format_years(tr, r.payback_period))])
    );
    if detailed {
        for y in &r.years {
            println!(
                "{}",
                tr.fill(
                    keys::SAVINGS_ROW,
                    &[
                        ("year", y.year.to_string()),
                        ("producer", format_money(y.producer_flow)),
                        ("producer_pv", format_money(y.producer_pv)),
                        ("offtaker", format_money(y.offtaker_flow)),
                        ("offtaker_pv", format_money(y.offtaker_pv)),
                    ],
                )
            );
        }
    }
}

/// 천 단위 구분 기호를 넣어 소수 둘째 자리까지 표시한다.
pub fn format_money(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && text != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

fn format_pct(tr: &Translator, value: Option<f64>) -> String {
    value.map_or_else(
        || tr.t(keys::NOT_AVAILABLE).to_string(),
        |v| format!("{:.2}%", v * 100.0),
    )
}

fn format_years(tr: &Translator, value: Option<f64>) -> String {
    value.map_or_else(|| tr.t(keys::NOT_AVAILABLE).to_string(), |v| format!("{v:.2}"))
}

/// 계산/입력 오류를 현재 언어로 출력한다.
pub fn print_error(tr: &Translator, err: &AppError) {
    println!("{}: {}", tr.t(keys::ERROR_PREFIX), err.localized(tr));
}

/// 한 줄을 읽는다. 입력이 끝났으면(EOF) 오류로 알려 메뉴 루프를 끝낸다.
fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    read_f64_bounded(tr, label, default, |_| true)
}

fn read_non_negative(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    read_f64_bounded(tr, label, default, |v| v >= 0.0)
}

/// 빈 입력이면 기본값을 쓰고, 숫자가 아니거나 `valid`를 만족하지 않으면 다시 묻는다.
/// 기본값 자체가 `valid`를 만족하지 않으면 빈 입력도 받지 않는다.
fn read_f64_bounded<F>(
    tr: &Translator,
    label: &str,
    default: f64,
    valid: F,
) -> Result<f64, AppError>
where
    F: Fn(f64) -> bool,
{
    loop {
        let s = read_line(&format!("{label} ({default}): "))?;
        match parse_bounded(&s, default, &valid) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn parse_bounded<F>(input: &str, default: f64, valid: &F) -> Option<f64>
where
    F: Fn(f64) -> bool,
{
    let s = input.trim();
    let v = if s.is_empty() {
        default
    } else {
        s.parse::<f64>().ok()?
    };
    (v.is_finite() && valid(v)).then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(1_234_567.891), "1,234,567.89");
        assert_eq!(format_money(-50_000.0), "-50,000.00");
        assert_eq!(format_money(999.0), "999.00");
        assert_eq!(format_money(-0.001), "0.00");
    }

    #[test]
    fn empty_input_keeps_only_a_valid_default() {
        let efficiency = |v: f64| v > 0.0 && v <= 1.0;
        assert_eq!(parse_bounded("\n", 0.85, &efficiency), Some(0.85));
        assert_eq!(parse_bounded("  \n", 0.0, &efficiency), None);
        assert_eq!(parse_bounded("1.5", 0.85, &efficiency), None);
        assert_eq!(parse_bounded("NaN", 0.85, &|_| true), None);
        assert_eq!(parse_bounded(" 0.9 \n", 0.0, &efficiency), Some(0.9));
    }

    #[test]
    fn missing_irr_prints_not_available() {
        let tr = Translator::new("en");
        assert_eq!(format_pct(&tr, None), "N/A");
        assert_eq!(format_pct(&tr, Some(0.1234)), "12.34%");
    }
}
