use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const NOT_AVAILABLE: &str = "general.not_available";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PRICE: &str = "main_menu.price";
    pub const MAIN_MENU_SENSITIVITY: &str = "main_menu.sensitivity";
    pub const MAIN_MENU_CREDIT: &str = "main_menu.credit";
    pub const MAIN_MENU_SPLIT: &str = "main_menu.split";
    pub const MAIN_MENU_SAVINGS: &str = "main_menu.savings";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const NOTE_KEEP_DEFAULT: &str = "prompt.note_keep_default";

    pub const PROMPT_NG_PRICE: &str = "prompt.ng_price";
    pub const PROMPT_BOILER_EFFICIENCY: &str = "prompt.boiler_efficiency";
    pub const PROMPT_CARBON_PRICE: &str = "prompt.carbon_price";
    pub const PROMPT_BASELINE_EMISSIONS: &str = "prompt.baseline_emissions";
    pub const PROMPT_PROJECT_EMISSIONS: &str = "prompt.project_emissions";
    pub const PROMPT_O_AND_M: &str = "prompt.o_and_m";
    pub const PROMPT_TARGET_PRICE: &str = "prompt.target_price";
    pub const PROMPT_ANNUAL_USAGE: &str = "prompt.annual_usage";
    pub const PROMPT_CAPITAL: &str = "prompt.capital";
    pub const PROMPT_LIFETIME: &str = "prompt.lifetime";
    pub const PROMPT_DISCOUNT_RATE: &str = "prompt.discount_rate";
    pub const PROMPT_TARGET_IRR: &str = "prompt.target_irr";
    pub const PROMPT_OFFTAKER_SHARE: &str = "prompt.offtaker_share";
    pub const PROMPT_STEAM_PRICE: &str = "prompt.steam_price";
    pub const PROMPT_BASELINE_STEAM_PRICE: &str = "prompt.baseline_steam_price";
    pub const PROMPT_CREDIT_PER_YEAR: &str = "prompt.credit_per_year";

    pub const PRICE_HEADING: &str = "price.heading";
    pub const RESULT_FUEL_REQUIRED: &str = "result.fuel_required";
    pub const RESULT_FUEL_COST: &str = "result.fuel_cost";
    pub const RESULT_EMISSIONS_AVOIDED: &str = "result.emissions_avoided";
    pub const RESULT_CREDIT_VALUE: &str = "result.credit_value";
    pub const RESULT_O_AND_M: &str = "result.o_and_m";
    pub const RESULT_NET_PRICE: &str = "result.net_price";

    pub const SENSITIVITY_HEADING: &str = "sensitivity.heading";
    pub const SENSITIVITY_OPTIONS: &str = "sensitivity.options";
    pub const SENSITIVITY_ROW: &str = "sensitivity.row";

    pub const CREDIT_HEADING: &str = "credit.heading";
    pub const RESULT_PRICE_NO_CREDIT: &str = "result.price_no_credit";
    pub const RESULT_PRICE_GAP: &str = "result.price_gap";
    pub const RESULT_REQUIRED_CARBON_PRICE: &str = "result.required_carbon_price";
    pub const RESULT_NO_FEASIBLE_PRICE: &str = "result.no_feasible_price";
    pub const RESULT_ANNUAL_CREDIT_REVENUE: &str = "result.annual_credit_revenue";

    pub const SPLIT_HEADING: &str = "split.heading";
    pub const SPLIT_ROW: &str = "split.row";
    pub const RESULT_RECOMMENDED_SHARE: &str = "result.recommended_share";
    pub const RESULT_TARGET_UNREACHABLE: &str = "result.target_unreachable";
    pub const RESULT_DEFAULT_SHARE: &str = "result.default_share";
    pub const RESULT_SPLIT_AMOUNTS: &str = "result.split_amounts";
    pub const RESULT_PROVIDER_NPV: &str = "result.provider_npv";
    pub const RESULT_PROVIDER_IRR: &str = "result.provider_irr";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_TARGET_MET: &str = "result.target_met";
    pub const RESULT_TARGET_NOT_MET: &str = "result.target_not_met";
    pub const RESULT_LIFETIME_REVENUE: &str = "result.lifetime_revenue";
    pub const RESULT_ROI: &str = "result.roi";

    pub const SAVINGS_HEADING: &str = "savings.heading";
    pub const RESULT_COST_SAVINGS: &str = "result.cost_savings";
    pub const RESULT_SAVINGS_SPLIT: &str = "result.savings_split";
    pub const RESULT_OFFTAKER_NPV: &str = "result.offtaker_npv";
    pub const SAVINGS_ROW: &str = "savings.row";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERR_DIVISION_BY_ZERO: &str = "error.division_by_zero";
    pub const ERR_IRR_NOT_FOUND: &str = "error.irr_not_found";
    pub const ERR_INVALID_DISCOUNT_RATE: &str = "error.invalid_discount_rate";
    pub const ERR_NO_FEASIBLE_PRICE: &str = "error.no_feasible_price";
    pub const ERR_TARGET_UNREACHABLE: &str = "error.target_unreachable";
    pub const ERR_UNKNOWN_UNIT: &str = "error.unknown_unit";
    pub const ERR_IO: &str = "error.io";
    pub const ERR_CONFIG: &str = "error.config";
    pub const SCENARIO_INVALID_HINT: &str = "error.scenario_invalid_hint";

    pub const INPUT_BOILER_EFFICIENCY: &str = "input.boiler_efficiency";
    pub const INPUT_NEGATIVE_PRICE: &str = "input.negative_price";
    pub const INPUT_NEGATIVE_CAPITAL: &str = "input.negative_capital";
    pub const INPUT_DISCOUNT_RATE: &str = "input.discount_rate";
    pub const INPUT_TARGET_IRR: &str = "input.target_irr";
    pub const INPUT_LIFETIME: &str = "input.lifetime";
    pub const INPUT_SHARE: &str = "input.share";
    pub const INPUT_OFFTAKE: &str = "input.offtake";
    pub const INPUT_SAVINGS: &str = "input.savings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// `{name}` 자리표시자를 채운 번역을 돌려준다.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

/// `{name}` 형태 자리표시자를 값으로 바꾼다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 한국어 문자열. 번역기 없이 오류 `Display`에서도 쓴다.
pub(crate) fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        NOT_AVAILABLE => "해당 없음",
        MAIN_MENU_TITLE => "\n=== Steam Price Toolbox ===",
        MAIN_MENU_PRICE => "1) 증기 단가 계산",
        MAIN_MENU_SENSITIVITY => "2) 민감도 분석",
        MAIN_MENU_CREDIT => "3) 필요 탄소크레딧 가격",
        MAIN_MENU_SPLIT => "4) 크레딧 수익 배분(목표 IRR)",
        MAIN_MENU_SAVINGS => "5) 비용 절감 수익 배분",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_SELECTION => "잘못된 선택입니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        NOTE_KEEP_DEFAULT => "참고: 엔터만 누르면 괄호 안의 현재 값을 사용합니다.",
        PROMPT_NG_PRICE => "천연가스 단가 [$/{unit}]",
        PROMPT_BOILER_EFFICIENCY => "보일러 효율 (0~1]",
        PROMPT_CARBON_PRICE => "탄소크레딧 가격 [$/ton CO2e]",
        PROMPT_BASELINE_EMISSIONS => "기존 배출계수 [ton CO2e/MMBtu]",
        PROMPT_PROJECT_EMISSIONS => "프로젝트 배출계수 [ton CO2e/MMBtu]",
        PROMPT_O_AND_M => "O&M 비용 [$/MMBtu]",
        PROMPT_TARGET_PRICE => "목표 증기 단가 [$/MMBtu]",
        PROMPT_ANNUAL_USAGE => "연간 증기 사용량 [MMBtu]",
        PROMPT_CAPITAL => "초기 투자비 [$]",
        PROMPT_LIFETIME => "사업 기간 [년]",
        PROMPT_DISCOUNT_RATE => "할인율 [%]",
        PROMPT_TARGET_IRR => "목표 IRR [%]",
        PROMPT_OFFTAKER_SHARE => "오프테이커 배분 비율 [%]",
        PROMPT_STEAM_PRICE => "프로젝트 증기 단가 [$/MMBtu]",
        PROMPT_BASELINE_STEAM_PRICE => "기존 증기 단가 [$/MMBtu]",
        PROMPT_CREDIT_PER_YEAR => "연간 크레딧 수익 [$]",
        PRICE_HEADING => "\n-- 증기 단가 --",
        RESULT_FUEL_REQUIRED => "필요 연료량: {value} MMBtu 연료/MMBtu 증기",
        RESULT_FUEL_COST => "연료비: ${value}/MMBtu",
        RESULT_EMISSIONS_AVOIDED => "회피 배출량: {value} ton CO2e/MMBtu",
        RESULT_CREDIT_VALUE => "탄소크레딧: -${value}/MMBtu",
        RESULT_O_AND_M => "O&M 비용: ${value}/MMBtu",
        RESULT_NET_PRICE => "순 증기 단가: ${value}/MMBtu",
        SENSITIVITY_HEADING => "\n-- 민감도 분석 --",
        SENSITIVITY_OPTIONS => "1) 천연가스 단가  2) 보일러 효율  3) 탄소크레딧 가격  4) O&M 비용",
        SENSITIVITY_ROW => "{value}  →  ${price}/MMBtu",
        CREDIT_HEADING => "\n-- 필요 탄소크레딧 가격 --",
        RESULT_PRICE_NO_CREDIT => "크레딧 미적용 증기 단가: ${value}/MMBtu",
        RESULT_PRICE_GAP => "메워야 할 단가 차이: ${value}/MMBtu",
        RESULT_REQUIRED_CARBON_PRICE => "필요 크레딧 가격: ${value}/ton CO2e",
        RESULT_NO_FEASIBLE_PRICE => "회피 배출량이 0 이하여서 크레딧만으로는 목표 단가에 도달할 수 없습니다.",
        RESULT_ANNUAL_CREDIT_REVENUE => "연간 크레딧 수익: ${value}",
        SPLIT_HEADING => "\n-- 크레딧 수익 배분 --",
        SPLIT_ROW => "오프테이커 {share}%  →  IRR {irr}",
        RESULT_RECOMMENDED_SHARE => "목표 IRR을 만족하는 최대 오프테이커 배분: {value}%",
        RESULT_TARGET_UNREACHABLE => "현재 조건으로는 목표 IRR을 달성할 수 없습니다.",
        RESULT_DEFAULT_SHARE => "적용 배분 비율: {value}%",
        RESULT_SPLIT_AMOUNTS => "오프테이커 ${offtaker}/년, 기술사업자 ${provider}/년",
        RESULT_PROVIDER_NPV => "기술사업자 NPV: ${value}",
        RESULT_PROVIDER_IRR => "기술사업자 IRR: {value}",
        RESULT_PAYBACK => "회수기간: {value}",
        RESULT_TARGET_MET => "목표 IRR {value}% 달성",
        RESULT_TARGET_NOT_MET => "목표 IRR {value}% 미달. 배분 비율을 조정하세요.",
        RESULT_LIFETIME_REVENUE => "사업 기간 총 크레딧 수익 ${total}, 기술사업자 ${provider}",
        RESULT_ROI => "투자수익률(ROI): {value}",
        SAVINGS_HEADING => "\n-- 비용 절감 수익 배분 --",
        RESULT_COST_SAVINGS => "연간 비용 절감 ${savings}, 총 연간 편익 ${benefit}",
        RESULT_SAVINGS_SPLIT => "오프테이커 ${offtaker}/년, 생산자 ${producer}/년",
        RESULT_OFFTAKER_NPV => "오프테이커 NPV: ${value}",
        SAVINGS_ROW => "{year}년: 생산자 ${producer} (PV ${producer_pv}), 오프테이커 ${offtaker} (PV ${offtaker_pv})",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 언어: {lang}, 가스 단가 단위: {unit}",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) 가스 단가 단위  4) 기본 시나리오 저장",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        ERR_DIVISION_BY_ZERO => "보일러 효율은 0이 될 수 없습니다.",
        ERR_IRR_NOT_FOUND => "IRR 해를 찾을 수 없습니다.",
        ERR_INVALID_DISCOUNT_RATE => "할인율은 -100%보다 커야 합니다: {rate}",
        ERR_NO_FEASIBLE_PRICE => "회피 배출량({value})이 0 이하여서 필요한 크레딧 가격이 없습니다.",
        ERR_TARGET_UNREACHABLE => "목표 IRR {value}%를 만족하는 배분 비율이 없습니다.",
        ERR_UNKNOWN_UNIT => "알 수 없는 단위: {value}",
        ERR_IO => "입출력 오류: {detail}",
        ERR_CONFIG => "설정 파일 오류: {detail}",
        SCENARIO_INVALID_HINT => "현재 시나리오로는 계산할 수 없습니다. 1번 메뉴에서 값을 수정하세요.",
        INPUT_BOILER_EFFICIENCY => "보일러 효율은 0보다 크고 1 이하여야 합니다.",
        INPUT_NEGATIVE_PRICE => "단가, 배출계수, 비용은 0 이상의 유한한 값이어야 합니다.",
        INPUT_NEGATIVE_CAPITAL => "초기 투자비는 0 이상이어야 합니다.",
        INPUT_DISCOUNT_RATE => "할인율은 -100%보다 커야 합니다.",
        INPUT_TARGET_IRR => "목표 IRR은 유한한 값이어야 합니다.",
        INPUT_LIFETIME => "사업 기간은 0~100년이어야 합니다.",
        INPUT_SHARE => "배분 비율은 0~100% 사이여야 합니다.",
        INPUT_OFFTAKE => "목표 단가와 연간 사용량은 0 이상이어야 합니다.",
        INPUT_SAVINGS => "증기 단가와 연간 크레딧 수익은 0 이상이어야 합니다.",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        NOT_AVAILABLE => "N/A",
        MAIN_MENU_TITLE => "\n=== Steam Price Toolbox ===",
        MAIN_MENU_PRICE => "1) Steam price",
        MAIN_MENU_SENSITIVITY => "2) Sensitivity analysis",
        MAIN_MENU_CREDIT => "3) Required carbon credit price",
        MAIN_MENU_SPLIT => "4) Credit revenue split (target IRR)",
        MAIN_MENU_SAVINGS => "5) Cost-savings revenue sharing",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        INVALID_SELECTION => "Invalid selection.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        NOTE_KEEP_DEFAULT => "Note: press Enter to keep the current value in parentheses.",
        PROMPT_NG_PRICE => "Natural gas price [$/{unit}]",
        PROMPT_BOILER_EFFICIENCY => "Boiler efficiency (0-1]",
        PROMPT_CARBON_PRICE => "Carbon credit price [$/ton CO2e]",
        PROMPT_BASELINE_EMISSIONS => "Business-as-usual emissions [ton CO2e/MMBtu]",
        PROMPT_PROJECT_EMISSIONS => "Project emissions [ton CO2e/MMBtu]",
        PROMPT_O_AND_M => "O&M cost [$/MMBtu]",
        PROMPT_TARGET_PRICE => "Target steam price [$/MMBtu]",
        PROMPT_ANNUAL_USAGE => "Annual steam usage [MMBtu]",
        PROMPT_CAPITAL => "Capital investment [$]",
        PROMPT_LIFETIME => "Project lifetime [years]",
        PROMPT_DISCOUNT_RATE => "Discount rate [%]",
        PROMPT_TARGET_IRR => "Target IRR [%]",
        PROMPT_OFFTAKER_SHARE => "Offtaker share [%]",
        PROMPT_STEAM_PRICE => "Project steam price [$/MMBtu]",
        PROMPT_BASELINE_STEAM_PRICE => "Baseline steam price [$/MMBtu]",
        PROMPT_CREDIT_PER_YEAR => "Annual credit revenue [$]",
        PRICE_HEADING => "\n-- Steam Price --",
        RESULT_FUEL_REQUIRED => "Fuel required: {value} MMBtu fuel/MMBtu steam",
        RESULT_FUEL_COST => "Fuel cost: ${value}/MMBtu",
        RESULT_EMISSIONS_AVOIDED => "Emissions avoided: {value} ton CO2e/MMBtu",
        RESULT_CREDIT_VALUE => "Carbon credit: -${value}/MMBtu",
        RESULT_O_AND_M => "O&M cost: ${value}/MMBtu",
        RESULT_NET_PRICE => "Net steam price: ${value}/MMBtu",
        SENSITIVITY_HEADING => "\n-- Sensitivity Analysis --",
        SENSITIVITY_OPTIONS => "1) Natural gas price  2) Boiler efficiency  3) Carbon price  4) O&M cost",
        SENSITIVITY_ROW => "{value}  ->  ${price}/MMBtu",
        CREDIT_HEADING => "\n-- Required Carbon Credit Price --",
        RESULT_PRICE_NO_CREDIT => "Steam price without credits: ${value}/MMBtu",
        RESULT_PRICE_GAP => "Price gap to fill: ${value}/MMBtu",
        RESULT_REQUIRED_CARBON_PRICE => "Required credit price: ${value}/ton CO2e",
        RESULT_NO_FEASIBLE_PRICE => "Emissions avoided is not positive; credits alone cannot reach the target price.",
        RESULT_ANNUAL_CREDIT_REVENUE => "Annual credit revenue: ${value}",
        SPLIT_HEADING => "\n-- Credit Revenue Split --",
        SPLIT_ROW => "Offtaker {share}%  ->  IRR {irr}",
        RESULT_RECOMMENDED_SHARE => "Maximum offtaker share meeting target IRR: {value}%",
        RESULT_TARGET_UNREACHABLE => "Target IRR cannot be achieved with current parameters.",
        RESULT_DEFAULT_SHARE => "Applied share: {value}%",
        RESULT_SPLIT_AMOUNTS => "Offtaker ${offtaker}/year, provider ${provider}/year",
        RESULT_PROVIDER_NPV => "Provider NPV: ${value}",
        RESULT_PROVIDER_IRR => "Provider IRR: {value}",
        RESULT_PAYBACK => "Payback period: {value}",
        RESULT_TARGET_MET => "Target IRR of {value}% is achieved",
        RESULT_TARGET_NOT_MET => "Target IRR of {value}% is not achieved. Consider adjusting the share.",
        RESULT_LIFETIME_REVENUE => "Lifetime credit revenue ${total}, provider ${provider}",
        RESULT_ROI => "Return on investment: {value}",
        SAVINGS_HEADING => "\n-- Cost-Savings Revenue Sharing --",
        RESULT_COST_SAVINGS => "Annual cost savings ${savings}, total annual benefit ${benefit}",
        RESULT_SAVINGS_SPLIT => "Offtaker ${offtaker}/year, producer ${producer}/year",
        RESULT_OFFTAKER_NPV => "Offtaker NPV: ${value}",
        SAVINGS_ROW => "Year {year}: producer ${producer} (PV ${producer_pv}), offtaker ${offtaker} (PV ${offtaker_pv})",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current language: {lang}, gas price unit: {unit}",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) Gas price unit  4) Save scenario as default",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_SAVED => "Settings saved.",
        ERR_DIVISION_BY_ZERO => "Boiler efficiency cannot be zero.",
        ERR_IRR_NOT_FOUND => "No IRR solution was found.",
        ERR_INVALID_DISCOUNT_RATE => "Discount rate must be greater than -100%: {rate}",
        ERR_NO_FEASIBLE_PRICE => "Emissions avoided ({value}) is not positive; no credit price reaches the target.",
        ERR_TARGET_UNREACHABLE => "No share meets the target IRR of {value}%.",
        ERR_UNKNOWN_UNIT => "Unknown unit: {value}",
        ERR_IO => "I/O error: {detail}",
        ERR_CONFIG => "Configuration file error: {detail}",
        SCENARIO_INVALID_HINT => "The current scenario cannot be evaluated. Fix it from menu 1.",
        INPUT_BOILER_EFFICIENCY => "Boiler efficiency must be greater than 0 and at most 1.",
        INPUT_NEGATIVE_PRICE => "Prices, emission factors and costs must be finite and non-negative.",
        INPUT_NEGATIVE_CAPITAL => "Capital investment must be non-negative.",
        INPUT_DISCOUNT_RATE => "Discount rate must be greater than -100%.",
        INPUT_TARGET_IRR => "Target IRR must be a finite number.",
        INPUT_LIFETIME => "Project lifetime must be between 0 and 100 years.",
        INPUT_SHARE => "Share must be between 0 and 100%.",
        INPUT_OFFTAKE => "Target price and annual usage must be non-negative.",
        INPUT_SAVINGS => "Steam prices and annual credit revenue must be non-negative.",
        _ => return None,
    };
    Some(s)
}
