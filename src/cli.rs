use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::pricing::{PriceField, PriceInputs};
use crate::units::{parse_energy_unit, EnergyUnit};

/// 명령행 인자. 하위 명령이 없으면 대화형 메뉴를 실행한다.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Steam price and carbon-credit revenue split calculator",
    long_about = None
)]
pub struct Args {
    /// UI 언어 (auto, ko, en)
    #[arg(short = 'L', long, global = true)]
    pub lang: Option<String>,

    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 천연가스 단가 입력 단위 (mmbtu, gj, therm, mwh)
    #[arg(long, global = true, value_parser = parse_energy_unit)]
    pub gas_price_unit: Option<EnergyUnit>,

    /// 디버그 로그 출력
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(flatten)]
    pub price: PriceOverrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// 설정 파일의 단가 입력을 덮어쓰는 옵션.
#[derive(ClapArgs, Debug, Default, Clone, Copy)]
pub struct PriceOverrides {
    /// 천연가스 단가 (--gas-price-unit 기준)
    #[arg(long, global = true)]
    pub ng_price: Option<f64>,
    /// 보일러 효율 (0~1]
    #[arg(long, global = true)]
    pub boiler_efficiency: Option<f64>,
    /// 탄소크레딧 가격 [$/ton CO2e]
    #[arg(long, global = true)]
    pub carbon_price: Option<f64>,
    /// 기존 배출계수 [ton CO2e/MMBtu]
    #[arg(long, global = true)]
    pub baseline_emissions: Option<f64>,
    /// 프로젝트 배출계수 [ton CO2e/MMBtu]
    #[arg(long, global = true)]
    pub project_emissions: Option<f64>,
    /// O&M 비용 [$/MMBtu]
    #[arg(long, global = true)]
    pub o_and_m: Option<f64>,
}

impl PriceOverrides {
    /// 지정된 항목만 덮어쓴다. 가스 단가는 이미 MMBtu 기준으로 환산된 값이어야 한다.
    pub fn apply(&self, input: &mut PriceInputs, ng_price_per_mmbtu: Option<f64>) {
        let pairs = [
            (PriceField::NgPrice, ng_price_per_mmbtu),
            (PriceField::BoilerEfficiency, self.boiler_efficiency),
            (PriceField::CarbonPrice, self.carbon_price),
            (PriceField::BaselineEmissions, self.baseline_emissions),
            (PriceField::ProjectEmissions, self.project_emissions),
            (PriceField::OAndM, self.o_and_m),
        ];
        for (field, value) in pairs {
            if let Some(v) = value {
                field.set(input, v);
            }
        }
    }
}

/// 하위 명령.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// 증기 단가와 구성 요소를 계산한다
    Price,
    /// 한 입력을 바꿔가며 증기 단가 변화를 본다
    Sweep {
        #[arg(long, value_enum)]
        field: SweepField,
        /// 분석 값 목록(쉼표 구분). 생략하면 현재 값 기준 기본 범위를 쓴다.
        #[arg(long, value_delimiter = ',')]
        values: Vec<f64>,
    },
    /// 목표 단가를 맞추기 위한 탄소크레딧 가격을 역산한다
    Credit {
        #[command(flatten)]
        offtake: OfftakeArgs,
    },
    /// 목표 IRR을 만족하는 최대 오프테이커 크레딧 배분을 찾는다
    Split {
        #[command(flatten)]
        offtake: OfftakeArgs,
        #[command(flatten)]
        project: ProjectArgs,
        /// 적용할 오프테이커 배분 [%]. 생략하면 추천값(최대 90%)을 쓴다.
        #[arg(long)]
        share_pct: Option<f64>,
    },
    /// 기존 증기 단가 대비 절감액과 크레딧 수익을 나눈다
    Savings {
        /// 프로젝트 증기 단가 [$/MMBtu]. 생략하면 현재 조건의 계산값.
        #[arg(long)]
        steam_price: Option<f64>,
        /// 기존 증기 단가 [$/MMBtu]
        #[arg(long, default_value_t = 7.5)]
        baseline_steam_price: f64,
        /// 연간 크레딧 수익 [$]
        #[arg(long, default_value_t = 50_000.0)]
        credit_per_year: f64,
        /// 절감액 중 오프테이커 몫 [%]
        #[arg(long, default_value_t = 50.0)]
        share_pct: f64,
        #[arg(long)]
        volume: Option<f64>,
        #[command(flatten)]
        project: ProjectArgs,
        /// 연도별 현금흐름 표 출력
        #[arg(long, default_value_t = false)]
        detailed: bool,
    },
}

/// 오프테이커 조건 옵션.
#[derive(ClapArgs, Debug, Default, Clone, Copy)]
pub struct OfftakeArgs {
    /// 목표 증기 단가 [$/MMBtu]
    #[arg(long)]
    pub target_price: Option<f64>,
    /// 연간 증기 사용량 [MMBtu]
    #[arg(long)]
    pub volume: Option<f64>,
}

/// 프로젝트 재무 옵션.
#[derive(ClapArgs, Debug, Default, Clone, Copy)]
pub struct ProjectArgs {
    /// 초기 투자비 [$]
    #[arg(long)]
    pub capital: Option<f64>,
    /// 사업 기간 [년]
    #[arg(long)]
    pub lifetime: Option<u32>,
    /// 할인율 [%]
    #[arg(long)]
    pub discount_pct: Option<f64>,
    /// 목표 IRR [%]
    #[arg(long)]
    pub target_irr_pct: Option<f64>,
}

/// 민감도 분석 대상 항목.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepField {
    NgPrice,
    BoilerEfficiency,
    CarbonPrice,
    BaselineEmissions,
    ProjectEmissions,
    OAndM,
}

impl From<SweepField> for PriceField {
    fn from(value: SweepField) -> Self {
        match value {
            SweepField::NgPrice => PriceField::NgPrice,
            SweepField::BoilerEfficiency => PriceField::BoilerEfficiency,
            SweepField::CarbonPrice => PriceField::CarbonPrice,
            SweepField::BaselineEmissions => PriceField::BaselineEmissions,
            SweepField::ProjectEmissions => PriceField::ProjectEmissions,
            SweepField::OAndM => PriceField::OAndM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_subcommand_parses_percent_flags() {
        let args = Args::try_parse_from([
            "steam_price_toolbox_cli",
            "--lang",
            "en",
            "split",
            "--capital",
            "500000",
            "--target-irr-pct",
            "12",
        ])
        .expect("parse");
        match args.command {
            Some(Command::Split { project, share_pct, .. }) => {
                assert_eq!(project.capital, Some(500_000.0));
                assert_eq!(project.target_irr_pct, Some(12.0));
                assert_eq!(share_pct, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn sweep_values_are_comma_separated() {
        let args = Args::try_parse_from([
            "steam_price_toolbox_cli",
            "sweep",
            "--field",
            "boiler-efficiency",
            "--values",
            "0.7,0.8,0.9",
        ])
        .expect("parse");
        match args.command {
            Some(Command::Sweep { field, values }) => {
                assert_eq!(field, SweepField::BoilerEfficiency);
                assert_eq!(values, vec![0.7, 0.8, 0.9]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn overrides_only_touch_given_fields() {
        let overrides = PriceOverrides {
            o_and_m: Some(1.0),
            ..PriceOverrides::default()
        };
        let mut input = PriceInputs::default();
        overrides.apply(&mut input, None);
        assert_eq!(input.o_and_m_cost, 1.0);
        assert_eq!(input.ng_price_per_mmbtu, 4.0);
    }
}
