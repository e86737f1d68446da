use clap::Parser;
use steam_price_toolbox::{app, cli::Args, i18n, logging};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);
    let lang = i18n::resolve_language(args.lang.as_deref(), None);
    let tr = i18n::Translator::new(&lang);
    if let Err(err) = app::run(args) {
        eprintln!("{}: {}", tr.t(i18n::keys::ERROR_PREFIX), err.localized(&tr));
        std::process::exit(1);
    }
}
