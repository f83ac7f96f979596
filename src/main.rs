use std::panic::{self, AssertUnwindSafe};

use secbadge::config::load_config;
use secbadge::driver::{report_failure, run};
use secbadge::formatting::{formatter_for, FormattingConfig};
use secbadge::observability::{
    init_logging, install_panic_hook, panic_hook::payload_message, set_phase, BadgePhase,
};

// Failures are reported on stdout and never change the exit status.
fn main() {
    init_logging();
    install_panic_hook();

    let fmt = formatter_for(FormattingConfig::from_env());
    let config = {
        let _phase = set_phase(BadgePhase::LoadingConfig);
        std::env::current_dir()
            .map(|dir| load_config(&dir))
            .unwrap_or_default()
    };

    let mut stdout = std::io::stdout().lock();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        run(&config, fmt.as_ref(), &mut stdout)
    }));

    let result = match outcome {
        Ok(result) => result,
        Err(payload) => Err(anyhow::anyhow!(
            "badge generation panicked: {}",
            payload_message(payload.as_ref())
        )),
    };

    if let Err(err) = result {
        report_failure(&err, fmt.as_ref(), &mut stdout);
    }
}
