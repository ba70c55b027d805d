//! Panic handling
//!
//! A panic leaves raw mode and the alternate screen behind, so the hook
//! restores the terminal before anything is printed. Release builds write a
//! human-panic crash dump; debug builds print a full backtrace.

use std::panic::{self, PanicHookInfo};
use std::process;

use color_eyre::config::{HookBuilder, PanicHook};
use color_eyre::eyre::Result;

use crate::infrastructure::tui::real::restore_terminal;

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "The dashboard crashed. Please report it at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |info| {
        if let Err(err) = restore_terminal() {
            tracing::error!("Unable to restore terminal: {err:?}");
        }
        report(&panic_hook, info);
        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

fn report(panic_hook: &PanicHook, info: &PanicHookInfo<'_>) {
    let report = panic_hook.panic_report(info).to_string();
    tracing::error!(
        report = %strip_ansi_escapes::strip_str(&report),
        "panic"
    );

    #[cfg(not(debug_assertions))]
    {
        use human_panic::{handle_dump, print_msg, Metadata};
        let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
            .homepage(env!("CARGO_PKG_HOMEPAGE"));
        let dump = handle_dump(&meta, info);
        if let Err(err) = print_msg(dump, &meta) {
            eprintln!("human-panic: {err}");
        }
        eprintln!("{report}");
    }

    #[cfg(debug_assertions)]
    {
        use better_panic::{Settings, Verbosity};
        Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(Verbosity::Full)
            .create_panic_handler()(info);
    }
}
