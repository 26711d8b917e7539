use super::*;

use std::io::Stderr;
use ::log::{Log, Record, Metadata, SetLoggerError};

const TARGET_PREFIX: &str = "dhall_kernel";

struct StderrLogger {
    stderr: Stderr,
}

lazy_static! {
    static ref LOGGER: StderrLogger = StderrLogger {
        stderr: io::stderr(),
    };
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(TARGET_PREFIX)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut stderr = self.stderr.lock();
        let _ = writeln!(stderr, "{} {} - {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = self.stderr.lock().flush();
    }
}

/// Installs the crate's stderr logger at the level the config asks for. Fails if some logger is
/// already installed.
pub fn init(config: &Config) -> Result<(), SetLoggerError> {
    ::log::set_logger(&*LOGGER)?;
    ::log::set_max_level(config.log_level);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_our_targets_are_enabled() {
        let ours = Metadata::builder().target("dhall_kernel::typechecker").build();
        let theirs = Metadata::builder().target("some_other_crate").build();
        assert!(LOGGER.enabled(&ours));
        assert!(!LOGGER.enabled(&theirs));
    }

    #[test]
    fn second_init_fails() {
        let config = Config::default();
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
